//! Tests for student API handlers.
//!
//! Most cases run against the in-memory repository seeded with one student;
//! storage failures are simulated with a mocked repository.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test};
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{MockStudentRepository, StudentRepository, StudentRepositoryError};
use crate::domain::{SharedSecret, StudentDraft, StudentRecordsService};
use crate::inbound::http::api_v1_scope;
use crate::middleware::{TRACE_ID_HEADER, Trace};
use crate::outbound::memory::{InMemoryCampusRepository, InMemoryStudentRepository};

const TOKEN: &str = "123";

async fn seeded_repository() -> Arc<InMemoryStudentRepository> {
    let repo = InMemoryStudentRepository::new();
    let seed = StudentDraft::try_from_parts(
        "Joao da Silva",
        Some("joao@email.com".to_owned()),
        Some("Rua 1".to_owned()),
    )
    .expect("valid seed");
    repo.insert(&seed).await.expect("seed insert");
    Arc::new(repo)
}

fn test_app(
    repository: Arc<dyn StudentRepository>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let secret = SharedSecret::new(TOKEN).expect("valid secret");
    let state = HttpState::from_service(
        StudentRecordsService::new(repository, secret),
        Arc::new(InMemoryCampusRepository::default()),
    );
    App::new()
        .wrap(Trace)
        .app_data(web::Data::new(state))
        .service(api_v1_scope())
}

async fn into_parts<B: MessageBody>(response: ServiceResponse<B>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = actix_test::read_body(response).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };
    (status, body)
}

/// Send one request to a freshly seeded app.
async fn send(request: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(seeded_repository().await)).await;
    into_parts(actix_test::call_service(&app, request.to_request()).await).await
}

fn with_token(request: actix_test::TestRequest, token: Option<&str>) -> actix_test::TestRequest {
    match token {
        Some(token) => request.insert_header(("Authorization", token)),
        None => request,
    }
}

fn seed_json() -> Value {
    json!({
        "codigo": 1,
        "nome": "Joao da Silva",
        "email": "joao@email.com",
        "endereco": "Rua 1"
    })
}

fn jose() -> Value {
    json!({
        "nome": "Jose Sousa",
        "email": "josesousa@email.com",
        "endereco": "Rua da Felicidade, 1"
    })
}

#[rstest]
#[actix_web::test]
async fn list_returns_all_students() {
    let (status, body) = send(actix_test::TestRequest::get().uri("/api/v1/students/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([seed_json()]));
}

#[rstest]
#[actix_web::test]
async fn get_returns_the_record() {
    let (status, body) = send(actix_test::TestRequest::get().uri("/api/v1/students/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, seed_json());
}

#[rstest]
#[case("/api/v1/students/100")]
#[case("/api/v1/students/abc")]
#[case("/api/v1/students/0")]
#[case("/api/v1/students/2147483648")]
#[actix_web::test]
async fn get_unknown_code_is_not_found(#[case] uri: &str) {
    let (status, body) = send(actix_test::TestRequest::get().uri(uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "erro": "NAO_ENCONTRADO" }));
}

#[rstest]
#[actix_web::test]
async fn create_assigns_the_next_code() {
    let request = with_token(
        actix_test::TestRequest::post()
            .uri("/api/v1/students/")
            .set_json(jose()),
        Some(TOKEN),
    );
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "codigo": 2,
            "nome": "Jose Sousa",
            "email": "josesousa@email.com",
            "endereco": "Rua da Felicidade, 1"
        })
    );
}

#[rstest]
#[actix_web::test]
async fn created_records_can_be_read_back() {
    let app = actix_test::init_service(test_app(seeded_repository().await)).await;
    let create = with_token(
        actix_test::TestRequest::post()
            .uri("/api/v1/students/")
            .set_json(json!({ "nome": "Maria" })),
        Some(TOKEN),
    );
    let (_, created) = into_parts(actix_test::call_service(&app, create.to_request()).await).await;

    let read = actix_test::TestRequest::get()
        .uri("/api/v1/students/2")
        .to_request();
    let (status, body) = into_parts(actix_test::call_service(&app, read).await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);
    assert_eq!(
        body,
        json!({ "codigo": 2, "nome": "Maria", "email": null, "endereco": null })
    );
}

#[rstest]
#[case(None)]
#[case(Some("456"))]
#[case(Some("Bearer 123"))]
#[actix_web::test]
async fn create_requires_the_exact_token(#[case] token: Option<&str>) {
    let request = with_token(
        actix_test::TestRequest::post()
            .uri("/api/v1/students/")
            .set_json(json!({ "teste": 123 })),
        token,
    );
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "erro": "NAO_AUTORIZADO" }));
}

#[rstest]
#[case(json!({ "teste": 123 }))]
#[case(json!({ "nome": "" }))]
#[case(json!({ "nome": "   " }))]
#[case(json!({ "email": "jose@email.com" }))]
#[case(json!({ "nome": "Jose", "email": "josesousa.com" }))]
#[case(json!({ "nome": 42 }))]
#[case(json!(["nome"]))]
#[actix_web::test]
async fn create_rejects_invalid_payloads(#[case] payload: Value) {
    let request = with_token(
        actix_test::TestRequest::post()
            .uri("/api/v1/students/")
            .set_json(payload),
        Some(TOKEN),
    );
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "erro": "ERRO_VALIDACAO" }));
}

#[rstest]
#[case("")]
#[case("nome=Jose")]
#[case(r#"{"nome":"Jose"}"#)]
#[actix_web::test]
async fn create_rejects_bodies_that_are_not_json(#[case] raw: &'static str) {
    let request = with_token(
        actix_test::TestRequest::post()
            .uri("/api/v1/students/")
            .insert_header(("Content-Type", "text/plain"))
            .set_payload(raw),
        Some(TOKEN),
    );
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "erro": "ERRO_VALIDACAO" }));
}

#[rstest]
#[actix_web::test]
async fn update_overwrites_the_record() {
    let request = with_token(
        actix_test::TestRequest::put()
            .uri("/api/v1/students/1")
            .set_json(json!({ "nome": "Joao Sousa", "endereco": "Rua 2" })),
        Some(TOKEN),
    );
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "codigo": 1, "nome": "Joao Sousa", "email": null, "endereco": "Rua 2" })
    );
}

#[rstest]
#[case("100", Some(TOKEN), jose(), StatusCode::NOT_FOUND, "NAO_ENCONTRADO")]
#[case("100", Some(TOKEN), json!({ "email": "josesousa.com" }), StatusCode::BAD_REQUEST, "ERRO_VALIDACAO")]
#[case("100", None, jose(), StatusCode::UNAUTHORIZED, "NAO_AUTORIZADO")]
#[case("100", Some("456"), json!({ "teste": 1 }), StatusCode::UNAUTHORIZED, "NAO_AUTORIZADO")]
#[case("0", Some(TOKEN), jose(), StatusCode::NOT_FOUND, "NAO_ENCONTRADO")]
#[case("0", Some(TOKEN), json!({ "teste": 1 }), StatusCode::BAD_REQUEST, "ERRO_VALIDACAO")]
#[case("0", None, json!({ "nome": "X" }), StatusCode::UNAUTHORIZED, "NAO_AUTORIZADO")]
#[case("-1", None, jose(), StatusCode::UNAUTHORIZED, "NAO_AUTORIZADO")]
#[case("2147483648", None, jose(), StatusCode::UNAUTHORIZED, "NAO_AUTORIZADO")]
#[case("2147483648", Some(TOKEN), jose(), StatusCode::NOT_FOUND, "NAO_ENCONTRADO")]
#[actix_web::test]
async fn update_of_missing_record_reports_in_precedence_order(
    #[case] segment: &str,
    #[case] token: Option<&str>,
    #[case] payload: Value,
    #[case] status: StatusCode,
    #[case] code: &str,
) {
    let request = with_token(
        actix_test::TestRequest::put()
            .uri(&format!("/api/v1/students/{segment}"))
            .set_json(payload),
        token,
    );
    let (actual, body) = send(request).await;
    assert_eq!(actual, status);
    assert_eq!(body, json!({ "erro": code }));
}

#[rstest]
#[actix_web::test]
async fn update_with_invalid_email_is_rejected() {
    let request = with_token(
        actix_test::TestRequest::put()
            .uri("/api/v1/students/1")
            .set_json(json!({ "email": "josesousa.com" })),
        Some(TOKEN),
    );
    let (status, body) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "erro": "ERRO_VALIDACAO" }));
}

#[rstest]
#[actix_web::test]
async fn delete_removes_the_record() {
    let app = actix_test::init_service(test_app(seeded_repository().await)).await;
    let remove = with_token(
        actix_test::TestRequest::delete().uri("/api/v1/students/1"),
        Some(TOKEN),
    );
    let response = actix_test::call_service(&app, remove.to_request()).await;
    let (status, body) = into_parts(response).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let read = actix_test::TestRequest::get()
        .uri("/api/v1/students/1")
        .to_request();
    let (status, body) = into_parts(actix_test::call_service(&app, read).await).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "erro": "NAO_ENCONTRADO" }));
}

#[rstest]
#[case(Some(TOKEN), "/api/v1/students/100", StatusCode::NOT_FOUND)]
#[case(None, "/api/v1/students/1", StatusCode::UNAUTHORIZED)]
#[case(Some("456"), "/api/v1/students/100", StatusCode::UNAUTHORIZED)]
#[case(None, "/api/v1/students/0", StatusCode::UNAUTHORIZED)]
#[case(None, "/api/v1/students/-1", StatusCode::UNAUTHORIZED)]
#[case(None, "/api/v1/students/2147483648", StatusCode::UNAUTHORIZED)]
#[case(Some(TOKEN), "/api/v1/students/0", StatusCode::NOT_FOUND)]
#[case(Some(TOKEN), "/api/v1/students/2147483648", StatusCode::NOT_FOUND)]
#[case(None, "/api/v1/students/abc", StatusCode::NOT_FOUND)]
#[actix_web::test]
async fn delete_failures(
    #[case] token: Option<&str>,
    #[case] uri: &str,
    #[case] status: StatusCode,
) {
    let (actual, _) = send(with_token(actix_test::TestRequest::delete().uri(uri), token)).await;
    assert_eq!(actual, status);
}

fn failing_repository() -> Arc<dyn StudentRepository> {
    let mut repo = MockStudentRepository::new();
    repo.expect_list()
        .returning(|| Err(StudentRepositoryError::connection("refused")));
    repo.expect_find_by_code()
        .returning(|_| Err(StudentRepositoryError::connection("refused")));
    repo.expect_insert()
        .returning(|_| Err(StudentRepositoryError::query("relation does not exist")));
    repo.expect_update()
        .returning(|_, _| Err(StudentRepositoryError::query("relation does not exist")));
    repo.expect_delete()
        .returning(|_| Err(StudentRepositoryError::query("relation does not exist")));
    Arc::new(repo)
}

#[rstest]
#[case(actix_test::TestRequest::get().uri("/api/v1/students/"))]
#[case(actix_test::TestRequest::get().uri("/api/v1/students/1"))]
#[case(with_token(actix_test::TestRequest::post().uri("/api/v1/students/").set_json(jose()), Some(TOKEN)))]
#[case(with_token(actix_test::TestRequest::put().uri("/api/v1/students/1").set_json(jose()), Some(TOKEN)))]
#[case(with_token(actix_test::TestRequest::delete().uri("/api/v1/students/1"), Some(TOKEN)))]
#[actix_web::test]
async fn store_failures_are_internal_errors(#[case] request: actix_test::TestRequest) {
    let app = actix_test::init_service(test_app(failing_repository())).await;
    let (status, body) = into_parts(actix_test::call_service(&app, request.to_request()).await).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "erro": "ERRO_INTERNO" }));
}

#[rstest]
#[actix_web::test]
async fn responses_carry_a_trace_id() {
    let app = actix_test::init_service(test_app(seeded_repository().await)).await;
    let request = actix_test::TestRequest::get()
        .uri("/api/v1/students/100")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace-id header present")
        .to_str()
        .expect("trace-id is ASCII");
    assert!(uuid::Uuid::parse_str(header).is_ok());
}
