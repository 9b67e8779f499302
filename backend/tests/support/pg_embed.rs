//! Bootstrapping the embedded PostgreSQL cluster for integration tests.
//!
//! `pg-embed-setup-unpriv` installs binaries and data under `/var/tmp` by
//! default, which sandboxed runners may not allow. When `PG_RUNTIME_DIR` or
//! `PG_DATA_DIR` is unset, both are pointed at fresh directories under the
//! cargo target directory for the duration of the bootstrap. Runs as root
//! need the `pg_worker` helper, so `PG_EMBEDDED_WORKER` defaults to the
//! binary cargo built alongside the tests. Environment mutation is
//! serialised so parallel tests do not race.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use pg_embedded_setup_unpriv::TestCluster;
use uuid::Uuid;

static BOOTSTRAP_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const WORKER_VAR: &str = "PG_EMBEDDED_WORKER";

/// Retries after the first attempt when the failure looks transient.
const MAX_RETRIES: u32 = 3;

/// First backoff delay; doubles on each retry.
const RETRY_DELAY_MS: u64 = 500;

fn pg_embed_target_dir() -> PathBuf {
    if let Some(target_dir) = std::env::var_os("CARGO_TARGET_DIR") {
        return PathBuf::from(target_dir).join("pg-embed");
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("target")
        .join("pg-embed")
}

fn create_unique_dirs() -> Result<(PathBuf, PathBuf), std::io::Error> {
    let base = pg_embed_target_dir().join(format!(
        "students-{}-{}",
        std::process::id(),
        Uuid::new_v4()
    ));
    let runtime_dir = base.join("install");
    let data_dir = base.join("data");
    std::fs::create_dir_all(&runtime_dir)?;
    std::fs::create_dir_all(&data_dir)?;
    Ok((runtime_dir, data_dir))
}

/// Download and network failures are worth another attempt.
fn is_transient_error(err: &str) -> bool {
    const TRANSIENT: [&str; 7] = [
        "error decoding response body",
        "connection reset",
        "connection refused",
        "timed out",
        "temporarily unavailable",
        "dns error",
        "failed to lookup",
    ];
    let lowered = err.to_lowercase();
    TRANSIENT.iter().any(|pattern| lowered.contains(pattern))
}

/// Start a [`TestCluster`], retrying transient download failures.
pub fn test_cluster() -> Result<TestCluster, String> {
    let _bootstrap_guard = BOOTSTRAP_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner());

    let mut overrides: Vec<(&str, Option<String>)> = Vec::new();
    if std::env::var_os("PG_RUNTIME_DIR").is_none() || std::env::var_os("PG_DATA_DIR").is_none() {
        let (runtime_dir, data_dir) = create_unique_dirs().map_err(|err| err.to_string())?;
        overrides.push((
            "PG_RUNTIME_DIR",
            Some(runtime_dir.to_string_lossy().into_owned()),
        ));
        overrides.push(("PG_DATA_DIR", Some(data_dir.to_string_lossy().into_owned())));
    }
    if std::env::var_os(WORKER_VAR).is_none() {
        overrides.push((WORKER_VAR, Some(env!("CARGO_BIN_EXE_pg_worker").to_owned())));
    }
    let _env_guard = env_lock::lock_env(overrides);

    let mut last_error = String::new();
    for attempt in 0..=MAX_RETRIES {
        match TestCluster::new() {
            Ok(cluster) => return Ok(cluster),
            Err(err) => {
                last_error = format!("{err:?}");
                if attempt == MAX_RETRIES || !is_transient_error(&last_error) {
                    break;
                }
                let delay = Duration::from_millis(RETRY_DELAY_MS * (1 << attempt));
                eprintln!(
                    "pg-embed: attempt {}/{} failed, retrying in {delay:?}: {last_error}",
                    attempt + 1,
                    MAX_RETRIES + 1,
                );
                std::thread::sleep(delay);
            }
        }
    }
    Err(last_error)
}

#[cfg(test)]
mod tests {
    //! Unit checks for retry classification.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Connection reset by peer", true)]
    #[case("request timed out", true)]
    #[case("permission denied", false)]
    fn transient_errors_are_recognised(#[case] message: &str, #[case] expected: bool) {
        assert_eq!(is_transient_error(message), expected);
    }
}
