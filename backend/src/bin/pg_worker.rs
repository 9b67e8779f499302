//! Privileged helper for the embedded PostgreSQL test cluster.
//!
//! When the integration tests run as root, `pg_embedded_setup_unpriv` hands
//! each cluster operation to this binary as `pg_worker <setup|start|stop>
//! <payload.json>`. The payload carries the PostgreSQL settings and the
//! environment the server processes must see.
//!
//! The environment is applied by re-launching this binary with the variables
//! set on the child command, so the process never mutates its own
//! environment.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Context, Report, Result, eyre};
use pg_embedded_setup_unpriv::worker::{PlainSecret, WorkerPayload};
use postgresql_embedded::PostgreSQL;
use tokio::runtime::Builder;

/// Set on the re-launched child once the payload environment is in place.
const ENV_APPLIED_MARKER: &str = "STUDENTS_PG_WORKER_ENV_APPLIED";

#[derive(Debug, Parser)]
#[command(name = "pg_worker", about = "Run one embedded PostgreSQL lifecycle step")]
struct Cli {
    /// Lifecycle step to run.
    #[arg(value_enum)]
    operation: Operation,
    /// JSON payload describing settings and environment.
    config: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Operation {
    Setup,
    Start,
    Stop,
}

fn load_payload(path: &Path) -> Result<WorkerPayload> {
    let raw = fs::read(path).with_context(|| format!("reading worker payload {path:?}"))?;
    serde_json::from_slice(&raw).with_context(|| format!("parsing worker payload {path:?}"))
}

fn environment_applied() -> bool {
    std::env::var_os(ENV_APPLIED_MARKER).is_some()
}

/// Re-run this binary with the payload environment and mirror its status.
fn relaunch_with(environment: Vec<(String, Option<PlainSecret>)>) -> Result<()> {
    let exe = std::env::current_exe().wrap_err("locating pg_worker executable")?;
    let mut command = Command::new(exe);
    command.args(std::env::args_os().skip(1));
    for (key, value) in environment {
        match value {
            Some(value) => command.env(key, value.expose()),
            None => command.env_remove(key),
        };
    }
    command.env(ENV_APPLIED_MARKER, "1");

    let status = command.status().wrap_err("re-launching pg_worker")?;
    if status.success() {
        Ok(())
    } else {
        Err(eyre!("pg_worker child exited with {status}"))
    }
}

fn execute(operation: Operation, payload: WorkerPayload) -> Result<()> {
    let settings = payload
        .settings
        .into_settings()
        .map_err(|err| Report::new(err).wrap_err("rebuilding postgres settings"))?;
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("building worker runtime")?;

    let mut postgres = PostgreSQL::new(settings);
    runtime
        .block_on(async move {
            match operation {
                Operation::Setup => postgres.setup().await,
                Operation::Start => postgres.start().await,
                Operation::Stop => postgres.stop().await,
            }
        })
        .with_context(|| format!("postgres {operation:?} failed"))
}

fn run(cli: &Cli) -> Result<()> {
    let payload = load_payload(&cli.config)?;
    if !environment_applied() && !payload.environment.is_empty() {
        return relaunch_with(payload.environment);
    }
    execute(cli.operation, payload)
}

fn main() -> Result<()> {
    color_eyre::install()?;
    run(&Cli::parse())
}
