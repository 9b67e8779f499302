//! Apply or revert the embedded schema migrations.
//!
//! ```text
//! DATABASE_URL=postgres://localhost/students migrate up
//! migrate --database-url postgres://localhost/students redo
//! ```

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Context, Result};
use student_records::outbound::persistence::migrations;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Parser)]
#[command(name = "migrate", about = "Manage the student records schema")]
struct Cli {
    /// PostgreSQL connection URL.
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, Subcommand)]
enum Command {
    /// Apply every pending migration.
    Up,
    /// Revert the most recent migration.
    Down,
    /// Revert the most recent migration and apply it again.
    Redo,
}

fn run(cli: &Cli) -> Result<Vec<String>> {
    let url = cli.database_url.as_str();
    match cli.command {
        Command::Up => migrations::run_pending(url).wrap_err("applying migrations"),
        Command::Down => migrations::revert_last(url)
            .map(|version| vec![version])
            .wrap_err("reverting migration"),
        Command::Redo => migrations::redo(url).wrap_err("redoing migration"),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init() {
        warn!(error = %e, "tracing init failed");
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();
    let cli = Cli::parse();
    let versions = run(&cli)?;
    report(cli.command, &versions);
    Ok(())
}

fn report(command: Command, versions: &[String]) {
    if versions.is_empty() {
        info!(?command, "nothing to do");
    }
    for version in versions {
        info!(?command, %version, "migration step finished");
    }
}
