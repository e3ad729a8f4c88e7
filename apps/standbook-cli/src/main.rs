//! # standbook
//!
//! Prints a stand's profit report.
//!
//! ## Usage
//! ```bash
//! # Irwin's Lemonade demo
//! cargo run -p standbook-cli
//!
//! # Own stand, kept across runs
//! cargo run -p standbook-cli -- --config ./stand.toml --snapshot ./stand.json
//!
//! # Debug logging
//! RUST_LOG=debug cargo run -p standbook-cli -- --json
//! ```

use std::env;
use std::process::ExitCode;

use standbook_cli::config::CliConfig;
use standbook_cli::error::CliResult;
use standbook_cli::{parse_args, run, USAGE};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "standbook failed");
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn execute() -> CliResult<()> {
    let options = parse_args(env::args().skip(1))?;
    if options.show_help {
        println!("{}", USAGE);
        return Ok(());
    }

    let mut config = CliConfig::load(options.config_path.clone())?;
    options.apply_to(&mut config);

    let outcome = run(&config)?;
    println!("{}", outcome.render()?);
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: INFO, DEBUG for standbook crates
///
/// Logs go to stderr so stdout carries only the report.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,standbook_core=debug,standbook_cli=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
