//! gh-compare: list the commits between two references of a GitHub repository
//!
//! Commit lines go to stdout; logs go to stderr.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use gh_compare::config::Config;
use tracing::error;

fn main() -> ExitCode {
    let config = Config::parse();

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    let mut stdout = std::io::stdout().lock();
    match gh_compare::run(&config, &mut stdout) {
        Ok(summary) if summary.failed => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
