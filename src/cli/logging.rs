//! Tracing subscriber setup for the command-line tool.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use super::commands::Cli;

/// Install a stderr subscriber: WARN by default, DEBUG with `--verbose`, ERROR with `--quiet`
///
/// # Errors
///
/// Returns an error if a global subscriber is already set.
pub fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
