// Logging
// tracing subscriber setup; the TUI must never log to the terminal it draws on

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use color_eyre::{eyre::WrapErr, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// With a log file, everything goes there. Without one, the interactive view
/// installs nothing and plain commands log to stderr.
pub fn init(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .wrap_err_with(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if interactive => {}
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .compact()
                .init();
        }
    }
    Ok(())
}
