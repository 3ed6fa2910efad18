/// Output: the stdout data sink and the stderr diagnostic logger.
use std::io::{IsTerminal, Write};

use tracing_subscriber::EnvFilter;

use crate::export::ExportError;

/// Write the fully rendered text to stdout as-is, then flush.
///
/// # Errors
///
/// Returns `ExportError::Io` if stdout is closed or the write fails.
pub fn write_stdout(rendered: &str) -> Result<(), ExportError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Install the stderr logger. `RUST_LOG` overrides the default `warn` level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}
