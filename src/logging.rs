use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

static TRACING_INIT: Once = Once::new();

/// Send tracing output to `path`, appending. Stdout belongs to the TUI, so
/// nothing is logged to the terminal. Filter defaults to `quickbudget=info`
/// and can be overridden with `RUST_LOG`.
pub(crate) fn init(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("quickbudget=info"));

        fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    });
    Ok(())
}
