//! Tracing initialization: fmt layer with full format (level, target, span,
//! all fields), optionally teeing the same output to a log file.

use std::fs::OpenOptions;
use std::io;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::FmtSpan, fmt::writer::MakeWriterExt, layer::SubscriberExt,
    util::SubscriberInitExt, EnvFilter, Registry,
};

/// Installs the global tracing subscriber.
/// Reads the log level from RUST_LOG (default `info`); load .env before
/// calling this or RUST_LOG from the file will not apply. When
/// `log_file_path` is set, output goes to both stdout and the file.
pub fn init_tracing(log_file_path: Option<&str>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = Registry::default().with(env_filter);

    match log_file_path {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let file = Arc::new(file);
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_writer(io::stdout.and(file))
                .with_span_events(FmtSpan::CLOSE)
                .with_target(true)
                .with_level(true);
            registry
                .with(fmt_layer)
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;
        }
        None => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_span_events(FmtSpan::CLOSE)
                .with_target(true)
                .with_level(true);
            registry
                .with(fmt_layer)
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;
        }
    }

    Ok(())
}
