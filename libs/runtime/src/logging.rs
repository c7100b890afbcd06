use crate::config::LoggingConfig;
use anyhow::{anyhow, Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the global tracing subscriber from the logging config.
///
/// Returns the worker guard for the file writer when file output is
/// configured; the caller must keep it alive for the process lifetime or
/// buffered log lines are dropped on shutdown.
pub fn init(cfg: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let console = fmt::layer()
        .with_target(true)
        .with_filter(parse_filter(&cfg.console_level)?);

    let (file_layer, guard) = match &cfg.file {
        Some(file) => {
            let path = Path::new(file);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "filmorate.log".to_string());
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, name));
            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(parse_filter(&cfg.file_level)?);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {e}"))?;

    Ok(guard)
}

fn parse_filter(level: &str) -> Result<EnvFilter> {
    let directive = if level.trim().is_empty() {
        "info"
    } else {
        level.trim()
    };
    EnvFilter::try_new(directive)
        .with_context(|| format!("Invalid log level directive '{directive}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_levels_and_directives() {
        assert!(parse_filter("debug").is_ok());
        assert!(parse_filter("off").is_ok());
        assert!(parse_filter("info,films=trace").is_ok());
        assert!(parse_filter("").is_ok());
    }

    #[test]
    fn rejects_garbage_directives() {
        assert!(parse_filter("not a = level !").is_err());
    }
}
