use std::path::{Path, PathBuf};

use limitform::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "limitform.log";

fn env_filter(logging: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,limitform={}", logging.level)))
}

/// Log directory: `logging.dir`, then LIMITFORM_LOG_DIR, then the platform data dir
fn log_dir(logging: &LoggingConfig) -> Option<PathBuf> {
    logging
        .dir
        .clone()
        .or_else(|| std::env::var("LIMITFORM_LOG_DIR").ok())
        .map(PathBuf::from)
        .or_else(|| dirs::data_local_dir().map(|d| d.join("limitform").join("logs")))
}

/// `tracing_appender::rolling::daily` panics if it can't create the initial
/// log file, so writability is checked up front.
fn preflight(dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)?;
    let test_path = dir.join(".limitform_write_test");
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&test_path)?;
    let _ = std::fs::remove_file(&test_path);
    Ok(())
}

/// Logging for the terminal UI: the screen belongs to the form, so events
/// go to a daily rolling file only. Returns the directory in use.
pub fn init_logging(logging: &LoggingConfig) -> Option<PathBuf> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let dir = log_dir(logging)?;
    if let Err(e) = preflight(&dir) {
        eprintln!(
            "Warning: Could not write to log directory {} ({}), file logging disabled",
            dir.display(),
            e
        );
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Keep the guard alive for the rest of the process
    Box::leak(Box::new(guard));

    let registry = tracing_subscriber::registry().with(env_filter(logging));
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false) // No color codes in file
        .with_target(true);

    let result = if logging.json {
        registry.with(layer.json()).try_init()
    } else {
        registry.with(layer).try_init()
    };

    result.ok().map(|_| dir)
}

/// Minimal logging for headless commands, on stderr
pub fn init_logging_simple(logging: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(logging))
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
