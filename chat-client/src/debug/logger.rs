//! File-based logging initialization

use super::config::DebugConfig;
use std::fs;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
///
/// Sets up:
/// - Daily log rotation under `CHAT_LOG_DIR` (default `logs/`)
/// - Non-blocking writes so the UI thread never waits on disk
/// - Optional stderr mirror (`CHAT_LOG_STDERR=1`); stderr alone when the log
///   directory cannot be created
/// - Panic hook that records the panic location and message
///
/// Safe to call more than once; later calls are ignored by the global
/// subscriber.
pub fn init() {
    let config = DebugConfig::from_env();

    let (file_layer, guard) = match file_writer(&config) {
        Some((writer, guard)) => {
            let layer = fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new("chat_client=info,warn"));

    let log_to_stderr = stderr_enabled(&config, file_layer.is_some());
    let stderr_layer = log_to_stderr.then(|| fmt::layer().with_writer(std::io::stderr).with_target(false));

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init();

    if installed.is_err() {
        // Another subscriber already owns the process; keep it.
        return;
    }

    tracing::info!(
        log_file = %config.log_file().display(),
        file_logging = guard.is_some(),
        log_level = %config.log_level,
        stderr = log_to_stderr,
        verbose = config.is_debug_enabled(),
        debug_mode = super::is_debug_mode(),
        "Logging initialized"
    );

    setup_panic_hook();

    // Keep the writer guard alive for the lifetime of the program
    if let Some(guard) = guard {
        std::mem::forget(guard);
    }
}

/// Non-blocking writer for the daily rolling log file, or `None` when the
/// log directory cannot be created.
fn file_writer(config: &DebugConfig) -> Option<(NonBlocking, WorkerGuard)> {
    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!(
            "Warning: Failed to create log directory {}: {}; logging to stderr only",
            config.log_dir.display(),
            e
        );
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, &config.log_file_name);
    Some(tracing_appender::non_blocking(file_appender))
}

/// Stderr carries the logs whenever there is no file to write them to.
fn stderr_enabled(config: &DebugConfig, has_file: bool) -> bool {
    config.log_to_stderr || !has_file
}

/// Set up panic hook to log panics with full context
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(
            location = %location,
            message = %message,
            "Application panic"
        );

        default_panic(panic_info);
    }));
}
