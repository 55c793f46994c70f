//! Tracing setup for nabla hosts and tests.
//!
//! Filter resolution order: `NABLA_LOG` (expanded to the nabla crates when
//! it is a bare level like `debug`), then `RUST_LOG` as-is, then a default
//! of `warn` globally with `info` for the nabla crates.
//!
//! Hosts that want a log file pass a path to [`init`]; without one, output
//! goes to stdout only. The default file location is
//! `<data_local_dir>/nabla/logs/nabla-<pid>.log`.

use std::{env, path::PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

type InitError = Box<dyn std::error::Error + Send + Sync>;

/// Keeps the background file writer alive; drop it to flush and stop.
pub struct LogGuard {
    _file_guard: WorkerGuard,
    pub log_file: PathBuf,
}

/// Initialize logging with a file target, plus stdout when a filter env
/// var is set or in debug builds. Call once per process.
pub fn init(log_file: Option<PathBuf>) -> Result<LogGuard, InitError> {
    let (dir, filename) = resolve_log_path(log_file);
    std::fs::create_dir_all(&dir).ok();

    let appender = tracing_appender::rolling::never(&dir, &filename);
    let (writer, file_guard) = tracing_appender::non_blocking(appender);
    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_filter(filter());

    let stdout_enabled =
        env::var("NABLA_LOG").is_ok() || env::var("RUST_LOG").is_ok() || cfg!(debug_assertions);
    let stdout_layer = stdout_enabled.then(|| fmt::layer().with_filter(filter()));

    Registry::default()
        .with(file_layer)
        .with(stdout_layer)
        .try_init()?;

    Ok(LogGuard {
        _file_guard: file_guard,
        log_file: dir.join(filename),
    })
}

/// Stdout-only initialization for tests. Safe to call from every test;
/// repeat calls are ignored.
pub fn test() {
    let _ = fmt().with_env_filter(filter()).try_init();
}

fn resolve_log_path(log_file: Option<PathBuf>) -> (PathBuf, String) {
    let filename = format!("nabla-{}.log", std::process::id());
    if let Some(path) = log_file {
        if path.extension().is_some() {
            let dir = path
                .parent()
                .map_or_else(|| PathBuf::from("."), PathBuf::from);
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or(filename);
            return (dir, name);
        }
        return (path, filename);
    }
    let dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nabla")
        .join("logs");
    (dir, filename)
}

fn filter() -> EnvFilter {
    if let Ok(nabla_log) = env::var("NABLA_LOG") {
        // Bare levels expand to the nabla crates; module syntax passes
        // through untouched.
        if nabla_log.contains('=') || nabla_log.contains(',') {
            return EnvFilter::new(nabla_log);
        }
        return EnvFilter::new(format!(
            "warn,nabla={nabla_log},nabla_mathlist={nabla_log}"
        ));
    }
    if let Ok(rust_log) = env::var("RUST_LOG") {
        return EnvFilter::new(rust_log);
    }
    EnvFilter::new("warn,nabla=info,nabla_mathlist=info")
}
