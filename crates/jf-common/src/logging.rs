//! Process-wide tracing setup shared by the jobfit binaries.
//!
//! Defaults to human-readable stdout logging. When `JF_LOG_DIR` is set,
//! output switches to a daily-rotated `<dir>/<app>.YYYY-MM-DD.log` file
//! with ANSI colors disabled. `RUST_LOG` controls filtering (default
//! `info`).

use std::panic;
use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

// Keeps the non-blocking writer thread alive for the process lifetime.
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn flag_enabled(value: &str) -> bool {
    matches!(value.trim(), "1" | "true" | "TRUE" | "True" | "yes" | "on")
}

fn env_flag(name: &str) -> bool {
    std::env::var(name).map(|v| flag_enabled(&v)).unwrap_or(false)
}

/// Route panics through the log stream so batch runs leave a record even
/// when stderr is not captured. Repeated installs are no-ops.
///
/// `JF_LOG_INCLUDE_BACKTRACE=1` additionally chains to the default hook,
/// which honors `RUST_BACKTRACE`.
pub fn install_tracing_panic_hook(app_name: &'static str) {
    static INSTALLED: OnceLock<()> = OnceLock::new();

    INSTALLED.get_or_init(|| {
        let default_hook = panic::take_hook();
        let chain_default = env_flag("JF_LOG_INCLUDE_BACKTRACE");

        panic::set_hook(Box::new(move |info| {
            let payload = info
                .payload()
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| info.payload().downcast_ref::<String>().cloned());
            let location = info
                .location()
                .map(|loc| format!("{}:{}", loc.file(), loc.line()));

            tracing::error!(
                app = app_name,
                thread = std::thread::current().name().unwrap_or("unnamed"),
                location = location.as_deref().unwrap_or("unknown"),
                payload = payload.as_deref().unwrap_or("non-string panic payload"),
                "process panicked"
            );

            if chain_default {
                default_hook(info);
            }
        }));
    });
}

fn daily_file_writer(app_name: &'static str) -> Option<BoxMakeWriter> {
    let dir = PathBuf::from(std::env::var_os("JF_LOG_DIR")?);
    if let Err(err) = std::fs::create_dir_all(&dir) {
        eprintln!(
            "jobfit: cannot create JF_LOG_DIR {}: {err}; logging to stdout",
            dir.display()
        );
        return None;
    }

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(app_name)
        .filename_suffix("log")
        .build(&dir);
    let appender = match appender {
        Ok(appender) => appender,
        Err(err) => {
            eprintln!(
                "jobfit: cannot open log file under {}: {err}; logging to stdout",
                dir.display()
            );
            return None;
        }
    };

    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = LOG_GUARD.set(guard);
    Some(BoxMakeWriter::new(writer))
}

/// Initialize the global subscriber for a jobfit process. Safe to call
/// more than once; only the first call wins.
pub fn init_tracing_subscriber(app_name: &'static str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match daily_file_writer(app_name) {
        Some(writer) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_values_parse_leniently() {
        for enabled in ["1", "true", "TRUE", "yes", "on", " true "] {
            assert!(flag_enabled(enabled), "{enabled:?} should enable");
        }
        for disabled in ["0", "false", "off", "", "maybe"] {
            assert!(!flag_enabled(disabled), "{disabled:?} should disable");
        }
    }
}
