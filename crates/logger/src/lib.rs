//! Feature-gated leveled logging for the `cgpanalytics` CLI.
//!
//! - `log-info` enables `info!` output (on by default).
//! - `log-debug` enables `debug!` output plus a runtime debug flag.
//! - `verbose` enables `verbose!`, an untagged printer for user-facing detail.
//! - `file-logging` redirects tagged messages to a log file once initialized
//!   (verbose output never goes to the file).
//! - `warn!` and `error!` are always active; both write to stderr.

use std::fmt::Arguments;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{LazyLock, Mutex};

/// Logging levels, ordered from most to least severe.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Level {
    /// Error-level messages (always enabled).
    Error = 1,
    /// Warning-level messages (always enabled).
    Warn = 2,
    /// Info-level messages (requires `log-info` feature).
    Info = 3,
    /// Debug-level messages (requires `log-debug` feature and runtime flag).
    Debug = 4,
}

impl Level {
    const fn tag(self) -> &'static str {
        match self {
            Self::Error => "[ERROR]",
            Self::Warn => "[WARN]",
            Self::Info => "[INFO]",
            Self::Debug => "[DEBUG]",
        }
    }

    const fn to_stderr(self) -> bool {
        matches!(self, Self::Error | Self::Warn)
    }
}

/// Highest level enabled by the compiled feature set.
const fn feature_ceiling() -> u8 {
    if cfg!(feature = "log-debug") {
        Level::Debug as u8
    } else if cfg!(feature = "log-info") {
        Level::Info as u8
    } else {
        Level::Warn as u8
    }
}

static LEVEL: AtomicU8 = AtomicU8::new(feature_ceiling());
static DEBUG_FLAG: AtomicBool = AtomicBool::new(true);
static VERBOSE_FLAG: AtomicBool = AtomicBool::new(false);
static FILE_SINK: LazyLock<Mutex<Option<File>>> = LazyLock::new(|| Mutex::new(None));

/// Set the global log level.
pub fn set_level(level: Level) {
    LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Parse and set level from a string (case-insensitive). Returns true on success.
#[must_use]
pub fn set_level_from_str(level: &str) -> bool {
    let parsed = match level.to_ascii_lowercase().as_str() {
        "error" | "err" => Level::Error,
        "warn" | "warning" => Level::Warn,
        "info" => Level::Info,
        "debug" => Level::Debug,
        _ => return false,
    };
    set_level(parsed);
    true
}

/// Enable debug logging at runtime (no effect unless `log-debug` is compiled in).
pub fn enable_debug() {
    DEBUG_FLAG.store(true, Ordering::SeqCst);
}

/// Disable debug logging at runtime.
pub fn disable_debug() {
    DEBUG_FLAG.store(false, Ordering::SeqCst);
}

/// Whether debug logging is currently on; always false without `log-debug`.
#[must_use]
pub fn is_debug_enabled() -> bool {
    cfg!(feature = "log-debug") && DEBUG_FLAG.load(Ordering::SeqCst)
}

/// Enable verbose output at runtime (no effect unless `verbose` is compiled in).
pub fn enable_verbose() {
    VERBOSE_FLAG.store(true, Ordering::SeqCst);
}

/// Disable verbose output at runtime.
pub fn disable_verbose() {
    VERBOSE_FLAG.store(false, Ordering::SeqCst);
}

/// Whether verbose output is currently on; always false without `verbose`.
#[must_use]
pub fn is_verbose_enabled() -> bool {
    cfg!(feature = "verbose") && VERBOSE_FLAG.load(Ordering::SeqCst)
}

/// Open `path` in append mode and route tagged messages there from now on.
/// Returns true on success. Without the `file-logging` feature this always
/// returns false and logging stays on the console.
///
/// # Panics
/// Panics if the file sink mutex is poisoned.
#[must_use]
pub fn init_file_logging(path: &Path) -> bool {
    if !cfg!(feature = "file-logging") {
        return false;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .is_ok_and(|file| {
            *FILE_SINK.lock().unwrap() = Some(file);
            true
        })
}

fn write_to_sink(line: &str) -> bool {
    if !cfg!(feature = "file-logging") {
        return false;
    }
    let Ok(mut sink) = FILE_SINK.lock() else {
        return false;
    };
    let Some(file) = sink.as_mut() else {
        return false;
    };
    let _ = writeln!(file, "{line}");
    let _ = file.flush();
    true
}

fn gate_open(level: Level) -> bool {
    let compiled = match level {
        Level::Info => cfg!(feature = "log-info"),
        Level::Debug => cfg!(feature = "log-debug") && is_debug_enabled(),
        Level::Error | Level::Warn => true,
    };
    compiled && (level as u8) <= LEVEL.load(Ordering::SeqCst)
}

/// Internal dispatch behind the logging macros. Formats the message and sends
/// it to the file sink when one is active, otherwise to stdout (stderr for
/// warnings and errors). Suppressed entirely when `level` is gated off.
pub fn log_impl(level: Level, args: Arguments) {
    if !gate_open(level) {
        return;
    }
    let line = format!("{} {}", level.tag(), args);
    if write_to_sink(&line) {
        return;
    }
    if level.to_stderr() {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

/// Internal dispatch behind `verbose!`: an untagged stdout printer that never
/// writes to the file sink.
pub fn verbose_impl(args: Arguments) {
    if is_verbose_enabled() {
        println!("{args}");
    }
}

#[macro_export]
/// Logs an error-level message (always enabled). Emits to stderr.
macro_rules! error {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Error, format_args!($($arg)*)) };
}

#[macro_export]
/// Logs a warning-level message (always enabled). Emits to stderr.
macro_rules! warn {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Warn, format_args!($($arg)*)) };
}

#[macro_export]
/// Logs an info-level message (requires `log-info` feature).
macro_rules! info {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Info, format_args!($($arg)*)) };
}

#[macro_export]
/// Logs a debug-level message (requires `log-debug` feature and runtime enablement).
macro_rules! debug {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Debug, format_args!($($arg)*)) };
}

#[macro_export]
/// Prints a verbose message (requires `verbose` feature and runtime enablement).
/// This is a plain printer with no tags, and never goes to log files.
macro_rules! verbose {
    ($($arg:tt)*) => { $crate::verbose_impl(format_args!($($arg)*)) };
}

#[cfg(test)]
mod tests {
    use super::{set_level, Level};

    #[test]
    fn error_no_panic() {
        crate::error!("error {}", 1);
    }

    #[test]
    fn warn_no_panic() {
        crate::warn!("warn {}", 2);
    }

    #[test]
    fn info_no_panic() {
        set_level(Level::Info);
        crate::info!("info {}", 3);
    }

    #[cfg(feature = "log-debug")]
    #[test]
    fn debug_respects_runtime_flag() {
        use super::{disable_debug, enable_debug};
        set_level(Level::Debug);
        disable_debug();
        crate::debug!("should be silent");
        enable_debug();
        crate::debug!("should emit");
    }
}
