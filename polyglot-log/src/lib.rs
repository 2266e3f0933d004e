//! Polyglot Logging
//!
//! Structured logging for the polyglot crates, controlled through the
//! `POLYGLOT_DEBUG` family of environment variables.
//!
//! # Features
//!
//! - **Environment-controlled**: `POLYGLOT_DEBUG=1` enables debug logging
//! - **Cheap when disabled**: macros check an atomic level before formatting
//! - **Structured output**: JSON lines by default, pretty or compact on request
//! - **Facade bridge**: records can be routed into the `log` crate instead of stderr
//!
//! # Usage
//!
//! ```rust
//! use polyglot_log::{debug, info, warn, error, trace};
//!
//! debug!("Registering string table");
//! info!("Loaded {} locales", 3);
//! warn!("Unsupported locale skipped");
//! error!("Formatting failed");
//!
//! let command = "help";
//! debug!(target: "polyglot::localizer", "Localizing command: {}", command);
//! ```
//!
//! # Environment Variables
//!
//! - `POLYGLOT_DEBUG=1` - Enable debug logging
//! - `POLYGLOT_LOG_LEVEL=trace|debug|info|warn|error|off` - Set log level
//! - `POLYGLOT_LOG_FORMAT=pretty|compact|json` - Set output format
//! - `POLYGLOT_LOG_BACKEND=stderr|facade` - Write to stderr or forward to `log`
//! - `POLYGLOT_LOG_COLOR=1|0` - Enable/disable colors in pretty output

use once_cell::sync::Lazy;
use std::env;
use std::io::Write;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

// ============================================================================
// Log Levels
// ============================================================================

/// Severity of a log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Level {
    /// Trace level (most verbose)
    Trace = 0,
    /// Debug level
    Debug = 1,
    /// Info level
    Info = 2,
    /// Warning level
    Warn = 3,
    /// Error level (least verbose)
    Error = 4,
    /// Off (no logging)
    Off = 5,
}

impl Level {
    /// Parse a level name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Some(Level::Trace),
            "debug" => Some(Level::Debug),
            "info" => Some(Level::Info),
            "warn" | "warning" => Some(Level::Warn),
            "error" => Some(Level::Error),
            "off" | "none" => Some(Level::Off),
            _ => None,
        }
    }

    /// Upper-case level name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Off => "OFF",
        }
    }

    /// Matching `log` crate level, `None` for [`Level::Off`].
    pub fn to_facade(self) -> Option<log::Level> {
        match self {
            Level::Trace => Some(log::Level::Trace),
            Level::Debug => Some(log::Level::Debug),
            Level::Info => Some(log::Level::Info),
            Level::Warn => Some(log::Level::Warn),
            Level::Error => Some(log::Level::Error),
            Level::Off => None,
        }
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => Level::Trace,
            1 => Level::Debug,
            2 => Level::Info,
            3 => Level::Warn,
            4 => Level::Error,
            _ => Level::Off,
        }
    }

    #[cfg(feature = "color")]
    fn colored(&self) -> colored::ColoredString {
        use colored::Colorize;
        match self {
            Level::Trace => "TRACE".magenta(),
            Level::Debug => "DEBUG".blue(),
            Level::Info => "INFO".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERROR".red().bold(),
            Level::Off => "OFF".white(),
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Output Format and Backend
// ============================================================================

/// Line format used by the stderr backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Timestamp, padded level, target and message
    Pretty,
    /// Short single-line format
    Compact,
    /// One JSON object per line
    Json,
}

impl Format {
    /// Parse a format name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Some(Format::Pretty),
            "compact" => Some(Format::Compact),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

/// Where records go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Write formatted lines to stderr
    Stderr,
    /// Forward to whatever logger the embedding application installed for `log`
    Facade,
}

impl Backend {
    /// Parse a backend name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "stderr" => Some(Backend::Stderr),
            "facade" | "log" => Some(Backend::Facade),
            _ => None,
        }
    }
}

// ============================================================================
// Global Configuration
// ============================================================================

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

static LOG_LEVEL: AtomicU8 = AtomicU8::new(Level::Info as u8);

static CONFIG: Lazy<LogConfig> = Lazy::new(|| {
    let config = LogConfig::from_env();
    DEBUG_ENABLED.store(config.debug, Ordering::SeqCst);
    LOG_LEVEL.store(config.level as u8, Ordering::SeqCst);
    config
});

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Whether debug mode is enabled
    pub debug: bool,
    /// Minimum log level
    pub level: Level,
    /// Output format for the stderr backend
    pub format: Format,
    /// Record destination
    pub backend: Backend,
    /// Whether colors are enabled
    pub color: bool,
    /// Whether to include timestamps
    pub timestamps: bool,
    /// Whether to include the record target
    pub target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            debug: false,
            level: Level::Info,
            format: Format::Json,
            backend: Backend::Stderr,
            color: false,
            timestamps: true,
            target: true,
        }
    }
}

fn flag(value: Option<String>) -> Option<bool> {
    value.map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

impl LogConfig {
    /// Create config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let debug = flag(lookup("POLYGLOT_DEBUG")).unwrap_or(defaults.debug);

        let level = lookup("POLYGLOT_LOG_LEVEL")
            .and_then(|s| Level::parse(&s))
            .unwrap_or(if debug { Level::Debug } else { defaults.level });

        let format = lookup("POLYGLOT_LOG_FORMAT")
            .and_then(|s| Format::parse(&s))
            .unwrap_or(defaults.format);

        let backend = lookup("POLYGLOT_LOG_BACKEND")
            .and_then(|s| Backend::parse(&s))
            .unwrap_or(defaults.backend);

        let color = flag(lookup("POLYGLOT_LOG_COLOR"))
            .unwrap_or_else(|| lookup("NO_COLOR").is_none() && lookup("TERM").is_some());

        let timestamps = flag(lookup("POLYGLOT_LOG_TIMESTAMPS")).unwrap_or(defaults.timestamps);
        let target = flag(lookup("POLYGLOT_LOG_TARGET")).unwrap_or(defaults.target);

        Self {
            debug,
            level,
            format,
            backend,
            color,
            timestamps,
            target,
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Force eager initialization of the global configuration.
pub fn init() {
    Lazy::force(&CONFIG);
}

/// Check if debug logging is enabled.
#[inline]
pub fn is_debug_enabled() -> bool {
    init();
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Check if a log level is enabled.
#[inline]
pub fn is_level_enabled(level: Level) -> bool {
    init();
    level != Level::Off && level as u8 >= LOG_LEVEL.load(Ordering::Relaxed)
}

/// Get current log level.
pub fn current_level() -> Level {
    init();
    Level::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

/// Set log level at runtime.
pub fn set_level(level: Level) {
    init();
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Enable or disable debug mode at runtime.
pub fn set_debug(enabled: bool) {
    init();
    DEBUG_ENABLED.store(enabled, Ordering::SeqCst);
    if enabled && current_level() > Level::Debug {
        set_level(Level::Debug);
    }
}

/// Get the global configuration.
pub fn config() -> &'static LogConfig {
    &CONFIG
}

// ============================================================================
// Log Output
// ============================================================================

#[doc(hidden)]
pub fn log(level: Level, target: &str, message: &str) {
    let config = config();

    match config.backend {
        Backend::Facade => {
            if let Some(level) = level.to_facade() {
                log::log!(target: target, level, "{}", message);
            }
        }
        Backend::Stderr => match config.format {
            Format::Pretty => write_pretty(level, target, message, config),
            Format::Compact => write_compact(level, target, message, config),
            Format::Json => write_json(level, target, message),
        },
    }
}

fn write_pretty(level: Level, target: &str, message: &str, config: &LogConfig) {
    let mut stderr = std::io::stderr().lock();

    if config.timestamps {
        let now = chrono::Local::now();
        let _ = write!(stderr, "{} ", now.format("%Y-%m-%d %H:%M:%S%.3f"));
    }

    #[cfg(feature = "color")]
    if config.color {
        let _ = write!(stderr, "{:5} ", level.colored());
    } else {
        let _ = write!(stderr, "{:5} ", level.as_str());
    }

    #[cfg(not(feature = "color"))]
    let _ = write!(stderr, "{:5} ", level.as_str());

    if config.target && !target.is_empty() {
        let _ = write!(stderr, "[{}] ", target);
    }

    let _ = writeln!(stderr, "{}", message);
}

fn write_compact(level: Level, target: &str, message: &str, config: &LogConfig) {
    let mut stderr = std::io::stderr().lock();

    if config.timestamps {
        let now = chrono::Local::now();
        let _ = write!(stderr, "{} ", now.format("%H:%M:%S"));
    }

    let _ = write!(stderr, "{} ", level.as_str().chars().next().unwrap_or('?'));

    if config.target && !target.is_empty() {
        let _ = write!(stderr, "{}: ", target);
    }

    let _ = writeln!(stderr, "{}", message);
}

#[cfg(feature = "json")]
fn write_json(level: Level, target: &str, message: &str) {
    use serde::Serialize;

    #[derive(Serialize)]
    struct Record<'a> {
        timestamp: String,
        level: &'a str,
        target: &'a str,
        message: &'a str,
    }

    let record = Record {
        timestamp: chrono::Utc::now().to_rfc3339(),
        level: level.as_str(),
        target,
        message,
    };

    if let Ok(line) = serde_json::to_string(&record) {
        eprintln!("{}", line);
    }
}

#[cfg(not(feature = "json"))]
fn write_json(level: Level, target: &str, message: &str) {
    eprintln!("{}", json_line(&chrono::Utc::now().to_rfc3339(), level, target, message));
}

#[cfg(not(feature = "json"))]
fn json_line(timestamp: &str, level: Level, target: &str, message: &str) -> String {
    format!(
        r#"{{"timestamp":"{}","level":"{}","target":"{}","message":"{}"}}"#,
        escape_json(timestamp),
        level.as_str(),
        escape_json(target),
        escape_json(message)
    )
}

/// Escape a string for use inside a JSON string literal. Non-ASCII passes through.
#[cfg(not(feature = "json"))]
fn escape_json(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

// ============================================================================
// Macros
// ============================================================================

/// Log a trace message.
#[macro_export]
macro_rules! trace {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Trace) {
            $crate::log($crate::Level::Trace, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Trace) {
            $crate::log($crate::Level::Trace, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log a debug message.
///
/// Enabled by `POLYGLOT_DEBUG=1` or `POLYGLOT_LOG_LEVEL=debug`.
///
/// # Example
///
/// ```rust
/// use polyglot_log::debug;
///
/// let locale = "de";
/// debug!("Registered string table for {}", locale);
/// debug!(target: "polyglot::store", "Registered command table for {}", locale);
/// ```
#[macro_export]
macro_rules! debug {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_debug_enabled() || $crate::is_level_enabled($crate::Level::Debug) {
            $crate::log($crate::Level::Debug, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_debug_enabled() || $crate::is_level_enabled($crate::Level::Debug) {
            $crate::log($crate::Level::Debug, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log an info message.
#[macro_export]
macro_rules! info {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Info) {
            $crate::log($crate::Level::Info, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Info) {
            $crate::log($crate::Level::Info, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log a warning message.
#[macro_export]
macro_rules! warn {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Warn) {
            $crate::log($crate::Level::Warn, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Warn) {
            $crate::log($crate::Level::Warn, module_path!(), &format!($($arg)+));
        }
    };
}

/// Log an error message.
#[macro_export]
macro_rules! error {
    (target: $target:expr, $($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Error) {
            $crate::log($crate::Level::Error, $target, &format!($($arg)+));
        }
    };
    ($($arg:tt)+) => {
        if $crate::is_level_enabled($crate::Level::Error) {
            $crate::log($crate::Level::Error, module_path!(), &format!($($arg)+));
        }
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_level_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::Off);
    }

    #[test]
    fn test_level_parse() {
        assert_eq!(Level::parse("debug"), Some(Level::Debug));
        assert_eq!(Level::parse(" DEBUG "), Some(Level::Debug));
        assert_eq!(Level::parse("warning"), Some(Level::Warn));
        assert_eq!(Level::parse("none"), Some(Level::Off));
        assert_eq!(Level::parse("verbose"), None);
    }

    #[test]
    fn test_level_to_facade() {
        assert_eq!(Level::Warn.to_facade(), Some(log::Level::Warn));
        assert_eq!(Level::Off.to_facade(), None);
    }

    #[test]
    fn test_format_and_backend_parse() {
        assert_eq!(Format::parse("compact"), Some(Format::Compact));
        assert_eq!(Format::parse("yaml"), None);
        assert_eq!(Backend::parse("log"), Some(Backend::Facade));
        assert_eq!(Backend::parse("stderr"), Some(Backend::Stderr));
        assert_eq!(Backend::parse("syslog"), None);
    }

    #[test]
    fn test_config_defaults_without_env() {
        let config = LogConfig::from_lookup(lookup(&[("NO_COLOR", "1")]));
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn test_config_debug_implies_debug_level() {
        let config = LogConfig::from_lookup(lookup(&[("POLYGLOT_DEBUG", "true")]));
        assert!(config.debug);
        assert_eq!(config.level, Level::Debug);

        let config = LogConfig::from_lookup(lookup(&[
            ("POLYGLOT_DEBUG", "1"),
            ("POLYGLOT_LOG_LEVEL", "error"),
        ]));
        assert_eq!(config.level, Level::Error);
    }

    #[test]
    fn test_config_format_and_backend() {
        let config = LogConfig::from_lookup(lookup(&[
            ("POLYGLOT_LOG_FORMAT", "pretty"),
            ("POLYGLOT_LOG_BACKEND", "facade"),
            ("POLYGLOT_LOG_TIMESTAMPS", "0"),
        ]));
        assert_eq!(config.format, Format::Pretty);
        assert_eq!(config.backend, Backend::Facade);
        assert!(!config.timestamps);
    }

    #[test]
    fn test_runtime_level_and_debug() {
        let original_level = current_level();
        let original_debug = is_debug_enabled();

        set_level(Level::Error);
        assert_eq!(current_level(), Level::Error);
        assert!(!is_level_enabled(Level::Warn));
        assert!(is_level_enabled(Level::Error));

        set_debug(true);
        assert!(is_debug_enabled());
        assert_eq!(current_level(), Level::Debug);

        set_debug(original_debug);
        set_level(original_level);
    }

    #[cfg(not(feature = "json"))]
    #[test]
    fn test_json_fallback_escapes_for_json() {
        let line = json_line(
            "2026-01-01T00:00:00+00:00",
            Level::Warn,
            "polyglot::store",
            "Skipping 'tlh' Olá \"quoted\" back\\slash\nnext\u{1}",
        );
        assert_eq!(
            line,
            r#"{"timestamp":"2026-01-01T00:00:00+00:00","level":"WARN","target":"polyglot::store","message":"Skipping 'tlh' Olá \"quoted\" back\\slash\nnext\u0001"}"#
        );
        assert!(!line.contains("\\'"));
        assert!(!line.contains("\\u{"));
    }

    #[test]
    fn test_off_is_never_enabled() {
        assert!(!is_level_enabled(Level::Off));
    }

    #[test]
    fn test_macros_compile() {
        trace!("trace message");
        debug!("debug message");
        info!("info message");
        warn!("warn message");
        error!("error message");

        debug!(target: "polyglot::test", "with target {}", 1);
        warn!(target: "polyglot::test", "with target");
    }
}
