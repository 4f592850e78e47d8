// Logging System for Spigot
//
// This module provides a unified logging interface for digit runs.
// It's built on top of the `tracing` ecosystem, which offers structured logging
// with spans that follow a run and each of its worker threads.
//
// All log output goes to stderr. Stdout is reserved for the progress dots and
// the rendered digits.
//
// # Usage Examples
//
// ```rust
// use spigot::logging;
//
// // Initialize with default settings (INFO level, console output)
// logging::init_default();
//
// // Or initialize with custom settings
// let config = logging::LogConfig {
//     level: tracing::Level::DEBUG,
//     json_format: false,
//     ..Default::default()
// };
// logging::init(config);
//
// // Spans and events
// let span = spigot::run_span!("1b4e28ba-2fa1-11d2-883f-0016d3cca427", 1000);
// let _guard = span.enter();
// spigot::log_worker!(3, "finished", computed = 120);
// ```

use std::io;
use std::sync::Once;
use tracing::{Level, Subscriber};
use tracing_subscriber::{
    fmt, layer::Layered, prelude::*, registry::Registry, EnvFilter, Layer,
};

/// Configuration for the logging system
///
/// # Examples
///
/// ```rust
/// use spigot::logging::LogConfig;
/// use tracing::Level;
///
/// let custom_config = LogConfig {
///     level: Level::DEBUG,
///     json_format: true,
///     show_file_line: false,
///     show_thread_info: true,
///     show_time: true,
///     target_filters: Some("spigot=debug,spigot::pool=trace".to_string()),
/// };
/// assert!(custom_config.json_format);
/// ```
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum log level to display
    pub level: Level,
    /// Whether to use JSON format for logs
    pub json_format: bool,
    /// Whether to include file and line information
    pub show_file_line: bool,
    /// Whether to include thread name/id
    pub show_thread_info: bool,
    /// Whether to include timestamps
    pub show_time: bool,
    /// Target filter expressions (format: "target=level,target2=level2,...")
    pub target_filters: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json_format: false,
            show_file_line: true,
            show_thread_info: true,
            show_time: true,
            target_filters: None,
        }
    }
}

type BoxedLayer = Box<dyn Layer<Layered<EnvFilter, Registry>> + Send + Sync>;

// Initialization guard to ensure we only initialize once
static INIT: Once = Once::new();

/// Initialize the logging system with the given configuration
///
/// Sets up the global tracing subscriber. It's safe to call multiple times;
/// only the first call takes effect. `RUST_LOG` directives are honoured on
/// top of `config.level`.
pub fn init(config: LogConfig) {
    INIT.call_once(|| {
        let mut env_filter = EnvFilter::from_default_env()
            .add_directive(config.level.into());

        if let Some(filters) = &config.target_filters {
            for filter in filters.split(',') {
                if let Ok(directive) = filter.parse() {
                    env_filter = env_filter.add_directive(directive);
                }
            }
        }

        let subscriber = tracing_subscriber::registry()
            .with(env_filter)
            .with(format_layer(&config));

        set_global_subscriber(subscriber);
    });
}

fn format_layer(config: &LogConfig) -> BoxedLayer {
    if config.json_format {
        return fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(io::stderr)
            .boxed();
    }

    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_file(config.show_file_line)
        .with_line_number(config.show_file_line)
        .with_thread_names(config.show_thread_info)
        .with_thread_ids(config.show_thread_info);

    if config.show_time {
        layer.boxed()
    } else {
        layer.without_time().boxed()
    }
}

// Helper function to set the global subscriber
fn set_global_subscriber<S>(subscriber: S)
where
    S: Subscriber + Send + Sync + 'static,
{
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Error setting global tracing subscriber: {}", err);
    }
}

/// Initialize default logging: INFO level, human-readable output.
pub fn init_default() {
    init(LogConfig::default());
}

/// Initialize logging for the command line front end
///
/// Only warnings and errors, no location or thread noise, so the log lines
/// stay out of the way of the progress dots.
pub fn init_quiet() {
    init(LogConfig {
        level: Level::WARN,
        show_file_line: false,
        show_thread_info: false,
        ..Default::default()
    });
}

/// Initialize logging optimized for development environments
///
/// - DEBUG level for all spigot modules
/// - TRACE level for the worker pool
/// - File/line information, thread names and IDs
pub fn init_development() {
    let config = LogConfig {
        level: Level::DEBUG,
        json_format: false,
        show_file_line: true,
        show_thread_info: true,
        show_time: true,
        target_filters: Some("spigot=debug,spigot::pool=trace".to_string()),
    };
    init(config);
}

/// Initialize logging optimized for production environments
///
/// JSON formatted output for log aggregators, no file/line information.
pub fn init_production() {
    let config = LogConfig {
        level: Level::INFO,
        json_format: true,
        show_file_line: false,
        show_thread_info: true,
        show_time: true,
        target_filters: None,
    };
    init(config);
}

/// Initialize logging for testing
///
/// Only shows warnings and errors by default to keep test output clean.
///
/// ```rust
/// #[test]
/// fn my_test() {
///     spigot::logging::init_test();
///     // Your test code...
/// }
/// ```
pub fn init_test() {
    let config = LogConfig {
        level: Level::WARN,
        json_format: false,
        show_file_line: true,
        show_thread_info: false,
        show_time: false,
        target_filters: None,
    };
    init(config);
}

/// Create a span covering one coordinated run
///
/// ```rust
/// let span = spigot::run_span!("run-1", 1000);
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! run_span {
    ($run_id:expr, $total:expr) => {
        tracing::info_span!("run", run_id = %$run_id, total = $total)
    };
    ($run_id:expr, $total:expr, $($fields:tt)*) => {
        tracing::info_span!("run", run_id = %$run_id, total = $total, $($fields)*)
    };
}

/// Create a span for a worker thread
#[macro_export]
macro_rules! worker_span {
    ($worker_id:expr) => {
        tracing::debug_span!("worker", id = $worker_id)
    };
    ($worker_id:expr, $($fields:tt)*) => {
        tracing::debug_span!("worker", id = $worker_id, $($fields)*)
    };
}

/// Log run events - use for run start, completion and cancellation
///
/// ```rust
/// spigot::log_run!("completed", digits = 1000, elapsed_ms = 230);
/// ```
#[macro_export]
macro_rules! log_run {
    ($event:expr) => {
        tracing::info!(event = $event);
    };
    ($event:expr, $($fields:tt)*) => {
        tracing::info!(event = $event, $($fields)*);
    };
}

/// Log worker events at debug level
///
/// ```rust
/// spigot::log_worker!(2, "claimed", position = 17);
/// ```
#[macro_export]
macro_rules! log_worker {
    ($worker_id:expr, $event:expr) => {
        tracing::debug!(worker = $worker_id, event = $event);
    };
    ($worker_id:expr, $event:expr, $($fields:tt)*) => {
        tracing::debug!(worker = $worker_id, event = $event, $($fields)*);
    };
}

/// Log error events - use for all error conditions
///
/// ```rust
/// let error = std::io::Error::new(std::io::ErrorKind::NotFound, "pi.txt");
/// spigot::log_error!(error, component = "render");
/// ```
#[macro_export]
macro_rules! log_error {
    ($error:expr) => {
        tracing::error!(error = %$error);
    };
    ($error:expr, $($fields:tt)*) => {
        tracing::error!(error = %$error, $($fields)*);
    };
}

// Re-export the most commonly used tracing macros for convenience
pub use tracing::{debug, error, info, trace, warn};
