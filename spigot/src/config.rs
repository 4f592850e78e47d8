use std::path::PathBuf;

use tracing::warn;

/// Digits computed when no count is given on the command line.
pub const DEFAULT_DIGIT_COUNT: u64 = 1000;

/// Template looked up relative to the working directory.
pub const DEFAULT_TEMPLATE_PATH: &str = "pi.txt";

pub const DEFAULT_THREAD_NAME_PREFIX: &str = "spigot-worker";

/// Overrides the template path.
pub const TEMPLATE_ENV: &str = "SPIGOT_TEMPLATE";
/// Overrides the worker count.
pub const WORKERS_ENV: &str = "SPIGOT_WORKERS";
/// Switches log output to JSON when set to `1` or `true`.
pub const LOG_JSON_ENV: &str = "SPIGOT_LOG_JSON";

/// Configuration for a digit run.
#[derive(Clone, Debug)]
pub struct SpigotConfig {
    /// Number of digits after the decimal point to compute.
    pub total_digits: u64,

    /// Number of worker threads; `None` uses one per logical CPU.
    pub worker_count: Option<usize>,

    /// ASCII-art template the digits are rendered into.
    pub template_path: PathBuf,

    /// Whether to print one `.` per computed digit.
    pub show_progress: bool,

    /// Worker threads are named `{prefix}-{id}`.
    pub thread_name_prefix: String,
}

impl Default for SpigotConfig {
    fn default() -> Self {
        Self {
            total_digits: DEFAULT_DIGIT_COUNT,
            worker_count: None,
            template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            show_progress: true,
            thread_name_prefix: DEFAULT_THREAD_NAME_PREFIX.to_string(),
        }
    }
}

impl SpigotConfig {
    /// Defaults with overrides from the process environment.
    pub fn from_env() -> Self {
        Self::default().with_env(|key| std::env::var(key).ok())
    }

    /// Applies overrides read through `lookup`; unusable values are ignored.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(TEMPLATE_ENV).filter(|p| !p.trim().is_empty()) {
            self.template_path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(WORKERS_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => self.worker_count = Some(n),
                _ => warn!(variable = WORKERS_ENV, value = %raw, "ignoring invalid worker count"),
            }
        }

        self
    }

    /// Worker threads to spawn: the configured count, else the number of
    /// logical CPUs, and never fewer than one.
    pub fn effective_workers(&self) -> usize {
        self.worker_count.unwrap_or_else(num_cpus::get).max(1)
    }
}

/// True when `SPIGOT_LOG_JSON` asks for JSON logs.
pub fn json_logs_requested<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(LOG_JSON_ENV)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}
