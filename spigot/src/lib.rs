// Spigot
//
// Computes decimal digits of pi one position at a time with a spigot method,
// spreads the positions over a fixed pool of worker threads and renders the
// ordered digits into an ASCII-art template.

pub mod cli;
pub mod config;
pub mod digits;
pub mod logging;
pub mod pool;
pub mod render;

// Re-export commonly used types
pub use config::SpigotConfig;
pub use digits::{compute_digit, pi_hex_digits, BellardExtractor};
pub use pool::{CancellationToken, Coordinator, RunReport, TaskPool};
pub use spigot_api::*;
