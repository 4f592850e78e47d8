//! # Error Types
//!
//! Error types used by extractors, the task pool, the coordinator and the
//! command line front end.
//!
//! ## Design Philosophy
//!
//! - Type Safety: one enum per layer, converted upward with `#[from]`
//! - Context Preservation: variants carry the offending position or count
//! - No Retries: every failure here is either bad input or a broken invariant
//!
//! ## Usage Example
//!
//! ```rust
//! use spigot_api::errors::{CoordinatorError, DigitError};
//!
//! let err: CoordinatorError = DigitError::ZeroPosition.into();
//! assert!(matches!(err, CoordinatorError::Extraction(DigitError::ZeroPosition)));
//! ```

use thiserror::Error;

use crate::types::DigitPosition;

/// Errors raised while computing a single digit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigitError {
    /// Positions are 1-based.
    #[error("Digit position must be at least 1")]
    ZeroPosition,

    /// The working range for this position no longer fits the modular width.
    #[error("Digit position {position} exceeds the supported maximum of {max}")]
    PositionOutOfRange {
        position: DigitPosition,
        max: DigitPosition,
    },
}

/// Errors related to the shared work queue and result table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error("Work queue is empty")]
    QueueEmpty,

    /// Results are write-once per position.
    #[error("Result for position {0} already recorded")]
    DuplicateResult(DigitPosition),

    #[error("Result table is incomplete: position {missing} has no digit")]
    Incomplete { missing: DigitPosition },
}

/// Errors related to a coordinated run.
#[derive(Error, Debug)]
pub enum CoordinatorError {
    #[error("Invalid digit count {requested}: expected a value between 1 and {max}")]
    InvalidDigitCount { requested: u64, max: DigitPosition },

    #[error("Failed to spawn worker thread: {0}")]
    WorkerSpawn(String),

    #[error("Worker {worker} panicked")]
    WorkerPanicked { worker: usize },

    #[error("Digit extraction failed: {0}")]
    Extraction(#[from] DigitError),

    #[error("Task pool error: {0}")]
    Pool(#[from] PoolError),

    #[error("Run was cancelled")]
    Cancelled,

    #[error("Internal coordinator error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Errors produced while interpreting command line arguments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    #[error("Invalid digit count '{0}': expected a positive integer")]
    InvalidNumber(String),

    #[error("Expected at most one argument, got {0}")]
    TooManyArguments(usize),
}
