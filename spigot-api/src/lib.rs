//! # Spigot API
//!
//! Interface layer for computing decimal digits of π one position at a time
//! and distributing those positions across a pool of worker threads.
//!
//! ## Core Components
//!
//! - **Positions**: 1-based indices of decimal digits after the point
//! - **Extractors**: Pure functions mapping a position to its digit
//! - **Errors**: Typed failures for extraction, the task pool and the coordinator
//!
//! ## Usage Example
//!
//! ```rust
//! use spigot_api::{DigitExtractor, DigitPosition, DigitError};
//!
//! struct Constant;
//!
//! impl DigitExtractor for Constant {
//!     fn compute_digit(&self, position: DigitPosition) -> Result<u32, DigitError> {
//!         spigot_api::types::validate_position(position)?;
//!         Ok(7)
//!     }
//! }
//!
//! assert_eq!(Constant.compute_digit(3).unwrap(), 7);
//! assert!(Constant.compute_digit(0).is_err());
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Position and result types, limits
//! - [`extractor`]: The `DigitExtractor` trait
//! - [`errors`]: Error types and handling

pub mod errors;
pub mod extractor;
pub mod types;

pub use errors::{ArgError, CoordinatorError, DigitError, PoolError};
pub use extractor::DigitExtractor;
pub use types::{DigitPosition, DigitResult, MAX_DIGIT_POSITION};
