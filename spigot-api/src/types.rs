//! Common type definitions shared by extractors and the task pool.

use std::fmt;

use crate::errors::DigitError;

/// 1-based index of a decimal digit of π after the decimal point.
///
/// Position 1 is the digit `1` of `3.14159...`.
pub type DigitPosition = u32;

/// Largest position an extractor accepts.
///
/// The working range of the spigot method is `2 * floor((n + 20) * log2(10))`
/// and every modulus is bounded by it, so it has to stay inside `u32` for the
/// 64-bit widened multiplication to be exact.
pub const MAX_DIGIT_POSITION: DigitPosition = 600_000_000;

/// Checks that `position` is a valid 1-based digit index.
pub fn validate_position(position: DigitPosition) -> Result<DigitPosition, DigitError> {
    match position {
        0 => Err(DigitError::ZeroPosition),
        p if p > MAX_DIGIT_POSITION => Err(DigitError::PositionOutOfRange {
            position: p,
            max: MAX_DIGIT_POSITION,
        }),
        p => Ok(p),
    }
}

/// A computed digit paired with the position it belongs to.
///
/// The digit is kept as text so results concatenate uniformly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitResult {
    pub position: DigitPosition,
    pub text: String,
}

impl DigitResult {
    pub fn new(position: DigitPosition, digit: u32) -> Self {
        Self {
            position,
            text: digit.to_string(),
        }
    }
}

impl fmt::Display for DigitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.position, self.text)
    }
}
