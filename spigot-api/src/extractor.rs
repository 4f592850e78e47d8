//! # Digit Extractor
//!
//! The seam between the scheduling machinery and the arithmetic. Workers only
//! ever see a `DigitExtractor`, so the pool can be exercised with cheap
//! extractors while production runs use the spigot method.

use crate::errors::DigitError;
use crate::types::DigitPosition;

/// Computes a single digit at a given position with no shared state.
///
/// Implementations must be deterministic: the same position always yields the
/// same value, whichever thread asks and in whatever order.
pub trait DigitExtractor: Send + Sync {
    /// Computes the digit at the 1-based `position`.
    fn compute_digit(&self, position: DigitPosition) -> Result<u32, DigitError>;

    /// Short name used in logs.
    fn name(&self) -> &'static str {
        "anonymous"
    }
}

impl<T: DigitExtractor + ?Sized> DigitExtractor for std::sync::Arc<T> {
    fn compute_digit(&self, position: DigitPosition) -> Result<u32, DigitError> {
        (**self).compute_digit(position)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
