//! Hexadecimal digit extraction with the Bailey-Borwein-Plouffe formula.
//!
//! `pi = sum(16^-k * (4/(8k+1) - 2/(8k+4) - 1/(8k+5) - 1/(8k+6)))`
//!
//! Each call yields 14 hex digits. The series are summed as 92-bit fixed-point
//! fractions and only the top 56 bits are returned, so the accumulated
//! truncation error stays far below the last returned digit. This is a
//! standalone utility; the coordinator only schedules decimal digits.

use spigot_api::types::validate_position;
use spigot_api::{DigitError, DigitPosition};

use super::arith::pow_mod;

/// Hex digits produced per call.
pub const HEX_DIGITS: u32 = 14;

/// Fraction bits carried while summing. `v << WORK_BITS` must fit `u128`
/// for every `v < 8k + j < 2^33`.
const WORK_BITS: u32 = 92;
const WORK_MASK: u128 = (1 << WORK_BITS) - 1;
const OUT_BITS: u32 = 4 * HEX_DIGITS;

/// Fractional part of `16^n * sum(16^-k / (8k + j))` in `WORK_BITS` fixed point.
fn series(j: u64, n: u64) -> u128 {
    let mut sum = 0u128;
    for k in 0..=n {
        let r = 8 * k + j;
        let v = pow_mod(16, n - k, r) % r;
        sum = (sum + ((v as u128) << WORK_BITS) / r as u128) & WORK_MASK;
    }

    // 16^(n-k) < 1 from here on: shift instead of pow
    let mut k = n + 1;
    loop {
        let shift = 4 * (k - n);
        if shift >= WORK_BITS as u64 {
            break;
        }
        let term = (1u128 << (WORK_BITS as u64 - shift)) / (8 * k + j) as u128;
        if term == 0 {
            break;
        }
        sum += term;
        k += 1;
    }

    sum & WORK_MASK
}

/// Returns the 14 hex digits of π starting at the 1-based hex `position`.
///
/// All 14 digits are exact unless the expansion continues with a long run of
/// `0`s or `F`s right after them, where a carry cannot be settled from the
/// working precision.
///
/// ```rust
/// let digits = spigot::digits::hex::pi_hex_digits(1).unwrap();
/// assert_eq!(digits, 0x243F6A8885A308);
/// ```
pub fn pi_hex_digits(position: DigitPosition) -> Result<u64, DigitError> {
    let n = validate_position(position)? as u64 - 1;

    let x = series(1, n)
        .wrapping_mul(4)
        .wrapping_sub(series(4, n).wrapping_mul(2))
        .wrapping_sub(series(5, n))
        .wrapping_sub(series(6, n))
        & WORK_MASK;
    Ok((x >> (WORK_BITS - OUT_BITS)) as u64)
}

/// Formats a value from [`pi_hex_digits`] as 14 upper-case hex characters.
pub fn format_hex_digits(digits: u64) -> String {
    format!("{:0width$X}", digits, width = HEX_DIGITS as usize)
}
