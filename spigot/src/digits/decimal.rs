//! # Decimal Digit Extraction
//!
//! Computes the n-th decimal digit of π with very little memory, using
//! Bellard's O(n²) refinement of Plouffe's method.
//!
//! ## Core Algorithm
//! 1. Choose the working range `N = floor((n + 20) * log2(10))`
//! 2. For every odd prime `a <= 2N`, evaluate the series
//!    `pi + 3 = sum(k * 2^k / binomial(2k, k))` modulo `a^vmax`,
//!    stripping factors of `a` from numerator and denominator and tracking
//!    the valuation separately
//! 3. Shift each partial sum by `10^(n-1)` and accumulate its fractional part
//! 4. Scale the fraction to a single decimal digit
//!
//! All modular work is integer arithmetic bounded by the working range; only
//! the accumulated fraction is floating point.

use std::f64::consts::{LN_10, LN_2};

use spigot_api::types::validate_position;
use spigot_api::{DigitError, DigitExtractor, DigitPosition};

use super::arith::{inv_mod, mul_mod, pow_mod, Primes};

/// Extra decimal digits of precision carried past the requested position.
pub const GUARD_DIGITS: f64 = 20.0;

/// Spigot extractor for decimal digits of π.
#[derive(Debug, Default, Clone, Copy)]
pub struct BellardExtractor;

impl DigitExtractor for BellardExtractor {
    fn compute_digit(&self, position: DigitPosition) -> Result<u32, DigitError> {
        compute_digit(position)
    }

    fn name(&self) -> &'static str {
        "bellard"
    }
}

/// Number of series terms needed for `position`.
pub fn working_range(position: DigitPosition) -> u64 {
    ((position as f64 + GUARD_DIGITS) * LN_10 / LN_2) as u64
}

/// Computes the decimal digit of π at the 1-based `position`.
pub fn compute_digit(position: DigitPosition) -> Result<u32, DigitError> {
    let n = validate_position(position)? as u64;
    let range = working_range(position);
    let limit = 2 * range;

    let mut sum = 0.0f64;
    for a in Primes::odd_up_to(limit) {
        let (s, av) = prime_residue(a, range, limit);
        let s = mul_mod(s, pow_mod(10, n - 1, av), av);
        sum = (sum + s as f64 / av as f64) % 1.0;
    }

    Ok((sum * 1e9 / 100_000_000.0) as u32)
}

/// Largest power of `a` not exceeding `limit`, as `(vmax, a^vmax)`.
fn max_power(a: u64, limit: u64) -> (u32, u64) {
    let mut vmax = ((limit as f64).ln() / (a as f64).ln()) as u32;
    let mut av = a.pow(vmax);
    // ln quotient can round up past an exact power
    while av > limit && vmax > 1 {
        vmax -= 1;
        av /= a;
    }
    (vmax, av)
}

/// Runs the inner series for one prime, returning the partial sum and its modulus.
fn prime_residue(a: u64, range: u64, limit: u64) -> (u64, u64) {
    let (vmax, av) = max_power(a, limit);
    let vmax = vmax as i64;

    let mut s = 0u64;
    let mut num = 1u64;
    let mut den = 1u64;
    let mut v = 0i64;
    let mut kq = 1u64;
    let mut kq2 = 1u64;

    for k in 1..=range {
        let mut t = k;
        if kq >= a {
            loop {
                t /= a;
                v -= 1;
                if t % a != 0 {
                    break;
                }
            }
            kq = 0;
        }
        kq += 1;
        num = mul_mod(num, t, av);

        let mut t = 2 * k - 1;
        if kq2 >= a {
            if kq2 == a {
                loop {
                    t /= a;
                    v += 1;
                    if t % a != 0 {
                        break;
                    }
                }
            }
            kq2 -= a;
        }
        den = mul_mod(den, t, av);
        kq2 += 2;

        if v > 0 {
            let mut t = inv_mod(den, av);
            t = mul_mod(t, num, av);
            t = mul_mod(t, k, av);
            for _ in v..vmax {
                t = mul_mod(t, a, av);
            }
            s += t;
            if s >= av {
                s -= av;
            }
        }
    }

    (s, av)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_working_range() {
        assert_eq!(working_range(1), 69);
        assert_eq!(working_range(1000), 3388);
    }

    #[test]
    fn test_max_power_stays_within_limit() {
        assert_eq!(max_power(3, 138), (4, 81));
        assert_eq!(max_power(137, 138), (1, 137));
        assert_eq!(max_power(5, 125), (3, 125));
    }

    #[test]
    fn test_first_digit() {
        assert_eq!(compute_digit(1), Ok(1));
    }

    #[test]
    fn test_rejects_zero() {
        assert_eq!(compute_digit(0), Err(DigitError::ZeroPosition));
    }
}
