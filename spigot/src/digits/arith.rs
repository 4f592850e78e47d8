//! Bounded modular arithmetic used by the digit extractors.
//!
//! Products are widened before the reduction, so callers may pass any
//! residue below the modulus without risking overflow.

/// Returns `(a * b) mod m`.
#[inline]
pub fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    if (a | b) >> 32 == 0 {
        // both operands fit 32 bits, the 64-bit product is exact
        (a * b) % m
    } else {
        ((a as u128 * b as u128) % m as u128) as u64
    }
}

/// Returns `a^b mod m` by square-and-multiply.
///
/// `pow_mod(a, 0, m)` is `1` for every `m`, matching the running product the
/// spigot sum multiplies into.
pub fn pow_mod(a: u64, mut b: u64, m: u64) -> u64 {
    let mut r = 1;
    let mut aa = a;
    loop {
        if b & 1 == 1 {
            r = mul_mod(r, aa, m);
        }
        b >>= 1;
        if b == 0 {
            break;
        }
        aa = mul_mod(aa, aa, m);
    }
    r
}

/// Returns the inverse of `x` modulo `m` via the extended Euclidean algorithm.
///
/// `x` and `m` must be coprime and `m` must fit `i64`; the Bezout
/// coefficients are bounded by `m`. The result is normalised into `[0, m)`.
/// For `x == 0` there is no inverse and `0` is returned.
pub fn inv_mod(x: u64, m: u64) -> u64 {
    debug_assert!(m <= i64::MAX as u64);
    let (mut u, mut v) = ((x % m) as i64, m as i64);
    let (mut c, mut a) = (1i64, 0i64);
    while u != 0 {
        let q = v / u;

        let t = c;
        c = a - q * c;
        a = t;

        let t = u;
        u = v - q * u;
        v = t;
    }
    a.rem_euclid(m as i64) as u64
}

/// Trial-division primality test.
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut i = 3u64;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Returns the smallest prime strictly greater than `n`.
pub fn next_prime(mut n: u64) -> u64 {
    loop {
        n += 1;
        if is_prime(n) {
            return n;
        }
    }
}

/// Iterator over the primes greater than or equal to a starting point.
#[derive(Debug, Clone)]
pub struct Primes {
    next: u64,
}

impl Primes {
    /// Starts at the first prime `>= start`.
    pub fn from(start: u64) -> Self {
        let next = if is_prime(start) { start } else { next_prime(start) };
        Self { next }
    }

    /// Odd primes `3, 5, 7, ...` up to and including `limit`.
    pub fn odd_up_to(limit: u64) -> impl Iterator<Item = u64> {
        Self::from(3).take_while(move |&p| p <= limit)
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.next;
        self.next = next_prime(current);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_mod_does_not_overflow() {
        let m = u32::MAX as u64 - 4;
        let a = m - 1;
        assert_eq!(mul_mod(a, a, m), 1);
        assert_eq!(mul_mod(u64::MAX - 1, u64::MAX - 1, u64::MAX), 1);
    }

    #[test]
    fn test_pow_mod() {
        assert_eq!(pow_mod(10, 0, 7), 1);
        assert_eq!(pow_mod(10, 1, 7), 3);
        assert_eq!(pow_mod(2, 10, 1000), 24);
        assert_eq!(pow_mod(3, 200, 13), 9);
        assert_eq!(pow_mod(16, 5, 13), 16u64.pow(5) % 13);
    }

    #[test]
    fn test_inv_mod() {
        assert_eq!(inv_mod(3, 7), 5);
        assert_eq!(inv_mod(10, 17), 12);
        for m in [9u64, 25, 27, 121, 343] {
            for x in 1..m {
                if x % 3 != 0 && x % 5 != 0 && x % 7 != 0 && x % 11 != 0 {
                    assert_eq!(mul_mod(inv_mod(x, m), x, m), 1, "x={x} m={m}");
                }
            }
        }
    }

    #[test]
    fn test_inv_mod_zero_has_no_inverse() {
        assert_eq!(inv_mod(0, 11), 0);
    }

    #[test]
    fn test_primality() {
        let small: Vec<u64> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(small, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(is_prime(7919));
        assert!(!is_prime(7917));
    }

    #[test]
    fn test_next_prime_skips_composites() {
        assert_eq!(next_prime(3), 5);
        assert_eq!(next_prime(7), 11);
        assert_eq!(next_prime(113), 127);
    }

    #[test]
    fn test_odd_primes_iterator() {
        let primes: Vec<u64> = Primes::odd_up_to(30).collect();
        assert_eq!(primes, vec![3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert_eq!(Primes::odd_up_to(2).count(), 0);
        assert_eq!(Primes::from(14).next(), Some(17));
    }
}
