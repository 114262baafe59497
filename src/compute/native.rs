//! In-process computation provider.
//!
//! Policies for input outside the natural domain:
//! - `is_prime` of a negative number is `false`
//! - `factorial` of a negative number is `NegativeInput`
//! - `factorial` above 20 is `Overflow` (21! does not fit in `u64`)

use crate::compute::{Compute, ComputeError, Computation};

/// Largest `n` whose factorial fits in a `u64`.
pub const MAX_FACTORIAL_INPUT: i64 = 20;

/// Miller-Rabin witnesses that decide primality for every `u64`.
const WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(m)) as u64
}

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1;
    base %= m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

/// Default provider, computing everything on the calling thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeCompute;

impl Compute for NativeCompute {
    fn is_even(&self, n: i64) -> Result<bool, ComputeError> {
        Ok(n % 2 == 0)
    }

    fn is_prime(&self, n: i64) -> Result<bool, ComputeError> {
        if n < 2 {
            return Ok(false);
        }
        let n = n as u64;
        for &p in &WITNESSES {
            if n % p == 0 {
                return Ok(n == p);
            }
        }

        // n is odd and > 37. Write n - 1 = d * 2^s with d odd.
        let s = (n - 1).trailing_zeros();
        let d = (n - 1) >> s;

        'witness: for &a in &WITNESSES {
            let mut x = pow_mod(a, d, n);
            if x == 1 || x == n - 1 {
                continue;
            }
            for _ in 1..s {
                x = mul_mod(x, x, n);
                if x == n - 1 {
                    continue 'witness;
                }
            }
            return Ok(false);
        }
        Ok(true)
    }

    fn factorial(&self, n: i64) -> Result<u64, ComputeError> {
        if n < 0 {
            return Err(ComputeError::NegativeInput {
                operation: Computation::Factorial,
                n,
            });
        }

        (2..=n as u64).try_fold(1u64, |acc, k| {
            acc.checked_mul(k).ok_or(ComputeError::Overflow {
                operation: Computation::Factorial,
                n,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_even() {
        let c = NativeCompute;
        for n in [0i64, 2, 100, -4, i64::MIN] {
            assert_eq!(c.is_even(n), Ok(true), "{n}");
        }
        for n in [1i64, 3, 99, -3, i64::MAX] {
            assert_eq!(c.is_even(n), Ok(false), "{n}");
        }
    }

    #[test]
    fn test_is_prime_reference_values() {
        let c = NativeCompute;
        for n in [2i64, 3, 5, 17, 97, 7919] {
            assert_eq!(c.is_prime(n), Ok(true), "{n}");
        }
        for n in [0i64, 1, 4, 18, 25, 49, 100, 7917] {
            assert_eq!(c.is_prime(n), Ok(false), "{n}");
        }
    }

    #[test]
    fn test_is_prime_matches_naive_check() {
        let naive = |n: i64| n >= 2 && (2..n).all(|d| n % d != 0);
        let c = NativeCompute;
        for n in 0..500 {
            assert_eq!(c.is_prime(n), Ok(naive(n)), "{n}");
        }
    }

    #[test]
    fn test_is_prime_large_inputs_are_fast() {
        let c = NativeCompute;
        let start = std::time::Instant::now();

        assert_eq!(c.is_prime(9_223_372_036_854_775_783), Ok(true));
        assert_eq!(c.is_prime(i64::MAX), Ok(false));
        // 1_000_000_007 * 998_244_353
        assert_eq!(c.is_prime(998_244_359_987_710_471), Ok(false));
        // Strong pseudoprime to bases 2, 3, 5 and 7; Carmichael number.
        assert_eq!(c.is_prime(3_215_031_751), Ok(false));
        assert_eq!(c.is_prime(561), Ok(false));

        assert!(start.elapsed() < std::time::Duration::from_millis(100));
    }

    #[test]
    fn test_is_prime_negative_is_false() {
        let c = NativeCompute;
        assert_eq!(c.is_prime(-7), Ok(false));
        assert_eq!(c.is_prime(i64::MIN), Ok(false));
    }

    #[test]
    fn test_factorial() {
        let c = NativeCompute;
        assert_eq!(c.factorial(0), Ok(1));
        assert_eq!(c.factorial(1), Ok(1));
        assert_eq!(c.factorial(5), Ok(120));
        assert_eq!(c.factorial(MAX_FACTORIAL_INPUT), Ok(2_432_902_008_176_640_000));
    }

    #[test]
    fn test_factorial_overflow_is_error() {
        let c = NativeCompute;
        assert_eq!(
            c.factorial(21),
            Err(ComputeError::Overflow {
                operation: Computation::Factorial,
                n: 21
            })
        );
        assert!(matches!(c.factorial(i64::MAX), Err(ComputeError::Overflow { .. })));
    }

    #[test]
    fn test_factorial_negative_is_error() {
        assert_eq!(
            NativeCompute.factorial(-1),
            Err(ComputeError::NegativeInput {
                operation: Computation::Factorial,
                n: -1
            })
        );
    }
}
