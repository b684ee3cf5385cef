//! Recursive factorial
//!
//! The input range is checked before recursing, so recursion depth never
//! exceeds [`FACTORIAL_MAX_INPUT`].

use crate::common::{Error, Result};

/// Largest `n` whose factorial fits in a `u128` (34! ≈ 2.95e38)
pub const FACTORIAL_MAX_INPUT: i64 = 34;

/// Compute `n!`
///
/// Returns 1 for `n <= 1`; otherwise `n * (n - 1)!`. Negative input and
/// input above [`FACTORIAL_MAX_INPUT`] are rejected.
pub fn calculate_factorial(n: i64) -> Result<u128> {
    if n < 0 {
        return Err(Error::NegativeFactorial(n));
    }
    if n > FACTORIAL_MAX_INPUT {
        return Err(Error::FactorialOverflow(n));
    }

    let result = factorial_unchecked(n as u32);
    tracing::debug!(n, %result, "Computed factorial");
    Ok(result)
}

fn factorial_unchecked(n: u32) -> u128 {
    if n <= 1 {
        return 1;
    }
    u128::from(n) * factorial_unchecked(n - 1)
}
