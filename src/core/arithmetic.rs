//! Integer arithmetic over `i64` with an explicit overflow policy.
//!
//! The plain functions (`add`, `subtract`, ...) use [`OverflowPolicy::Fail`];
//! the `*_with` variants accept any policy.

use crate::domain::model::OverflowPolicy;
use crate::utils::error::{CalcError, Result};

/// Largest `n` whose factorial fits in a `u64`.
pub const MAX_FACTORIAL_INPUT: i64 = 20;

/// Largest `n` whose Fibonacci number fits in a `u64`.
pub const MAX_FIBONACCI_INPUT: i64 = 93;

impl OverflowPolicy {
    /// Pick the result for this policy from the three candidate computations.
    fn resolve<T>(
        self,
        operation: &'static str,
        checked: Option<T>,
        wrapped: T,
        saturated: T,
    ) -> Result<T> {
        match (self, checked) {
            (_, Some(value)) => Ok(value),
            (OverflowPolicy::Wrap, None) => Ok(wrapped),
            (OverflowPolicy::Saturate, None) => Ok(saturated),
            (OverflowPolicy::Fail, None) => Err(CalcError::overflow(operation)),
        }
    }
}

pub fn add(a: i64, b: i64) -> Result<i64> {
    add_with(a, b, OverflowPolicy::Fail)
}

pub fn add_with(a: i64, b: i64, policy: OverflowPolicy) -> Result<i64> {
    policy.resolve(
        "add",
        a.checked_add(b),
        a.wrapping_add(b),
        a.saturating_add(b),
    )
}

pub fn subtract(a: i64, b: i64) -> Result<i64> {
    subtract_with(a, b, OverflowPolicy::Fail)
}

pub fn subtract_with(a: i64, b: i64, policy: OverflowPolicy) -> Result<i64> {
    policy.resolve(
        "subtract",
        a.checked_sub(b),
        a.wrapping_sub(b),
        a.saturating_sub(b),
    )
}

pub fn multiply(a: i64, b: i64) -> Result<i64> {
    multiply_with(a, b, OverflowPolicy::Fail)
}

pub fn multiply_with(a: i64, b: i64, policy: OverflowPolicy) -> Result<i64> {
    policy.resolve(
        "multiply",
        a.checked_mul(b),
        a.wrapping_mul(b),
        a.saturating_mul(b),
    )
}

/// Integer division truncating toward zero: `divide(-7, 2) == Ok(-3)`.
///
/// `i64::MIN / -1` is the only quotient that does not fit and is reported as
/// overflow.
pub fn divide(a: i64, b: i64) -> Result<i64> {
    divide_with(a, b, OverflowPolicy::Fail)
}

pub fn divide_with(a: i64, b: i64, policy: OverflowPolicy) -> Result<i64> {
    if b == 0 {
        return Err(CalcError::DivisionByZero);
    }
    policy.resolve(
        "divide",
        a.checked_div(b),
        a.wrapping_div(b),
        a.saturating_div(b),
    )
}

/// Remainder of truncating division; the sign follows the dividend.
///
/// Together with [`divide`], `divide(a, b) * b + remainder(a, b) == a`.
pub fn remainder(a: i64, b: i64) -> Result<i64> {
    if b == 0 {
        return Err(CalcError::DivisionByZero);
    }
    // i64::MIN % -1 is mathematically 0, which is what wrapping_rem returns.
    Ok(a.wrapping_rem(b))
}

/// `n!` as a `u64`. Inputs above [`MAX_FACTORIAL_INPUT`] overflow.
pub fn factorial(n: i64) -> Result<u64> {
    factorial_with(n, OverflowPolicy::Fail)
}

pub fn factorial_with(n: i64, policy: OverflowPolicy) -> Result<u64> {
    if n < 0 {
        return Err(CalcError::invalid_argument(
            "factorial",
            format!("negative input: {}", n),
        ));
    }

    let mut acc: u64 = 1;
    for i in 2..=n as u64 {
        acc = policy.resolve(
            "factorial",
            acc.checked_mul(i),
            acc.wrapping_mul(i),
            acc.saturating_mul(i),
        )?;
        // Fixed points: a wrapped product that reached 0, or a saturated one at MAX.
        if acc == 0 || (policy == OverflowPolicy::Saturate && acc == u64::MAX) {
            break;
        }
    }
    Ok(acc)
}

/// The `n`th Fibonacci number with `fibonacci(0) == 0`.
pub fn fibonacci(n: i64) -> Result<u64> {
    if n < 0 {
        return Err(CalcError::invalid_argument(
            "fibonacci",
            format!("negative input: {}", n),
        ));
    }
    if n > MAX_FIBONACCI_INPUT {
        return Err(CalcError::overflow("fibonacci"));
    }

    let (mut prev, mut curr): (u64, u64) = (0, 1);
    if n == 0 {
        return Ok(prev);
    }
    for _ in 2..=n {
        let next = curr
            .checked_add(prev)
            .ok_or_else(|| CalcError::overflow("fibonacci"))?;
        prev = curr;
        curr = next;
    }
    Ok(curr)
}

/// Greatest common divisor by Euclid's algorithm on absolute values.
///
/// Works on `u64` magnitudes so `i64::MIN` does not overflow:
/// `gcd(i64::MIN, 0) == 1 << 63`.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i: i64 = 5;
    // `i <= n / i` rather than `i * i <= n` keeps the bound from overflowing.
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Prime factors of `n` in ascending order, with multiplicity. Empty for `n <= 1`.
pub fn prime_factors(n: i64) -> Vec<u64> {
    let mut factors = Vec::new();
    if n <= 1 {
        return factors;
    }

    let mut n = n as u64;
    while n % 2 == 0 {
        factors.push(2);
        n /= 2;
    }
    let mut i: u64 = 3;
    while i <= n / i {
        while n % i == 0 {
            factors.push(i);
            n /= i;
        }
        i += 2;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}
