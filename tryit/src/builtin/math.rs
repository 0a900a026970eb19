//! Math builtins
use crate::{Error, Result};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Largest argument accepted by [fibonacci] and [factorial]
pub const MAX_ARGUMENT: u64 = 10_000;

fn check_argument(name: &str, n: u64) -> Result<()> {
    if n > MAX_ARGUMENT {
        return Err(Error::InvalidArgument(format!(
            "{name} {n} exceeds limit of {MAX_ARGUMENT}"
        )));
    }
    Ok(())
}

/// Computes the `n`th Fibonacci number, with `fibonacci(0) = 0` and `fibonacci(1) = 1`.
///
/// Returns [Error::InvalidArgument] for `n` above [MAX_ARGUMENT].
pub fn fibonacci(n: u64) -> Result<BigUint> {
    check_argument("fibonacci", n)?;
    let (mut prev, mut cur) = (BigUint::zero(), BigUint::one());
    for _ in 0..n {
        let next = &prev + &cur;
        prev = std::mem::replace(&mut cur, next);
    }
    Ok(prev)
}

/// Computes `n!`, with `factorial(0) = factorial(1) = 1`.
///
/// Returns [Error::InvalidArgument] for `n` above [MAX_ARGUMENT].
pub fn factorial(n: u64) -> Result<BigUint> {
    check_argument("factorial", n)?;
    Ok((2..=n).fold(BigUint::one(), |acc, k| acc * k))
}
