//! Recursive factorial over `u64` with silent modulo-2^64 wraparound.
//!
//! The wraparound is the point: ports of this benchmark in other languages
//! produce the same wrapped value, so the arithmetic stays fixed-width
//! instead of switching to a big-integer type.

/// Input the benchmark driver feeds to [`factorial`].
pub const FACTORIAL_INPUT: u64 = 100;

/// Iterations the factorial driver runs when no override is given.
pub const DEFAULT_ITERATIONS: u64 = 1_000;

/// 100! mod 2^64. 100! carries 97 factors of two, so the wrapped product is
/// exactly zero.
pub const FACTORIAL_100_WRAPPED: u64 = 0;

/// `factorial(0) == 1`, `factorial(n) == n * factorial(n - 1)` under wrapping
/// multiplication, evaluated by direct recursion (one frame per decrement).
pub fn factorial(n: u64) -> u64 {
    if n == 0 {
        1
    } else {
        n.wrapping_mul(factorial(n - 1))
    }
}
