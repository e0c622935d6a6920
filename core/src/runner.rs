//! Shared measurement loop used by both benchmark drivers.
//!
//! Centralizing the timed loop keeps the two executables and the Criterion
//! benches reporting the same thing: one stopwatch read before the loop, one
//! after, a single result slot overwritten on every iteration.

use std::time::Duration;

use anyhow::{Result, bail};

use crate::timer::Stopwatch;

/// Outcome of one timed run: how many iterations ran, how long the whole loop
/// took, and the value the final iteration produced.
#[derive(Debug)]
pub struct Measurement<T> {
    pub iterations: u64,
    pub elapsed: Duration,
    pub result: T,
}

impl<T> Measurement<T> {
    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed.as_nanos() as f64 * 1.0e-6
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_nanos() as f64 * 1.0e-9
    }
}

impl<T: PartialEq + std::fmt::Debug> Measurement<T> {
    /// Sanity check of the final result, not a validation pass.
    pub fn verify(&self, expected: &T) -> Result<()> {
        if self.result == *expected {
            Ok(())
        } else {
            bail!("expected {:?} but observed {:?}", expected, self.result)
        }
    }
}

/// Runs `op` the given number of times inside a single stopwatch window,
/// overwriting one result variable each iteration.
pub fn run_timed<T>(iterations: u64, mut op: impl FnMut() -> T) -> Result<Measurement<T>> {
    if iterations == 0 {
        bail!("iteration count must be at least 1");
    }

    tracing::debug!(iterations, "starting timed loop");
    let watch = Stopwatch::start();
    let mut result = op();
    for _ in 1..iterations {
        result = op();
    }
    let elapsed = watch.elapsed();
    tracing::debug!(?elapsed, "timed loop finished");

    Ok(Measurement {
        iterations,
        elapsed,
        result,
    })
}
