//! Monotonic stopwatch for the benchmark loops.
//!
//! Earlier ports of these benchmarks sampled only the sub-second nanosecond
//! field of a realtime clock, which wraps whenever the measured interval
//! crosses a one-second boundary. `Instant` keeps the full monotonic reading,
//! so intervals of any length are safe.

use std::time::{Duration, Instant};

pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Stopwatch {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
