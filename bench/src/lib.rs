//! Repeated-call timing harness.
//!
//! A closure is invoked a fixed number of times back to back, each call timed with a
//! monotonic clock, and the arithmetic mean of those timings is reported. There is no
//! warm-up phase and no outlier trimming: every kernel pair runs under the same
//! protocol, which is what makes their means comparable.

use std::hint::black_box;
use std::time::{Duration, Instant};

pub use bench_macros::quick_bench;

/// Repetitions used when the caller does not pick a count.
pub const DEFAULT_REPETITIONS: usize = 50;

/// Calls `f` exactly `repetitions` times and returns the mean duration of one call.
///
/// Returns [`Duration::ZERO`] when `repetitions` is zero.
pub fn measure<F, R>(repetitions: usize, mut f: F) -> Duration
where
    F: FnMut() -> R,
{
    let mut total = Duration::ZERO;
    for _ in 0..repetitions {
        let start = Instant::now();
        black_box(f());
        total += start.elapsed();
    }
    mean(total, repetitions)
}

fn mean(total: Duration, count: usize) -> Duration {
    if count == 0 {
        return Duration::ZERO;
    }
    let nanos = total.as_nanos() / count as u128;
    Duration::from_nanos(nanos as u64)
}

/// A named measurement that also keeps per-call statistics.
#[derive(Debug, Clone)]
pub struct Bencher {
    name: String,
    repetitions: usize,
}

/// Statistics from a benchmark run.
#[derive(Debug, Clone)]
pub struct BenchResult {
    pub name: String,
    pub repetitions: usize,
    pub total: Duration,
    pub mean: Duration,
    pub min: Duration,
    pub max: Duration,
    pub median: Duration,
}

impl std::fmt::Display for BenchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[BENCH] {}: {:?} (min: {:?}, max: {:?}, median: {:?}, {} reps)",
            self.name, self.mean, self.min, self.max, self.median, self.repetitions
        )
    }
}

impl Default for Bencher {
    fn default() -> Self {
        Self {
            name: String::new(),
            repetitions: DEFAULT_REPETITIONS,
        }
    }
}

impl Bencher {
    /// Create a new bencher with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the number of timed calls.
    #[must_use]
    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn repetitions(&self) -> usize {
        self.repetitions
    }

    /// Run a labeled variant without consuming self.
    ///
    /// ```ignore
    /// b.bench_labeled("scalar", || scalar_impl());
    /// b.bench_labeled("vector", || vector_impl());
    /// ```
    pub fn bench_labeled<F, R>(&self, label: &str, f: F) -> BenchResult
    where
        F: FnMut() -> R,
    {
        Bencher {
            name: format!("{}/{}", self.name, label),
            repetitions: self.repetitions,
        }
        .bench(f)
    }

    /// Run the benchmark: `repetitions` timed calls, no warm-up.
    pub fn bench<F, R>(self, mut f: F) -> BenchResult
    where
        F: FnMut() -> R,
    {
        if common::is_debug() {
            tracing::warn!(name = %self.name, "debug build, timings are not representative");
        }

        let mut times = Vec::with_capacity(self.repetitions);
        for _ in 0..self.repetitions {
            let start = Instant::now();
            black_box(f());
            times.push(start.elapsed());
        }

        self.compute_result(times)
    }

    fn compute_result(self, mut times: Vec<Duration>) -> BenchResult {
        let total: Duration = times.iter().sum();
        let mean = mean(total, times.len());

        times.sort_unstable();
        let min = times.first().copied().unwrap_or_default();
        let max = times.last().copied().unwrap_or_default();
        let median = times.get(times.len() / 2).copied().unwrap_or_default();

        let result = BenchResult {
            name: self.name,
            repetitions: times.len(),
            total,
            mean,
            min,
            max,
            median,
        };

        tracing::info!("{result}");
        result
    }
}
