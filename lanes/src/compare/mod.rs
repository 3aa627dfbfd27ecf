//! Scalar vs vector comparison driver.
//!
//! For every size of the sweep, fresh input buffers are allocated, each selected kernel
//! pair is timed with [`bench::measure`], and the buffers are dropped before the next
//! size. A size whose buffers cannot be allocated is skipped as a whole.

mod config;

pub use config::{DEFAULT_SIZES, SweepConfig};

use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::buffer::NumericBuffer;
use crate::element::{DataType, Element, Float};
use crate::error::{Error, Result};
use crate::kernels::{Op, scalar, vector};
use crate::luminance;

/// Mean latencies of the scalar and vector kernel for one (op, type, size).
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementSample {
    op: Op,
    data_type: DataType,
    size: usize,
    repetitions: usize,
    scalar_mean: Duration,
    vector_mean: Duration,
}

impl MeasurementSample {
    pub fn new(
        op: Op,
        data_type: DataType,
        size: usize,
        repetitions: usize,
        scalar_mean: Duration,
        vector_mean: Duration,
    ) -> Self {
        Self {
            op,
            data_type,
            size,
            repetitions,
            scalar_mean,
            vector_mean,
        }
    }

    pub fn op(&self) -> Op {
        self.op
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn repetitions(&self) -> usize {
        self.repetitions
    }

    pub fn scalar_mean(&self) -> Duration {
        self.scalar_mean
    }

    pub fn vector_mean(&self) -> Duration {
        self.vector_mean
    }

    pub fn scalar_ms(&self) -> f64 {
        self.scalar_mean.as_secs_f64() * 1e3
    }

    pub fn vector_ms(&self) -> f64 {
        self.vector_mean.as_secs_f64() * 1e3
    }

    /// `scalar / vector`; above 1.0 the vector kernel was faster. Infinite or NaN when
    /// the vector mean rounds to zero.
    pub fn speedup(&self) -> f64 {
        self.scalar_mean.as_secs_f64() / self.vector_mean.as_secs_f64()
    }
}

#[derive(Serialize)]
struct SampleRecord {
    op: Op,
    data_type: DataType,
    size: usize,
    repetitions: usize,
    scalar_ms: f64,
    vector_ms: f64,
    speedup: f64,
}

impl Serialize for MeasurementSample {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        SampleRecord {
            op: self.op,
            data_type: self.data_type,
            size: self.size,
            repetitions: self.repetitions,
            scalar_ms: self.scalar_ms(),
            vector_ms: self.vector_ms(),
            speedup: self.speedup(),
        }
        .serialize(serializer)
    }
}

/// A size that produced no samples.
#[derive(Debug)]
pub struct SkippedSize {
    pub size: usize,
    pub error: Error,
}

#[derive(Debug, Default)]
pub struct SweepOutcome {
    /// Samples in sweep order: sizes outer, then the config's pair order.
    pub samples: Vec<MeasurementSample>,
    pub skipped: Vec<SkippedSize>,
}

/// Runs the whole sweep. Only configuration errors abort it.
pub fn run_sweep(config: &SweepConfig) -> Result<SweepOutcome> {
    config.validate()?;
    let pairs = config.pairs();
    let mut outcome = SweepOutcome::default();

    for &size in &config.sizes {
        tracing::info!(size, pairs = pairs.len(), "measuring size");
        match measure_size(&pairs, size, config.repetitions) {
            Ok(samples) => outcome.samples.extend(samples),
            Err(error @ Error::Allocation { .. }) => {
                tracing::warn!(size, %error, "skipping size");
                outcome.skipped.push(SkippedSize { size, error });
            }
            Err(error) => return Err(error),
        }
    }

    Ok(outcome)
}

fn measure_size(
    pairs: &[(Op, DataType)],
    size: usize,
    repetitions: usize,
) -> Result<Vec<MeasurementSample>> {
    let mut samples = Vec::with_capacity(pairs.len());
    for &(op, data_type) in pairs {
        let sample = measure_pair(op, data_type, size, repetitions)?;
        tracing::debug!(
            op = %op,
            data_type = %data_type,
            size,
            scalar_ms = sample.scalar_ms(),
            vector_ms = sample.vector_ms(),
            speedup = sample.speedup(),
            "measured"
        );
        samples.push(sample);
    }
    Ok(samples)
}

/// Times the scalar and vector kernel of one pair over freshly filled buffers.
pub fn measure_pair(
    op: Op,
    data_type: DataType,
    size: usize,
    repetitions: usize,
) -> Result<MeasurementSample> {
    let (scalar_mean, vector_mean) = match (op, data_type) {
        (Op::Cos, DataType::F32) => time_cos::<f32>(size, repetitions)?,
        (Op::Cos, DataType::F64) => time_cos::<f64>(size, repetitions)?,
        (Op::Luminance, DataType::Bgra8) => time_luminance(size, repetitions)?,
        (Op::Add | Op::Mul | Op::Div | Op::Fma, DataType::F32) => {
            time_arithmetic::<f32>(op, size, repetitions)?
        }
        (Op::Add | Op::Mul | Op::Div | Op::Fma, DataType::F64) => {
            time_arithmetic::<f64>(op, size, repetitions)?
        }
        (Op::Add | Op::Mul | Op::Div | Op::Fma, DataType::I32) => {
            time_arithmetic::<i32>(op, size, repetitions)?
        }
        _ => return Err(Error::Unsupported { op, data_type }),
    };

    Ok(MeasurementSample::new(
        op,
        data_type,
        size,
        repetitions,
        scalar_mean,
        vector_mean,
    ))
}

/// Inputs `a[i] = i + 1`, `b[i] = i + 2`, output zeroed.
fn arithmetic_buffers<T: Element>(
    size: usize,
) -> Result<(NumericBuffer<T>, NumericBuffer<T>, NumericBuffer<T>)> {
    let a = NumericBuffer::try_from_fn(size, |i| T::from_index(i, 1))?;
    let b = NumericBuffer::try_from_fn(size, |i| T::from_index(i, 2))?;
    let out = NumericBuffer::try_filled(size, T::default())?;
    Ok((a, b, out))
}

fn time_arithmetic<T: Element>(
    op: Op,
    size: usize,
    repetitions: usize,
) -> Result<(Duration, Duration)> {
    let (a, b, mut out) = arithmetic_buffers::<T>(size)?;

    type Kernel<T> = fn(&[T], &[T], &mut [T]);
    let (scalar_kernel, vector_kernel): (Kernel<T>, Kernel<T>) = match op {
        Op::Add => (scalar::add, vector::add),
        Op::Mul => (scalar::mul, vector::mul),
        Op::Div => (scalar::div, vector::div),
        Op::Fma => (scalar::fma, vector::fma),
        _ => {
            return Err(Error::Unsupported {
                op,
                data_type: T::DATA_TYPE,
            });
        }
    };

    // fma accumulates into `out`; both kernels see the same growing accumulator.
    let scalar_mean = bench::measure(repetitions, || scalar_kernel(&a, &b, &mut out));
    let vector_mean = bench::measure(repetitions, || vector_kernel(&a, &b, &mut out));
    Ok((scalar_mean, vector_mean))
}

fn time_cos<T: Float>(size: usize, repetitions: usize) -> Result<(Duration, Duration)> {
    let a = NumericBuffer::try_from_fn(size, |i| T::from_index(i, 1))?;
    let mut out = NumericBuffer::try_filled(size, T::default())?;

    let scalar_mean = bench::measure(repetitions, || scalar::cos(&a, &mut out));
    let vector_mean = bench::measure(repetitions, || vector::cos(&a, &mut out));
    Ok((scalar_mean, vector_mean))
}

/// Deterministic, well-mixed pixel for position `i`.
fn pixel_pattern(i: usize) -> u32 {
    (i as u32).wrapping_mul(0x9E37_79B1).rotate_left(7)
}

fn time_luminance(size: usize, repetitions: usize) -> Result<(Duration, Duration)> {
    let src = NumericBuffer::try_from_fn(size, pixel_pattern)?;
    let mut dst = NumericBuffer::try_filled(size, 0u32)?;

    let scalar_mean = bench::measure(repetitions, || luminance::scalar_row(&src, &mut dst));
    let vector_mean = bench::measure(repetitions, || luminance::vector_row(&src, &mut dst));
    Ok((scalar_mean, vector_mean))
}
