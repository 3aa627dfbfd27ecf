//! Sweep configuration.

use strum::IntoEnumIterator;

use crate::element::DataType;
use crate::error::{Error, Result};
use crate::kernels::Op;

/// Buffer sizes measured when none are given.
pub const DEFAULT_SIZES: [usize; 4] = [20_000, 200_000, 2_000_000, 20_000_000];

/// What the comparison driver measures.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    /// Buffer sizes in elements (pixels for luminance), measured in this order.
    pub sizes: Vec<usize>,
    /// Timed calls per kernel.
    pub repetitions: usize,
    pub ops: Vec<Op>,
    pub data_types: Vec<DataType>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            repetitions: bench::DEFAULT_REPETITIONS,
            ops: Op::iter().collect(),
            data_types: DataType::iter().collect(),
        }
    }
}

impl SweepConfig {
    #[must_use]
    pub fn with_sizes(mut self, sizes: impl Into<Vec<usize>>) -> Self {
        self.sizes = sizes.into();
        self
    }

    #[must_use]
    pub fn with_repetitions(mut self, repetitions: usize) -> Self {
        self.repetitions = repetitions;
        self
    }

    #[must_use]
    pub fn with_ops(mut self, ops: impl Into<Vec<Op>>) -> Self {
        self.ops = ops.into();
        self
    }

    #[must_use]
    pub fn with_data_types(mut self, data_types: impl Into<Vec<DataType>>) -> Self {
        self.data_types = data_types.into();
        self
    }

    /// Supported (op, type) pairs in selection order: ops outer, types inner.
    pub fn pairs(&self) -> Vec<(Op, DataType)> {
        self.ops
            .iter()
            .flat_map(|&op| self.data_types.iter().map(move |&dt| (op, dt)))
            .filter(|&(op, dt)| op.supports(dt))
            .collect()
    }

    /// Rejects configurations that cannot produce a sample.
    ///
    /// When the selection has no supported pair, the error names the first selected
    /// op and type.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(Error::EmptySweep);
        }
        if self.sizes.contains(&0) {
            return Err(Error::ZeroSize);
        }
        if self.repetitions == 0 {
            return Err(Error::ZeroRepetitions);
        }
        let (Some(&op), Some(&data_type)) = (self.ops.first(), self.data_types.first()) else {
            return Err(Error::EmptySelection);
        };
        if self.pairs().is_empty() {
            return Err(Error::Unsupported { op, data_type });
        }
        Ok(())
    }
}
