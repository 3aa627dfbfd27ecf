//! Error types for the sweep, pixel buffers and the command line.

use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::element::DataType;
use crate::kernels::Op;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to allocate a buffer of {elements} elements: {source}")]
    Allocation {
        elements: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("No sizes given for the sweep")]
    EmptySweep,

    #[error("Sweep sizes must be greater than zero")]
    ZeroSize,

    #[error("Repetition count must be greater than zero")]
    ZeroRepetitions,

    #[error("No operations or no data types selected")]
    EmptySelection,

    #[error("Operation '{op}' is not available for data type '{data_type}'")]
    Unsupported { op: Op, data_type: DataType },

    #[error("Pixel buffer size mismatch: expected {expected} values, got {actual}")]
    PixelBufferSize { expected: usize, actual: usize },

    #[error("Image of {width}x{height} pixels does not fit in memory")]
    ImageTooLarge { width: usize, height: usize },

    #[error("Failed to read input '{path}': {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write output '{path}': {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Scalar and vector outputs differ at pixel {index}: {scalar:#010x} vs {vector:#010x}")]
    OutputMismatch { index: usize, scalar: u32, vector: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
