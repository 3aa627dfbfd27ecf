//! Fallibly allocated element buffers.

use std::ops::{Deref, DerefMut};

use crate::error::{Error, Result};

/// A contiguous run of elements whose allocation failure is reported, not aborted on.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericBuffer<T> {
    data: Vec<T>,
}

impl<T> NumericBuffer<T> {
    /// Allocates exactly `len` elements and fills position `i` with `fill(i)`.
    pub fn try_from_fn(len: usize, fill: impl FnMut(usize) -> T) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|source| Error::Allocation {
                elements: len,
                source,
            })?;
        data.extend((0..len).map(fill));
        Ok(Self { data })
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Clone> NumericBuffer<T> {
    /// Allocates `len` copies of `value`.
    pub fn try_filled(len: usize, value: T) -> Result<Self> {
        Self::try_from_fn(len, |_| value.clone())
    }
}

impl<T> From<Vec<T>> for NumericBuffer<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> Deref for NumericBuffer<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T> DerefMut for NumericBuffer<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}
