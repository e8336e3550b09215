//! The [`ByteMatrix`] container.
//!
//! A single owned, contiguous, zero-initialised `Vec<u8>` in row-major
//! order, with its [`Shape`] stored alongside. Every element access goes
//! through the checked `row * cols + col` mapping.

use std::slice::ChunksExact;

use crate::error::MatrixError;
use crate::shape::Shape;
use crate::traversal::{self, TraversalOrder};

/// A `rows x cols` matrix of single-byte elements.
///
/// Not `Clone`: duplication is an explicit, fallible [`try_clone`].
/// Releasing consumes the value, so a released matrix cannot be used.
///
/// [`try_clone`]: ByteMatrix::try_clone
#[derive(Debug, PartialEq, Eq)]
pub struct ByteMatrix {
    shape: Shape,
    /// Row-major storage. Length is always `shape.len()`.
    data: Vec<u8>,
}

impl ByteMatrix {
    /// Allocate a zero-filled `rows x cols` matrix.
    ///
    /// Zero rows or zero columns yields [`MatrixError::EmptyShape`]. A
    /// shape whose byte count cannot be obtained from the allocator yields
    /// [`MatrixError::Allocation`]; the process is never aborted.
    pub fn new(rows: u32, cols: u32) -> Result<Self, MatrixError> {
        let shape = Shape::new(rows, cols)?;
        Self::with_shape(shape)
    }

    /// Allocate a zero-filled matrix of an already validated shape.
    pub fn with_shape(shape: Shape) -> Result<Self, MatrixError> {
        let data = alloc_zeroed(shape)?;
        Ok(Self { shape, data })
    }

    /// Adopt an existing row-major buffer.
    ///
    /// `data` must hold exactly `rows * cols` elements.
    pub fn from_vec(rows: u32, cols: u32, data: Vec<u8>) -> Result<Self, MatrixError> {
        let shape = Shape::new(rows, cols)?;
        // A length that overflows `usize` can never match a real buffer.
        let expected = shape.len().unwrap_or(usize::MAX);
        if data.len() != expected {
            return Err(MatrixError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Copy a statically shaped 2D array into a freshly allocated matrix.
    pub fn from_rows<const R: usize, const C: usize>(
        rows: &[[u8; C]; R],
    ) -> Result<Self, MatrixError> {
        let shape = Shape::new(dim(R)?, dim(C)?)?;
        let mut matrix = Self::with_shape(shape)?;
        for (dst, src) in matrix.data.chunks_exact_mut(C).zip(rows.iter()) {
            dst.copy_from_slice(src);
        }
        Ok(matrix)
    }

    /// The matrix shape.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.shape.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.shape.cols()
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`: matrices have at least one cell.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Memory usage of the element buffer in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<u8>()
    }

    /// Read the element at `(row, col)`.
    pub fn get(&self, row: u32, col: u32) -> Result<u8, MatrixError> {
        let i = self.shape.index(row, col)?;
        Ok(self.data[i])
    }

    /// Write the element at `(row, col)`. No other element is touched.
    pub fn set(&mut self, row: u32, col: u32, value: u8) -> Result<(), MatrixError> {
        let i = self.shape.index(row, col)?;
        self.data[i] = value;
        Ok(())
    }

    /// Borrow one row as a slice of `cols` elements.
    pub fn row(&self, row: u32) -> Result<&[u8], MatrixError> {
        let start = self.row_start(row)?;
        Ok(&self.data[start..start + self.cols() as usize])
    }

    /// Mutably borrow one row as a slice of `cols` elements.
    pub fn row_mut(&mut self, row: u32) -> Result<&mut [u8], MatrixError> {
        let start = self.row_start(row)?;
        let end = start + self.cols() as usize;
        Ok(&mut self.data[start..end])
    }

    /// Iterate over rows, top to bottom.
    pub fn rows_iter(&self) -> ChunksExact<'_, u8> {
        self.data.chunks_exact(self.cols() as usize)
    }

    /// The whole buffer in row-major order.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: u8) {
        self.data.fill(value);
    }

    /// Sum every element, visiting them in `order`.
    ///
    /// The result is the same for every order.
    pub fn sum(&self, order: TraversalOrder) -> i64 {
        traversal::sum_checked_len(self.shape, &self.data, order)
    }

    /// Duplicate the full buffer into a new allocation.
    pub fn try_clone(&self) -> Result<Self, MatrixError> {
        let mut data = alloc_zeroed(self.shape)?;
        data.copy_from_slice(&self.data);
        Ok(Self {
            shape: self.shape,
            data,
        })
    }

    /// Free the buffer. Equivalent to dropping the matrix.
    pub fn release(self) {
        log::debug!(
            "releasing {}x{} matrix ({} bytes)",
            self.rows(),
            self.cols(),
            self.memory_bytes()
        );
        drop(self);
    }

    fn row_start(&self, row: u32) -> Result<usize, MatrixError> {
        self.shape.index(row, 0)
    }
}

/// Narrow a const-generic dimension to `u32`.
fn dim(n: usize) -> Result<u32, MatrixError> {
    u32::try_from(n).map_err(|_| MatrixError::DimensionTooLarge { len: n })
}

/// Obtain a zeroed buffer of `shape.len()` bytes without aborting on
/// allocator failure.
fn alloc_zeroed(shape: Shape) -> Result<Vec<u8>, MatrixError> {
    let requested = (shape.rows(), shape.cols());
    let Some(len) = shape.len() else {
        log::warn!(
            "matrix allocation failed: {}x{} overflows the address space",
            requested.0,
            requested.1
        );
        return Err(MatrixError::Allocation { requested });
    };
    let mut data = Vec::new();
    if let Err(e) = data.try_reserve_exact(len) {
        log::warn!(
            "matrix allocation failed: {}x{} ({len} bytes): {e}",
            requested.0,
            requested.1
        );
        return Err(MatrixError::Allocation { requested });
    }
    // `vec![0; len]` aborts on allocator failure; reserve first, then zero.
    data.resize(len, 0);
    log::debug!(
        "allocated {}x{} matrix ({len} bytes)",
        requested.0,
        requested.1
    );
    Ok(data)
}
