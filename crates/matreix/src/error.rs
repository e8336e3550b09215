//! Matrix error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur when creating or accessing a matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatrixError {
    /// The element buffer could not be obtained from the allocator, or its
    /// size does not fit in the address space.
    Allocation {
        /// Requested shape as `(rows, cols)`.
        requested: (u32, u32),
    },
    /// A `(row, col)` pair outside the matrix shape.
    IndexOutOfBounds {
        /// Requested row.
        row: u32,
        /// Requested column.
        col: u32,
        /// Number of rows in the matrix.
        rows: u32,
        /// Number of columns in the matrix.
        cols: u32,
    },
    /// Attempted to construct a matrix with zero rows or zero columns.
    EmptyShape {
        /// Requested row count.
        rows: u32,
        /// Requested column count.
        cols: u32,
    },
    /// A supplied buffer does not hold exactly `rows * cols` elements.
    ShapeMismatch {
        /// Element count implied by the shape.
        expected: usize,
        /// Element count actually supplied.
        actual: usize,
    },
    /// A dimension does not fit in `u32`.
    DimensionTooLarge {
        /// The offending dimension.
        len: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocation { requested } => {
                write!(
                    f,
                    "matrix allocation failed for {}x{} elements",
                    requested.0, requested.1
                )
            }
            Self::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "index ({row}, {col}) out of bounds: [0, {rows}) x [0, {cols})"
                )
            }
            Self::EmptyShape { rows, cols } => {
                write!(f, "matrix shape {rows}x{cols} must have at least one cell")
            }
            Self::ShapeMismatch { expected, actual } => {
                write!(
                    f,
                    "buffer length mismatch: expected {expected} elements, got {actual}"
                )
            }
            Self::DimensionTooLarge { len } => {
                write!(f, "dimension {len} exceeds u32::MAX")
            }
        }
    }
}

impl Error for MatrixError {}
