//! Row-major and column-major summation.
//!
//! Both orders visit the same elements and return the same total. They
//! differ only in memory-access pattern: row-major walks the buffer with
//! stride 1, column-major with stride `cols`, which defeats the cache once
//! a column no longer fits in it.

use crate::error::MatrixError;
use crate::shape::Shape;

/// Loop nesting used when visiting every element of a matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Outer loop over rows, inner loop over columns.
    RowMajor,
    /// Outer loop over columns, inner loop over rows.
    ColumnMajor,
}

impl TraversalOrder {
    /// Both orders, row-major first.
    pub const ALL: [TraversalOrder; 2] = [Self::RowMajor, Self::ColumnMajor];

    /// Short name used in benchmark ids and log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RowMajor => "rows_major",
            Self::ColumnMajor => "columns_major",
        }
    }
}

/// Sum a row-major byte buffer of the given shape in the given order.
///
/// Returns [`MatrixError::ShapeMismatch`] if `data` does not hold exactly
/// `shape.len()` elements.
pub fn sum_slice(shape: Shape, data: &[u8], order: TraversalOrder) -> Result<i64, MatrixError> {
    // A length that overflows `usize` can never match a real slice.
    let expected = shape.len().unwrap_or(usize::MAX);
    if data.len() != expected {
        return Err(MatrixError::ShapeMismatch {
            expected,
            actual: data.len(),
        });
    }
    Ok(sum_checked_len(shape, data, order))
}

/// Summation over a buffer whose length is already known to match `shape`.
pub(crate) fn sum_checked_len(shape: Shape, data: &[u8], order: TraversalOrder) -> i64 {
    let mut sum = 0i64;
    match order {
        TraversalOrder::RowMajor => {
            for r in 0..shape.rows() {
                for c in 0..shape.cols() {
                    sum += i64::from(data[shape.index_unchecked(r, c)]);
                }
            }
        }
        TraversalOrder::ColumnMajor => {
            for c in 0..shape.cols() {
                for r in 0..shape.rows() {
                    sum += i64::from(data[shape.index_unchecked(r, c)]);
                }
            }
        }
    }
    sum
}
