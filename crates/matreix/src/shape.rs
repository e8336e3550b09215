//! Matrix shape and the checked `(row, col)` to flat index mapping.

use crate::error::MatrixError;

/// Row and column counts of a matrix.
///
/// Validated at construction: both dimensions are non-zero. Immutable
/// after creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u32,
    cols: u32,
}

impl Shape {
    /// Create a shape, rejecting zero rows or zero columns.
    pub fn new(rows: u32, cols: u32) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::EmptyShape { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total element count, or `None` if `rows * cols` overflows `usize`.
    pub fn len(&self) -> Option<usize> {
        (self.rows as usize).checked_mul(self.cols as usize)
    }

    /// Always `false`: a validated shape has at least one cell.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `(row, col)` lies inside this shape.
    pub fn contains(&self, row: u32, col: u32) -> bool {
        row < self.rows && col < self.cols
    }

    /// Map `(row, col)` to its row-major offset `row * cols + col`.
    pub fn index(&self, row: u32, col: u32) -> Result<usize, MatrixError> {
        if !self.contains(row, col) {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.index_unchecked(row, col))
    }

    /// Row-major offset without the range check. Callers guarantee
    /// `row < rows` and `col < cols`.
    #[inline]
    pub(crate) fn index_unchecked(&self, row: u32, col: u32) -> usize {
        (row as usize) * (self.cols as usize) + (col as usize)
    }
}
