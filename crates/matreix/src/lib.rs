//! Variable-shape byte matrices with checked two-index access.
//!
//! A [`ByteMatrix`] owns one contiguous, zero-initialised row-major buffer
//! and stores its [`Shape`] alongside. Element access is bounds-checked and
//! reports [`MatrixError::IndexOutOfBounds`] instead of touching adjacent
//! memory. [`ByteMatrix::sum`] accumulates every element in either
//! [`TraversalOrder`]; both orders give the same total and differ only in
//! memory-access pattern.
//!
//! ```rust
//! use matreix::{ByteMatrix, TraversalOrder};
//!
//! let mut m = ByteMatrix::new(3, 4).unwrap();
//! m.set(1, 1, b'x').unwrap();
//! assert_eq!(m.sum(TraversalOrder::RowMajor), 120);
//! assert_eq!(m.sum(TraversalOrder::ColumnMajor), 120);
//! assert!(m.get(3, 0).is_err());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod matrix;
pub mod shape;
pub mod traversal;

pub use error::MatrixError;
pub use matrix::ByteMatrix;
pub use shape::Shape;
pub use traversal::{sum_slice, TraversalOrder};
