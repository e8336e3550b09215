//! Benchmark profiles and utilities for matreix traversal benchmarks.
//!
//! Provides pre-built [`BenchProfile`]s for benchmarks and the demo binary:
//!
//! - [`reference_profile`]: 65535x255 matrix (~16.7M cells)
//! - [`small_profile`]: 64x64 matrix for tests and quick runs
//! - [`build_matrix`]: allocate a profile's matrix and fill it deterministically
//!
//! The benchmark matrix is an ordinary value owned by the caller. It is
//! created when the caller asks for it and freed when the caller drops it.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::error::Error;
use std::fmt;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use matreix::{ByteMatrix, MatrixError, Shape, TraversalOrder};

/// Shape and fill seed for a benchmark matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchProfile {
    /// Number of rows.
    pub rows: u32,
    /// Number of columns.
    pub cols: u32,
    /// Seed for the deterministic fill pattern.
    pub seed: u64,
}

impl BenchProfile {
    /// Reference row count (0xFFFF).
    pub const REFERENCE_ROWS: u32 = 0xFFFF;

    /// Reference column count (0xFF).
    pub const REFERENCE_COLS: u32 = 0xFF;

    /// Create a profile for the given shape and seed.
    pub fn new(rows: u32, cols: u32, seed: u64) -> Self {
        Self { rows, cols, seed }
    }

    /// Check that the shape has at least one cell.
    pub fn validate(&self) -> Result<Shape, MatrixError> {
        Shape::new(self.rows, self.cols)
    }
}

impl Default for BenchProfile {
    fn default() -> Self {
        reference_profile(0)
    }
}

/// Build the reference profile: 65535x255 bytes.
///
/// Tall and narrow so that column-major traversal strides across
/// 65535 rows per column.
pub fn reference_profile(seed: u64) -> BenchProfile {
    BenchProfile::new(BenchProfile::REFERENCE_ROWS, BenchProfile::REFERENCE_COLS, seed)
}

/// Build a small 64x64 profile.
pub fn small_profile(seed: u64) -> BenchProfile {
    BenchProfile::new(64, 64, seed)
}

/// Allocate the profile's matrix and fill it with [`fill_pattern`].
pub fn build_matrix(profile: &BenchProfile) -> Result<ByteMatrix, MatrixError> {
    let shape = profile.validate()?;
    let mut matrix = ByteMatrix::with_shape(shape)?;
    for r in 0..profile.rows {
        fill_pattern(matrix.row_mut(r)?, profile.seed, u64::from(r));
    }
    Ok(matrix)
}

/// Fill `row` with deterministic pseudo-random bytes derived from
/// `seed` and `row_index`.
pub fn fill_pattern(row: &mut [u8], seed: u64, row_index: u64) {
    let mut state = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(row_index.wrapping_mul(1442695040888963407));
    for byte in row.iter_mut() {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        *byte = (state >> 56) as u8;
    }
}

/// Result of one timed traversal.
#[derive(Clone, Debug)]
pub struct TraversalTiming {
    /// Order used.
    pub order: TraversalOrder,
    /// Accumulated total.
    pub sum: i64,
    /// Wall-clock duration of the traversal.
    pub elapsed: Duration,
}

/// Sum `matrix` once in `order` and measure how long it took.
pub fn time_traversal(matrix: &ByteMatrix, order: TraversalOrder) -> TraversalTiming {
    let start = Instant::now();
    let sum = std::hint::black_box(matrix.sum(order));
    TraversalTiming {
        order,
        sum,
        elapsed: start.elapsed(),
    }
}

/// Why a harness run failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunError {
    /// The profile was invalid or its matrix could not be allocated.
    Matrix(MatrixError),
    /// Two traversal orders produced different totals.
    SumsDisagree {
        /// Row-major total.
        row_major: i64,
        /// Column-major total.
        column_major: i64,
    },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matrix(e) => write!(f, "matrix setup failed: {e}"),
            Self::SumsDisagree {
                row_major,
                column_major,
            } => {
                write!(
                    f,
                    "traversal orders disagree: rows_major {row_major}, columns_major {column_major}"
                )
            }
        }
    }
}

impl Error for RunError {}

impl From<MatrixError> for RunError {
    fn from(e: MatrixError) -> Self {
        Self::Matrix(e)
    }
}

/// Build the profile's matrix, announce its layout, and time both orders.
///
/// Logs the layout and each timing at `info`, and any failure at `error`.
/// The matrix is released before returning.
pub fn run(profile: &BenchProfile) -> Result<Vec<TraversalTiming>, RunError> {
    let result = run_inner(profile);
    if let Err(e) = &result {
        log::error!("{e}");
    }
    result
}

fn run_inner(profile: &BenchProfile) -> Result<Vec<TraversalTiming>, RunError> {
    let matrix = build_matrix(profile)?;
    log::info!("{}", layout_report(&matrix));

    let timings: Vec<TraversalTiming> = TraversalOrder::ALL
        .iter()
        .map(|&order| time_traversal(&matrix, order))
        .collect();
    for t in &timings {
        log::info!("{:>14}: sum {} in {:?}", t.order.name(), t.sum, t.elapsed);
    }
    matrix.release();

    check_agreement(&timings)?;
    Ok(timings)
}

/// Fail unless every timing carries the same total.
pub fn check_agreement(timings: &[TraversalTiming]) -> Result<(), RunError> {
    for w in timings.windows(2) {
        if w[0].sum != w[1].sum {
            return Err(RunError::SumsDisagree {
                row_major: w[0].sum,
                column_major: w[1].sum,
            });
        }
    }
    Ok(())
}

/// Map a run outcome to the process exit status.
pub fn exit_code<T>(result: &Result<T, RunError>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

/// Describe the matrix layout: shape header followed by the element buffer.
pub fn layout_report(matrix: &ByteMatrix) -> String {
    format!(
        "matrix layout:\n  rows: u32 = {}\n  cols: u32 = {}\n  data: [u8; {}] ({} bytes)",
        matrix.rows(),
        matrix.cols(),
        matrix.len(),
        matrix.memory_bytes()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_profile_validates() {
        let shape = reference_profile(42).validate().unwrap();
        assert_eq!(shape.len(), Some(0xFFFF * 0xFF));
    }

    #[test]
    fn default_is_reference_shape() {
        let p = BenchProfile::default();
        assert_eq!((p.rows, p.cols), (0xFFFF, 0xFF));
    }

    #[test]
    fn zero_profile_rejected() {
        assert!(matches!(
            BenchProfile::new(0, 10, 1).validate(),
            Err(MatrixError::EmptyShape { .. })
        ));
        assert!(build_matrix(&BenchProfile::new(10, 0, 1)).is_err());
    }

    #[test]
    fn build_matrix_deterministic() {
        let a = build_matrix(&small_profile(42)).unwrap();
        let b = build_matrix(&small_profile(42)).unwrap();
        assert_eq!(a, b);
        let c = build_matrix(&small_profile(43)).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn filled_matrix_is_not_all_zero() {
        let m = build_matrix(&small_profile(7)).unwrap();
        assert!(m.sum(TraversalOrder::RowMajor) > 0);
    }

    #[test]
    fn timed_orders_agree() {
        let m = build_matrix(&small_profile(3)).unwrap();
        let row = time_traversal(&m, TraversalOrder::RowMajor);
        let col = time_traversal(&m, TraversalOrder::ColumnMajor);
        assert_eq!(row.sum, col.sum);
        assert_eq!(row.order, TraversalOrder::RowMajor);
    }

    #[test]
    fn run_small_profile_succeeds() {
        let timings = run(&small_profile(5)).unwrap();
        assert_eq!(timings.len(), 2);
        assert_eq!(timings[0].sum, timings[1].sum);
    }

    #[test]
    fn run_zero_dimension_profile_fails() {
        assert_eq!(
            run(&BenchProfile::new(0, 4, 0)).unwrap_err(),
            RunError::Matrix(MatrixError::EmptyShape { rows: 0, cols: 4 })
        );
    }

    #[test]
    fn run_unallocatable_profile_fails() {
        assert!(matches!(
            run(&BenchProfile::new(u32::MAX, u32::MAX, 0)),
            Err(RunError::Matrix(MatrixError::Allocation { .. }))
        ));
    }

    #[test]
    fn disagreeing_sums_rejected() {
        let timing = |order, sum| TraversalTiming {
            order,
            sum,
            elapsed: Duration::ZERO,
        };
        let timings = [
            timing(TraversalOrder::RowMajor, 10),
            timing(TraversalOrder::ColumnMajor, 11),
        ];
        assert_eq!(
            check_agreement(&timings),
            Err(RunError::SumsDisagree {
                row_major: 10,
                column_major: 11
            })
        );
        assert!(check_agreement(&timings[..1]).is_ok());
    }

    #[test]
    fn exit_code_follows_outcome() {
        let ok: Result<(), RunError> = Ok(());
        let err: Result<(), RunError> = Err(RunError::Matrix(MatrixError::EmptyShape {
            rows: 0,
            cols: 1,
        }));
        assert_eq!(format!("{:?}", exit_code(&ok)), format!("{:?}", ExitCode::SUCCESS));
        assert_eq!(format!("{:?}", exit_code(&err)), format!("{:?}", ExitCode::FAILURE));
    }

    #[test]
    fn layout_report_names_shape() {
        let m = ByteMatrix::new(3, 4).unwrap();
        let report = layout_report(&m);
        assert!(report.contains("rows: u32 = 3"));
        assert!(report.contains("cols: u32 = 4"));
        assert!(report.contains("[u8; 12]"));
    }
}
