// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Parameter Validation** - *Simplex Rows, Integrality and Row Matrices*
//!
//! Per-lane validity checks shared by the discrete kernels.
//!
//! ## Simplex policy
//! A probability row is valid when every entry lies in `[0, 1]` and the left-to-right
//! sum is exactly [`SIMPLEX_TARGET_SUM`]. The comparison is bitwise float equality:
//! `[0.2, 0.3, 0.5]` passes, `[0.1, 0.2, 0.699999]` does not. Integrality uses
//! `floor(x) == x` in the same spirit.
//!
//! Evaluators always validate the *whole* row with [`check_simplex_row`] and compute
//! their own prefix sums separately. A row that is fine on its first `j` entries but
//! broken afterwards is therefore invalid for every operation, including ones that
//! only need the prefix.

use crate::config::SIMPLEX_TARGET_SUM;
use crate::errors::KernelError;

/// Result of scanning one probability row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimplexCheck {
    /// Every entry in `[0, 1]` and the sum equals the target exactly.
    pub valid: bool,
    /// Left-to-right sum of the entries scanned before any short-circuit.
    pub sum: f64,
}

/// Scans a full probability row, short-circuiting on the first entry outside `[0, 1]`.
///
/// `NaN` entries count as out of range.
#[inline]
pub fn check_simplex_row(row: &[f64]) -> SimplexCheck {
    let mut sum = 0.0;
    for &p in row {
        if !(0.0..=1.0).contains(&p) {
            return SimplexCheck { valid: false, sum };
        }
        sum += p;
    }
    SimplexCheck {
        valid: sum == SIMPLEX_TARGET_SUM,
        sum,
    }
}

/// `true` for finite `x` with no fractional part.
#[inline(always)]
pub fn is_integer(x: f64) -> bool {
    x.is_finite() && x.floor() == x
}

/// `true` for a non-negative integer-valued `x` (a valid count or size).
#[inline(always)]
pub fn is_count(x: f64) -> bool {
    is_integer(x) && x >= 0.0
}

/// Row-major matrix view with an explicit column count.
///
/// Holds one probability row (or one outcome count vector) per row. Rows are recycled
/// against the output length like any other parameter array.
#[derive(Debug, Clone, Copy)]
pub struct RowMatrix<'a> {
    data: &'a [f64],
    n_cols: usize,
}

impl<'a> RowMatrix<'a> {
    /// Wraps `data` as rows of `n_cols` entries.
    ///
    /// Fails when `n_cols == 0`, `data` is empty, or `data.len()` is not a multiple of `n_cols`.
    pub fn new(data: &'a [f64], n_cols: usize) -> Result<Self, KernelError> {
        if n_cols == 0 {
            return Err(KernelError::InvalidArguments(
                "RowMatrix: need at least one column".into(),
            ));
        }
        if data.is_empty() {
            return Err(KernelError::InvalidArguments(
                "RowMatrix: need at least one row".into(),
            ));
        }
        if data.len() % n_cols != 0 {
            return Err(KernelError::InvalidArguments(format!(
                "RowMatrix: buffer length {} not a multiple of {} columns",
                data.len(),
                n_cols
            )));
        }
        Ok(Self { data, n_cols })
    }

    /// Wraps a single row.
    pub fn single_row(row: &'a [f64]) -> Result<Self, KernelError> {
        Self::new(row, row.len())
    }

    #[inline(always)]
    pub fn n_rows(&self) -> usize {
        self.data.len() / self.n_cols
    }

    #[inline(always)]
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Row `r` without recycling.
    #[inline(always)]
    pub fn row(&self, r: usize) -> &'a [f64] {
        let k = self.n_cols;
        &self.data[r * k..(r + 1) * k]
    }

    /// Row for output lane `i`, recycled over the row count.
    #[inline(always)]
    pub fn recycled_row(&self, i: usize) -> &'a [f64] {
        self.row(i % self.n_rows())
    }
}
