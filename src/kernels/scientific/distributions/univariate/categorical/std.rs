// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Scalar implementation of the categorical distribution kernels.
//!
//! Every lane validates its full probability row once via `check_simplex_row`, then
//! walks its own prefix sum. The prefix sum is never reused as the validity check.

use minarrow::{Bitmask, FloatArray, IntegerArray};
use rand::Rng;

use crate::config::NA_WARNING;
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::sampler::sample_uniform;
use crate::kernels::scientific::distributions::shared::tail::{
    finalize_density, finalize_prob, in_unit_interval, prepare_prob,
};
use crate::kernels::scientific::distributions::shared::validate::{
    RowMatrix, check_simplex_row, is_integer,
};
use crate::kernels::scientific::distributions::univariate::common::NullableI64Builder;
use crate::kernels::scientific::distributions::univariate::common::std::{
    recycled_row_kernel_f64_std, recycled_row_kernel_i64_std,
};
use crate::utils::warn_invalid_lanes;

/// Mass at a 1-based category `x` for one row. `NaN` for an invalid row.
#[inline(always)]
pub(crate) fn categorical_pmf_scalar(x: f64, row: &[f64]) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if !check_simplex_row(row).valid {
        return f64::NAN;
    }
    let k = row.len() as f64;
    if !is_integer(x) || x < 1.0 || x > k {
        return 0.0;
    }
    row[x as usize - 1]
}

/// Lower-tail cumulative probability at `x` for one row. `NaN` for an invalid row.
#[inline(always)]
pub(crate) fn categorical_cdf_scalar(x: f64, row: &[f64]) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if !check_simplex_row(row).valid {
        return f64::NAN;
    }
    if x < 1.0 {
        return 0.0;
    }
    let k = row.len();
    if x >= k as f64 {
        return 1.0;
    }
    // 1 ≤ x < k, so floor(x) indexes a proper prefix
    row[..x.floor() as usize].iter().sum()
}

/// Smallest 1-based category whose running sum reaches `p`.
///
/// `p` is a lower-tail probability already checked to lie in `[0, 1]`.
#[inline(always)]
pub(crate) fn categorical_inverse_scalar(p: f64, row: &[f64]) -> i64 {
    if p == 0.0 {
        return 1;
    }
    let mut acc = 0.0;
    for (j, &pj) in row.iter().enumerate() {
        acc += pj;
        if acc >= p {
            return j as i64 + 1;
        }
    }
    row.len() as i64
}

/// Categorical PMF over recycled `x` and probability rows.
#[inline(always)]
pub fn categorical_pmf_std(
    x: &[f64],
    prob: RowMatrix<'_>,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    recycled_row_kernel_f64_std("categorical_pmf", x, prob, null_mask, null_count, |xi, row| {
        finalize_density(categorical_pmf_scalar(xi, row), log_prob)
    })
}

/// Categorical CDF over recycled `x` and probability rows.
#[inline(always)]
pub fn categorical_cdf_std(
    x: &[f64],
    prob: RowMatrix<'_>,
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    recycled_row_kernel_f64_std("categorical_cdf", x, prob, null_mask, null_count, |xi, row| {
        finalize_prob(categorical_cdf_scalar(xi, row), lower_tail, log_prob)
    })
}

/// Categorical quantile over recycled `p` and probability rows.
#[inline(always)]
pub fn categorical_quantile_std(
    p: &[f64],
    prob: RowMatrix<'_>,
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<IntegerArray<i64>, KernelError> {
    recycled_row_kernel_i64_std(
        "categorical_quantile",
        p,
        prob,
        null_mask,
        null_count,
        |pi, row| {
            let q = prepare_prob(pi, lower_tail, log_prob);
            if !in_unit_interval(q) || !check_simplex_row(row).valid {
                return None;
            }
            Some(categorical_inverse_scalar(q, row))
        },
    )
}

/// Categorical sampler: one uniform per draw, rows recycled over the draws.
#[inline]
pub fn categorical_sample_std<R: Rng + ?Sized>(
    n: usize,
    prob: RowMatrix<'_>,
    rng: &mut R,
) -> Result<IntegerArray<i64>, KernelError> {
    let mut out = NullableI64Builder::new(n);
    for i in 0..n {
        let row = prob.recycled_row(i);
        if !check_simplex_row(row).valid {
            out.set_null(i);
            continue;
        }
        let u = sample_uniform(rng);
        out.set(i, Some(draw_category(u, row)));
    }
    warn_invalid_lanes("categorical_sample", NA_WARNING, out.null_count(), n);
    Ok(out.finish())
}

/// Category for a uniform `u ∈ [0, 1)`: first index whose running sum exceeds `u`.
#[inline(always)]
fn draw_category(u: f64, row: &[f64]) -> i64 {
    let mut acc = 0.0;
    for (j, &pj) in row.iter().enumerate() {
        acc += pj;
        if acc > u {
            return j as i64 + 1;
        }
    }
    row.len() as i64
}
