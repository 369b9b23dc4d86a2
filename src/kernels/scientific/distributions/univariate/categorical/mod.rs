// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Categorical Distribution - **Finite Outcome Evaluator**
//!
//! A single draw from `k` mutually exclusive categories labelled `1..=k`, with
//! probabilities given as a row `p₁, …, pₖ`. Several rows may be supplied as a
//! [`RowMatrix`]; rows recycle against the primary input like any scalar parameter.
//!
//! ## Mathematical Definition
//! - **PMF**: P(X = x) = pₓ for integer x ∈ {1, …, k}, 0 otherwise
//! - **CDF**: F(x) = Σ_{j ≤ ⌊x⌋} pⱼ, 0 below 1 and 1 from k upward
//! - **Quantile**: Q(p) = min { j : Σ_{i ≤ j} pᵢ ≥ p }, with Q(0) = 1
//!
//! ## Row validity
//! A row is usable only if every entry lies in `[0, 1]` and the left-to-right sum is
//! exactly `1.0`. Rows that fail yield `NaN` (real outputs) or a null lane (integer
//! outputs), with a single warning per call. There is no tolerance: `[0.5, 0.499999]`
//! is rejected.
//!
//! ## Applications
//! - **Survey analysis**: single-choice responses
//! - **Classification**: sampling predicted labels from class probabilities
//! - **Simulation**: discrete event selection

mod std;

use minarrow::{Bitmask, FloatArray, IntegerArray};
use rand::Rng;

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::validate::RowMatrix;

/// Computes the probability mass function of the categorical distribution.
///
/// # Parameters
/// * `x` - 1-based category values, recycled
/// * `prob` - probability rows, recycled by row
/// * `log_prob` - return `ln P(X = x)`
/// * `null_mask` - optional validity mask for `x`
/// * `null_count` - optional null count for the fast path
///
/// # Returns
/// One value per recycled lane. Non-integer or out-of-range `x` gives `0` for a valid
/// row; an invalid row gives `NaN`.
///
/// # Example
/// ```rust,ignore
/// use extra_dist_kernels::kernels::scientific::distributions::shared::validate::RowMatrix;
///
/// let prob = RowMatrix::single_row(&[0.2, 0.3, 0.5])?;
/// let out = categorical_pmf(&[1.0, 2.0, 3.0], prob, false, None, None)?;
/// // [0.2, 0.3, 0.5]
/// ```
#[inline(always)]
pub fn categorical_pmf(
    x: &[f64],
    prob: RowMatrix<'_>,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::categorical_pmf_std(x, prob, log_prob, null_mask, null_count)
}

/// Computes the cumulative distribution function of the categorical distribution.
///
/// The raw lower-tail probability is complemented when `lower_tail` is false and only
/// then logged when `log_prob` is set.
#[inline(always)]
pub fn categorical_cdf(
    x: &[f64],
    prob: RowMatrix<'_>,
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::categorical_cdf_std(x, prob, lower_tail, log_prob, null_mask, null_count)
}

/// Computes the quantile function of the categorical distribution.
///
/// `p` is exponentiated first when `log_prob` is set, complemented when `lower_tail` is
/// false, then inverted against the running sum of the row.
///
/// # Returns
/// An `IntegerArray<i64>` of 1-based categories. Lanes are null when `p` falls outside
/// `[0, 1]` after the transforms, when `p` is `NaN`, when the row is invalid, or when
/// the input lane itself is null.
#[inline(always)]
pub fn categorical_quantile(
    p: &[f64],
    prob: RowMatrix<'_>,
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<IntegerArray<i64>, KernelError> {
    std::categorical_quantile_std(p, prob, lower_tail, log_prob, null_mask, null_count)
}

/// Draws `n` categories using the caller's generator.
///
/// Draw `i` uses row `i % rows`. Invalid rows produce null lanes.
#[inline(always)]
pub fn categorical_sample<R: Rng + ?Sized>(
    n: usize,
    prob: RowMatrix<'_>,
    rng: &mut R,
) -> Result<IntegerArray<i64>, KernelError> {
    std::categorical_sample_std(n, prob, rng)
}
