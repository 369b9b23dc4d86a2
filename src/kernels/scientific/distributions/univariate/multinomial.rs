// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Multinomial Distribution
//!
//! The multinomial distribution generalises the binomial distribution to multiple categories,
//! modelling the probability of observing specific counts across k mutually exclusive outcomes
//! in `size` independent trials. Each trial results in exactly one of the k possible outcomes.
//!
//! ## Mathematical Definition
//!
//! For k categories with probabilities p₁, p₂, ..., pₖ (where Σpᵢ = 1) and `size` trials:
//! ```text
//! P(X₁=x₁, ..., Xₖ=xₖ) = size! / (x₁!...xₖ!) × p₁^x₁ × ... × pₖ^xₖ
//! ```
//!
//! Where xᵢ ≥ 0 and Σxᵢ = size (total count constraint).
//!
//! ## Layout
//! Outcomes and probabilities are both [`RowMatrix`] views with one vector per row. The
//! output length is the longest of the outcome rows, `size` and the probability rows,
//! each recycled. Column counts must agree up front.
//!
//! ## Invalid lanes
//! - An impossible outcome (negative or fractional count, counts not summing to `size`,
//!   `size` not a non-negative integer) has density `0` / log-density `-∞`. This is
//!   decided before the probability row is looked at.
//! - A probability entry outside `[0, 1]` is treated the same way.
//! - Otherwise a probability row whose entries are in range but do not sum to exactly
//!   one gives `NaN`.
//!
//! ## Applications
//!
//! - **Genetics**: Allele frequencies in population studies
//! - **Text analysis**: Word frequencies and topic modelling
//! - **Survey analysis**: Multiple-choice response patterns

use minarrow::{Bitmask, FloatArray, IntegerArray, Vec64, vec64};
use rand::Rng;

use crate::config::NA_WARNING;
use crate::errors::{KernelError, log_length_mismatch};
use crate::kernels::scientific::distributions::shared::recycle::{Recycled, recycled_len};
use crate::kernels::scientific::distributions::shared::sampler::sample_binomial;
use crate::kernels::scientific::distributions::shared::scalar::{ln_factorial, xlogy};
use crate::kernels::scientific::distributions::shared::tail::finalize_log_density;
use crate::kernels::scientific::distributions::shared::validate::{
    RowMatrix, check_simplex_row, is_count,
};
use crate::kernels::scientific::distributions::univariate::common::NullableI64Builder;
use crate::kernels::scientific::distributions::univariate::common::std::drive_f64_to;
use crate::utils::{confirm_mask_capacity, warn_invalid_lanes};

/// Log-mass of one outcome vector.
#[inline(always)]
fn multinomial_log_pmf_scalar(counts: &[f64], size: f64, row: &[f64]) -> f64 {
    if size.is_nan() || counts.iter().any(|c| c.is_nan()) {
        return f64::NAN;
    }
    // Impossible outcomes first, independent of the probability row
    if !is_count(size) || !counts.iter().all(|&c| is_count(c)) {
        return f64::NEG_INFINITY;
    }
    let total: f64 = counts.iter().sum();
    if total != size {
        return f64::NEG_INFINITY;
    }
    // Entries outside [0, 1] make the outcome impossible; only an in-range row with
    // the wrong sum is NaN
    if row.iter().any(|&p| !p.is_nan() && !(0.0..=1.0).contains(&p)) {
        return f64::NEG_INFINITY;
    }
    if !check_simplex_row(row).valid {
        return f64::NAN;
    }
    let mut log_pmf = ln_factorial(size);
    for (&c, &p) in counts.iter().zip(row) {
        // xlogy skips zero counts, so p = 0 with x = 0 contributes nothing
        log_pmf += xlogy(c, p) - ln_factorial(c);
    }
    log_pmf
}

/// Computes the probability mass function of the multinomial distribution.
///
/// Calculates the probability of observing specific count combinations across multiple
/// categories, one output per recycled (outcome row, size, probability row) triple.
///
/// ## Parameters
/// - `x`: outcome counts, one vector of `k` counts per row
/// - `size`: number of trials, recycled
/// - `prob`: category probabilities, one row of `k` per row
/// - `log_prob`: return the log-mass
/// - `null_mask`: optional validity bitmask over the outcome rows
/// - `null_count`: optional null count for the fast path
///
/// ## Returns
/// - **Success**: one value per recycled lane
/// - **Error**: `KernelError::LengthMismatch` when `x` and `prob` disagree on `k`
///
/// ## Example Usage
/// ```rust,ignore
/// let x = RowMatrix::new(&[2.0, 1.0, 2.0, 1.0, 0.0, 4.0], 3)?; // (2,1,2) and (1,0,4)
/// let prob = RowMatrix::single_row(&[0.3, 0.2, 0.5])?;
/// let result = multinomial_pmf(x, &[5.0], prob, false, None, None)?;
/// ```
#[inline]
pub fn multinomial_pmf(
    x: RowMatrix<'_>,
    size: &[f64],
    prob: RowMatrix<'_>,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    if x.n_cols() != prob.n_cols() {
        return Err(KernelError::LengthMismatch(log_length_mismatch(
            "multinomial_pmf",
            x.n_cols(),
            prob.n_cols(),
        )));
    }
    let nx = x.n_rows();
    confirm_mask_capacity("multinomial_pmf", nx, null_mask)?;
    let len = recycled_len(&[nx, size.len(), prob.n_rows()]);
    if len == 0 {
        return Ok(FloatArray::from_slice(&[]));
    }

    let sizes = Recycled::new(size);
    let mut out: Vec64<f64> = vec64![0.0; len];
    let out_mask = drive_f64_to(
        "multinomial_pmf",
        nx,
        out.as_mut_slice(),
        null_mask,
        null_count,
        |i| {
            let counts = x.recycled_row(i);
            let n = sizes.at(i);
            let ld = multinomial_log_pmf_scalar(counts, n, prob.recycled_row(i));
            let input_nan = n.is_nan() || counts.iter().any(|c| c.is_nan());
            (finalize_log_density(ld, log_prob), ld.is_nan() && !input_nan)
        },
    )?;
    Ok(FloatArray::from_vec64(out, out_mask))
}

/// Sizes at or above 2⁶³ cannot be represented as `i64` counts.
const MAX_TRIALS: f64 = i64::MAX as f64;

/// One multinomial vector by sequential conditional binomial draws.
///
/// Category `j` takes `Binomial(remaining, pⱼ / (1 − Σ_{i<j} pᵢ))`; the last category
/// gets whatever is left.
#[inline]
fn draw_multinomial_row<R: Rng + ?Sized>(rng: &mut R, trials: u64, row: &[f64], out: &mut [i64]) {
    let k = row.len();
    let mut remaining = trials;
    let mut consumed = 0.0;
    for j in 0..k - 1 {
        let rest = 1.0 - consumed;
        let cond = if rest > 0.0 { row[j] / rest } else { 0.0 };
        let xj = sample_binomial(rng, remaining, cond);
        out[j] = xj as i64;
        remaining -= xj;
        consumed += row[j];
    }
    out[k - 1] = remaining as i64;
}

/// Draws `n` multinomial count vectors using the caller's generator.
///
/// ## Returns
/// A row-major `IntegerArray<i64>` of `n × k` counts. Draw `i` uses `size[i % |size|]`
/// and probability row `i % rows`. An invalid probability row, or a `size` that is not
/// a non-negative integer below 2⁶³, nulls the whole output row.
///
/// ## Errors
/// `KernelError::InvalidArguments` when `n > 0` and `size` is empty.
#[inline]
pub fn multinomial_sample<R: Rng + ?Sized>(
    n: usize,
    size: &[f64],
    prob: RowMatrix<'_>,
    rng: &mut R,
) -> Result<IntegerArray<i64>, KernelError> {
    if n > 0 && size.is_empty() {
        return Err(KernelError::InvalidArguments(
            "multinomial_sample: size must be non-empty when n > 0".into(),
        ));
    }
    let k = prob.n_cols();
    let sizes = Recycled::new(size);
    let mut out = NullableI64Builder::new(n * k);
    let mut draw = vec![0i64; k];
    let mut n_invalid = 0usize;

    for i in 0..n {
        let row = prob.recycled_row(i);
        let trials = sizes.at(i);
        if !is_count(trials) || trials >= MAX_TRIALS || !check_simplex_row(row).valid {
            for j in 0..k {
                out.set_null(i * k + j);
            }
            n_invalid += 1;
            continue;
        }
        draw_multinomial_row(rng, trials as u64, row, &mut draw);
        for (j, &c) in draw.iter().enumerate() {
            out.set(i * k + j, Some(c));
        }
    }
    warn_invalid_lanes("multinomial_sample", NA_WARNING, n_invalid, n);
    Ok(out.finish())
}
