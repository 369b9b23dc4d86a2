// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Kumaraswamy Distribution - **Closed-Form Alternative to the Beta**
//!
//! A two-shape distribution on `[0, 1]` whose CDF and quantile have closed forms, which
//! makes it a convenient stand-in for the beta distribution in simulation.
//!
//! ## Mathematical Definition
//!
//! With shapes a > 0 and b > 0:
//! - **PDF**: f(x) = a b xᵃ⁻¹ (1 − xᵃ)ᵇ⁻¹ on [0, 1], evaluated in log space
//! - **CDF**: F(x) = 1 − (1 − xᵃ)ᵇ; 0 below 0 and 1 above 1
//! - **Quantile**: Q(p) = (1 − (1 − p)^(1/b))^(1/a)
//!
//! Non-positive shapes give `NaN` with a warning.

mod std;

use minarrow::{Bitmask, FloatArray};
use rand::Rng;

use crate::errors::KernelError;

pub use self::std::{kumaraswamy_cdf_std_to, kumaraswamy_pdf_std_to, kumaraswamy_quantile_std_to};

/// Computes the probability density function of the Kumaraswamy distribution.
///
/// `x`, `a` and `b` are recycled to the longest length. `log_prob` returns the
/// log-density, computed directly rather than as `ln` of the density.
#[inline(always)]
pub fn kumaraswamy_pdf(
    x: &[f64],
    a: &[f64],
    b: &[f64],
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::kumaraswamy_pdf_std(x, a, b, log_prob, null_mask, null_count)
}

/// Computes the cumulative distribution function of the Kumaraswamy distribution.
#[inline(always)]
pub fn kumaraswamy_cdf(
    x: &[f64],
    a: &[f64],
    b: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::kumaraswamy_cdf_std(x, a, b, lower_tail, log_prob, null_mask, null_count)
}

/// Computes the quantile function of the Kumaraswamy distribution.
#[inline(always)]
pub fn kumaraswamy_quantile(
    p: &[f64],
    a: &[f64],
    b: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::kumaraswamy_quantile_std(p, a, b, lower_tail, log_prob, null_mask, null_count)
}

/// Draws `n` Kumaraswamy variates using the caller's generator.
#[inline(always)]
pub fn kumaraswamy_sample<R: Rng + ?Sized>(
    n: usize,
    a: &[f64],
    b: &[f64],
    rng: &mut R,
) -> Result<FloatArray<f64>, KernelError> {
    std::kumaraswamy_sample_std(n, a, b, rng)
}
