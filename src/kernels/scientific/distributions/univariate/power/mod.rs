// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Power Distribution
//!
//! A bounded distribution on `(0, α)` whose CDF is a power of `x/α`. With β = 1 it is
//! the uniform distribution on `(0, α)`; β > 1 piles mass towards the upper bound.
//!
//! ## Mathematical Definition
//!
//! With α > 0 and β > 0:
//! - **PDF**: f(x) = β x^(β−1) / α^β for 0 < x < α, 0 elsewhere
//! - **CDF**: F(x) = (x/α)^β; 0 at or below 0, 1 at or above α
//! - **Quantile**: Q(p) = α p^(1/β)
//!
//! The cumulative is evaluated as a log-probability, and the upper tail is formed
//! from it with `−expm1` before any logarithm is applied.

mod std;

use minarrow::{Bitmask, FloatArray};
use rand::Rng;

use crate::errors::KernelError;

pub use self::std::{power_cdf_std_to, power_pdf_std_to, power_quantile_std_to};

/// Computes the probability density function of the power distribution.
///
/// # Parameters
/// * `x` - Evaluation points
/// * `alpha` - Upper bound α > 0
/// * `beta` - Shape β > 0
/// * `log_prob` - Return the log-density
/// * `null_mask` / `null_count` - Validity of `x`
#[inline(always)]
pub fn power_pdf(
    x: &[f64],
    alpha: &[f64],
    beta: &[f64],
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::power_pdf_std(x, alpha, beta, log_prob, null_mask, null_count)
}

/// Computes the cumulative distribution function of the power distribution.
#[inline(always)]
pub fn power_cdf(
    x: &[f64],
    alpha: &[f64],
    beta: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::power_cdf_std(x, alpha, beta, lower_tail, log_prob, null_mask, null_count)
}

/// Computes the quantile function of the power distribution.
#[inline(always)]
pub fn power_quantile(
    p: &[f64],
    alpha: &[f64],
    beta: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::power_quantile_std(p, alpha, beta, lower_tail, log_prob, null_mask, null_count)
}

/// Draws `n` power variates using the caller's generator.
#[inline(always)]
pub fn power_sample<R: Rng + ?Sized>(
    n: usize,
    alpha: &[f64],
    beta: &[f64],
    rng: &mut R,
) -> Result<FloatArray<f64>, KernelError> {
    std::power_sample_std(n, alpha, beta, rng)
}
