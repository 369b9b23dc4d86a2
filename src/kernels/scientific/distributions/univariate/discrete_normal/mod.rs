// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Discrete Normal Distribution
//!
//! The normal distribution discretised onto the integers by assigning each integer `x`
//! the normal mass of `[x, x + 1)`. Samples are the floor of a normal draw.
//!
//! ## Mathematical Definition
//!
//! With mean μ and standard deviation σ > 0, and Φ the standard normal CDF:
//! - **PMF**: P(X = x) = Φ((x + 1 − μ)/σ) − Φ((x − μ)/σ) for integer x, 0 otherwise
//! - **CDF**: P(X ≤ x) = Φ((⌊x⌋ + 1 − μ)/σ)
//!
//! There is no quantile function. σ ≤ 0 gives `NaN` with a warning.

mod std;

use minarrow::{Bitmask, FloatArray};
use rand::Rng;

use crate::errors::KernelError;

pub use self::std::{discrete_normal_cdf_std_to, discrete_normal_pmf_std_to};

/// Computes the probability mass function of the discrete normal distribution.
///
/// # Parameters
/// * `x` - Integer-valued evaluation points; fractional values have mass 0
/// * `mean` - μ, recycled
/// * `sd` - σ > 0, recycled
/// * `log_prob` - Return the log-mass
/// * `null_mask` / `null_count` - Validity of `x`
#[inline(always)]
pub fn discrete_normal_pmf(
    x: &[f64],
    mean: &[f64],
    sd: &[f64],
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::discrete_normal_pmf_std(x, mean, sd, log_prob, null_mask, null_count)
}

/// Computes the cumulative distribution function of the discrete normal distribution.
///
/// Defined for every real `x` through `⌊x⌋`. The upper tail uses the normal survival
/// function directly.
#[inline(always)]
pub fn discrete_normal_cdf(
    x: &[f64],
    mean: &[f64],
    sd: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::discrete_normal_cdf_std(x, mean, sd, lower_tail, log_prob, null_mask, null_count)
}

/// Draws `n` discrete normal variates (integer-valued `f64`) using the caller's generator.
#[inline(always)]
pub fn discrete_normal_sample<R: Rng + ?Sized>(
    n: usize,
    mean: &[f64],
    sd: &[f64],
    rng: &mut R,
) -> Result<FloatArray<f64>, KernelError> {
    std::discrete_normal_sample_std(n, mean, sd, rng)
}
