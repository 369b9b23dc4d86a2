// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Standard (scalar) implementation of the discrete normal distribution.

use minarrow::{Bitmask, FloatArray};
use rand::Rng;

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::sampler::sample_standard_normal;
use crate::kernels::scientific::distributions::shared::scalar::{
    normal_cdf_scalar, normal_sf_scalar,
};
use crate::kernels::scientific::distributions::shared::tail::finalize_density;
use crate::kernels::scientific::distributions::shared::validate::is_integer;
use crate::kernels::scientific::distributions::univariate::common::std::{
    recycled_kernel_f64_std, recycled_kernel_f64_std_to, recycled_sample_f64_std,
};

#[inline(always)]
fn has_nan(x: f64, mu: f64, sigma: f64) -> bool {
    x.is_nan() || mu.is_nan() || sigma.is_nan()
}

/// Mass on the integer `x`: `Φ((x + 1 − μ)/σ) − Φ((x − μ)/σ)`.
///
/// Right of the mean the difference is taken between survival functions so the
/// upper tail does not cancel to zero.
#[inline(always)]
pub(crate) fn discrete_normal_pmf_scalar(x: f64, mu: f64, sigma: f64) -> f64 {
    if has_nan(x, mu, sigma) || !(sigma > 0.0) {
        return f64::NAN;
    }
    if !is_integer(x) {
        return 0.0;
    }
    let lo = (x - mu) / sigma;
    let hi = (x + 1.0 - mu) / sigma;
    if lo > 0.0 {
        normal_sf_scalar(lo) - normal_sf_scalar(hi)
    } else {
        normal_cdf_scalar(hi) - normal_cdf_scalar(lo)
    }
}

/// `P(X ≤ x)` (or `P(X > x)` for the upper tail) at any real `x`.
#[inline(always)]
pub(crate) fn discrete_normal_cdf_scalar(x: f64, mu: f64, sigma: f64, lower_tail: bool) -> f64 {
    if has_nan(x, mu, sigma) || !(sigma > 0.0) {
        return f64::NAN;
    }
    let z = (x.floor() + 1.0 - mu) / sigma;
    if lower_tail {
        normal_cdf_scalar(z)
    } else {
        normal_sf_scalar(z)
    }
}

/// Discrete normal PMF (zero-allocation variant).
#[inline(always)]
pub fn discrete_normal_pmf_std_to(
    x: &[f64],
    mean: &[f64],
    sd: &[f64],
    log_prob: bool,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Option<Bitmask>, KernelError> {
    recycled_kernel_f64_std_to("discrete_normal_pmf", x, [mean, sd], output, null_mask, null_count, |xi, [m, s]| {
        finalize_density(discrete_normal_pmf_scalar(xi, m, s), log_prob)
    })
}

/// Discrete normal PMF.
#[inline(always)]
pub fn discrete_normal_pmf_std(
    x: &[f64],
    mean: &[f64],
    sd: &[f64],
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    recycled_kernel_f64_std("discrete_normal_pmf", x, [mean, sd], null_mask, null_count, |xi, [m, s]| {
        finalize_density(discrete_normal_pmf_scalar(xi, m, s), log_prob)
    })
}

/// Discrete normal CDF (zero-allocation variant).
#[inline(always)]
pub fn discrete_normal_cdf_std_to(
    x: &[f64],
    mean: &[f64],
    sd: &[f64],
    lower_tail: bool,
    log_prob: bool,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Option<Bitmask>, KernelError> {
    recycled_kernel_f64_std_to("discrete_normal_cdf", x, [mean, sd], output, null_mask, null_count, |xi, [m, s]| {
        // tail already chosen in probability space
        let v = discrete_normal_cdf_scalar(xi, m, s, lower_tail);
        if log_prob { v.ln() } else { v }
    })
}

/// Discrete normal CDF.
#[inline(always)]
pub fn discrete_normal_cdf_std(
    x: &[f64],
    mean: &[f64],
    sd: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    recycled_kernel_f64_std("discrete_normal_cdf", x, [mean, sd], null_mask, null_count, |xi, [m, s]| {
        // tail already chosen in probability space
        let v = discrete_normal_cdf_scalar(xi, m, s, lower_tail);
        if log_prob { v.ln() } else { v }
    })
}

/// Discrete normal sampler: `⌊μ + σZ⌋` with `Z ~ N(0, 1)`.
#[inline]
pub fn discrete_normal_sample_std<R: Rng + ?Sized>(
    n: usize,
    mean: &[f64],
    sd: &[f64],
    rng: &mut R,
) -> Result<FloatArray<f64>, KernelError> {
    recycled_sample_f64_std("discrete_normal_sample", n, [mean, sd], rng, |rng, [m, s]| {
        if m.is_nan() || !(s > 0.0) {
            return f64::NAN;
        }
        (m + s * sample_standard_normal(rng)).floor()
    })
}
