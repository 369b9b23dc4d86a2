// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Standard (scalar) implementation of the generalised extreme value distribution.
//!
//! All three evaluators work through `t(x)`, held in log form:
//! `ln t = −ln(1 + ξz)/ξ` for ξ ≠ 0 and `ln t = −z` for ξ = 0, with `z = (x − μ)/σ`.
//! Then `ln f = (ξ + 1)·ln t − t − ln σ` and `ln F = −t`.

use minarrow::{Bitmask, FloatArray};
use rand::Rng;

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::sampler::sample_uniform;
use crate::kernels::scientific::distributions::shared::tail::{
    finalize_log_density, finalize_log_prob, in_unit_interval, prepare_prob,
};
use crate::kernels::scientific::distributions::univariate::common::std::{
    recycled_kernel_f64_std, recycled_kernel_f64_std_to, recycled_sample_f64_std,
};

#[inline(always)]
fn any_nan(v: [f64; 4]) -> bool {
    v.iter().any(|a| a.is_nan())
}

/// `ln t(x)`, or `None` when `1 + ξz ≤ 0` (outside the support).
#[inline(always)]
fn gev_log_t(x: f64, location: f64, scale: f64, shape: f64) -> Option<f64> {
    let z = (x - location) / scale;
    if shape == 0.0 {
        return Some(-z);
    }
    let s = shape * z;
    if 1.0 + s <= 0.0 {
        return None;
    }
    Some(-s.ln_1p() / shape)
}

/// Log-density at `x`.
#[inline(always)]
pub(crate) fn gev_logpdf_scalar(x: f64, location: f64, scale: f64, shape: f64) -> f64 {
    if any_nan([x, location, scale, shape]) || !(scale > 0.0) {
        return f64::NAN;
    }
    match gev_log_t(x, location, scale, shape) {
        None => f64::NEG_INFINITY,
        // t overflows far in the heavy lower tail; the density there is 0
        Some(ln_t) if ln_t == f64::INFINITY => f64::NEG_INFINITY,
        Some(ln_t) => (shape + 1.0) * ln_t - ln_t.exp() - scale.ln(),
    }
}

/// Lower-tail log-probability at `x`.
///
/// Outside the support the mass is all on one side: below the lower endpoint (ξ > 0)
/// `F = 0`, above the upper endpoint (ξ < 0) `F = 1`.
#[inline(always)]
pub(crate) fn gev_logcdf_scalar(x: f64, location: f64, scale: f64, shape: f64) -> f64 {
    if any_nan([x, location, scale, shape]) || !(scale > 0.0) {
        return f64::NAN;
    }
    match gev_log_t(x, location, scale, shape) {
        None if shape > 0.0 => f64::NEG_INFINITY,
        None => 0.0,
        Some(ln_t) => -ln_t.exp(),
    }
}

/// Inverse CDF at a lower-tail probability `q ∈ [0, 1]`.
///
/// `q == 1` maps to `+∞` for every shape.
#[inline(always)]
pub(crate) fn gev_inverse_scalar(q: f64, location: f64, scale: f64, shape: f64) -> f64 {
    if q == 1.0 {
        return f64::INFINITY;
    }
    // y = −ln q ∈ (0, ∞]
    let ln_y = (-q.ln()).ln();
    if shape == 0.0 {
        location - scale * ln_y
    } else {
        // μ + σ (y^{−ξ} − 1)/ξ, with expm1 keeping small ξ accurate
        location + scale * (-shape * ln_y).exp_m1() / shape
    }
}

/// GEV PDF (zero-allocation variant).
#[inline(always)]
pub fn gev_pdf_std_to(
    x: &[f64],
    location: &[f64],
    scale: &[f64],
    shape: &[f64],
    log_prob: bool,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Option<Bitmask>, KernelError> {
    recycled_kernel_f64_std_to(
        "gev_pdf",
        x,
        [location, scale, shape],
        output,
        null_mask,
        null_count,
        |xi, [mu, sigma, k]| finalize_log_density(gev_logpdf_scalar(xi, mu, sigma, k), log_prob),
    )
}

/// GEV PDF.
#[inline(always)]
pub fn gev_pdf_std(
    x: &[f64],
    location: &[f64],
    scale: &[f64],
    shape: &[f64],
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    recycled_kernel_f64_std(
        "gev_pdf",
        x,
        [location, scale, shape],
        null_mask,
        null_count,
        |xi, [mu, sigma, k]| finalize_log_density(gev_logpdf_scalar(xi, mu, sigma, k), log_prob),
    )
}

/// GEV CDF (zero-allocation variant).
#[inline(always)]
pub fn gev_cdf_std_to(
    x: &[f64],
    location: &[f64],
    scale: &[f64],
    shape: &[f64],
    lower_tail: bool,
    log_prob: bool,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Option<Bitmask>, KernelError> {
    recycled_kernel_f64_std_to(
        "gev_cdf",
        x,
        [location, scale, shape],
        output,
        null_mask,
        null_count,
        |xi, [mu, sigma, k]| {
            finalize_log_prob(gev_logcdf_scalar(xi, mu, sigma, k), lower_tail, log_prob)
        },
    )
}

/// GEV CDF.
#[inline(always)]
pub fn gev_cdf_std(
    x: &[f64],
    location: &[f64],
    scale: &[f64],
    shape: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    recycled_kernel_f64_std(
        "gev_cdf",
        x,
        [location, scale, shape],
        null_mask,
        null_count,
        |xi, [mu, sigma, k]| {
            finalize_log_prob(gev_logcdf_scalar(xi, mu, sigma, k), lower_tail, log_prob)
        },
    )
}

#[inline(always)]
fn gev_quantile_body(p: f64, [mu, sigma, k]: [f64; 3], lower_tail: bool, log_prob: bool) -> f64 {
    if any_nan([p, mu, sigma, k]) {
        return f64::NAN;
    }
    let q = prepare_prob(p, lower_tail, log_prob);
    if !(sigma > 0.0) || !in_unit_interval(q) {
        return f64::NAN;
    }
    gev_inverse_scalar(q, mu, sigma, k)
}

/// GEV quantile (zero-allocation variant).
#[inline(always)]
pub fn gev_quantile_std_to(
    p: &[f64],
    location: &[f64],
    scale: &[f64],
    shape: &[f64],
    lower_tail: bool,
    log_prob: bool,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Option<Bitmask>, KernelError> {
    recycled_kernel_f64_std_to(
        "gev_quantile",
        p,
        [location, scale, shape],
        output,
        null_mask,
        null_count,
        |pi, ps| gev_quantile_body(pi, ps, lower_tail, log_prob),
    )
}

/// GEV quantile.
#[inline(always)]
pub fn gev_quantile_std(
    p: &[f64],
    location: &[f64],
    scale: &[f64],
    shape: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    recycled_kernel_f64_std(
        "gev_quantile",
        p,
        [location, scale, shape],
        null_mask,
        null_count,
        |pi, ps| gev_quantile_body(pi, ps, lower_tail, log_prob),
    )
}

/// GEV sampler: one uniform pushed through the inverse CDF.
#[inline]
pub fn gev_sample_std<R: Rng + ?Sized>(
    n: usize,
    location: &[f64],
    scale: &[f64],
    shape: &[f64],
    rng: &mut R,
) -> Result<FloatArray<f64>, KernelError> {
    recycled_sample_f64_std("gev_sample", n, [location, scale, shape], rng, |rng, [mu, sigma, k]| {
        if [mu, sigma, k].iter().any(|a| a.is_nan()) || !(sigma > 0.0) {
            return f64::NAN;
        }
        gev_inverse_scalar(sample_uniform(rng), mu, sigma, k)
    })
}
