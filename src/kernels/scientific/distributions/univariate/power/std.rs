// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Standard (scalar) implementation of the power distribution.
//!
//! Both the density and the cumulative are formed in log space:
//! `ln f = ln β + (β − 1) ln x − β ln α` and `ln F = β (ln x − ln α)`.

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
fn valid_params(alpha: f64, beta: f64) -> bool {
    alpha > 0.0 && beta > 0.0
}

#[inline(always)]
fn has_nan(x: f64, alpha: f64, beta: f64) -> bool {
    x.is_nan() || alpha.is_nan() || beta.is_nan()
}

/// Log-density at `x`; `-∞` outside the open support `(0, α)`.
#[inline(always)]
pub(crate) fn power_logpdf_scalar(x: f64, alpha: f64, beta: f64) -> f64 {
    if has_nan(x, alpha, beta) || !valid_params(alpha, beta) {
        return f64::NAN;
    }
    if x <= 0.0 || x >= alpha {
        return f64::NEG_INFINITY;
    }
    beta.ln() + (beta - 1.0) * x.ln() - beta * alpha.ln()
}

/// Lower-tail log-probability at `x`.
#[inline(always)]
pub(crate) fn power_logcdf_scalar(x: f64, alpha: f64, beta: f64) -> f64 {
    if has_nan(x, alpha, beta) || !valid_params(alpha, beta) {
        return f64::NAN;
    }
    if x <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if x >= alpha {
        return 0.0;
    }
    beta * (x.ln() - alpha.ln())
}

/// Inverse CDF at a lower-tail probability `q ∈ [0, 1]`.
#[inline(always)]
pub(crate) fn power_inverse_scalar(q: f64, alpha: f64, beta: f64) -> f64 {
    alpha * q.powf(1.0 / beta)
}

#[inline(always)]
fn power_quantile_body(p: f64, alpha: f64, beta: f64, lower_tail: bool, log_prob: bool) -> f64 {
    if has_nan(p, alpha, beta) {
        return f64::NAN;
    }
    let q = prepare_prob(p, lower_tail, log_prob);
    if !valid_params(alpha, beta) || !in_unit_interval(q) {
        return f64::NAN;
    }
    power_inverse_scalar(q, alpha, beta)
}

/// Power PDF (zero-allocation variant).
#[inline(always)]
pub fn power_pdf_std_to(
    x: &[f64],
    alpha: &[f64],
    beta: &[f64],
    log_prob: bool,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Option<Bitmask>, KernelError> {
    recycled_kernel_f64_std_to("power_pdf", x, [alpha, beta], output, null_mask, null_count, |xi, [a, b]| {
        finalize_log_density(power_logpdf_scalar(xi, a, b), log_prob)
    })
}

/// Power PDF.
#[inline(always)]
pub fn power_pdf_std(
    x: &[f64],
    alpha: &[f64],
    beta: &[f64],
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    recycled_kernel_f64_std("power_pdf", x, [alpha, beta], null_mask, null_count, |xi, [a, b]| {
        finalize_log_density(power_logpdf_scalar(xi, a, b), log_prob)
    })
}

/// Power CDF (zero-allocation variant).
#[inline(always)]
pub fn power_cdf_std_to(
    x: &[f64],
    alpha: &[f64],
    beta: &[f64],
    lower_tail: bool,
    log_prob: bool,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Option<Bitmask>, KernelError> {
    recycled_kernel_f64_std_to("power_cdf", x, [alpha, beta], output, null_mask, null_count, |xi, [a, b]| {
        finalize_log_prob(power_logcdf_scalar(xi, a, b), lower_tail, log_prob)
    })
}

/// Power CDF.
#[inline(always)]
pub fn power_cdf_std(
    x: &[f64],
    alpha: &[f64],
    beta: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    recycled_kernel_f64_std("power_cdf", x, [alpha, beta], null_mask, null_count, |xi, [a, b]| {
        finalize_log_prob(power_logcdf_scalar(xi, a, b), lower_tail, log_prob)
    })
}

/// Power quantile (zero-allocation variant).
#[inline(always)]
pub fn power_quantile_std_to(
    p: &[f64],
    alpha: &[f64],
    beta: &[f64],
    lower_tail: bool,
    log_prob: bool,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Option<Bitmask>, KernelError> {
    recycled_kernel_f64_std_to("power_quantile", p, [alpha, beta], output, null_mask, null_count, |pi, [a, b]| {
        power_quantile_body(pi, a, b, lower_tail, log_prob)
    })
}

/// Power quantile.
#[inline(always)]
pub fn power_quantile_std(
    p: &[f64],
    alpha: &[f64],
    beta: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    recycled_kernel_f64_std("power_quantile", p, [alpha, beta], null_mask, null_count, |pi, [a, b]| {
        power_quantile_body(pi, a, b, lower_tail, log_prob)
    })
}

/// Power sampler by inversion.
#[inline]
pub fn power_sample_std<R: Rng + ?Sized>(
    n: usize,
    alpha: &[f64],
    beta: &[f64],
    rng: &mut R,
) -> Result<FloatArray<f64>, KernelError> {
    recycled_sample_f64_std("power_sample", n, [alpha, beta], rng, |rng, [a, b]| {
        if !valid_params(a, b) {
            return f64::NAN;
        }
        power_inverse_scalar(sample_uniform(rng), a, b)
    })
}
