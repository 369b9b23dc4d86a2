// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Standard (scalar) implementation of the Kumaraswamy distribution.
//!
//! Everything runs through `ln(1 − xᵃ)` computed as `ln1p(−xᵃ)`, which is the log of the
//! survival function divided by `b`.

use minarrow::{Bitmask, FloatArray};
use rand::Rng;

use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::sampler::sample_uniform;
use crate::kernels::scientific::distributions::shared::scalar::xlogy;
use crate::kernels::scientific::distributions::shared::tail::{
    finalize_log_density, finalize_log_survival, in_unit_interval, prepare_prob,
};
use crate::kernels::scientific::distributions::univariate::common::std::{
    recycled_kernel_f64_std, recycled_kernel_f64_std_to, recycled_sample_f64_std,
};

#[inline(always)]
fn valid_shapes(a: f64, b: f64) -> bool {
    a > 0.0 && b > 0.0
}

/// `(b − 1) · ln(1 − xᵃ)`, zero when `b == 1`.
#[inline(always)]
fn tail_term(x: f64, a: f64, b: f64) -> f64 {
    if b == 1.0 {
        0.0
    } else {
        (b - 1.0) * (-x.powf(a)).ln_1p()
    }
}

/// Log-density at `x`.
#[inline(always)]
pub(crate) fn kumaraswamy_logpdf_scalar(x: f64, a: f64, b: f64) -> f64 {
    if x.is_nan() || a.is_nan() || b.is_nan() || !valid_shapes(a, b) {
        return f64::NAN;
    }
    if !(0.0..=1.0).contains(&x) {
        return f64::NEG_INFINITY;
    }
    a.ln() + b.ln() + xlogy(a - 1.0, x) + tail_term(x, a, b)
}

/// Log-survival `ln(1 − F(x)) = b · ln(1 − xᵃ)`.
#[inline(always)]
pub(crate) fn kumaraswamy_logsf_scalar(x: f64, a: f64, b: f64) -> f64 {
    if x.is_nan() || a.is_nan() || b.is_nan() || !valid_shapes(a, b) {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return f64::NEG_INFINITY;
    }
    b * (-x.powf(a)).ln_1p()
}

/// Inverse CDF at a lower-tail probability `q ∈ [0, 1]`.
#[inline(always)]
pub(crate) fn kumaraswamy_inverse_scalar(q: f64, a: f64, b: f64) -> f64 {
    // 1 − (1 − q)^{1/b}
    let inner = -((-q).ln_1p() / b).exp_m1();
    inner.powf(1.0 / a)
}

#[inline(always)]
fn kumaraswamy_quantile_body(p: f64, a: f64, b: f64, lower_tail: bool, log_prob: bool) -> f64 {
    if p.is_nan() || a.is_nan() || b.is_nan() {
        return f64::NAN;
    }
    let q = prepare_prob(p, lower_tail, log_prob);
    if !valid_shapes(a, b) || !in_unit_interval(q) {
        return f64::NAN;
    }
    kumaraswamy_inverse_scalar(q, a, b)
}

/// Kumaraswamy PDF (zero-allocation variant).
#[inline(always)]
pub fn kumaraswamy_pdf_std_to(
    x: &[f64],
    a: &[f64],
    b: &[f64],
    log_prob: bool,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Option<Bitmask>, KernelError> {
    recycled_kernel_f64_std_to("kumaraswamy_pdf", x, [a, b], output, null_mask, null_count, |xi, [a, b]| {
        finalize_log_density(kumaraswamy_logpdf_scalar(xi, a, b), log_prob)
    })
}

/// Kumaraswamy PDF.
#[inline(always)]
pub fn kumaraswamy_pdf_std(
    x: &[f64],
    a: &[f64],
    b: &[f64],
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    recycled_kernel_f64_std("kumaraswamy_pdf", x, [a, b], null_mask, null_count, |xi, [a, b]| {
        finalize_log_density(kumaraswamy_logpdf_scalar(xi, a, b), log_prob)
    })
}

/// Kumaraswamy CDF (zero-allocation variant).
#[inline(always)]
pub fn kumaraswamy_cdf_std_to(
    x: &[f64],
    a: &[f64],
    b: &[f64],
    lower_tail: bool,
    log_prob: bool,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Option<Bitmask>, KernelError> {
    recycled_kernel_f64_std_to("kumaraswamy_cdf", x, [a, b], output, null_mask, null_count, |xi, [a, b]| {
        finalize_log_survival(kumaraswamy_logsf_scalar(xi, a, b), lower_tail, log_prob)
    })
}

/// Kumaraswamy CDF.
#[inline(always)]
pub fn kumaraswamy_cdf_std(
    x: &[f64],
    a: &[f64],
    b: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    recycled_kernel_f64_std("kumaraswamy_cdf", x, [a, b], null_mask, null_count, |xi, [a, b]| {
        finalize_log_survival(kumaraswamy_logsf_scalar(xi, a, b), lower_tail, log_prob)
    })
}

/// Kumaraswamy quantile (zero-allocation variant).
#[inline(always)]
pub fn kumaraswamy_quantile_std_to(
    p: &[f64],
    a: &[f64],
    b: &[f64],
    lower_tail: bool,
    log_prob: bool,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<Option<Bitmask>, KernelError> {
    recycled_kernel_f64_std_to("kumaraswamy_quantile", p, [a, b], output, null_mask, null_count, |pi, [a, b]| {
        kumaraswamy_quantile_body(pi, a, b, lower_tail, log_prob)
    })
}

/// Kumaraswamy quantile.
#[inline(always)]
pub fn kumaraswamy_quantile_std(
    p: &[f64],
    a: &[f64],
    b: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    recycled_kernel_f64_std("kumaraswamy_quantile", p, [a, b], null_mask, null_count, |pi, [a, b]| {
        kumaraswamy_quantile_body(pi, a, b, lower_tail, log_prob)
    })
}

/// Kumaraswamy sampler by inversion.
#[inline]
pub fn kumaraswamy_sample_std<R: Rng + ?Sized>(
    n: usize,
    a: &[f64],
    b: &[f64],
    rng: &mut R,
) -> Result<FloatArray<f64>, KernelError> {
    recycled_sample_f64_std("kumaraswamy_sample", n, [a, b], rng, |rng, [a, b]| {
        if !valid_shapes(a, b) {
            return f64::NAN;
        }
        kumaraswamy_inverse_scalar(sample_uniform(rng), a, b)
    })
}
