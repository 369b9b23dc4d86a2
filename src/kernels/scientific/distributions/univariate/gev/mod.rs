// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Generalised Extreme Value Distribution - **Unified Extreme Value Family**
//!
//! The GEV distribution unifies the Gumbel (ξ = 0), Fréchet (ξ > 0) and reversed
//! Weibull (ξ < 0) limit laws for block maxima. It is the standard model when the
//! tail type of the underlying data is not known in advance.
//!
//! ## Mathematical Definition
//!
//! Parameterised by location μ, scale σ > 0 and shape ξ, with z = (x − μ)/σ and
//! ```text
//! t(x) = (1 + ξz)^(−1/ξ)   ξ ≠ 0
//! t(x) = exp(−z)           ξ = 0
//! ```
//! - **PDF**: f(x) = t(x)^(ξ+1) · exp(−t(x)) / σ on 1 + ξz > 0, 0 elsewhere
//! - **CDF**: F(x) = exp(−t(x)); 0 below the lower endpoint (ξ > 0), 1 above the upper
//!   endpoint (ξ < 0)
//! - **Quantile**: Q(p) = μ − σ/ξ · (1 − (−ln p)^(−ξ)), or μ − σ ln(−ln p) for ξ = 0,
//!   with Q(1) = +∞
//!
//! ## Parameters and recycling
//! `location`, `scale` and `shape` are arrays, recycled against the primary input to the
//! longest length. `σ ≤ 0` makes a lane `NaN` with a warning; `NaN` anywhere in a lane's
//! inputs propagates silently.
//!
//! ## Common Applications
//!
//! - **Hydrology**: Annual maximum river flow and rainfall
//! - **Finance**: Extreme losses over fixed horizons
//! - **Engineering**: Design loads for wind and wave extremes

mod std;

use minarrow::{Bitmask, FloatArray};
use rand::Rng;

use crate::errors::KernelError;

pub use self::std::{gev_cdf_std_to, gev_pdf_std_to, gev_quantile_std_to};

/// Computes the probability density function (PDF) of the GEV distribution.
///
/// # Parameters
///
/// * `x` - Input values where the PDF is evaluated
/// * `location` - Location parameter μ
/// * `scale` - Scale parameter σ > 0
/// * `shape` - Shape parameter ξ
/// * `log_prob` - Return the log-density
/// * `null_mask` - Optional bitmask indicating null values in `x`
/// * `null_count` - Optional count of null values for optimisation
///
/// # Example
///
/// ```rust,ignore
/// use extra_dist_kernels::kernels::scientific::distributions::univariate::gev::gev_pdf;
///
/// let result = gev_pdf(&[-1.0, 0.0, 1.0], &[0.0], &[1.0], &[0.5], false, None, None).unwrap();
/// ```
#[inline(always)]
pub fn gev_pdf(
    x: &[f64],
    location: &[f64],
    scale: &[f64],
    shape: &[f64],
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::gev_pdf_std(x, location, scale, shape, log_prob, null_mask, null_count)
}

/// Computes the cumulative distribution function (CDF) of the GEV distribution.
///
/// Evaluates F(x) = exp(−t(x)) in log space. The upper tail is taken as −expm1(−t), so
/// survival probabilities far in the right tail keep full precision.
#[inline(always)]
pub fn gev_cdf(
    x: &[f64],
    location: &[f64],
    scale: &[f64],
    shape: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::gev_cdf_std(x, location, scale, shape, lower_tail, log_prob, null_mask, null_count)
}

/// Computes the quantile function of the GEV distribution.
///
/// `p` is exponentiated when `log_prob` is set and complemented when `lower_tail` is
/// false before inversion. Probabilities outside `[0, 1]` give `NaN`.
#[inline(always)]
pub fn gev_quantile(
    p: &[f64],
    location: &[f64],
    scale: &[f64],
    shape: &[f64],
    lower_tail: bool,
    log_prob: bool,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
) -> Result<FloatArray<f64>, KernelError> {
    std::gev_quantile_std(p, location, scale, shape, lower_tail, log_prob, null_mask, null_count)
}

/// Draws `n` GEV variates using the caller's generator.
#[inline(always)]
pub fn gev_sample<R: Rng + ?Sized>(
    n: usize,
    location: &[f64],
    scale: &[f64],
    shape: &[f64],
    rng: &mut R,
) -> Result<FloatArray<f64>, KernelError> {
    std::gev_sample_std(n, location, scale, shape, rng)
}

#[cfg(test)]
mod gev_tests {
    use super::*;
    use crate::kernels::scientific::distributions::shared::sampler::seeded_rng;
    use crate::kernels::scientific::distributions::univariate::common::test_helpers::{
        assert_close, count_warnings, dense_data, mask_vec,
    };

    // See `./tests` for the closed-form reference suite

    fn gumbel_pdf(x: f64, mu: f64, beta: f64) -> f64 {
        let z = (x - mu) / beta;
        (-(z + (-z).exp())).exp() / beta
    }
    fn gumbel_cdf(x: f64, mu: f64, beta: f64) -> f64 {
        (-(-(x - mu) / beta).exp()).exp()
    }

    #[test]
    fn shape_zero_matches_gumbel() {
        let x = [-2.0, -0.5, 0.0, 1.3, 4.0];
        let pdf = dense_data(gev_pdf(&x, &[0.5], &[1.5], &[0.0], false, None, None).unwrap());
        let cdf = dense_data(gev_cdf(&x, &[0.5], &[1.5], &[0.0], true, false, None, None).unwrap());
        for (i, &xi) in x.iter().enumerate() {
            assert_close(pdf[i], gumbel_pdf(xi, 0.5, 1.5), 1e-14);
            assert_close(cdf[i], gumbel_cdf(xi, 0.5, 1.5), 1e-14);
        }
    }

    #[test]
    fn frechet_reference_values() {
        let x = [-1.0, 0.0, 1.0, 3.0];
        let pdf = dense_data(gev_pdf(&x, &[0.0], &[1.0], &[0.5], false, None, None).unwrap());
        let cdf = dense_data(gev_cdf(&x, &[0.0], &[1.0], &[0.5], true, false, None, None).unwrap());
        let e_pdf = [0.14652511110987343, 0.36787944117144233, 0.18997937434961618, 0.054537202493837526];
        let e_cdf = [0.01831563888873418, 0.36787944117144233, 0.6411803884299546, 0.8521437889662113];
        for i in 0..4 {
            assert_close(pdf[i], e_pdf[i], 1e-14);
            assert_close(cdf[i], e_cdf[i], 1e-14);
        }
    }

    #[test]
    fn support_edges() {
        // ξ = 0.5: lower endpoint at μ − σ/ξ = −2
        let pdf = dense_data(gev_pdf(&[-3.0], &[0.0], &[1.0], &[0.5], false, None, None).unwrap());
        let cdf = dense_data(gev_cdf(&[-3.0], &[0.0], &[1.0], &[0.5], true, false, None, None).unwrap());
        assert_eq!((pdf[0], cdf[0]), (0.0, 0.0));

        // ξ = −0.3, μ = 1, σ = 2: upper endpoint at 1 + 2/0.3
        let pdf = dense_data(gev_pdf(&[8.0], &[1.0], &[2.0], &[-0.3], false, None, None).unwrap());
        let cdf = dense_data(gev_cdf(&[8.0], &[1.0], &[2.0], &[-0.3], true, false, None, None).unwrap());
        assert_eq!((pdf[0], cdf[0]), (0.0, 1.0));
    }

    #[test]
    fn infinite_inputs_are_finite_limits() {
        let x = [f64::NEG_INFINITY, f64::INFINITY];
        let pdf = dense_data(gev_pdf(&x, &[0.0], &[1.0], &[0.0], false, None, None).unwrap());
        let cdf = dense_data(gev_cdf(&x, &[0.0], &[1.0], &[0.0], true, false, None, None).unwrap());
        assert_eq!(&pdf[..], &[0.0, 0.0]);
        assert_eq!(&cdf[..], &[0.0, 1.0]);
    }

    #[test]
    fn quantile_at_one_is_infinite() {
        for shape in [-0.5, 0.0, 0.5] {
            let q = dense_data(gev_quantile(&[1.0], &[0.0], &[1.0], &[shape], true, false, None, None).unwrap());
            assert_eq!(q[0], f64::INFINITY);
        }
    }

    #[test]
    fn quantile_cdf_round_trip() {
        let p = [0.01, 0.1, 0.5, 0.9, 0.99];
        for shape in [-0.3, 0.0, 0.5] {
            let q = dense_data(gev_quantile(&p, &[1.0], &[2.0], &[shape], true, false, None, None).unwrap());
            let back = dense_data(gev_cdf(&q, &[1.0], &[2.0], &[shape], true, false, None, None).unwrap());
            for i in 0..p.len() {
                assert_close(back[i], p[i], 1e-12);
            }
        }
    }

    #[test]
    fn quantile_upper_tail_and_log() {
        let lower = dense_data(gev_quantile(&[0.9], &[0.0], &[1.0], &[0.5], true, false, None, None).unwrap());
        let upper = dense_data(gev_quantile(&[0.1], &[0.0], &[1.0], &[0.5], false, false, None, None).unwrap());
        let logp = dense_data(gev_quantile(&[0.9f64.ln()], &[0.0], &[1.0], &[0.5], true, true, None, None).unwrap());
        assert_close(lower[0], 4.161565249522204, 1e-12);
        assert_close(upper[0], lower[0], 1e-12);
        assert_close(logp[0], lower[0], 1e-12);
    }

    #[test]
    fn invalid_scale_and_probability_are_nan() {
        let pdf = dense_data(gev_pdf(&[0.0, 1.0], &[0.0], &[0.0, -1.0], &[0.1], false, None, None).unwrap());
        assert!(pdf.iter().all(|v| v.is_nan()));
        let q = dense_data(gev_quantile(&[-0.1, 1.1], &[0.0], &[1.0], &[0.1], true, false, None, None).unwrap());
        assert!(q.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn nan_propagates() {
        let pdf = dense_data(gev_pdf(&[f64::NAN, 0.0], &[0.0, f64::NAN], &[1.0], &[0.0], false, None, None).unwrap());
        assert!(pdf[0].is_nan() && pdf[1].is_nan());
    }

    #[test]
    fn parameters_recycle() {
        let x = [0.0, 0.0, 0.0, 0.0];
        let out = dense_data(gev_pdf(&x, &[0.0], &[1.0, 2.0], &[0.0], false, None, None).unwrap());
        assert_close(out[0], gumbel_pdf(0.0, 0.0, 1.0), 1e-14);
        assert_close(out[1], gumbel_pdf(0.0, 0.0, 2.0), 1e-14);
        assert_eq!(out[0], out[2]);
        assert_eq!(out[1], out[3]);
    }

    #[test]
    fn log_density_and_upper_tail() {
        let x = [1.0];
        let ld = dense_data(gev_pdf(&x, &[0.0], &[1.0], &[0.5], true, None, None).unwrap());
        assert_close(ld[0], 0.18997937434961618f64.ln(), 1e-14);
        let sf = dense_data(gev_cdf(&x, &[0.0], &[1.0], &[0.5], false, false, None, None).unwrap());
        assert_close(sf[0], 1.0 - 0.6411803884299546, 1e-14);
    }

    #[test]
    fn null_mask_propagates() {
        let x = [0.0, 1.0, 2.0];
        let mut mask = Bitmask::new_set_all(3, true);
        mask.set(1, false);
        let arr = gev_cdf(&x, &[0.0], &[1.0], &[0.0], true, false, Some(&mask), Some(1)).unwrap();
        assert_eq!(mask_vec(arr.null_mask.as_ref().unwrap()), vec![true, false, true]);
        assert!(arr.data[1].is_nan());
        assert_close(arr.data[2], gumbel_cdf(2.0, 0.0, 1.0), 1e-14);
    }

    #[test]
    fn empty_inputs() {
        assert!(gev_pdf(&[], &[0.0], &[1.0], &[0.0], false, None, None).unwrap().data.is_empty());
        assert!(gev_cdf(&[1.0], &[], &[1.0], &[0.0], true, false, None, None).unwrap().data.is_empty());
    }

    #[test]
    fn pdf_to_writes_caller_buffer() {
        let mut out = [0.0; 3];
        let mask = gev_pdf_std_to(&[0.0, 1.0, 2.0], &[0.0], &[1.0], &[0.0], false, &mut out, None, None).unwrap();
        assert!(mask.is_none());
        assert_close(out[1], gumbel_pdf(1.0, 0.0, 1.0), 1e-14);
        let mut short = [0.0; 2];
        assert!(gev_pdf_std_to(&[0.0, 1.0, 2.0], &[0.0], &[1.0], &[0.0], false, &mut short, None, None).is_err());
    }

    #[test]
    fn sample_median_matches_quantile() {
        let n = 20_000;
        let mut rng = seeded_rng(17);
        let s = gev_sample(n, &[1.0], &[2.0], &[0.2], &mut rng).unwrap();
        let med = dense_data(gev_quantile(&[0.5], &[1.0], &[2.0], &[0.2], true, false, None, None).unwrap())[0];
        let below = s.data.iter().filter(|&&v| v <= med).count() as f64 / n as f64;
        assert!((below - 0.5).abs() < 0.02, "fraction below median {}", below);
    }

    #[test]
    fn sample_invalid_scale_is_nan() {
        let s = gev_sample(4, &[0.0], &[1.0, -1.0], &[0.0], &mut seeded_rng(1)).unwrap();
        assert!(!s.data[0].is_nan() && s.data[1].is_nan());
        assert!(gev_sample(2, &[], &[1.0], &[0.0], &mut seeded_rng(1)).is_err());
    }

    #[test]
    fn bad_scales_warn_once() {
        let (out, n) = count_warnings(|| gev_pdf(&[0.0, 1.0, 2.0], &[0.0], &[-1.0, 0.0, 1.0], &[0.1], false, None, None));
        let out = out.unwrap();
        assert!(out.data[0].is_nan() && out.data[1].is_nan() && out.data[2].is_finite());
        assert_eq!(n, 1);
    }

    #[test]
    fn nan_inputs_and_valid_lanes_do_not_warn() {
        let (out, n) = count_warnings(|| gev_cdf(&[f64::NAN], &[0.0], &[1.0], &[0.1], true, false, None, None));
        assert!(out.unwrap().data[0].is_nan());
        assert_eq!(n, 0);

        let (_, n) = count_warnings(|| gev_quantile(&[0.1, 0.5, 0.9], &[0.0], &[1.0], &[0.1], true, false, None, None));
        assert_eq!(n, 0);
    }
}
