// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Scalar Distribution Utilities Module** - *Special Functions for the Kernels*
//!
//! Stateless scalar building blocks the family evaluators call into: log-gamma,
//! log-factorial, the standard normal CDF and survival function, and a zero-safe
//! `x·ln(y)` product.

use std::f64::consts::PI;

use crate::kernels::scientific::{distributions::shared::constants::*, erf::erfc};

/// Natural log of the absolute value of the Gamma function, ln|Γ(x)|.
///
/// * Lanczos approximation (g = 7, n = 9) for x ≥ 0.5.
/// * Reflection formula for x < 0.5 using `ln(|sin(πx)|)`.
/// * Poles at non-positive integers return **+∞**.
/// * Propagates NaN.
#[inline(always)]
pub fn ln_gamma(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x.is_infinite() && x.is_sign_positive() {
        return f64::INFINITY;
    }
    // Poles: Γ(x) has simple poles at 0, −1, −2, …  ⇒  ln|Γ| → +∞
    if x <= 0.0 && x.fract() == 0.0 {
        return f64::INFINITY;
    }
    if x < 0.5 {
        return PI.ln() - (PI * x).sin().abs().ln() - ln_gamma(1.0 - x);
    }

    let z = x - 1.0;
    let mut a = COF[0];
    for (i, &c) in COF.iter().enumerate().skip(1) {
        a += c / (z + i as f64);
    }
    let t = z + 7.5; // g + ½  with g = 7
    HALF_LOG_TWO_PI + (z + 0.5) * t.ln() - t + a.ln()
}

/// ln(n!) for a non-negative integer-valued `n`.
///
/// Exact table lookup up to 20!, `ln_gamma(n + 1)` beyond. Callers validate
/// integrality first; a non-integer argument falls through to `ln Γ(n + 1)`.
#[inline(always)]
pub fn ln_factorial(n: f64) -> f64 {
    if n >= 0.0 && n <= 20.0 && n.fract() == 0.0 {
        return LN_FACTORIAL_TABLE[n as usize];
    }
    ln_gamma(n + 1.0)
}

/// Standard normal CDF Φ(z), evaluated through `erfc` on whichever side keeps precision.
#[inline(always)]
pub fn normal_cdf_scalar(z: f64) -> f64 {
    if z.is_nan() {
        return f64::NAN;
    }
    if z < 0.0 {
        0.5 * erfc(-z / SQRT_2)
    } else {
        1.0 - 0.5 * erfc(z / SQRT_2)
    }
}

/// Standard normal survival function 1 − Φ(z) without forming the difference.
#[inline(always)]
pub fn normal_sf_scalar(z: f64) -> f64 {
    if z.is_nan() {
        return f64::NAN;
    }
    0.5 * erfc(z / SQRT_2)
}

/// `x · ln(y)`, defined as `0` when `x == 0` (even for `y == 0`).
///
/// Keeps `0 · ln 0` out of log-densities at the edge of a bounded support.
#[inline(always)]
pub fn xlogy(x: f64, y: f64) -> f64 {
    if x == 0.0 && !y.is_nan() {
        0.0
    } else {
        x * y.ln()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, tol: f64) {
        assert!((a - b).abs() <= tol, "assert_close failed: {a} vs {b} (tol={tol})");
    }

    #[test]
    fn ln_gamma_reference_values() {
        assert_close(ln_gamma(1.0), 0.0, 1e-14);
        assert_close(ln_gamma(2.0), 0.0, 1e-14);
        assert_close(ln_gamma(0.5), 0.5723649429247001, 1e-13);
        assert_close(ln_gamma(10.0), 12.801827480081469, 1e-12);
        assert_close(ln_gamma(-0.5), 1.2655121234846454, 1e-12);
        assert_eq!(ln_gamma(0.0), f64::INFINITY);
        assert_eq!(ln_gamma(-3.0), f64::INFINITY);
        assert!(ln_gamma(f64::NAN).is_nan());
    }

    #[test]
    fn ln_factorial_table_and_tail_agree() {
        assert_eq!(ln_factorial(0.0), 0.0);
        assert_eq!(ln_factorial(1.0), 0.0);
        assert_close(ln_factorial(5.0), 120f64.ln(), 1e-14);
        // 21! via Lanczos, continuous with the table
        let lf21 = ln_factorial(21.0);
        assert_close(lf21 - ln_factorial(20.0), 21f64.ln(), 1e-10);
    }

    #[test]
    fn normal_cdf_symmetry_and_values() {
        assert_close(normal_cdf_scalar(0.0), 0.5, 1e-16);
        assert_close(normal_cdf_scalar(1.0), 0.8413447460685429, 1e-15);
        assert_close(normal_cdf_scalar(-1.96), 0.024997895148220435, 1e-15);
        for &z in &[0.3, 1.2, 2.5, 4.0] {
            assert_close(normal_cdf_scalar(-z), normal_sf_scalar(z), 1e-16);
        }
        // upper tail keeps relative precision
        let sf = normal_sf_scalar(8.0);
        assert!((sf - 6.22096057427178e-16).abs() / 6.22096057427178e-16 < 1e-12);
        assert!(normal_cdf_scalar(f64::NAN).is_nan());
    }

    #[test]
    fn xlogy_zero_coefficient() {
        assert_eq!(xlogy(0.0, 0.0), 0.0);
        assert_eq!(xlogy(1.0, 0.0), f64::NEG_INFINITY);
        assert_close(xlogy(2.0, 3.0), 2.0 * 3f64.ln(), 1e-15);
        assert!(xlogy(0.0, f64::NAN).is_nan());
    }
}
