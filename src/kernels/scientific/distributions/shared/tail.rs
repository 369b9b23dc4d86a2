// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Log / Tail Transform** - *Order-Sensitive Post- and Pre-Processing*
//!
//! Outputs: compute the raw probability, complement it for the upper tail, and only then
//! take a logarithm. Quantile inputs run the other way: exponentiate a log-scale input
//! first, complement for the upper tail next, then invert.
//!
//! The tail flip always happens in probability space. Evaluators that work in log space
//! hand their log value to [`finalize_log_prob`], which complements via `−expm1` instead
//! of `1 − exp` so small upper-tail probabilities survive.

/// Density output: `ln` when `log_prob` is requested.
#[inline(always)]
pub fn finalize_density(d: f64, log_prob: bool) -> f64 {
    if log_prob { d.ln() } else { d }
}

/// Density output from a log-density: exponentiate unless `log_prob` is requested.
#[inline(always)]
pub fn finalize_log_density(ld: f64, log_prob: bool) -> f64 {
    if log_prob { ld } else { ld.exp() }
}

/// Cumulative output from a lower-tail probability `p`.
#[inline(always)]
pub fn finalize_prob(p: f64, lower_tail: bool, log_prob: bool) -> f64 {
    let p = if lower_tail { p } else { 1.0 - p };
    if log_prob { p.ln() } else { p }
}

/// Cumulative output from a lower-tail log-probability `lp`.
#[inline(always)]
pub fn finalize_log_prob(lp: f64, lower_tail: bool, log_prob: bool) -> f64 {
    match (lower_tail, log_prob) {
        (true, true) => lp,
        (true, false) => lp.exp(),
        (false, _) => {
            // 1 - e^lp, kept accurate as lp → 0⁻
            let q = -lp.exp_m1();
            if log_prob { q.ln() } else { q }
        }
    }
}

/// Cumulative output from a log-survival `ls = ln(1 − F)`.
///
/// The upper tail is returned without a round trip through `F`.
#[inline(always)]
pub fn finalize_log_survival(ls: f64, lower_tail: bool, log_prob: bool) -> f64 {
    match (lower_tail, log_prob) {
        (false, true) => ls,
        (false, false) => ls.exp(),
        (true, _) => {
            let p = -ls.exp_m1();
            if log_prob { p.ln() } else { p }
        }
    }
}

/// Quantile input: undo the log scale, then the tail, yielding a lower-tail probability.
#[inline(always)]
pub fn prepare_prob(p: f64, lower_tail: bool, log_prob: bool) -> f64 {
    let p = if log_prob { p.exp() } else { p };
    if lower_tail { p } else { 1.0 - p }
}

/// `true` when `p` is a usable probability (rejects NaN).
#[inline(always)]
pub fn in_unit_interval(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}
