// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Statistical Sampling Module** - *Caller-Owned Random Streams*
//!
//! Primitive draws used by the `*_sample` kernels. Every function takes the generator
//! by `&mut R`, so there is no process-wide stream: two sampling calls are ordered
//! only by the caller, and a seeded `StdRng` reproduces a run exactly.
//!
//! ```rust,ignore
//! use rand::{SeedableRng, rngs::StdRng};
//! let mut rng = StdRng::seed_from_u64(42);
//! let draws = categorical_sample(1_000, &prob, &mut rng)?;
//! ```

use std::f64::consts::PI;

use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Binomial, Distribution};

/// Builds the default reproducible generator for a seed.
#[inline]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// One standard uniform draw on `[0, 1)`.
#[inline(always)]
pub fn sample_uniform<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random::<f64>()
}

// Box–Muller to get one N(0,1)
/// Generates a single sample from the standard normal distribution N(0,1).
#[inline]
pub fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // U1 ∈ (0,1], U2 ∈ [0,1)
    let u1: f64 = rng.random::<f64>().max(f64::MIN_POSITIVE); // avoid log(0)
    let u2: f64 = rng.random::<f64>();
    let r = (-2.0 * u1.ln()).sqrt();
    r * (2.0 * PI * u2).cos()
}

/// Binomial(trials, p) count.
///
/// `p` is clamped into `[0, 1]` so accumulated rounding in a conditional
/// probability (e.g. `0.3 / 0.29999999999999993`) cannot reject the draw.
/// Degenerate cases (`trials == 0`, `p == 0`, `p == 1`) return without touching the stream.
#[inline]
pub fn sample_binomial<R: Rng + ?Sized>(rng: &mut R, trials: u64, p: f64) -> u64 {
    let p = p.clamp(0.0, 1.0);
    if trials == 0 || p == 0.0 {
        return 0;
    }
    if p == 1.0 {
        return trials;
    }
    match Binomial::new(trials, p) {
        Ok(dist) => dist.sample(rng),
        // Unreachable after the clamp.
        Err(_) => 0,
    }
}
