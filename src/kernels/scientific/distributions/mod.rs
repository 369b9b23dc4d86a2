// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Statistical Distributions Module** - *Vectorised Evaluators for Less Common Families*
//!
//! Density, cumulative, quantile and sampling kernels for the categorical, multinomial,
//! generalised extreme value, Kumaraswamy, power and discrete normal distributions.
//!
//! ## Calling convention
//! Every argument is an array. Arrays of unequal length are recycled: the output is as
//! long as the longest input and each input is read at `i % len`. A zero-length input
//! gives a zero-length output. Probability rows for the categorical and multinomial
//! families arrive as [`shared::validate::RowMatrix`] views and recycle by row.
//!
//! ## Invalid input
//! Per-element problems never fail the call. A lane with invalid parameters is `NaN`
//! (real outputs) or null (integer outputs), and a single warning is logged through the
//! `log` facade for the whole call. Only structural problems such as mismatched column
//! counts or an undersized output buffer return `Err`.
//!
//! ### Null Value Philosophy
//! Rather than assume, we choose to recognise inf and NaN as valid float values
//! (consistent with Apache Arrow semantics). A `NaN` input propagates to a `NaN` output
//! without a warning. Explicit nulls travel in the primary input's validity bitmask.
//!
//! ### Tail and log flags
//! Cumulative outputs are computed raw, complemented for the upper tail, then logged.
//! Quantile inputs run the other way: exponentiated, complemented, then inverted.
//!
//! ## Randomness
//! Samplers take the generator as `&mut R` with `R: rand::Rng + ?Sized`. There is no
//! global stream; seed a `StdRng` for reproducible draws.
//!
//! ## Disclaimer
//! This implementation is provided on a best-effort basis and is intended for
//! general scientific and engineering use. We make no guarantees as to correctness,
//! fitness for any particular purpose, or suitability for uses such as in
//! life-critical, safety-critical, or financial applications.

/// # **Shared Distribution Utilities** - *Common Infrastructure for Distribution Computing*
///
/// ## Modules
/// - **`constants`**: Mathematical constants and precomputed values
/// - **`recycle`**: Output length and index wrapping for unequal-length inputs
/// - **`sampler`**: Random number generation and sampling utilities
/// - **`scalar`**: Special functions and mathematical utilities
/// - **`tail`**: Lower/upper tail and log-scale transforms
/// - **`validate`**: Simplex rows, integrality and row-major matrices
pub mod shared {
    pub mod constants;
    pub mod recycle;
    pub mod sampler;
    pub mod scalar;
    pub mod tail;
    pub mod validate;
}

/// # **Univariate Distributions** - *Single-Draw Probability Distributions*
///
/// ## Distribution Categories
/// - **Continuous**: gev, kumaraswamy, power
/// - **Discrete**: categorical, discrete_normal, multinomial
/// - **Common utilities**: recycled kernel drivers
pub mod univariate {
    // common kernel patterns
    pub mod common;

    // distributions
    pub mod categorical;
    /// Discrete normal distribution kernels - normal mass binned onto the integers.
    pub mod discrete_normal;
    pub mod gev;
    pub mod kumaraswamy;
    pub mod multinomial;
    pub mod power;
}
