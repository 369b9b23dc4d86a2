// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

// These parameters should rarely need adjustment.

//! # **Configuration Constants** - *Runtime Behaviour Parameters*
//!
//! Compile-time constants controlling validation policy and the text of the
//! non-fatal warning raised when a call produced invalid lanes.

/// Target sum a probability row must reach to count as a simplex.
///
/// Compared with `==`, not within a tolerance. A row summing to `0.999999`
/// is rejected. Callers with rounded probabilities should renormalise first.
pub const SIMPLEX_TARGET_SUM: f64 = 1.0;

/// Warning text for lanes that became `NaN` (or null) from non-`NaN` inputs.
pub const NAN_WARNING: &str = "NaNs produced";

/// Warning text for sampling lanes that could not be drawn.
pub const NA_WARNING: &str = "NAs produced";
