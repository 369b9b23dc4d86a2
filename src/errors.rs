// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Structural Kernel Failures*
//!
//! Errors here are reserved for calls that cannot be evaluated at all: a probability
//! matrix whose buffer is not a whole number of rows, an outcome matrix whose category
//! count disagrees with its probability matrix, or a sampler asked to draw from an
//! empty parameter vector.
//!
//! Per-element problems (a bad scale, a malformed probability row, an out-of-support
//! value) never surface as an error. They become a `NaN` or null lane in the output,
//! with a single `log::warn!` for the call.

use core::fmt;
use std::error::Error;

/// Error type for all distribution kernels.
///
/// Each variant carries a context message naming the kernel and the offending shape.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// Two arrays that must agree in length (or column count) do not.
    LengthMismatch(String),

    /// Invalid arguments supplied to a kernel, e.g. a malformed matrix view.
    InvalidArguments(String),

    /// A caller-provided output buffer or mask does not cover the recycled length.
    OutOfBounds(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::LengthMismatch(msg) => write!(f, "Length mismatch: {}", msg),
            KernelError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
            KernelError::OutOfBounds(msg) => write!(f, "Out of bounds: {}", msg),
        }
    }
}

impl Error for KernelError {}

/// Creates a formatted error message for length mismatches between left-hand side (LHS) and right-hand side (RHS) arrays.
///
/// # Arguments
/// * `fname` - Function name where the mismatch occurred
/// * `lhs` - Length of the left-hand side array
/// * `rhs` - Length of the right-hand side array
pub fn log_length_mismatch(fname: &str, lhs: usize, rhs: usize) -> String {
    format!("{} => Length mismatch: LHS {} RHS {}", fname, lhs, rhs)
}
