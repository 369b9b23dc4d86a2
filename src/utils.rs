// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Utility Functions** - *Null Handling, Capacity Checks and Warnings*
//!
//! Small helpers shared by every kernel: null detection on the fast path, capacity
//! validation for caller-provided buffers, and the once-per-call warning channel.

use minarrow::Bitmask;

use crate::errors::KernelError;

/// Determines whether nulls are present given an optional null count and mask reference.
/// Avoids computing mask cardinality to preserve performance guarantees.
#[inline(always)]
pub fn has_nulls(null_count: Option<usize>, mask: Option<&Bitmask>) -> bool {
    match null_count {
        Some(n) => n > 0,
        None => mask.is_some(),
    }
}

/// Validates that actual capacity matches expected capacity for kernel operations.
///
/// Used by the zero-allocation `_to` kernels to reject an output buffer that does not
/// cover the recycled length before anything is written.
#[inline(always)]
pub fn confirm_capacity(label: &str, actual: usize, expected: usize) -> Result<(), KernelError> {
    if actual != expected {
        return Err(KernelError::OutOfBounds(format!(
            "{}: capacity mismatch (expected {}, got {})",
            label, expected, actual
        )));
    }
    Ok(())
}

/// Checks a validity mask covers the array it describes.
#[inline(always)]
pub fn confirm_mask_capacity(
    label: &str,
    data_len: usize,
    mask: Option<&Bitmask>,
) -> Result<(), KernelError> {
    if let Some(m) = mask {
        if m.len() < data_len {
            return Err(KernelError::InvalidArguments(format!(
                "{}: null mask shorter than input (mask {}, data {})",
                label,
                m.len(),
                data_len
            )));
        }
    }
    Ok(())
}

/// Emits the non-fatal warning for a call that produced `n_invalid` invalid lanes.
///
/// Silent when `n_invalid == 0`. Called once per kernel invocation, never per lane.
#[inline]
pub fn warn_invalid_lanes(fname: &str, message: &str, n_invalid: usize, len: usize) {
    if n_invalid > 0 {
        log::warn!("{}: {} ({} of {} lanes)", fname, message, n_invalid, len);
    }
}
