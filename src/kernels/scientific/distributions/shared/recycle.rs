// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Recycling** - *Host-Style Broadcasting of Unequal-Length Inputs*
//!
//! Every kernel takes several arrays of possibly different lengths. The output has the
//! length of the longest one, and each input is read at `i % len` for output lane `i`.
//! Lengths that do not divide the output length still wrap silently; there is no
//! compatibility check.
//!
//! A zero-length input makes the whole output zero-length.

use minarrow::Bitmask;

/// Output length for a set of recycled inputs: the maximum, or `0` if any input is empty.
#[inline(always)]
pub fn recycled_len(lens: &[usize]) -> usize {
    if lens.iter().any(|&l| l == 0) {
        return 0;
    }
    lens.iter().copied().max().unwrap_or(0)
}

/// Input-local index of output lane `i` for an array of length `len`.
#[inline(always)]
pub fn recycle_idx(i: usize, len: usize) -> usize {
    i % len
}

/// Read-only recycled view over a parameter array.
#[derive(Debug, Clone, Copy)]
pub struct Recycled<'a, T> {
    data: &'a [T],
}

impl<'a, T: Copy> Recycled<'a, T> {
    #[inline(always)]
    pub fn new(data: &'a [T]) -> Self {
        Self { data }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value for output lane `i`. The view must be non-empty.
    #[inline(always)]
    pub fn at(&self, i: usize) -> T {
        self.data[recycle_idx(i, self.data.len())]
    }
}

/// Validity of output lane `i` under an optional recycled null mask for an array of `len` lanes.
#[inline(always)]
pub fn recycled_valid(mask: Option<&Bitmask>, i: usize, len: usize) -> bool {
    match mask {
        Some(m) => m.get(recycle_idx(i, len)),
        None => true,
    }
}
