// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

use minarrow::{Bitmask, FloatArray, IntegerArray, Vec64, vec64};
use rand::Rng;

use crate::config::{NA_WARNING, NAN_WARNING};
use crate::errors::KernelError;
use crate::kernels::scientific::distributions::shared::recycle::{
    recycle_idx, recycled_len, recycled_valid,
};
use crate::kernels::scientific::distributions::shared::validate::RowMatrix;
use crate::kernels::scientific::distributions::univariate::common::NullableI64Builder;
use crate::utils::{confirm_capacity, confirm_mask_capacity, has_nulls, warn_invalid_lanes};

/// Gathers the recycled parameter tuple for output lane `i`.
#[inline(always)]
fn gather<const P: usize>(params: &[&[f64]; P], i: usize) -> [f64; P] {
    std::array::from_fn(|j| params[j][recycle_idx(i, params[j].len())])
}

/// Recycled output length of the primary array plus every parameter array.
#[inline(always)]
pub fn kernel_len<const P: usize>(x: &[f64], params: &[&[f64]; P]) -> usize {
    let lens: Vec<usize> = std::iter::once(x.len())
        .chain(params.iter().map(|p| p.len()))
        .collect();
    recycled_len(&lens)
}

/// Shared dense / masked loop.
///
/// `lane(i)` returns the value for output lane `i` and whether it counts as invalid.
/// Null lanes of the recycled primary input are skipped and written as `NaN`.
#[inline(always)]
pub(crate) fn drive_f64_to<FLane>(
    fname: &str,
    nx: usize,
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
    mut lane: FLane,
) -> Result<Option<Bitmask>, KernelError>
where
    FLane: FnMut(usize) -> (f64, bool),
{
    let len = output.len();
    let mut n_invalid = 0usize;

    // Dense fast path (no nulls)
    if !has_nulls(null_count, null_mask) {
        for (i, slot) in output.iter_mut().enumerate() {
            let (v, invalid) = lane(i);
            n_invalid += invalid as usize;
            *slot = v;
        }
        warn_invalid_lanes(fname, NAN_WARNING, n_invalid, len);
        return Ok(None);
    }

    // Null-aware masked path
    let mask = null_mask.ok_or_else(|| {
        KernelError::InvalidArguments(format!("{}: null_count > 0 requires null_mask", fname))
    })?;
    let mut out_mask = Bitmask::new_set_all(len, true);
    for (i, slot) in output.iter_mut().enumerate() {
        if recycled_valid(Some(mask), i, nx) {
            let (v, invalid) = lane(i);
            n_invalid += invalid as usize;
            *slot = v;
        } else {
            *slot = f64::NAN;
            out_mask.set(i, false);
        }
    }
    warn_invalid_lanes(fname, NAN_WARNING, n_invalid, len);
    Ok(Some(out_mask))
}

/// Recycled kernel driver (zero-allocation variant).
///
/// Evaluates `scalar_body(x[i % |x|], [p_j[i % |p_j|]; P])` for every output lane and
/// writes into `output`, whose length must equal the recycled length.
///
/// ### Null handling
/// - `null_mask` describes `x` and recycles with it. Null lanes get `NaN` and a
///   cleared bit in the returned mask.
/// - Dense fast path when there are no nulls; the returned mask is then `None`.
///
/// ### Invalid lanes
/// A `NaN` result from all-non-`NaN` inputs counts as invalid. One warning is emitted
/// for the call if any lane was invalid. `NaN` inputs propagate silently.
#[inline(always)]
pub fn recycled_kernel_f64_std_to<const P: usize, FScalar>(
    fname: &str,
    x: &[f64],
    params: [&[f64]; P],
    output: &mut [f64],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
    scalar_body: FScalar,
) -> Result<Option<Bitmask>, KernelError>
where
    FScalar: Fn(f64, [f64; P]) -> f64,
{
    let len = kernel_len(x, &params);
    confirm_capacity(fname, output.len(), len)?;
    confirm_mask_capacity(fname, x.len(), null_mask)?;
    if len == 0 {
        return Ok(None);
    }

    let nx = x.len();
    drive_f64_to(fname, nx, output, null_mask, null_count, |i| {
        let xi = x[recycle_idx(i, nx)];
        let ps = gather(&params, i);
        let v = scalar_body(xi, ps);
        let invalid = v.is_nan() && !xi.is_nan() && ps.iter().all(|p| !p.is_nan());
        (v, invalid)
    })
}

/// Recycled kernel driver, allocating the output array.
#[inline(always)]
pub fn recycled_kernel_f64_std<const P: usize, FScalar>(
    fname: &str,
    x: &[f64],
    params: [&[f64]; P],
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
    scalar_body: FScalar,
) -> Result<FloatArray<f64>, KernelError>
where
    FScalar: Fn(f64, [f64; P]) -> f64,
{
    let len = kernel_len(x, &params);
    if len == 0 {
        return Ok(FloatArray::from_slice(&[]));
    }
    let mut out: Vec64<f64> = vec64![0.0; len];
    let out_mask = recycled_kernel_f64_std_to(
        fname,
        x,
        params,
        out.as_mut_slice(),
        null_mask,
        null_count,
        scalar_body,
    )?;
    Ok(FloatArray::from_vec64(out, out_mask))
}

/// Row-parameter kernel driver.
///
/// Like [`recycled_kernel_f64_std`] but the parameter is a probability row recycled over
/// the rows of `rows`. A `NaN` result from a non-`NaN` `x` counts as invalid, so a row
/// holding `NaN` entries warns like any other malformed row.
#[inline(always)]
pub fn recycled_row_kernel_f64_std<FRow>(
    fname: &str,
    x: &[f64],
    rows: RowMatrix<'_>,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
    row_body: FRow,
) -> Result<FloatArray<f64>, KernelError>
where
    FRow: Fn(f64, &[f64]) -> f64,
{
    confirm_mask_capacity(fname, x.len(), null_mask)?;
    let len = recycled_len(&[x.len(), rows.n_rows()]);
    if len == 0 {
        return Ok(FloatArray::from_slice(&[]));
    }
    let nx = x.len();
    let mut out: Vec64<f64> = vec64![0.0; len];
    let out_mask = drive_f64_to(fname, nx, out.as_mut_slice(), null_mask, null_count, |i| {
        let xi = x[recycle_idx(i, nx)];
        let v = row_body(xi, rows.recycled_row(i));
        (v, v.is_nan() && !xi.is_nan())
    })?;
    Ok(FloatArray::from_vec64(out, out_mask))
}

/// Row-parameter kernel driver with integer output.
///
/// `row_body` returns `None` for an invalid lane, which becomes a null. Null input lanes
/// are null in the output. A `None` from a non-`NaN` input triggers the one-per-call
/// "NAs produced" warning.
#[inline(always)]
pub fn recycled_row_kernel_i64_std<FRow>(
    fname: &str,
    x: &[f64],
    rows: RowMatrix<'_>,
    null_mask: Option<&Bitmask>,
    null_count: Option<usize>,
    row_body: FRow,
) -> Result<IntegerArray<i64>, KernelError>
where
    FRow: Fn(f64, &[f64]) -> Option<i64>,
{
    confirm_mask_capacity(fname, x.len(), null_mask)?;
    let len = recycled_len(&[x.len(), rows.n_rows()]);
    let nx = x.len();
    let masked = has_nulls(null_count, null_mask);
    let mut out = NullableI64Builder::new(len);
    let mut n_invalid = 0usize;
    for i in 0..len {
        if masked && !recycled_valid(null_mask, i, nx) {
            out.set_null(i);
            continue;
        }
        let xi = x[recycle_idx(i, nx)];
        let v = row_body(xi, rows.recycled_row(i));
        if v.is_none() && !xi.is_nan() {
            n_invalid += 1;
        }
        out.set(i, v);
    }
    warn_invalid_lanes(fname, NA_WARNING, n_invalid, len);
    Ok(out.finish())
}

/// Recycled sampling driver.
///
/// Draws `n` values; lane `i` sees the parameter tuple recycled at `i`. `draw` receives
/// the caller's generator and returns `NaN` for a lane whose parameters are invalid.
/// One "NAs produced" warning is emitted if any lane came back `NaN`.
#[inline]
pub fn recycled_sample_f64_std<const P: usize, R, FDraw>(
    fname: &str,
    n: usize,
    params: [&[f64]; P],
    rng: &mut R,
    mut draw: FDraw,
) -> Result<FloatArray<f64>, KernelError>
where
    R: Rng + ?Sized,
    FDraw: FnMut(&mut R, [f64; P]) -> f64,
{
    if n == 0 {
        return Ok(FloatArray::from_slice(&[]));
    }
    if params.iter().any(|p| p.is_empty()) {
        return Err(KernelError::InvalidArguments(format!(
            "{}: parameter arrays must be non-empty when n > 0",
            fname
        )));
    }
    let mut out = Vec64::with_capacity(n);
    let mut n_invalid = 0usize;
    for i in 0..n {
        let v = draw(rng, gather(&params, i));
        if v.is_nan() {
            n_invalid += 1;
        }
        out.push(v);
    }
    warn_invalid_lanes(fname, NA_WARNING, n_invalid, n);
    Ok(FloatArray::from_vec64(out, None))
}
