// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Common Distribution Utilities** - *Recycled Kernel Drivers and Test Helpers*
//!
//! Shared drivers that apply a scalar body across recycled inputs, plus a builder for
//! nullable integer outputs (discrete quantiles and samples) and the helpers every
//! family's unit tests lean on.
//!
//! ## Drivers
//! - `std::recycled_kernel_f64_std{_to}`: `x` plus `P` recycled parameter arrays to `f64`,
//!   null-aware on `x`, counting and warning on invalid lanes.
//! - `std::recycled_sample_f64_std`: `n` draws with recycled parameters and a caller-owned RNG.
//! - [`NullableI64Builder`]: integer lanes where "invalid" is a null bit.

/// Scalar implementations of the recycled drivers.
pub mod std;

use minarrow::{Bitmask, IntegerArray, Vec64, vec64};

/// Builds an `IntegerArray<i64>` where invalid lanes are nulls.
///
/// The integer analogue of writing `NaN` into a float lane. The mask is only attached
/// when at least one lane is null.
#[derive(Debug)]
pub struct NullableI64Builder {
    data: Vec64<i64>,
    mask: Bitmask,
    n_null: usize,
}

impl NullableI64Builder {
    pub fn new(len: usize) -> Self {
        Self {
            data: vec64![0i64; len],
            mask: Bitmask::new_set_all(len, true),
            n_null: 0,
        }
    }

    #[inline(always)]
    pub fn set(&mut self, i: usize, v: Option<i64>) {
        match v {
            Some(v) => self.data[i] = v,
            None => self.set_null(i),
        }
    }

    #[inline(always)]
    pub fn set_null(&mut self, i: usize) {
        if self.mask.get(i) {
            self.mask.set(i, false);
            self.n_null += 1;
        }
        self.data[i] = 0;
    }

    pub fn null_count(&self) -> usize {
        self.n_null
    }

    pub fn finish(self) -> IntegerArray<i64> {
        let null_mask = if self.n_null > 0 { Some(self.mask) } else { None };
        IntegerArray {
            data: self.data.into(),
            null_mask,
        }
    }
}

// Common test helpers

#[cfg(test)]
pub(crate) mod test_helpers {
    use std::cell::Cell;
    use std::sync::Once;

    use log::{Level, LevelFilter, Log, Metadata, Record};
    use minarrow::{Bitmask, Buffer, FloatArray, IntegerArray};

    /// Test Helper: unwrap `FloatArray`, assert *no* null mask, return data.
    pub fn dense_data(arr: FloatArray<f64>) -> Buffer<f64> {
        assert!(arr.null_mask.is_none(), "unexpected mask on dense path");
        arr.data
    }

    /// Lane validity of an integer output as `Option`s.
    pub fn int_lanes(arr: &IntegerArray<i64>) -> Vec<Option<i64>> {
        (0..arr.data.len())
            .map(|i| match &arr.null_mask {
                Some(m) if !m.get(i) => None,
                _ => Some(arr.data[i]),
            })
            .collect()
    }

    thread_local! {
        static WARNINGS: Cell<usize> = const { Cell::new(0) };
    }

    /// Counts `warn` records per test thread.
    struct CountingLogger;

    impl Log for CountingLogger {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= Level::Warn
        }

        fn log(&self, record: &Record) {
            if self.enabled(record.metadata()) {
                WARNINGS.with(|w| w.set(w.get() + 1));
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: CountingLogger = CountingLogger;
    static INIT: Once = Once::new();

    /// Runs `f` and returns its result with the number of warnings it logged.
    ///
    /// Kernels log on the calling thread, so parallel tests do not see each other.
    pub fn count_warnings<T>(f: impl FnOnce() -> T) -> (T, usize) {
        INIT.call_once(|| {
            let _ = log::set_logger(&LOGGER);
            log::set_max_level(LevelFilter::Warn);
        });
        let before = WARNINGS.with(|w| w.get());
        let out = f();
        (out, WARNINGS.with(|w| w.get()) - before)
    }

    pub fn mask_vec(m: &Bitmask) -> Vec<bool> {
        (0..m.len()).map(|i| m.get(i)).collect()
    }

    /// Assert absolute difference ≤ `tol`.
    pub fn assert_close(a: f64, b: f64, tol: f64) {
        assert!(
            (a - b).abs() <= tol,
            "assert_close failed: {} vs {} (tol={})",
            a,
            b,
            tol
        );
    }
}
