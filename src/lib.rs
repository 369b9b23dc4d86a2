// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.
// See LICENSE for details.

//! # extra-dist-kernels
//!
//! Vectorised probability kernels over `minarrow` arrays for the categorical,
//! multinomial, generalised extreme value, Kumaraswamy, power and discrete normal
//! distributions.
//!
//! See [`kernels::scientific::distributions`] for the calling convention.

pub mod kernels {
    pub mod scientific {
        pub mod distributions;
        pub mod erf;
    }
}

pub mod config;

pub mod errors;

pub mod utils;
