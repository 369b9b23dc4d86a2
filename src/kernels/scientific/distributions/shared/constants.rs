// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Mathematical Constants** - *Precomputed Values for Distribution Kernels*

/// The square root of 2: √2 ≈ 1.414213562373095.
///
/// Scales a standard normal deviate into the `erfc` argument in `Φ(z) = ½·erfc(−z/√2)`.
pub(crate) const SQRT_2: f64 = 1.4142135623730951_f64;

/// ½·ln(2π), the additive constant of the Stirling/Lanczos form of ln Γ.
pub(crate) const HALF_LOG_TWO_PI: f64 = 0.918_938_533_204_672_741_780_329_736_406;

/// Lanczos coefficients (g = 7, n = 9) for ln Γ(x), x ≥ 0.5.
pub(crate) const COF: [f64; 9] = [
    0.999_999_999_999_809_93,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// Exact ln(n!) for n = 0..=20, so small multinomial counts avoid the Lanczos error.
pub(crate) const LN_FACTORIAL_TABLE: [f64; 21] = [
    0.0,
    0.0,
    0.6931471805599453,
    1.791759469228055,
    3.1780538303479458,
    4.787491742782046,
    6.579251212010101,
    8.525161361065415,
    10.60460290274525,
    12.801827480081469,
    15.104412573075516,
    17.502307845873887,
    19.987214495661885,
    22.552163853123425,
    25.19122118273868,
    27.89927138384089,
    30.671860106080672,
    33.50507345013689,
    36.39544520803305,
    39.339884187199495,
    42.335616460753485,
];
