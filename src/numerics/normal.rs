//! Standard normal distribution
//!
//! CDF built on the Abramowitz & Stegun 7.1.26 rational approximation of
//! erf; max error ~1.5e-7, which is ample for pricing work.

use std::f64::consts::{FRAC_1_SQRT_2, PI};

/// Error function, Abramowitz & Stegun 7.1.26
pub fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let ax = x.abs();

    let p = 0.3275911;
    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;

    let t = 1.0 / (1.0 + p * ax);
    let poly = ((((a5 * t + a4) * t + a3) * t + a2) * t + a1) * t;
    let y = 1.0 - poly * (-ax * ax).exp();

    sign * y
}

/// Standard normal CDF
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x * FRAC_1_SQRT_2))
}

/// Standard normal PDF
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}
