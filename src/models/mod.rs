//! Pricing models
//!
//! Black-Scholes closed-form pricing with Greeks, and the implied
//! volatility solver built on top of it.

pub mod black_scholes;
pub mod implied_vol;

pub use black_scholes::{d1, d2, greeks, price};
pub use implied_vol::{implied_vol, IvErrorKind, IvMethod, IvResult, IV_MAX, IV_MIN};
