//! Core data types for optlab
//!
//! Defines fundamental types:
//! - OptionContract: Spot, strike, expiry, rate, dividend yield, vol
//! - Greeks: First-order sensitivities
//! - OptionLeg / Strategy: Multi-leg position records
//! - OptLabError: Crate error type

pub mod error;
pub mod greeks;
pub mod leg;
pub mod option;

pub use error::*;
pub use greeks::*;
pub use leg::*;
pub use option::*;
