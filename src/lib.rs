//! # optlab - Options Analytics Core
//!
//! A pure, synchronous options-analytics library: Black-Scholes pricing,
//! implied-volatility solving, and multi-leg strategy payoff/P&L analysis
//! with Greeks.
//!
//! ## Overview
//!
//! The crate is layered bottom-up:
//! - **Numeric kernel**: root finders, an erf-based normal distribution,
//!   interpolation helpers
//! - **Black-Scholes**: closed-form European pricing with continuous
//!   dividend yield, plus the five Greeks
//! - **Implied volatility**: Newton-Raphson seeded analytically, bisection
//!   fallback, tagged (never-throwing) outcomes
//! - **Strategy analytics**: expiration payoff, break-evens,
//!   max-profit/loss classification, preset templates, and a pre-expiration
//!   P/L simulator with time-decay and volatility sweeps
//!
//! ## Usage
//!
//! ```rust
//! use optlab::prelude::*;
//!
//! // Price a 30-day call
//! let contract = OptionContract::call(100.0, 105.0, 30.0 / 365.0, 0.05, 0.0, 0.25);
//! let value = price(&contract).unwrap();
//!
//! // Recover the volatility implied by a market price
//! let iv = implied_vol(value, 100.0, 105.0, 0.05, 0.0, 30.0 / 365.0, OptionType::Call);
//! assert!(iv.is_solved());
//!
//! // Analyze a preset iron condor
//! let condor = preset("iron-condor", 100.0).unwrap();
//! let range = PriceRange::new(70.0, 130.0, 100);
//! let break_evens = find_break_evens(&condor.legs, &range);
//! assert_eq!(break_evens.len(), 2);
//! ```
//!
//! ## What This Crate Does NOT Do
//!
//! - American-style early exercise
//! - Stochastic or local volatility surfaces
//! - Live market data, persistence, or any I/O
//! - Probability-weighted risk metrics (they need a price distribution the
//!   caller owns; the API reports them as `null`)

pub mod core;
pub mod models;
pub mod numerics;
pub mod strategy;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{
        Greeks, OptLabError, OptLabResult, OptionContract, OptionLeg, OptionType, Position,
        Strategy, ValidationIssue, MAX_LEGS,
    };

    // Numeric kernel
    pub use crate::numerics::{
        bilinear_interp, bisection, erf, linear_interp, linspace, newton_raphson, norm_cdf,
        norm_pdf, RootResult,
    };

    // Models
    pub use crate::models::{
        d1, d2, greeks, implied_vol, price, IvErrorKind, IvMethod, IvResult, IV_MAX, IV_MIN,
    };

    // Strategy analytics
    pub use crate::strategy::{
        find_break_evens, generate_pl_curve, max_profit_loss, net_premium, payoff_at,
        payoff_curve, preset, preset_ids, risk_metrics, simulate_time_decay, strategy_pl,
        volatility_sensitivity, CurvePoint, LegPL, MaxProfitLoss, PriceRange, RiskMetrics,
        StrategyPL, TimeDecayPoint, VolPoint, VolRange, STRATEGY_PRESETS,
    };
}

// Re-export main types at crate root
pub use crate::core::{OptLabError, OptLabResult, Strategy};
pub use crate::models::{greeks, implied_vol, price};
pub use crate::strategy::strategy_pl;
