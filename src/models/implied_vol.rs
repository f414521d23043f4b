//! Implied volatility solver
//!
//! Inverts the Black-Scholes price against an observed market price.
//! Newton-Raphson seeded by the Brenner-Subrahmanyam approximation, with a
//! bisection fallback over the full volatility bracket. Outcomes are tagged
//! results, never exceptions: "no solution exists" and "solver gave up" stay
//! distinguishable for the caller.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::core::{OptionContract, OptionType};
use crate::models::black_scholes::{greeks, price_unchecked};
use crate::numerics::{bisection, newton_raphson};

/// Volatility search bracket
pub const IV_MIN: f64 = 0.001;
pub const IV_MAX: f64 = 5.0;

/// Acceptance tolerance: a candidate vol must reproduce the market price
/// this closely
const PRICE_TOL: f64 = 1e-6;

/// Internal root-finder tolerance
const SOLVER_TOL: f64 = 1e-8;

/// Below this time to expiry the option is treated as expired
const EXPIRY_CUTOFF: f64 = 1e-6;

const MAX_ITER: usize = 100;

/// Why the solver produced no volatility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IvErrorKind {
    /// Non-positive spot/strike, negative time, or negative market price
    InvalidParameters,
    /// Market price below discounted intrinsic value (arbitrage)
    BelowIntrinsic,
    /// Expired option whose market price is not its intrinsic value
    CannotSolveAtExpiration,
    /// Neither Newton-Raphson nor bisection found a volatility in bounds
    DidNotConverge,
}

/// Which method produced the result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IvMethod {
    NewtonRaphson,
    Bisection,
    Failed,
}

/// Tagged solver outcome. `implied_vol == None` always pairs with a
/// populated `error`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IvResult {
    pub implied_vol: Option<f64>,
    pub error: Option<IvErrorKind>,
    pub method: IvMethod,
    pub iterations: usize,
}

impl IvResult {
    fn solved(vol: f64, method: IvMethod, iterations: usize) -> Self {
        Self {
            implied_vol: Some(vol),
            error: None,
            method,
            iterations,
        }
    }

    fn failed(kind: IvErrorKind) -> Self {
        Self {
            implied_vol: None,
            error: Some(kind),
            method: IvMethod::Failed,
            iterations: 0,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.implied_vol.is_some()
    }
}

/// Solve for the volatility that reprices to `market_price`.
#[allow(clippy::too_many_arguments)]
pub fn implied_vol(
    market_price: f64,
    spot: f64,
    strike: f64,
    rate: f64,
    div: f64,
    time: f64,
    option_type: OptionType,
) -> IvResult {
    // Structural validation
    if spot <= 0.0 || strike <= 0.0 || time < 0.0 || market_price < 0.0 {
        return IvResult::failed(IvErrorKind::InvalidParameters);
    }

    // No-arbitrage: the price can never fall below discounted intrinsic
    let intrinsic = option_type.intrinsic(spot, strike);
    if market_price < intrinsic * (-rate * time).exp() - PRICE_TOL {
        return IvResult::failed(IvErrorKind::BelowIntrinsic);
    }

    // At expiration the only consistent price is intrinsic, with zero vol
    if time < EXPIRY_CUTOFF {
        if (market_price - intrinsic).abs() <= PRICE_TOL {
            return IvResult::solved(0.0, IvMethod::NewtonRaphson, 0);
        }
        return IvResult::failed(IvErrorKind::CannotSolveAtExpiration);
    }

    let reprice = |vol: f64| {
        price_unchecked(&OptionContract::new(
            option_type,
            spot,
            strike,
            time,
            rate,
            div,
            vol,
        ))
    };
    let objective = |vol: f64| reprice(vol) - market_price;
    // Vega comes back per 1% from the pricer; rescale to the raw derivative
    let slope = |vol: f64| {
        greeks(&OptionContract::new(
            option_type,
            spot,
            strike,
            time,
            rate,
            div,
            vol,
        ))
        .vega
            * 100.0
    };

    // Brenner-Subrahmanyam ATM seed
    let seed = ((2.0 * PI / time).sqrt() * market_price / spot).clamp(IV_MIN, IV_MAX);

    if let Some(found) = newton_raphson(&objective, &slope, seed, SOLVER_TOL, MAX_ITER) {
        // Newton can satisfy its stopping criterion at a vol that is outside
        // the meaningful bracket or that no longer reprices the market;
        // re-verify before accepting.
        let in_bounds = found.root > IV_MIN && found.root < IV_MAX;
        if in_bounds && (reprice(found.root) - market_price).abs() < PRICE_TOL {
            return IvResult::solved(found.root, IvMethod::NewtonRaphson, found.iterations);
        }
    }

    tracing::debug!(
        market_price,
        spot,
        strike,
        "newton-raphson rejected, falling back to bisection"
    );

    match bisection(&objective, IV_MIN, IV_MAX, SOLVER_TOL, MAX_ITER) {
        Some(found) => IvResult::solved(found.root, IvMethod::Bisection, found.iterations),
        None => IvResult::failed(IvErrorKind::DidNotConverge),
    }
}
