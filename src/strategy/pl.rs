//! Pre-expiration P/L simulator
//!
//! Values every leg through the Black-Scholes pricer at its own remaining
//! time, aggregates P/L and Greeks across the position, and derives the
//! time-decay / volatility sweeps and the risk summary. All functions are
//! pure: same inputs, same outputs, nothing cached between calls.

use serde::{Deserialize, Serialize};

use crate::core::{Greeks, OptLabResult, OptionContract, OptionLeg, Position};
use crate::models::black_scholes::{greeks, price};
use crate::numerics::linspace;
use crate::strategy::payoff::{max_profit_loss, net_premium, CurvePoint, PriceRange};

/// Sample count for the risk-metrics P/L curve
const RISK_CURVE_POINTS: usize = 100;

/// Mark-to-model state of one leg
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegPL {
    pub id: String,
    /// Current theoretical value per unit
    pub current_value: f64,
    /// Profit or loss for the whole leg
    pub pl: f64,
    /// P/L relative to absolute entry cost, in percent (0 when entry cost
    /// is 0)
    pub pl_percent: f64,
    /// Pricer Greeks scaled by signed quantity
    pub greeks: Greeks,
}

/// Mark-to-model state of the whole strategy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyPL {
    pub total_pl: f64,
    /// Signed entry premium: positive = net credit received
    pub net_premium: f64,
    /// Position Greeks, summed across legs
    pub greeks: Greeks,
    pub legs: Vec<LegPL>,
}

/// One sample of the time-decay sweep
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimeDecayPoint {
    /// Days remaining on the longest leg at this sample
    pub days_remaining: f64,
    pub pl: f64,
}

/// One sample of the volatility sweep
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VolPoint {
    pub vol: f64,
    pub pl: f64,
}

/// An evenly sampled volatility grid
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VolRange {
    pub min: f64,
    pub max: f64,
    pub points: usize,
}

impl VolRange {
    pub fn new(min: f64, max: f64, points: usize) -> Self {
        Self { min, max, points }
    }
}

/// Risk summary over a price range.
///
/// Probability-of-profit, expected value, and Sharpe ratio need a price
/// distribution this core does not own; the fields stay in the schema and
/// report `null`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskMetrics {
    pub max_loss: f64,
    pub max_gain: f64,
    pub loss_unlimited: bool,
    pub gain_unlimited: bool,
    pub probability_of_profit: Option<f64>,
    pub expected_value: Option<f64>,
    pub sharpe_ratio: Option<f64>,
}

fn leg_contract(leg: &OptionLeg, spot: f64, vol: f64, rate: f64, div: f64) -> OptionContract {
    OptionContract::new(
        leg.option_type,
        spot,
        leg.strike,
        leg.time_to_expiry(),
        rate,
        div,
        vol,
    )
}

fn leg_pl(leg: &OptionLeg, spot: f64, vol: f64, rate: f64, div: f64) -> OptLabResult<LegPL> {
    let contract = leg_contract(leg, spot, vol, rate, div);
    let current_value = price(&contract)?;

    let pl = match leg.position {
        Position::Long => (current_value - leg.premium) * leg.quantity,
        Position::Short => (leg.premium - current_value) * leg.quantity,
    };
    let entry_cost = leg.premium * leg.quantity;
    let pl_percent = if entry_cost > 0.0 {
        pl / entry_cost * 100.0
    } else {
        0.0
    };

    Ok(LegPL {
        id: leg.id.clone(),
        current_value,
        pl,
        pl_percent,
        greeks: greeks(&contract).scale(leg.position.sign() * leg.quantity),
    })
}

/// Mark a strategy to model at the given spot, vol, rate, and dividend
/// yield. Each leg is valued at its own remaining time to expiry.
pub fn strategy_pl(
    legs: &[OptionLeg],
    current_price: f64,
    vol: f64,
    rate: f64,
    div: f64,
) -> OptLabResult<StrategyPL> {
    let mut leg_results = Vec::with_capacity(legs.len());
    let mut total_pl = 0.0;
    let mut total_greeks = Greeks::default();

    for leg in legs {
        let marked = leg_pl(leg, current_price, vol, rate, div)?;
        total_pl += marked.pl;
        total_greeks = total_greeks.add(&marked.greeks);
        leg_results.push(marked);
    }

    Ok(StrategyPL {
        total_pl,
        net_premium: net_premium(legs),
        greeks: total_greeks,
        legs: leg_results,
    })
}

/// Strategy P/L sampled across a spot-price grid
pub fn generate_pl_curve(
    legs: &[OptionLeg],
    range: &PriceRange,
    vol: f64,
    rate: f64,
    div: f64,
) -> OptLabResult<Vec<CurvePoint>> {
    linspace(range.min, range.max, range.points)
        .into_iter()
        .map(|spot| {
            Ok(CurvePoint {
                price: spot,
                value: strategy_pl(legs, spot, vol, rate, div)?.total_pl,
            })
        })
        .collect()
}

/// Strategy P/L as the calendar advances one day at a time.
///
/// Every leg's remaining time shrinks uniformly, flooring at expiration;
/// the sweep runs from today down to the longest leg's expiry day.
pub fn simulate_time_decay(
    legs: &[OptionLeg],
    current_price: f64,
    vol: f64,
    rate: f64,
    div: f64,
) -> OptLabResult<Vec<TimeDecayPoint>> {
    let horizon = legs
        .iter()
        .map(|leg| leg.days_to_expiry)
        .fold(0.0_f64, f64::max)
        .ceil() as usize;

    let mut sweep = Vec::with_capacity(horizon + 1);
    for elapsed in 0..=horizon {
        let shifted: Vec<OptionLeg> = legs
            .iter()
            .map(|leg| OptionLeg {
                days_to_expiry: (leg.days_to_expiry - elapsed as f64).max(0.0),
                ..leg.clone()
            })
            .collect();

        sweep.push(TimeDecayPoint {
            days_remaining: (horizon - elapsed) as f64,
            pl: strategy_pl(&shifted, current_price, vol, rate, div)?.total_pl,
        });
    }

    Ok(sweep)
}

/// Strategy P/L across a volatility grid at fixed spot
pub fn volatility_sensitivity(
    legs: &[OptionLeg],
    current_price: f64,
    rate: f64,
    div: f64,
    vols: &VolRange,
) -> OptLabResult<Vec<VolPoint>> {
    linspace(vols.min, vols.max, vols.points)
        .into_iter()
        .map(|vol| {
            Ok(VolPoint {
                vol,
                pl: strategy_pl(legs, current_price, vol, rate, div)?.total_pl,
            })
        })
        .collect()
}

/// Risk summary from a 100-point P/L curve over the given price range
pub fn risk_metrics(
    legs: &[OptionLeg],
    range: &PriceRange,
    vol: f64,
    rate: f64,
    div: f64,
) -> OptLabResult<RiskMetrics> {
    let sampled = PriceRange {
        points: RISK_CURVE_POINTS,
        ..*range
    };
    let curve = generate_pl_curve(legs, &sampled, vol, rate, div)?;

    let max_gain = curve
        .iter()
        .fold(f64::NEG_INFINITY, |acc, point| acc.max(point.value));
    let max_loss = curve
        .iter()
        .fold(f64::INFINITY, |acc, point| acc.min(point.value));

    // Unboundedness is structural, not a function of the mark date: reuse
    // the expiration payoff classification over the same range
    let shape = max_profit_loss(legs, range);
    let gain_unlimited = shape.profit_unlimited;
    let loss_unlimited = shape.loss_unlimited;

    Ok(RiskMetrics {
        max_loss,
        max_gain,
        loss_unlimited,
        gain_unlimited,
        probability_of_profit: None,
        expected_value: None,
        sharpe_ratio: None,
    })
}
