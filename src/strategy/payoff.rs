//! Expiration payoff engine
//!
//! Everything here is expiration-only mathematics: piecewise-linear payoffs
//! summed leg by leg, break-even detection, and max-profit/loss
//! classification. Pre-expiration valuation lives in [`crate::strategy::pl`].

use serde::{Deserialize, Serialize};

use crate::core::{OptionLeg, Position};
use crate::numerics::{bisection, linspace};

/// Scan granularity for break-even detection, in price units
const BREAK_EVEN_STEP: f64 = 0.01;

/// Refinement tolerance for a detected break-even
const BREAK_EVEN_TOL: f64 = 1e-4;

/// Two break-evens closer than this collapse into one
const BREAK_EVEN_MERGE: f64 = 1e-3;

/// Margin by which a boundary payoff must beat the best strike payoff for
/// the profit or loss to be flagged unlimited
const UNBOUNDED_MARGIN: f64 = 0.1;

/// An evenly sampled price grid
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
    pub points: usize,
}

impl PriceRange {
    pub fn new(min: f64, max: f64, points: usize) -> Self {
        Self { min, max, points }
    }

    /// Symmetric range around a center price
    pub fn around(center: f64, half_width: f64, points: usize) -> Self {
        Self {
            min: (center - half_width).max(0.0),
            max: center + half_width,
            points,
        }
    }
}

/// One sample of a payoff or P/L curve
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CurvePoint {
    pub price: f64,
    pub value: f64,
}

/// Max-profit/max-loss summary at expiration.
///
/// The unlimited flags use a heuristic, not a proof: a side is classified
/// unlimited when the payoff at a range boundary runs more than 10% beyond
/// the extreme sampled at the leg strikes in that direction. That is a proxy
/// for an asymptote escaping the range; a capped payoff (flat out to the
/// boundary) never triggers it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MaxProfitLoss {
    pub max_profit: f64,
    pub max_loss: f64,
    pub profit_unlimited: bool,
    pub loss_unlimited: bool,
}

/// Expiration payoff of the whole position at one underlying price.
///
/// Legs are independent at expiration; the total is a plain sum of
/// `sign(position) * (intrinsic - premium) * quantity` over legs.
pub fn payoff_at(legs: &[OptionLeg], underlying_price: f64) -> f64 {
    legs.iter()
        .map(|leg| leg.payoff_per_unit(underlying_price) * leg.quantity)
        .sum()
}

/// Expiration payoff sampled on an evenly spaced grid
pub fn payoff_curve(legs: &[OptionLeg], range: &PriceRange) -> Vec<CurvePoint> {
    linspace(range.min, range.max, range.points)
        .into_iter()
        .map(|price| CurvePoint {
            price,
            value: payoff_at(legs, price),
        })
        .collect()
}

/// Underlying prices where the expiration payoff crosses zero, ascending.
///
/// The payoff is scanned at 0.01 price-unit granularity; each adjacent-sample
/// sign change (touching zero included) is refined by bisection.
pub fn find_break_evens(legs: &[OptionLeg], range: &PriceRange) -> Vec<f64> {
    let mut break_evens: Vec<f64> = Vec::new();
    let mut push = |candidate: f64, found: &mut Vec<f64>| {
        let is_new = found
            .last()
            .map_or(true, |last| (candidate - last).abs() > BREAK_EVEN_MERGE);
        if is_new {
            found.push(candidate);
        }
    };

    let mut x = range.min;
    let mut prev = payoff_at(legs, x);
    while x < range.max {
        let next_x = (x + BREAK_EVEN_STEP).min(range.max);
        let cur = payoff_at(legs, next_x);

        if prev == 0.0 {
            push(x, &mut break_evens);
        } else if prev * cur < 0.0 {
            let refined = bisection(
                |price| payoff_at(legs, price),
                x,
                next_x,
                BREAK_EVEN_TOL,
                100,
            );
            if let Some(root) = refined {
                push(root.root, &mut break_evens);
            }
        }

        prev = cur;
        x = next_x;
    }
    if prev == 0.0 {
        push(range.max, &mut break_evens);
    }

    break_evens
}

/// Max profit and loss over the range.
///
/// The payoff is piecewise-linear with kinks only at leg strikes, so extrema
/// can occur only at the strikes and the range bounds; sampling those
/// candidates is exact, not a numerical search.
pub fn max_profit_loss(legs: &[OptionLeg], range: &PriceRange) -> MaxProfitLoss {
    if legs.is_empty() {
        return MaxProfitLoss {
            max_profit: 0.0,
            max_loss: 0.0,
            profit_unlimited: false,
            loss_unlimited: false,
        };
    }

    let at_min = payoff_at(legs, range.min);
    let at_max = payoff_at(legs, range.max);
    let boundary_high = at_min.max(at_max);
    let boundary_low = at_min.min(at_max);

    let mut strike_high = f64::NEG_INFINITY;
    let mut strike_low = f64::INFINITY;
    for leg in legs {
        let at_strike = payoff_at(legs, leg.strike);
        strike_high = strike_high.max(at_strike);
        strike_low = strike_low.min(at_strike);
    }

    let max_profit = boundary_high.max(strike_high);
    let max_loss = boundary_low.min(strike_low);

    let profit_unlimited = boundary_high > strike_high + UNBOUNDED_MARGIN * strike_high.abs();
    let loss_unlimited = boundary_low < strike_low - UNBOUNDED_MARGIN * strike_low.abs();

    MaxProfitLoss {
        max_profit,
        max_loss,
        profit_unlimited,
        loss_unlimited,
    }
}

/// Signed entry premium: positive for a net credit received, negative for a
/// net debit paid.
pub fn net_premium(legs: &[OptionLeg]) -> f64 {
    legs.iter()
        .map(|leg| {
            let sign = match leg.position {
                Position::Short => 1.0,
                Position::Long => -1.0,
            };
            sign * leg.premium * leg.quantity
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{OptionType, Position};

    fn leg(
        id: &str,
        option_type: OptionType,
        position: Position,
        strike: f64,
        premium: f64,
    ) -> OptionLeg {
        OptionLeg::new(id, option_type, position, 1.0, strike, premium, 30.0)
    }

    fn long_call(strike: f64, premium: f64) -> OptionLeg {
        leg("lc", OptionType::Call, Position::Long, strike, premium)
    }

    fn long_put(strike: f64, premium: f64) -> OptionLeg {
        leg("lp", OptionType::Put, Position::Long, strike, premium)
    }

    fn iron_condor() -> Vec<OptionLeg> {
        vec![
            leg("lp", OptionType::Put, Position::Long, 90.0, 0.70),
            leg("sp", OptionType::Put, Position::Short, 95.0, 1.50),
            leg("sc", OptionType::Call, Position::Short, 105.0, 1.50),
            leg("lc", OptionType::Call, Position::Long, 110.0, 0.70),
        ]
    }

    #[test]
    fn test_payoff_at_single_legs() {
        let legs = [long_call(105.0, 1.83)];
        assert!((payoff_at(&legs, 100.0) - -1.83).abs() < 1e-12);
        assert!((payoff_at(&legs, 110.0) - 3.17).abs() < 1e-12);

        let short_put = [leg("sp", OptionType::Put, Position::Short, 100.0, 3.0)];
        assert!((payoff_at(&short_put, 105.0) - 3.0).abs() < 1e-12);
        assert!((payoff_at(&short_put, 90.0) - -7.0).abs() < 1e-12);
    }

    #[test]
    fn test_payoff_is_linear_in_legs() {
        let a = long_call(105.0, 1.83);
        let b = long_put(95.0, 2.10);
        let both = [a.clone(), b.clone()];
        for price in [80.0, 95.0, 100.0, 105.0, 130.0] {
            let sum = payoff_at(&[a.clone()], price) + payoff_at(&[b.clone()], price);
            assert!((payoff_at(&both, price) - sum).abs() < 1e-12);
        }
    }

    #[test]
    fn test_quantity_scales_payoff() {
        let mut scaled = long_call(105.0, 1.83);
        scaled.quantity = 3.0;
        assert!((payoff_at(&[scaled], 110.0) - 3.0 * 3.17).abs() < 1e-12);
    }

    #[test]
    fn test_payoff_curve_grid() {
        let legs = [long_call(105.0, 1.83)];
        let curve = payoff_curve(&legs, &PriceRange::new(90.0, 120.0, 61));
        assert_eq!(curve.len(), 61);
        assert_eq!(curve[0].price, 90.0);
        assert_eq!(curve[60].price, 120.0);
        assert!((curve[30].price - 105.0).abs() < 1e-9);
        assert!((curve[30].value - -1.83).abs() < 1e-9);
    }

    #[test]
    fn test_break_even_long_call() {
        // Unique break-even at K + premium
        let legs = [long_call(105.0, 1.83)];
        let found = find_break_evens(&legs, &PriceRange::new(80.0, 130.0, 0));
        assert_eq!(found.len(), 1);
        assert!((found[0] - 106.83).abs() < 1e-3);
    }

    #[test]
    fn test_break_even_long_put() {
        // Unique break-even at K - premium
        let legs = [long_put(105.0, 1.83)];
        let found = find_break_evens(&legs, &PriceRange::new(80.0, 130.0, 0));
        assert_eq!(found.len(), 1);
        assert!((found[0] - 103.17).abs() < 1e-3);
    }

    #[test]
    fn test_straddle_break_evens_are_symmetric() {
        let legs = [long_call(100.0, 3.06), long_put(100.0, 2.65)];
        let found = find_break_evens(&legs, &PriceRange::new(70.0, 130.0, 0));
        assert_eq!(found.len(), 2);
        let total = 3.06 + 2.65;
        assert!((found[0] - (100.0 - total)).abs() < 1e-3);
        assert!((found[1] - (100.0 + total)).abs() < 1e-3);
        // Symmetric around the strike
        assert!((found[0] + found[1] - 200.0).abs() < 1e-2);
    }

    #[test]
    fn test_iron_condor_break_evens() {
        let legs = iron_condor();
        let found = find_break_evens(&legs, &PriceRange::new(80.0, 120.0, 0));
        // Net credit 1.60: short strikes shifted by the credit
        assert_eq!(found.len(), 2);
        assert!((found[0] - 93.40).abs() < 1e-2);
        assert!((found[1] - 106.60).abs() < 1e-2);
    }

    #[test]
    fn test_long_call_profit_unlimited_loss_bounded() {
        let legs = [long_call(105.0, 1.83)];
        let summary = max_profit_loss(&legs, &PriceRange::new(50.0, 200.0, 0));
        assert!(summary.profit_unlimited);
        assert!(!summary.loss_unlimited);
        assert!((summary.max_loss - -1.83).abs() < 1e-12);
    }

    #[test]
    fn test_short_call_loss_unlimited() {
        let legs = [leg("sc", OptionType::Call, Position::Short, 105.0, 1.83)];
        let summary = max_profit_loss(&legs, &PriceRange::new(50.0, 200.0, 0));
        assert!(!summary.profit_unlimited);
        assert!(summary.loss_unlimited);
        assert!((summary.max_profit - 1.83).abs() < 1e-12);
    }

    #[test]
    fn test_iron_condor_is_bounded() {
        let legs = iron_condor();
        let summary = max_profit_loss(&legs, &PriceRange::new(70.0, 130.0, 0));
        assert!(!summary.profit_unlimited);
        assert!(!summary.loss_unlimited);
        // Credit 1.60; wings 5 wide
        assert!((summary.max_profit - 1.60).abs() < 1e-9);
        assert!((summary.max_loss - -3.40).abs() < 1e-9);
    }

    #[test]
    fn test_net_premium_sign_convention() {
        // Iron condor collects a credit
        assert!((net_premium(&iron_condor()) - 1.60).abs() < 1e-12);
        // Long options pay a debit
        assert!((net_premium(&[long_call(105.0, 1.83)]) - -1.83).abs() < 1e-12);

        let mut sized = long_call(105.0, 1.83);
        sized.quantity = 2.0;
        assert!((net_premium(&[sized]) - -3.66).abs() < 1e-12);
    }
}
