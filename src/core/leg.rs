//! Strategy legs
//!
//! A leg is one option position inside a multi-leg strategy. Legs are plain
//! value records owned by their `Strategy`; aggregation across legs is always
//! by summation.

use serde::{Deserialize, Serialize};

use crate::core::OptionType;

/// Maximum number of legs in a strategy
pub const MAX_LEGS: usize = 6;

/// Position direction for a leg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    /// Long position (bought)
    Long,
    /// Short position (sold/written)
    Short,
}

impl Position {
    /// Direction sign: +1 long, -1 short
    pub fn sign(&self) -> f64 {
        match self {
            Position::Long => 1.0,
            Position::Short => -1.0,
        }
    }
}

/// A single leg of an options strategy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionLeg {
    /// Opaque identifier, unique within the owning strategy
    pub id: String,
    /// Option type (Call/Put)
    pub option_type: OptionType,
    /// Position direction
    pub position: Position,
    /// Contract count; always positive, direction comes from `position`
    pub quantity: f64,
    /// Strike price
    pub strike: f64,
    /// Entry price paid (long) or received (short) per unit
    pub premium: f64,
    /// Calendar days until expiration
    pub days_to_expiry: f64,
}

impl OptionLeg {
    pub fn new(
        id: impl Into<String>,
        option_type: OptionType,
        position: Position,
        quantity: f64,
        strike: f64,
        premium: f64,
        days_to_expiry: f64,
    ) -> Self {
        Self {
            id: id.into(),
            option_type,
            position,
            quantity,
            strike,
            premium,
            days_to_expiry,
        }
    }

    /// Time to expiry in years
    pub fn time_to_expiry(&self) -> f64 {
        self.days_to_expiry / 365.0
    }

    /// Expiration payoff per unit at the given underlying price, net of the
    /// entry premium
    pub fn payoff_per_unit(&self, underlying_price: f64) -> f64 {
        let intrinsic = self.option_type.intrinsic(underlying_price, self.strike);
        self.position.sign() * (intrinsic - self.premium)
    }
}

/// An ordered collection of legs plus the underlying reference price
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Strategy {
    pub legs: Vec<OptionLeg>,
    pub underlying_price: f64,
}

/// Advisory validation finding for one field of one leg (or the strategy as
/// a whole when `leg_id` is empty)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub leg_id: Option<String>,
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    fn strategy(field: &str, message: impl Into<String>) -> Self {
        Self {
            leg_id: None,
            field: field.to_string(),
            message: message.into(),
        }
    }

    fn leg(id: &str, field: &str, message: impl Into<String>) -> Self {
        Self {
            leg_id: Some(id.to_string()),
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl Strategy {
    pub fn new(underlying_price: f64) -> Self {
        Self {
            legs: Vec::new(),
            underlying_price,
        }
    }

    pub fn with_legs(underlying_price: f64, legs: Vec<OptionLeg>) -> Self {
        Self {
            legs,
            underlying_price,
        }
    }

    /// Append a leg
    pub fn add_leg(&mut self, leg: OptionLeg) {
        self.legs.push(leg);
    }

    /// Replace the leg with the same id; returns false if no such leg
    pub fn update_leg(&mut self, leg: OptionLeg) -> bool {
        match self.legs.iter_mut().find(|l| l.id == leg.id) {
            Some(slot) => {
                *slot = leg;
                true
            }
            None => false,
        }
    }

    /// Remove and return the leg with the given id
    pub fn remove_leg(&mut self, id: &str) -> Option<OptionLeg> {
        let idx = self.legs.iter().position(|l| l.id == id)?;
        Some(self.legs.remove(idx))
    }

    /// Check strategy invariants, reporting violations per field.
    ///
    /// Findings are advisory: evaluation still works on a strategy that
    /// fails validation, the caller decides whether to proceed.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if self.legs.is_empty() {
            issues.push(ValidationIssue::strategy("legs", "strategy has no legs"));
        } else if self.legs.len() > MAX_LEGS {
            issues.push(ValidationIssue::strategy(
                "legs",
                format!("strategy has {} legs, maximum is {MAX_LEGS}", self.legs.len()),
            ));
        }

        if !(self.underlying_price > 0.0) {
            issues.push(ValidationIssue::strategy(
                "underlying_price",
                format!("underlying price must be positive, got {}", self.underlying_price),
            ));
        }

        for leg in &self.legs {
            if !(leg.strike > 0.0) {
                issues.push(ValidationIssue::leg(
                    &leg.id,
                    "strike",
                    format!("strike must be positive, got {}", leg.strike),
                ));
            }
            if !(leg.quantity > 0.0) {
                issues.push(ValidationIssue::leg(
                    &leg.id,
                    "quantity",
                    format!("quantity must be positive, got {}", leg.quantity),
                ));
            }
            if leg.premium < 0.0 {
                issues.push(ValidationIssue::leg(
                    &leg.id,
                    "premium",
                    format!("premium must be non-negative, got {}", leg.premium),
                ));
            }
            if leg.days_to_expiry < 0.0 {
                issues.push(ValidationIssue::leg(
                    &leg.id,
                    "days_to_expiry",
                    format!("days to expiry must be non-negative, got {}", leg.days_to_expiry),
                ));
            }
        }

        if !issues.is_empty() {
            tracing::warn!("strategy validation found {} issue(s)", issues.len());
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_call(id: &str, strike: f64, premium: f64) -> OptionLeg {
        OptionLeg::new(id, OptionType::Call, Position::Long, 1.0, strike, premium, 30.0)
    }

    #[test]
    fn test_leg_payoff_per_unit() {
        let leg = long_call("c1", 100.0, 2.0);
        assert_eq!(leg.payoff_per_unit(110.0), 8.0);
        assert_eq!(leg.payoff_per_unit(90.0), -2.0);

        let short = OptionLeg::new(
            "p1",
            OptionType::Put,
            Position::Short,
            1.0,
            100.0,
            3.0,
            30.0,
        );
        // Short put keeps the premium above strike, loses intrinsic below
        assert_eq!(short.payoff_per_unit(105.0), 3.0);
        assert_eq!(short.payoff_per_unit(90.0), -7.0);
    }

    #[test]
    fn test_leg_mutation() {
        let mut strategy = Strategy::new(100.0);
        strategy.add_leg(long_call("c1", 100.0, 2.0));
        strategy.add_leg(long_call("c2", 105.0, 1.0));

        let mut updated = long_call("c1", 102.5, 1.8);
        updated.quantity = 2.0;
        assert!(strategy.update_leg(updated));
        assert_eq!(strategy.legs[0].strike, 102.5);
        assert_eq!(strategy.legs[0].quantity, 2.0);

        assert!(!strategy.update_leg(long_call("missing", 100.0, 1.0)));

        let removed = strategy.remove_leg("c2").unwrap();
        assert_eq!(removed.id, "c2");
        assert_eq!(strategy.legs.len(), 1);
        assert!(strategy.remove_leg("c2").is_none());
    }

    #[test]
    fn test_validate_reports_per_field() {
        let mut strategy = Strategy::new(100.0);
        let mut bad = long_call("bad", -5.0, -1.0);
        bad.quantity = 0.0;
        strategy.add_leg(bad);

        let issues = strategy.validate();
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
        assert!(fields.contains(&"strike"));
        assert!(fields.contains(&"quantity"));
        assert!(fields.contains(&"premium"));
        assert!(issues.iter().all(|i| i.leg_id.as_deref() == Some("bad")));
    }

    #[test]
    fn test_validate_leg_count() {
        let empty = Strategy::new(100.0);
        assert!(empty.validate().iter().any(|i| i.field == "legs"));

        let mut crowded = Strategy::new(100.0);
        for i in 0..7 {
            crowded.add_leg(long_call(&format!("l{i}"), 100.0, 1.0));
        }
        assert!(crowded.validate().iter().any(|i| i.field == "legs"));
    }

    #[test]
    fn test_valid_strategy_is_clean() {
        let mut strategy = Strategy::new(100.0);
        strategy.add_leg(long_call("c1", 105.0, 1.83));
        assert!(strategy.validate().is_empty());
    }
}
