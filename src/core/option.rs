//! Option contract definitions
//!
//! A contract is a plain bundle of pricing inputs. Day counts and year
//! fractions are plain numbers; calendar handling belongs to the caller.

use serde::{Deserialize, Serialize};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Payoff direction: +1 for call, -1 for put
    pub fn phi(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Intrinsic value at given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

/// European option pricing inputs
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OptionContract {
    /// Option type (Call/Put)
    pub option_type: OptionType,
    /// Spot price of the underlying
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Time to expiry in years
    pub time: f64,
    /// Continuously compounded risk-free rate
    pub rate: f64,
    /// Continuous dividend yield
    pub div: f64,
    /// Volatility (annualized)
    pub vol: f64,
}

impl OptionContract {
    pub fn new(
        option_type: OptionType,
        spot: f64,
        strike: f64,
        time: f64,
        rate: f64,
        div: f64,
        vol: f64,
    ) -> Self {
        Self {
            option_type,
            spot,
            strike,
            time,
            rate,
            div,
            vol,
        }
    }

    /// Call contract shorthand
    pub fn call(spot: f64, strike: f64, time: f64, rate: f64, div: f64, vol: f64) -> Self {
        Self::new(OptionType::Call, spot, strike, time, rate, div, vol)
    }

    /// Put contract shorthand
    pub fn put(spot: f64, strike: f64, time: f64, rate: f64, div: f64, vol: f64) -> Self {
        Self::new(OptionType::Put, spot, strike, time, rate, div, vol)
    }

    /// Same contract repriced at a different volatility
    pub fn with_vol(&self, vol: f64) -> Self {
        Self { vol, ..*self }
    }

    /// Intrinsic value at the contract's own spot
    pub fn intrinsic(&self) -> f64 {
        self.option_type.intrinsic(self.spot, self.strike)
    }

    /// Is this option in the money?
    pub fn is_itm(&self) -> bool {
        match self.option_type {
            OptionType::Call => self.spot > self.strike,
            OptionType::Put => self.spot < self.strike,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_type() {
        assert_eq!(OptionType::Call.phi(), 1.0);
        assert_eq!(OptionType::Put.phi(), -1.0);

        assert_eq!(OptionType::Call.intrinsic(110.0, 100.0), 10.0);
        assert_eq!(OptionType::Put.intrinsic(90.0, 100.0), 10.0);
        assert_eq!(OptionType::Call.intrinsic(90.0, 100.0), 0.0);
    }

    #[test]
    fn test_moneyness() {
        let call = OptionContract::call(110.0, 100.0, 0.25, 0.05, 0.0, 0.2);
        assert!(call.is_itm());
        assert_eq!(call.intrinsic(), 10.0);

        let put = OptionContract::put(110.0, 100.0, 0.25, 0.05, 0.0, 0.2);
        assert!(!put.is_itm());
        assert_eq!(put.intrinsic(), 0.0);
    }

    #[test]
    fn test_with_vol() {
        let c = OptionContract::call(100.0, 100.0, 0.5, 0.05, 0.01, 0.2);
        let bumped = c.with_vol(0.3);
        assert_eq!(bumped.vol, 0.3);
        assert_eq!(bumped.strike, c.strike);
        assert_eq!(bumped.div, c.div);
    }
}
