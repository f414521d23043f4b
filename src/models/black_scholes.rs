//! Black-Scholes Model
//!
//! Provides:
//! - European option pricing with continuous dividend yield
//! - Greeks computation
//!
//! Unit conventions are part of the contract: theta is per calendar day,
//! vega and rho are per 1% move.

use crate::core::{Greeks, OptLabError, OptLabResult, OptionContract, OptionType};
use crate::numerics::{norm_cdf, norm_pdf};

/// Black-Scholes d1 parameter
pub fn d1(spot: f64, strike: f64, rate: f64, div: f64, vol: f64, time: f64) -> f64 {
    ((spot / strike).ln() + (rate - div + 0.5 * vol * vol) * time) / (vol * time.sqrt())
}

/// Black-Scholes d2 parameter
pub fn d2(spot: f64, strike: f64, rate: f64, div: f64, vol: f64, time: f64) -> f64 {
    d1(spot, strike, rate, div, vol, time) - vol * time.sqrt()
}

fn validate(contract: &OptionContract) -> OptLabResult<()> {
    if contract.spot <= 0.0 {
        return Err(OptLabError::invalid_parameters(format!(
            "spot must be positive, got {}",
            contract.spot
        )));
    }
    if contract.strike <= 0.0 {
        return Err(OptLabError::invalid_parameters(format!(
            "strike must be positive, got {}",
            contract.strike
        )));
    }
    if contract.vol < 0.0 {
        return Err(OptLabError::invalid_parameters(format!(
            "volatility must be non-negative, got {}",
            contract.vol
        )));
    }
    Ok(())
}

/// Black-Scholes European option price.
///
/// Fails only on invalid input (non-positive spot/strike, negative vol).
/// `time <= 0` returns intrinsic value; `vol == 0` degenerates to the
/// discounted forward intrinsic.
pub fn price(contract: &OptionContract) -> OptLabResult<f64> {
    validate(contract)?;
    Ok(price_unchecked(contract))
}

/// Pricing core, input validity assumed
pub(crate) fn price_unchecked(contract: &OptionContract) -> f64 {
    let OptionContract {
        option_type,
        spot,
        strike,
        time,
        rate,
        div,
        vol,
    } = *contract;

    if time <= 0.0 {
        return option_type.intrinsic(spot, strike);
    }

    if vol == 0.0 {
        let forward = spot * ((rate - div) * time).exp();
        let df = (-rate * time).exp();
        return df * option_type.intrinsic(forward, strike);
    }

    let d1 = d1(spot, strike, rate, div, vol, time);
    let d2 = d2(spot, strike, rate, div, vol, time);
    let df = (-rate * time).exp();
    let div_factor = (-div * time).exp();

    match option_type {
        OptionType::Call => {
            spot * div_factor * norm_cdf(d1) - strike * df * norm_cdf(d2)
        }
        OptionType::Put => {
            strike * df * norm_cdf(-d2) - spot * div_factor * norm_cdf(-d1)
        }
    }
}

/// Black-Scholes Greeks.
///
/// At expiry or zero vol, delta collapses to a step on moneyness and the
/// remaining Greeks are zero.
pub fn greeks(contract: &OptionContract) -> Greeks {
    let OptionContract {
        option_type,
        spot,
        strike,
        time,
        rate,
        div,
        vol,
    } = *contract;

    if time <= 0.0 || vol <= 0.0 {
        let delta = match option_type {
            OptionType::Call => {
                if spot > strike {
                    1.0
                } else {
                    0.0
                }
            }
            OptionType::Put => {
                if spot < strike {
                    -1.0
                } else {
                    0.0
                }
            }
        };
        return Greeks::new(delta, 0.0, 0.0, 0.0, 0.0);
    }

    let d1 = d1(spot, strike, rate, div, vol, time);
    let d2 = d2(spot, strike, rate, div, vol, time);
    let df = (-rate * time).exp();
    let sqrt_t = time.sqrt();
    let pdf_d1 = norm_pdf(d1);
    let div_factor = (-div * time).exp();

    // Delta
    let delta = match option_type {
        OptionType::Call => div_factor * norm_cdf(d1),
        OptionType::Put => div_factor * (norm_cdf(d1) - 1.0),
    };

    // Gamma (same for call and put)
    let gamma = div_factor * pdf_d1 / (spot * vol * sqrt_t);

    // Vega (same for call and put, per 1% vol move)
    let vega = spot * div_factor * pdf_d1 * sqrt_t / 100.0;

    // Theta (per day)
    let term1 = -spot * div_factor * pdf_d1 * vol / (2.0 * sqrt_t);
    let theta = match option_type {
        OptionType::Call => {
            term1 - rate * strike * df * norm_cdf(d2) + div * spot * div_factor * norm_cdf(d1)
        }
        OptionType::Put => {
            term1 + rate * strike * df * norm_cdf(-d2) - div * spot * div_factor * norm_cdf(-d1)
        }
    };
    let theta_per_day = theta / 365.0;

    // Rho (per 1% rate move)
    let rho = match option_type {
        OptionType::Call => strike * time * df * norm_cdf(d2) / 100.0,
        OptionType::Put => -strike * time * df * norm_cdf(-d2) / 100.0,
    };

    Greeks::new(delta, gamma, theta_per_day, vega, rho)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract(option_type: OptionType, vol: f64) -> OptionContract {
        OptionContract::new(option_type, 100.0, 105.0, 30.0 / 365.0, 0.05, 0.0, vol)
    }

    #[test]
    fn test_reference_call_price() {
        // S=100, K=105, T=30/365, r=5%, q=0, vol=25%
        let price = price(&contract(OptionType::Call, 0.25)).unwrap();
        assert!((price - 1.1895).abs() < 1e-3);
    }

    #[test]
    fn test_put_call_parity() {
        // C - P = S*e^(-qT) - K*e^(-rT)
        let cases = [
            (100.0, 100.0, 1.0, 0.05, 0.0, 0.2),
            (100.0, 105.0, 30.0 / 365.0, 0.05, 0.0, 0.25),
            (500.0, 480.0, 0.25, 0.03, 0.01, 0.35),
            (50.0, 70.0, 2.0, 0.07, 0.02, 0.6),
        ];

        for (s, k, t, r, q, vol) in cases {
            let call = price(&OptionContract::call(s, k, t, r, q, vol)).unwrap();
            let put = price(&OptionContract::put(s, k, t, r, q, vol)).unwrap();
            let parity = s * (-q * t).exp() - k * (-r * t).exp();
            assert!(
                (call - put - parity).abs() < 1e-9,
                "parity violated for S={s} K={k} T={t}"
            );
        }
    }

    #[test]
    fn test_expiration_is_intrinsic() {
        let expired = OptionContract::call(110.0, 100.0, 0.0, 0.05, 0.0, 0.25);
        assert_eq!(price(&expired).unwrap(), 10.0);

        let otm = OptionContract::put(110.0, 100.0, 0.0, 0.05, 0.0, 0.25);
        assert_eq!(price(&otm).unwrap(), 0.0);
    }

    #[test]
    fn test_zero_vol_is_discounted_forward_intrinsic() {
        let c = OptionContract::call(100.0, 95.0, 1.0, 0.05, 0.0, 0.0);
        let forward = 100.0 * 0.05_f64.exp();
        let expected = (-0.05_f64).exp() * (forward - 95.0);
        assert!((price(&c).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_boundary_convergence() {
        // price → intrinsic as T → 0
        let mut t = 0.1;
        let mut prev = f64::MAX;
        while t > 1e-6 {
            let c = OptionContract::call(110.0, 100.0, t, 0.05, 0.0, 0.25);
            let gap = (price(&c).unwrap() - 10.0).abs();
            assert!(gap < prev + 1e-12);
            prev = gap;
            t /= 10.0;
        }
        assert!(prev < 1e-3);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert!(price(&OptionContract::call(-1.0, 100.0, 1.0, 0.05, 0.0, 0.2)).is_err());
        assert!(price(&OptionContract::call(100.0, 0.0, 1.0, 0.05, 0.0, 0.2)).is_err());
        assert!(price(&OptionContract::call(100.0, 100.0, 1.0, 0.05, 0.0, -0.2)).is_err());
    }

    #[test]
    fn test_greeks_reference_values() {
        let g = greeks(&contract(OptionType::Call, 0.25));
        assert!((g.delta - 0.27841).abs() < 1e-4);
        assert!((g.gamma - 0.046837).abs() < 1e-5);
        assert!((g.theta - -0.043751).abs() < 1e-5);
        assert!((g.vega - 0.096241).abs() < 1e-5);
        assert!((g.rho - 0.021906).abs() < 1e-5);
    }

    #[test]
    fn test_greeks_match_finite_differences() {
        let base = OptionContract::call(100.0, 100.0, 0.5, 0.05, 0.01, 0.3);
        let g = greeks(&base);
        let p = |c: &OptionContract| price(c).unwrap();

        let eps = 1e-4;

        // Delta: dV/dS
        let up = OptionContract { spot: base.spot + eps, ..base };
        let down = OptionContract { spot: base.spot - eps, ..base };
        let delta_fd = (p(&up) - p(&down)) / (2.0 * eps);
        assert!((g.delta - delta_fd).abs() < 1e-5);

        // Gamma: second difference in S
        let gamma_fd = (p(&up) - 2.0 * p(&base) + p(&down)) / (eps * eps);
        assert!((g.gamma - gamma_fd).abs() < 1e-4);

        // Theta: -dV/dT, scaled to per-day
        let later = OptionContract { time: base.time + eps, ..base };
        let earlier = OptionContract { time: base.time - eps, ..base };
        let theta_fd = -(p(&later) - p(&earlier)) / (2.0 * eps) / 365.0;
        assert!((g.theta - theta_fd).abs() < 1e-5);

        // Vega: dV/dσ, per 1%
        let vol_up = base.with_vol(base.vol + eps);
        let vol_down = base.with_vol(base.vol - eps);
        let vega_fd = (p(&vol_up) - p(&vol_down)) / (2.0 * eps) / 100.0;
        assert!((g.vega - vega_fd).abs() < 1e-5);

        // Rho: dV/dr, per 1%
        let rate_up = OptionContract { rate: base.rate + eps, ..base };
        let rate_down = OptionContract { rate: base.rate - eps, ..base };
        let rho_fd = (p(&rate_up) - p(&rate_down)) / (2.0 * eps) / 100.0;
        assert!((g.rho - rho_fd).abs() < 1e-5);
    }

    #[test]
    fn test_greeks_degenerate_at_expiry() {
        let itm = OptionContract::call(110.0, 100.0, 0.0, 0.05, 0.0, 0.25);
        let g = greeks(&itm);
        assert_eq!(g.delta, 1.0);
        assert_eq!(g.gamma, 0.0);
        assert_eq!(g.vega, 0.0);

        let otm_put = OptionContract::put(110.0, 100.0, 0.0, 0.05, 0.0, 0.25);
        assert_eq!(greeks(&otm_put).delta, 0.0);

        let itm_put = OptionContract::put(90.0, 100.0, 0.0, 0.05, 0.0, 0.25);
        assert_eq!(greeks(&itm_put).delta, -1.0);
    }
}
