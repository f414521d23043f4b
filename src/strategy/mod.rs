//! Strategy analytics
//!
//! Expiration payoff mathematics, preset templates, and the pre-expiration
//! P/L simulator.

pub mod payoff;
pub mod pl;
pub mod presets;

pub use payoff::{
    find_break_evens, max_profit_loss, net_premium, payoff_at, payoff_curve, CurvePoint,
    MaxProfitLoss, PriceRange,
};
pub use pl::{
    generate_pl_curve, risk_metrics, simulate_time_decay, strategy_pl, volatility_sensitivity,
    LegPL, RiskMetrics, StrategyPL, TimeDecayPoint, VolPoint, VolRange,
};
pub use presets::{preset, preset_ids, PresetFn, STRATEGY_PRESETS};
