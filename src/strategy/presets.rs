//! Preset strategy templates
//!
//! A static registry of named builders. Every lookup constructs a fresh
//! `Strategy` centered on the supplied underlying price, so callers can
//! never mutate a shared template.
//!
//! Strikes are placed at round percentage offsets from the underlying and
//! premiums at rough rule-of-thumb fractions of it; both are starting points
//! the caller is expected to edit leg by leg.

use crate::core::{OptionLeg, OptionType, Position, Strategy};

/// Builder signature: underlying price in, fresh strategy out
pub type PresetFn = fn(f64) -> Strategy;

/// Registry of preset identifiers and their builders
pub const STRATEGY_PRESETS: &[(&str, PresetFn)] = &[
    ("long-call", long_call),
    ("long-put", long_put),
    ("bull-call-spread", bull_call_spread),
    ("bear-put-spread", bear_put_spread),
    ("long-straddle", long_straddle),
    ("long-strangle", long_strangle),
    ("iron-condor", iron_condor),
    ("iron-butterfly", iron_butterfly),
];

/// Default days to expiry for preset legs
const PRESET_DTE: f64 = 30.0;

/// Instantiate a preset by identifier
pub fn preset(id: &str, underlying_price: f64) -> Option<Strategy> {
    STRATEGY_PRESETS
        .iter()
        .find(|(name, _)| *name == id)
        .map(|(_, build)| build(underlying_price))
}

/// All registered preset identifiers
pub fn preset_ids() -> Vec<&'static str> {
    STRATEGY_PRESETS.iter().map(|(name, _)| *name).collect()
}

fn leg(
    id: &str,
    option_type: OptionType,
    position: Position,
    strike: f64,
    premium: f64,
) -> OptionLeg {
    OptionLeg::new(id, option_type, position, 1.0, strike, premium, PRESET_DTE)
}

fn long_call(spot: f64) -> Strategy {
    Strategy::with_legs(
        spot,
        vec![leg(
            "long-call",
            OptionType::Call,
            Position::Long,
            spot * 1.05,
            spot * 0.018,
        )],
    )
}

fn long_put(spot: f64) -> Strategy {
    Strategy::with_legs(
        spot,
        vec![leg(
            "long-put",
            OptionType::Put,
            Position::Long,
            spot * 0.95,
            spot * 0.015,
        )],
    )
}

fn bull_call_spread(spot: f64) -> Strategy {
    Strategy::with_legs(
        spot,
        vec![
            leg("long-call", OptionType::Call, Position::Long, spot, spot * 0.030),
            leg(
                "short-call",
                OptionType::Call,
                Position::Short,
                spot * 1.05,
                spot * 0.012,
            ),
        ],
    )
}

fn bear_put_spread(spot: f64) -> Strategy {
    Strategy::with_legs(
        spot,
        vec![
            leg("long-put", OptionType::Put, Position::Long, spot, spot * 0.028),
            leg(
                "short-put",
                OptionType::Put,
                Position::Short,
                spot * 0.95,
                spot * 0.011,
            ),
        ],
    )
}

fn long_straddle(spot: f64) -> Strategy {
    Strategy::with_legs(
        spot,
        vec![
            leg("long-call", OptionType::Call, Position::Long, spot, spot * 0.030),
            leg("long-put", OptionType::Put, Position::Long, spot, spot * 0.027),
        ],
    )
}

fn long_strangle(spot: f64) -> Strategy {
    Strategy::with_legs(
        spot,
        vec![
            leg(
                "long-call",
                OptionType::Call,
                Position::Long,
                spot * 1.05,
                spot * 0.014,
            ),
            leg(
                "long-put",
                OptionType::Put,
                Position::Long,
                spot * 0.95,
                spot * 0.012,
            ),
        ],
    )
}

fn iron_condor(spot: f64) -> Strategy {
    Strategy::with_legs(
        spot,
        vec![
            leg(
                "long-put",
                OptionType::Put,
                Position::Long,
                spot * 0.90,
                spot * 0.006,
            ),
            leg(
                "short-put",
                OptionType::Put,
                Position::Short,
                spot * 0.95,
                spot * 0.013,
            ),
            leg(
                "short-call",
                OptionType::Call,
                Position::Short,
                spot * 1.05,
                spot * 0.014,
            ),
            leg(
                "long-call",
                OptionType::Call,
                Position::Long,
                spot * 1.10,
                spot * 0.006,
            ),
        ],
    )
}

fn iron_butterfly(spot: f64) -> Strategy {
    Strategy::with_legs(
        spot,
        vec![
            leg(
                "long-put",
                OptionType::Put,
                Position::Long,
                spot * 0.95,
                spot * 0.012,
            ),
            leg("short-put", OptionType::Put, Position::Short, spot, spot * 0.027),
            leg("short-call", OptionType::Call, Position::Short, spot, spot * 0.030),
            leg(
                "long-call",
                OptionType::Call,
                Position::Long,
                spot * 1.05,
                spot * 0.014,
            ),
        ],
    )
}
