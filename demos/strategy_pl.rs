//! Example: Multi-leg strategy P/L analysis
//!
//! Run with: cargo run --example strategy_pl

use optlab::prelude::*;

fn main() {
    let spot = 100.0;
    let vol = 0.25;
    let rate = 0.05;
    let div = 0.0;

    println!("=== Strategy Analysis: Long Straddle @ ${spot:.0} ===\n");

    let straddle = preset("long-straddle", spot).expect("registered preset");
    for issue in straddle.validate() {
        println!("validation: {} {}: {}", issue.leg_id.as_deref().unwrap_or("-"), issue.field, issue.message);
    }

    // Expiration view
    let range = PriceRange::around(spot, 0.25 * spot, 100);
    println!("Net premium: ${:.2} (debit)", net_premium(&straddle.legs));

    let break_evens = find_break_evens(&straddle.legs, &range);
    println!("Break-evens at expiration:");
    for be in &break_evens {
        println!("  ${be:.2}");
    }

    let shape = max_profit_loss(&straddle.legs, &range);
    println!(
        "Max profit: ${:.2}{}",
        shape.max_profit,
        if shape.profit_unlimited { " (unlimited)" } else { "" }
    );
    println!(
        "Max loss: ${:.2}{}",
        shape.max_loss,
        if shape.loss_unlimited { " (unlimited)" } else { "" }
    );

    // Mark-to-model today
    let pl = strategy_pl(&straddle.legs, spot, vol, rate, div).expect("valid legs");
    println!("\nMark-to-model P/L: ${:.2}", pl.total_pl);
    for leg in &pl.legs {
        println!(
            "  {}: value ${:.2}, P/L ${:.2} ({:.1}%)",
            leg.id, leg.current_value, leg.pl, leg.pl_percent
        );
    }
    println!(
        "Position Greeks: delta {:.3}, gamma {:.4}, theta {:.3}/day, vega {:.3}/1%",
        pl.greeks.delta, pl.greeks.gamma, pl.greeks.theta, pl.greeks.vega
    );

    // How the position bleeds as expiry approaches
    let decay = simulate_time_decay(&straddle.legs, spot, vol, rate, div).expect("valid legs");
    println!("\nTime decay at pinned spot:");
    for point in decay.iter().step_by(10) {
        println!("  {:>3.0} days out: ${:.2}", point.days_remaining, point.pl);
    }

    // Sensitivity to an IV crush
    let sweep = volatility_sensitivity(
        &straddle.legs,
        spot,
        rate,
        div,
        &VolRange::new(0.10, 0.40, 7),
    )
    .expect("valid legs");
    println!("\nVolatility sensitivity:");
    for point in &sweep {
        println!("  vol {:>5.1}%: ${:.2}", point.vol * 100.0, point.pl);
    }

    // Risk summary
    let metrics = risk_metrics(&straddle.legs, &range, vol, rate, div).expect("valid legs");
    println!(
        "\nRisk over [{:.0}, {:.0}]: worst ${:.2}, best ${:.2}",
        range.min, range.max, metrics.max_loss, metrics.max_gain
    );
}
