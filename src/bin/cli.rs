//! optlab CLI
//!
//! Walkthrough of the analytics core: pricing, Greeks, implied volatility,
//! and a preset strategy analyzed end to end.

use optlab::prelude::*;

fn main() {
    println!("optlab Options Analytics");
    println!("========================\n");

    // Example: Black-Scholes pricing
    let spot = 100.0;
    let strike = 105.0;
    let time = 30.0 / 365.0; // 30 days
    let rate = 0.05;
    let div = 0.0;
    let vol = 0.25;

    println!("Black-Scholes Pricing Example:");
    println!("  Spot: ${:.2}", spot);
    println!("  Strike: ${:.2}", strike);
    println!("  Time: {:.0} days", time * 365.0);
    println!("  Rate: {:.1}%", rate * 100.0);
    println!("  Vol: {:.1}%\n", vol * 100.0);

    let call = OptionContract::call(spot, strike, time, rate, div, vol);
    let put = OptionContract::put(spot, strike, time, rate, div, vol);

    let call_price = match price(&call) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("pricing failed: {e}");
            return;
        }
    };
    let put_price = price(&put).unwrap_or(0.0);

    println!("Option Prices:");
    println!("  Call: ${:.4}", call_price);
    println!("  Put: ${:.4}", put_price);

    let g = greeks(&call);
    println!("\nCall Greeks:");
    println!("  Delta: {:.4}", g.delta);
    println!("  Gamma: {:.6}", g.gamma);
    println!("  Theta: {:.4}/day", g.theta);
    println!("  Vega: {:.4}/1%", g.vega);
    println!("  Rho: {:.4}/1%", g.rho);

    println!("\nImplied Volatility Solver:");
    let recovered = implied_vol(call_price, spot, strike, rate, div, time, OptionType::Call);
    match recovered.implied_vol {
        Some(iv) => println!(
            "  Recovered IV: {:.2}% via {:?} in {} iterations (expected: {:.2}%)",
            iv * 100.0,
            recovered.method,
            recovered.iterations,
            vol * 100.0
        ),
        None => println!("  IV solve failed: {:?}", recovered.error),
    }

    // Analyze a preset strategy
    println!("\nAvailable presets: {}", preset_ids().join(", "));

    println!("\n--- Iron Condor @ ${spot:.0} ---\n");
    let condor = preset("iron-condor", spot).expect("registered preset");
    let range = PriceRange::around(spot, 0.3 * spot, 100);

    println!("Net premium: ${:.2}", net_premium(&condor.legs));

    let break_evens = find_break_evens(&condor.legs, &range);
    println!(
        "Break-evens: {}",
        break_evens
            .iter()
            .map(|b| format!("${b:.2}"))
            .collect::<Vec<_>>()
            .join(", ")
    );

    let shape = max_profit_loss(&condor.legs, &range);
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

    match strategy_pl(&condor.legs, spot, vol, rate, div) {
        Ok(pl) => {
            println!("\nMark-to-model:");
            println!("  Total P/L: ${:.2}", pl.total_pl);
            println!(
                "  Greeks: delta {:.3}, gamma {:.4}, theta {:.3}, vega {:.3}",
                pl.greeks.delta, pl.greeks.gamma, pl.greeks.theta, pl.greeks.vega
            );

            println!("\nStrategyPL as JSON:");
            match serde_json::to_string_pretty(&pl) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("serialization failed: {e}"),
            }
        }
        Err(e) => eprintln!("P/L evaluation failed: {e}"),
    }

    println!("\n--- Done ---");
}
