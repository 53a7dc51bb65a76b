//! Correlogram analysis example.
//!
//! Run with: cargo run --example correlogram

use correlogram::prelude::*;

fn main() {
    println!("=== Correlogram Analysis Example ===\n");

    // 1. A year of daily sales: weekend peaks, month-start restock, slow growth
    let sales: Vec<f64> = (0..365)
        .map(|day| {
            let weekend = if day % 7 >= 5 { 35.0 } else { 0.0 };
            let restock = if day % 30 == 0 { 20.0 } else { 0.0 };
            let wiggle = 4.0 * (day as f64 * 0.7).sin();
            120.0 + weekend + restock + wiggle + day as f64 * 0.02
        })
        .collect();

    println!("{} daily observations", sales.len());

    // 2. Numeric analysis with the default lag range
    let result = match analyze(&sales, &CorrelogramConfig::default()) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("analysis failed: {}", e);
            return;
        }
    };

    println!("\n--- Confidence Bound ---");
    println!(
        "{:.0}% bound: ±{:.4} (max lag {})",
        (1.0 - result.alpha) * 100.0,
        result.bound,
        result.max_lag
    );

    for (name, significant) in [
        ("ACF", &result.significant_acf),
        ("PACF", &result.significant_pacf),
    ] {
        println!("\n--- Significant {} Lags: {} ---", name, significant.len());
        for s in significant.iter().take(10) {
            match s.cycle {
                Some(cycle) => println!("  lag {:>3}: {:>8.4}  ({})", s.lag, s.value, cycle),
                None => println!("  lag {:>3}: {:>8.4}", s.lag, s.value),
            }
        }
    }

    // 3. Lags of interest over a quarter-long horizon
    println!("\n--- Lags of Interest (quarter horizon) ---");
    let config = CorrelogramConfig::default().with_horizon(AnalysisHorizon::Quarter, sales.len());
    if let Ok(quarter) = analyze(&sales, &config) {
        for probe in quarter.probe_acf(&PROBE_LAGS) {
            let marker = if probe.significant {
                "significant"
            } else {
                "not significant"
            };
            println!("  lag {:>3}: {:>8.4} ({})", probe.lag, probe.value, marker);
        }
    }

    // 4. Horizons side by side
    println!("\n--- Horizons ---");
    println!("{:<12} {:>8} {:>12} {:>12}", "Horizon", "Lags", "Sig. ACF", "Sig. PACF");
    println!("{:-<47}", "");
    for horizon in AnalysisHorizon::ALL {
        let config = CorrelogramConfig::default()
            .with_horizon(horizon, sales.len())
            .with_pacf_method(PacfMethod::LevinsonDurbin);
        if let Ok(r) = analyze(&sales, &config) {
            println!(
                "{:<12} {:>8} {:>12} {:>12}",
                format!("{:?}", horizon),
                r.max_lag,
                r.significant_acf.len(),
                r.significant_pacf.len()
            );
        }
    }
}
