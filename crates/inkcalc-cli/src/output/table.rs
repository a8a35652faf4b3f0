use inkcalc_core::config::DISPLAY_DP;
use inkcalc_core::consumption::DensitySource;
use inkcalc_core::mix::schema::{MixLine, MixOutcome};
use inkcalc_core::report::CalculationResult;
use rust_decimal::{Decimal, RoundingStrategy};

/// Round for display, halves away from zero.
pub fn round(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DISPLAY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Print a result that has already been rounded for display.
pub fn print_result(result: &CalculationResult) {
    println!("=== {} on {} ===\n", result.method_name, result.substrate);

    let source = match &result.density_source {
        DensitySource::Override => "given".to_string(),
        DensitySource::MethodMidpoint => format!("midpoint of {}", result.density_range),
        DensitySource::VariantMidpoint(name) => format!("midpoint of {}", name),
    };

    println!("  Area:             {} m²", result.area_m2);
    println!("  Coverage:         {} %", result.coverage_pct);
    println!("  Density:          {} g/m² ({})", result.density_used, source);
    println!("  Substrate factor: {}", result.substrate_factor);
    println!("  Consumption:      {} g per impression", result.consumption_g);

    if let Some(ref p) = result.production {
        println!();
        println!("  Production run:");
        println!("    Quantity:         {}", p.quantity);
        println!("    Waste:            {} %", p.waste_rate_pct);
        println!("    With waste:       {} g per impression", p.consumption_with_waste_g);
        println!("    Total ink:        {} kg", p.total_consumption_kg);
        println!(
            "    Total cost:       {} (at {} per kg)",
            p.total_cost, p.ink_price_per_kg
        );
        println!("    Cost per copy:    {}", p.unit_cost);
    }

    if let Some(ref lines) = result.mix_breakdown {
        println!();
        match result.mix_name {
            Some(ref name) => println!("  Mix: {}", name),
            None => println!("  Mix:"),
        }
        print_lines(lines);
        if let (Some(mass), Some(cost)) = (result.mix_total_mass_g, result.total_cost) {
            println!(
                "    {:<12}  {:>10}  {:>12}  {:>10}",
                "Total",
                "",
                mass.to_string(),
                cost.to_string()
            );
        }
        if let Some(unit) = result.mix_unit_cost {
            println!("\n    Blended cost per gram: {}", unit);
        }
    }
    println!();
}

/// Print a standalone mix cost outcome at display precision.
pub fn print_mix(outcome: &MixOutcome) {
    match outcome.name {
        Some(ref name) => println!("=== {} ===\n", name),
        None => println!("=== Mix ===\n"),
    }

    let lines: Vec<MixLine> = outcome
        .lines
        .iter()
        .map(|l| MixLine {
            mass_g: round(l.mass_g),
            cost: round(l.cost),
            ..l.clone()
        })
        .collect();
    print_lines(&lines);
    println!(
        "    {:<12}  {:>10}  {:>12}  {:>10}",
        "Total",
        "",
        round(outcome.total_mass_g).to_string(),
        round(outcome.total_cost).to_string()
    );
    println!("\n    Blended cost per gram: {}", round(outcome.unit_cost));
    println!();
}

fn print_lines(lines: &[MixLine]) {
    println!(
        "    {:<12}  {:>10}  {:>12}  {:>10}",
        "Colorant", "Share", "Mass (g)", "Cost"
    );
    println!("    {}", "-".repeat(50));
    for line in lines {
        let share = round(line.proportion * Decimal::ONE_HUNDRED);
        println!(
            "    {:<12}  {:>10}  {:>12}  {:>10}",
            line.colorant,
            format!("{} %", share),
            line.mass_g.to_string(),
            line.cost.to_string()
        );
    }
}
