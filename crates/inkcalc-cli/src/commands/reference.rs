use inkcalc_core::catalog::catalog;
use inkcalc_core::catalog::colorants::colorant_table;
use inkcalc_core::catalog::coverage::COVERAGE_GUIDELINES;
use inkcalc_core::error::InkError;

use crate::output::table::round;

pub fn methods() -> Result<(), InkError> {
    let methods = catalog().list_methods();
    let max_name = methods.iter().map(|m| m.name.len()).max().unwrap_or(20);

    println!("Printing methods (density in g/m²):\n");
    println!(
        "  {:<24}  {:<width$}  {:<10}  {:<8}  {}",
        "Key",
        "Name",
        "Density",
        "Default",
        "Typical",
        width = max_name
    );
    println!("  {}", "-".repeat(24 + max_name + 40));
    for m in methods {
        println!(
            "  {:<24}  {:<width$}  {:<10}  {:<8}  {}",
            m.key,
            m.name,
            m.density.to_string(),
            m.density.midpoint().to_string(),
            m.typical_density,
            width = max_name
        );
    }
    println!();
    println!("The default density is the midpoint of the range.");
    Ok(())
}

pub fn substrates() -> Result<(), InkError> {
    println!("Substrates (consumption factor relative to coated paper):\n");
    for s in catalog().list_substrates() {
        println!("  {:<16}  {:<16}  {}", s.key, s.name, s.factor);
    }
    println!();
    Ok(())
}

pub fn colorants() -> Result<(), InkError> {
    let table = colorant_table();
    println!("Base colorants (table v{})", table.version);
    println!("{}\n", table.description);
    println!(
        "  {:<8}  {:<4}  {:<8}  {:<12}  {:<10}  {:<10}  {}",
        "Name", "Code", "Density", "Price/kg", "Default/g", "Pigment", "Lightfastness"
    );
    println!("  {}", "-".repeat(84));
    for c in &table.colorants {
        println!(
            "  {:<8}  {:<4}  {:<8}  {:<12}  {:<10}  {:<10}  {}",
            c.name,
            c.code.as_deref().unwrap_or("-"),
            c.typical_density.to_string(),
            c.price_range_per_kg.to_string(),
            c.default_unit_cost_per_g().to_string(),
            c.pigment_content,
            c.lightfastness
        );
    }
    println!();
    Ok(())
}

pub fn coverage() -> Result<(), InkError> {
    println!("Typical coverage levels:\n");
    for g in COVERAGE_GUIDELINES {
        println!("  {:>4}%  {:<16}  {}", g.coverage_pct, g.level, g.typical_use);
    }
    println!();
    Ok(())
}

pub fn explain(name: &str) -> Result<(), InkError> {
    let m = catalog().lookup_method(name)?;

    println!("{} ({})\n", m.name, m.key);
    println!("{}\n", m.description);
    println!("  Category:        {}", m.category);
    println!("  Density:         {} g/m²", m.density);
    println!("  Default density: {} g/m² (midpoint)", round(m.density.midpoint()));
    println!("  Typical density: {} g/m²", m.typical_density);
    if let Some(v) = m.viscosity {
        println!("  Viscosity:       {} Pa·s", v);
    }
    if let Some(a) = m.anilox {
        println!("  Anilox volume:   {} cm³/m²", a);
    }

    if !m.variants.is_empty() {
        println!("\nPrint subjects (use with --variant):\n");
        let max_name = m.variants.iter().map(|v| v.name.len()).max().unwrap_or(16);
        for v in &m.variants {
            let anilox = v
                .anilox
                .map(|a| format!("  anilox {} cm³/m²", a))
                .unwrap_or_default();
            println!(
                "  {:<width$}  {} g/m² (default {}){}",
                v.name,
                v.density,
                round(v.density.midpoint()),
                anilox,
                width = max_name
            );
        }
    }
    println!();

    Ok(())
}
