use inkcalc_core::catalog::colorants::find_colorant;
use inkcalc_core::config::MIX_TOLERANCE;
use inkcalc_core::error::InkError;
use inkcalc_core::mix::presets::{self, load_preset};
use inkcalc_core::mix::prices::{load_price_table, PriceTable};
use inkcalc_core::mix::schema::MixDef;
use inkcalc_core::mix::{compute_mix_cost, load_mix};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};

use crate::output;

/// Build the mix named on the command line, if any.
///
/// Presets are priced from the catalog defaults overlaid with `costs`. For a
/// mix file, `costs` replaces the unit cost of each colorant it lists.
pub(crate) fn resolve_mix(
    preset: Option<&str>,
    file: Option<&Path>,
    costs: Option<&Path>,
) -> Result<Option<MixDef>, InkError> {
    let overrides = costs.map(load_price_table).transpose()?;

    match (preset, file) {
        (Some(name), _) => {
            let mut prices = PriceTable::catalog_defaults();
            if let Some(ref table) = overrides {
                prices.merge(table);
            }
            Ok(Some(load_preset(name)?.to_mix(&prices)?))
        }
        (None, Some(path)) => {
            let mut mix = load_mix(path)?;
            if let Some(ref table) = overrides {
                for component in &mut mix.components {
                    if let Some(cost) = table.get(&component.colorant) {
                        component.unit_cost = cost;
                    }
                }
            }
            Ok(Some(mix))
        }
        (None, None) => {
            if costs.is_some() {
                tracing::warn!("--costs has no effect without a mix");
            }
            Ok(None)
        }
    }
}

pub fn cost(
    preset: Option<String>,
    file: Option<PathBuf>,
    mass: Decimal,
    costs: Option<PathBuf>,
    output_format: &str,
) -> Result<(), InkError> {
    let mix = resolve_mix(preset.as_deref(), file.as_deref(), costs.as_deref())?
        .ok_or_else(|| InkError::InvalidInput("give either --preset or --file".into()))?;

    let outcome = compute_mix_cost(&mix.components, mass)?.named(mix.name.clone());

    match output_format {
        "json" => output::json::print(&outcome)?,
        _ => output::table::print_mix(&outcome),
    }

    Ok(())
}

pub fn presets() -> Result<(), InkError> {
    let table = presets::preset_table();
    println!("Built-in mix presets, parts by weight (table v{})", table.version);
    println!("{}\n", table.description);
    for preset in &table.presets {
        let parts: Vec<String> = preset
            .parts
            .iter()
            .map(|(colorant, parts)| format!("{} {}", colorant, parts))
            .collect();
        println!("  {:<18} {}", preset.name, parts.join(", "));
        if let Some(ref desc) = preset.description {
            println!("  {:<18} {}", "", desc);
        }
        println!();
    }
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), InkError> {
    let mix = load_mix(file)?;

    let sum: Decimal = mix.components.iter().map(|c| c.proportion).sum();
    println!("Mix '{}' is valid.", mix.name);
    println!("  Components: {}", mix.components.len());
    println!("  Proportion sum: {} (tolerance {})", sum, MIX_TOLERANCE);

    let mut warnings = Vec::new();
    for c in &mix.components {
        if find_colorant(&c.colorant).is_none() {
            warnings.push(format!(
                "colorant '{}' is not one of the base colorants",
                c.colorant
            ));
        }
        if c.proportion.is_zero() {
            warnings.push(format!(
                "colorant '{}' has proportion 0 and will not appear in the breakdown",
                c.colorant
            ));
        }
        if c.unit_cost.is_zero() {
            warnings.push(format!("colorant '{}' has no unit cost", c.colorant));
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}

pub fn schema() -> Result<(), InkError> {
    print!(
        r#"Mix Definition Schema
=====================

A mix file describes one ink formula: which base colorants go into it
and in what share. `inkcalc mix cost --file` splits a target mass over
the components and prices each one.

Top-level fields:
  name          (string, required)  Name of the mix, e.g. "House Green"
  description   (string, optional)  Free text
  components    (array, required)   At least one component (see below)

Each component:
  colorant      (string, required)  Colorant name. Base colorants are
                                    Cyan, Magenta, Yellow, Black, Orange,
                                    Green, Violet and Special; any other
                                    name (a spot color) is accepted too.
  proportion    (string, required)  Share of the total mass, 0 to 1.
                                    All proportions must add up to 1
                                    (within 0.000001).
  unit_cost     (string, required)  Cost per gram, >= 0.

Example:
{{
  "name": "House Green",
  "description": "Corporate green for carton work",
  "components": [
    {{ "colorant": "Cyan",   "proportion": "0.375", "unit_cost": "0.115" }},
    {{ "colorant": "Yellow", "proportion": "0.625", "unit_cost": "0.1" }}
  ]
}}

Note: numbers must be quoted strings, not bare numbers, to keep exact
decimal precision (e.g., "0.375" not 0.375).

A unit-cost table (`--costs FILE`) is a flat JSON object of colorant name
to cost per gram, e.g. {{ "Cyan": "0.02", "Magenta": "0.03" }}.
"#
    );
    Ok(())
}
