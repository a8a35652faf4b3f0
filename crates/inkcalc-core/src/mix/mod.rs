pub mod presets;
pub mod prices;
pub mod schema;

use crate::config::{normalize_key, MIX_TOLERANCE};
use crate::error::InkError;
use rust_decimal::Decimal;
use schema::{MixComponent, MixDef, MixLine, MixOutcome};
use std::collections::HashSet;
use std::path::Path;

/// Split a target mass into its colorants and price each one.
///
/// `mass = total_mass_g × proportion`, `cost = mass × unit_cost`. No unit
/// conversion is done: unit costs must be per the same mass unit as
/// `total_mass_g`. Components with a zero proportion are left out of the
/// breakdown.
pub fn compute_mix_cost(
    components: &[MixComponent],
    total_mass_g: Decimal,
) -> Result<MixOutcome, InkError> {
    if total_mass_g <= Decimal::ZERO {
        return Err(InkError::InvalidInput(format!(
            "target mix mass must be positive, got {} g",
            total_mass_g
        )));
    }
    validate_components(components)?;

    let out_of_range = || InkError::out_of_range("mix cost");
    let lines = components
        .iter()
        .filter(|c| !c.proportion.is_zero())
        .map(|c| {
            let mass_g = total_mass_g * c.proportion;
            let cost = mass_g.checked_mul(c.unit_cost).ok_or_else(out_of_range)?;
            Ok(MixLine {
                colorant: c.colorant.clone(),
                proportion: c.proportion,
                mass_g,
                unit_cost: c.unit_cost,
                cost,
            })
        })
        .collect::<Result<Vec<MixLine>, InkError>>()?;

    let total_cost = lines
        .iter()
        .try_fold(Decimal::ZERO, |acc, l| acc.checked_add(l.cost))
        .ok_or_else(out_of_range)?;
    let unit_cost = total_cost
        .checked_div(total_mass_g)
        .ok_or_else(out_of_range)?;

    tracing::debug!(
        components = lines.len(),
        total_mass_g = %total_mass_g,
        total_cost = %total_cost,
        "computed mix cost"
    );

    Ok(MixOutcome {
        name: None,
        total_mass_g,
        lines,
        total_cost,
        unit_cost,
    })
}

/// Check per-component bounds, duplicate colorants and the proportion sum.
pub fn validate_components(components: &[MixComponent]) -> Result<(), InkError> {
    let mut seen = HashSet::new();
    for c in components {
        if c.colorant.trim().is_empty() {
            return Err(InkError::InvalidInput(
                "colorant name must not be empty".into(),
            ));
        }
        if !seen.insert(normalize_key(&c.colorant)) {
            return Err(InkError::InvalidInput(format!(
                "colorant '{}' is listed more than once",
                c.colorant
            )));
        }
        if c.proportion < Decimal::ZERO || c.proportion > Decimal::ONE {
            return Err(InkError::InvalidInput(format!(
                "proportion of '{}' must be between 0 and 1, got {}",
                c.colorant, c.proportion
            )));
        }
        if c.unit_cost < Decimal::ZERO {
            return Err(InkError::InvalidInput(format!(
                "unit cost of '{}' must not be negative, got {}",
                c.colorant, c.unit_cost
            )));
        }
    }

    let sum: Decimal = components.iter().map(|c| c.proportion).sum();
    if (sum - Decimal::ONE).abs() > MIX_TOLERANCE {
        return Err(InkError::InvalidMix {
            sum,
            tolerance: MIX_TOLERANCE,
        });
    }

    Ok(())
}

/// Load a mix definition from a JSON file.
pub fn load_mix(path: &Path) -> Result<MixDef, InkError> {
    let content = std::fs::read_to_string(path).map_err(|e| InkError::MixLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_mix(&content, path)
}

/// Parse a mix definition from a JSON string.
pub fn parse_mix(json: &str, source: &Path) -> Result<MixDef, InkError> {
    let mix: MixDef = serde_json::from_str(json).map_err(|e| InkError::MixLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_mix(&mix)?;
    Ok(mix)
}

/// Parse a mix definition from a JSON string (no file path context).
pub fn parse_mix_str(json: &str) -> Result<MixDef, InkError> {
    let mix: MixDef = serde_json::from_str(json).map_err(InkError::Json)?;
    validate_mix(&mix)?;
    Ok(mix)
}

/// Validate that a mix definition is well-formed.
pub fn validate_mix(mix: &MixDef) -> Result<(), InkError> {
    if mix.name.trim().is_empty() {
        return Err(InkError::InvalidInput("mix name must not be empty".into()));
    }
    if mix.components.is_empty() {
        return Err(InkError::InvalidInput(format!(
            "mix '{}' has no components",
            mix.name
        )));
    }
    validate_components(&mix.components)
}
