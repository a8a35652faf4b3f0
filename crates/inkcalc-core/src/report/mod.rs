pub mod export;

use crate::catalog::methods::{PrintMethod, ValueRange};
use crate::config::MIX_TOLERANCE;
use crate::consumption::production::ProductionCost;
use crate::consumption::{ConsumptionOutcome, DensitySource};
use crate::error::InkError;
use crate::mix::schema::{MixLine, MixOutcome};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// The reporting record for one calculation: consumption plus optional mix cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub method: PrintMethod,
    pub method_name: String,
    pub substrate: String,
    pub area_m2: Decimal,
    pub coverage_pct: Decimal,
    pub density_range: ValueRange,
    pub density_used: Decimal,
    pub density_source: DensitySource,
    pub substrate_factor: Decimal,
    pub consumption_g: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production: Option<ProductionCost>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mix_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mix_total_mass_g: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mix_breakdown: Option<Vec<MixLine>>,
    /// Total cost of the mix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<Decimal>,
    /// Blended mix cost per gram.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mix_unit_cost: Option<Decimal>,
}

impl CalculationResult {
    /// Copy with every mass and cost rounded to `dp` decimal places, for display.
    ///
    /// Halves round away from zero. Proportions, densities and factors are
    /// left as they are.
    pub fn rounded(&self, dp: u32) -> CalculationResult {
        let round =
            |v: Decimal| v.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
        let mut out = self.clone();
        out.consumption_g = round(out.consumption_g);
        if let Some(p) = out.production.as_mut() {
            p.consumption_with_waste_g = round(p.consumption_with_waste_g);
            p.total_consumption_kg = round(p.total_consumption_kg);
            p.total_cost = round(p.total_cost);
            p.unit_cost = round(p.unit_cost);
        }
        out.mix_total_mass_g = out.mix_total_mass_g.map(round);
        out.total_cost = out.total_cost.map(round);
        out.mix_unit_cost = out.mix_unit_cost.map(round);
        if let Some(lines) = out.mix_breakdown.as_mut() {
            for line in lines {
                line.mass_g = round(line.mass_g);
                line.cost = round(line.cost);
            }
        }
        out
    }

    pub fn has_mix(&self) -> bool {
        self.mix_breakdown.is_some()
    }
}

/// Merge a consumption outcome and an optional mix outcome into one record.
///
/// Both inputs are re-checked against the guarantees of the calculators
/// that produced them; a failure here means an upstream bug, not bad
/// user input.
pub fn assemble(
    consumption: ConsumptionOutcome,
    mix: Option<MixOutcome>,
) -> Result<CalculationResult, InkError> {
    check_consumption(&consumption)?;
    if let Some(ref m) = mix {
        check_mix(m)?;
    }

    let (mix_name, mix_total_mass_g, mix_breakdown, total_cost, mix_unit_cost) = match mix {
        Some(m) => (
            m.name,
            Some(m.total_mass_g),
            Some(m.lines),
            Some(m.total_cost),
            Some(m.unit_cost),
        ),
        None => (None, None, None, None, None),
    };

    Ok(CalculationResult {
        method: consumption.method,
        method_name: consumption.method_name,
        substrate: consumption.substrate,
        area_m2: consumption.area_m2,
        coverage_pct: consumption.coverage_pct,
        density_range: consumption.density_range,
        density_used: consumption.density_used,
        density_source: consumption.density_source,
        substrate_factor: consumption.substrate_factor,
        consumption_g: consumption.consumption_g,
        production: consumption.production,
        mix_name,
        mix_total_mass_g,
        mix_breakdown,
        total_cost,
        mix_unit_cost,
    })
}

fn check_consumption(c: &ConsumptionOutcome) -> Result<(), InkError> {
    if c.consumption_g < Decimal::ZERO {
        return Err(InkError::InternalConsistency(format!(
            "negative consumption {} g",
            c.consumption_g
        )));
    }
    if !c.density_range.contains(c.density_used) {
        return Err(InkError::InternalConsistency(format!(
            "density {} outside method range {}",
            c.density_used, c.density_range
        )));
    }
    if c.substrate_factor <= Decimal::ZERO {
        return Err(InkError::InternalConsistency(format!(
            "non-positive substrate factor {}",
            c.substrate_factor
        )));
    }
    Ok(())
}

fn check_mix(m: &MixOutcome) -> Result<(), InkError> {
    if m.total_mass_g <= Decimal::ZERO {
        return Err(InkError::InternalConsistency(format!(
            "non-positive mix mass {} g",
            m.total_mass_g
        )));
    }

    let mass: Decimal = m.lines.iter().map(|l| l.mass_g).sum();
    if (mass - m.total_mass_g).abs() > m.total_mass_g * MIX_TOLERANCE {
        return Err(InkError::InternalConsistency(format!(
            "mix line masses sum to {} g, expected {} g",
            mass, m.total_mass_g
        )));
    }

    let cost: Decimal = m.lines.iter().map(|l| l.cost).sum();
    if cost != m.total_cost {
        return Err(InkError::InternalConsistency(format!(
            "mix line costs sum to {}, total says {}",
            cost, m.total_cost
        )));
    }

    if m.lines.iter().any(|l| l.mass_g < Decimal::ZERO || l.cost < Decimal::ZERO) {
        return Err(InkError::InternalConsistency(
            "negative mass or cost in mix breakdown".into(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::consumption::{compute_consumption, JobSpecification};
    use crate::mix::compute_mix_cost;
    use crate::mix::schema::MixComponent;
    use rust_decimal_macros::dec;

    fn consumption() -> ConsumptionOutcome {
        let cat = Catalog::builtin();
        let job = JobSpecification::new(
            dec!(2.0),
            dec!(50),
            cat.lookup_method("sheet-fed").unwrap(),
            cat.lookup_substrate("coated-paper").unwrap(),
        );
        compute_consumption(&job).unwrap()
    }

    fn mix() -> MixOutcome {
        let components = vec![
            MixComponent::new("Cyan", dec!(0.25), dec!(0.02)),
            MixComponent::new("Magenta", dec!(0.25), dec!(0.03)),
            MixComponent::new("Yellow", dec!(0.25), dec!(0.025)),
            MixComponent::new("Black", dec!(0.25), dec!(0.015)),
        ];
        compute_mix_cost(&components, dec!(100)).unwrap()
    }

    #[test]
    fn test_assemble_consumption_only() {
        let result = assemble(consumption(), None).unwrap();
        assert_eq!(result.consumption_g, dec!(1.1));
        assert_eq!(result.density_used, dec!(1.1));
        assert_eq!(result.substrate_factor, dec!(1.0));
        assert!(!result.has_mix());
        assert!(result.total_cost.is_none());
    }

    #[test]
    fn test_assemble_with_mix() {
        let result = assemble(consumption(), Some(mix().named("Even CMYK"))).unwrap();
        assert_eq!(result.mix_name.as_deref(), Some("Even CMYK"));
        assert_eq!(result.mix_breakdown.as_ref().unwrap().len(), 4);
        assert_eq!(result.total_cost, Some(dec!(2.25)));
        assert_eq!(result.mix_total_mass_g, Some(dec!(100)));
    }

    #[test]
    fn test_tampered_mix_total_detected() {
        let mut m = mix();
        m.total_cost = dec!(9.99);
        assert!(matches!(
            assemble(consumption(), Some(m)),
            Err(InkError::InternalConsistency(_))
        ));
    }

    #[test]
    fn test_tampered_mix_mass_detected() {
        let mut m = mix();
        m.lines.pop();
        m.total_cost = m.lines.iter().map(|l| l.cost).sum();
        assert!(matches!(
            assemble(consumption(), Some(m)),
            Err(InkError::InternalConsistency(_))
        ));
    }

    #[test]
    fn test_tampered_density_detected() {
        let mut c = consumption();
        c.density_used = dec!(9);
        assert!(matches!(
            assemble(c, None),
            Err(InkError::InternalConsistency(_))
        ));
    }

    #[test]
    fn test_rounded_for_display() {
        let components = vec![
            MixComponent::new("Cyan", dec!(0.3333335), dec!(0.115)),
            MixComponent::new("Magenta", dec!(0.6666665), dec!(0.125)),
        ];
        let m = compute_mix_cost(&components, dec!(10)).unwrap();
        let result = assemble(consumption(), Some(m)).unwrap();
        let shown = result.rounded(2);
        let lines = shown.mix_breakdown.unwrap();
        assert_eq!(lines[0].mass_g, dec!(3.33));
        assert_eq!(lines[1].mass_g, dec!(6.67));
        // exact record untouched
        assert_eq!(
            result.mix_breakdown.unwrap()[0].mass_g,
            dec!(3.333335)
        );
    }
}
