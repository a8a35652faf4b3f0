pub mod production;

use crate::catalog::methods::{PrintMethod, PrintingMethod, ValueRange};
use crate::catalog::substrates::SubstrateType;
use crate::config::{CM2_TO_M2, PERCENT};
use crate::error::InkError;
use production::ProductionCost;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inputs for one consumption calculation.
#[derive(Debug, Clone)]
pub struct JobSpecification<'a> {
    /// Printed area in m².
    pub area_m2: Decimal,
    /// Ink coverage, 0-100 %.
    pub coverage_pct: Decimal,
    pub method: &'a PrintingMethod,
    pub substrate: &'a SubstrateType,
    /// Explicit laydown in g/m²; must lie within the method's density range.
    pub density_override: Option<Decimal>,
    /// Print subject within the method (e.g. "Solid Areas" for UV flexo).
    pub variant: Option<String>,
}

impl<'a> JobSpecification<'a> {
    pub fn new(
        area_m2: Decimal,
        coverage_pct: Decimal,
        method: &'a PrintingMethod,
        substrate: &'a SubstrateType,
    ) -> Self {
        Self {
            area_m2,
            coverage_pct,
            method,
            substrate,
            density_override: None,
            variant: None,
        }
    }

    pub fn with_density(mut self, density: Decimal) -> Self {
        self.density_override = Some(density);
        self
    }

    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }
}

/// Where the density used in a calculation came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "variant")]
pub enum DensitySource {
    /// Supplied by the caller.
    Override,
    /// Midpoint of the method's density range.
    MethodMidpoint,
    /// Midpoint of the named variant's density range.
    VariantMidpoint(String),
}

/// Result of [`compute_consumption`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionOutcome {
    pub method: PrintMethod,
    pub method_name: String,
    pub substrate: String,
    pub area_m2: Decimal,
    pub coverage_pct: Decimal,
    /// The method's full density range, so callers can offer a choice within it.
    pub density_range: ValueRange,
    pub density_used: Decimal,
    pub density_source: DensitySource,
    pub substrate_factor: Decimal,
    /// Ink mass for one impression, in grams.
    pub consumption_g: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production: Option<ProductionCost>,
}

/// Compute ink consumption for one job.
///
/// `consumption_g = area_m2 × coverage/100 × density × substrate_factor`
pub fn compute_consumption(job: &JobSpecification<'_>) -> Result<ConsumptionOutcome, InkError> {
    validate_job(job)?;

    let (density_used, density_source) = resolve_density(job)?;

    let consumption_g = job
        .area_m2
        .checked_mul(job.coverage_pct / PERCENT)
        .and_then(|v| v.checked_mul(density_used))
        .and_then(|v| v.checked_mul(job.substrate.factor))
        .ok_or_else(|| InkError::out_of_range("ink consumption"))?;

    if job.coverage_pct.is_zero() {
        tracing::warn!(method = job.method.key, "coverage is 0%, consumption is zero");
    }
    tracing::debug!(
        method = job.method.key,
        substrate = job.substrate.key,
        area_m2 = %job.area_m2,
        coverage_pct = %job.coverage_pct,
        density = %density_used,
        factor = %job.substrate.factor,
        consumption_g = %consumption_g,
        "computed consumption"
    );

    Ok(ConsumptionOutcome {
        method: job.method.method,
        method_name: job.method.name.to_string(),
        substrate: job.substrate.name.to_string(),
        area_m2: job.area_m2,
        coverage_pct: job.coverage_pct,
        density_range: job.method.density,
        density_used,
        density_source,
        substrate_factor: job.substrate.factor,
        consumption_g,
        production: None,
    })
}

fn validate_job(job: &JobSpecification<'_>) -> Result<(), InkError> {
    if job.area_m2 <= Decimal::ZERO {
        return Err(InkError::InvalidInput(format!(
            "area must be positive, got {} m²",
            job.area_m2
        )));
    }

    if job.coverage_pct < Decimal::ZERO || job.coverage_pct > PERCENT {
        return Err(InkError::InvalidInput(format!(
            "coverage must be between 0 and 100 %, got {}",
            job.coverage_pct
        )));
    }

    if let Some(density) = job.density_override {
        if !job.method.density.contains(density) {
            return Err(InkError::InvalidInput(format!(
                "density {} g/m² is outside the {} range {} g/m²",
                density, job.method.name, job.method.density
            )));
        }
    }

    if job.substrate.factor <= Decimal::ZERO {
        return Err(InkError::InvalidInput(format!(
            "substrate factor must be positive, got {}",
            job.substrate.factor
        )));
    }

    Ok(())
}

/// Pick the density: explicit override, else variant midpoint, else method midpoint.
fn resolve_density(job: &JobSpecification<'_>) -> Result<(Decimal, DensitySource), InkError> {
    // An unknown variant is an error even when an override makes it moot.
    let variant = match job.variant.as_deref() {
        Some(name) => Some(
            job.method
                .variant(name)
                .ok_or_else(|| InkError::not_found("method variant", name))?,
        ),
        None => None,
    };

    if let Some(density) = job.density_override {
        return Ok((density, DensitySource::Override));
    }

    match variant {
        Some(v) => Ok((
            v.density.midpoint(),
            DensitySource::VariantMidpoint(v.name.to_string()),
        )),
        None => Ok((job.method.density.midpoint(), DensitySource::MethodMidpoint)),
    }
}

/// Area in m² from an area in cm².
pub fn area_from_cm2(area_cm2: Decimal) -> Decimal {
    area_cm2 * CM2_TO_M2
}

/// Area in m² from width and height in cm.
pub fn area_from_dimensions_cm(
    width_cm: Decimal,
    height_cm: Decimal,
) -> Result<Decimal, InkError> {
    width_cm
        .checked_mul(height_cm)
        .map(area_from_cm2)
        .ok_or_else(|| InkError::out_of_range("printed area"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::methods::PrintMethod;
    use crate::catalog::substrates::Substrate;
    use crate::catalog::Catalog;
    use rust_decimal_macros::dec;

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    #[test]
    fn test_sheet_fed_on_coated_paper() {
        let cat = catalog();
        let job = JobSpecification::new(
            dec!(2.0),
            dec!(50),
            cat.lookup_method("Sheet-fed").unwrap(),
            cat.lookup_substrate("Coated Paper").unwrap(),
        );
        let out = compute_consumption(&job).unwrap();
        assert_eq!(out.density_used, dec!(1.1));
        assert_eq!(out.density_source, DensitySource::MethodMidpoint);
        assert_eq!(out.substrate_factor, dec!(1.0));
        assert_eq!(out.consumption_g, dec!(1.1));
    }

    #[test]
    fn test_formula_identity_across_catalog() {
        let cat = catalog();
        for method in cat.list_methods() {
            for substrate in cat.list_substrates() {
                let job = JobSpecification::new(dec!(0.37), dec!(63.5), method, substrate);
                let out = compute_consumption(&job).unwrap();
                let expected = dec!(0.37) * (dec!(63.5) / dec!(100))
                    * method.density.midpoint()
                    * substrate.factor;
                assert_eq!(out.consumption_g, expected, "{} on {}", method.name, substrate.name);
                assert!(out.consumption_g >= Decimal::ZERO);
            }
        }
    }

    #[test]
    fn test_zero_coverage_is_zero() {
        let cat = catalog();
        let job = JobSpecification::new(
            dec!(1000),
            Decimal::ZERO,
            cat.method(PrintMethod::Screen),
            cat.substrate(Substrate::Cardboard),
        );
        assert_eq!(compute_consumption(&job).unwrap().consumption_g, Decimal::ZERO);
    }

    #[test]
    fn test_full_coverage() {
        let cat = catalog();
        let method = cat.method(PrintMethod::Gravure);
        let substrate = cat.substrate(Substrate::UncoatedPaper);
        let job = JobSpecification::new(dec!(3), dec!(100), method, substrate);
        let out = compute_consumption(&job).unwrap();
        // 3 × 2.75 × 1.2
        assert_eq!(out.consumption_g, dec!(9.9));
    }

    #[test]
    fn test_non_positive_area_rejected() {
        let cat = catalog();
        let method = cat.method(PrintMethod::SheetFed);
        let substrate = cat.substrate(Substrate::CoatedPaper);
        for area in [Decimal::ZERO, dec!(-1)] {
            let job = JobSpecification::new(area, dec!(50), method, substrate);
            assert!(matches!(
                compute_consumption(&job),
                Err(InkError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_coverage_out_of_range_rejected() {
        let cat = catalog();
        let method = cat.method(PrintMethod::SheetFed);
        let substrate = cat.substrate(Substrate::CoatedPaper);
        for coverage in [dec!(-0.1), dec!(100.01)] {
            let job = JobSpecification::new(dec!(1), coverage, method, substrate);
            assert!(matches!(
                compute_consumption(&job),
                Err(InkError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_density_override_within_range() {
        let cat = catalog();
        let method = cat.method(PrintMethod::SheetFed);
        let substrate = cat.substrate(Substrate::CoatedPaper);

        let job = JobSpecification::new(dec!(1), dec!(100), method, substrate)
            .with_density(dec!(1.5));
        let out = compute_consumption(&job).unwrap();
        assert_eq!(out.density_used, dec!(1.5));
        assert_eq!(out.density_source, DensitySource::Override);

        let job = JobSpecification::new(dec!(1), dec!(100), method, substrate)
            .with_density(dec!(1.6));
        assert!(matches!(
            compute_consumption(&job),
            Err(InkError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_variant_midpoint() {
        let cat = catalog();
        let method = cat.method(PrintMethod::UvFlexo);
        let substrate = cat.substrate(Substrate::PlasticFilm);
        let job = JobSpecification::new(dec!(10), dec!(100), method, substrate)
            .with_variant("Solid Areas");
        let out = compute_consumption(&job).unwrap();
        assert_eq!(out.density_used, dec!(2.0));
        assert_eq!(
            out.density_source,
            DensitySource::VariantMidpoint("Solid Areas".into())
        );
        // 10 × 1 × 2.0 × 0.9
        assert_eq!(out.consumption_g, dec!(18));
    }

    #[test]
    fn test_unknown_variant_not_found() {
        let cat = catalog();
        let method = cat.method(PrintMethod::Gravure);
        let substrate = cat.substrate(Substrate::CoatedPaper);
        let job =
            JobSpecification::new(dec!(1), dec!(50), method, substrate).with_variant("Solid Areas");
        assert!(matches!(
            compute_consumption(&job),
            Err(InkError::NotFound { kind: "method variant", .. })
        ));
    }

    #[test]
    fn test_custom_substrate_factor() {
        let cat = catalog();
        let method = cat.method(PrintMethod::SheetFed);
        let custom = cat
            .substrate(Substrate::CoatedPaper)
            .with_factor(dec!(1.25))
            .unwrap();
        let job = JobSpecification::new(dec!(2), dec!(50), method, &custom);
        let out = compute_consumption(&job).unwrap();
        assert_eq!(out.consumption_g, dec!(1.375));
    }

    #[test]
    fn test_huge_area_is_out_of_range() {
        let cat = catalog();
        let job = JobSpecification::new(
            Decimal::from_scientific("1e28").unwrap(),
            dec!(100),
            cat.method(PrintMethod::Screen),
            cat.substrate(Substrate::Cardboard),
        );
        match compute_consumption(&job) {
            Err(InkError::InvalidInput(msg)) => assert!(msg.contains("out of range"), "{}", msg),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_area_helpers() {
        assert_eq!(area_from_cm2(dec!(623.7)), dec!(0.06237));
        // A4
        assert_eq!(
            area_from_dimensions_cm(dec!(21.0), dec!(29.7)).unwrap(),
            dec!(0.06237)
        );
        let wide = Decimal::from_scientific("1e20").unwrap();
        assert!(area_from_dimensions_cm(wide, wide).is_err());
    }
}
