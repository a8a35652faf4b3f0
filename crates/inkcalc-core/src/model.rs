use crate::consumption::production::ProductionRun;
use crate::mix::schema::MixDef;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One calculation request as supplied by a front end or a batch file.
///
/// Method and substrate are catalog keys or display names; they are
/// resolved against a [`Catalog`](crate::catalog::Catalog) by
/// [`calculate`](crate::calculate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub method: String,
    pub substrate: String,
    /// Replaces the substrate's catalog factor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substrate_factor: Option<Decimal>,
    pub area_m2: Decimal,
    pub coverage_pct: Decimal,
    /// Explicit laydown in g/m².
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production: Option<ProductionRun>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mix: Option<MixDef>,
    /// Target mix mass in grams. Defaults to the job's ink requirement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mix_mass_g: Option<Decimal>,
}

impl CalculationRequest {
    pub fn new(
        method: impl Into<String>,
        substrate: impl Into<String>,
        area_m2: Decimal,
        coverage_pct: Decimal,
    ) -> Self {
        Self {
            method: method.into(),
            substrate: substrate.into(),
            substrate_factor: None,
            area_m2,
            coverage_pct,
            density: None,
            variant: None,
            production: None,
            mix: None,
            mix_mass_g: None,
        }
    }
}
