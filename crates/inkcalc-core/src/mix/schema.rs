use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One colorant's share of a mix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixComponent {
    pub colorant: String,
    /// Fraction of the target mass, 0-1.
    pub proportion: Decimal,
    /// Cost per gram (or per whatever mass unit the target mass uses).
    pub unit_cost: Decimal,
}

impl MixComponent {
    pub fn new(colorant: impl Into<String>, proportion: Decimal, unit_cost: Decimal) -> Self {
        Self {
            colorant: colorant.into(),
            proportion,
            unit_cost,
        }
    }
}

/// A named ink mix formula, as stored in a mix definition file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub components: Vec<MixComponent>,
}

/// Computed mass and cost for one colorant of a mix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixLine {
    pub colorant: String,
    pub proportion: Decimal,
    pub mass_g: Decimal,
    pub unit_cost: Decimal,
    pub cost: Decimal,
}

/// Result of a mix cost calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixOutcome {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub total_mass_g: Decimal,
    /// Non-zero components, in input order.
    pub lines: Vec<MixLine>,
    pub total_cost: Decimal,
    /// Blended cost per gram.
    pub unit_cost: Decimal,
}

impl MixOutcome {
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
