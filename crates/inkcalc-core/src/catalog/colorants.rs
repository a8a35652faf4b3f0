use super::methods::ValueRange;
use crate::config::{normalize_key, GRAMS_PER_KG};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

const COLORANTS_JSON: &str = include_str!("../../../../tables/colorants.json");

static COLORANT_TABLE: LazyLock<ColorantTable> = LazyLock::new(|| {
    serde_json::from_str(COLORANTS_JSON).expect("embedded colorants.json is valid")
});

/// A base colorant used in ink mixing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseColorant {
    pub name: String,
    /// Process color letter (C, M, Y, K) if any.
    #[serde(default)]
    pub code: Option<String>,
    /// Specific gravity of the ink (g/cm³).
    pub typical_density: Decimal,
    pub price_range_per_kg: ValueRange,
    pub pigment_content: String,
    pub lightfastness: String,
}

impl BaseColorant {
    /// Default unit cost per gram: midpoint of the per-kg price range.
    pub fn default_unit_cost_per_g(&self) -> Decimal {
        self.price_range_per_kg.midpoint() / GRAMS_PER_KG
    }

    fn matches(&self, key: &str) -> bool {
        normalize_key(&self.name) == key
            || self
                .code
                .as_deref()
                .is_some_and(|code| normalize_key(code) == key)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ColorantTable {
    pub version: String,
    pub description: String,
    pub colorants: Vec<BaseColorant>,
}

/// Get the base colorant table.
pub fn colorant_table() -> &'static ColorantTable {
    &COLORANT_TABLE
}

/// Look up a base colorant by name or process code ("Cyan" or "C").
pub fn find_colorant(name: &str) -> Option<&'static BaseColorant> {
    let key = normalize_key(name);
    COLORANT_TABLE.colorants.iter().find(|c| c.matches(&key))
}
