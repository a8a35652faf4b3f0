use super::prices::PriceTable;
use super::schema::{MixComponent, MixDef};
use crate::config::normalize_key;
use crate::error::InkError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

const MIX_PRESETS_JSON: &str = include_str!("../../../../tables/mix-presets.json");

static PRESET_TABLE: LazyLock<PresetTable> = LazyLock::new(|| {
    serde_json::from_str(MIX_PRESETS_JSON).expect("embedded mix-presets.json is valid")
});

/// A starting formula expressed as parts by weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MixPreset {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Colorant name -> parts. Parts need not add up to 100.
    pub parts: BTreeMap<String, Decimal>,
}

impl MixPreset {
    /// Normalize the parts into proportions and price each colorant from `prices`.
    pub fn to_mix(&self, prices: &PriceTable) -> Result<MixDef, InkError> {
        let total: Decimal = self.parts.values().copied().sum();
        if total <= Decimal::ZERO {
            return Err(InkError::InvalidInput(format!(
                "preset '{}' has no positive parts",
                self.name
            )));
        }

        let mut components = Vec::with_capacity(self.parts.len());
        for (colorant, parts) in &self.parts {
            let unit_cost = prices
                .get(colorant)
                .ok_or_else(|| InkError::not_found("unit cost", colorant.as_str()))?;
            components.push(MixComponent::new(colorant.clone(), *parts / total, unit_cost));
        }

        Ok(MixDef {
            name: self.name.clone(),
            description: self.description.clone(),
            components,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PresetTable {
    pub version: String,
    pub description: String,
    pub presets: Vec<MixPreset>,
}

/// Get the built-in preset table.
pub fn preset_table() -> &'static PresetTable {
    &PRESET_TABLE
}

pub fn presets() -> &'static [MixPreset] {
    &PRESET_TABLE.presets
}

/// Look up a built-in preset by name ("185 C", "process black").
pub fn load_preset(name: &str) -> Result<&'static MixPreset, InkError> {
    let key = normalize_key(name);
    PRESET_TABLE
        .presets
        .iter()
        .find(|p| normalize_key(&p.name) == key)
        .ok_or_else(|| InkError::not_found("mix preset", name))
}
