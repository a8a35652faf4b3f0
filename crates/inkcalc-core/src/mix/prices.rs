use crate::catalog::colorants::{colorant_table, find_colorant};
use crate::config::normalize_key;
use crate::error::InkError;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Unit cost per gram for each colorant, keyed by colorant name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceTable {
    prices: BTreeMap<String, Decimal>,
}

impl PriceTable {
    /// Midpoint list prices from the base colorant catalog, per gram.
    pub fn catalog_defaults() -> Self {
        let prices = colorant_table()
            .colorants
            .iter()
            .map(|c| (c.name.clone(), c.default_unit_cost_per_g()))
            .collect();
        Self { prices }
    }

    /// Set the unit cost for a colorant. Process codes ("C") resolve to the
    /// catalog name ("Cyan"); other names are kept as given.
    pub fn set(&mut self, colorant: &str, unit_cost: Decimal) -> Result<(), InkError> {
        if unit_cost < Decimal::ZERO {
            return Err(InkError::InvalidInput(format!(
                "unit cost of '{}' must not be negative, got {}",
                colorant, unit_cost
            )));
        }
        let name = self.canonical_name(colorant);
        self.prices.insert(name, unit_cost);
        Ok(())
    }

    pub fn get(&self, colorant: &str) -> Option<Decimal> {
        let name = self.canonical_name(colorant);
        self.prices.get(&name).copied()
    }

    /// Overlay entries from another table.
    pub fn merge(&mut self, other: &PriceTable) {
        for (name, cost) in &other.prices {
            self.prices.insert(name.clone(), *cost);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.prices.iter().map(|(k, v)| (k.as_str(), *v))
    }

    fn canonical_name(&self, colorant: &str) -> String {
        if let Some(c) = find_colorant(colorant) {
            return c.name.clone();
        }
        let key = normalize_key(colorant);
        self.prices
            .keys()
            .find(|k| normalize_key(k) == key)
            .cloned()
            .unwrap_or_else(|| colorant.trim().to_string())
    }
}

/// Load a unit-cost table (`{"Cyan": "0.12", ...}`, cost per gram) from a JSON file.
pub fn load_price_table(path: &Path) -> Result<PriceTable, InkError> {
    let content = std::fs::read_to_string(path).map_err(|e| InkError::PriceLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let raw: BTreeMap<String, Decimal> =
        serde_json::from_str(&content).map_err(|e| InkError::PriceLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    let mut table = PriceTable::default();
    for (colorant, cost) in raw {
        table.set(&colorant, cost)?;
    }
    Ok(table)
}
