use crate::config::{GRAMS_PER_KG, PERCENT};
use crate::error::InkError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Run-length parameters for costing a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionRun {
    /// Number of impressions.
    pub quantity: u64,
    /// Make-ready and press waste, 0-100 %.
    #[serde(default)]
    pub waste_rate_pct: Decimal,
    pub ink_price_per_kg: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionCost {
    pub quantity: u64,
    pub waste_rate_pct: Decimal,
    pub ink_price_per_kg: Decimal,
    /// Per-impression consumption including waste.
    pub consumption_with_waste_g: Decimal,
    pub total_consumption_kg: Decimal,
    pub total_cost: Decimal,
    /// Cost per impression.
    pub unit_cost: Decimal,
}

impl ProductionCost {
    /// Total ink requirement for the run, in grams.
    pub fn total_consumption_g(&self) -> Decimal {
        self.total_consumption_kg * GRAMS_PER_KG
    }
}

/// Scale a per-impression consumption to a full run, with waste and ink price.
pub fn compute_production(
    consumption_g: Decimal,
    run: &ProductionRun,
) -> Result<ProductionCost, InkError> {
    if run.quantity == 0 {
        return Err(InkError::InvalidInput("quantity must be at least 1".into()));
    }
    if run.waste_rate_pct < Decimal::ZERO || run.waste_rate_pct > PERCENT {
        return Err(InkError::InvalidInput(format!(
            "waste rate must be between 0 and 100 %, got {}",
            run.waste_rate_pct
        )));
    }
    if run.ink_price_per_kg < Decimal::ZERO {
        return Err(InkError::InvalidInput(format!(
            "ink price must not be negative, got {}",
            run.ink_price_per_kg
        )));
    }
    if consumption_g < Decimal::ZERO {
        return Err(InkError::InvalidInput(format!(
            "consumption must not be negative, got {} g",
            consumption_g
        )));
    }

    let quantity = Decimal::from(run.quantity);
    let out_of_range = || InkError::out_of_range("production run");
    let consumption_with_waste_g = consumption_g
        .checked_mul(Decimal::ONE + run.waste_rate_pct / PERCENT)
        .ok_or_else(out_of_range)?;
    let total_consumption_kg = consumption_with_waste_g
        .checked_mul(quantity)
        .and_then(|g| g.checked_div(GRAMS_PER_KG))
        .ok_or_else(out_of_range)?;
    let total_cost = total_consumption_kg
        .checked_mul(run.ink_price_per_kg)
        .ok_or_else(out_of_range)?;
    let unit_cost = total_cost.checked_div(quantity).ok_or_else(out_of_range)?;

    tracing::debug!(
        quantity = run.quantity,
        waste_rate_pct = %run.waste_rate_pct,
        total_kg = %total_consumption_kg,
        total_cost = %total_cost,
        "computed production cost"
    );

    Ok(ProductionCost {
        quantity: run.quantity,
        waste_rate_pct: run.waste_rate_pct,
        ink_price_per_kg: run.ink_price_per_kg,
        consumption_with_waste_g,
        total_consumption_kg,
        total_cost,
        unit_cost,
    })
}
