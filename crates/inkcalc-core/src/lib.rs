pub mod catalog;
pub mod config;
pub mod consumption;
pub mod error;
pub mod mix;
pub mod model;
pub mod report;

use catalog::Catalog;
use consumption::production::compute_production;
use consumption::JobSpecification;
use error::InkError;
use model::CalculationRequest;
use report::CalculationResult;
use std::borrow::Cow;

/// Main API entry point: run one request through the engine.
///
/// Resolves method and substrate in the catalog, computes consumption,
/// the optional production run and the optional mix cost, then assembles
/// the reporting record. When the request carries a mix without a target
/// mass, the mix is sized to the job's ink requirement: the full run
/// (including waste) if a production run is given, otherwise one
/// impression.
pub fn calculate(
    catalog: &Catalog,
    request: &CalculationRequest,
) -> Result<CalculationResult, InkError> {
    let method = catalog.lookup_method(&request.method)?;
    let base_substrate = catalog.lookup_substrate(&request.substrate)?;
    let substrate = match request.substrate_factor {
        Some(factor) => Cow::Owned(base_substrate.with_factor(factor)?),
        None => Cow::Borrowed(base_substrate),
    };

    let mut job = JobSpecification::new(
        request.area_m2,
        request.coverage_pct,
        method,
        &substrate,
    );
    job.density_override = request.density;
    job.variant = request.variant.clone();

    let mut outcome = consumption::compute_consumption(&job)?;
    if let Some(ref run) = request.production {
        outcome.production = Some(compute_production(outcome.consumption_g, run)?);
    }

    let mix = match request.mix {
        Some(ref def) => {
            mix::validate_mix(def)?;
            let mass = match request.mix_mass_g {
                Some(mass) => mass,
                None => outcome
                    .production
                    .as_ref()
                    .map(|p| p.total_consumption_g())
                    .unwrap_or(outcome.consumption_g),
            };
            tracing::debug!(mix = %def.name, mass_g = %mass, "sizing mix");
            Some(mix::compute_mix_cost(&def.components, mass)?.named(def.name.clone()))
        }
        None => None,
    };

    report::assemble(outcome, mix)
}

/// Run several requests, stopping at the first failure.
///
/// The 1-based position of a failing request is logged before its error
/// is returned.
pub fn calculate_batch(
    catalog: &Catalog,
    requests: &[CalculationRequest],
) -> Result<Vec<CalculationResult>, InkError> {
    requests
        .iter()
        .enumerate()
        .map(|(i, req)| {
            calculate(catalog, req).map_err(|e| {
                tracing::warn!(request = i + 1, error = %e, "batch request failed");
                e
            })
        })
        .collect()
}
