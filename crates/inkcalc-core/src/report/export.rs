//! Flat (CSV) and structured (JSON) renderings of [`CalculationResult`].
//!
//! Values are written at full precision; rounding for display is left to
//! the caller via [`CalculationResult::rounded`].

use super::CalculationResult;
use crate::consumption::DensitySource;
use crate::error::InkError;
use rust_decimal::Decimal;
use std::io::Write;

const BASE_COLUMNS: &[&str] = &[
    "method",
    "method_name",
    "substrate",
    "area_m2",
    "coverage_pct",
    "density_min",
    "density_max",
    "density_used",
    "density_source",
    "density_variant",
    "substrate_factor",
    "consumption_g",
    "quantity",
    "waste_rate_pct",
    "ink_price_per_kg",
    "consumption_with_waste_g",
    "total_consumption_kg",
    "production_cost",
    "production_unit_cost",
    "mix_name",
    "mix_total_mass_g",
    "mix_total_cost",
    "mix_unit_cost",
];

const MIX_COLUMNS: &[&str] = &["colorant", "proportion", "mass_g", "unit_cost", "cost"];

/// Serialize one result as a pretty JSON object.
pub fn to_json(result: &CalculationResult) -> Result<String, InkError> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Write results as a pretty JSON array.
pub fn write_json<W: Write>(results: &[CalculationResult], mut writer: W) -> Result<(), InkError> {
    serde_json::to_writer_pretty(&mut writer, results)?;
    writeln!(writer)?;
    Ok(())
}

/// Write results as CSV, one row per result.
///
/// The mix breakdown is flattened into repeated `mix_{i}_*` column groups;
/// the number of groups is the largest breakdown in `results`, and shorter
/// rows are padded with empty cells.
pub fn write_csv<W: Write>(results: &[CalculationResult], writer: W) -> Result<(), InkError> {
    let groups = results
        .iter()
        .map(|r| r.mix_breakdown.as_ref().map_or(0, Vec::len))
        .max()
        .unwrap_or(0);

    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(csv_headers(groups))?;
    for result in results {
        wtr.write_record(csv_row(result, groups))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Column names for a CSV with `groups` mix column groups.
pub fn csv_headers(groups: usize) -> Vec<String> {
    let mut headers: Vec<String> = BASE_COLUMNS.iter().map(|s| s.to_string()).collect();
    for i in 1..=groups {
        for col in MIX_COLUMNS {
            headers.push(format!("mix_{}_{}", i, col));
        }
    }
    headers
}

fn csv_row(r: &CalculationResult, groups: usize) -> Vec<String> {
    let dec = |v: Decimal| v.to_string();
    let opt = |v: Option<Decimal>| v.map(|d| d.to_string()).unwrap_or_default();

    let (source, variant) = match &r.density_source {
        DensitySource::Override => ("override", String::new()),
        DensitySource::MethodMidpoint => ("method_midpoint", String::new()),
        DensitySource::VariantMidpoint(name) => ("variant_midpoint", name.clone()),
    };

    let p = r.production.as_ref();
    let mut row = vec![
        r.method.key().to_string(),
        r.method_name.clone(),
        r.substrate.clone(),
        dec(r.area_m2),
        dec(r.coverage_pct),
        dec(r.density_range.min),
        dec(r.density_range.max),
        dec(r.density_used),
        source.to_string(),
        variant,
        dec(r.substrate_factor),
        dec(r.consumption_g),
        p.map(|p| p.quantity.to_string()).unwrap_or_default(),
        opt(p.map(|p| p.waste_rate_pct)),
        opt(p.map(|p| p.ink_price_per_kg)),
        opt(p.map(|p| p.consumption_with_waste_g)),
        opt(p.map(|p| p.total_consumption_kg)),
        opt(p.map(|p| p.total_cost)),
        opt(p.map(|p| p.unit_cost)),
        r.mix_name.clone().unwrap_or_default(),
        opt(r.mix_total_mass_g),
        opt(r.total_cost),
        opt(r.mix_unit_cost),
    ];

    let lines = r.mix_breakdown.as_deref().unwrap_or(&[]);
    for i in 0..groups {
        match lines.get(i) {
            Some(line) => {
                row.push(line.colorant.clone());
                row.push(dec(line.proportion));
                row.push(dec(line.mass_g));
                row.push(dec(line.unit_cost));
                row.push(dec(line.cost));
            }
            None => row.extend(std::iter::repeat(String::new()).take(MIX_COLUMNS.len())),
        }
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::consumption::{compute_consumption, JobSpecification};
    use crate::mix::compute_mix_cost;
    use crate::mix::schema::MixComponent;
    use crate::report::assemble;
    use rust_decimal_macros::dec;

    fn with_mix() -> CalculationResult {
        let cat = Catalog::builtin();
        let job = JobSpecification::new(
            dec!(2.0),
            dec!(50),
            cat.lookup_method("sheet-fed").unwrap(),
            cat.lookup_substrate("coated-paper").unwrap(),
        );
        let mix = compute_mix_cost(
            &[
                MixComponent::new("Cyan", dec!(0.25), dec!(0.02)),
                MixComponent::new("Magenta", dec!(0.25), dec!(0.03)),
                MixComponent::new("Yellow", dec!(0.25), dec!(0.025)),
                MixComponent::new("Black", dec!(0.25), dec!(0.015)),
            ],
            dec!(100),
        )
        .unwrap();
        assemble(compute_consumption(&job).unwrap(), Some(mix.named("Even CMYK"))).unwrap()
    }

    fn without_mix() -> CalculationResult {
        let cat = Catalog::builtin();
        let job = JobSpecification::new(
            dec!(1.5),
            dec!(80),
            cat.lookup_method("uv-flexo").unwrap(),
            cat.lookup_substrate("plastic-film").unwrap(),
        )
        .with_variant("Lines Fine");
        assemble(compute_consumption(&job).unwrap(), None).unwrap()
    }

    #[test]
    fn test_json_has_mix_breakdown_array() {
        let json = to_json(&with_mix()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let breakdown = value["mix_breakdown"].as_array().unwrap();
        assert_eq!(breakdown.len(), 4);
        assert_eq!(breakdown[1]["colorant"], "Magenta");
        let cost: Decimal = breakdown[1]["cost"].as_str().unwrap().parse().unwrap();
        assert_eq!(cost, dec!(0.75));
        assert_eq!(value["method"], "sheet-fed");
    }

    #[test]
    fn test_json_round_trip_is_lossless() {
        for original in [with_mix(), without_mix()] {
            let json = to_json(&original).unwrap();
            let back: CalculationResult = serde_json::from_str(&json).unwrap();
            assert_eq!(back, original);
        }
    }

    #[test]
    fn test_json_omits_absent_mix() {
        let json = to_json(&without_mix()).unwrap();
        assert!(!json.contains("mix_breakdown"));
        assert!(!json.contains("total_cost"));
    }

    #[test]
    fn test_csv_pads_mix_groups() {
        let mut buf = Vec::new();
        write_csv(&[with_mix(), without_mix()], &mut buf).unwrap();

        let mut rdr = csv::Reader::from_reader(buf.as_slice());
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(headers.len(), BASE_COLUMNS.len() + 4 * MIX_COLUMNS.len());
        assert_eq!(&headers[headers.len() - 1], "mix_4_cost");

        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);

        let idx = |name: &str| headers.iter().position(|h| h == name).unwrap();
        let num =
            |row: &csv::StringRecord, name: &str| -> Decimal { row[idx(name)].parse().unwrap() };
        assert_eq!(num(&rows[0], "consumption_g"), dec!(1.1));
        assert_eq!(num(&rows[0], "mix_total_cost"), dec!(2.25));
        assert_eq!(num(&rows[0], "mix_2_mass_g"), dec!(25));
        assert_eq!(&rows[0][idx("mix_3_colorant")], "Yellow");
        assert_eq!(&rows[1][idx("density_source")], "variant_midpoint");
        assert_eq!(&rows[1][idx("density_variant")], "Lines Fine");
        assert_eq!(&rows[1][idx("mix_1_colorant")], "");
    }

    #[test]
    fn test_csv_without_any_mix_has_base_columns_only() {
        let mut buf = Vec::new();
        write_csv(&[without_mix()], &mut buf).unwrap();
        let mut rdr = csv::Reader::from_reader(buf.as_slice());
        assert_eq!(rdr.headers().unwrap().len(), BASE_COLUMNS.len());
    }

    #[test]
    fn test_json_array() {
        let mut buf = Vec::new();
        write_json(&[with_mix(), without_mix()], &mut buf).unwrap();
        let back: Vec<CalculationResult> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(back.len(), 2);
    }
}
