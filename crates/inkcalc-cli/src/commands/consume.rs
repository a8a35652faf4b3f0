use clap::Args;
use inkcalc_core::catalog::catalog;
use inkcalc_core::config::DISPLAY_DP;
use inkcalc_core::consumption::area_from_dimensions_cm;
use inkcalc_core::consumption::production::ProductionRun;
use inkcalc_core::error::InkError;
use inkcalc_core::model::CalculationRequest;
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::output;

#[derive(Args)]
pub struct ConsumeArgs {
    /// Printing method key or name, e.g. "sheet-fed" or "UV Flexo"
    #[arg(short, long)]
    pub method: String,

    /// Substrate key or name, e.g. "coated-paper"
    #[arg(short, long)]
    pub substrate: String,

    /// Printed area in m²
    #[arg(
        short,
        long,
        conflicts_with_all = ["width_cm", "height_cm"],
        required_unless_present_all = ["width_cm", "height_cm"]
    )]
    pub area: Option<Decimal>,

    /// Printed width in cm (use with --height-cm instead of --area)
    #[arg(long, requires = "height_cm")]
    pub width_cm: Option<Decimal>,

    /// Printed height in cm
    #[arg(long, requires = "width_cm")]
    pub height_cm: Option<Decimal>,

    /// Ink coverage in percent (0-100)
    #[arg(short, long)]
    pub coverage: Decimal,

    /// Explicit ink density in g/m² (must lie within the method's range)
    #[arg(short, long)]
    pub density: Option<Decimal>,

    /// Print subject within the method, e.g. "Solid Areas"
    #[arg(long)]
    pub variant: Option<String>,

    /// Replace the substrate's consumption factor
    #[arg(long)]
    pub substrate_factor: Option<Decimal>,

    /// Number of impressions in the run
    #[arg(short, long, requires = "ink_price")]
    pub quantity: Option<u64>,

    /// Waste rate in percent (default 0)
    #[arg(long, requires = "quantity")]
    pub waste: Option<Decimal>,

    /// Ink price per kg
    #[arg(long, requires = "quantity")]
    pub ink_price: Option<Decimal>,

    /// Built-in mix preset to cost, e.g. "185 C"
    #[arg(long, conflicts_with = "mix_file")]
    pub preset: Option<String>,

    /// Mix definition JSON file to cost
    #[arg(long, value_name = "FILE")]
    pub mix_file: Option<PathBuf>,

    /// Unit-cost table (JSON, cost per gram) overriding catalog prices
    #[arg(long, value_name = "FILE")]
    pub costs: Option<PathBuf>,

    /// Mix mass in grams (default: the job's ink requirement)
    #[arg(long)]
    pub mix_mass: Option<Decimal>,

    /// Output format
    #[arg(short, long, default_value = "table", value_parser = ["table", "json", "csv"])]
    pub output: String,
}

pub fn run(args: ConsumeArgs) -> Result<(), InkError> {
    let area_m2 = match (args.area, args.width_cm, args.height_cm) {
        (Some(area), _, _) => area,
        (None, Some(width), Some(height)) => area_from_dimensions_cm(width, height)?,
        _ => {
            return Err(InkError::InvalidInput(
                "give either --area or both --width-cm and --height-cm".into(),
            ))
        }
    };

    let mut request =
        CalculationRequest::new(args.method, args.substrate, area_m2, args.coverage);
    request.density = args.density;
    request.variant = args.variant;
    request.substrate_factor = args.substrate_factor;
    request.production = match (args.quantity, args.ink_price) {
        (Some(quantity), Some(ink_price_per_kg)) => Some(ProductionRun {
            quantity,
            waste_rate_pct: args.waste.unwrap_or_default(),
            ink_price_per_kg,
        }),
        _ => None,
    };
    request.mix = super::mix::resolve_mix(
        args.preset.as_deref(),
        args.mix_file.as_deref(),
        args.costs.as_deref(),
    )?;
    request.mix_mass_g = args.mix_mass;

    let result = inkcalc_core::calculate(catalog(), &request)?;

    match args.output.as_str() {
        "json" => output::json::print(&result)?,
        "csv" => output::csv::print(std::slice::from_ref(&result))?,
        _ => output::table::print_result(&result.rounded(DISPLAY_DP)),
    }

    Ok(())
}
