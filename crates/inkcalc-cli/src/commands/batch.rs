use inkcalc_core::catalog::catalog;
use inkcalc_core::error::InkError;
use inkcalc_core::model::CalculationRequest;
use inkcalc_core::report::export;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub fn run(input_file: &Path, output_format: &str, out: Option<PathBuf>) -> Result<(), InkError> {
    let json_bytes = std::fs::read(input_file)?;
    let requests: Vec<CalculationRequest> = serde_json::from_slice(&json_bytes)?;
    tracing::info!(requests = requests.len(), "running batch");

    let results = inkcalc_core::calculate_batch(catalog(), &requests)?;

    match out {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(&path)?);
            write_results(&results, output_format, &mut writer)?;
            writer.flush()?;
            eprintln!("{} result(s) written to {}", results.len(), path.display());
        }
        None => write_results(&results, output_format, std::io::stdout().lock())?,
    }

    Ok(())
}

fn write_results<W: Write>(
    results: &[inkcalc_core::report::CalculationResult],
    output_format: &str,
    writer: W,
) -> Result<(), InkError> {
    match output_format {
        "csv" => export::write_csv(results, writer),
        _ => export::write_json(results, writer),
    }
}
