use inkcalc_core::error::InkError;
use inkcalc_core::report::{export, CalculationResult};

pub fn print(results: &[CalculationResult]) -> Result<(), InkError> {
    export::write_csv(results, std::io::stdout().lock())
}
