use inkcalc_core::error::InkError;
use serde::Serialize;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), InkError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
