//! Engine constants.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Allowed deviation of a mix's proportion sum from 1.
pub const MIX_TOLERANCE: Decimal = dec!(0.000001);

/// Decimal places used when a result is rounded for display.
pub const DISPLAY_DP: u32 = 2;

/// Conversion factor: cm² to m².
pub const CM2_TO_M2: Decimal = dec!(0.0001);

pub const GRAMS_PER_KG: Decimal = dec!(1000);

pub const PERCENT: Decimal = dec!(100);

/// Normalize a lookup key: lowercase, with spaces and underscores folded to '-'.
///
/// "Coated Paper", "coated_paper" and "coated-paper" all become "coated-paper".
pub fn normalize_key(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '_' { '-' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("Coated Paper"), "coated-paper");
        assert_eq!(normalize_key("  sheet_fed "), "sheet-fed");
        assert_eq!(normalize_key("Sheet-fed"), "sheet-fed");
    }
}
