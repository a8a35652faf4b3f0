use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed numeric interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl ValueRange {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    pub fn midpoint(&self) -> Decimal {
        (self.min + self.max) / dec!(2)
    }

    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn contains_range(&self, other: &ValueRange) -> bool {
        self.contains(other.min) && self.contains(other.max)
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodCategory {
    Offset,
    Uv,
    Flexo,
    Gravure,
    Screen,
    Digital,
    Security,
}

impl fmt::Display for MethodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MethodCategory::Offset => write!(f, "Offset"),
            MethodCategory::Uv => write!(f, "UV"),
            MethodCategory::Flexo => write!(f, "Flexo"),
            MethodCategory::Gravure => write!(f, "Gravure"),
            MethodCategory::Screen => write!(f, "Screen"),
            MethodCategory::Digital => write!(f, "Digital"),
            MethodCategory::Security => write!(f, "Security"),
        }
    }
}

/// Supported printing methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrintMethod {
    SheetFed,
    HeatSet,
    ColdSet,
    UvOffset,
    UvFlexo,
    SolventFlexo,
    Gravure,
    Screen,
    DigitalUv,
    DigitalAqueous,
    DigitalSolvent,
    SecurityOvi,
    SecurityIr,
    SecurityUvFluorescent,
    SecurityMagnetic,
}

impl PrintMethod {
    pub const ALL: [PrintMethod; 15] = [
        PrintMethod::SheetFed,
        PrintMethod::HeatSet,
        PrintMethod::ColdSet,
        PrintMethod::UvOffset,
        PrintMethod::UvFlexo,
        PrintMethod::SolventFlexo,
        PrintMethod::Gravure,
        PrintMethod::Screen,
        PrintMethod::DigitalUv,
        PrintMethod::DigitalAqueous,
        PrintMethod::DigitalSolvent,
        PrintMethod::SecurityOvi,
        PrintMethod::SecurityIr,
        PrintMethod::SecurityUvFluorescent,
        PrintMethod::SecurityMagnetic,
    ];

    /// Stable lookup key, e.g. "sheet-fed".
    pub fn key(&self) -> &'static str {
        match self {
            PrintMethod::SheetFed => "sheet-fed",
            PrintMethod::HeatSet => "heat-set",
            PrintMethod::ColdSet => "cold-set",
            PrintMethod::UvOffset => "uv-offset",
            PrintMethod::UvFlexo => "uv-flexo",
            PrintMethod::SolventFlexo => "solvent-flexo",
            PrintMethod::Gravure => "gravure",
            PrintMethod::Screen => "screen",
            PrintMethod::DigitalUv => "digital-uv",
            PrintMethod::DigitalAqueous => "digital-aqueous",
            PrintMethod::DigitalSolvent => "digital-solvent",
            PrintMethod::SecurityOvi => "security-ovi",
            PrintMethod::SecurityIr => "security-ir",
            PrintMethod::SecurityUvFluorescent => "security-uv-fluorescent",
            PrintMethod::SecurityMagnetic => "security-magnetic",
        }
    }

    /// Display name as printed on estimates.
    pub fn name(&self) -> &'static str {
        match self {
            PrintMethod::SheetFed => "Offset - Sheet-fed",
            PrintMethod::HeatSet => "Offset - Heat-set",
            PrintMethod::ColdSet => "Offset - Cold-set",
            PrintMethod::UvOffset => "UV Offset",
            PrintMethod::UvFlexo => "UV Flexo",
            PrintMethod::SolventFlexo => "Solvent Flexo",
            PrintMethod::Gravure => "Gravure",
            PrintMethod::Screen => "Screen Printing",
            PrintMethod::DigitalUv => "Digital - UV",
            PrintMethod::DigitalAqueous => "Digital - Aqueous",
            PrintMethod::DigitalSolvent => "Digital - Solvent",
            PrintMethod::SecurityOvi => "Security - OVI",
            PrintMethod::SecurityIr => "Security - IR Ink",
            PrintMethod::SecurityUvFluorescent => "Security - UV Fluorescent",
            PrintMethod::SecurityMagnetic => "Security - Magnetic",
        }
    }

    pub fn category(&self) -> MethodCategory {
        match self {
            PrintMethod::SheetFed | PrintMethod::HeatSet | PrintMethod::ColdSet => {
                MethodCategory::Offset
            }
            PrintMethod::UvOffset => MethodCategory::Uv,
            PrintMethod::UvFlexo | PrintMethod::SolventFlexo => MethodCategory::Flexo,
            PrintMethod::Gravure => MethodCategory::Gravure,
            PrintMethod::Screen => MethodCategory::Screen,
            PrintMethod::DigitalUv | PrintMethod::DigitalAqueous | PrintMethod::DigitalSolvent => {
                MethodCategory::Digital
            }
            PrintMethod::SecurityOvi
            | PrintMethod::SecurityIr
            | PrintMethod::SecurityUvFluorescent
            | PrintMethod::SecurityMagnetic => MethodCategory::Security,
        }
    }

    /// Build the reference record for this method.
    ///
    /// Densities in g/m², viscosities in Pa·s. Sources: ISO/TS 19857 for
    /// offset, ATEC recommendations for UV flexo, manufacturer datasheets
    /// for the rest.
    pub fn spec(&self) -> PrintingMethod {
        let r = ValueRange::new;
        let (density, typical, viscosity, description) = match self {
            PrintMethod::SheetFed => (
                r(dec!(0.7), dec!(1.5)),
                dec!(1.0),
                r(dec!(40), dec!(100)),
                "Oil-based, high viscosity ink for paper printing",
            ),
            PrintMethod::HeatSet => (
                r(dec!(0.8), dec!(1.4)),
                dec!(1.1),
                r(dec!(40), dec!(100)),
                "Web offset with heat drying",
            ),
            PrintMethod::ColdSet => (
                r(dec!(0.6), dec!(1.2)),
                dec!(0.9),
                r(dec!(40), dec!(100)),
                "Newsprint, penetration drying",
            ),
            PrintMethod::UvOffset => (
                r(dec!(0.9), dec!(1.6)),
                dec!(1.2),
                r(dec!(5), dec!(20)),
                "Instant curing, high gloss",
            ),
            PrintMethod::UvFlexo => (
                r(dec!(0.9), dec!(2.5)),
                dec!(1.4),
                r(dec!(0.4), dec!(1.0)),
                "Low viscosity, for labels and packaging",
            ),
            PrintMethod::SolventFlexo => (
                r(dec!(1.0), dec!(2.0)),
                dec!(1.5),
                r(dec!(0.1), dec!(0.5)),
                "For flexible packaging, PE/PP films",
            ),
            PrintMethod::Gravure => (
                r(dec!(1.5), dec!(4.0)),
                dec!(2.5),
                r(dec!(0.01), dec!(0.1)),
                "High density, solvent or water-based",
            ),
            PrintMethod::Screen => (
                r(dec!(5.0), dec!(20.0)),
                dec!(10.0),
                r(dec!(1), dec!(10)),
                "Heavy deposit, security applications",
            ),
            PrintMethod::DigitalUv => (
                r(dec!(1.0), dec!(2.0)),
                dec!(1.5),
                r(dec!(0.01), dec!(0.05)),
                "Piezoelectric inkjet, UV curable",
            ),
            PrintMethod::DigitalAqueous => (
                r(dec!(0.8), dec!(1.5)),
                dec!(1.1),
                r(dec!(0.001), dec!(0.01)),
                "Water-based dye/pigment inks",
            ),
            PrintMethod::DigitalSolvent => (
                r(dec!(1.2), dec!(2.0)),
                dec!(1.6),
                r(dec!(0.01), dec!(0.05)),
                "For uncoated vinyl and banners",
            ),
            PrintMethod::SecurityOvi => (
                r(dec!(2.0), dec!(4.0)),
                dec!(3.0),
                r(dec!(2), dec!(5)),
                "Optically Variable Ink - screen/offset",
            ),
            PrintMethod::SecurityIr => (
                r(dec!(1.5), dec!(3.0)),
                dec!(2.0),
                r(dec!(2), dec!(5)),
                "Infrared absorbing ink",
            ),
            PrintMethod::SecurityUvFluorescent => (
                r(dec!(1.0), dec!(2.5)),
                dec!(1.8),
                r(dec!(2), dec!(5)),
                "Visible under UV light",
            ),
            PrintMethod::SecurityMagnetic => (
                r(dec!(2.0), dec!(4.0)),
                dec!(3.0),
                r(dec!(5), dec!(10)),
                "MICR encoding",
            ),
        };

        let (anilox, variants) = match self {
            PrintMethod::UvFlexo => (Some(r(dec!(2.8), dec!(8.0))), uv_flexo_variants()),
            _ => (None, Vec::new()),
        };

        PrintingMethod {
            method: *self,
            key: self.key(),
            name: self.name(),
            category: self.category(),
            density,
            typical_density: typical,
            viscosity: Some(viscosity),
            anilox,
            description,
            variants,
        }
    }
}

impl fmt::Display for PrintMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// UV flexo print subjects (ATEC): ink application and anilox cell volume.
fn uv_flexo_variants() -> Vec<MethodVariant> {
    let r = ValueRange::new;
    vec![
        MethodVariant {
            name: "Process Printing",
            density: r(dec!(0.9), dec!(1.4)),
            anilox: Some(r(dec!(3.0), dec!(4.5))),
        },
        MethodVariant {
            name: "Screen Fine",
            density: r(dec!(0.9), dec!(1.0)),
            anilox: Some(r(dec!(2.8), dec!(3.5))),
        },
        MethodVariant {
            name: "Screen Coarse",
            density: r(dec!(1.2), dec!(1.5)),
            anilox: Some(r(dec!(3.0), dec!(6.0))),
        },
        MethodVariant {
            name: "Lines Fine",
            density: r(dec!(1.0), dec!(1.5)),
            anilox: Some(r(dec!(2.8), dec!(4.0))),
        },
        MethodVariant {
            name: "Lines Coarse",
            density: r(dec!(1.5), dec!(2.0)),
            anilox: Some(r(dec!(3.5), dec!(6.0))),
        },
        MethodVariant {
            name: "Solid Areas",
            density: r(dec!(1.5), dec!(2.5)),
            anilox: Some(r(dec!(4.0), dec!(8.0))),
        },
    ]
}

/// A print subject within a method that narrows the density range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodVariant {
    pub name: &'static str,
    /// Ink application in g/m².
    pub density: ValueRange,
    /// Anilox cell volume in cm³/m².
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anilox: Option<ValueRange>,
}

/// Reference record for one printing method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrintingMethod {
    pub method: PrintMethod,
    pub key: &'static str,
    pub name: &'static str,
    pub category: MethodCategory,
    /// Ink laydown in g/m².
    pub density: ValueRange,
    /// Published typical laydown. Informational only.
    pub typical_density: Decimal,
    /// Pa·s.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viscosity: Option<ValueRange>,
    /// cm³/m².
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anilox: Option<ValueRange>,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<MethodVariant>,
}

impl PrintingMethod {
    /// Find a variant by name (case-insensitive, spaces/underscores/dashes equivalent).
    pub fn variant(&self, name: &str) -> Option<&MethodVariant> {
        let wanted = crate::config::normalize_key(name);
        self.variants
            .iter()
            .find(|v| crate::config::normalize_key(v.name) == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint() {
        let range = ValueRange::new(dec!(0.7), dec!(1.5));
        assert_eq!(range.midpoint(), dec!(1.1));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = ValueRange::new(dec!(2.0), dec!(4.0));
        assert!(range.contains(dec!(2.0)));
        assert!(range.contains(dec!(4.0)));
        assert!(!range.contains(dec!(4.01)));
        assert!(!range.contains(dec!(1.99)));
    }

    #[test]
    fn test_all_ranges_well_formed() {
        for method in PrintMethod::ALL {
            let spec = method.spec();
            assert!(spec.density.min > Decimal::ZERO, "{} density not positive", method);
            assert!(spec.density.min <= spec.density.max, "{} density inverted", method);
            assert!(
                spec.density.contains(spec.typical_density),
                "{} typical density outside range",
                method
            );
            if let Some(v) = spec.viscosity {
                assert!(v.min <= v.max, "{} viscosity inverted", method);
            }
            for variant in &spec.variants {
                assert!(
                    spec.density.contains_range(&variant.density),
                    "{} variant '{}' outside method range",
                    method,
                    variant.name
                );
            }
        }
    }

    #[test]
    fn test_keys_unique() {
        let mut keys: Vec<&str> = PrintMethod::ALL.iter().map(|m| m.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), PrintMethod::ALL.len());
    }

    #[test]
    fn test_categories() {
        assert_eq!(PrintMethod::HeatSet.category(), MethodCategory::Offset);
        assert_eq!(PrintMethod::UvOffset.category(), MethodCategory::Uv);
        assert_eq!(PrintMethod::SolventFlexo.category(), MethodCategory::Flexo);
        assert_eq!(
            PrintMethod::SecurityMagnetic.category(),
            MethodCategory::Security
        );
    }

    #[test]
    fn test_uv_flexo_variant_lookup() {
        let spec = PrintMethod::UvFlexo.spec();
        let solid = spec.variant("solid areas").unwrap();
        assert_eq!(solid.density, ValueRange::new(dec!(1.5), dec!(2.5)));
        assert!(spec.variant("Halftone").is_none());
        assert!(PrintMethod::Gravure.spec().variants.is_empty());
    }

    #[test]
    fn test_serde_key_matches_key() {
        for method in PrintMethod::ALL {
            let json = serde_json::to_string(&method).unwrap();
            assert_eq!(json, format!("\"{}\"", method.key()));
        }
    }
}
