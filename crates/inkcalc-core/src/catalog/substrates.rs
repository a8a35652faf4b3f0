use crate::error::InkError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported substrate types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Substrate {
    CoatedPaper,
    UncoatedPaper,
    Cardboard,
    PlasticFilm,
    Metallized,
    SyntheticPaper,
    SecurityPaper,
}

impl Substrate {
    pub const ALL: [Substrate; 7] = [
        Substrate::CoatedPaper,
        Substrate::UncoatedPaper,
        Substrate::Cardboard,
        Substrate::PlasticFilm,
        Substrate::Metallized,
        Substrate::SyntheticPaper,
        Substrate::SecurityPaper,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Substrate::CoatedPaper => "coated-paper",
            Substrate::UncoatedPaper => "uncoated-paper",
            Substrate::Cardboard => "cardboard",
            Substrate::PlasticFilm => "plastic-film",
            Substrate::Metallized => "metallized",
            Substrate::SyntheticPaper => "synthetic-paper",
            Substrate::SecurityPaper => "security-paper",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Substrate::CoatedPaper => "Coated Paper",
            Substrate::UncoatedPaper => "Uncoated Paper",
            Substrate::Cardboard => "Cardboard",
            Substrate::PlasticFilm => "Plastic Film",
            Substrate::Metallized => "Metallized",
            Substrate::SyntheticPaper => "Synthetic Paper",
            Substrate::SecurityPaper => "Security Paper",
        }
    }

    /// Consumption multiplier relative to coated paper.
    pub fn factor(&self) -> Decimal {
        match self {
            Substrate::CoatedPaper => dec!(1.0),
            Substrate::UncoatedPaper => dec!(1.2),
            Substrate::Cardboard => dec!(1.3),
            Substrate::PlasticFilm => dec!(0.9),
            Substrate::Metallized => dec!(0.8),
            Substrate::SyntheticPaper => dec!(1.0),
            Substrate::SecurityPaper => dec!(1.1),
        }
    }

    pub fn spec(&self) -> SubstrateType {
        SubstrateType {
            substrate: *self,
            key: self.key(),
            name: self.name(),
            factor: self.factor(),
        }
    }
}

impl fmt::Display for Substrate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Reference record for one substrate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubstrateType {
    pub substrate: Substrate,
    pub key: &'static str,
    pub name: &'static str,
    pub factor: Decimal,
}

impl SubstrateType {
    /// Copy of this substrate with a caller-measured correction factor.
    pub fn with_factor(&self, factor: Decimal) -> Result<SubstrateType, InkError> {
        if factor <= Decimal::ZERO {
            return Err(InkError::InvalidInput(format!(
                "substrate factor must be positive, got {}",
                factor
            )));
        }
        Ok(SubstrateType {
            factor,
            ..self.clone()
        })
    }
}
