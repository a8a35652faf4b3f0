//! Read-only reference tables: printing methods, substrates, base colorants.
//!
//! Methods and substrates are closed enumerations, so every supported entry
//! has a record by construction. A [`Catalog`] materializes those records
//! once; it is never mutated afterwards and can be shared freely between
//! threads.

pub mod colorants;
pub mod coverage;
pub mod methods;
pub mod substrates;

use crate::config::normalize_key;
use crate::error::InkError;
use colorants::BaseColorant;
use methods::{PrintMethod, PrintingMethod};
use std::sync::LazyLock;
use substrates::{Substrate, SubstrateType};

static BUILTIN_CATALOG: LazyLock<Catalog> = LazyLock::new(Catalog::builtin);

/// Get the process-wide built-in catalog.
pub fn catalog() -> &'static Catalog {
    &BUILTIN_CATALOG
}

#[derive(Debug, Clone)]
pub struct Catalog {
    methods: Vec<PrintingMethod>,
    substrates: Vec<SubstrateType>,
}

impl Catalog {
    /// Build the catalog from the built-in method and substrate tables.
    pub fn builtin() -> Self {
        Self {
            methods: PrintMethod::ALL.iter().map(PrintMethod::spec).collect(),
            substrates: Substrate::ALL.iter().map(Substrate::spec).collect(),
        }
    }

    /// Look up a printing method by key or display name.
    ///
    /// Matching ignores case and treats spaces, underscores and dashes as
    /// equivalent, so "Sheet-fed", "sheet_fed" and "Offset - Sheet-fed" all
    /// resolve to the same method.
    pub fn lookup_method(&self, name: &str) -> Result<&PrintingMethod, InkError> {
        let key = normalize_key(name);
        self.methods
            .iter()
            .find(|m| m.key == key || normalize_key(m.name) == key)
            .ok_or_else(|| InkError::not_found("printing method", name))
    }

    pub fn method(&self, method: PrintMethod) -> &PrintingMethod {
        // The table is built from PrintMethod::ALL in declaration order.
        &self.methods[method as usize]
    }

    pub fn lookup_substrate(&self, name: &str) -> Result<&SubstrateType, InkError> {
        let key = normalize_key(name);
        self.substrates
            .iter()
            .find(|s| s.key == key || normalize_key(s.name) == key)
            .ok_or_else(|| InkError::not_found("substrate", name))
    }

    pub fn substrate(&self, substrate: Substrate) -> &SubstrateType {
        &self.substrates[substrate as usize]
    }

    pub fn list_methods(&self) -> &[PrintingMethod] {
        &self.methods
    }

    pub fn list_substrates(&self) -> &[SubstrateType] {
        &self.substrates
    }

    /// Look up a base colorant by name or process code.
    pub fn lookup_colorant(&self, name: &str) -> Result<&'static BaseColorant, InkError> {
        colorants::find_colorant(name).ok_or_else(|| InkError::not_found("colorant", name))
    }

    pub fn list_colorants(&self) -> &'static [BaseColorant] {
        &colorants::colorant_table().colorants
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
