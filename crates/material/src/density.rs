//! Density unit tags (spec §4.6)

use std::fmt;

use crate::error::{Error, Result};

/// A material density, tagged with one of the three supported unit systems
///
/// `density`/`density_units` getters return exactly what [`crate::Material::set_density`]
/// was given; all conversion happens inside `get_atoms_per_cc` (spec §9 Open
/// Question, resolved in favour of "stored verbatim, converted on use").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DensityUnits {
    /// Grams per cubic centimetre
    GramPerCm3,
    /// Atoms per barn-centimetre; already a number density, bypasses the
    /// mass-weighted atoms-per-cc division entirely
    AtomPerBarnCm,
    /// Kilograms per cubic metre
    KgPerM3,
}

impl DensityUnits {
    /// Parse a density unit string from the closed set `{g/cm3, atom/b-cm, kg/m3}`
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "g/cm3" => Ok(DensityUnits::GramPerCm3),
            "atom/b-cm" => Ok(DensityUnits::AtomPerBarnCm),
            "kg/m3" => Ok(DensityUnits::KgPerM3),
            other => Err(Error::Value(format!(
                "\"{other}\" is not a recognised density unit (expected one of g/cm3, atom/b-cm, kg/m3)"
            ))),
        }
    }

    /// The canonical string form, as accepted by [`DensityUnits::parse`]
    pub fn as_str(&self) -> &'static str {
        match self {
            DensityUnits::GramPerCm3 => "g/cm3",
            DensityUnits::AtomPerBarnCm => "atom/b-cm",
            DensityUnits::KgPerM3 => "kg/m3",
        }
    }
}

impl fmt::Display for DensityUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for DensityUnits {
    fn default() -> Self {
        DensityUnits::GramPerCm3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_canonical_strings() {
        for unit in [DensityUnits::GramPerCm3, DensityUnits::AtomPerBarnCm, DensityUnits::KgPerM3] {
            assert_eq!(DensityUnits::parse(unit.as_str()).unwrap(), unit);
        }
    }

    #[test]
    fn rejects_unknown_unit() {
        assert!(DensityUnits::parse("lb/ft3").is_err());
    }
}
