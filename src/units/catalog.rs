// Built-in unit table and the lookup index derived from it

use crate::units::definition::{UnitDefinition, UnitSummary};
use crate::units::magnitude::Magnitude;
use lazy_static::lazy_static;
use std::collections::HashMap;
use thiserror::Error;

/// All supported units. Within each magnitude the base unit comes first.
pub static UNITS: [UnitDefinition; 17] = [
    // Length, base unit: meter
    UnitDefinition {
        magnitude: Magnitude::Length,
        singular: "meter",
        plural: "meters",
        alternates: &["m"],
        to_base: |x| x,
        from_base: |x| x,
    },
    UnitDefinition {
        magnitude: Magnitude::Length,
        singular: "kilometer",
        plural: "kilometers",
        alternates: &["km"],
        to_base: |x| x * 1000.0,
        from_base: |x| x / 1000.0,
    },
    UnitDefinition {
        magnitude: Magnitude::Length,
        singular: "centimeter",
        plural: "centimeters",
        alternates: &["cm"],
        to_base: |x| x * 0.01,
        from_base: |x| x / 0.01,
    },
    UnitDefinition {
        magnitude: Magnitude::Length,
        singular: "millimeter",
        plural: "millimeters",
        alternates: &["mm"],
        to_base: |x| x * 0.001,
        from_base: |x| x / 0.001,
    },
    UnitDefinition {
        magnitude: Magnitude::Length,
        singular: "mile",
        plural: "miles",
        alternates: &["mi"],
        to_base: |x| x * 1609.35,
        from_base: |x| x / 1609.35,
    },
    UnitDefinition {
        magnitude: Magnitude::Length,
        singular: "yard",
        plural: "yards",
        alternates: &["yd"],
        to_base: |x| x * 0.9144,
        from_base: |x| x / 0.9144,
    },
    UnitDefinition {
        magnitude: Magnitude::Length,
        singular: "foot",
        plural: "feet",
        alternates: &["ft"],
        to_base: |x| x * 0.3048,
        from_base: |x| x / 0.3048,
    },
    UnitDefinition {
        magnitude: Magnitude::Length,
        singular: "inch",
        plural: "inches",
        alternates: &["in"],
        to_base: |x| x * 0.0254,
        from_base: |x| x / 0.0254,
    },
    // Weight, base unit: gram
    UnitDefinition {
        magnitude: Magnitude::Weight,
        singular: "gram",
        plural: "grams",
        alternates: &["g"],
        to_base: |x| x,
        from_base: |x| x,
    },
    UnitDefinition {
        magnitude: Magnitude::Weight,
        singular: "kilogram",
        plural: "kilograms",
        alternates: &["kg"],
        to_base: |x| x * 1000.0,
        from_base: |x| x / 1000.0,
    },
    UnitDefinition {
        magnitude: Magnitude::Weight,
        singular: "centigram",
        plural: "centigrams",
        alternates: &["cg"],
        to_base: |x| x * 0.01,
        from_base: |x| x / 0.01,
    },
    UnitDefinition {
        magnitude: Magnitude::Weight,
        singular: "milligram",
        plural: "milligrams",
        alternates: &["mg"],
        to_base: |x| x * 0.001,
        from_base: |x| x / 0.001,
    },
    UnitDefinition {
        magnitude: Magnitude::Weight,
        singular: "pound",
        plural: "pounds",
        alternates: &["lb"],
        to_base: |x| x * 453.592,
        from_base: |x| x / 453.592,
    },
    UnitDefinition {
        magnitude: Magnitude::Weight,
        singular: "ounce",
        plural: "ounces",
        alternates: &["oz"],
        to_base: |x| x * 28.3495,
        from_base: |x| x / 28.3495,
    },
    // Temperature, base unit: kelvin
    UnitDefinition {
        magnitude: Magnitude::Temperature,
        singular: "kelvin",
        plural: "kelvins",
        alternates: &["k"],
        to_base: |x| x,
        from_base: |x| x,
    },
    UnitDefinition {
        magnitude: Magnitude::Temperature,
        singular: "degree Celsius",
        plural: "degrees Celsius",
        alternates: &["c", "dc", "celsius"],
        to_base: |x| x + 273.15,
        from_base: |x| x - 273.15,
    },
    UnitDefinition {
        magnitude: Magnitude::Temperature,
        singular: "degree Fahrenheit",
        plural: "degrees Fahrenheit",
        alternates: &["f", "df", "fahrenheit"],
        to_base: |x| (x + 459.67) * 5.0 / 9.0,
        from_base: |x| x * 9.0 / 5.0 - 459.67,
    },
];

lazy_static! {
    /// Index over the built-in table, built on first use
    pub static ref CATALOG: UnitCatalog = UnitCatalog::build(&UNITS)
        .expect("built-in unit table has a duplicated representation");
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Representation '{form}' is used by both {first} and {second}")]
    DuplicateRepresentation {
        form: String,
        first: &'static str,
        second: &'static str,
    },
}

/// Lookup from every accepted string form to its unit
pub struct UnitCatalog {
    units: &'static [UnitDefinition],
    by_repr: HashMap<String, &'static UnitDefinition>,
}

impl UnitCatalog {
    /// Index a unit table. Fails if two units share a representation.
    pub fn build(units: &'static [UnitDefinition]) -> Result<Self, CatalogError> {
        let mut by_repr: HashMap<String, &'static UnitDefinition> = HashMap::new();

        for unit in units {
            for form in unit.representations() {
                if let Some(existing) = by_repr.get(&form) {
                    // Singular and plural may coincide for the same unit
                    if *existing == unit {
                        continue;
                    }
                    return Err(CatalogError::DuplicateRepresentation {
                        form,
                        first: existing.plural,
                        second: unit.plural,
                    });
                }
                by_repr.insert(form, unit);
            }
        }

        Ok(Self { units, by_repr })
    }

    /// Case-insensitive lookup of a singular, plural or alternate form
    pub fn resolve(&self, token: &str) -> Option<&'static UnitDefinition> {
        self.by_repr.get(&token.to_lowercase()).copied()
    }

    /// Units of one magnitude, in table order
    pub fn units_of(&self, magnitude: Magnitude) -> Vec<&'static UnitDefinition> {
        self.units
            .iter()
            .filter(|unit| unit.magnitude == magnitude)
            .collect()
    }

    pub fn units(&self) -> impl Iterator<Item = &'static UnitDefinition> {
        self.units.iter()
    }

    /// The unit whose conversions are the identity for this magnitude
    pub fn base_unit(&self, magnitude: Magnitude) -> Option<&'static UnitDefinition> {
        self.units.iter().find(|unit| {
            unit.magnitude == magnitude && unit.to_base(0.0) == 0.0 && unit.to_base(1.0) == 1.0
        })
    }

    pub fn summaries(&self, magnitude: Option<Magnitude>) -> Vec<UnitSummary> {
        self.units
            .iter()
            .filter(|unit| magnitude.map_or(true, |m| unit.magnitude == m))
            .map(UnitDefinition::summary)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
