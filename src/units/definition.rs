use crate::units::magnitude::Magnitude;
use serde::Serialize;
use std::fmt;

/// A convertible unit. Every conversion goes through the base unit of its magnitude
/// (meter, gram, kelvin).
#[derive(Clone, Copy)]
pub struct UnitDefinition {
    pub magnitude: Magnitude,
    /// Display name used when the amount is exactly one
    pub singular: &'static str,
    /// Display name used for every other amount
    pub plural: &'static str,
    /// Extra input forms (abbreviations, alternate spellings), never displayed
    pub alternates: &'static [&'static str],
    pub to_base: fn(f64) -> f64,
    pub from_base: fn(f64) -> f64,
}

impl UnitDefinition {
    /// Convert an amount in this unit to the base unit of its magnitude
    pub fn to_base(&self, amount: f64) -> f64 {
        (self.to_base)(amount)
    }

    /// Convert an amount in the base unit of this magnitude to this unit
    pub fn from_base(&self, amount: f64) -> f64 {
        (self.from_base)(amount)
    }

    /// Singular name for exactly 1.0, plural otherwise
    pub fn display_name(&self, amount: f64) -> &'static str {
        if amount == 1.0 {
            self.singular
        } else {
            self.plural
        }
    }

    /// Every string this unit answers to, lowercased
    pub fn representations(&self) -> Vec<String> {
        let mut forms = vec![self.singular.to_lowercase(), self.plural.to_lowercase()];
        forms.extend(self.alternates.iter().map(|alt| alt.to_lowercase()));
        forms
    }

    pub fn is_compatible(&self, other: &UnitDefinition) -> bool {
        self.magnitude == other.magnitude
    }

    pub fn summary(&self) -> UnitSummary {
        UnitSummary {
            magnitude: self.magnitude,
            singular: self.singular,
            plural: self.plural,
            alternates: self.alternates.to_vec(),
        }
    }
}

// Display names are unique across the table, so they identify a unit.
impl PartialEq for UnitDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.magnitude == other.magnitude && self.singular == other.singular
    }
}

impl Eq for UnitDefinition {}

impl fmt::Debug for UnitDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitDefinition")
            .field("magnitude", &self.magnitude)
            .field("singular", &self.singular)
            .field("plural", &self.plural)
            .field("alternates", &self.alternates)
            .finish()
    }
}

impl fmt::Display for UnitDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.plural)
    }
}

/// Serializable view of a unit for listings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitSummary {
    pub magnitude: Magnitude,
    pub singular: &'static str,
    pub plural: &'static str,
    pub alternates: Vec<&'static str>,
}

impl fmt::Display for UnitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.singular, self.plural)?;
        if !self.alternates.is_empty() {
            write!(f, " ({})", self.alternates.join(", "))?;
        }
        Ok(())
    }
}
