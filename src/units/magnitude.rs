use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Category of physical quantity. Only units sharing a magnitude convert into each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Magnitude {
    Length,
    Weight,
    Temperature,
}

impl Magnitude {
    pub const ALL: [Magnitude; 3] = [Magnitude::Length, Magnitude::Weight, Magnitude::Temperature];

    /// Values below zero make no sense for this magnitude
    pub fn is_non_negative(&self) -> bool {
        matches!(self, Magnitude::Length | Magnitude::Weight)
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Magnitude::Length => write!(f, "Length"),
            Magnitude::Weight => write!(f, "Weight"),
            Magnitude::Temperature => write!(f, "Temperature"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown magnitude '{0}' (expected length, weight or temperature)")]
pub struct UnknownMagnitude(pub String);

impl FromStr for Magnitude {
    type Err = UnknownMagnitude;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "length" => Ok(Magnitude::Length),
            "weight" => Ok(Magnitude::Weight),
            "temperature" => Ok(Magnitude::Temperature),
            _ => Err(UnknownMagnitude(s.to_string())),
        }
    }
}
