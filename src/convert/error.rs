use crate::units::Magnitude;
use thiserror::Error;

/// Placeholder shown for a unit token that did not resolve
pub const UNKNOWN_UNIT: &str = "???";

/// Why a line was rejected. The display text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("Parse error")]
    Parse,

    /// Units unknown or of different magnitudes. Each side holds the plural name,
    /// or `???` when the token did not resolve.
    #[error("Conversion from {source_unit} to {target_unit} is impossible")]
    Impossible {
        source_unit: String,
        target_unit: String,
    },

    #[error("{0} shouldn't be negative")]
    NegativeValue(Magnitude),
}

pub type ConvertResult<T> = Result<T, ConvertError>;
