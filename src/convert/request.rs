use crate::convert::formatter::format_amount;
use crate::units::UnitDefinition;
use std::fmt;

/// A validated request: amount plus two units of the same magnitude
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest {
    pub amount: f64,
    pub source: &'static UnitDefinition,
    pub target: &'static UnitDefinition,
}

impl ConversionRequest {
    /// Route the amount through the base unit of the shared magnitude
    pub fn execute(&self) -> Conversion {
        let converted = self.target.from_base(self.source.to_base(self.amount));
        Conversion {
            amount: self.amount,
            source: self.source,
            converted,
            target: self.target,
        }
    }
}

/// Result of running a request; displays as the reply line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub amount: f64,
    pub source: &'static UnitDefinition,
    pub converted: f64,
    pub target: &'static UnitDefinition,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} is {} {}",
            format_amount(self.amount),
            self.source.display_name(self.amount),
            format_amount(self.converted),
            self.target.display_name(self.converted)
        )
    }
}
