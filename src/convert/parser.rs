use crate::convert::error::{ConvertError, ConvertResult, UNKNOWN_UNIT};
use crate::convert::grammar::{matches_query, strip_degree_wording, uses_degree_wording};
use crate::convert::request::ConversionRequest;
use crate::units::{Magnitude, UnitCatalog, UnitDefinition, CATALOG};
use tracing::debug;

/// Tokens of a request line once the temperature wording is gone
#[derive(Debug, Clone, PartialEq)]
pub struct QueryTokens {
    pub amount: String,
    pub source: String,
    pub target: String,
    /// "degree"/"degrees" appeared somewhere on the line
    pub degree_wording: bool,
}

/// Parse one lowercase line against the built-in catalog
pub fn parse_request(line: &str) -> ConvertResult<ConversionRequest> {
    parse_request_with(&CATALOG, line)
}

/// Parse and validate one lowercase line into a request
pub fn parse_request_with(catalog: &UnitCatalog, line: &str) -> ConvertResult<ConversionRequest> {
    if !matches_query(line) {
        debug!(line, "line does not match the request grammar");
        return Err(ConvertError::Parse);
    }

    let tokens = tokenize(line)?;
    let (source, target) = resolve_units(catalog, &tokens.source, &tokens.target)?;

    if tokens.degree_wording
        && (source.magnitude != Magnitude::Temperature
            || target.magnitude != Magnitude::Temperature)
    {
        debug!(line, "degree wording used with non-temperature units");
        return Err(ConvertError::Parse);
    }

    let amount = tokens
        .amount
        .parse::<f64>()
        .map_err(|_| ConvertError::Parse)?;
    check_amount(amount, source)?;

    Ok(ConversionRequest {
        amount,
        source,
        target,
    })
}

/// Split a line that already matched the grammar into amount, source and target
pub fn tokenize(line: &str) -> ConvertResult<QueryTokens> {
    let degree_wording = uses_degree_wording(line);
    let stripped = strip_degree_wording(line);
    let parts: Vec<&str> = stripped.split(' ').collect();

    match parts.as_slice() {
        [amount, source, _connector, target] => Ok(QueryTokens {
            amount: amount.to_string(),
            source: source.to_string(),
            target: target.to_string(),
            degree_wording,
        }),
        _ => {
            debug!(line, tokens = parts.len(), "expected exactly four tokens");
            Err(ConvertError::Parse)
        }
    }
}

/// Resolve both unit tokens and require a shared magnitude
pub fn resolve_units(
    catalog: &UnitCatalog,
    source: &str,
    target: &str,
) -> ConvertResult<(&'static UnitDefinition, &'static UnitDefinition)> {
    let source_unit = catalog.resolve(source);
    let target_unit = catalog.resolve(target);

    match (source_unit, target_unit) {
        (Some(s), Some(t)) if s.is_compatible(t) => Ok((s, t)),
        _ => {
            debug!(source, target, "units unknown or of different magnitudes");
            Err(ConvertError::Impossible {
                source_unit: plural_or_placeholder(source_unit),
                target_unit: plural_or_placeholder(target_unit),
            })
        }
    }
}

/// Length and weight amounts must not be negative
pub fn check_amount(amount: f64, source: &UnitDefinition) -> ConvertResult<()> {
    if amount < 0.0 && source.magnitude.is_non_negative() {
        return Err(ConvertError::NegativeValue(source.magnitude));
    }
    Ok(())
}

fn plural_or_placeholder(unit: Option<&UnitDefinition>) -> String {
    unit.map(|u| u.plural).unwrap_or(UNKNOWN_UNIT).to_string()
}
