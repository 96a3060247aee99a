// Turns a free-text line into a validated conversion and its reply

pub mod error;
pub mod formatter;
pub mod grammar;
pub mod parser;
pub mod request;


pub use error::*;
pub use formatter::*;
pub use parser::{parse_request, parse_request_with, QueryTokens};
pub use request::*;

use tracing::debug;

/// Convert one line, already lowercased, into the reply line
pub fn convert_line(line: &str) -> ConvertResult<Conversion> {
    let request = parse_request(line)?;
    let conversion = request.execute();
    debug!(
        source = request.source.singular,
        target = request.target.singular,
        amount = request.amount,
        converted = conversion.converted,
        "converted"
    );
    Ok(conversion)
}

/// Lowercase a raw line and produce the text to show: the result or the error message
pub fn process_line(raw: &str) -> String {
    let line = raw.to_lowercase();
    match convert_line(&line) {
        Ok(conversion) => conversion.to_string(),
        Err(e) => e.to_string(),
    }
}
