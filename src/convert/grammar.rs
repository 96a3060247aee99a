use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Shape of a conversion request
    /// Matches: number (optional sign, optional decimals) + optional "degree(s)" + unit
    ///          + connector word + optional "degree(s)" + unit
    /// Examples: "1 km to m", "-3.5 degrees celsius to degrees fahrenheit", "12 in into ft"
    static ref QUERY_PATTERN: Regex = Regex::new(
        r"^-?[0-9]+(\.[0-9]+)? ((?i:degrees?) )?[a-z]+ [a-z]+ ((?i:degrees?) )?[a-z]+$"
    ).unwrap();

    /// Temperature wording removed before splitting into tokens
    static ref DEGREE_WORD: Regex = Regex::new(r"(?i:degrees?) ").unwrap();
}

/// Check whether a lowercase line has the shape of a conversion request
pub fn matches_query(line: &str) -> bool {
    QUERY_PATTERN.is_match(line)
}

/// Whether "degree" or "degrees" appears anywhere in the line
pub fn uses_degree_wording(line: &str) -> bool {
    line.to_lowercase().contains("degree")
}

/// Remove every "degree "/"degrees " occurrence
pub fn strip_degree_wording(line: &str) -> String {
    DEGREE_WORD.replace_all(line, "").into_owned()
}
