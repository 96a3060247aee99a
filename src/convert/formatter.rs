/// Default rendering of an f64, always with a fractional part ("1.0", "0.001", "-272.15")
pub fn format_amount(value: f64) -> String {
    format!("{:?}", value)
}
