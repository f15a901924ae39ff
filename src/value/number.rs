/// Largest magnitude below which every integral `f64` is exact.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Shortest text for `value`: integral values without a fraction, others via
/// `ryu`. Non-finite values print as `null`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "null".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if let Some(integer) = as_exact_i64(value) {
        let mut buffer = itoa::Buffer::new();
        return buffer.format(integer).to_string();
    }
    let mut buffer = ryu::Buffer::new();
    buffer.format_finite(value).to_string()
}

/// `value` as an integer, when it is integral and exactly representable.
pub fn as_exact_i64(value: f64) -> Option<i64> {
    if value.fract() == 0.0 && value.abs() < MAX_SAFE_INTEGER {
        Some(value as i64)
    } else {
        None
    }
}

/// Interprets the digit text of a number node.
pub fn parse_number_text(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok()
}
