/// Format a slider value with two decimals. `-0.00` is printed as `0.00`.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    let text = format!("{:.2}", value);
    if text == "-0.00" {
        "0.00".to_string()
    } else {
        text
    }
}

/// Format an axis tick label, switching to scientific notation for
/// very large or very small magnitudes
pub fn format_axis(value: f64) -> String {
    let abs = value.abs();
    if !value.is_finite() {
        format!("{}", value)
    } else if abs != 0.0 && !(1e-2..1e4).contains(&abs) {
        format!("{:.1e}", value)
    } else if abs >= 100.0 {
        format!("{:.0}", value)
    } else {
        format_value(value)
    }
}

/// Format an inclusive slider range, e.g. `[-5.00, 5.00]`
pub fn format_range(min: f64, max: f64) -> String {
    format!("[{}, {}]", format_value(min), format_value(max))
}
