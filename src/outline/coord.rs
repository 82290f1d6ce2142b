//! Coordinate formatting

/// Format a coordinate for output, rounded to 3 decimal places
///
/// Integral values are written without a decimal point (`1000`, not
/// `1000.000`). Everything else uses the shortest decimal form of the rounded
/// value. This string is also what contour building compares when deciding
/// whether two points coincide.
///
/// Non-finite values print as `inf`, `-inf` or `NaN`. Extracted numbers are
/// always finite; only relative offsets accumulated past `f64::MAX` get here.
pub fn format_coord(value: f64) -> String {
    let rounded = round3(value);
    if rounded == 0.0 {
        // Avoid "-0"
        return "0".to_string();
    }
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        rounded.to_string()
    }
}

/// Round half-to-even on the exact binary value, 3 decimal places
fn round3(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{:.3}", value).parse().unwrap_or(value)
}

/// Whether two coordinate pairs format identically
pub fn same_position(a: (f64, f64), b: (f64, f64)) -> bool {
    format_coord(a.0) == format_coord(b.0) && format_coord(a.1) == format_coord(b.1)
}
