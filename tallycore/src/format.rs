//! Display formatting for calculator values.
//!
//! The original displayed results with Java's `Double.toString`, which
//! always keeps a fractional part ("5.0", "10.0"). Rust's `Display` for
//! `f64` drops it ("5"), so integral values get an explicit ".0" here;
//! everything else uses Rust's shortest round-trip rendering.

/// Format a value for the display field.
pub fn format_value(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Above 2^53 every f64 is integral anyway and "{:.1}" would print
    // a misleading ".0" tail on huge numbers, so cap the pretty path.
    if n == n.trunc() && n.abs() < 1e15 {
        format!("{:.1}", n)
    } else {
        format!("{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_keep_a_fractional_part() {
        assert_eq!(format_value(5.0), "5.0");
        assert_eq!(format_value(10.0), "10.0");
        assert_eq!(format_value(0.0), "0.0");
        assert_eq!(format_value(-4.0), "-4.0");
        assert_eq!(format_value(1024.0), "1024.0");
    }

    #[test]
    fn fractional_values_render_shortest() {
        assert_eq!(format_value(2.5), "2.5");
        assert_eq!(format_value(0.1), "0.1");
        assert_eq!(format_value(-0.125), "-0.125");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_value(f64::NAN), "NaN");
        assert_eq!(format_value(f64::INFINITY), "Infinity");
        assert_eq!(format_value(f64::NEG_INFINITY), "-Infinity");
    }
}
