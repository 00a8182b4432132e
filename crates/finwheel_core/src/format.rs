//! Display formatting for amounts and shares

/// Whole currency units followed by the currency symbol, e.g. `-600 ₽`.
///
/// The fractional part is truncated toward zero.
pub fn format_amount(value: f64, currency: &str) -> String {
    let units = whole_units(value);
    if currency.is_empty() {
        units
    } else {
        format!("{units} {currency}")
    }
}

/// Integer text of `value` truncated toward zero. Magnitudes beyond `i64`
/// are printed in full rather than saturated.
fn whole_units(value: f64) -> String {
    let truncated = value.trunc();
    if truncated >= i64::MIN as f64 && truncated < i64::MAX as f64 {
        (truncated as i64).to_string()
    } else {
        format!("{truncated:.0}")
    }
}

/// Share as a percentage with one decimal place, e.g. `12.3%`.
pub fn format_percentage(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Text for an amount cell in the operations table.
///
/// Accepts either decimal separator. Integral values lose their fraction,
/// other numbers are shown normalized, and anything unparseable is shown as
/// given.
pub fn format_amount_cell(raw: &str) -> String {
    let normalized = raw.trim().replace(',', ".");
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 => whole_units(value),
        Ok(value) if value.is_finite() => normalized,
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_truncates() {
        assert_eq!(format_amount(-600.0, "₽"), "-600 ₽");
        assert_eq!(format_amount(1234.99, "₽"), "1234 ₽");
        assert_eq!(format_amount(-0.4, "₽"), "0 ₽");
        assert_eq!(format_amount(15.0, ""), "15");
    }

    #[test]
    fn test_format_percentage_one_decimal() {
        assert_eq!(format_percentage(0.123), "12.3%");
        assert_eq!(format_percentage(0.05), "5.0%");
        assert_eq!(format_percentage(1.0), "100.0%");
    }

    #[test]
    fn test_amount_cell_integral_values() {
        assert_eq!(format_amount_cell("-600.0"), "-600");
        assert_eq!(format_amount_cell("42"), "42");
    }

    #[test]
    fn test_amount_cell_normalizes_comma() {
        assert_eq!(format_amount_cell("12,50"), "12.50");
        assert_eq!(format_amount_cell("100,0"), "100");
    }

    #[test]
    fn test_amount_cell_falls_back_to_raw() {
        assert_eq!(format_amount_cell("n/a"), "n/a");
        assert_eq!(format_amount_cell(""), "");
        assert_eq!(format_amount_cell("inf"), "inf");
    }

    #[test]
    fn test_huge_values_are_not_saturated() {
        assert_eq!(format_amount_cell("1e20"), "100000000000000000000");
        assert_eq!(format_amount(-1e20, "₽"), "-100000000000000000000 ₽");
        assert_eq!(format_amount(9.5e18, ""), "9500000000000000000");
    }
}
