//! Number formatting for tables and summary cards.

/// Format a number with a comma thousands separator and the given number
/// of decimal places.
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        _ => format!("{:.2}", value),
    };

    let mut parts = formatted.splitn(2, '.');
    let integer_part = parts.next().unwrap_or("0");
    let decimal_part = parts.next();

    // Insert a comma every 3 digits from the end of the integer part
    let mut grouped = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}.{}", grouped, d),
        None => grouped,
    }
}

/// Money amount the way `toLocaleString` shows it: whole rupee amounts
/// without decimals, fractional ones with 2.
pub fn format_amount(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format_number_with_decimals(rounded, 0)
    } else {
        format_number_with_decimals(rounded, 2)
    }
}

/// Rupee amount with the currency sign, e.g. "₹1,234,567".
pub fn format_inr(value: f64) -> String {
    format!("₹{}", format_amount(value))
}

/// Plain record count with thousands separators.
pub fn format_count(value: u64) -> String {
    format_number_with_decimals(value as f64, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(-1234.5, 2), "-1,234.50");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1234567.0), "1,234,567");
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(0.0), "0");
    }

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(2500000.0), "₹2,500,000");
        assert_eq!(format_inr(15.25), "₹15.25");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(12345), "12,345");
    }
}
