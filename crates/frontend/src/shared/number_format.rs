//! pt-BR number formatting (R$ 1.234,56)

const NBSP: char = '\u{00a0}';

/// How a metric value is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// Brazilian real, two decimals
    Money,
    /// Plain number, up to three decimals
    Number,
    /// Count of items, no decimals
    Integer,
}

pub fn format_value(value: f64, format: ValueFormat) -> String {
    match format {
        ValueFormat::Money => format_brl(value),
        ValueFormat::Number => format_number(value),
        ValueFormat::Integer => format_fixed(value, 0),
    }
}

/// `R$ 1.234,56`
pub fn format_brl(value: f64) -> String {
    let formatted = format_fixed(value.abs(), 2);
    if is_negative(value, &formatted) {
        format!("-R${}{}", NBSP, formatted)
    } else {
        format!("R${}{}", NBSP, formatted)
    }
}

/// `1.234,5` (at most three decimals, trailing zeros dropped)
pub fn format_number(value: f64) -> String {
    let formatted = format_fixed(value, 3);
    match formatted.split_once(',') {
        Some((int_part, frac)) => {
            let frac = frac.trim_end_matches('0');
            if frac.is_empty() {
                int_part.to_string()
            } else {
                format!("{},{}", int_part, frac)
            }
        }
        None => formatted,
    }
}

/// Axis labels: `1,2M`, `3,4K`, `950`
pub fn format_compact(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0).replace('.', ",")
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0).replace('.', ",")
    } else {
        format!("{:.0}", value)
    }
}

/// Fixed decimals with `.` as thousands separator and `,` as decimal mark
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let raw = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let body = match frac_part {
        Some(frac) => format!("{},{}", grouped, frac),
        None => grouped,
    };

    if is_negative(value, &body) {
        format!("-{}", body)
    } else {
        body
    }
}

// "-0,00" is printed as "0,00"
fn is_negative(value: f64, formatted: &str) -> bool {
    value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(0.0, 2), "0,00");
        assert_eq!(format_fixed(999.0, 0), "999");
        assert_eq!(format_fixed(1234.567, 2), "1.234,57");
        assert_eq!(format_fixed(1234567.0, 0), "1.234.567");
        assert_eq!(format_fixed(-1234.5, 1), "-1.234,5");
        assert_eq!(format_fixed(-0.001, 2), "0,00");
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(1234.56), "R$\u{a0}1.234,56");
        assert_eq!(format_brl(0.0), "R$\u{a0}0,00");
        assert_eq!(format_brl(-10.5), "-R$\u{a0}10,50");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234.0), "1.234");
        assert_eq!(format_number(1234.5), "1.234,5");
        assert_eq!(format_number(0.1234), "0,123");
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(2_500_000.0), "2,5M");
        assert_eq!(format_compact(1_000.0), "1,0K");
        assert_eq!(format_compact(15_430.0), "15,4K");
        assert_eq!(format_compact(950.4), "950");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(42.0, ValueFormat::Integer), "42");
        assert_eq!(format_value(1500.0, ValueFormat::Money), "R$\u{a0}1.500,00");
        assert_eq!(format_value(2.25, ValueFormat::Number), "2,25");
    }
}
