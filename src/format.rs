/// Parses a display amount: tolerates surrounding whitespace, thousands
/// separators, and common currency symbols. Unparseable input is 0.0.
pub fn parse_amount(value: &str) -> f64 {
    let cleaned: String = value
        .trim()
        .chars()
        .filter(|ch| !matches!(ch, ',' | '¥' | '￥' | '€' | '$'))
        .collect();
    cleaned.trim().parse::<f64>().unwrap_or(0.0)
}

/// Two decimals with thousand grouping: 1234567.891 -> "1,234,567.89".
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (position, digit) in whole.chars().enumerate() {
        if position > 0 && (whole.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{fraction:02}")
}

/// Ratio to percent text: 0.1234 -> "12.34%".
pub fn format_percent(ratio: f64) -> String {
    if !ratio.is_finite() {
        return String::new();
    }
    format!("{:.2}%", ratio * 100.0)
}

/// CSS class for coloring a signed change; the UI theme maps the class to
/// its gain/loss colors.
pub fn trend_class(value: f64) -> &'static str {
    if !value.is_finite() || value == 0.0 {
        "flat"
    } else if value > 0.0 {
        "up"
    } else {
        "down"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_strips_separators_and_symbols() {
        assert_eq!(parse_amount("1,234.56"), 1234.56);
        assert_eq!(parse_amount(" ¥1,000 "), 1000.0);
        assert_eq!(parse_amount("$ 12.5"), 12.5);
        assert_eq!(parse_amount("-42"), -42.0);
        assert_eq!(parse_amount("n/a"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
    }

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(-9876.5), "-9,876.50");
        assert_eq!(format_amount(999.999), "1,000.00");
        assert_eq!(format_amount(f64::NAN), "");
    }

    #[test]
    fn format_percent_scales_ratio() {
        assert_eq!(format_percent(0.1234), "12.34%");
        assert_eq!(format_percent(-0.05), "-5.00%");
        assert_eq!(format_percent(0.0), "0.00%");
        assert_eq!(format_percent(f64::INFINITY), "");
    }

    #[test]
    fn trend_class_follows_sign() {
        assert_eq!(trend_class(12.3), "up");
        assert_eq!(trend_class(-0.01), "down");
        assert_eq!(trend_class(0.0), "flat");
        assert_eq!(trend_class(f64::NAN), "flat");
    }
}
