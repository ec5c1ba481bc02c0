/// Parse cell text as a number.
///
/// Surrounding whitespace is ignored, blank text is not a number and neither
/// is anything that parses to NaN. The only word accepted is `Infinity`
/// (optionally signed, exact case); `inf`, `INF` and the like stay text.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if unsigned.starts_with(|c: char| c.is_ascii_alphabetic()) && unsigned != "Infinity" {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// True if every value is non-empty and parses as a number.
pub fn is_numeric_column<'a>(mut values: impl Iterator<Item = &'a str>) -> bool {
    values.all(|v| parse_number(v).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_accepts_plain_forms() {
        assert_eq!(parse_number("10"), Some(10.0));
        assert_eq!(parse_number(" -2.5 "), Some(-2.5));
        assert_eq!(parse_number("1e3"), Some(1000.0));
        assert_eq!(parse_number(".5"), Some(0.5));
    }

    #[test]
    fn test_parse_number_rejects_text() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("12abc"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn test_only_exact_infinity_is_a_number() {
        assert_eq!(parse_number("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_number("+Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_number(" -Infinity "), Some(f64::NEG_INFINITY));
        assert_eq!(parse_number("1e400"), Some(f64::INFINITY));
        for word in ["inf", "INF", "+inf", "-inf", "infinity", "INFINITY", "nan", "-NaN"] {
            assert_eq!(parse_number(word), None, "{word}");
        }
    }

    #[test]
    fn test_numeric_column_needs_every_value() {
        assert!(is_numeric_column(["1", "2", "3"].into_iter()));
        assert!(!is_numeric_column(["1", "", "3"].into_iter()));
        assert!(!is_numeric_column(["1", "two"].into_iter()));
    }
}
