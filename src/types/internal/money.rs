use thiserror::Error;

/// Fixed-point money handling.
///
/// Amounts cross the API as decimal strings ("3000", "3000.50") and are
/// stored and summed as integer cents. No floating point is involved at any
/// step, so grouped sums over currency columns are exact.

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    #[error("amount is empty")]
    Empty,

    #[error("amount '{0}' is not a decimal number")]
    NotANumber(String),

    #[error("amount '{0}' has more than two decimal places")]
    TooPrecise(String),

    #[error("amount '{0}' is out of range")]
    OutOfRange(String),
}

/// Parse a decimal string into integer cents.
///
/// Accepts an optional leading minus, up to two fractional digits.
pub fn parse_amount(raw: &str) -> Result<i64, AmountParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AmountParseError::Empty);
    }

    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let (whole, frac) = match digits.split_once('.') {
        Some((w, f)) => (w, f),
        None => (digits, ""),
    };

    if whole.is_empty() && frac.is_empty() {
        return Err(AmountParseError::NotANumber(raw.to_string()));
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
        return Err(AmountParseError::NotANumber(raw.to_string()));
    }
    if frac.len() > 2 {
        return Err(AmountParseError::TooPrecise(raw.to_string()));
    }

    let whole_part: i64 = if whole.is_empty() {
        0
    } else {
        whole
            .parse()
            .map_err(|_| AmountParseError::OutOfRange(raw.to_string()))?
    };

    let frac_cents: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().map_err(|_| AmountParseError::NotANumber(raw.to_string()))? * 10,
        _ => frac.parse::<i64>().map_err(|_| AmountParseError::NotANumber(raw.to_string()))?,
    };

    let cents = whole_part
        .checked_mul(100)
        .and_then(|c| c.checked_add(frac_cents))
        .ok_or_else(|| AmountParseError::OutOfRange(raw.to_string()))?;

    Ok(if negative { -cents } else { cents })
}

/// Render integer cents as a two-decimal string ("3000.00").
pub fn format_amount(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_amounts() {
        assert_eq!(parse_amount("3000"), Ok(300_000));
        assert_eq!(parse_amount("0"), Ok(0));
    }

    #[test]
    fn parses_fractional_amounts() {
        assert_eq!(parse_amount("3000.50"), Ok(300_050));
        assert_eq!(parse_amount("0.5"), Ok(50));
        assert_eq!(parse_amount(".75"), Ok(75));
    }

    #[test]
    fn parses_negative_amounts() {
        assert_eq!(parse_amount("-12.34"), Ok(-1234));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(parse_amount("A"), Err(AmountParseError::NotANumber(_))));
        assert!(matches!(parse_amount("12,5"), Err(AmountParseError::NotANumber(_))));
        assert!(matches!(parse_amount(""), Err(AmountParseError::Empty)));
        assert!(matches!(parse_amount("."), Err(AmountParseError::NotANumber(_))));
    }

    #[test]
    fn rejects_excess_precision() {
        assert!(matches!(parse_amount("1.234"), Err(AmountParseError::TooPrecise(_))));
    }

    #[test]
    fn formats_two_decimals() {
        assert_eq!(format_amount(300_000), "3000.00");
        assert_eq!(format_amount(300_050), "3000.50");
        assert_eq!(format_amount(5), "0.05");
        assert_eq!(format_amount(-1234), "-12.34");
    }

    #[test]
    fn round_trips_through_cents() {
        for raw in ["3000", "800", "500.25"] {
            let cents = parse_amount(raw).unwrap();
            assert_eq!(parse_amount(&format_amount(cents)), Ok(cents));
        }
    }
}
