//! Amount input handling and fixed-point token amounts.
//!
//! Amounts travel through the form as human-readable decimal strings. For
//! arithmetic they are parsed into integer base units (`value * 10^decimals`)
//! held in a `U256`, and formatted back for display.

use alloy::primitives::U256;
use thiserror::Error;

/// Largest precision whose scale factor still fits in a `U256`.
pub const MAX_DECIMALS: u8 = 77;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,
    #[error("invalid character {0:?} in amount")]
    InvalidCharacter(char),
    #[error("amount has more than one decimal separator")]
    MultipleSeparators,
    #[error("amount does not fit in 256 bits")]
    Overflow,
    #[error("unsupported token precision: {0} decimals")]
    UnsupportedDecimals(u8),
}

/// Restrict raw user input to digits and a single decimal point.
///
/// Every character other than `0-9` and `.` is dropped; of the remaining
/// points only the first is kept. `"12.3.4.5"` becomes `"12.345"`.
pub fn sanitize_amount(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut seen_point = false;
    for c in raw.chars() {
        match c {
            '0'..='9' => out.push(c),
            '.' if !seen_point => {
                seen_point = true;
                out.push('.');
            }
            _ => {}
        }
    }
    out
}

/// Parse a decimal string into base units at the given precision.
///
/// A missing integer or fractional part counts as zero, so `"."`, `"5."` and
/// `".5"` all parse. Fractional digits beyond `decimals` are truncated.
pub fn parse_token_amount(value: &str, decimals: u8) -> Result<U256, AmountError> {
    if decimals > MAX_DECIMALS {
        return Err(AmountError::UnsupportedDecimals(decimals));
    }
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }

    let (int_part, frac_part) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    if frac_part.contains('.') {
        return Err(AmountError::MultipleSeparators);
    }
    if let Some(c) = int_part
        .chars()
        .chain(frac_part.chars())
        .find(|c| !c.is_ascii_digit())
    {
        return Err(AmountError::InvalidCharacter(c));
    }

    let dec = decimals as usize;
    let mut digits = String::with_capacity(int_part.len() + dec);
    digits.push_str(int_part);
    // ASCII digits only past this point, byte slicing is safe
    let kept = &frac_part[..frac_part.len().min(dec)];
    digits.push_str(kept);
    digits.extend(std::iter::repeat('0').take(dec - kept.len()));

    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(U256::ZERO);
    }
    U256::from_str_radix(digits, 10).map_err(|_| AmountError::Overflow)
}

/// Format base units for display: thousands separators on the integer part,
/// trailing fractional zeros trimmed, no fractional part for whole values.
pub fn format_token_amount(units: U256, decimals: u8) -> String {
    let digits = units.to_string();
    let dec = decimals as usize;

    let (int_part, frac_part) = if digits.len() > dec {
        let (i, f) = digits.split_at(digits.len() - dec);
        (i.to_string(), f.to_string())
    } else {
        ("0".to_string(), format!("{}{}", "0".repeat(dec - digits.len()), digits))
    };

    let frac_trimmed = frac_part.trim_end_matches('0');
    let int_formatted = add_thousand_separators(&int_part);
    if frac_trimmed.is_empty() {
        int_formatted
    } else {
        format!("{}.{}", int_formatted, frac_trimmed)
    }
}

/// Format a decimal balance string at the token's precision.
/// Unparseable input is returned as-is.
pub fn format_token_balance(value: &str, decimals: u8) -> String {
    match parse_token_amount(value, decimals) {
        Ok(units) => format_token_amount(units, decimals),
        Err(_) => value.to_string(),
    }
}

/// `max(0, balance - amount)` in base units.
pub fn remaining_after_transfer(
    balance: &str,
    amount: &str,
    decimals: u8,
) -> Result<U256, AmountError> {
    let balance = parse_token_amount(balance, decimals)?;
    let amount = parse_token_amount(amount, decimals)?;
    Ok(balance.saturating_sub(amount))
}

fn add_thousand_separators(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(chars.len() + chars.len() / 3);

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_examples() {
        assert_eq!(sanitize_amount("12.3.4.5"), "12.345");
        assert_eq!(sanitize_amount("ab12.3cd"), "12.3");
        assert_eq!(sanitize_amount(""), "");
        assert_eq!(sanitize_amount("1,000.50 XLM"), "1000.50");
        assert_eq!(sanitize_amount("..5"), ".5");
        assert_eq!(sanitize_amount("-7"), "7");
    }

    #[test]
    fn test_sanitize_drops_non_ascii_digits() {
        // Arabic-Indic and full-width digits are not ASCII digits
        assert_eq!(sanitize_amount("٣4５"), "4");
    }

    #[test]
    fn test_parse_whole_and_fractional() {
        assert_eq!(parse_token_amount("10", 7).unwrap(), U256::from(100_000_000u64));
        assert_eq!(parse_token_amount("42.5", 7).unwrap(), U256::from(425_000_000u64));
        assert_eq!(parse_token_amount("0.0000001", 7).unwrap(), U256::from(1u64));
        assert_eq!(parse_token_amount("7", 0).unwrap(), U256::from(7u64));
    }

    #[test]
    fn test_parse_lone_and_trailing_point_is_zero_based() {
        assert_eq!(parse_token_amount(".", 7).unwrap(), U256::ZERO);
        assert_eq!(parse_token_amount("5.", 2).unwrap(), U256::from(500u64));
        assert_eq!(parse_token_amount(".5", 2).unwrap(), U256::from(50u64));
    }

    #[test]
    fn test_parse_truncates_excess_precision() {
        assert_eq!(parse_token_amount("1.129", 2).unwrap(), U256::from(112u64));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_token_amount("", 7), Err(AmountError::Empty));
        assert_eq!(parse_token_amount("   ", 7), Err(AmountError::Empty));
        assert_eq!(parse_token_amount("1.2.3", 7), Err(AmountError::MultipleSeparators));
        assert_eq!(parse_token_amount("1e5", 7), Err(AmountError::InvalidCharacter('e')));
        assert_eq!(parse_token_amount("1", 78), Err(AmountError::UnsupportedDecimals(78)));
        let huge = "9".repeat(90);
        assert_eq!(parse_token_amount(&huge, 0), Err(AmountError::Overflow));
    }

    #[test]
    fn test_format_token_amount() {
        assert_eq!(format_token_amount(U256::ZERO, 7), "0");
        assert_eq!(format_token_amount(U256::ZERO, 0), "0");
        assert_eq!(format_token_amount(U256::from(425_000_000u64), 7), "42.5");
        assert_eq!(format_token_amount(U256::from(1u64), 7), "0.0000001");
        assert_eq!(format_token_amount(U256::from(12_345_671_000_000u64), 7), "1,234,567.1");
        assert_eq!(format_token_amount(U256::from(1_000u64), 0), "1,000");
    }

    #[test]
    fn test_format_token_balance_falls_back_to_raw() {
        assert_eq!(format_token_balance("1000000", 7), "1,000,000");
        assert_eq!(format_token_balance("n/a", 7), "n/a");
    }

    #[test]
    fn test_remaining_is_clamped() {
        assert_eq!(remaining_after_transfer("10", "15", 7).unwrap(), U256::ZERO);
        assert_eq!(
            remaining_after_transfer("10", "2.5", 7).unwrap(),
            U256::from(75_000_000u64)
        );
    }
}
