//! Input validators shared by the onboarding prompts and the banking menu.

use std::str::FromStr;

use rand::Rng;
use rust_decimal::Decimal;

use crate::error::BankError;

/// Returns the lowercased name when it is non-empty and made only of letters.
pub fn validate_name(input: &str) -> Result<String, BankError> {
    if input.is_empty() {
        return Err(BankError::invalid_argument("Name cannot be blank"));
    }
    if !input.chars().all(char::is_alphabetic) {
        return Err(BankError::invalid_argument("Name can only contain letters"));
    }
    Ok(input.to_lowercase())
}

/// Parses a decimal amount such as `10`, `-10` or `12.50`.
///
/// Text that is not a number is a [`BankError::Format`]; a number outside the
/// range of [`Decimal`] is a [`BankError::Overflow`].
pub fn parse_decimal(input: &str) -> Result<Decimal, BankError> {
    let trimmed = input.trim();
    let literal = normalize_decimal_literal(trimmed).ok_or_else(|| BankError::Format {
        input: trimmed.to_string(),
    })?;
    Decimal::from_str(&literal).map_err(|_| BankError::Overflow {
        input: trimmed.to_string(),
    })
}

/// Rewrites `+1`, `10-`, `1,000`, `.5` and `5.` as `1`, `-10`, `1000`, `0.5`
/// and `5`; `None` when `s` is not a plain decimal literal.
fn normalize_decimal_literal(s: &str) -> Option<String> {
    let (negative, unsigned) = if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else if let Some(rest) = s.strip_suffix('-') {
        (true, rest)
    } else {
        (false, s.strip_suffix('+').unwrap_or(s))
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

    // Group separators only sit between digits of the whole part.
    if whole.starts_with(',') || whole.ends_with(',') || whole.contains(",,") {
        return None;
    }
    let whole = whole.replace(',', "");

    if (whole.is_empty() && fraction.is_empty()) || !all_digits(&whole) || !all_digits(fraction) {
        return None;
    }

    let mut literal = String::with_capacity(s.len() + 1);
    if negative {
        literal.push('-');
    }
    literal.push_str(if whole.is_empty() { "0" } else { &whole });
    if !fraction.is_empty() {
        literal.push('.');
        literal.push_str(fraction);
    }
    Some(literal)
}

/// Uniform integer in `[low, high)` drawn from the thread-local generator.
pub fn random_int_in_range(low: i64, high: i64) -> Result<i64, BankError> {
    random_int_in_range_with(&mut rand::thread_rng(), low, high)
}

/// Same as [`random_int_in_range`] with a caller-supplied generator. An empty
/// range (`low == high`) yields `low`.
pub fn random_int_in_range_with<R: Rng + ?Sized>(
    rng: &mut R,
    low: i64,
    high: i64,
) -> Result<i64, BankError> {
    if low > high {
        return Err(BankError::Range { low, high });
    }
    if low == high {
        return Ok(low);
    }
    Ok(rng.gen_range(low..high))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    #[rstest]
    #[case::capitalised("Jon", "jon")]
    #[case::upper("SMITH", "smith")]
    #[case::non_ascii_letters("Zoë", "zoë")]
    fn test_validate_name(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(validate_name(input).unwrap(), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::digits("jo12")]
    #[case::space("jon smith")]
    #[case::hyphen("mary-jane")]
    fn test_validate_name_rejects(#[case] input: &str) {
        assert!(matches!(
            validate_name(input),
            Err(BankError::InvalidArgument(_))
        ));
    }

    #[rstest]
    #[case::integer("10", Decimal::new(10, 0))]
    #[case::negative("-10", Decimal::new(-10, 0))]
    #[case::fraction("12.50", Decimal::new(1250, 2))]
    #[case::leading_point(".5", Decimal::new(5, 1))]
    #[case::padded("  42\n", Decimal::new(42, 0))]
    #[case::explicit_plus("+7", Decimal::new(7, 0))]
    #[case::trailing_point("5.", Decimal::new(5, 0))]
    #[case::group_separators("1,000", Decimal::new(1000, 0))]
    #[case::grouped_fraction("12,345,678.90", Decimal::new(1234567890, 2))]
    #[case::trailing_minus("10-", Decimal::new(-10, 0))]
    #[case::trailing_plus("10+", Decimal::new(10, 0))]
    fn test_parse_decimal(#[case] input: &str, #[case] expected: Decimal) {
        assert_eq!(parse_decimal(input).unwrap(), expected);
    }

    #[rstest]
    #[case::words("failing input")]
    #[case::empty("")]
    #[case::lone_point(".")]
    #[case::two_points("1.2.3")]
    #[case::currency("$10")]
    #[case::sign_only("-")]
    #[case::both_signs("-10-")]
    #[case::leading_separator(",100")]
    #[case::trailing_separator("100,")]
    #[case::doubled_separator("1,,000")]
    #[case::separator_in_fraction("1.000,5")]
    fn test_parse_decimal_format_error(#[case] input: &str) {
        assert!(matches!(parse_decimal(input), Err(BankError::Format { .. })));
    }

    #[test]
    fn test_parse_decimal_overflow() {
        let huge = "8912737861278361892378912738917289371289127389712893712389893";
        assert!(matches!(parse_decimal(huge), Err(BankError::Overflow { .. })));
    }

    #[test]
    fn test_random_int_in_range_stays_in_bounds() {
        for _ in 0..1000 {
            let value = random_int_in_range(1000, 2001).unwrap();
            assert!((1000..2001).contains(&value));
        }
    }

    #[test]
    fn test_random_int_in_range_with_seeded_rng() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let value = random_int_in_range_with(&mut rng, 1000, 10000).unwrap();
            assert!((1000..10000).contains(&value));
        }
    }

    #[test]
    fn test_random_int_in_range_empty_range() {
        assert_eq!(random_int_in_range(5, 5).unwrap(), 5);
    }

    #[test]
    fn test_random_int_in_range_rejects_inverted_bounds() {
        assert!(matches!(
            random_int_in_range(2000, 1000),
            Err(BankError::Range {
                low: 2000,
                high: 1000
            })
        ));
    }
}
