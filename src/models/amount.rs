use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};

// Literal patterns; ASCII classes because `\d` would need the unicode tables.
#[allow(clippy::expect_used)]
static INPUT_GATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*\.?[0-9]*$").expect("valid input gate pattern"));

#[allow(clippy::expect_used)]
static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
        .expect("valid leading number pattern")
});

/// Whether `text` may be stored in an amount field.
/// Empty text is always allowed so a field can be cleared.
pub fn is_valid_input(text: &str) -> bool {
    text.is_empty() || INPUT_GATE.is_match(text)
}

/// Parse the longest numeric prefix of `s`, ignoring leading whitespace and
/// anything after the number. Returns `None` only when there is no prefix.
/// Magnitudes past `Decimal`'s range saturate to `Decimal::MAX`/`MIN`; ones
/// too small to represent become zero.
pub fn parse_leading(s: &str) -> Option<Decimal> {
    let m = LEADING_NUMBER.find(s.trim_start())?;
    let text = m.as_str();
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(pos) => (&text[..pos], Some(&text[pos + 1..])),
        None => (text, None),
    };

    let (negative, digits) = match mantissa.as_bytes().first() {
        Some(b'-') => (true, &mantissa[1..]),
        Some(b'+') => (false, &mantissa[1..]),
        _ => (false, mantissa),
    };
    // "5." and ".5" are valid prefixes but not valid `Decimal` literals.
    let digits = digits.trim_end_matches('.');
    let mut normalized = String::with_capacity(digits.len() + 2);
    if negative {
        normalized.push('-');
    }
    if digits.starts_with('.') {
        normalized.push('0');
    }
    normalized.push_str(digits);

    let exp = exponent.map(|e| e.trim_start_matches('+'));
    let parsed = match exp {
        Some(exp) => Decimal::from_scientific(&format!("{normalized}e{exp}")),
        None => Decimal::from_str(&normalized),
    };
    Some(parsed.unwrap_or_else(|_| out_of_range(negative, digits, exp)))
}

/// The matched prefix is well-formed, so a failed parse means it is out of
/// range: too many integer digits, or an exponent too far either way.
fn out_of_range(negative: bool, digits: &str, exp: Option<&str>) -> Decimal {
    if !digits.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        return Decimal::ZERO;
    }
    let int_digits = digits
        .split('.')
        .next()
        .unwrap_or("")
        .trim_start_matches('0')
        .len() as i64;
    let exp = match exp {
        None => 0,
        Some(e) => e.parse::<i64>().unwrap_or(if e.starts_with('-') {
            i64::MIN / 2
        } else {
            i64::MAX / 2
        }),
    };
    if int_digits.saturating_add(exp) <= 0 {
        Decimal::ZERO
    } else if negative {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

/// Numeric value of an amount field; unparsable or empty is zero.
pub fn numeric(s: &str) -> Decimal {
    parse_leading(s).unwrap_or(Decimal::ZERO)
}

/// Round half away from zero and render with exactly two decimals.
pub fn format_fixed2(val: Decimal) -> String {
    let rounded = val.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}
