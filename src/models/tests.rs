#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::amount::*;
use super::*;

// ── Input gate ────────────────────────────────────────────────

#[test]
fn test_gate_accepts_empty() {
    assert!(is_valid_input(""));
}

#[test]
fn test_gate_accepts_decimals() {
    assert!(is_valid_input("12"));
    assert!(is_valid_input("12.34"));
    assert!(is_valid_input("12."));
    assert!(is_valid_input(".5"));
    assert!(is_valid_input("."));
}

#[test]
fn test_gate_rejects_second_point() {
    assert!(!is_valid_input("12.3.4"));
    assert!(!is_valid_input(".."));
}

#[test]
fn test_gate_rejects_signs_and_letters() {
    assert!(!is_valid_input("-5"));
    assert!(!is_valid_input("+5"));
    assert!(!is_valid_input("5a"));
    assert!(!is_valid_input(" 5"));
    assert!(!is_valid_input("1e3"));
    assert!(!is_valid_input("1,000"));
}

#[test]
fn test_gate_rejects_non_ascii_digits() {
    // Arabic-Indic digits
    assert!(!is_valid_input("٣"));
}

// ── Leading number parse ──────────────────────────────────────

#[test]
fn test_parse_plain() {
    assert_eq!(parse_leading("42"), Some(dec!(42)));
    assert_eq!(parse_leading("250.5"), Some(dec!(250.5)));
}

#[test]
fn test_parse_partial_forms() {
    assert_eq!(parse_leading("5."), Some(dec!(5)));
    assert_eq!(parse_leading(".5"), Some(dec!(0.5)));
    assert_eq!(parse_leading("-.25"), Some(dec!(-0.25)));
}

#[test]
fn test_parse_ignores_trailing_garbage() {
    assert_eq!(parse_leading("12.3.4"), Some(dec!(12.3)));
    assert_eq!(parse_leading("7abc"), Some(dec!(7)));
    assert_eq!(parse_leading("1e"), Some(dec!(1)));
}

#[test]
fn test_parse_leading_whitespace_and_sign() {
    assert_eq!(parse_leading("  3.5"), Some(dec!(3.5)));
    assert_eq!(parse_leading("-10"), Some(dec!(-10)));
    assert_eq!(parse_leading("+10"), Some(dec!(10)));
}

#[test]
fn test_parse_exponent() {
    assert_eq!(parse_leading("1.5e3"), Some(dec!(1500)));
    assert_eq!(parse_leading("2E+2"), Some(dec!(200)));
    assert_eq!(parse_leading("25e-1"), Some(dec!(2.5)));
}

#[test]
fn test_parse_nothing_numeric() {
    assert_eq!(parse_leading(""), None);
    assert_eq!(parse_leading("."), None);
    assert_eq!(parse_leading("abc"), None);
    assert_eq!(parse_leading("-"), None);
}

#[test]
fn test_parse_overflow_saturates() {
    let huge = "100000000000000000000000000000";
    assert!(is_valid_input(huge));
    assert_eq!(parse_leading(huge), Some(Decimal::MAX));
    assert_eq!(parse_leading("-100000000000000000000000000000"), Some(Decimal::MIN));
    assert_eq!(parse_leading("1e40"), Some(Decimal::MAX));
    assert_eq!(parse_leading("-2.5E99"), Some(Decimal::MIN));
    assert_eq!(numeric("1e40"), Decimal::MAX);
}

#[test]
fn test_parse_underflow_is_zero() {
    assert_eq!(parse_leading("1e-99999"), Some(Decimal::ZERO));
    assert_eq!(parse_leading("0e99999"), Some(Decimal::ZERO));
}

#[test]
fn test_numeric_defaults_to_zero() {
    assert_eq!(numeric(""), Decimal::ZERO);
    assert_eq!(numeric("."), Decimal::ZERO);
    assert_eq!(numeric("x1"), Decimal::ZERO);
    assert_eq!(numeric("12.50"), dec!(12.5));
}

// ── Fixed formatting ──────────────────────────────────────────

#[test]
fn test_format_pads_two_places() {
    assert_eq!(format_fixed2(dec!(250.5)), "250.50");
    assert_eq!(format_fixed2(dec!(1000)), "1000.00");
    assert_eq!(format_fixed2(Decimal::ZERO), "0.00");
}

#[test]
fn test_format_rounds_half_away_from_zero() {
    assert_eq!(format_fixed2(dec!(0.125)), "0.13");
    assert_eq!(format_fixed2(dec!(0.135)), "0.14");
    assert_eq!(format_fixed2(dec!(-0.125)), "-0.13");
    assert_eq!(format_fixed2(dec!(1.234)), "1.23");
}

// ── Currency ──────────────────────────────────────────────────

#[test]
fn test_currency_list_order() {
    let codes: Vec<&str> = Currency::all().iter().map(|c| c.code).collect();
    assert_eq!(
        codes,
        ["USD", "EUR", "JPY", "GBP", "CNY", "AUD", "CAD", "CHF", "HKD", "SGD"]
    );
}

#[test]
fn test_currency_default_is_usd() {
    let usd = Currency::default_ref();
    assert_eq!(usd.code, "USD");
    assert_eq!(usd.symbol, "$");
    assert_eq!(usd.name, "US Dollar");
}

#[test]
fn test_currency_find() {
    let chf = Currency::find("CHF").unwrap();
    assert_eq!(chf.symbol, "Fr");
    assert_eq!(chf.name, "Swiss Franc");
    assert!(Currency::find("XYZ").is_none());
    assert!(Currency::find("usd").is_none());
}

#[test]
fn test_currency_codes_unique() {
    let mut codes: Vec<&str> = Currency::all().iter().map(|c| c.code).collect();
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), Currency::all().len());
}

#[test]
fn test_currency_cycle_wraps() {
    let usd = Currency::default_ref();
    assert_eq!(usd.cycle(1).code, "EUR");
    assert_eq!(usd.cycle(-1).code, "SGD");
    assert_eq!(Currency::find("SGD").unwrap().cycle(1).code, "USD");
}

#[test]
fn test_currency_display() {
    let hkd = Currency::find("HKD").unwrap();
    assert_eq!(format!("{hkd}"), "Hong Kong Dollar (HK$)");
}

#[test]
fn test_currency_record_json_shape() {
    let json = serde_json::to_string(&Currency::find("EUR").unwrap().to_record()).unwrap();
    assert_eq!(json, r#"{"code":"EUR","symbol":"€","name":"Euro"}"#);
}

#[test]
fn test_currency_record_resolve() {
    let record: CurrencyRecord =
        serde_json::from_str(r#"{"code":"JPY","symbol":"¥","name":"Japanese Yen"}"#).unwrap();
    assert_eq!(record.resolve(), Currency::find("JPY"));

    let unknown = CurrencyRecord {
        code: "BTC".into(),
        symbol: "₿".into(),
        name: "Bitcoin".into(),
    };
    assert!(unknown.resolve().is_none());
}
