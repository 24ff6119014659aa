#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;

// ── format_money ──────────────────────────────────────────────

#[test]
fn test_format_money_basic() {
    assert_eq!(format_money("$", dec!(749.5)), "$749.50");
}

#[test]
fn test_format_money_zero() {
    assert_eq!(format_money("$", dec!(0)), "$0.00");
}

#[test]
fn test_format_money_thousands() {
    assert_eq!(format_money("$", dec!(1234567.891)), "$1,234,567.89");
}

#[test]
fn test_format_money_negative() {
    assert_eq!(format_money("$", dec!(-250.5)), "-$250.50");
}

#[test]
fn test_format_money_negative_rounds_to_zero() {
    assert_eq!(format_money("$", dec!(-0.001)), "$0.00");
}

#[test]
fn test_format_money_multichar_symbol() {
    assert_eq!(format_money("HK$", dec!(1000)), "HK$1,000.00");
    assert_eq!(format_money("€", dec!(-1234.5)), "-€1,234.50");
}

#[test]
fn test_format_money_exact_thousand_boundary() {
    assert_eq!(format_money("$", dec!(999.99)), "$999.99");
    assert_eq!(format_money("$", dec!(999.995)), "$1,000.00");
}

// ── format_percent ────────────────────────────────────────────

#[test]
fn test_format_percent_rounds_half_up() {
    assert_eq!(format_percent(dec!(74.95)), "75.0%");
    assert_eq!(format_percent(dec!(74.94)), "74.9%");
}

#[test]
fn test_format_percent_bounds() {
    assert_eq!(format_percent(dec!(0)), "0.0%");
    assert_eq!(format_percent(dec!(100)), "100.0%");
}

// ── progress_bar ──────────────────────────────────────────────

#[test]
fn test_progress_bar_empty() {
    assert_eq!(progress_bar(dec!(0), 4), "[░░░░]");
}

#[test]
fn test_progress_bar_full() {
    assert_eq!(progress_bar(dec!(100), 4), "[████]");
}

#[test]
fn test_progress_bar_partial_floors() {
    assert_eq!(progress_bar(dec!(74.95), 4), "[██░░]");
    assert_eq!(progress_bar(dec!(50), 10), "[█████░░░░░]");
}

#[test]
fn test_progress_bar_out_of_range_clamps() {
    assert_eq!(progress_bar(dec!(150), 3), "[███]");
    assert_eq!(progress_bar(dec!(-5), 3), "[░░░]");
}

#[test]
fn test_progress_bar_zero_width() {
    assert_eq!(progress_bar(dec!(50), 0), "[]");
}
