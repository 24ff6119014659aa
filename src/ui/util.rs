use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::amount::format_fixed2;

/// Format an amount with a currency symbol, thousand separators and 2 decimal places.
/// e.g. `("€", -1234.5)` → `"-€1,234.50"`
pub(crate) fn format_money(symbol: &str, val: Decimal) -> String {
    let formatted = format_fixed2(val.abs());
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    // Values that round to zero print without a sign.
    if val < Decimal::ZERO && formatted != "0.00" {
        format!("-{symbol}{with_commas}.{dec_part}")
    } else {
        format!("{symbol}{with_commas}.{dec_part}")
    }
}

/// One decimal place, half away from zero. e.g. `74.95` → `"75.0%"`
pub(crate) fn format_percent(pct: Decimal) -> String {
    let rounded = pct.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.1}%")
}

/// Text bar filled to `pct` (0..=100) of `width` cells.
pub(crate) fn progress_bar(pct: Decimal, width: usize) -> String {
    let clamped = pct.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);
    let filled = (clamped * Decimal::from(width) / Decimal::ONE_HUNDRED)
        .floor()
        .to_usize()
        .unwrap_or(0)
        .min(width);
    let empty = width - filled;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
