#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::app::{App, Focus};
use super::commands::handle_command;
use crate::budget::BudgetController;
use crate::store::MemoryStore;

fn app() -> App {
    App::new(BudgetController::mount(Box::new(MemoryStore::new())).unwrap())
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        app.type_char(c).unwrap();
    }
}

// ── Focus ─────────────────────────────────────────────────────

#[test]
fn test_focus_starts_on_budget() {
    assert_eq!(app().focus, Focus::Budget);
}

#[test]
fn test_focus_cycles_both_ways() {
    assert_eq!(Focus::Budget.next(), Focus::Expense);
    assert_eq!(Focus::Expense.next(), Focus::Currency);
    assert_eq!(Focus::Currency.prev(), Focus::Expense);
    assert_eq!(Focus::Budget.prev(), Focus::Currency);
}

// ── Typing ────────────────────────────────────────────────────

#[test]
fn test_typing_goes_through_gate() {
    let mut app = app();
    type_str(&mut app, "12.3.4");
    assert_eq!(app.budget.state().budget, "12.34");
}

#[test]
fn test_typing_on_currency_is_ignored() {
    let mut app = app();
    app.focus = Focus::Currency;
    type_str(&mut app, "55");
    assert_eq!(app.budget.state().budget, "");
    assert_eq!(app.budget.state().pending_expense, "");
}

#[test]
fn test_backspace_edits_focused_field() {
    let mut app = app();
    app.focus = Focus::Expense;
    type_str(&mut app, "42");
    app.backspace().unwrap();
    assert_eq!(app.budget.state().pending_expense, "4");
}

#[test]
fn test_add_expense_sets_status() {
    let mut app = app();
    type_str(&mut app, "100");
    app.focus = Focus::Expense;
    type_str(&mut app, "25");
    app.add_expense().unwrap();
    assert_eq!(app.budget.state().total_spent, "25.00");
    assert_eq!(app.status_message, "Total spent: $25.00");
}

#[test]
fn test_add_expense_empty_keeps_status() {
    let mut app = app();
    app.set_status("hello");
    app.add_expense().unwrap();
    assert_eq!(app.status_message, "hello");
    assert_eq!(app.budget.state().total_spent, "");
}

// ── Commands ──────────────────────────────────────────────────

#[test]
fn test_command_budget_and_spend() {
    let mut app = app();
    handle_command("budget 1000", &mut app).unwrap();
    handle_command("spend 250.5", &mut app).unwrap();
    assert_eq!(app.budget.state().total_spent, "250.50");
    assert_eq!(app.budget.view().remaining, dec!(749.50));
}

#[test]
fn test_command_rejects_bad_amount() {
    let mut app = app();
    handle_command("b 12.3.4", &mut app).unwrap();
    assert_eq!(app.budget.state().budget, "");
    assert_eq!(app.status_message, "Not an amount: 12.3.4");
}

#[test]
fn test_command_spend_without_amount() {
    let mut app = app();
    handle_command("spend", &mut app).unwrap();
    assert_eq!(app.status_message, "Usage: :spend <amount>");
}

#[test]
fn test_command_currency_case_insensitive() {
    let mut app = app();
    handle_command("currency gbp", &mut app).unwrap();
    assert_eq!(app.budget.currency().code, "GBP");
    assert_eq!(app.status_message, "Currency: British Pound (£)");
}

#[test]
fn test_command_unknown_currency() {
    let mut app = app();
    handle_command("c XYZ", &mut app).unwrap();
    assert_eq!(app.budget.currency().code, "USD");
    assert!(app.status_message.starts_with("Choose one of: USD, EUR"));
}

#[test]
fn test_command_reset() {
    let mut app = app();
    handle_command("c EUR", &mut app).unwrap();
    handle_command("budget 50", &mut app).unwrap();
    app.focus = Focus::Expense;
    handle_command("reset", &mut app).unwrap();
    assert_eq!(app.budget.state().budget, "");
    assert_eq!(app.budget.currency().code, "EUR");
    assert_eq!(app.focus, Focus::Budget);
}

#[test]
fn test_command_quit() {
    let mut app = app();
    handle_command("q", &mut app).unwrap();
    assert!(!app.running);
}

#[test]
fn test_command_help() {
    let mut app = app();
    handle_command("help", &mut app).unwrap();
    assert!(app.show_help);
}

#[test]
fn test_unknown_command_suggests() {
    let mut app = app();
    handle_command("spnd 5", &mut app).unwrap();
    assert_eq!(
        app.status_message,
        "Unknown command: :spnd. Did you mean :spend?"
    );
}
