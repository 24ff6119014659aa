use anyhow::Result;

use crate::budget::BudgetController;
use crate::config::DATA_DIR_ENV;
use crate::models::Currency;
use crate::ui::util::{format_money, format_percent};

pub(crate) fn as_cli(args: &[String], budget: &mut BudgetController) -> Result<()> {
    match args[1].as_str() {
        "status" | "s" => {
            print!("{}", status_report(budget));
            Ok(())
        }
        "budget" | "b" => cli_budget(&args[2..], budget),
        "expense" | "spend" | "e" => cli_expense(&args[2..], budget),
        "currency" | "c" => cli_currency(&args[2..], budget),
        "currencies" => {
            print!("{}", currency_list(budget.currency()));
            Ok(())
        }
        "reset" => {
            budget.reset()?;
            println!("Budget reset (currency kept: {})", budget.currency().code);
            Ok(())
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("quickbudget {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("QuickBudget — track one budget and its expenses");
    println!();
    println!("Usage: quickbudget [--ephemeral] [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  status, s                     Print budget, spending and remaining balance");
    println!("  budget <amount>               Set the budget");
    println!("  expense <amount>              Add an expense to the total spent");
    println!("  currency <CODE>               Select the display currency");
    println!("  currencies                    List available currencies");
    println!("  reset                         Clear budget and expenses (keeps currency)");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Options:");
    println!("  --ephemeral                   Keep state in memory for this run only");
    println!();
    println!("Environment:");
    println!("  {DATA_DIR_ENV:<29} Override the data directory");
    println!("  RUST_LOG                      Log filter (default: quickbudget=info)");
}

fn cli_budget(args: &[String], budget: &mut BudgetController) -> Result<()> {
    let Some(amount) = args.first() else {
        anyhow::bail!("Usage: quickbudget budget <amount>");
    };
    if !budget.set_budget(amount)? {
        eprintln!("Ignored: '{amount}' is not a non-negative decimal amount");
        return Ok(());
    }
    print!("{}", status_report(budget));
    Ok(())
}

fn cli_expense(args: &[String], budget: &mut BudgetController) -> Result<()> {
    let Some(amount) = args.first() else {
        anyhow::bail!("Usage: quickbudget expense <amount>");
    };
    if !budget.set_pending_expense(amount)? {
        eprintln!("Ignored: '{amount}' is not a non-negative decimal amount");
        return Ok(());
    }
    budget.commit_expense()?;
    print!("{}", status_report(budget));
    Ok(())
}

fn cli_currency(args: &[String], budget: &mut BudgetController) -> Result<()> {
    let Some(code) = args.first() else {
        anyhow::bail!("Usage: quickbudget currency <CODE>");
    };
    if budget.select_currency(&code.to_uppercase())? {
        println!("Currency: {}", budget.currency());
    } else {
        eprintln!("Ignored: unknown currency '{code}' (see `quickbudget currencies`)");
    }
    Ok(())
}

pub(crate) fn status_report(budget: &BudgetController) -> String {
    let state = budget.state();
    let view = budget.view();
    let currency = budget.currency();
    let or_dash = |s: &str| if s.is_empty() { "-".to_string() } else { s.to_string() };

    let mut out = String::new();
    out.push_str(&format!("QuickBudget — {currency}\n"));
    out.push_str(&format!("{}\n", "─".repeat(40)));
    out.push_str(&format!("  Budget:      {}\n", or_dash(&state.budget)));
    out.push_str(&format!("  Total Spent: {}\n", or_dash(&state.total_spent)));
    if !state.pending_expense.is_empty() {
        out.push_str(&format!("  Pending:     {}\n", state.pending_expense));
    }
    out.push_str(&format!(
        "  Remaining:   {} ({})\n",
        format_money(currency.symbol, view.remaining),
        format_percent(view.percent_remaining)
    ));
    out
}

pub(crate) fn currency_list(active: &Currency) -> String {
    let mut out = format!("{:<2}{:<6}{:<6}Name\n", "", "Code", "Sym");
    out.push_str(&format!("{}\n", "─".repeat(32)));
    for c in Currency::all() {
        let marker = if c == active { "*" } else { "" };
        out.push_str(&format!("{marker:<2}{:<6}{:<6}{}\n", c.code, c.symbol, c.name));
    }
    out
}
