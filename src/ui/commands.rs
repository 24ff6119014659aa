use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::App;
use crate::models::Currency;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit QuickBudget", cmd_quit, r);
    register_command!("quit", "Quit QuickBudget", cmd_quit, r);
    register_command!("b", "Set budget (e.g. :b 1000)", cmd_budget, r);
    register_command!("budget", "Set budget (e.g. :budget 1000)", cmd_budget, r);
    register_command!("s", "Add an expense (e.g. :s 12.50)", cmd_spend, r);
    register_command!("spend", "Add an expense (e.g. :spend 12.50)", cmd_spend, r);
    register_command!("c", "Select currency (e.g. :c EUR)", cmd_currency, r);
    register_command!(
        "currency",
        "Select currency (e.g. :currency EUR)",
        cmd_currency,
        r
    );
    register_command!("reset", "Clear budget and expenses", cmd_reset, r);
    register_command!("h", "Show help", cmd_help, r);
    register_command!("help", "Show help", cmd_help, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_budget(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :budget <amount>");
        return Ok(());
    }
    if app.budget.set_budget(args)? {
        app.set_status(format!("Budget: {}{args}", app.budget.currency().symbol));
    } else {
        app.set_status(format!("Not an amount: {args}"));
    }
    Ok(())
}

fn cmd_spend(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :spend <amount>");
        return Ok(());
    }
    if !app.budget.set_pending_expense(args)? {
        app.set_status(format!("Not an amount: {args}"));
        return Ok(());
    }
    app.add_expense()
}

fn cmd_currency(args: &str, app: &mut App) -> anyhow::Result<()> {
    let code = args.to_uppercase();
    if app.budget.select_currency(&code)? {
        app.set_status(format!("Currency: {}", app.budget.currency()));
    } else {
        let codes: Vec<&str> = Currency::all().iter().map(|c| c.code).collect();
        app.set_status(format!("Choose one of: {}", codes.join(", ")));
    }
    Ok(())
}

fn cmd_reset(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.reset()
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}
