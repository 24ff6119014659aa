use anyhow::Result;

use crate::budget::{AmountField, BudgetController};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Currency,
    Budget,
    Expense,
}

impl Focus {
    pub(crate) fn all() -> &'static [Focus] {
        &[Self::Currency, Self::Budget, Self::Expense]
    }

    pub(crate) fn amount_field(self) -> Option<AmountField> {
        match self {
            Self::Currency => None,
            Self::Budget => Some(AmountField::Budget),
            Self::Expense => Some(AmountField::PendingExpense),
        }
    }

    pub(crate) fn next(self) -> Self {
        self.step(1)
    }

    pub(crate) fn prev(self) -> Self {
        self.step(-1)
    }

    fn step(self, delta: isize) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|f| *f == self).unwrap_or(0) as isize;
        all[(idx + delta).rem_euclid(all.len() as isize) as usize]
    }
}

impl std::fmt::Display for Focus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Currency => write!(f, "Currency"),
            Self::Budget => write!(f, "Budget"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) focus: Focus,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) budget: BudgetController,
}

impl App {
    pub(crate) fn new(budget: BudgetController) -> Self {
        Self {
            running: true,
            focus: Focus::Budget,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            budget,
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }

    /// Type into the focused amount field. Rejected keystrokes are dropped.
    pub(crate) fn type_char(&mut self, c: char) -> Result<()> {
        if let Some(field) = self.focus.amount_field() {
            self.budget.push_char(field, c)?;
        }
        Ok(())
    }

    pub(crate) fn backspace(&mut self) -> Result<()> {
        if let Some(field) = self.focus.amount_field() {
            self.budget.pop_char(field)?;
        }
        Ok(())
    }

    pub(crate) fn add_expense(&mut self) -> Result<()> {
        if self.budget.commit_expense()? {
            let msg = format!(
                "Total spent: {}{}",
                self.budget.currency().symbol,
                self.budget.state().total_spent
            );
            self.set_status(msg);
        }
        Ok(())
    }

    pub(crate) fn reset(&mut self) -> Result<()> {
        self.budget.reset()?;
        self.focus = Focus::Budget;
        self.set_status("Budget reset");
        Ok(())
    }
}
