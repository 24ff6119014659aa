use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;

use super::app::{App, Focus, InputMode};
use super::commands;
use super::theme;
use super::util::{format_money, format_percent, progress_bar};

const WIDGET_WIDTH: u16 = 56;
const BAR_WIDTH: usize = 40;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(5),    // Widget
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(f.area());

    render_title(f, chunks[0]);
    render_widget(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);
    render_command_bar(f, chunks[3], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        " Quick Budget Calculator ",
        theme::header_style(),
    )))
    .centered()
    .style(theme::header_style());
    f.render_widget(title, area);
}

fn render_widget(f: &mut Frame, area: Rect, app: &App) {
    let width = WIDGET_WIDTH.min(area.width);
    let x = area.x + (area.width - width) / 2;
    let area = Rect::new(x, area.y, width, area.height);

    let state = app.budget.state();
    let view = app.budget.view();
    let currency = app.budget.currency();
    let pct = view.percent_remaining.to_f64().unwrap_or(0.0);
    let color = theme::remaining_color(pct);

    let label = |text: &str| {
        Line::from(Span::styled(
            format!(" {text}"),
            theme::dim_style().add_modifier(Modifier::BOLD),
        ))
    };
    let field = |focus: Focus, value: &str, placeholder: &str| {
        let style = if app.focus == focus {
            theme::focused_style()
        } else {
            theme::normal_style()
        };
        let shown = if value.is_empty() && app.focus != focus {
            Span::styled(placeholder.to_string(), theme::dim_style())
        } else {
            Span::styled(value.to_string(), style)
        };
        Line::from(vec![
            Span::styled(format!(" {} ", currency.symbol), theme::dim_style()),
            shown,
        ])
    };

    let currency_style = if app.focus == Focus::Currency {
        theme::focused_style()
    } else {
        theme::normal_style()
    };

    let mut expense_line = field(Focus::Expense, &state.pending_expense, "Enter new expense");
    expense_line
        .spans
        .push(Span::styled("  [+]", Style::default().fg(theme::GREEN)));

    let lines = vec![
        label("Currency"),
        Line::from(Span::styled(format!(" ◀ {currency} ▶ "), currency_style)),
        Line::from(""),
        label("Budget"),
        field(Focus::Budget, &state.budget, "Enter budget"),
        Line::from(""),
        label("Spent so far"),
        expense_line,
        Line::from(""),
        label("Total Spent"),
        Line::from(vec![
            Span::styled(format!(" {} ", currency.symbol), theme::dim_style()),
            Span::styled(state.total_spent.clone(), theme::readonly_style()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", progress_bar(view.percent_remaining, BAR_WIDTH)),
            Style::default().fg(color),
        )),
        Line::from(Span::styled(
            format!(
                "Remaining: {} ({})",
                format_money(currency.symbol, view.remaining),
                format_percent(view.percent_remaining)
            ),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(""),
        Line::from(Span::styled("↻ Reset: Ctrl-r", theme::dim_style())).centered(),
    ];

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY)),
    );
    f.render_widget(widget, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_style = match app.input_mode {
        InputMode::Normal => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
        InputMode::Command => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::GREEN)
            .add_modifier(Modifier::BOLD),
    };

    let info = format!(" {} | {} ", app.focus, app.budget.currency().code);

    let right = match app.focus {
        Focus::Currency => " ←/→ change | Tab next | ? help ",
        Focus::Budget => " type amount | Tab next | ? help ",
        Focus::Expense => " Enter add | Tab next | ? help ",
    };

    let available = area.width as usize;
    let used = mode_label.len() + info.len() + right.len();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", Style::default().fg(theme::ACCENT)),
                Span::styled(&app.command_input, theme::command_bar_style()),
            ]),
            Some(1 + app.command_input.len() as u16),
        ),
        InputMode::Normal => (
            if app.status_message.is_empty() {
                Line::from(Span::styled(
                    " Press : for commands, ? for help",
                    theme::dim_style(),
                ))
            } else {
                Line::from(Span::styled(
                    &app.status_message,
                    theme::command_bar_style(),
                ))
            },
            None,
        ),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::COMMAND_BG));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let row = |text: &'static str| Line::from(Span::styled(text, theme::normal_style()));

    let mut help_text = vec![
        Line::from(Span::styled(
            " QuickBudget Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        heading(" Fields"),
        row("  Tab/Shift-Tab    Next/Prev field       Up/Down    Next/Prev field"),
        row("  0-9 .            Type amount           Backspace  Delete character"),
        row("  ←/→ (Currency)   Change currency       Ctrl-q     Quit"),
        Line::from(""),
        heading(" Actions"),
        row("  Enter (Expense)  Add expense           +          Add expense"),
        row("  Ctrl-r           Reset amounts         :          Command mode"),
        Line::from(""),
        heading(" Commands"),
    ];

    let mut cmd_lines: Vec<(&str, &str)> = commands::COMMANDS
        .iter()
        .filter(|(name, _)| name.len() > 1) // single-letter aliases
        .map(|(&name, cmd)| (name, cmd.description))
        .collect();
    cmd_lines.sort_by_key(|(name, _)| *name);
    for (name, desc) in &cmd_lines {
        help_text.push(Line::from(Span::styled(
            format!("  :{name:<12} {desc}"),
            theme::normal_style(),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        Style::default().fg(theme::TEXT_DIM),
    )));

    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 72.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup_area);
}
