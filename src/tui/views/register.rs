//! Expense register view
//!
//! Shows the expenses recorded this session, newest last

use chrono::{DateTime, Local};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::RegisterLayout;

/// Render the expense register
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = RegisterLayout::new(area);

    // Render header with session summary
    render_header(frame, app, layout.header);

    // Render expense table
    render_expense_table(frame, app, layout.table);
}

/// Render register header
fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Expenses ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let summary = format!(
        "{} recorded this session │ Total: {}",
        app.tracker.len(),
        app.tracker
            .total()
            .format_with_symbol(&app.settings.currency_symbol)
    );

    let paragraph = Paragraph::new(summary)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

/// Render expense table
fn render_expense_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if app.tracker.is_empty() {
        let text = Paragraph::new("No expenses yet. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    // Define column widths
    let widths = [
        Constraint::Length(5),  // Row number
        Constraint::Length(10), // Time entered
        Constraint::Min(15),    // Category
        Constraint::Length(12), // Amount
    ];

    // Header row
    let header = Row::new(vec![
        Cell::from("#").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Time").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    // Data rows
    let rows: Vec<Row> = app
        .tracker
        .expenses()
        .iter()
        .enumerate()
        .map(|(i, expense)| {
            Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                Cell::from(format_time(&expense.entered_at, &app.settings.time_format)),
                Cell::from(truncate_string(&expense.category, 30)),
                Cell::from(
                    expense
                        .amount
                        .format_with_symbol(&app.settings.currency_symbol),
                ),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index));

    frame.render_stateful_widget(table, area, &mut state);
}

/// Format a timestamp with the configured strftime string
///
/// Chrono surfaces malformed format strings as a formatting error, which
/// `to_string` would turn into a panic mid-render; fall back to the default
/// format instead.
fn format_time(at: &DateTime<Local>, fmt: &str) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    match write!(out, "{}", at.format(fmt)) {
        Ok(()) => out,
        Err(_) => at.format("%H:%M:%S").to_string(),
    }
}

/// Truncate a string to a maximum number of characters
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
