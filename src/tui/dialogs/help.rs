//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    // Build help text based on current view
    let help_lines = get_help_lines(app);

    let paragraph = Paragraph::new(help_lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Get help lines for the current context
fn get_help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![Span::styled(
            "Global Keys",
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )]),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("a/n", "Add new expense"),
        key_line("1/r", "Switch to Register view"),
        key_line("2/v", "Switch to Chart view"),
        key_line("Esc", "Dismiss status message"),
        Line::from(""),
    ];

    // View-specific help
    match app.active_view {
        ActiveView::Register => {
            lines.push(Line::from(vec![Span::styled(
                "Expense Register",
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::Yellow),
            )]));
            lines.push(Line::from(""));
            lines.push(key_line("j/k", "Move selection up/down"));
            lines.push(key_line("g", "Go to top"));
            lines.push(key_line("G", "Go to bottom"));
        }
        ActiveView::Chart => {
            lines.push(Line::from(vec![Span::styled(
                "Distribution Chart",
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::Yellow),
            )]));
            lines.push(Line::from(""));
            lines.push(Line::from(
                "Bars show the summed spending per category, largest first.",
            ));
            lines.push(Line::from(
                "The chart refreshes as soon as an expense is recorded.",
            ));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
