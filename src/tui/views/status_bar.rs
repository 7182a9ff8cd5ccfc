//! Status bar view
//!
//! Shows the current status message (or a session summary) and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, StatusLevel};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![];

    if let Some(status) = &app.status_message {
        let color = match status.level {
            StatusLevel::Info => Color::Cyan,
            StatusLevel::Success => Color::Green,
            StatusLevel::Error => Color::Red,
        };
        spans.push(Span::styled(
            format!(" {}", status.text),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    } else {
        spans.push(Span::styled(
            format!(
                " {} expenses │ Total: {}",
                app.tracker.len(),
                app.tracker
                    .total()
                    .format_with_symbol(&app.settings.currency_symbol)
            ),
            Style::default().fg(Color::White),
        ));
    }

    // Key hints (right-aligned)
    let hints = " a:Add  1:Register  2:Chart  ?:Help  q:Quit ";

    // Calculate padding
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));

    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line);

    frame.render_widget(paragraph, area);
}
