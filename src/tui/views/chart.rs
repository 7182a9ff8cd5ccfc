//! Expense distribution chart view
//!
//! Renders per-category totals as a bar chart, largest category first.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::reports::ExpenseDistribution;
use crate::tui::app::App;
use crate::tui::layout::ChartLayout;

/// Render the distribution chart
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let distribution = match ExpenseDistribution::generate(&app.tracker) {
        Ok(distribution) => distribution,
        Err(err) => {
            // Nothing recorded yet; the error message doubles as the
            // empty-state copy
            render_empty(frame, area, &err.to_string());
            return;
        }
    };

    let layout = ChartLayout::new(area);
    render_bars(frame, app, &distribution, layout.chart);
    render_summary(frame, app, &distribution, layout.summary);
}

/// Render the empty-state message
fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .title(" Expense Distribution ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let text = Paragraph::new(message)
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(text, area);
}

/// Render the bar chart itself
fn render_bars(frame: &mut Frame, app: &mut App, distribution: &ExpenseDistribution, area: Rect) {
    let symbol = &app.settings.currency_symbol;

    // A bar needs at least 3 columns plus the gap; when the terminal is too
    // narrow for every category, keep the largest ones
    let inner_width = area.width.saturating_sub(2);
    let max_bars = (inner_width / 4).max(1) as usize;
    let rows = distribution.top(max_bars);

    let bars: Vec<Bar> = rows
        .iter()
        .map(|row| {
            Bar::default()
                .label(Line::from(row.category.clone()))
                .value(row.total.cents() as u64)
                .text_value(row.total.format_with_symbol(symbol))
        })
        .collect();

    let count = rows.len() as u16;
    let bar_width = (inner_width / count.max(1)).saturating_sub(1).clamp(3, 12);

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Expense Distribution ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .label_style(Style::default().fg(Color::White));

    frame.render_widget(chart, area);
}

/// Render the summary under the chart
fn render_summary(
    frame: &mut Frame,
    app: &mut App,
    distribution: &ExpenseDistribution,
    area: Rect,
) {
    let symbol = &app.settings.currency_symbol;

    let totals = format!(
        "{} expenses across {} categories │ Total: {}",
        distribution.expense_count,
        distribution.rows.len(),
        distribution.grand_total.format_with_symbol(symbol)
    );

    // One entry per category, largest first, matching the bar order
    let shares = distribution
        .rows
        .iter()
        .map(|row| {
            format!(
                "{} {} ({:.1}%)",
                row.category,
                row.total.format_with_symbol(symbol),
                row.share
            )
        })
        .collect::<Vec<_>>()
        .join("  ·  ");

    let paragraph = Paragraph::new(vec![Line::from(totals), Line::from(shares)])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}
