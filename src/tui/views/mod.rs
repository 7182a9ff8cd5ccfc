//! TUI Views module
//!
//! Contains the two main views (register and chart), the tab strip that
//! switches between them, and the status bar.

pub mod chart;
pub mod register;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
    Frame,
};

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    // Render tab strip
    render_tabs(frame, app, layout.tabs);

    // Render main view based on active view
    match app.active_view {
        ActiveView::Register => {
            register::render(frame, app, layout.main);
        }
        ActiveView::Chart => {
            chart::render(frame, app, layout.main);
        }
    }

    // Render status bar
    status_bar::render(frame, app, layout.status_bar);

    // Render dialog if active
    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &mut App) {
    match app.active_dialog {
        ActiveDialog::AddExpense => {
            dialogs::expense::render(frame, app);
        }
        ActiveDialog::Help => {
            dialogs::help::render(frame, app);
        }
        ActiveDialog::None => {}
    }
}

/// Render the view switcher tabs
fn render_tabs(frame: &mut Frame, app: &mut App, area: Rect) {
    let titles = vec![" Register [1] ", " Chart [2] "];
    let selected = match app.active_view {
        ActiveView::Register => 0,
        ActiveView::Chart => 1,
    };

    let tabs = Tabs::new(titles)
        .block(Block::default().title(" Expense Tracker ").borders(Borders::ALL))
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    frame.render_widget(tabs, area);
}
