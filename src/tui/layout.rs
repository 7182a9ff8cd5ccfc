//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: tab strip, main panel, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Tab strip across the top (view switcher)
    pub tabs: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab strip
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            tabs: vertical[0],
            main: vertical[1],
            status_bar: vertical[2],
        }
    }
}

/// Layout for the register view
pub struct RegisterLayout {
    /// Summary header (count and running total)
    pub header: Rect,
    /// Expense table area
    pub table: Rect,
}

impl RegisterLayout {
    /// Calculate register view layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(3),    // Table
            ])
            .split(area);

        Self {
            header: chunks[0],
            table: chunks[1],
        }
    }
}

/// Layout for the chart view
pub struct ChartLayout {
    /// Bar chart area
    pub chart: Rect,
    /// Summary line under the chart
    pub summary: Rect,
}

impl ChartLayout {
    /// Calculate chart view layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),    // Chart
                Constraint::Length(4), // Summary (totals + per-category shares)
            ])
            .split(area);

        Self {
            chart: chunks[0],
            summary: chunks[1],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fixed() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect_fixed(46, 9, area), Rect::new(27, 15, 46, 9));
    }

    #[test]
    fn test_centered_rect_fixed_clamps_to_small_area() {
        let area = Rect::new(0, 0, 30, 6);
        let dialog = centered_rect_fixed(46, 9, area);
        assert_eq!(dialog, Rect::new(0, 0, 30, 6));
    }

    #[test]
    fn test_centered_rect_percentages() {
        let area = Rect::new(0, 0, 100, 40);
        let dialog = centered_rect(60, 70, area);
        assert_eq!(dialog.width, 60);
        assert_eq!(dialog.height, 28);
        assert_eq!(dialog.x, 20);
        assert_eq!(dialog.y, 6);
    }
}
