//! Expense entry dialog
//!
//! Modal dialog for recording a new expense with form fields, tab
//! navigation, validation, and save/cancel functionality.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::Money;
use crate::tui::app::{App, StatusLevel};
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::input::TextInput;

/// Which field is currently focused in the expense form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Category,
    Amount,
}

impl ExpenseField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Category => Self::Amount,
            Self::Amount => Self::Category,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Category => Self::Amount,
            Self::Amount => Self::Category,
        }
    }
}

/// State for the expense form dialog
#[derive(Debug, Clone, Default)]
pub struct ExpenseFormState {
    /// Currently focused field
    pub focused_field: ExpenseField,

    /// Category input
    pub category_input: TextInput,

    /// Amount input
    pub amount_input: TextInput,

    /// Error message to display
    pub error_message: Option<String>,
}

impl ExpenseFormState {
    /// Create a new empty form state
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Get the currently focused input
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            ExpenseField::Category => &mut self.category_input,
            ExpenseField::Amount => &mut self.amount_input,
        }
    }

    /// Validate the form and return any error
    ///
    /// The amount must at least parse as money here; whether it is positive
    /// is checked by the tracker when the record is actually added.
    pub fn validate(&self) -> Result<(), String> {
        if Money::parse(self.amount_input.value().trim()).is_err() {
            return Err("Please enter a valid amount.".to_string());
        }

        Ok(())
    }

    /// Clear any error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }
}

/// Render the expense dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect_fixed(46, 9, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Expense ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);

    // Inner area for content
    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Category
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Buttons
            Constraint::Min(0),    // Remaining
        ])
        .split(inner);

    // Extract values we need from form (to avoid borrow conflicts)
    let category_value = app.expense_form.category_input.value().to_string();
    let category_focused = app.expense_form.focused_field == ExpenseField::Category;
    let category_cursor = app.expense_form.category_input.byte_index();

    let amount_value = app.expense_form.amount_input.value().to_string();
    let amount_focused = app.expense_form.focused_field == ExpenseField::Amount;
    let amount_cursor = app.expense_form.amount_input.byte_index();

    let error_message = app.expense_form.error_message.clone();

    // Render category field
    render_field_simple(
        frame,
        chunks[0],
        "Category",
        &category_value,
        category_focused,
        category_cursor,
        "e.g. food",
    );

    // Render amount field
    render_field_simple(
        frame,
        chunks[1],
        "Amount",
        &amount_value,
        amount_focused,
        amount_cursor,
        "0.00",
    );

    // Render error message if any
    if let Some(ref error) = error_message {
        let error_line = Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(error_line), chunks[3]);
    }

    // Render buttons/hints
    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[4]);
}

/// Render a single form field with extracted values
fn render_field_simple(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    cursor: usize,
    placeholder: &str,
) {
    // Label
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let label_span = Span::styled(format!("{:>8}: ", label), label_style);

    let value_style = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let display_value = if value.is_empty() && !focused {
        placeholder.to_string()
    } else {
        value.to_string()
    };

    let mut spans = vec![label_span];

    if focused {
        // Show value with cursor; the cursor offset is always a char
        // boundary of the content
        let cursor_pos = cursor.min(display_value.len());
        let (before, after) = display_value.split_at(cursor_pos);

        spans.push(Span::styled(before.to_string(), value_style));

        let mut after_chars = after.chars();
        let cursor_char = after_chars.next().unwrap_or(' ');
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));

        let rest = after_chars.as_str();
        if !rest.is_empty() {
            spans.push(Span::styled(rest.to_string(), value_style));
        }
    } else {
        spans.push(Span::styled(display_value, value_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Handle key input for the expense dialog
/// Returns true if the key was handled, false otherwise
pub fn handle_key(app: &mut App, key: crossterm::event::KeyEvent) -> bool {
    use crossterm::event::{KeyCode, KeyModifiers};

    let form = &mut app.expense_form;

    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
            return true;
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                form.prev_field();
            } else {
                form.next_field();
            }
            return true;
        }

        KeyCode::BackTab => {
            form.prev_field();
            return true;
        }

        KeyCode::Down => {
            form.next_field();
            return true;
        }

        KeyCode::Up => {
            form.prev_field();
            return true;
        }

        KeyCode::Enter => {
            if let Err(e) = save_expense(app) {
                app.expense_form.set_error(e);
            }
            return true;
        }

        KeyCode::Backspace => {
            form.clear_error();
            form.focused_input().backspace();
            return true;
        }

        KeyCode::Delete => {
            form.clear_error();
            form.focused_input().delete();
            return true;
        }

        KeyCode::Left => {
            form.focused_input().move_left();
            return true;
        }

        KeyCode::Right => {
            form.focused_input().move_right();
            return true;
        }

        KeyCode::Home => {
            form.focused_input().move_start();
            return true;
        }

        KeyCode::End => {
            form.focused_input().move_end();
            return true;
        }

        KeyCode::Char(c) => {
            form.clear_error();
            form.focused_input().insert(c);
            return true;
        }

        _ => {}
    }

    false
}

/// Save the expense into the tracker
fn save_expense(app: &mut App) -> Result<(), String> {
    // Validate form
    app.expense_form.validate()?;

    let amount = Money::parse(app.expense_form.amount_input.value().trim())
        .map_err(|_| "Please enter a valid amount.".to_string())?;
    // Category labels are free-form and stored exactly as typed
    let category = app.expense_form.category_input.value().to_string();

    // The tracker enforces the positive-amount rule
    app.tracker
        .add(amount, category)
        .map_err(|e| e.to_string())?;

    // Close dialog
    app.close_dialog();
    app.set_status(StatusLevel::Success, "Expense added successfully!");

    Ok(())
}
