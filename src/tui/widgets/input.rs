//! Text input widget
//!
//! A single-line text input with cursor support. The cursor is tracked as a
//! character index so editing stays safe on multibyte input (e.g. "café").

/// A simple text input state
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    content: String,
    /// Cursor position as a character index (0..=char count)
    cursor: usize,
}

impl TextInput {
    /// Create a new empty text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index();
        self.content.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index();
            self.content.remove(idx);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let idx = self.byte_index();
            self.content.remove(idx);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Byte offset of the cursor into the content, for slicing during render
    pub fn byte_index(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map(|(idx, _)| idx)
            .unwrap_or(self.content.len())
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }
}
