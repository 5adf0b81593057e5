use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

const INPUT_TITLE: &str = " Search medicines ";

/// Single-line search input
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("Type at least two letters...");

        let mut input = Self { textarea };
        input.set_focused(true);
        input
    }

    pub fn query(&self) -> &str {
        self.textarea.lines().first().map_or("", |line| line.as_str())
    }

    /// Replace the whole text, leaving the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.clear();
        self.textarea.insert_str(text);
    }

    pub fn clear(&mut self) {
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
    }

    /// Style the border and cursor for the focused or unfocused state
    pub fn set_focused(&mut self, focused: bool) {
        let border_color = if focused { Color::Cyan } else { Color::DarkGray };
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(INPUT_TITLE)
                .border_style(Style::default().fg(border_color)),
        );

        let cursor_style = if focused {
            Style::default().bg(Color::White)
        } else {
            Style::default()
        };
        self.textarea.set_cursor_style(cursor_style);
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
