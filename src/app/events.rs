use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::mouse_click::handle_click;
use super::state::{App, Focus};
use crate::autocomplete::KeyOutcome;
use crate::layout::region_at;

impl App {
    /// Route one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::Page => self.handle_page_key(key),
        }
        self.sync_from_controller();
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let region = region_at(&self.layout_regions, mouse.column, mouse.row);
        handle_click(self, region, mouse);
        self.sync_from_controller();
    }

    /// Returns true if the key was handled regardless of focus
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            let focus = match self.focus {
                Focus::Input => Focus::Page,
                Focus::Page => Focus::Input,
            };
            self.set_focus(focus);
            return true;
        }

        false
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        if self.autocomplete.handle_key(key) == KeyOutcome::Consumed {
            return;
        }

        match key.code {
            KeyCode::Enter => {
                let text = self.query().to_string();
                self.submit(&text);
            }
            // Dropdown already closed: clear the search
            KeyCode::Esc => {
                if !self.query().is_empty() {
                    self.input.clear();
                    self.autocomplete.on_text_changed("");
                }
            }
            _ => {
                if self.input.textarea.input(key) {
                    let text = self.query().to_string();
                    self.autocomplete.on_text_changed(&text);
                }
            }
        }
    }

    fn handle_page_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('/') | KeyCode::Enter => self.set_focus(Focus::Input),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
