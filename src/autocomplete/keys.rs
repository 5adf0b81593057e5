//! Keyboard handling for the autocomplete dropdown
//!
//! States: closed, open with no selection, open with selection(i).
//! Arrow keys move within the open states, Enter confirms a selection,
//! Escape closes. Everything else is left to the host.

use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::controller::{AutocompleteController, DropdownMode};
use super::view::AutocompleteView;

/// Keyboard state of the dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Closed,
    OpenNoSelection,
    OpenWithSelection(usize),
}

/// Whether the controller handled a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Handled; the host must not apply its default behaviour
    Consumed,
    /// Not handled; the host applies its default behaviour (typing, submit)
    Ignored,
}

impl<V: AutocompleteView> AutocompleteController<V> {
    pub fn key_state(&self) -> KeyState {
        match self.mode() {
            DropdownMode::Hidden => KeyState::Closed,
            DropdownMode::Placeholder(_) => KeyState::OpenNoSelection,
            DropdownMode::Suggestions => match self.selected_index() {
                Some(index) => KeyState::OpenWithSelection(index),
                None => KeyState::OpenNoSelection,
            },
        }
    }

    /// Handle a key press on the bound input
    ///
    /// Enter with no highlighted suggestion is `Ignored` so the host can
    /// submit the raw input.
    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        let state = self.key_state();
        if state == KeyState::Closed {
            return KeyOutcome::Ignored;
        }

        match key.code {
            KeyCode::Down => {
                self.move_selection(1);
                KeyOutcome::Consumed
            }
            KeyCode::Up => {
                self.move_selection(-1);
                KeyOutcome::Consumed
            }
            KeyCode::Enter => match state {
                KeyState::OpenWithSelection(_) => {
                    self.confirm_selection();
                    KeyOutcome::Consumed
                }
                _ => KeyOutcome::Ignored,
            },
            KeyCode::Esc => {
                self.dismiss();
                KeyOutcome::Consumed
            }
            _ => KeyOutcome::Ignored,
        }
    }
}

#[cfg(test)]
#[path = "keys_tests.rs"]
mod keys_tests;
