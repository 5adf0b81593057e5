//! Mouse click handling
//!
//! Clicks on a dropdown row select it, clicks on the input focus it, and
//! clicks anywhere else close the dropdown.

use ratatui::crossterm::event::MouseEvent;

use super::state::{App, Focus};
use crate::layout::Region;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    match region {
        Some(Region::Dropdown) => click_dropdown(app, mouse),
        Some(Region::InputField) => click_input_field(app),
        Some(Region::Page) | None => click_outside(app),
    }
}

fn click_dropdown(app: &mut App, mouse: MouseEvent) {
    // Borders and placeholder rows have no item
    if let Some(index) = app.autocomplete.view().item_at(mouse.row) {
        app.autocomplete.select_index(index);
    }
}

fn click_input_field(app: &mut App) {
    app.set_focus(Focus::Input);
}

fn click_outside(app: &mut App) {
    app.autocomplete.on_outside_click();
    if app.focus != Focus::Page {
        app.focus = Focus::Page;
        app.input.set_focused(false);
    }
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
