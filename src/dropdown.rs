//! Terminal dropdown beneath the search input
//!
//! `DropdownState` is the terminal counterpart of the HTML container: the
//! controller renders into it through `AutocompleteView`, and the host draws
//! it with `render_dropdown` every frame. Commands that touch the input
//! (replace text, take focus) are queued here for the host to apply, because
//! the input widget lives in the host.

use ratatui::layout::Rect;

use crate::autocomplete::{AutocompleteView, Placeholder};
use crate::scroll::ScrollState;

mod dropdown_render;

pub use dropdown_render::{MAX_VISIBLE_ITEMS, render_dropdown};

/// What the dropdown holds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DropdownContent {
    #[default]
    Hidden,
    Placeholder(Placeholder),
    Items { query: String, items: Vec<String> },
}

#[derive(Debug, Default)]
pub struct DropdownState {
    content: DropdownContent,
    selected: Option<usize>,
    pub scroll: ScrollState,
    pending_input: Option<String>,
    focus_requested: bool,
    /// Area the item rows occupied on the last frame
    list_area: Option<Rect>,
}

impl DropdownState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &DropdownContent {
        &self.content
    }

    pub fn is_visible(&self) -> bool {
        self.content != DropdownContent::Hidden
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn items(&self) -> &[String] {
        match &self.content {
            DropdownContent::Items { items, .. } => items,
            _ => &[],
        }
    }

    /// Text the controller committed into the input, if not yet applied
    pub fn take_input_commit(&mut self) -> Option<String> {
        self.pending_input.take()
    }

    /// Whether the controller asked for input focus since the last call
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    /// Index of the item drawn on screen row `row`
    pub fn item_at(&self, row: u16) -> Option<usize> {
        let area = self.list_area?;
        if row < area.y || row >= area.y.saturating_add(area.height) {
            return None;
        }

        let index = (row - area.y) as usize + self.scroll.offset as usize;
        (index < self.items().len()).then_some(index)
    }
}

impl AutocompleteView for DropdownState {
    fn show_suggestions(&mut self, query: &str, suggestions: &[String]) {
        self.content = DropdownContent::Items {
            query: query.to_string(),
            items: suggestions.to_vec(),
        };
        self.selected = None;
        self.scroll.reset();
    }

    fn show_placeholder(&mut self, placeholder: Placeholder) {
        self.content = DropdownContent::Placeholder(placeholder);
        self.selected = None;
        self.scroll.reset();
    }

    fn highlight(&mut self, index: Option<usize>) {
        self.selected = index;
        if let Some(index) = index {
            self.scroll.ensure_visible(index);
        }
    }

    fn hide(&mut self) {
        self.content = DropdownContent::Hidden;
        self.selected = None;
        self.scroll.reset();
        self.list_area = None;
    }

    fn set_input(&mut self, text: &str) {
        self.pending_input = Some(text.to_string());
    }

    fn focus_input(&mut self) {
        self.focus_requested = true;
    }
}
