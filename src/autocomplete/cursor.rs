//! Selection cursor for the suggestion dropdown
//!
//! Tracks which suggestion is highlighted, if any. Movement is clamped to
//! the list bounds and never wraps.

/// Highlighted suggestion index (None = no highlighted item)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionCursor {
    selected_index: Option<usize>,
}

impl SelectionCursor {
    /// Create a cursor with no selection
    pub fn new() -> Self {
        Self {
            selected_index: None,
        }
    }

    /// Get the currently highlighted index
    pub fn get_selected(&self) -> Option<usize> {
        self.selected_index
    }

    /// Highlight a specific index if it exists in a list of `suggestion_count` items
    ///
    /// Returns false and leaves the cursor untouched when out of range.
    pub fn select_index(&mut self, index: usize, suggestion_count: usize) -> bool {
        if index >= suggestion_count {
            return false;
        }
        self.selected_index = Some(index);
        true
    }

    /// Clear the current selection
    pub fn clear_selection(&mut self) {
        self.selected_index = None;
    }

    /// Move the cursor by `delta` positions
    ///
    /// The result is clamped into `[none, suggestion_count - 1]`: moving up
    /// from the first item lands on "no selection", moving down from the last
    /// item stays on the last item.
    pub fn move_by(&mut self, delta: isize, suggestion_count: usize) {
        let current = self.selected_index.map_or(-1, |i| i as isize);
        let last = suggestion_count as isize - 1;
        let next = current.saturating_add(delta).clamp(-1, last.max(-1));

        self.selected_index = if next < 0 { None } else { Some(next as usize) };
    }
}

#[cfg(test)]
#[path = "cursor_tests.rs"]
mod cursor_tests;
