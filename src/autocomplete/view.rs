//! Rendering capability injected into the controller
//!
//! The controller never touches a concrete UI. Everything it shows goes
//! through this trait, so the HTML markup view, the terminal dropdown and the
//! recording view used in tests are interchangeable.

use std::fmt;

/// Dropdown modes that replace the suggestion list entirely
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Loading,
    Empty,
    Error,
}

impl Placeholder {
    pub fn message(&self) -> &'static str {
        match self {
            Placeholder::Loading => "Searching medicines...",
            Placeholder::Empty => "No medicines found",
            Placeholder::Error => "Error loading suggestions",
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Surface an autocomplete controller renders into
///
/// One view belongs to exactly one controller: the input it edits and the
/// dropdown container beneath it.
pub trait AutocompleteView {
    /// Replace the dropdown contents with `suggestions`, emphasizing `query`
    fn show_suggestions(&mut self, query: &str, suggestions: &[String]);

    /// Replace the dropdown contents with a placeholder and show it
    fn show_placeholder(&mut self, placeholder: Placeholder);

    /// Highlight the item at `index` (None clears the highlight)
    ///
    /// Implementations scroll the highlighted item into view.
    fn highlight(&mut self, index: Option<usize>);

    /// Hide the dropdown
    fn hide(&mut self);

    /// Replace the text of the bound input
    fn set_input(&mut self, text: &str);

    /// Return keyboard focus to the bound input
    fn focus_input(&mut self);
}
