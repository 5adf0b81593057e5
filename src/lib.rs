//! Debounced medicine-name autocomplete
//!
//! The reusable part is `autocomplete::AutocompleteController`, which renders
//! through any `AutocompleteView`. `markup::HtmlView` and
//! `dropdown::DropdownState` are the two views shipped here; `app` is the
//! terminal search bar built on the latter.

pub mod app;
pub mod autocomplete;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod input;
pub mod layout;
pub mod lookup;
pub mod markup;
pub mod query;
pub mod scroll;
pub mod widgets;

#[cfg(test)]
mod test_utils;
