//! Debounced autocomplete
//!
//! One `AutocompleteController` per bound input. The controller owns the
//! debounce, lookup generation and selection state; rendering is delegated to
//! an `AutocompleteView`.

mod controller;
mod cursor;
mod debouncer;
mod highlight;
mod keys;
mod view;

pub use controller::{AutocompleteController, DropdownMode};
pub use cursor::SelectionCursor;
pub use debouncer::{DEFAULT_DEBOUNCE_MS, Debouncer};
pub use highlight::{Segment, split_matches};
pub use keys::{KeyOutcome, KeyState};
pub use view::{AutocompleteView, Placeholder};
