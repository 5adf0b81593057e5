//! Terminal search bar hosting one autocomplete controller

mod events;
mod mouse_click;
mod render;
mod state;

pub use state::{App, Focus};
