use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use crate::autocomplete::AutocompleteController;
use crate::config::AutocompleteConfig;
use crate::dropdown::DropdownState;
use crate::input::InputState;
use crate::layout::LayoutRegions;
use crate::lookup::LookupError;

/// Which component has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Page,
}

pub type SearchController = AutocompleteController<DropdownState>;

/// Application state
pub struct App {
    pub input: InputState,
    pub autocomplete: SearchController,
    pub focus: Focus,
    pub layout_regions: LayoutRegions,
    pub should_quit: bool,
    endpoint: String,
    submitted: Option<String>,
    submit_rx: Receiver<String>,
}

impl App {
    /// Create the app with a lookup worker for `config.endpoint`
    pub fn new(config: &AutocompleteConfig) -> Result<Self, LookupError> {
        let controller = AutocompleteController::connect(config, DropdownState::new())?;
        Ok(Self::with_controller(controller, &config.endpoint))
    }

    /// Create the app around an existing controller
    ///
    /// Confirming a suggestion submits the search, so the controller's
    /// selection callback is replaced.
    pub fn with_controller(controller: SearchController, endpoint: &str) -> Self {
        let (submit_tx, submit_rx) = mpsc::channel();
        let autocomplete = controller.with_on_select(move |value| {
            let _ = submit_tx.send(value.to_string());
        });

        Self {
            input: InputState::new(),
            autocomplete,
            focus: Focus::Input,
            layout_regions: LayoutRegions::new(),
            should_quit: false,
            endpoint: endpoint.to_string(),
            submitted: None,
            submit_rx,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Search text submitted on exit, if any
    pub fn submitted(&self) -> Option<&str> {
        self.submitted.as_deref()
    }

    pub fn query(&self) -> &str {
        self.input.query()
    }

    /// Submit `text` as the search and quit
    pub(super) fn submit(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        log::debug!("Submitting search {:?}", text);
        self.submitted = Some(text.to_string());
        self.should_quit = true;
    }

    pub(super) fn set_focus(&mut self, focus: Focus) {
        if self.focus == focus {
            return;
        }
        self.focus = focus;
        self.input.set_focused(focus == Focus::Input);

        match focus {
            Focus::Input => self.autocomplete.on_focus(),
            Focus::Page => self.autocomplete.dismiss(),
        }
    }

    /// Advance timers and pick up finished lookups
    /// How long the event loop may block before the next `tick` is needed
    ///
    /// Never longer than `max`, shorter when a debounced lookup comes due first.
    pub fn poll_timeout(&self, now: Instant, max: Duration) -> Duration {
        match self.autocomplete.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(max),
            None => max,
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.autocomplete.tick(now);
        self.autocomplete.poll_responses();
        self.sync_from_controller();
    }

    /// Apply what the controller queued for the input since the last event
    pub(super) fn sync_from_controller(&mut self) {
        let dropdown = self.autocomplete.view_mut();
        let commit = dropdown.take_input_commit();
        let focus_requested = dropdown.take_focus_request();

        if let Some(text) = commit {
            self.input.set_text(&text);
        }
        if focus_requested && self.focus != Focus::Input {
            self.focus = Focus::Input;
            self.input.set_focused(true);
        }
        if let Ok(selected) = self.submit_rx.try_recv() {
            self.submit(&selected);
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
