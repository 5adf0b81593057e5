//! Autocomplete controller
//!
//! Owns the state for one bound input: the debounced query, the suggestion
//! list from the latest lookup, the selection cursor, and the request
//! generation used to drop stale responses. All rendering goes through the
//! injected `AutocompleteView`.
//!
//! The controller is driven from a single thread. The host loop feeds it
//! input changes and key events, calls `tick` so the debounce deadline can
//! fire, and calls `poll_responses` to pick up finished lookups.

use std::sync::mpsc::{self, Receiver};
use std::time::Instant;

use tokio::sync::mpsc::{UnboundedSender, unbounded_channel};

use super::cursor::SelectionCursor;
use super::debouncer::Debouncer;
use super::view::{AutocompleteView, Placeholder};
use crate::config::AutocompleteConfig;
use crate::lookup::{LookupClient, LookupError, LookupRequest, LookupResponse, spawn_worker};
use crate::query::Query;

/// What the dropdown currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownMode {
    Hidden,
    Placeholder(Placeholder),
    Suggestions,
}

type SelectCallback = Box<dyn FnMut(&str)>;

pub struct AutocompleteController<V: AutocompleteView> {
    view: V,
    min_chars: usize,
    /// Current raw value of the bound input
    input: String,
    /// Suggestions from the latest accepted lookup, in server order
    suggestions: Vec<String>,
    /// Query the current suggestions answer
    query: Option<Query>,
    cursor: SelectionCursor,
    mode: DropdownMode,
    debouncer: Debouncer,
    /// Latest request ID issued, incremented for each lookup
    request_id: u64,
    /// ID of the only request whose response may still be applied
    in_flight_request_id: Option<u64>,
    in_flight_query: Option<Query>,
    request_tx: Option<UnboundedSender<LookupRequest>>,
    response_rx: Option<Receiver<LookupResponse>>,
    on_select: Option<SelectCallback>,
}

impl<V: AutocompleteView> AutocompleteController<V> {
    /// Create a controller without a lookup worker
    ///
    /// Call `set_channels` before the first lookup, otherwise every lookup
    /// renders the error placeholder.
    pub fn new(config: &AutocompleteConfig, view: V) -> Self {
        Self {
            view,
            min_chars: config.min_chars.max(1),
            input: String::new(),
            suggestions: Vec::new(),
            query: None,
            cursor: SelectionCursor::new(),
            mode: DropdownMode::Hidden,
            debouncer: Debouncer::new(config.debounce_ms),
            request_id: 0,
            in_flight_request_id: None,
            in_flight_query: None,
            request_tx: None,
            response_rx: None,
            on_select: None,
        }
    }

    /// Create a controller wired to a lookup worker for `config.endpoint`
    pub fn connect(config: &AutocompleteConfig, view: V) -> Result<Self, LookupError> {
        let client = LookupClient::from_config(config)?;
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();

        spawn_worker(client, request_rx, response_tx)
            .map_err(|e| LookupError::Network(format!("failed to start lookup worker: {}", e)))?;

        let mut controller = Self::new(config, view);
        controller.set_channels(request_tx, response_rx);
        Ok(controller)
    }

    /// Register a callback invoked with the text of every confirmed selection
    pub fn with_on_select(mut self, on_select: impl FnMut(&str) + 'static) -> Self {
        self.on_select = Some(Box::new(on_select));
        self
    }

    /// Set the channel handles for communication with the lookup worker
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<LookupRequest>,
        response_rx: Receiver<LookupResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Query the displayed suggestions were fetched for
    pub fn query(&self) -> Option<&Query> {
        self.query.as_ref()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.cursor.get_selected()
    }

    pub fn mode(&self) -> DropdownMode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        self.mode != DropdownMode::Hidden
    }

    pub fn min_chars(&self) -> usize {
        self.min_chars
    }

    /// Get the latest request ID issued
    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    pub fn has_in_flight_request(&self) -> bool {
        self.in_flight_request_id.is_some()
    }

    pub fn has_pending_lookup(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// When the pending lookup is due, so a host loop can sleep until then
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Handle a change of the bound input's text
    pub fn on_text_changed(&mut self, raw: &str) {
        self.on_text_changed_at(raw, Instant::now());
    }

    /// Handle a change of the bound input's text at time `now`
    ///
    /// Below the minimum length this closes the dropdown and forgets any
    /// pending or in-flight lookup. Otherwise it restarts the debounce.
    pub fn on_text_changed_at(&mut self, raw: &str, now: Instant) {
        self.input = raw.to_string();

        match Query::parse(raw, self.min_chars) {
            Some(query) => self.debouncer.schedule(query, now),
            None => self.dismiss(),
        }
    }

    /// Handle the bound input gaining focus
    ///
    /// Re-fetches right away when the current text is already long enough.
    pub fn on_focus(&mut self) {
        if let Some(query) = Query::parse(&self.input, self.min_chars) {
            self.debouncer.cancel();
            self.fetch(query);
        }
    }

    /// Handle a click outside the input and dropdown
    pub fn on_outside_click(&mut self) {
        self.dismiss();
    }

    /// Fire the debounced lookup if its deadline has passed
    ///
    /// Returns true if a lookup was issued.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debouncer.take_due(now) {
            Some(query) => {
                self.fetch(query);
                true
            }
            None => false,
        }
    }

    /// Drain finished lookups from the worker
    ///
    /// Returns true if a response was applied to the dropdown.
    pub fn poll_responses(&mut self) -> bool {
        let mut applied = false;

        loop {
            let response = match &self.response_rx {
                Some(rx) => match rx.try_recv() {
                    Ok(response) => response,
                    Err(_) => break,
                },
                None => break,
            };
            applied |= self.apply_response(response);
        }

        applied
    }

    /// Move the highlighted suggestion by one step in the direction of `delta`
    pub fn move_selection(&mut self, delta: isize) {
        if self.mode != DropdownMode::Suggestions {
            return;
        }
        self.cursor.move_by(delta.signum(), self.suggestions.len());
        self.view.highlight(self.cursor.get_selected());
    }

    /// Commit the highlighted suggestion into the input
    ///
    /// Hides the dropdown, invokes the selection callback and refocuses the
    /// input. Does nothing and returns None when no suggestion is highlighted.
    pub fn confirm_selection(&mut self) -> Option<String> {
        let index = self.cursor.get_selected()?;
        let value = self.suggestions.get(index)?.clone();

        self.input = value.clone();
        self.view.set_input(&value);
        self.dismiss();

        if let Some(on_select) = self.on_select.as_mut() {
            on_select(&value);
        }
        self.view.focus_input();

        Some(value)
    }

    /// Select the rendered suggestion at `index` (mouse click)
    pub fn select_index(&mut self, index: usize) -> Option<String> {
        if self.mode != DropdownMode::Suggestions
            || !self.cursor.select_index(index, self.suggestions.len())
        {
            return None;
        }
        self.view.highlight(Some(index));
        self.confirm_selection()
    }

    /// Select the rendered suggestion whose text is `value`
    pub fn select_by_value(&mut self, value: &str) -> Option<String> {
        let index = self.suggestions.iter().position(|s| s == value)?;
        self.select_index(index)
    }

    /// Hide the dropdown and reset the selection, keeping the input text
    ///
    /// Any pending debounce is cancelled and a response still in flight will
    /// be ignored, so nothing reopens the dropdown behind the user's back.
    pub fn dismiss(&mut self) {
        self.debouncer.cancel();
        self.in_flight_request_id = None;
        self.in_flight_query = None;
        self.suggestions.clear();
        self.query = None;
        self.cursor.clear_selection();
        self.mode = DropdownMode::Hidden;
        self.view.hide();
    }

    fn show_placeholder(&mut self, placeholder: Placeholder) {
        self.mode = DropdownMode::Placeholder(placeholder);
        self.view.show_placeholder(placeholder);
    }

    /// Issue a lookup for `query`, superseding any request in flight
    fn fetch(&mut self, query: Query) {
        self.request_id = self.request_id.wrapping_add(1);
        let request_id = self.request_id;

        self.suggestions.clear();
        self.query = None;
        self.cursor.clear_selection();
        self.show_placeholder(Placeholder::Loading);

        let request = LookupRequest {
            query: query.to_string(),
            request_id,
        };
        let sent = self
            .request_tx
            .as_ref()
            .is_some_and(|tx| tx.send(request).is_ok());

        if sent {
            log::debug!("Sent lookup {} for {:?}", request_id, query.as_str());
            self.in_flight_request_id = Some(request_id);
            self.in_flight_query = Some(query);
        } else {
            log::debug!("Lookup worker unavailable, request {} not sent", request_id);
            self.in_flight_request_id = None;
            self.in_flight_query = None;
            self.show_placeholder(Placeholder::Error);
        }
    }

    /// Apply a worker response if it belongs to the latest request
    fn apply_response(&mut self, response: LookupResponse) -> bool {
        if self.in_flight_request_id != Some(response.request_id) {
            log::debug!(
                "Discarding stale response {} (current: {:?})",
                response.request_id,
                self.in_flight_request_id
            );
            return false;
        }

        self.in_flight_request_id = None;
        let query = self.in_flight_query.take();
        self.cursor.clear_selection();

        match response.result {
            Ok(suggestions) if suggestions.is_empty() => {
                self.suggestions.clear();
                self.show_placeholder(Placeholder::Empty);
            }
            Ok(suggestions) => {
                self.suggestions = suggestions;
                self.mode = DropdownMode::Suggestions;
                let query_text = query.as_ref().map_or("", |q| q.as_str());
                self.view.show_suggestions(query_text, &self.suggestions);
                self.view.highlight(None);
                self.query = query;
            }
            Err(e) => {
                if e.is_transport() {
                    log::debug!("Lookup {} could not reach endpoint: {}", response.request_id, e);
                } else {
                    log::debug!("Lookup {} returned unusable body: {}", response.request_id, e);
                }
                self.suggestions.clear();
                self.show_placeholder(Placeholder::Error);
            }
        }

        true
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
