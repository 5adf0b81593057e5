#[cfg(test)]
pub mod test_helpers {
    use std::collections::HashMap;
    use std::sync::mpsc::{self, Sender};
    use std::time::{Duration, Instant};

    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use crate::app::App;
    use crate::autocomplete::{AutocompleteController, AutocompleteView, Placeholder, split_matches};
    use crate::config::{AutocompleteConfig, DEFAULT_ENDPOINT};
    use crate::dropdown::DropdownState;
    use crate::lookup::{LookupError, LookupRequest, LookupResponse, SuggestionSource};

    pub const TEST_DEBOUNCE_MS: u64 = 300;

    /// Every call the controller made on its view, in order
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ViewEvent {
        Suggestions(Vec<String>),
        Placeholder(Placeholder),
        Highlight(Option<usize>),
        Hide,
        SetInput(String),
        Focus,
    }

    /// View that records calls instead of drawing anything
    #[derive(Debug, Default)]
    pub struct RecordingView {
        pub visible: bool,
        pub placeholder: Option<Placeholder>,
        pub query: String,
        pub items: Vec<String>,
        pub highlighted: Option<usize>,
        pub input: Option<String>,
        pub events: Vec<ViewEvent>,
    }

    impl RecordingView {
        /// Items with emphasized spans wrapped in brackets, e.g. "[Pa]nadol"
        pub fn rendered_items(&self) -> Vec<String> {
            self.items
                .iter()
                .map(|item| {
                    split_matches(item, &self.query)
                        .iter()
                        .map(|s| {
                            if s.emphasized {
                                format!("[{}]", s.text)
                            } else {
                                s.text.to_string()
                            }
                        })
                        .collect()
                })
                .collect()
        }

        pub fn focus_count(&self) -> usize {
            self.events.iter().filter(|e| **e == ViewEvent::Focus).count()
        }
    }

    impl AutocompleteView for RecordingView {
        fn show_suggestions(&mut self, query: &str, suggestions: &[String]) {
            self.visible = true;
            self.placeholder = None;
            self.query = query.to_string();
            self.items = suggestions.to_vec();
            self.events.push(ViewEvent::Suggestions(suggestions.to_vec()));
        }

        fn show_placeholder(&mut self, placeholder: Placeholder) {
            self.visible = true;
            self.placeholder = Some(placeholder);
            self.items.clear();
            self.events.push(ViewEvent::Placeholder(placeholder));
        }

        fn highlight(&mut self, index: Option<usize>) {
            self.highlighted = index;
            self.events.push(ViewEvent::Highlight(index));
        }

        fn hide(&mut self) {
            self.visible = false;
            self.highlighted = None;
            self.events.push(ViewEvent::Hide);
        }

        fn set_input(&mut self, text: &str) {
            self.input = Some(text.to_string());
            self.events.push(ViewEvent::SetInput(text.to_string()));
        }

        fn focus_input(&mut self) {
            self.events.push(ViewEvent::Focus);
        }
    }

    /// In-memory suggestion source with optional per-query latency
    #[derive(Debug, Default, Clone)]
    pub struct FakeSource {
        responses: HashMap<String, (Duration, Result<Vec<String>, LookupError>)>,
    }

    impl FakeSource {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_response(self, query: &str, result: Result<Vec<String>, LookupError>) -> Self {
            self.with_delayed_response(query, Duration::ZERO, result)
        }

        pub fn with_delayed_response(
            mut self,
            query: &str,
            delay: Duration,
            result: Result<Vec<String>, LookupError>,
        ) -> Self {
            self.responses.insert(query.to_string(), (delay, result));
            self
        }
    }

    impl SuggestionSource for FakeSource {
        async fn fetch(&self, query: &str) -> Result<Vec<String>, LookupError> {
            match self.responses.get(query) {
                Some((delay, result)) => {
                    if !delay.is_zero() {
                        tokio::time::sleep(*delay).await;
                    }
                    result.clone()
                }
                None => Ok(Vec::new()),
            }
        }
    }

    pub fn test_config(min_chars: usize, debounce_ms: u64) -> AutocompleteConfig {
        AutocompleteConfig {
            min_chars,
            debounce_ms,
            ..AutocompleteConfig::default()
        }
    }

    pub type TestController = AutocompleteController<RecordingView>;

    /// Controller whose worker side is played by the test
    pub fn test_controller() -> (
        TestController,
        UnboundedReceiver<LookupRequest>,
        Sender<LookupResponse>,
    ) {
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();

        let mut controller = AutocompleteController::new(
            &test_config(2, TEST_DEBOUNCE_MS),
            RecordingView::default(),
        );
        controller.set_channels(request_tx, response_rx);

        (controller, request_rx, response_tx)
    }

    /// Drain every request the controller has sent so far
    pub fn sent_requests(request_rx: &mut UnboundedReceiver<LookupRequest>) -> Vec<LookupRequest> {
        let mut requests = Vec::new();
        while let Ok(request) = request_rx.try_recv() {
            requests.push(request);
        }
        requests
    }

    pub fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// App whose lookup worker is played by the test
    pub fn test_app() -> (App, UnboundedReceiver<LookupRequest>, Sender<LookupResponse>) {
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();

        let mut controller = AutocompleteController::new(
            &test_config(2, TEST_DEBOUNCE_MS),
            DropdownState::new(),
        );
        controller.set_channels(request_tx, response_rx);

        (App::with_controller(controller, DEFAULT_ENDPOINT), request_rx, response_tx)
    }

    /// Type `text` into the app one key at a time
    pub fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key_event(key(KeyCode::Char(c)));
        }
    }

    /// Type `text`, let the debounce fire, and answer the lookup with `items`
    pub fn open_app_dropdown(
        app: &mut App,
        request_rx: &mut UnboundedReceiver<LookupRequest>,
        response_tx: &Sender<LookupResponse>,
        text: &str,
        items: &[&str],
    ) {
        type_text(app, text);
        app.tick(Instant::now() + Duration::from_millis(TEST_DEBOUNCE_MS));

        let request = sent_requests(request_rx).pop().unwrap();
        response_tx
            .send(LookupResponse {
                request_id: request.request_id,
                result: Ok(strings(items)),
            })
            .unwrap();
        app.tick(Instant::now());
    }
}
