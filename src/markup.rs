//! HTML rendering of the autocomplete dropdown
//!
//! `HtmlView` keeps the state of one input and its suggestion container and
//! produces the container's inner HTML on demand. Every piece of suggestion
//! text and the query are escaped before they reach the markup.

use crate::autocomplete::{AutocompleteView, Placeholder, split_matches};

/// Escape text for insertion into HTML element content or a quoted attribute
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Render `text` with every case-insensitive occurrence of `query` in `<strong>`
pub fn emphasize(text: &str, query: &str) -> String {
    let mut html = String::new();
    for segment in split_matches(text, query) {
        if segment.emphasized {
            html.push_str("<strong>");
            html.push_str(&escape_html(segment.text));
            html.push_str("</strong>");
        } else {
            html.push_str(&escape_html(segment.text));
        }
    }
    html
}

fn placeholder_class(placeholder: Placeholder) -> &'static str {
    match placeholder {
        Placeholder::Loading => "autocomplete-loading",
        Placeholder::Empty => "autocomplete-empty",
        Placeholder::Error => "autocomplete-error",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Content {
    Placeholder(Placeholder),
    Items { query: String, items: Vec<String> },
}

/// Markup-producing view for one input and its dropdown container
#[derive(Debug, Default)]
pub struct HtmlView {
    content: Option<Content>,
    visible: bool,
    selected: Option<usize>,
    input: String,
    focused: bool,
}

impl HtmlView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the container carries the `active` class
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current value of the bound input
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Inner HTML of the suggestion container
    ///
    /// Empty while the container is hidden.
    pub fn markup(&self) -> String {
        if !self.visible {
            return String::new();
        }

        match &self.content {
            None => String::new(),
            Some(Content::Placeholder(placeholder)) => format!(
                "<div class=\"{}\">{}</div>",
                placeholder_class(*placeholder),
                escape_html(placeholder.message())
            ),
            Some(Content::Items { query, items }) => {
                let mut html = String::new();
                for (index, item) in items.iter().enumerate() {
                    let class = if self.selected == Some(index) {
                        "autocomplete-item selected"
                    } else {
                        "autocomplete-item"
                    };
                    html.push_str(&format!(
                        "<div class=\"{}\" data-index=\"{}\" data-value=\"{}\">\
                         <span class=\"autocomplete-text\">{}</span></div>",
                        class,
                        index,
                        escape_html(item),
                        emphasize(item, query)
                    ));
                }
                html
            }
        }
    }
}

impl AutocompleteView for HtmlView {
    fn show_suggestions(&mut self, query: &str, suggestions: &[String]) {
        self.content = Some(Content::Items {
            query: query.to_string(),
            items: suggestions.to_vec(),
        });
        self.selected = None;
        self.visible = true;
    }

    fn show_placeholder(&mut self, placeholder: Placeholder) {
        self.content = Some(Content::Placeholder(placeholder));
        self.selected = None;
        self.visible = true;
    }

    fn highlight(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    fn hide(&mut self) {
        self.visible = false;
        self.selected = None;
    }

    fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    fn focus_input(&mut self) {
        self.focused = true;
    }
}
