use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::state::{App, Focus};
use crate::dropdown::render_dropdown;
use crate::widgets::popup;

const PAGE_MARGIN_X: u16 = 2;
const PAGE_MARGIN_Y: u16 = 1;
const INPUT_HEIGHT: u16 = 3;

impl App {
    /// Render the UI and record where each component landed
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let page = frame.area();
        let content = popup::inset_rect(page, PAGE_MARGIN_X, PAGE_MARGIN_Y);
        let [title_area, input_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(content);

        let title = Line::from(vec![
            Span::styled(
                "HealthBridge medicine search",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", self.endpoint()),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(title), title_area);

        frame.render_widget(&self.input.textarea, input_area);

        let hint = match self.focus {
            Focus::Input => "↑/↓ choose · Enter search · Esc close/clear · Tab unfocus · Ctrl+C quit",
            Focus::Page => "Tab or / focus search · q quit",
        };
        let help_area = popup::inset_rect(help_area, 1, 0);
        frame.render_widget(
            Paragraph::new(hint).style(Style::default().fg(Color::DarkGray)),
            help_area,
        );

        // Drawn last so it overlays the help text
        let dropdown_area = render_dropdown(self.autocomplete.view_mut(), frame, input_area);

        self.layout_regions.page = Some(page);
        self.layout_regions.input_field = Some(input_area);
        self.layout_regions.dropdown = dropdown_area;
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
