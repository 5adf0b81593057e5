//! Dropdown rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use unicode_width::UnicodeWidthStr;

use super::{DropdownContent, DropdownState};
use crate::autocomplete::{Placeholder, split_matches};
use crate::widgets::popup;

pub const MAX_VISIBLE_ITEMS: usize = 8;
const BORDER_HEIGHT: u16 = 2;
// Borders plus the selection marker
const ITEM_CHROME_WIDTH: usize = 4;

fn placeholder_style(placeholder: Placeholder) -> Style {
    match placeholder {
        Placeholder::Loading => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
        Placeholder::Empty => Style::default().fg(Color::Gray),
        Placeholder::Error => Style::default().fg(Color::Red),
    }
}

fn item_line<'a>(item: &'a str, query: &str, selected: bool) -> Line<'a> {
    let base = if selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).bg(Color::Black)
    };
    let emphasis = if selected {
        base.add_modifier(Modifier::UNDERLINED)
    } else {
        base.fg(Color::Yellow).add_modifier(Modifier::BOLD)
    };

    let prefix = if selected { "► " } else { "  " };
    let mut spans = vec![Span::styled(prefix, base)];
    spans.extend(split_matches(item, query).into_iter().map(|segment| {
        let style = if segment.emphasized { emphasis } else { base };
        Span::styled(segment.text, style)
    }));

    Line::from(spans).style(base)
}

/// Draw the dropdown directly beneath `anchor`
///
/// Returns the area drawn, or None when there is nothing to show.
pub fn render_dropdown(state: &mut DropdownState, frame: &mut Frame, anchor: Rect) -> Option<Rect> {
    let (rows, content_width) = match &state.content {
        DropdownContent::Hidden => {
            state.list_area = None;
            return None;
        }
        DropdownContent::Placeholder(placeholder) => (1, placeholder.message().width()),
        DropdownContent::Items { items, .. } => (
            items.len().clamp(1, MAX_VISIBLE_ITEMS),
            items.iter().map(|item| item.width()).max().unwrap_or(0),
        ),
    };

    // At least as wide as the input, wider for long names
    let width = (content_width + ITEM_CHROME_WIDTH).min(u16::MAX as usize) as u16;
    let popup_area = popup::popup_below_anchor(
        anchor,
        frame.area(),
        width.max(anchor.width),
        rows as u16 + BORDER_HEIGHT,
    );
    if popup_area.height <= BORDER_HEIGHT || popup_area.width <= 2 {
        state.list_area = None;
        return None;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    let list_area = block.inner(popup_area);

    popup::clear_area(frame, popup_area);

    match &state.content {
        DropdownContent::Hidden => {}
        DropdownContent::Placeholder(placeholder) => {
            let text = Paragraph::new(format!("  {}", placeholder.message()))
                .style(placeholder_style(*placeholder))
                .block(block);
            frame.render_widget(text, popup_area);
            state.list_area = None;
        }
        DropdownContent::Items { query, items } => {
            state.scroll.update_bounds(items.len(), list_area.height);
            if let Some(selected) = state.selected {
                state.scroll.ensure_visible(selected);
            }

            let lines: Vec<ListItem> = state
                .scroll
                .visible_range(items.len())
                .map(|i| ListItem::new(item_line(&items[i], query, state.selected == Some(i))))
                .collect();

            frame.render_widget(List::new(lines).block(block), popup_area);
            state.list_area = Some(list_area);
        }
    }

    Some(popup_area)
}

#[cfg(test)]
#[path = "dropdown_render_tests.rs"]
mod dropdown_render_tests;
