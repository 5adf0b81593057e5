use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area directly beneath `anchor`, clamped to the space left in `bounds`
pub fn popup_below_anchor(anchor: Rect, bounds: Rect, width: u16, height: u16) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let bounds_bottom = bounds.y.saturating_add(bounds.height);
    let bounds_right = bounds.x.saturating_add(bounds.width);

    Rect {
        x: anchor.x,
        y: popup_y,
        width: width.min(bounds_right.saturating_sub(anchor.x)),
        height: height.min(bounds_bottom.saturating_sub(popup_y)),
    }
}

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect {
        x: area.x + horizontal_margin,
        y: area.y + vertical_margin,
        width: area.width.saturating_sub(horizontal_margin * 2),
        height: area.height.saturating_sub(vertical_margin * 2),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
