//! Tests for widgets/popup

use super::*;

fn screen() -> Rect {
    Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    }
}

#[test]
fn test_popup_below_anchor_basic() {
    let anchor = Rect {
        x: 4,
        y: 2,
        width: 60,
        height: 3,
    };

    let popup = popup_below_anchor(anchor, screen(), 60, 10);

    assert_eq!(popup.x, 4);
    assert_eq!(popup.y, 5);
    assert_eq!(popup.width, 60);
    assert_eq!(popup.height, 10);
}

#[test]
fn test_popup_below_anchor_clamped_to_bottom() {
    let anchor = Rect {
        x: 0,
        y: 18,
        width: 80,
        height: 3,
    };

    let popup = popup_below_anchor(anchor, screen(), 80, 10);

    assert_eq!(popup.y, 21);
    assert_eq!(popup.height, 3);
}

#[test]
fn test_popup_below_anchor_clamped_to_right_edge() {
    let anchor = Rect {
        x: 70,
        y: 0,
        width: 10,
        height: 3,
    };

    let popup = popup_below_anchor(anchor, screen(), 30, 5);

    assert_eq!(popup.width, 10);
}

#[test]
fn test_popup_below_anchor_at_bottom_has_no_height() {
    let anchor = Rect {
        x: 0,
        y: 21,
        width: 80,
        height: 3,
    };

    let popup = popup_below_anchor(anchor, screen(), 80, 10);

    assert_eq!(popup.height, 0);
}

#[test]
fn test_inset_rect() {
    let area = Rect {
        x: 2,
        y: 2,
        width: 20,
        height: 10,
    };

    let inner = inset_rect(area, 1, 1);

    assert_eq!(inner, Rect::new(3, 3, 18, 8));
}

#[test]
fn test_inset_rect_larger_than_area() {
    let inner = inset_rect(Rect::new(0, 0, 2, 2), 5, 5);
    assert_eq!(inner.width, 0);
    assert_eq!(inner.height, 0);
}
