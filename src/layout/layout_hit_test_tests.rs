//! Tests for layout hit testing

use ratatui::layout::Rect;

use super::*;

fn regions() -> LayoutRegions {
    LayoutRegions {
        input_field: Some(Rect::new(2, 1, 60, 3)),
        dropdown: Some(Rect::new(2, 4, 60, 6)),
        page: Some(Rect::new(0, 0, 80, 24)),
    }
}

#[test]
fn test_click_inside_input_field() {
    assert_eq!(region_at(&regions(), 10, 2), Some(Region::InputField));
}

#[test]
fn test_click_inside_dropdown() {
    assert_eq!(region_at(&regions(), 10, 5), Some(Region::Dropdown));
}

#[test]
fn test_dropdown_wins_over_page() {
    assert_eq!(region_at(&regions(), 2, 9), Some(Region::Dropdown));
}

#[test]
fn test_click_on_page_outside_components() {
    assert_eq!(region_at(&regions(), 70, 20), Some(Region::Page));
}

#[test]
fn test_hidden_dropdown_area_is_page() {
    let mut regions = regions();
    regions.dropdown = None;

    assert_eq!(region_at(&regions, 10, 5), Some(Region::Page));
}

#[test]
fn test_position_outside_everything() {
    assert_eq!(region_at(&regions(), 100, 100), None);
}

#[test]
fn test_right_and_bottom_edges_are_exclusive() {
    let regions = LayoutRegions {
        input_field: Some(Rect::new(0, 0, 10, 3)),
        ..LayoutRegions::default()
    };

    assert_eq!(region_at(&regions, 9, 2), Some(Region::InputField));
    assert_eq!(region_at(&regions, 10, 2), None);
    assert_eq!(region_at(&regions, 9, 3), None);
}

#[test]
fn test_clear_forgets_all_regions() {
    let mut regions = regions();
    regions.clear();
    assert_eq!(regions, LayoutRegions::new());
}
