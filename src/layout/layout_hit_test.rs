use ratatui::layout::{Position, Rect};

use super::{LayoutRegions, Region};

fn contains(area: Option<Rect>, column: u16, row: u16) -> bool {
    area.is_some_and(|area| area.contains(Position::new(column, row)))
}

/// Component at the given screen position
///
/// The dropdown is drawn over the page, so it wins where they overlap.
pub fn region_at(regions: &LayoutRegions, column: u16, row: u16) -> Option<Region> {
    if contains(regions.dropdown, column, row) {
        return Some(Region::Dropdown);
    }
    if contains(regions.input_field, column, row) {
        return Some(Region::InputField);
    }
    if contains(regions.page, column, row) {
        return Some(Region::Page);
    }
    None
}
