use ratatui::layout::Rect;

/// Clickable UI components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    InputField,
    Dropdown,
    Page,
}

/// Screen areas of the components drawn on the last frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub input_field: Option<Rect>,
    /// None while the dropdown is hidden
    pub dropdown: Option<Rect>,
    pub page: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
