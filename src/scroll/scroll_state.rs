/// Vertical scroll position of a list viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub offset: u16,
    pub max_offset: u16,
    pub viewport_height: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_bounds(&mut self, content_lines: usize, viewport_height: u16) {
        self.viewport_height = viewport_height;

        // Clamp to u16::MAX for ratatui compatibility
        self.max_offset = content_lines
            .saturating_sub(viewport_height as usize)
            .min(u16::MAX as usize) as u16;

        self.offset = self.offset.min(self.max_offset);
    }

    /// Scroll the minimum amount needed for `line` to be inside the viewport
    pub fn ensure_visible(&mut self, line: usize) {
        if self.viewport_height == 0 {
            return;
        }

        let line = line.min(u16::MAX as usize) as u16;
        let visible_end = self.offset.saturating_add(self.viewport_height);

        if line < self.offset {
            self.offset = line;
        } else if line >= visible_end {
            self.offset = line
                .saturating_add(1)
                .saturating_sub(self.viewport_height)
                .min(self.max_offset);
        }
    }

    /// Index range of the lines currently inside the viewport
    pub fn visible_range(&self, content_lines: usize) -> std::ops::Range<usize> {
        let start = (self.offset as usize).min(content_lines);
        let end = start
            .saturating_add(self.viewport_height as usize)
            .min(content_lines);
        start..end
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}
