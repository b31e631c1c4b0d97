/// Cursor and search text for a filterable list
#[derive(Debug, Clone, Default)]
pub struct SelectorState {
    pub index: usize,
    pub filter: String,
}

impl SelectorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_up(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn move_down(&mut self, item_count: usize) {
        if self.index + 1 < item_count {
            self.index += 1;
        }
    }

    /// Clamp index to valid range when list shrinks
    pub fn clamp_index(&mut self, item_count: usize) {
        self.index = self.index.min(item_count.saturating_sub(1));
    }

    pub fn add_filter_char(&mut self, c: char) {
        self.filter.push(c);
        self.index = 0;
    }

    /// Returns false when there was nothing to delete
    pub fn backspace_filter(&mut self) -> bool {
        let removed = self.filter.pop().is_some();
        if removed {
            self.index = 0;
        }
        removed
    }

    pub fn clear(&mut self) {
        self.filter.clear();
        self.index = 0;
    }

    /// First row to draw so the cursor stays inside `visible_height` rows.
    pub fn scroll_offset(&self, visible_height: usize) -> usize {
        if visible_height == 0 {
            return self.index;
        }
        (self.index + 1).saturating_sub(visible_height)
    }
}
