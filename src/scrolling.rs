//! Scroll state for list-style widgets
//!
//! Tracks a selected index plus the window of items currently visible, so
//! long set and row lists stay navigable on small terminals.

/// Selection cursor and viewport window over a list of `total` items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    pub selected_index: usize,
    offset: usize,
    total: usize,
    visible: usize,
}

impl ScrollState {
    pub fn new(total: usize, visible: usize) -> Self {
        Self {
            selected_index: 0,
            offset: 0,
            total,
            visible: visible.max(1),
        }
    }

    /// Reset for a list of a different length, keeping the cursor in range
    pub fn resize(&mut self, total: usize) {
        self.total = total;
        if total == 0 {
            self.selected_index = 0;
            self.offset = 0;
        } else if self.selected_index >= total {
            self.selected_index = total - 1;
        }
        self.clamp_window();
    }

    /// Number of visible lines changed (terminal resize)
    pub fn set_visible(&mut self, visible: usize) {
        self.visible = visible.max(1);
        self.clamp_window();
    }

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
        self.clamp_window();
    }

    pub fn move_down(&mut self) {
        if self.total > 0 && self.selected_index + 1 < self.total {
            self.selected_index += 1;
        }
        self.clamp_window();
    }

    pub fn page_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(self.visible);
        self.clamp_window();
    }

    pub fn page_down(&mut self) {
        if self.total > 0 {
            self.selected_index = (self.selected_index + self.visible).min(self.total - 1);
        }
        self.clamp_window();
    }

    /// Half-open range of item indices currently in the viewport
    pub fn visible_range(&self) -> (usize, usize) {
        let end = (self.offset + self.visible).min(self.total);
        (self.offset, end)
    }

    fn clamp_window(&mut self) {
        if self.selected_index < self.offset {
            self.offset = self.selected_index;
        } else if self.selected_index >= self.offset + self.visible {
            self.offset = self.selected_index + 1 - self.visible;
        }
        if self.offset + self.visible > self.total {
            self.offset = self.total.saturating_sub(self.visible);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_stays_in_bounds() {
        let mut s = ScrollState::new(3, 10);
        s.move_up();
        assert_eq!(s.selected_index, 0);
        s.move_down();
        s.move_down();
        s.move_down();
        assert_eq!(s.selected_index, 2);
    }

    #[test]
    fn window_follows_cursor() {
        let mut s = ScrollState::new(10, 3);
        for _ in 0..5 {
            s.move_down();
        }
        let (start, end) = s.visible_range();
        assert!(start <= 5 && 5 < end);
        assert_eq!(end - start, 3);
    }

    #[test]
    fn paging_clamps_at_ends() {
        let mut s = ScrollState::new(10, 4);
        s.page_down();
        s.page_down();
        s.page_down();
        assert_eq!(s.selected_index, 9);
        s.page_up();
        s.page_up();
        s.page_up();
        assert_eq!(s.selected_index, 0);
    }

    #[test]
    fn resize_keeps_cursor_valid() {
        let mut s = ScrollState::new(10, 4);
        for _ in 0..9 {
            s.move_down();
        }
        s.resize(3);
        assert_eq!(s.selected_index, 2);
        s.resize(0);
        assert_eq!(s.selected_index, 0);
        assert_eq!(s.visible_range(), (0, 0));
    }
}
