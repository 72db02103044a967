//! Keeps the newest turn in view when the transcript grows or is replaced.

/// Tracks the displayed transcript length and says when to jump to the end
#[derive(Debug, Default)]
pub struct AutoScroll {
    last_len: Option<usize>,
}

impl AutoScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current transcript length.
    ///
    /// Returns `true` when the length differs from the previous observation
    /// and there is a viewport to scroll. A change seen while the viewport
    /// has no height is consumed without scrolling.
    pub fn observe(&mut self, len: usize, viewport_height: u16) -> bool {
        if self.last_len == Some(len) {
            return false;
        }
        self.last_len = Some(len);
        viewport_height > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_observation_scrolls() {
        let mut scroll = AutoScroll::new();
        assert!(scroll.observe(3, 20));
    }

    #[test]
    fn test_unchanged_length_does_not_scroll() {
        let mut scroll = AutoScroll::new();
        scroll.observe(3, 20);
        assert!(!scroll.observe(3, 20));
        assert!(!scroll.observe(3, 40));
    }

    #[test]
    fn test_any_length_change_scrolls() {
        let mut scroll = AutoScroll::new();
        scroll.observe(3, 20);
        assert!(scroll.observe(12, 20));
        // Shrinking (placeholder replaced by a shorter transcript) counts too
        assert!(scroll.observe(1, 20));
        assert!(scroll.observe(0, 20));
    }

    #[test]
    fn test_zero_height_viewport_is_skipped() {
        let mut scroll = AutoScroll::new();
        assert!(!scroll.observe(5, 0));
        // The change was consumed
        assert!(!scroll.observe(5, 20));
        assert!(scroll.observe(6, 20));
    }
}
