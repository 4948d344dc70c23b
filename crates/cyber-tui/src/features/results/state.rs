//! Result list selection and scrolling.

/// Selection cursor over the settled result list.
///
/// Holds indexes only; the results themselves stay in the session. Every
/// operation takes the current result count so a new result set never leaves
/// the cursor dangling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsState {
    selected: usize,
    offset: usize,
    visible_cards: usize,
}

impl Default for ResultsState {
    fn default() -> Self {
        Self {
            selected: 0,
            offset: 0,
            visible_cards: 1,
        }
    }
}

impl ResultsState {
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Index of the first card on screen.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn visible_cards(&self) -> usize {
        self.visible_cards
    }

    /// Back to the top, for a freshly settled result set.
    pub fn reset(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    /// Updates how many cards fit on screen (at least one).
    pub fn set_visible_cards(&mut self, cards: usize, total: usize) {
        self.visible_cards = cards.max(1);
        self.clamp(total);
    }

    pub fn select_next(&mut self, total: usize) {
        if self.selected + 1 < total {
            self.selected += 1;
        }
        self.clamp(total);
    }

    pub fn select_prev(&mut self, total: usize) {
        self.selected = self.selected.saturating_sub(1);
        self.clamp(total);
    }

    pub fn page_down(&mut self, total: usize) {
        self.selected = (self.selected + self.visible_cards).min(total.saturating_sub(1));
        self.clamp(total);
    }

    pub fn page_up(&mut self, total: usize) {
        self.selected = self.selected.saturating_sub(self.visible_cards);
        self.clamp(total);
    }

    /// Range of card indexes to draw.
    pub fn visible_range(&self, total: usize) -> std::ops::Range<usize> {
        let start = self.offset.min(total);
        let end = (start + self.visible_cards).min(total);
        start..end
    }

    /// Keeps `selected` in bounds and scrolls so it stays on screen.
    fn clamp(&mut self, total: usize) {
        if total == 0 {
            self.selected = 0;
            self.offset = 0;
            return;
        }
        self.selected = self.selected.min(total - 1);
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + self.visible_cards {
            self.offset = self.selected + 1 - self.visible_cards;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_visible(cards: usize, total: usize) -> ResultsState {
        let mut state = ResultsState::default();
        state.set_visible_cards(cards, total);
        state
    }

    #[test]
    fn next_stops_at_last_result() {
        let mut state = with_visible(5, 2);
        state.select_next(2);
        state.select_next(2);
        assert_eq!(state.selected(), 1);
    }

    #[test]
    fn prev_stops_at_first_result() {
        let mut state = with_visible(5, 2);
        state.select_prev(2);
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn scrolls_to_keep_selection_visible() {
        let mut state = with_visible(2, 5);
        state.select_next(5);
        state.select_next(5);
        assert_eq!(state.selected(), 2);
        assert_eq!(state.offset(), 1);
        assert_eq!(state.visible_range(5), 1..3);

        state.select_prev(5);
        state.select_prev(5);
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn paging_moves_by_visible_cards() {
        let mut state = with_visible(3, 10);
        state.page_down(10);
        assert_eq!(state.selected(), 3);
        state.page_down(10);
        state.page_down(10);
        state.page_down(10);
        assert_eq!(state.selected(), 9);
        assert_eq!(state.offset(), 7);
        state.page_up(10);
        assert_eq!(state.selected(), 6);
    }

    #[test]
    fn empty_list_keeps_cursor_at_zero() {
        let mut state = with_visible(3, 0);
        state.select_next(0);
        state.page_down(0);
        assert_eq!(state.selected(), 0);
        assert_eq!(state.visible_range(0), 0..0);
    }

    #[test]
    fn shrinking_viewport_rescrolls() {
        let mut state = with_visible(5, 10);
        for _ in 0..4 {
            state.select_next(10);
        }
        assert_eq!(state.offset(), 0);
        state.set_visible_cards(2, 10);
        assert_eq!(state.offset(), 3);
        state.set_visible_cards(0, 10);
        assert_eq!(state.visible_cards(), 1);
        assert_eq!(state.offset(), 4);
    }
}
