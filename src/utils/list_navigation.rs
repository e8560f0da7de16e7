//! Keymap-driven navigation for `ListState`.
//!
//! Screens translate a key into an [`Action`] and hand it to
//! [`ListStateExt::navigate`], which covers the up/down/page/top/end family
//! in one place.

use crate::keymap::Action;
use ratatui::widgets::ListState;

/// Default page size for page up/down navigation.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Extension trait for `ListState` with the navigation screens share.
pub trait ListStateExt {
    /// Move selection up, saturating at the first item.
    fn move_up_by(&mut self, count: usize, total_items: usize);

    /// Move selection down, saturating at the last item.
    fn move_down_by(&mut self, count: usize, total_items: usize);

    /// Move down, wrapping from the last item to the first.
    fn select_next_wrap(&mut self, total_items: usize);

    /// Move up, wrapping from the first item to the last.
    fn select_previous_wrap(&mut self, total_items: usize);

    /// Keep the selection valid after the list was replaced.
    ///
    /// Empty lists clear the selection; otherwise the index is clamped and
    /// a missing selection becomes the first item.
    fn clamp_to(&mut self, total_items: usize);

    /// Apply a navigation action. Returns `true` if the action was handled.
    fn navigate(&mut self, action: Action, total_items: usize) -> bool;
}

impl ListStateExt for ListState {
    fn move_up_by(&mut self, count: usize, total_items: usize) {
        if total_items == 0 {
            return;
        }
        let current = self.selected().unwrap_or(0);
        self.select(Some(current.saturating_sub(count)));
    }

    fn move_down_by(&mut self, count: usize, total_items: usize) {
        if total_items == 0 {
            return;
        }
        let current = self.selected().unwrap_or(0);
        self.select(Some((current + count).min(total_items - 1)));
    }

    fn select_next_wrap(&mut self, total_items: usize) {
        if total_items == 0 {
            return;
        }
        let next = match self.selected() {
            Some(current) if current + 1 < total_items => current + 1,
            Some(_) => 0,
            None => 0,
        };
        self.select(Some(next));
    }

    fn select_previous_wrap(&mut self, total_items: usize) {
        if total_items == 0 {
            return;
        }
        let previous = match self.selected() {
            Some(0) | None => total_items - 1,
            Some(current) => current.min(total_items) - 1,
        };
        self.select(Some(previous));
    }

    fn clamp_to(&mut self, total_items: usize) {
        if total_items == 0 {
            self.select(None);
            return;
        }
        let index = self.selected().unwrap_or(0).min(total_items - 1);
        self.select(Some(index));
    }

    fn navigate(&mut self, action: Action, total_items: usize) -> bool {
        match action {
            Action::MoveUp => self.move_up_by(1, total_items),
            Action::MoveDown => self.move_down_by(1, total_items),
            Action::PageUp => self.move_up_by(DEFAULT_PAGE_SIZE, total_items),
            Action::PageDown => self.move_down_by(DEFAULT_PAGE_SIZE, total_items),
            Action::GoToTop => self.move_up_by(usize::MAX, total_items),
            Action::GoToEnd => self.move_down_by(usize::MAX, total_items),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_saturates() {
        let mut state = ListState::default();
        state.select(Some(5));
        state.move_up_by(10, 10);
        assert_eq!(state.selected(), Some(0));

        state.move_down_by(50, 10);
        assert_eq!(state.selected(), Some(9));
    }

    #[test]
    fn test_wrap_navigation() {
        let mut state = ListState::default();
        state.select(Some(0));
        state.select_previous_wrap(5);
        assert_eq!(state.selected(), Some(4));
        state.select_next_wrap(5);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_wrap_without_selection_starts_at_ends() {
        let mut state = ListState::default();
        state.select_next_wrap(3);
        assert_eq!(state.selected(), Some(0));

        let mut state = ListState::default();
        state.select_previous_wrap(3);
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn test_clamp_after_list_shrinks() {
        let mut state = ListState::default();
        state.select(Some(7));
        state.clamp_to(3);
        assert_eq!(state.selected(), Some(2));

        state.clamp_to(0);
        assert_eq!(state.selected(), None);

        state.clamp_to(4);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_navigate_actions() {
        let mut state = ListState::default();
        state.select(Some(0));
        assert!(state.navigate(Action::GoToEnd, 25));
        assert_eq!(state.selected(), Some(24));
        assert!(state.navigate(Action::PageUp, 25));
        assert_eq!(state.selected(), Some(14));
        assert!(state.navigate(Action::GoToTop, 25));
        assert_eq!(state.selected(), Some(0));
        assert!(!state.navigate(Action::Confirm, 25));
    }

    #[test]
    fn test_navigate_empty_list_is_noop() {
        let mut state = ListState::default();
        assert!(state.navigate(Action::MoveDown, 0));
        assert_eq!(state.selected(), None);
    }
}
