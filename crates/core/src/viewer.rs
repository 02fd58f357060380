//! Always-unlocked selection over a fixed list of display items.
//!
//! The counterpart to the quiz engine's gated navigation: step, phase,
//! card, and scenario pickers all show a fixed list and track one
//! selected index with no ordering constraints.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ViewerError {
    #[error("cannot view an empty list")]
    Empty,

    #[error("initial selection {index} is out of range for {len} items")]
    SelectionOutOfRange { index: usize, len: usize },
}

/// Tracks which item of a fixed list is currently displayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TopicViewer {
    len: usize,
    selected: usize,
}

impl TopicViewer {
    /// Viewer over `len` items, starting at the first.
    ///
    /// # Errors
    ///
    /// Returns `ViewerError::Empty` for a zero-length list.
    pub fn new(len: usize) -> Result<Self, ViewerError> {
        Self::with_selected(len, 0)
    }

    /// Viewer over `len` items with an explicit starting selection.
    ///
    /// # Errors
    ///
    /// Returns `ViewerError` if the list is empty or the starting
    /// selection is out of range.
    pub fn with_selected(len: usize, selected: usize) -> Result<Self, ViewerError> {
        if len == 0 {
            return Err(ViewerError::Empty);
        }
        if selected >= len {
            return Err(ViewerError::SelectionOutOfRange {
                index: selected,
                len,
            });
        }
        Ok(Self { len, selected })
    }

    /// Select an item unconditionally. Invalid indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.selected = index;
        }
    }

    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(TopicViewer::new(0).unwrap_err(), ViewerError::Empty);
    }

    #[test]
    fn starts_at_first_item_by_default() {
        let viewer = TopicViewer::new(5).unwrap();
        assert_eq!(viewer.selected(), 0);
    }

    #[test]
    fn explicit_start_must_be_in_range() {
        let viewer = TopicViewer::with_selected(4, 3).unwrap();
        assert_eq!(viewer.selected(), 3);

        let err = TopicViewer::with_selected(4, 4).unwrap_err();
        assert_eq!(err, ViewerError::SelectionOutOfRange { index: 4, len: 4 });
    }

    #[test]
    fn select_is_unconditional_within_bounds() {
        let mut viewer = TopicViewer::new(3).unwrap();
        viewer.select(2);
        assert_eq!(viewer.selected(), 2);
        viewer.select(0);
        assert_eq!(viewer.selected(), 0);
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut viewer = TopicViewer::new(3).unwrap();
        viewer.select(1);
        viewer.select(7);
        assert_eq!(viewer.selected(), 1);
    }
}
