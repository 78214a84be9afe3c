// SPDX-License-Identifier: MPL-2.0
//! Wrap-around navigation cursor over the screen list.
//!
//! The cursor only moves when a record is actually shown. Computing the
//! next or previous index does not commit anything, so a navigation request
//! that is still loading never shifts the cursor.

use crate::domain::screen::{ScreenList, ScreenRecord};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationError {
    /// The requested index lies outside `[0, len - 1]`.
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::IndexOutOfRange { index, len } => {
                write!(f, "screen index {index} out of range for {len} screens")
            }
        }
    }
}

impl std::error::Error for NavigationError {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenCursor {
    len: usize,
    current: Option<usize>,
}

impl ScreenCursor {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, current: None }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the record most recently shown, if any.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Navigation controls are only reachable for a non-empty list with a shown record.
    #[must_use]
    pub fn can_navigate(&self) -> bool {
        self.len > 0 && self.current.is_some()
    }

    /// `(current + 1) mod len`.
    #[must_use]
    pub fn next_index(&self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.current.map(|index| (index + 1) % self.len)
    }

    /// `(current - 1 + len) mod len`.
    #[must_use]
    pub fn previous_index(&self) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.current.map(|index| (index + self.len - 1) % self.len)
    }

    /// Validates an index against the list length.
    pub fn check(&self, index: usize) -> Result<usize, NavigationError> {
        if index < self.len {
            Ok(index)
        } else {
            Err(NavigationError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    /// Commits `index` as the shown record.
    pub fn go_to(&mut self, index: usize) -> Result<usize, NavigationError> {
        let index = self.check(index)?;
        self.current = Some(index);
        Ok(index)
    }

    /// Looks up the record for `index` in `list`.
    pub fn resolve<'a>(
        &self,
        list: &'a ScreenList,
        index: usize,
    ) -> Result<&'a ScreenRecord, NavigationError> {
        let index = self.check(index)?;
        list.get(index).ok_or(NavigationError::IndexOutOfRange {
            index,
            len: list.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor_at(len: usize, index: usize) -> ScreenCursor {
        let mut cursor = ScreenCursor::new(len);
        cursor.go_to(index).unwrap();
        cursor
    }

    #[test]
    fn next_wraps_past_last() {
        assert_eq!(cursor_at(5, 4).next_index(), Some(0));
        assert_eq!(cursor_at(5, 2).next_index(), Some(3));
    }

    #[test]
    fn previous_wraps_before_first() {
        assert_eq!(cursor_at(5, 0).previous_index(), Some(4));
        assert_eq!(cursor_at(5, 3).previous_index(), Some(2));
    }

    #[test]
    fn next_applied_len_times_returns_to_start() {
        for len in 1..=7 {
            for start in 0..len {
                let mut cursor = cursor_at(len, start);
                for _ in 0..len {
                    let next = cursor.next_index().unwrap();
                    cursor.go_to(next).unwrap();
                }
                assert_eq!(cursor.current(), Some(start));
            }
        }
    }

    #[test]
    fn previous_inverts_next() {
        for len in 1..=6 {
            for start in 0..len {
                let mut cursor = cursor_at(len, start);
                let next = cursor.next_index().unwrap();
                cursor.go_to(next).unwrap();
                assert_eq!(cursor.previous_index(), Some(start));
            }
        }
    }

    #[test]
    fn single_screen_wraps_onto_itself() {
        let cursor = cursor_at(1, 0);
        assert_eq!(cursor.next_index(), Some(0));
        assert_eq!(cursor.previous_index(), Some(0));
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut cursor = ScreenCursor::new(3);
        assert_eq!(
            cursor.go_to(3),
            Err(NavigationError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn resolve_returns_record_or_range_error() {
        let list = ScreenList::new(vec![ScreenRecord::new("a.png"), ScreenRecord::new("b.png")]);
        let cursor = ScreenCursor::new(list.len());
        assert_eq!(
            cursor.resolve(&list, 1).map(|r| r.image_name.as_str()),
            Ok("b.png")
        );
        assert_eq!(
            cursor.resolve(&list, 2).map(|r| r.index),
            Err(NavigationError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn empty_list_cannot_navigate() {
        let cursor = ScreenCursor::new(0);
        assert!(!cursor.can_navigate());
        assert_eq!(cursor.next_index(), None);
        assert_eq!(cursor.previous_index(), None);
    }

    #[test]
    fn nothing_shown_means_no_neighbour() {
        let cursor = ScreenCursor::new(4);
        assert_eq!(cursor.next_index(), None);
        assert!(!cursor.can_navigate());
    }
}
