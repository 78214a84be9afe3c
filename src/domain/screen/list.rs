// SPDX-License-Identifier: MPL-2.0
//! Ordered screen list with derived positional flags.
//!
//! Insertion order is display order and navigation order. Positional data
//! (`index`, `first`, `last`) is recomputed by [`ScreenList::prepare`] every
//! time the list is built and never read back from the source data.

use super::record::{ExistingState, NewScreenState, ScreenRecord};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenList {
    records: Vec<ScreenRecord>,
}

impl ScreenList {
    /// Builds a prepared list from records in display order.
    #[must_use]
    pub fn new(records: Vec<ScreenRecord>) -> Self {
        let mut list = Self { records };
        list.prepare();
        list
    }

    /// Recomputes `index`, `first` and `last` for every record.
    pub fn prepare(&mut self) {
        let last_index = self.records.len().checked_sub(1);
        for (index, record) in self.records.iter_mut().enumerate() {
            record.index = index;
            record.first = index == 0;
            record.last = Some(index) == last_index;
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ScreenRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScreenRecord> {
        self.records.iter()
    }

    /// Finds a screen by its image name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&ScreenRecord> {
        self.records.iter().find(|r| r.image_name == name)
    }

    fn filtered(&self, predicate: impl Fn(&ScreenRecord) -> bool) -> Vec<&ScreenRecord> {
        self.records.iter().filter(|r| predicate(r)).collect()
    }

    pub fn approved_screens(&self) -> Vec<&ScreenRecord> {
        self.filtered(ScreenRecord::has_approved_image)
    }

    pub fn build_screens(&self) -> Vec<&ScreenRecord> {
        self.filtered(ScreenRecord::has_build_image)
    }

    pub fn difference_screens(&self) -> Vec<&ScreenRecord> {
        self.filtered(ScreenRecord::has_difference_image)
    }

    /// Screens with both an approved baseline and a build image.
    pub fn active_screens(&self) -> Vec<&ScreenRecord> {
        self.filtered(|r| r.has_approved_image() && r.has_build_image())
    }

    /// Screens that were approved once but no longer appear in the build.
    pub fn inactive_screens(&self) -> Vec<&ScreenRecord> {
        self.filtered(|r| r.has_approved_image() && !r.has_build_image())
    }

    pub fn new_screens(&self) -> Vec<&ScreenRecord> {
        self.filtered(ScreenRecord::is_new_screen)
    }

    pub fn new_auto_approved_screens(&self) -> Vec<&ScreenRecord> {
        self.filtered(|r| r.new_screen == NewScreenState::AutoApproved)
    }

    pub fn new_unapproved_screens(&self) -> Vec<&ScreenRecord> {
        self.filtered(|r| r.new_screen == NewScreenState::UnApproved)
    }

    pub fn existing_screens(&self) -> Vec<&ScreenRecord> {
        self.filtered(ScreenRecord::is_existing_screen)
    }

    pub fn existing_equal_screens(&self) -> Vec<&ScreenRecord> {
        self.filtered(|r| r.existing == ExistingState::Equal)
    }

    pub fn existing_below_threshold_screens(&self) -> Vec<&ScreenRecord> {
        self.filtered(|r| r.existing == ExistingState::BelowThreshold)
    }

    pub fn existing_above_threshold_screens(&self) -> Vec<&ScreenRecord> {
        self.filtered(|r| r.existing == ExistingState::AboveThreshold)
    }

    /// Category counts for the report header.
    #[must_use]
    pub fn summary(&self) -> ScreenSummary {
        ScreenSummary {
            total: self.len(),
            approved: self.approved_screens().len(),
            build: self.build_screens().len(),
            difference: self.difference_screens().len(),
            active: self.active_screens().len(),
            inactive: self.inactive_screens().len(),
            new_auto_approved: self.new_auto_approved_screens().len(),
            new_unapproved: self.new_unapproved_screens().len(),
            equal: self.existing_equal_screens().len(),
            below_threshold: self.existing_below_threshold_screens().len(),
            above_threshold: self.existing_above_threshold_screens().len(),
        }
    }
}

impl<'a> IntoIterator for &'a ScreenList {
    type Item = &'a ScreenRecord;
    type IntoIter = std::slice::Iter<'a, ScreenRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Per-category screen counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenSummary {
    pub total: usize,
    pub approved: usize,
    pub build: usize,
    pub difference: usize,
    pub active: usize,
    pub inactive: usize,
    pub new_auto_approved: usize,
    pub new_unapproved: usize,
    pub equal: usize,
    pub below_threshold: usize,
    pub above_threshold: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(names: &[&str]) -> Vec<ScreenRecord> {
        names.iter().map(|n| ScreenRecord::new(*n)).collect()
    }

    #[test]
    fn empty_list_has_no_flags() {
        let list = ScreenList::new(Vec::new());
        assert!(list.is_empty());
        assert_eq!(list.iter().filter(|r| r.first || r.last).count(), 0);
    }

    #[test]
    fn single_element_is_first_and_last() {
        let list = ScreenList::new(names(&["only.png"]));
        let record = list.get(0).unwrap();
        assert!(record.first);
        assert!(record.last);
        assert_eq!(record.index, 0);
    }

    #[test]
    fn only_ends_are_flagged() {
        let list = ScreenList::new(names(&["a", "b", "c", "d"]));
        let firsts: Vec<usize> = list.iter().filter(|r| r.first).map(|r| r.index).collect();
        let lasts: Vec<usize> = list.iter().filter(|r| r.last).map(|r| r.index).collect();
        assert_eq!(firsts, vec![0]);
        assert_eq!(lasts, vec![3]);
    }

    #[test]
    fn stale_positional_data_is_overwritten() {
        let mut records = names(&["a", "b", "c"]);
        records[1].first = true;
        records[1].index = 42;
        records[2].last = false;
        let list = ScreenList::new(records);
        let indices: Vec<usize> = list.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert!(!list.get(1).unwrap().first);
        assert!(list.get(2).unwrap().last);
    }

    #[test]
    fn summary_counts_categories() {
        let mut records = names(&["equal", "above", "new", "gone"]);
        records[0].existing = ExistingState::Equal;
        records[1].existing = ExistingState::AboveThreshold;
        records[2].new_screen = NewScreenState::UnApproved;
        records[3].approved_image = true;
        let summary = ScreenList::new(records).summary();

        assert_eq!(summary.total, 4);
        assert_eq!(summary.active, 2);
        assert_eq!(summary.inactive, 1);
        assert_eq!(summary.difference, 1);
        assert_eq!(summary.new_unapproved, 1);
        assert_eq!(summary.approved, 3);
        assert_eq!(summary.build, 3);
    }

    #[test]
    fn by_name_finds_records() {
        let list = ScreenList::new(names(&["a.png", "b.png"]));
        assert_eq!(list.by_name("b.png").map(|r| r.index), Some(1));
        assert!(list.by_name("c.png").is_none());
    }
}
