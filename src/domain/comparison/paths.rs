// SPDX-License-Identifier: MPL-2.0
//! Image paths derived from a screen's image name.
//!
//! Paths are relative to the report base; backends resolve them into URLs
//! or filesystem paths.

use super::image_set::ImageSet;
use crate::domain::screen::ScreenRecord;

pub const APPROVED_PREFIX: &str = "approvedScreens";
pub const BUILD_PREFIX: &str = "buildScreens";
pub const DIFF_PREFIX: &str = "buildDiffs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedPaths {
    pub approved: String,
    pub build: String,
    pub mask: String,
}

impl DerivedPaths {
    #[must_use]
    pub fn for_image(image_name: &str) -> Self {
        Self {
            approved: format!("{APPROVED_PREFIX}/{image_name}"),
            build: format!("{BUILD_PREFIX}/{image_name}"),
            mask: format!("{DIFF_PREFIX}/{image_name}"),
        }
    }

    /// All three roles, as loaded by the full-screen overlay.
    #[must_use]
    pub fn all(&self) -> ImageSet<String> {
        ImageSet {
            build: Some(self.build.clone()),
            approved: Some(self.approved.clone()),
            diff: Some(self.mask.clone()),
        }
    }

    /// Only the roles the record actually has, as loaded inline.
    #[must_use]
    pub fn present_for(&self, record: &ScreenRecord) -> ImageSet<String> {
        ImageSet {
            build: record.has_build_image().then(|| self.build.clone()),
            approved: record.has_approved_image().then(|| self.approved.clone()),
            diff: record.has_difference_image().then(|| self.mask.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::screen::{ExistingState, NewScreenState};

    #[test]
    fn prefixes_follow_report_layout() {
        let paths = DerivedPaths::for_image("home.png");
        assert_eq!(paths.approved, "approvedScreens/home.png");
        assert_eq!(paths.build, "buildScreens/home.png");
        assert_eq!(paths.mask, "buildDiffs/home.png");
    }

    #[test]
    fn overlay_loads_all_three() {
        assert_eq!(DerivedPaths::for_image("x.png").all().len(), 3);
    }

    #[test]
    fn inline_loads_only_present_roles() {
        let mut record = ScreenRecord::new("x.png");
        record.new_screen = NewScreenState::UnApproved;
        let set = DerivedPaths::for_image("x.png").present_for(&record);
        assert_eq!(set.len(), 1);
        assert!(set.build.is_some());

        record.new_screen = NewScreenState::None;
        record.existing = ExistingState::AboveThreshold;
        let set = DerivedPaths::for_image("x.png").present_for(&record);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn record_without_images_loads_nothing() {
        let record = ScreenRecord::new("x.png");
        assert!(DerivedPaths::for_image("x.png")
            .present_for(&record)
            .is_empty());
    }
}
