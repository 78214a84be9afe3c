// SPDX-License-Identifier: MPL-2.0
//! Screen record and its comparison classification.

use std::fmt;

/// How a screen that had no approved baseline was handled by the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewScreenState {
    /// The screen is not new.
    #[default]
    None,
    /// New screen that was approved automatically.
    AutoApproved,
    /// New screen still waiting for approval.
    UnApproved,
}

impl NewScreenState {
    /// Parses the wire value used by report data (`none`, `autoApproved`, `unApproved`).
    ///
    /// Unknown values map to [`NewScreenState::None`].
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value {
            "autoApproved" => Self::AutoApproved,
            "unApproved" => Self::UnApproved,
            _ => Self::None,
        }
    }

    /// Returns the wire value for this state.
    #[must_use]
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::AutoApproved => "autoApproved",
            Self::UnApproved => "unApproved",
        }
    }
}

/// How a screen with an approved baseline compared against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExistingState {
    /// The screen did not exist before.
    #[default]
    None,
    /// Identical to the approved baseline.
    Equal,
    /// Different, but the difference stayed below the threshold.
    BelowThreshold,
    /// Different, above the threshold.
    AboveThreshold,
}

impl ExistingState {
    /// Parses the wire value used by report data.
    ///
    /// Unknown values map to [`ExistingState::None`].
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value {
            "equal" => Self::Equal,
            "belowThreshold" => Self::BelowThreshold,
            "aboveThreshold" => Self::AboveThreshold,
            _ => Self::None,
        }
    }

    /// Returns the wire value for this state.
    #[must_use]
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Equal => "equal",
            Self::BelowThreshold => "belowThreshold",
            Self::AboveThreshold => "aboveThreshold",
        }
    }
}

/// One row of the screen list.
///
/// `index`, `first` and `last` are positional and only meaningful after the
/// owning [`ScreenList`](super::ScreenList) has prepared them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScreenRecord {
    pub image_name: String,
    pub index: usize,
    pub first: bool,
    pub last: bool,
    pub new_screen: NewScreenState,
    pub existing: ExistingState,
    /// An approved image was recorded explicitly.
    pub approved_image: bool,
    /// A build image was recorded explicitly.
    pub build_image: bool,
    /// The build image was approved during this report's lifetime.
    pub approved: bool,
    /// Additional display fields carried through from the report data.
    pub extra: Vec<(String, String)>,
}

impl ScreenRecord {
    /// Creates a record with no classification.
    pub fn new(image_name: impl Into<String>) -> Self {
        Self {
            image_name: image_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_new_screen(&self) -> bool {
        self.new_screen != NewScreenState::None
    }

    #[must_use]
    pub fn is_existing_screen(&self) -> bool {
        self.existing != ExistingState::None
    }

    /// An approved baseline is available for this screen.
    #[must_use]
    pub fn has_approved_image(&self) -> bool {
        self.approved_image || self.is_existing_screen()
    }

    /// A build screenshot is available for this screen.
    #[must_use]
    pub fn has_build_image(&self) -> bool {
        self.build_image || self.is_new_screen() || self.is_existing_screen()
    }

    /// A difference mask was computed for this screen.
    #[must_use]
    pub fn has_difference_image(&self) -> bool {
        matches!(
            self.existing,
            ExistingState::BelowThreshold | ExistingState::AboveThreshold
        )
    }

    /// Looks up an additional display field by name.
    #[must_use]
    pub fn extra_field(&self, key: &str) -> Option<&str> {
        self.extra
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// i18n key of the approval badge, once the build image was approved.
    #[must_use]
    pub fn approval_key(&self) -> Option<&'static str> {
        self.approved.then_some("screen-approved")
    }

    /// i18n key describing the comparison outcome of this screen.
    #[must_use]
    pub fn status_key(&self) -> &'static str {
        match (self.new_screen, self.existing) {
            (NewScreenState::AutoApproved, _) => "screen-status-new-auto-approved",
            (NewScreenState::UnApproved, _) => "screen-status-new-unapproved",
            (_, ExistingState::Equal) => "screen-status-equal",
            (_, ExistingState::BelowThreshold) => "screen-status-below-threshold",
            (_, ExistingState::AboveThreshold) => "screen-status-above-threshold",
            _ if self.has_approved_image() && !self.has_build_image() => "screen-status-inactive",
            _ => "screen-status-unknown",
        }
    }
}

impl fmt::Display for ScreenRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.index, self.image_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approval_badge_follows_approved_flag() {
        let mut record = ScreenRecord::new("login.png");
        assert_eq!(record.approval_key(), None);
        record.approved = true;
        assert_eq!(record.approval_key(), Some("screen-approved"));
    }

    #[test]
    fn plain_record_has_no_images() {
        let record = ScreenRecord::new("login.png");
        assert!(!record.has_approved_image());
        assert!(!record.has_build_image());
        assert!(!record.has_difference_image());
    }

    #[test]
    fn existing_screen_implies_approved_and_build() {
        let mut record = ScreenRecord::new("login.png");
        record.existing = ExistingState::Equal;
        assert!(record.has_approved_image());
        assert!(record.has_build_image());
        assert!(!record.has_difference_image());
    }

    #[test]
    fn thresholded_screens_have_difference_image() {
        let mut record = ScreenRecord::new("a.png");
        record.existing = ExistingState::BelowThreshold;
        assert!(record.has_difference_image());
        record.existing = ExistingState::AboveThreshold;
        assert!(record.has_difference_image());
    }

    #[test]
    fn new_screen_has_build_only() {
        let mut record = ScreenRecord::new("a.png");
        record.new_screen = NewScreenState::UnApproved;
        assert!(record.has_build_image());
        assert!(!record.has_approved_image());
        assert_eq!(record.status_key(), "screen-status-new-unapproved");
    }

    #[test]
    fn approved_only_screen_is_inactive() {
        let mut record = ScreenRecord::new("old.png");
        record.approved_image = true;
        assert_eq!(record.status_key(), "screen-status-inactive");
    }

    #[test]
    fn wire_values_parse_and_fall_back() {
        assert_eq!(
            ExistingState::from_wire("aboveThreshold"),
            ExistingState::AboveThreshold
        );
        assert_eq!(ExistingState::from_wire("bogus"), ExistingState::None);
        assert_eq!(
            NewScreenState::from_wire("autoApproved"),
            NewScreenState::AutoApproved
        );
        assert_eq!(NewScreenState::UnApproved.as_wire(), "unApproved");
    }

    #[test]
    fn extra_fields_are_looked_up_by_key() {
        let mut record = ScreenRecord::new("a.png");
        record.extra.push(("browser".into(), "firefox".into()));
        assert_eq!(record.extra_field("browser"), Some("firefox"));
        assert_eq!(record.extra_field("os"), None);
    }
}
