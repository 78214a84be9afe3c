// SPDX-License-Identifier: MPL-2.0
//! A group of up to three images sharing one comparison.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageRole {
    /// The screenshot produced by the current build.
    Build,
    /// The previously approved baseline.
    Approved,
    /// The pre-computed difference mask.
    Diff,
}

impl ImageRole {
    pub const ALL: [ImageRole; 3] = [ImageRole::Build, ImageRole::Approved, ImageRole::Diff];
}

/// One optional value per [`ImageRole`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSet<T> {
    pub build: Option<T>,
    pub approved: Option<T>,
    pub diff: Option<T>,
}

impl<T> Default for ImageSet<T> {
    fn default() -> Self {
        Self {
            build: None,
            approved: None,
            diff: None,
        }
    }
}

impl<T> ImageSet<T> {
    #[must_use]
    pub fn get(&self, role: ImageRole) -> Option<&T> {
        match role {
            ImageRole::Build => self.build.as_ref(),
            ImageRole::Approved => self.approved.as_ref(),
            ImageRole::Diff => self.diff.as_ref(),
        }
    }

    pub fn set(&mut self, role: ImageRole, value: T) {
        match role {
            ImageRole::Build => self.build = Some(value),
            ImageRole::Approved => self.approved = Some(value),
            ImageRole::Diff => self.diff = Some(value),
        }
    }

    /// Number of present roles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Present roles in `Build`, `Approved`, `Diff` order.
    pub fn iter(&self) -> impl Iterator<Item = (ImageRole, &T)> {
        ImageRole::ALL
            .into_iter()
            .filter_map(move |role| self.get(role).map(|value| (role, value)))
    }
}
