// SPDX-License-Identifier: MPL-2.0
//! Report stored in a local directory.
//!
//! ```text
//! {base}/approvedScreens/   approved baselines
//! {base}/buildScreens/      screenshots of the current build
//! {base}/buildDiffs/        difference masks
//! {base}/{list_path}        optional published screen list
//! ```
//!
//! Without a published list, screens are the sorted union of the three
//! directories and their status is inferred from which files exist.

use crate::application::port::{
    FetchError, ImageFetcher, RemoteAction, RemoteActionBridge, RemoteError, ScreenSource,
};
use crate::domain::comparison::{APPROVED_PREFIX, BUILD_PREFIX, DIFF_PREFIX};
use crate::domain::screen::{ExistingState, NewScreenState, ScreenList, ScreenRecord};
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

use super::wire::{mark_approved, parse_screen_list};

#[derive(Debug, Clone)]
pub struct LocalReport {
    base: PathBuf,
    list_path: String,
}

impl LocalReport {
    pub fn new(base: impl Into<PathBuf>, list_path: &str) -> Self {
        Self {
            base: base.into(),
            list_path: list_path.to_string(),
        }
    }

    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Joins a relative path, refusing anything that escapes the base.
    fn resolve(&self, relative_path: &str) -> Option<PathBuf> {
        let relative = Path::new(relative_path);
        relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
            .then(|| self.base.join(relative))
    }

    fn image_path(&self, prefix: &str, name: &str) -> Result<PathBuf, RemoteError> {
        self.resolve(&format!("{prefix}/{name}"))
            .ok_or_else(|| RemoteError::Io(format!("invalid image name: {name}")))
    }

    /// Marks `name` approved in the published list, if there is one.
    async fn record_approval(&self, name: &str) -> Result<(), RemoteError> {
        let Some(list) = self.resolve(&self.list_path) else {
            return Ok(());
        };
        let bytes = match fs::read(&list).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(RemoteError::Io(e.to_string())),
        };
        let updated =
            mark_approved(&bytes, name).map_err(|e| RemoteError::Io(e.to_string()))?;
        if let Some(updated) = updated {
            fs::write(&list, updated)
                .await
                .map_err(|e| RemoteError::Io(e.to_string()))?;
        }
        Ok(())
    }

    async fn file_names(&self, prefix: &str) -> Result<BTreeSet<String>, FetchError> {
        let mut names = BTreeSet::new();
        let mut entries = match fs::read_dir(self.base.join(prefix)).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(names),
            Err(e) => return Err(FetchError::Io(e.to_string())),
        };
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| FetchError::Io(e.to_string()))?
        {
            let is_file = entry
                .file_type()
                .await
                .map(|t| t.is_file())
                .unwrap_or(false);
            if is_file {
                names.insert(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }

    /// Builds the list from directory contents.
    async fn scan(&self) -> Result<ScreenList, FetchError> {
        let approved = self.file_names(APPROVED_PREFIX).await?;
        let build = self.file_names(BUILD_PREFIX).await?;
        let diffs = self.file_names(DIFF_PREFIX).await?;

        let all: BTreeSet<&String> = approved.iter().chain(&build).chain(&diffs).collect();
        let records = all
            .into_iter()
            .map(|name| {
                infer_record(
                    name,
                    approved.contains(name),
                    build.contains(name),
                    diffs.contains(name),
                )
            })
            .collect();
        Ok(ScreenList::new(records))
    }
}

/// Classifies a screen from the files present for it.
///
/// A mask alone cannot tell below from above threshold; it is reported as
/// above threshold so it is never hidden among passing screens.
fn infer_record(name: &str, approved: bool, build: bool, diff: bool) -> ScreenRecord {
    let mut record = ScreenRecord::new(name);
    record.approved_image = approved;
    record.build_image = build;
    match (approved, build, diff) {
        (true, true, true) => record.existing = ExistingState::AboveThreshold,
        (true, true, false) => record.existing = ExistingState::Equal,
        (false, true, _) => record.new_screen = NewScreenState::UnApproved,
        _ => {}
    }
    record
}

#[async_trait]
impl ScreenSource for LocalReport {
    async fn load_screens(&self) -> Result<ScreenList, FetchError> {
        if let Some(list) = self.resolve(&self.list_path) {
            match fs::read(&list).await {
                Ok(bytes) => return parse_screen_list(&bytes),
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(FetchError::Io(e.to_string())),
            }
        }
        self.scan().await
    }
}

#[async_trait]
impl ImageFetcher for LocalReport {
    async fn fetch(&self, relative_path: &str) -> Result<Vec<u8>, FetchError> {
        let path = self
            .resolve(relative_path)
            .ok_or_else(|| FetchError::NotFound(relative_path.to_string()))?;
        fs::read(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => FetchError::NotFound(relative_path.to_string()),
            _ => FetchError::Io(e.to_string()),
        })
    }
}

#[async_trait]
impl RemoteActionBridge for LocalReport {
    async fn dispatch(&self, action: &RemoteAction) -> Result<(), RemoteError> {
        tracing::info!(base = %self.base.display(), %action, "applying local action");
        let io = |e: std::io::Error| RemoteError::Io(e.to_string());
        match action {
            RemoteAction::Approve(name) => {
                let source = self.image_path(BUILD_PREFIX, name)?;
                let target = self.image_path(APPROVED_PREFIX, name)?;
                if !fs::try_exists(&source).await.map_err(io)? {
                    return Err(RemoteError::MissingBuildImage(name.clone()));
                }
                fs::create_dir_all(self.base.join(APPROVED_PREFIX))
                    .await
                    .map_err(io)?;
                fs::copy(&source, &target).await.map_err(io)?;
                self.record_approval(name).await?;
            }
            RemoteAction::Delete(name) => {
                let target = self.image_path(APPROVED_PREFIX, name)?;
                match fs::remove_file(&target).await {
                    Ok(()) => {}
                    Err(e) if e.kind() == ErrorKind::NotFound => {}
                    Err(e) => return Err(io(e)),
                }
            }
            RemoteAction::DeleteAll => {
                let names = self
                    .file_names(APPROVED_PREFIX)
                    .await
                    .map_err(|e| RemoteError::Io(e.to_string()))?;
                let dir = self.base.join(APPROVED_PREFIX);
                for name in names {
                    fs::remove_file(dir.join(name)).await.map_err(io)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inference_covers_file_combinations() {
        let r = infer_record("a", true, true, true);
        assert_eq!(r.existing, ExistingState::AboveThreshold);
        assert!(r.has_difference_image());

        let r = infer_record("a", true, true, false);
        assert_eq!(r.existing, ExistingState::Equal);

        let r = infer_record("a", false, true, false);
        assert_eq!(r.new_screen, NewScreenState::UnApproved);

        let r = infer_record("a", true, false, false);
        assert!(r.has_approved_image());
        assert!(!r.has_build_image());
        assert_eq!(r.status_key(), "screen-status-inactive");
    }

    #[test]
    fn resolve_refuses_parent_components() {
        let report = LocalReport::new("/srv/report", "data/JSONData");
        assert!(report.resolve("../etc/passwd").is_none());
        assert!(report.resolve("/etc/passwd").is_none());
        assert_eq!(
            report.resolve("buildScreens/a.png"),
            Some(PathBuf::from("/srv/report/buildScreens/a.png"))
        );
    }

    #[tokio::test]
    async fn scan_of_missing_directories_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let report = LocalReport::new(dir.path(), "data/JSONData");
        let list = report.load_screens().await.expect("load");
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn published_list_takes_precedence() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir_all(dir.path().join("buildScreens")).expect("mkdir");
        std::fs::write(dir.path().join("buildScreens/x.png"), b"x").expect("write");
        std::fs::write(
            dir.path().join("list.json"),
            br#"[{"imageName": "y.png", "existing": "belowThreshold"}]"#,
        )
        .expect("write");

        let report = LocalReport::new(dir.path(), "list.json");
        let list = report.load_screens().await.expect("load");
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).map(|r| r.image_name.as_str()), Some("y.png"));
    }

    #[tokio::test]
    async fn fetch_missing_image_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let report = LocalReport::new(dir.path(), "data/JSONData");
        assert!(matches!(
            report.fetch("buildDiffs/none.png").await,
            Err(FetchError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn approve_is_recorded_in_published_list() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::create_dir_all(dir.path().join("buildScreens")).expect("mkdir");
        std::fs::write(dir.path().join("buildScreens/x.png"), b"x").expect("write");
        std::fs::write(
            dir.path().join("list.json"),
            br#"[{"imageName": "x.png", "newScreen": "unApproved", "buildImage": true}]"#,
        )
        .expect("write");

        let report = LocalReport::new(dir.path(), "list.json");
        report
            .dispatch(&RemoteAction::Approve("x.png".into()))
            .await
            .expect("approve");

        assert!(dir.path().join("approvedScreens/x.png").exists());
        let list = report.load_screens().await.expect("reload");
        let record = list.get(0).expect("x.png");
        assert!(record.approved);
        assert_eq!(record.approval_key(), Some("screen-approved"));
    }
}
