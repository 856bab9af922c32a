// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::options::ScanOptions;
use crate::error::FsError;
use crate::utility::fs::walk::relative_files;

/// Relative file path to providing folders, and back.
#[derive(Debug, Clone, Default)]
pub struct ConflictIndex {
    by_path: BTreeMap<String, BTreeSet<PathBuf>>,
    by_folder: BTreeMap<PathBuf, BTreeSet<String>>,
    missing: BTreeSet<PathBuf>,
}

impl ConflictIndex {
    /// Scans every folder once.
    ///
    /// Missing folders are logged, remembered and skipped.
    ///
    /// # Errors
    ///
    /// Returns `FsError::InvalidPattern` if an ignore glob is invalid.
    pub fn build<'a, I>(folders: I, options: &ScanOptions) -> Result<Self, FsError>
    where
        I: IntoIterator<Item = &'a Path>,
    {
        let mut index = Self::default();
        for folder in folders {
            index.scan_folder(folder, options)?;
        }
        debug!(
            folders = index.by_folder.len(),
            missing = index.missing.len(),
            paths = index.by_path.len(),
            "built conflict index"
        );
        Ok(index)
    }

    /// Adds one folder's files; folders already present are left alone.
    ///
    /// # Errors
    ///
    /// Returns `FsError::InvalidPattern` if an ignore glob is invalid. Other
    /// filesystem errors are logged and the folder is recorded as missing.
    pub fn scan_folder(&mut self, folder: &Path, options: &ScanOptions) -> Result<(), FsError> {
        if self.by_folder.contains_key(folder) || self.missing.contains(folder) {
            return Ok(());
        }

        let files = match relative_files(folder, &options.walk_options()) {
            Ok(files) => files,
            Err(e @ FsError::InvalidPattern { .. }) => return Err(e),
            Err(e) => {
                warn!(folder = %folder.display(), error = %e, "skipping mod folder");
                self.missing.insert(folder.to_path_buf());
                return Ok(());
            }
        };

        let files: BTreeSet<String> = files
            .into_iter()
            .map(|relative| options.normalize(relative))
            .collect();
        for relative in &files {
            self.by_path
                .entry(relative.clone())
                .or_default()
                .insert(folder.to_path_buf());
        }
        self.by_folder.insert(folder.to_path_buf(), files);
        Ok(())
    }

    /// Returns whether `folder` was requested but could not be scanned.
    #[must_use]
    pub fn is_missing(&self, folder: &Path) -> bool {
        self.missing.contains(folder)
    }

    /// Scanned folders, sorted.
    pub fn folders(&self) -> impl Iterator<Item = &Path> {
        self.by_folder.keys().map(PathBuf::as_path)
    }

    /// Relative files of a scanned folder.
    #[must_use]
    pub fn files_of(&self, folder: &Path) -> Option<&BTreeSet<String>> {
        self.by_folder.get(folder)
    }

    /// Folders providing `relative`, sorted.
    pub fn folders_providing(&self, relative: &str) -> impl Iterator<Item = &Path> {
        self.by_path
            .get(relative)
            .into_iter()
            .flatten()
            .map(PathBuf::as_path)
    }

    /// Returns whether two distinct folders share at least one relative path.
    #[must_use]
    pub fn overlaps(&self, a: &Path, b: &Path) -> bool {
        if a == b {
            return false;
        }
        match (self.files_of(a), self.files_of(b)) {
            (Some(a), Some(b)) => {
                let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
                small.iter().any(|relative| large.contains(relative))
            }
            _ => false,
        }
    }

    /// Relative paths both folders provide, sorted.
    #[must_use]
    pub fn shared_paths(&self, a: &Path, b: &Path) -> Vec<&str> {
        match (self.files_of(a), self.files_of(b)) {
            (Some(a), Some(b)) => a.intersection(b).map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Every other folder sharing a path with `folder`.
    #[must_use]
    pub fn conflicts_of(&self, folder: &Path) -> BTreeSet<&Path> {
        self.files_of(folder)
            .into_iter()
            .flatten()
            .flat_map(|relative| self.folders_providing(relative))
            .filter(|other| *other != folder)
            .collect()
    }
}
