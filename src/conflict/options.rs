// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use bon::Builder;

use crate::utility::fs::walk::WalkOptions;

/// How mod folders are scanned for conflicts.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
pub struct ScanOptions {
    /// Include hidden files/directories
    #[builder(setters(name = with_include_hidden), default = false)]
    include_hidden: bool,
    /// Follow symbolic links
    #[builder(setters(name = with_follow_links), default = false)]
    follow_links: bool,
    /// Compare relative paths case-sensitively
    #[builder(setters(name = with_case_sensitive), default = true)]
    case_sensitive: bool,
    /// Glob patterns of files that never count as conflicts
    #[builder(setters(name = with_ignore), default)]
    ignore: Vec<String>,
    /// Keep the folder index between selections
    #[builder(setters(name = with_reuse_index), default = false)]
    reuse_index: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ScanOptions {
    #[must_use]
    pub const fn include_hidden(&self) -> bool {
        self.include_hidden
    }

    #[must_use]
    pub const fn follow_links(&self) -> bool {
        self.follow_links
    }

    #[must_use]
    pub const fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    #[must_use]
    pub fn ignore(&self) -> &[String] {
        &self.ignore
    }

    #[must_use]
    pub const fn reuse_index(&self) -> bool {
        self.reuse_index
    }

    /// Walk options for one mod folder.
    #[must_use]
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions::builder()
            .with_include_hidden(self.include_hidden)
            .with_follow_links(self.follow_links)
            .with_ignore(self.ignore.clone())
            .build()
    }

    /// Canonical form of a relative path under these options.
    #[must_use]
    pub fn normalize(&self, relative: String) -> String {
        if self.case_sensitive {
            relative
        } else {
            relative.to_lowercase()
        }
    }
}
