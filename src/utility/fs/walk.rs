// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::FsError;
use bon::Builder;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::warn;
use wax::{Glob, Program};

/// Options for mod folder traversal.
#[derive(Debug, Clone, Default, Builder)]
pub struct WalkOptions {
    /// Maximum depth to traverse (None = unlimited)
    #[builder(setters(name = with_max_depth))]
    max_depth: Option<usize>,
    /// Follow symbolic links
    #[builder(setters(name = with_follow_links), default = false)]
    follow_links: bool,
    /// Include hidden files/directories
    #[builder(setters(name = with_include_hidden), default = false)]
    include_hidden: bool,
    /// Glob patterns, relative to the walk root, of files to leave out
    #[builder(setters(name = with_ignore), default)]
    ignore: Vec<String>,
}

impl WalkOptions {
    #[must_use]
    pub const fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    #[must_use]
    pub const fn follow_links(&self) -> bool {
        self.follow_links
    }

    #[must_use]
    pub const fn include_hidden(&self) -> bool {
        self.include_hidden
    }

    /// Returns the ignore patterns.
    #[must_use]
    pub fn ignore(&self) -> &[String] {
        &self.ignore
    }
}

/// Builds a serial `WalkBuilder`.
///
/// Mod folders are data, not source trees: no ignore files of any kind are
/// honoured.
fn build_walker(root: &Path, options: &WalkOptions) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false);
    builder.hidden(!options.include_hidden());
    builder.follow_links(options.follow_links());
    builder.max_depth(options.max_depth());
    builder
}

fn ensure_dir(root: &Path) -> Result<(), FsError> {
    if !root.exists() {
        return Err(FsError::missing(root));
    }
    if !root.is_dir() {
        return Err(FsError::NotADirectory(root.display().to_string()));
    }
    Ok(())
}

/// Compiles ignore patterns.
///
/// # Errors
///
/// Returns `FsError::InvalidPattern` for the first pattern that fails to parse.
pub fn compile_globs(patterns: &[String]) -> Result<Vec<Glob<'_>>, FsError> {
    patterns
        .iter()
        .map(|pattern| {
            Glob::new(pattern).map_err(|e| FsError::InvalidPattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })
        })
        .collect()
}

/// Converts a relative path to a `/`-separated string.
#[must_use]
pub fn normalize_relative(path: &Path) -> String {
    path.components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Lists every file under `root` as a `/`-separated path relative to `root`,
/// sorted.
///
/// Unreadable entries are logged and skipped.
///
/// # Errors
///
/// Returns `FsError::MissingFolder` or `FsError::NotADirectory` if `root` is
/// unusable, and `FsError::InvalidPattern` for a bad ignore glob.
///
/// # Example
/// ```no_run
/// use openmwmm::utility::fs::walk::{relative_files, WalkOptions};
///
/// let files = relative_files("/mods/textures", &WalkOptions::default())?;
/// println!("{} files", files.len());
/// # Ok::<(), openmwmm::error::FsError>(())
/// ```
pub fn relative_files<P: AsRef<Path>>(
    root: P,
    options: &WalkOptions,
) -> Result<Vec<String>, FsError> {
    let root = root.as_ref();
    ensure_dir(root)?;
    let globs = compile_globs(options.ignore())?;

    let mut files = Vec::new();
    for entry in build_walker(root, options).build() {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_some_and(|ft| ft.is_file())
                    && let Ok(rel_path) = entry.path().strip_prefix(root)
                    && !globs.iter().any(|glob| glob.is_match(rel_path))
                {
                    files.push(normalize_relative(rel_path));
                }
            }
            Err(e) => warn!(root = %root.display(), error = %e, "walk error"),
        }
    }
    files.sort_unstable();
    Ok(files)
}

/// Lists the immediate subdirectories of `root`, sorted by path.
///
/// # Errors
///
/// Returns `FsError::MissingFolder` or `FsError::NotADirectory` if `root` is
/// unusable.
pub fn subdirectories<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>, FsError> {
    let root = root.as_ref();
    ensure_dir(root)?;

    let options = WalkOptions::builder()
        .with_max_depth(1)
        .with_include_hidden(true)
        .build();
    let mut dirs: Vec<PathBuf> = build_walker(root, &options)
        .build()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(root = %root.display(), error = %e, "walk error");
                None
            }
        })
        .filter(|entry| entry.depth() == 1 && entry.file_type().is_some_and(|ft| ft.is_dir()))
        .map(ignore::DirEntry::into_path)
        .collect();
    dirs.sort();
    Ok(dirs)
}
