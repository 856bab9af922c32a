// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!               ModError (~24 bytes)
//!                      |
//!   +------+------+----+-----+-------+-----+-------+
//!   |      |      |          |       |     |       |
//!   v      v      v          v       v     v       v
//! Tree Transfer Conflict  Config Persist  Fs     Other
//!  Box    Box     Box       Box     Box   Box   Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Tree      OutOfBounds, StaleNode, RootNotEditable, MoveIntoDescendant
//!   Transfer  MediaTypeMismatch, Truncated, UnexpectedTag, TooDeep, ...
//!   Conflict  NoFolderColumn, EmptyFolder
//!   Config    InvalidValue
//!   Persist   Read, Parse, Write
//!   Fs        MissingFolder, NotADirectory, InvalidPattern, IoError
//! ```
//!
//! Every variant is recovered locally by the operation that raised it; none of
//! them leaves the tree in a partially mutated state.

use std::path::Path;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ModError`].
pub type ModResult<T> = std::result::Result<T, ModError>;

/// Top-level error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum ModError {
    /// Structural tree operation rejected.
    #[error("tree error: {0}")]
    Tree(#[from] Box<TreeError>),

    /// Transfer payload could not be produced or consumed.
    #[error("transfer error: {0}")]
    Transfer(#[from] Box<TransferError>),

    /// Conflict selection precondition violated.
    #[error("conflict error: {0}")]
    Conflict(#[from] Box<ConflictError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Mod list or game config adapter failed.
    #[error("persistence error: {0}")]
    Persist(#[from] Box<PersistError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ModError {
                fn from(err: $error) -> Self {
                    ModError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    TreeError => Tree,
    TransferError => Transfer,
    ConflictError => Conflict,
    ConfigError => Config,
    PersistError => Persist,
    FsError => Fs,
}

// --- Tree Errors ---

/// Structural tree errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Insert/remove/move addressed a range outside `[0, child_count]`.
    #[error(
        "position {position} (count {count}) is out of bounds for a parent with {child_count} children"
    )]
    OutOfBounds {
        position: usize,
        count: usize,
        child_count: usize,
    },

    /// The handle refers to a node that has been destroyed.
    #[error("node handle {0} is stale or unknown")]
    StaleNode(String),

    /// The root sentinel carries no editable data.
    #[error("the root node has no editable fields")]
    RootNotEditable,

    /// The root sentinel cannot be removed or moved.
    #[error("the root node cannot be moved")]
    RootNotMovable,

    /// Move destination lies inside one of the moved subtrees.
    #[error("cannot move a node into its own subtree")]
    MoveIntoDescendant,

    /// A textual node path could not be parsed or resolved.
    #[error("invalid node path '{0}'")]
    InvalidPath(String),
}

// --- Transfer Errors ---

/// Transfer payload errors.
///
/// Decoding fails closed: any of these aborts the whole deserialize before the
/// tree is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    /// Payload was produced for a different media type.
    #[error("unsupported media type '{found}', expected '{expected}'")]
    MediaTypeMismatch {
        expected: &'static str,
        found: String,
    },

    /// Payload ended before a declared value.
    #[error("payload truncated at byte {offset}: {needed} more byte(s) needed")]
    Truncated { offset: usize, needed: usize },

    /// Column value carried the wrong type tag.
    #[error("unexpected tag 0x{tag:02x} for column '{column}' at byte {offset}")]
    UnexpectedTag {
        column: &'static str,
        tag: u8,
        offset: usize,
    },

    /// Bool column held something other than 0 or 1.
    #[error("invalid bool value {value} at byte {offset}")]
    InvalidBool { value: u8, offset: usize },

    /// String column was not valid UTF-8.
    #[error("invalid UTF-8 string at byte {offset}")]
    InvalidUtf8 { offset: usize },

    /// Declared node count cannot fit in the remaining bytes.
    #[error("declared count {count} exceeds remaining payload at byte {offset}")]
    CountTooLarge { count: usize, offset: usize },

    /// Nesting exceeded the decoder limit.
    #[error("payload nesting exceeds {limit} levels")]
    TooDeep { limit: usize },

    /// Bytes left over after the declared entries.
    #[error("{count} trailing byte(s) after payload")]
    TrailingBytes { count: usize },

    /// Folder path is not representable as UTF-8.
    #[error("folder '{0}' is not valid UTF-8")]
    NonUtf8Folder(String),

    /// Value does not fit the wire width.
    #[error("{what} does not fit in the transfer format")]
    Overflow { what: &'static str },
}

// --- Conflict Errors ---

/// Conflict selection precondition violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConflictError {
    /// Selection holds no cell in the folder column.
    #[error("selection has no folder column")]
    NoFolderColumn,

    /// Selected node has no folder to compare against.
    #[error("selected node has an empty folder")]
    EmptyFolder,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Persistence Errors ---

/// Mod list / game config adapter errors.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Failed to read a file.
    #[error("failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File content is malformed.
    #[error("failed to parse '{path}': {message}")]
    Parse { path: String, message: String },

    /// Failed to write a file.
    #[error("failed to write '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl PersistError {
    pub(crate) fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.display().to_string(),
            source,
        }
    }
}

// --- Filesystem Errors ---

/// Filesystem errors raised while scanning mod folders.
#[derive(Debug, Error)]
pub enum FsError {
    /// Referenced mod folder does not exist. Non-fatal for scans and exports.
    #[error("mod folder does not exist: {0}")]
    MissingFolder(String),

    /// Path exists but is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(String),

    /// Invalid ignore pattern.
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    pub(crate) fn missing(path: &Path) -> Self {
        Self::MissingFolder(path.display().to_string())
    }
}

#[cfg(test)]
mod tests;
