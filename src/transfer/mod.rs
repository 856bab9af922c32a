// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Subtree transfer payloads.
//!
//! Drag-and-drop, clipboard and in-tree moves all go through the same byte
//! payload, tagged with [`MEDIA_TYPE`].
//!
//! # Wire Format
//!
//! ```text
//! payload := u32 count, node * count
//! node    := 0x01 u64 index          (discarded on decode)
//!            0x02 u32 len, utf8 name
//!            0x02 u32 len, utf8 folder
//!            0x03 u8 enabled         (0 or 1)
//!            u32 child_count, node * child_count
//! ```
//!
//! All integers are big-endian. Decoding is all-or-nothing: the tree is only
//! touched once the whole payload has been validated.

mod codec;
mod moves;

pub use codec::{MAX_DEPTH, decode, encode};

use tracing::debug;

use crate::error::{ModResult, TransferError};
use crate::model::{ModTree, NodeId};

/// Media type of transfer payloads.
pub const MEDIA_TYPE: &str = "application/openmwmm.text.data";

/// Serialized subtrees plus their media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPayload {
    media_type: String,
    bytes: Vec<u8>,
}

impl TransferPayload {
    /// Wraps bytes received from an external source.
    pub fn new(media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            media_type: media_type.into(),
            bytes,
        }
    }

    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Returns whether a payload of `media_type` can be dropped on the tree.
#[must_use]
pub fn accepts(media_type: &str) -> bool {
    media_type == MEDIA_TYPE
}

/// Decodes `payload` and inserts its subtrees under `parent`, the i-th
/// top-level entry landing at `position + i`.
///
/// # Errors
///
/// Returns a `TransferError` for foreign or malformed payloads and a
/// `TreeError` for a stale parent or an out-of-range position. In every error
/// case the tree is left untouched.
pub fn deserialize_into(
    tree: &mut ModTree,
    payload: &TransferPayload,
    parent: NodeId,
    position: usize,
) -> ModResult<Vec<NodeId>> {
    if !accepts(payload.media_type()) {
        return Err(TransferError::MediaTypeMismatch {
            expected: MEDIA_TYPE,
            found: payload.media_type().to_string(),
        }
        .into());
    }

    let entries = decode(payload.bytes())?;
    let ids = tree.graft(parent, position, &entries)?;
    debug!(parent = %parent, position, count = ids.len(), "deserialized payload");
    Ok(ids)
}
