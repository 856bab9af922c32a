// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Byte-level encoder and bounded decoder.

use std::path::PathBuf;

use super::{MEDIA_TYPE, TransferPayload};
use crate::error::{ModResult, TransferError};
use crate::model::{Column, ModEntry, ModTree, NodeId};

/// Deepest nesting the decoder accepts.
pub const MAX_DEPTH: usize = 512;

const TAG_U64: u8 = 0x01;
const TAG_STRING: u8 = 0x02;
const TAG_BOOL: u8 = 0x03;

// Tagged index + two empty strings + bool + child count.
const MIN_NODE_LEN: usize = (1 + 8) + 2 * (1 + 4) + (1 + 1) + 4;

/// Serializes `nodes` (with their subtrees) in the given order.
///
/// # Errors
///
/// Returns `TreeError::StaleNode` for removed nodes and
/// `TransferError::NonUtf8Folder` for folders that cannot be encoded.
pub fn encode(tree: &ModTree, nodes: &[NodeId]) -> ModResult<TransferPayload> {
    let mut bytes = Vec::new();
    put_count(&mut bytes, nodes.len(), "node count")?;
    for id in nodes {
        encode_node(tree, *id, &mut bytes)?;
    }
    Ok(TransferPayload::new(MEDIA_TYPE, bytes))
}

fn encode_node(tree: &ModTree, id: NodeId, out: &mut Vec<u8>) -> ModResult<()> {
    let node = tree.node(id)?;
    let folder = node
        .folder()
        .to_str()
        .ok_or_else(|| TransferError::NonUtf8Folder(node.folder().display().to_string()))?;

    let index = u64::try_from(node.index()).map_err(|_| TransferError::Overflow { what: "index" })?;
    out.push(TAG_U64);
    out.extend_from_slice(&index.to_be_bytes());
    put_string(out, node.name())?;
    put_string(out, folder)?;
    out.push(TAG_BOOL);
    out.push(u8::from(node.enabled()));

    put_count(out, node.child_count(), "child count")?;
    for child in node.children() {
        encode_node(tree, *child, out)?;
    }
    Ok(())
}

fn put_string(out: &mut Vec<u8>, value: &str) -> Result<(), TransferError> {
    out.push(TAG_STRING);
    put_count(out, value.len(), "string length")?;
    out.extend_from_slice(value.as_bytes());
    Ok(())
}

fn put_count(out: &mut Vec<u8>, count: usize, what: &'static str) -> Result<(), TransferError> {
    let count = u32::try_from(count).map_err(|_| TransferError::Overflow { what })?;
    out.extend_from_slice(&count.to_be_bytes());
    Ok(())
}

/// Decodes a complete payload into detached subtrees.
///
/// # Errors
///
/// Returns the first `TransferError` found; nothing is returned partially.
pub fn decode(bytes: &[u8]) -> Result<Vec<ModEntry>, TransferError> {
    let mut reader = Reader { bytes, offset: 0 };
    let entries = reader.nodes(0)?;
    let remaining = reader.remaining();
    if remaining > 0 {
        return Err(TransferError::TrailingBytes { count: remaining });
    }
    Ok(entries)
}

struct Reader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    const fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], TransferError> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(TransferError::Truncated {
                offset: self.offset,
                needed: len - remaining,
            });
        }
        let slice = &self.bytes[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }

    fn array<const N: usize>(&mut self) -> Result<[u8; N], TransferError> {
        let mut buf = [0; N];
        buf.copy_from_slice(self.take(N)?);
        Ok(buf)
    }

    fn u8(&mut self) -> Result<u8, TransferError> {
        Ok(self.array::<1>()?[0])
    }

    fn u32(&mut self) -> Result<usize, TransferError> {
        let value = u32::from_be_bytes(self.array()?);
        usize::try_from(value).map_err(|_| TransferError::Overflow { what: "count" })
    }

    fn tag(&mut self, column: Column, expected: u8) -> Result<(), TransferError> {
        let offset = self.offset;
        let tag = self.u8()?;
        if tag == expected {
            Ok(())
        } else {
            Err(TransferError::UnexpectedTag {
                column: column.as_str(),
                tag,
                offset,
            })
        }
    }

    fn string(&mut self, column: Column) -> Result<String, TransferError> {
        self.tag(column, TAG_STRING)?;
        let len = self.u32()?;
        let offset = self.offset;
        let raw = self.take(len)?;
        std::str::from_utf8(raw)
            .map(str::to_string)
            .map_err(|_| TransferError::InvalidUtf8 { offset })
    }

    fn count(&mut self) -> Result<usize, TransferError> {
        let offset = self.offset;
        let count = self.u32()?;
        if count
            .checked_mul(MIN_NODE_LEN)
            .is_none_or(|needed| needed > self.remaining())
        {
            return Err(TransferError::CountTooLarge { count, offset });
        }
        Ok(count)
    }

    fn nodes(&mut self, depth: usize) -> Result<Vec<ModEntry>, TransferError> {
        let count = self.count()?;
        if count > 0 && depth >= MAX_DEPTH {
            return Err(TransferError::TooDeep { limit: MAX_DEPTH });
        }
        (0..count).map(|_| self.node(depth + 1)).collect()
    }

    fn node(&mut self, depth: usize) -> Result<ModEntry, TransferError> {
        self.tag(Column::Index, TAG_U64)?;
        // Index is positional; the destination decides it.
        self.array::<8>()?;

        let name = self.string(Column::Name)?;
        let folder = PathBuf::from(self.string(Column::Folder)?);

        self.tag(Column::Enabled, TAG_BOOL)?;
        let offset = self.offset;
        let enabled = match self.u8()? {
            0 => false,
            1 => true,
            value => return Err(TransferError::InvalidBool { value, offset }),
        };

        let mods = self.nodes(depth)?;
        Ok(ModEntry {
            name,
            folder,
            enabled,
            mods,
        })
    }
}
