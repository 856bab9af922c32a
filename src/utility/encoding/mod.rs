// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Text decoding for game config files (UTF-8 with a Windows-1252 fallback).
//!
//! ```text
//! file bytes --(detect)--> Utf8 | Windows1252 --(decode)--> UTF-8 text
//! UTF-8 text --(encode, same encoding)--> file bytes
//! ```
//!
//! Older Morrowind installs write `openmw.cfg` in the Windows ANSI code page.
//! Uses `encoding_rs`; unmappable characters become U+FFFD on decode.

use encoding_rs::WINDOWS_1252;
use std::borrow::Cow;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Encoding of a text file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// UTF-8, with or without BOM.
    #[default]
    Utf8,
    /// Windows-1252 (the Western ANSI code page).
    Windows1252,
}

/// Picks UTF-8 when `bytes` are valid UTF-8, otherwise Windows-1252.
#[must_use]
pub fn detect(bytes: &[u8]) -> Encoding {
    if std::str::from_utf8(strip_bom(bytes)).is_ok() {
        Encoding::Utf8
    } else {
        Encoding::Windows1252
    }
}

/// Converts bytes in the given encoding to UTF-8.
///
/// # Example
/// ```
/// use openmwmm::utility::encoding::{bytes_to_utf8, Encoding};
///
/// let cp1252_bytes = b"caf\xe9"; // "café" in Windows-1252
/// assert_eq!(bytes_to_utf8(Encoding::Windows1252, cp1252_bytes), "café");
/// ```
#[must_use]
pub fn bytes_to_utf8(encoding: Encoding, bytes: &[u8]) -> Cow<'_, str> {
    match encoding {
        Encoding::Utf8 => String::from_utf8_lossy(strip_bom(bytes)),
        Encoding::Windows1252 => {
            let (result, _had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
            result
        }
    }
}

/// Detects the encoding and decodes in one step.
#[must_use]
pub fn decode_text(bytes: &[u8]) -> (Cow<'_, str>, Encoding) {
    let encoding = detect(bytes);
    (bytes_to_utf8(encoding, bytes), encoding)
}

/// Converts UTF-8 text back to the given encoding.
///
/// Characters Windows-1252 cannot represent are written as numeric character
/// references by `encoding_rs`.
#[must_use]
pub fn utf8_to_bytes(encoding: Encoding, text: &str) -> Cow<'_, [u8]> {
    match encoding {
        Encoding::Utf8 => Cow::Borrowed(text.as_bytes()),
        Encoding::Windows1252 => {
            let (result, _encoding, _had_errors) = WINDOWS_1252.encode(text);
            result
        }
    }
}

fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
}
