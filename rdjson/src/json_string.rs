// SPDX-License-Identifier: Apache-2.0

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::ops::Deref;

use crate::parse_error::ParseError;

/// Owned JSON string content.
///
/// Holds the unescaped bytes followed by a single NUL sentinel, so the buffer
/// can be handed to C-style consumers. The content itself may contain NUL
/// bytes (from `\u0000`) and is not guaranteed to be UTF-8: an unpaired low
/// surrogate escape is kept as its three-byte encoding.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct JsonString {
    // Invariant: never empty, last byte is 0.
    buf: Box<[u8]>,
}

impl JsonString {
    /// An empty string.
    pub fn new() -> Self {
        Self {
            buf: Box::new([0u8]),
        }
    }

    /// Copies `bytes` into a freshly allocated buffer, reporting allocation
    /// failure instead of aborting.
    pub(crate) fn try_from_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(bytes.len() + 1)?;
        buf.extend_from_slice(bytes);
        buf.push(0);
        Ok(Self {
            buf: buf.into_boxed_slice(),
        })
    }

    /// The string content, without the sentinel.
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.split_last().map_or(&[], |(_, content)| content)
    }

    /// The string content followed by the NUL sentinel.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf
    }

    /// Content length in bytes, not counting the sentinel.
    pub fn len(&self) -> usize {
        self.buf.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The content as `&str`, if it is valid UTF-8.
    pub fn to_str(&self) -> Result<&str, core::str::Utf8Error> {
        core::str::from_utf8(self.as_bytes())
    }
}

impl Default for JsonString {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&[u8]> for JsonString {
    fn from(bytes: &[u8]) -> Self {
        let mut buf = Vec::with_capacity(bytes.len() + 1);
        buf.extend_from_slice(bytes);
        buf.push(0);
        Self {
            buf: buf.into_boxed_slice(),
        }
    }
}

impl From<&str> for JsonString {
    fn from(s: &str) -> Self {
        Self::from(s.as_bytes())
    }
}

impl Deref for JsonString {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for JsonString {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq<[u8]> for JsonString {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<str> for JsonString {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for JsonString {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl core::fmt::Debug for JsonString {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.to_str() {
            Ok(s) => core::fmt::Debug::fmt(s, f),
            Err(_) => core::fmt::Debug::fmt(self.as_bytes(), f),
        }
    }
}

/// Invalid UTF-8 sequences are shown as U+FFFD.
impl core::fmt::Display for JsonString {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for chunk in self.as_bytes().utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_str("\u{FFFD}")?;
            }
        }
        Ok(())
    }
}
