// SPDX-License-Identifier: Apache-2.0

/// Error type for SliceInputBuffer operations.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Reached the end of input data.
    ReachedEnd,
    /// Invalid slice bounds provided.
    InvalidSliceBounds,
}

/// A cursor over the immutable input text.
///
/// The input ends at the first NUL byte or at the end of the slice, whichever
/// comes first, so a C-style null-terminated buffer can be passed in as is.
#[derive(Debug)]
pub struct SliceInputBuffer<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceInputBuffer<'a> {
    /// Creates a new SliceInputBuffer over the given data.
    pub fn new(data: &'a [u8]) -> Self {
        let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
        Self {
            data: data.get(..end).unwrap_or(data),
            pos: 0,
        }
    }

    pub fn current_pos(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Returns the next byte without consuming it.
    pub fn peek(&self) -> Result<u8, Error> {
        self.data.get(self.pos).copied().ok_or(Error::ReachedEnd)
    }

    /// Returns the next byte and moves past it. The position does not move at
    /// the end of input.
    pub fn consume_byte(&mut self) -> Result<u8, Error> {
        let byte = self.peek()?;
        self.pos = self.pos.saturating_add(1);
        Ok(byte)
    }

    /// Moves the cursor forward by `count` bytes, stopping at the end of input.
    pub fn advance(&mut self, count: usize) {
        self.pos = self.pos.saturating_add(count).min(self.data.len());
    }

    /// True if the unread input starts with `word`.
    pub fn starts_with(&self, word: &[u8]) -> bool {
        self.remaining().starts_with(word)
    }

    /// The unread part of the input.
    pub fn remaining(&self) -> &'a [u8] {
        self.data.get(self.pos..).unwrap_or(&[])
    }

    /// Gets a slice of the data from start to end positions, with bounds checking.
    pub fn slice(&self, start: usize, end: usize) -> Result<&'a [u8], Error> {
        self.data.get(start..end).ok_or(Error::InvalidSliceBounds)
    }

    /// Skips JSON whitespace: space, tab, line feed and carriage return.
    pub fn skip_whitespace(&mut self) {
        while let Ok(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }
}
