// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::ParseError;

/// Pure helpers for decoding JSON string escapes.
///
/// The parser feeds bytes that follow a backslash through these functions and
/// pushes the decoded bytes onto its scratch stack.
pub struct EscapeProcessor;

impl EscapeProcessor {
    /// Process a simple escape sequence character and return the unescaped byte.
    ///
    /// # Arguments
    /// * `escape_char` - The character following the backslash in an escape sequence
    ///
    /// # Returns
    /// The unescaped byte value, or `InvalidStringEscape` for anything that is not
    /// one of `" \ / b f n r t`.
    pub fn process_simple_escape(escape_char: u8) -> Result<u8, ParseError> {
        match escape_char {
            b'n' => Ok(b'\n'),
            b't' => Ok(b'\t'),
            b'r' => Ok(b'\r'),
            b'\\' => Ok(b'\\'),
            b'"' => Ok(b'"'),
            b'/' => Ok(b'/'),
            b'b' => Ok(0x08), // Backspace
            b'f' => Ok(0x0C), // Form feed
            _ => Err(ParseError::InvalidStringEscape),
        }
    }

    /// Validate that a byte represents a valid hexadecimal digit.
    ///
    /// # Returns
    /// The numeric value (0-15) of the hex digit, or an error if invalid.
    pub fn validate_hex_digit(byte: u8) -> Result<u32, ParseError> {
        match byte {
            b'0'..=b'9' => Ok((byte - b'0') as u32),
            b'a'..=b'f' => Ok(byte.wrapping_sub(b'a').wrapping_add(10) as u32),
            b'A'..=b'F' => Ok(byte.wrapping_sub(b'A').wrapping_add(10) as u32),
            _ => Err(ParseError::InvalidUnicodeHex),
        }
    }

    /// Decode the four hex digits of a `\uXXXX` escape into a 16-bit code unit.
    pub fn parse_hex4(hex_slice: &[u8]) -> Result<u32, ParseError> {
        if hex_slice.len() != 4 {
            return Err(ParseError::InvalidUnicodeHex);
        }
        hex_slice.iter().try_fold(0u32, |unit, &byte| {
            Ok((unit << 4) | Self::validate_hex_digit(byte)?)
        })
    }

    /// Check if a code unit is a high surrogate (0xD800-0xDBFF)
    pub fn is_high_surrogate(codepoint: u32) -> bool {
        (0xD800..=0xDBFF).contains(&codepoint)
    }

    /// Check if a code unit is a low surrogate (0xDC00-0xDFFF)
    pub fn is_low_surrogate(codepoint: u32) -> bool {
        (0xDC00..=0xDFFF).contains(&codepoint)
    }

    /// Combine a high and low surrogate pair into a single Unicode codepoint
    pub fn combine_surrogate_pair(high: u32, low: u32) -> Result<u32, ParseError> {
        if !Self::is_high_surrogate(high) || !Self::is_low_surrogate(low) {
            return Err(ParseError::InvalidUnicodeSurrogate);
        }
        Ok(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00))
    }

    /// Encode a code point as UTF-8 into `buf` and return the written bytes.
    ///
    /// Unlike [`char::encode_utf8`] this accepts lone surrogates, which are
    /// written with the regular three-byte pattern. Code points above
    /// 0x10FFFF are not produced by the parser.
    pub fn encode_utf8(codepoint: u32, buf: &mut [u8; 4]) -> &[u8] {
        let len = if codepoint <= 0x7F {
            buf[0] = codepoint as u8;
            1
        } else if codepoint <= 0x7FF {
            buf[0] = 0xC0 | ((codepoint >> 6) & 0xFF) as u8;
            buf[1] = 0x80 | (codepoint & 0x3F) as u8;
            2
        } else if codepoint <= 0xFFFF {
            buf[0] = 0xE0 | ((codepoint >> 12) & 0xFF) as u8;
            buf[1] = 0x80 | ((codepoint >> 6) & 0x3F) as u8;
            buf[2] = 0x80 | (codepoint & 0x3F) as u8;
            3
        } else {
            debug_assert!(codepoint <= 0x10FFFF);
            buf[0] = 0xF0 | ((codepoint >> 18) & 0xFF) as u8;
            buf[1] = 0x80 | ((codepoint >> 12) & 0x3F) as u8;
            buf[2] = 0x80 | ((codepoint >> 6) & 0x3F) as u8;
            buf[3] = 0x80 | (codepoint & 0x3F) as u8;
            4
        };
        &buf[..len]
    }
}
