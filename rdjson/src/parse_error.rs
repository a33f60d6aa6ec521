// SPDX-License-Identifier: Apache-2.0

use crate::slice_input_buffer;

/// Errors that can occur during JSON parsing.
///
/// Every variant is a recoverable rejection of the input. Misusing a
/// [`Value`](crate::Value) accessor on the wrong type is a programming error
/// and panics instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input holds nothing but whitespace.
    ExpectValue,
    /// A literal or number is malformed, or the token is not recognized.
    InvalidValue,
    /// A valid value is followed by something other than whitespace.
    RootNotSingular,
    /// A number literal overflows the range of `f64`.
    ///
    /// Only reported when [`ParserConfig::REJECT_NUMBER_OVERFLOW`] is set.
    ///
    /// [`ParserConfig::REJECT_NUMBER_OVERFLOW`]: crate::ParserConfig::REJECT_NUMBER_OVERFLOW
    NumberTooBig,
    /// The input ended before the closing quote of a string.
    MissQuotationMark,
    /// A backslash is followed by an unknown escape character.
    InvalidStringEscape,
    /// A string contains a raw control character (0x01-0x1F).
    InvalidStringChar,
    /// A `\u` escape is not followed by four hexadecimal digits.
    InvalidUnicodeHex,
    /// A high surrogate is not followed by a low surrogate escape.
    InvalidUnicodeSurrogate,
    /// An array element is followed by neither `,` nor `]`.
    MissCommaOrSquareBracket,
    /// An object member does not start with a string key.
    MissKey,
    /// An object key is not followed by `:`.
    MissColon,
    /// An object member is followed by neither `,` nor `}`.
    MissCommaOrCurlyBracket,
    /// Arrays and objects are nested deeper than the configured limit.
    NestingTooDeep,
    /// The scratch stack or a committed payload could not be allocated.
    OutOfMemory,
}

impl From<slice_input_buffer::Error> for ParseError {
    fn from(err: slice_input_buffer::Error) -> Self {
        match err {
            slice_input_buffer::Error::ReachedEnd => ParseError::ExpectValue,
            slice_input_buffer::Error::InvalidSliceBounds => ParseError::InvalidValue,
        }
    }
}

impl From<alloc::collections::TryReserveError> for ParseError {
    fn from(_: alloc::collections::TryReserveError) -> Self {
        ParseError::OutOfMemory
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ParseError::ExpectValue => "expected a value",
            ParseError::InvalidValue => "invalid value",
            ParseError::RootNotSingular => "trailing content after the root value",
            ParseError::NumberTooBig => "number out of range",
            ParseError::MissQuotationMark => "missing closing quotation mark",
            ParseError::InvalidStringEscape => "invalid escape sequence in string",
            ParseError::InvalidStringChar => "control character in string",
            ParseError::InvalidUnicodeHex => "invalid hex digits in unicode escape",
            ParseError::InvalidUnicodeSurrogate => "unpaired unicode surrogate",
            ParseError::MissCommaOrSquareBracket => "expected ',' or ']' after array element",
            ParseError::MissKey => "expected a string key",
            ParseError::MissColon => "expected ':' after object key",
            ParseError::MissCommaOrCurlyBracket => "expected ',' or '}' after object member",
            ParseError::NestingTooDeep => "nesting too deep",
            ParseError::OutOfMemory => "out of memory",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for ParseError {}
