// SPDX-License-Identifier: Apache-2.0

use core::marker::PhantomData;

use crate::config::{DefaultConfig, ParserConfig};
use crate::escape_processor::EscapeProcessor;
use crate::json_string::JsonString;
use crate::number_parser;
use crate::parse_error::ParseError;
use crate::scratch::ScratchStack;
use crate::slice_input_buffer::SliceInputBuffer;
use crate::value::{Member, Value};

/// Parses a complete JSON document into an owned [`Value`].
///
/// The input ends at the first NUL byte or at the end of the slice.
///
/// # Example
/// ```
/// let value = rdjson::parse(br#"{"name": "value", "list": [1, 2]}"#).unwrap();
/// assert_eq!(value.object_size(), 2);
/// assert_eq!(value.find_object_value(b"list").unwrap().array_size(), 2);
/// ```
pub fn parse(json: &[u8]) -> Result<Value, ParseError> {
    Parser::new().parse(json)
}

/// Parses a complete JSON document held in a string slice.
pub fn parse_str(json: &str) -> Result<Value, ParseError> {
    parse(json.as_bytes())
}

/// A single-pass recursive-descent JSON parser.
///
/// The parser owns the scratch stacks that stage string bytes, array elements
/// and object members while a document is parsed. Their storage is allocated
/// on first use within a call and freed before the call returns, so a reused
/// parser holds no staging memory between documents.
///
/// Generic over [`ParserConfig`] for the nesting limit and number overflow
/// behavior.
pub struct Parser<C: ParserConfig = DefaultConfig> {
    bytes: ScratchStack<u8>,
    values: ScratchStack<Value>,
    members: ScratchStack<Member>,
    depth: usize,
    _config: PhantomData<C>,
}

impl Parser<DefaultConfig> {
    /// Creates a parser with [`DefaultConfig`].
    pub fn new() -> Self {
        Self::with_config()
    }
}

impl Default for Parser<DefaultConfig> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ParserConfig> Parser<C> {
    /// Creates a parser with a custom [`ParserConfig`].
    pub fn with_config() -> Self {
        Parser {
            bytes: ScratchStack::new(C::SCRATCH_INITIAL_CAPACITY),
            values: ScratchStack::new(C::SCRATCH_INITIAL_CAPACITY),
            members: ScratchStack::new(C::SCRATCH_INITIAL_CAPACITY),
            depth: 0,
            _config: PhantomData,
        }
    }

    /// Parses `json` and returns the resulting value.
    pub fn parse(&mut self, json: &[u8]) -> Result<Value, ParseError> {
        let mut value = Value::Null;
        self.parse_into(json, &mut value)?;
        Ok(value)
    }

    /// Parses `json` into `out`.
    ///
    /// `out` is reset to `Null` first. It holds the complete document on
    /// success and stays `Null` on any error.
    pub fn parse_into(&mut self, json: &[u8], out: &mut Value) -> Result<(), ParseError> {
        out.set_null();
        let mut input = SliceInputBuffer::new(json);
        self.depth = 0;

        let result = self.parse_document(&mut input);
        debug_assert!(self.is_idle(), "scratch stacks not empty after parse");
        self.release_scratch();

        match result {
            Ok(value) => {
                log::debug!("parsed {} byte document", input.current_pos());
                *out = value;
                Ok(())
            }
            Err(err) => {
                log::debug!("parse failed at byte {}: {}", input.current_pos(), err);
                Err(err)
            }
        }
    }

    fn release_scratch(&mut self) {
        self.bytes.release();
        self.values.release();
        self.members.release();
    }

    fn is_idle(&self) -> bool {
        self.bytes.height() == 0
            && self.values.height() == 0
            && self.members.height() == 0
            && self.depth == 0
    }

    fn parse_document(&mut self, input: &mut SliceInputBuffer<'_>) -> Result<Value, ParseError> {
        input.skip_whitespace();
        let value = self.parse_value(input)?;
        input.skip_whitespace();
        if !input.is_at_end() {
            return Err(ParseError::RootNotSingular);
        }
        Ok(value)
    }

    fn parse_value(&mut self, input: &mut SliceInputBuffer<'_>) -> Result<Value, ParseError> {
        match input.peek()? {
            b'n' => Self::parse_literal(input, b"null", Value::Null),
            b't' => Self::parse_literal(input, b"true", Value::True),
            b'f' => Self::parse_literal(input, b"false", Value::False),
            b'"' => self.parse_string(input).map(Value::String),
            b'[' => self.parse_array(input),
            b'{' => self.parse_object(input),
            _ => Self::parse_number(input),
        }
    }

    fn parse_literal(
        input: &mut SliceInputBuffer<'_>,
        word: &[u8],
        value: Value,
    ) -> Result<Value, ParseError> {
        if !input.starts_with(word) {
            return Err(ParseError::InvalidValue);
        }
        input.advance(word.len());
        Ok(value)
    }

    fn parse_number(input: &mut SliceInputBuffer<'_>) -> Result<Value, ParseError> {
        let (number, len) =
            number_parser::parse_number(input.remaining(), C::REJECT_NUMBER_OVERFLOW)?;
        input.advance(len);
        Ok(Value::Number(number))
    }

    /// Parses a string starting at the opening quote. Decoded bytes are staged
    /// on the byte stack and copied out on the closing quote; the stack is
    /// back at its entry height whether or not parsing succeeds.
    fn parse_string(&mut self, input: &mut SliceInputBuffer<'_>) -> Result<JsonString, ParseError> {
        debug_assert_eq!(input.peek(), Ok(b'"'));
        input.advance(1);

        let mark = self.bytes.mark();
        let result = match self.parse_string_content(input) {
            Ok(()) => JsonString::try_from_bytes(self.bytes.above(mark)),
            Err(err) => Err(err),
        };
        self.bytes.rollback(mark);
        result
    }

    fn parse_string_content(&mut self, input: &mut SliceInputBuffer<'_>) -> Result<(), ParseError> {
        loop {
            let byte = input
                .consume_byte()
                .map_err(|_| ParseError::MissQuotationMark)?;
            match byte {
                b'"' => return Ok(()),
                b'\\' => self.parse_escape(input)?,
                0x00..=0x1F => return Err(ParseError::InvalidStringChar),
                _ => self.bytes.push(byte)?,
            }
        }
    }

    fn parse_escape(&mut self, input: &mut SliceInputBuffer<'_>) -> Result<(), ParseError> {
        let escape = input
            .consume_byte()
            .map_err(|_| ParseError::InvalidStringEscape)?;
        if escape == b'u' {
            return self.parse_unicode_escape(input);
        }
        let byte = EscapeProcessor::process_simple_escape(escape)?;
        self.bytes.push(byte)
    }

    /// Decodes the rest of a `\u` escape, pairing a high surrogate with the
    /// `\u` escape that must follow it.
    fn parse_unicode_escape(&mut self, input: &mut SliceInputBuffer<'_>) -> Result<(), ParseError> {
        let unit = Self::read_hex4(input)?;
        let codepoint = if EscapeProcessor::is_high_surrogate(unit) {
            if !input.starts_with(b"\\u") {
                return Err(ParseError::InvalidUnicodeSurrogate);
            }
            input.advance(2);
            let low = Self::read_hex4(input)?;
            EscapeProcessor::combine_surrogate_pair(unit, low)?
        } else {
            unit
        };

        let mut utf8_buf = [0u8; 4];
        self.bytes
            .extend_from_slice(EscapeProcessor::encode_utf8(codepoint, &mut utf8_buf))
    }

    fn read_hex4(input: &mut SliceInputBuffer<'_>) -> Result<u32, ParseError> {
        let start = input.current_pos();
        let hex = input
            .slice(start, start + 4)
            .map_err(|_| ParseError::InvalidUnicodeHex)?;
        let unit = EscapeProcessor::parse_hex4(hex)?;
        input.advance(4);
        Ok(unit)
    }

    fn enter_container(&mut self) -> Result<(), ParseError> {
        if self.depth >= C::MAX_DEPTH {
            return Err(ParseError::NestingTooDeep);
        }
        self.depth += 1;
        Ok(())
    }

    /// Parses an array starting at `[`. Elements are staged on the value stack
    /// and moved into an exactly sized vector once `]` is seen. On error every
    /// staged element of this array is dropped.
    fn parse_array(&mut self, input: &mut SliceInputBuffer<'_>) -> Result<Value, ParseError> {
        self.enter_container()?;
        input.advance(1);
        log::trace!("array at depth {}", self.depth);

        let mark = self.values.mark();
        let result = self.parse_array_elements(input);
        self.depth -= 1;

        match result {
            Ok(()) => self.values.commit(mark).map(Value::Array),
            Err(err) => {
                log::debug!(
                    "dropping {} staged array elements",
                    self.values.above(mark).len()
                );
                self.values.rollback(mark);
                Err(err)
            }
        }
    }

    fn parse_array_elements(&mut self, input: &mut SliceInputBuffer<'_>) -> Result<(), ParseError> {
        input.skip_whitespace();
        if input.peek() == Ok(b']') {
            input.advance(1);
            return Ok(());
        }
        loop {
            input.skip_whitespace();
            let element = self.parse_value(input)?;
            self.values.push(element)?;
            input.skip_whitespace();
            match input.consume_byte() {
                Ok(b',') => {}
                Ok(b']') => return Ok(()),
                _ => return Err(ParseError::MissCommaOrSquareBracket),
            }
        }
    }

    /// Parses an object starting at `{`, with the same staging and rollback
    /// rules as arrays.
    fn parse_object(&mut self, input: &mut SliceInputBuffer<'_>) -> Result<Value, ParseError> {
        self.enter_container()?;
        input.advance(1);
        log::trace!("object at depth {}", self.depth);

        let mark = self.members.mark();
        let result = self.parse_object_members(input);
        self.depth -= 1;

        match result {
            Ok(()) => self.members.commit(mark).map(Value::Object),
            Err(err) => {
                log::debug!(
                    "dropping {} staged object members",
                    self.members.above(mark).len()
                );
                self.members.rollback(mark);
                Err(err)
            }
        }
    }

    fn parse_object_members(&mut self, input: &mut SliceInputBuffer<'_>) -> Result<(), ParseError> {
        input.skip_whitespace();
        if input.peek() == Ok(b'}') {
            input.advance(1);
            return Ok(());
        }
        loop {
            if input.peek() != Ok(b'"') {
                return Err(ParseError::MissKey);
            }
            let key = self.parse_string(input)?;
            input.skip_whitespace();
            if input.peek() != Ok(b':') {
                return Err(ParseError::MissColon);
            }
            input.advance(1);
            input.skip_whitespace();
            let value = self.parse_value(input)?;
            self.members.push(Member::new(key, value))?;
            input.skip_whitespace();
            match input.consume_byte() {
                Ok(b',') => input.skip_whitespace(),
                Ok(b'}') => return Ok(()),
                _ => return Err(ParseError::MissCommaOrCurlyBracket),
            }
        }
    }
}
