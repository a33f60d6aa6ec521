// SPDX-License-Identifier: Apache-2.0

//! A small JSON parser producing an owned, mutable document tree.
//!
//! [`parse`] reads a complete JSON text (RFC 8259) into a [`Value`]. The tree
//! can then be inspected through typed accessors or rebuilt with the
//! setters. Strings are stored unescaped with an explicit length and a NUL
//! sentinel, so they may hold embedded NUL bytes.
//!
//! ```
//! use rdjson::{JsonType, Value};
//!
//! let mut doc = rdjson::parse(br#"{"title": "rd", "tags": ["a", "b"], "n": 1.5e2}"#).unwrap();
//! assert_eq!(doc.json_type(), JsonType::Object);
//! assert_eq!(doc.find_object_value(b"n").unwrap().number(), 150.0);
//!
//! let tags = doc.object_value_mut(1);
//! tags.array_element_mut(0).set_string(b"z");
//! assert_eq!(tags.array_element(0).string(), b"z");
//!
//! // Errors leave the target value as null
//! let mut v = Value::from(true);
//! assert!(v.parse(b"[1, 2").is_err());
//! assert!(v.is_null());
//! ```
//!
//! The crate is `no_std` and needs only `alloc`. Parsing limits are chosen at
//! compile time through [`ParserConfig`].

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod config;
pub use config::{DefaultConfig, ParserConfig, StrictConfig};

mod escape_processor;

mod json_string;
pub use json_string::JsonString;

mod number_parser;

mod parse_error;
pub use parse_error::ParseError;

mod parser;
pub use parser::{parse, parse_str, Parser};

mod scratch;

mod slice_input_buffer;

mod value;
pub use value::{JsonType, Member, Value};
