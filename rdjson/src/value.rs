// SPDX-License-Identifier: Apache-2.0

//! The owned JSON value tree.
//!
//! Accessors such as [`Value::number`] or [`Value::array_element`] expect the
//! caller to have checked [`Value::json_type`] first and panic otherwise. The
//! `as_*` accessors are the checked alternative and return `Option`.

use alloc::vec::Vec;

use crate::json_string::JsonString;
use crate::parse_error::ParseError;

/// The type tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonType {
    Null,
    False,
    True,
    Number,
    String,
    Array,
    Object,
}

impl core::fmt::Display for JsonType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            JsonType::Null => "null",
            JsonType::False => "false",
            JsonType::True => "true",
            JsonType::Number => "number",
            JsonType::String => "string",
            JsonType::Array => "array",
            JsonType::Object => "object",
        })
    }
}

/// A JSON value and everything it owns.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    False,
    True,
    Number(f64),
    String(JsonString),
    Array(Vec<Value>),
    /// Members in document order. Duplicate keys are all kept.
    Object(Vec<Member>),
}

/// One key/value pair of a JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    key: JsonString,
    value: Value,
}

impl Member {
    /// Creates a member from a key and its value.
    pub fn new(key: impl Into<JsonString>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// The unescaped key.
    pub fn key(&self) -> &JsonString {
        &self.key
    }

    /// The member's value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Mutable access to the member's value.
    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    /// Splits the member into its key and value.
    pub fn into_parts(self) -> (JsonString, Value) {
        (self.key, self.value)
    }
}

#[cold]
#[track_caller]
fn type_mismatch(expected: &str, actual: JsonType) -> ! {
    panic!("expected a JSON {expected}, found {actual}")
}

#[cold]
#[track_caller]
fn index_out_of_range(index: usize, size: usize) -> ! {
    panic!("index {index} out of range for JSON container of size {size}")
}

impl Value {
    /// Parses `json` into this value, replacing its previous content.
    ///
    /// On error the value is left as [`Value::Null`].
    pub fn parse(&mut self, json: &[u8]) -> Result<(), ParseError> {
        crate::Parser::new().parse_into(json, self)
    }

    pub fn json_type(&self) -> JsonType {
        match self {
            Value::Null => JsonType::Null,
            Value::False => JsonType::False,
            Value::True => JsonType::True,
            Value::Number(_) => JsonType::Number,
            Value::String(_) => JsonType::String,
            Value::Array(_) => JsonType::Array,
            Value::Object(_) => JsonType::Object,
        }
    }

    /// Releases everything this value owns and leaves it `Null`.
    ///
    /// Calling it again on a released value is a no-op.
    pub fn free(&mut self) {
        *self = Value::Null;
    }

    pub fn set_null(&mut self) {
        self.free();
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// # Panics
    /// If the value is not `true` or `false`.
    #[track_caller]
    pub fn boolean(&self) -> bool {
        match self {
            Value::True => true,
            Value::False => false,
            other => type_mismatch("boolean", other.json_type()),
        }
    }

    pub fn set_boolean(&mut self, b: bool) {
        *self = Value::from(b);
    }

    /// # Panics
    /// If the value is not a number.
    #[track_caller]
    pub fn number(&self) -> f64 {
        match self {
            Value::Number(n) => *n,
            other => type_mismatch("number", other.json_type()),
        }
    }

    pub fn set_number(&mut self, n: f64) {
        *self = Value::Number(n);
    }

    #[track_caller]
    fn json_string(&self) -> &JsonString {
        match self {
            Value::String(s) => s,
            other => type_mismatch("string", other.json_type()),
        }
    }

    /// The string content, without the NUL sentinel.
    ///
    /// # Panics
    /// If the value is not a string.
    #[track_caller]
    pub fn string(&self) -> &[u8] {
        self.json_string().as_bytes()
    }

    /// # Panics
    /// If the value is not a string.
    #[track_caller]
    pub fn string_len(&self) -> usize {
        self.json_string().len()
    }

    /// Copies `bytes` into a new string payload.
    pub fn set_string(&mut self, bytes: &[u8]) {
        *self = Value::String(JsonString::from(bytes));
    }

    #[track_caller]
    fn elements(&self) -> &[Value] {
        match self {
            Value::Array(elements) => elements,
            other => type_mismatch("array", other.json_type()),
        }
    }

    /// # Panics
    /// If the value is not an array.
    #[track_caller]
    pub fn array_size(&self) -> usize {
        self.elements().len()
    }

    /// # Panics
    /// If the value is not an array or `index` is out of range.
    #[track_caller]
    pub fn array_element(&self, index: usize) -> &Value {
        let elements = self.elements();
        match elements.get(index) {
            Some(element) => element,
            None => index_out_of_range(index, elements.len()),
        }
    }

    /// # Panics
    /// If the value is not an array or `index` is out of range.
    #[track_caller]
    pub fn array_element_mut(&mut self, index: usize) -> &mut Value {
        match self {
            Value::Array(elements) => {
                let size = elements.len();
                match elements.get_mut(index) {
                    Some(element) => element,
                    None => index_out_of_range(index, size),
                }
            }
            other => type_mismatch("array", other.json_type()),
        }
    }

    pub fn set_array(&mut self, elements: Vec<Value>) {
        *self = Value::Array(elements);
    }

    #[track_caller]
    fn member(&self, index: usize) -> &Member {
        match self {
            Value::Object(members) => match members.get(index) {
                Some(member) => member,
                None => index_out_of_range(index, members.len()),
            },
            other => type_mismatch("object", other.json_type()),
        }
    }

    /// # Panics
    /// If the value is not an object.
    #[track_caller]
    pub fn object_size(&self) -> usize {
        match self {
            Value::Object(members) => members.len(),
            other => type_mismatch("object", other.json_type()),
        }
    }

    /// # Panics
    /// If the value is not an object or `index` is out of range.
    #[track_caller]
    pub fn object_key(&self, index: usize) -> &[u8] {
        self.member(index).key.as_bytes()
    }

    /// # Panics
    /// If the value is not an object or `index` is out of range.
    #[track_caller]
    pub fn object_key_len(&self, index: usize) -> usize {
        self.member(index).key.len()
    }

    /// # Panics
    /// If the value is not an object or `index` is out of range.
    #[track_caller]
    pub fn object_value(&self, index: usize) -> &Value {
        &self.member(index).value
    }

    /// # Panics
    /// If the value is not an object or `index` is out of range.
    #[track_caller]
    pub fn object_value_mut(&mut self, index: usize) -> &mut Value {
        match self {
            Value::Object(members) => {
                let size = members.len();
                match members.get_mut(index) {
                    Some(member) => &mut member.value,
                    None => index_out_of_range(index, size),
                }
            }
            other => type_mismatch("object", other.json_type()),
        }
    }

    pub fn set_object(&mut self, members: Vec<Member>) {
        *self = Value::Object(members);
    }

    /// Index of the first member whose key equals `key`.
    pub fn find_object_index(&self, key: &[u8]) -> Option<usize> {
        self.as_object()?
            .iter()
            .position(|member| member.key.as_bytes() == key)
    }

    /// Value of the first member whose key equals `key`.
    pub fn find_object_value(&self, key: &[u8]) -> Option<&Value> {
        let index = self.find_object_index(key)?;
        self.as_object()?.get(index).map(Member::value)
    }

    pub fn swap(&mut self, other: &mut Value) {
        core::mem::swap(self, other);
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::True => Some(true),
            Value::False => Some(false),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::String(s) => Some(s.as_bytes()),
            _ => None,
        }
    }

    /// The string content, if this is a string holding valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => s.to_str().ok(),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(elements) => Some(elements),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&[Member]> {
        match self {
            Value::Object(members) => Some(members),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        if b {
            Value::True
        } else {
            Value::False
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(JsonString::from(s))
    }
}

impl From<JsonString> for Value {
    fn from(s: JsonString) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Value::Array(elements)
    }
}

impl From<Vec<Member>> for Value {
    fn from(members: Vec<Member>) -> Self {
        Value::Object(members)
    }
}

impl core::str::FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_str(s)
    }
}
