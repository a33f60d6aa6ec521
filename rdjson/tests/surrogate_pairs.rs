// SPDX-License-Identifier: Apache-2.0

//! UTF-16 surrogate pair handling in `\u` escapes, for string values and
//! object keys alike.

use rdjson::{parse, ParseError, Value};
use test_log::test;

fn string_of(json: &[u8]) -> Vec<u8> {
    let value = parse(json).unwrap_or_else(|e| panic!("{json:?} failed: {e}"));
    value.string().to_vec()
}

#[test]
fn test_basic_surrogate_pair() {
    // G clef, U+1D11E
    assert_eq!(string_of(br#""\uD834\uDD1E""#), b"\xF0\x9D\x84\x9E");
    assert_eq!(string_of(br#""\ud834\udd1e""#), b"\xF0\x9D\x84\x9E");
}

#[test]
fn test_surrogate_pair_range_limits() {
    // First and last code points reachable through a pair
    assert_eq!(string_of(br#""\uD800\uDC00""#), "\u{10000}".as_bytes());
    assert_eq!(string_of(br#""\uDBFF\uDFFF""#), "\u{10FFFF}".as_bytes());
}

#[test]
fn test_emoji_surrogate_pair() {
    assert_eq!(string_of(br#""\uD83D\uDE00""#), "\u{1F600}".as_bytes());
}

#[test]
fn test_multiple_pairs_and_mixed_content() {
    let decoded = string_of(br#""a\uD83D\uDE00b\uD834\uDD1Ec\u00E9""#);
    assert_eq!(decoded, "a\u{1F600}b\u{1D11E}c\u{e9}".as_bytes());
}

#[test]
fn test_pair_in_object_key() {
    let value = parse(br#"{"\uD83D\uDE00": "\uD834\uDD1E"}"#).unwrap();
    assert_eq!(value.object_key(0), "\u{1F600}".as_bytes());
    assert_eq!(value.object_value(0).string(), "\u{1D11E}".as_bytes());
    assert!(value.find_object_value("\u{1F600}".as_bytes()).is_some());
}

#[test]
fn test_pairs_in_array() {
    let value = parse(br#"["\uD83D\uDE00", "\uD83D\uDE01"]"#).unwrap();
    let decoded: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(decoded, ["\u{1F600}", "\u{1F601}"]);
}

#[test]
fn test_lone_low_surrogate_is_kept() {
    // Encoded as three bytes; the result is not valid UTF-8
    let value = parse(br#""\uDC00""#).unwrap();
    assert_eq!(value.string(), b"\xED\xB0\x80");
    assert_eq!(value.as_str(), None);
}

#[test]
fn test_high_surrogate_needs_a_low_partner() {
    let cases: [&[u8]; 5] = [
        br#""\uD800""#,
        br#""\uD800x""#,
        br#""\uD800\n""#,
        br#""\uD800\uD800""#,
        br#""\uD800A""#,
    ];
    for json in cases {
        assert_eq!(
            parse(json),
            Err(ParseError::InvalidUnicodeSurrogate),
            "{}",
            String::from_utf8_lossy(json)
        );
    }
}

#[test]
fn test_bad_hex_in_low_half() {
    assert_eq!(
        parse(br#""\uD800\uDC0G""#),
        Err(ParseError::InvalidUnicodeHex)
    );
    assert_eq!(parse(br#""\uD800\uDC""#), Err(ParseError::InvalidUnicodeHex));
}
