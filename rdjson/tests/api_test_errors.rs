// SPDX-License-Identifier: Apache-2.0

// Rejected inputs: every case must report the expected error and leave the
// target value as null

use rdjson::{ParseError, Parser, Value};

fn assert_rejected(json: &[u8], expected: ParseError) {
    let mut parser = Parser::new();
    let mut value = Value::from(true);
    assert_eq!(
        parser.parse_into(json, &mut value),
        Err(expected),
        "input: {:?}",
        String::from_utf8_lossy(json)
    );
    assert!(value.is_null(), "value not reset for {json:?}");
}

macro_rules! error_tests {
    ($($name:ident: $json:expr => $err:ident,)*) => {
        $(
            paste::paste! {
                #[test_log::test]
                fn [<test_ $name>]() {
                    assert_rejected($json, ParseError::$err);
                }
            }
        )*
    };
}

error_tests! {
    expect_value_empty: b"" => ExpectValue,
    expect_value_whitespace: b" \t\r\n" => ExpectValue,
    expect_value_after_comma: b"[1," => ExpectValue,
    expect_value_after_colon: br#"{"a":"# => ExpectValue,

    invalid_value_truncated_literal: b"nul" => InvalidValue,
    invalid_value_question_mark: b"?" => InvalidValue,
    invalid_value_literal_case: b"TRUE" => InvalidValue,
    invalid_value_plus_zero: b"+0" => InvalidValue,
    invalid_value_plus_one: b"+1" => InvalidValue,
    invalid_value_leading_dot: b".123" => InvalidValue,
    invalid_value_trailing_dot: b"1." => InvalidValue,
    invalid_value_inf_upper: b"INF" => InvalidValue,
    invalid_value_inf: b"inf" => InvalidValue,
    invalid_value_nan_upper: b"NAN" => InvalidValue,
    invalid_value_nan: b"nan" => InvalidValue,
    invalid_value_bare_minus: b"-" => InvalidValue,
    invalid_value_empty_exponent: b"1e" => InvalidValue,
    invalid_value_signed_empty_exponent: b"1e+" => InvalidValue,
    invalid_value_trailing_comma_in_array: b"[1,]" => InvalidValue,
    invalid_value_in_array: br#"["a", nul]"# => InvalidValue,

    root_not_singular_literal: b"null x" => RootNotSingular,
    root_not_singular_leading_zero: b"0123" => RootNotSingular,
    root_not_singular_hex_zero: b"0x0" => RootNotSingular,
    root_not_singular_hex: b"0x123" => RootNotSingular,
    root_not_singular_two_values: b"[] []" => RootNotSingular,

    miss_quotation_mark_lone: b"\"" => MissQuotationMark,
    miss_quotation_mark_unterminated: b"\"abc" => MissQuotationMark,
    miss_quotation_mark_nul_in_string: b"\"abc\0\"" => MissQuotationMark,

    invalid_string_escape_v: br#""\v""# => InvalidStringEscape,
    invalid_string_escape_quote: br#""\'""# => InvalidStringEscape,
    invalid_string_escape_zero: br#""\0""# => InvalidStringEscape,
    invalid_string_escape_x: br#""\x12""# => InvalidStringEscape,
    invalid_string_escape_at_end: b"\"\\" => InvalidStringEscape,

    invalid_string_char_soh: b"\"\x01\"" => InvalidStringChar,
    invalid_string_char_us: b"\"\x1F\"" => InvalidStringChar,
    invalid_string_char_newline: b"\"a\nb\"" => InvalidStringChar,

    invalid_unicode_hex_none: br#""\u""# => InvalidUnicodeHex,
    invalid_unicode_hex_one: br#""\u0""# => InvalidUnicodeHex,
    invalid_unicode_hex_two: br#""\u01""# => InvalidUnicodeHex,
    invalid_unicode_hex_three: br#""\u012""# => InvalidUnicodeHex,
    invalid_unicode_hex_slash_first: br#""\u/000""# => InvalidUnicodeHex,
    invalid_unicode_hex_g_first: br#""\uG000""# => InvalidUnicodeHex,
    invalid_unicode_hex_slash_second: br#""\u0/00""# => InvalidUnicodeHex,
    invalid_unicode_hex_g_second: br#""\u0G00""# => InvalidUnicodeHex,
    invalid_unicode_hex_slash_last: br#""\u000/""# => InvalidUnicodeHex,
    invalid_unicode_hex_g_third: br#""\u00G0""# => InvalidUnicodeHex,
    invalid_unicode_hex_space: br#""\u 123""# => InvalidUnicodeHex,
    invalid_unicode_hex_at_end: b"\"\\u12" => InvalidUnicodeHex,

    invalid_unicode_surrogate_high_alone: br#""\uD800""# => InvalidUnicodeSurrogate,
    invalid_unicode_surrogate_high_max_alone: br#""\uDBFF""# => InvalidUnicodeSurrogate,
    invalid_unicode_surrogate_backslash: br#""\uD800\\""# => InvalidUnicodeSurrogate,
    invalid_unicode_surrogate_two_highs: br#""\uD800\uDBFF""# => InvalidUnicodeSurrogate,
    invalid_unicode_surrogate_not_low: br#""\uD800\uE000""# => InvalidUnicodeSurrogate,

    miss_comma_or_square_bracket_end: b"[1" => MissCommaOrSquareBracket,
    miss_comma_or_square_bracket_curly: b"[1}" => MissCommaOrSquareBracket,
    miss_comma_or_square_bracket_space: b"[1 2" => MissCommaOrSquareBracket,
    miss_comma_or_square_bracket_nested: b"[[]" => MissCommaOrSquareBracket,

    miss_key_colon: b"{:1," => MissKey,
    miss_key_number: b"{1:1," => MissKey,
    miss_key_true: b"{true:1," => MissKey,
    miss_key_false: b"{false:1," => MissKey,
    miss_key_null: b"{null:1," => MissKey,
    miss_key_array: b"{[]:1," => MissKey,
    miss_key_object: b"{{}:1," => MissKey,
    miss_key_after_comma: br#"{"a":1,"# => MissKey,
    miss_key_trailing_comma: br#"{"a":1,}"# => MissKey,

    miss_colon_close: br#"{"a"}"# => MissColon,
    miss_colon_comma: br#"{"a","b"}"# => MissColon,
    miss_colon_end: br#"{"a""# => MissColon,

    miss_comma_or_curly_bracket_end: br#"{"a":1"# => MissCommaOrCurlyBracket,
    miss_comma_or_curly_bracket_square: br#"{"a":1]"# => MissCommaOrCurlyBracket,
    miss_comma_or_curly_bracket_space: br#"{"a":1 "b""# => MissCommaOrCurlyBracket,
    miss_comma_or_curly_bracket_nested: br#"{"a":{}"# => MissCommaOrCurlyBracket,
}

#[test_log::test]
fn test_error_in_deep_member_discards_whole_document() {
    let json = br#"{"keep": [1, 2, {"also": "this"}], "bad": [true, "x", {"k": tru}]}"#;
    assert_rejected(json, ParseError::InvalidValue);
}

#[test_log::test]
fn test_errors_display_a_message() {
    let errors = [
        ParseError::ExpectValue,
        ParseError::InvalidValue,
        ParseError::RootNotSingular,
        ParseError::NumberTooBig,
        ParseError::MissQuotationMark,
        ParseError::InvalidStringEscape,
        ParseError::InvalidStringChar,
        ParseError::InvalidUnicodeHex,
        ParseError::InvalidUnicodeSurrogate,
        ParseError::MissCommaOrSquareBracket,
        ParseError::MissKey,
        ParseError::MissColon,
        ParseError::MissCommaOrCurlyBracket,
        ParseError::NestingTooDeep,
        ParseError::OutOfMemory,
    ];
    for err in errors {
        let message = err.to_string();
        assert!(!message.is_empty(), "{err:?}");
        let as_error: &dyn std::error::Error = &err;
        assert_eq!(as_error.to_string(), message);
    }
}
