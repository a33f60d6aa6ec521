// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::parse_error::ParseError;

fn is_digit(byte: Option<&u8>) -> bool {
    matches!(byte, Some(b'0'..=b'9'))
}

fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while is_digit(bytes.get(pos)) {
        pos += 1;
    }
    pos
}

/// Validates the number grammar at the start of `bytes` and returns the length
/// of the number token.
///
/// Grammar: `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`
///
/// Scanning stops at the first byte that cannot extend the token, so `0123`
/// yields a one byte token and leaves `123` for the caller to reject.
pub fn scan_number(bytes: &[u8]) -> Result<usize, ParseError> {
    let mut pos = 0;
    if bytes.first() == Some(&b'-') {
        pos += 1;
    }

    match bytes.get(pos) {
        Some(b'0') => pos += 1,
        Some(b'1'..=b'9') => pos = skip_digits(bytes, pos + 1),
        _ => return Err(ParseError::InvalidValue),
    }

    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        if !is_digit(bytes.get(pos)) {
            return Err(ParseError::InvalidValue);
        }
        pos = skip_digits(bytes, pos);
    }

    if let Some(b'e' | b'E') = bytes.get(pos) {
        pos += 1;
        if let Some(b'+' | b'-') = bytes.get(pos) {
            pos += 1;
        }
        if !is_digit(bytes.get(pos)) {
            return Err(ParseError::InvalidValue);
        }
        pos = skip_digits(bytes, pos);
    }

    Ok(pos)
}

/// Converts a grammar-valid number token to the nearest `f64`.
///
/// Magnitudes below the smallest subnormal become `0.0`. Magnitudes above
/// `f64::MAX` become infinity, or `NumberTooBig` when `reject_overflow` is set.
pub fn convert_number(token: &[u8], reject_overflow: bool) -> Result<f64, ParseError> {
    // Number tokens are pure ASCII
    let text = core::str::from_utf8(token).map_err(|_| ParseError::InvalidValue)?;
    let number = f64::from_str(text).map_err(|_| ParseError::InvalidValue)?;
    if reject_overflow && number.is_infinite() {
        log::debug!("number literal {text} overflows f64");
        return Err(ParseError::NumberTooBig);
    }
    Ok(number)
}

/// Scans and converts the number at the start of `bytes`.
///
/// # Returns
/// The converted value and the number of bytes the token occupies.
pub fn parse_number(bytes: &[u8], reject_overflow: bool) -> Result<(f64, usize), ParseError> {
    let len = scan_number(bytes)?;
    let token = bytes.get(..len).ok_or(ParseError::InvalidValue)?;
    Ok((convert_number(token, reject_overflow)?, len))
}
