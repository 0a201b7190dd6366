//! Decimal string to signed integer conversion.
//!
//! A single linear scan over the input bytes: an optional leading `-`, then
//! one or more ASCII digits, accumulated into an `i64`. Overflow and
//! underflow are detected with a pre-check *before* each combine step, so
//! the accumulator never wraps and the boundary values `i64::MIN` and
//! `i64::MAX` parse exactly. The first character that breaks the grammar
//! terminates the scan; no partial value is ever returned.

use crate::errors::{ErrorKind, ParseError};
use crate::span::Span;

/// Parses `input` as a decimal `i64`.
///
/// Accepts an optional leading `-` followed by one or more digits `0`-`9`.
/// Leading zeros are accepted. Anything else fails with a specific
/// [`ErrorKind`], and a returned value always lies in `[i64::MIN, i64::MAX]`.
///
/// Example:
///   parse("-9223372036854775808") ; => Ok(i64::MIN)
///   parse("12a3")                 ; => Err(InvalidChar at the 'a')
pub fn parse(input: &str) -> Result<i64, ParseError> {
    let mut cursor = Cursor {
        bytes: input.as_bytes(),
        pos: 0,
    };

    let negative = cursor.eat(b'-');

    if cursor.peek().is_none() {
        return Err(ParseError::report(
            ErrorKind::Empty,
            input,
            Span::at(cursor.pos),
        ));
    }

    let mut acc: i64 = 0;
    while let Some(byte) = cursor.peek() {
        if !byte.is_ascii_digit() {
            // Non-digit character; bail out without consuming further input.
            let found = char_at(input, cursor.pos);
            return Err(ParseError::report(
                ErrorKind::InvalidChar { found },
                input,
                Span::new(cursor.pos, cursor.pos + found.len_utf8()),
            ));
        }

        let digit = byte - b'0';
        let d = i64::from(digit);

        // Range pre-check, performed before combining so the combine step
        // itself can never wrap. Truncating division makes i64::MIN and
        // i64::MAX reachable while rejecting one past either boundary.
        if negative {
            if (i64::MIN + d) / 10 > acc {
                return Err(ParseError::report(
                    ErrorKind::Underflow { digit },
                    input,
                    Span::new(cursor.pos, cursor.pos + 1),
                ));
            }
            acc = acc * 10 - d;
        } else {
            if (i64::MAX - d) / 10 < acc {
                return Err(ParseError::report(
                    ErrorKind::Overflow { digit },
                    input,
                    Span::new(cursor.pos, cursor.pos + 1),
                ));
            }
            acc = acc * 10 + d;
        }

        cursor.advance();
    }

    Ok(acc)
}

/// Bounds-checked cursor over the input bytes. Replaces the classic
/// null-terminated pointer walk with an index and an explicit end check.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    /// Consumes `byte` if it is next, returning whether it was.
    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.advance();
            true
        } else {
            false
        }
    }
}

/// The full character starting at byte offset `pos`.
///
/// The scan only reaches a non-ASCII byte at a character boundary (every
/// earlier byte was an ASCII digit or sign), so slicing here is safe.
fn char_at(input: &str, pos: usize) -> char {
    input[pos..].chars().next().unwrap_or('\u{FFFD}')
}
