// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Low-level, zero-copy scanning over the document text.

use std::fmt;

use error::{ErrorKind, ParseError};

/// A string slice that remembers its position in the original document.
///
/// All substrings produced during parsing are `StrSpan`'s, so any later
/// error inside such substring can still be reported at a byte offset
/// of the original input.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct StrSpan<'a> {
    text: &'a str,
    start: usize,
}

impl<'a> StrSpan<'a> {
    /// Constructs a new span from a string with a known start offset.
    pub fn new(text: &'a str, start: usize) -> StrSpan<'a> {
        StrSpan { text, start }
    }

    /// Constructs a new span from a whole string.
    pub fn from_str(text: &'a str) -> StrSpan<'a> {
        StrSpan { text, start: 0 }
    }

    /// Returns the span's text.
    pub fn to_str(&self) -> &'a str {
        self.text
    }

    /// Returns the offset of the span's first byte in the original input.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the offset past the span's last byte in the original input.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Returns the span's length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl<'a> fmt::Display for StrSpan<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A streaming text parsing interface.
///
/// The cursor owns nothing: it walks a borrowed string and hands out
/// subslices. Positions reported by [`pos`] and carried by errors are
/// always offsets into the original document, even when the stream was
/// created from an attribute value in the middle of it.
///
/// [`pos`]: #method.pos
#[derive(Clone, Copy, Debug)]
pub struct Stream<'a> {
    text: &'a str,
    pos: usize,
    base: usize,
}

#[inline]
fn is_space_byte(b: u8) -> bool {
    match b {
        b' ' | b'\t' | b'\n' | b'\r' => true,
        _ => false,
    }
}

#[inline]
fn is_name_byte(b: u8) -> bool {
    match b {
        b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b':' | b'.' => true,
        _ => false,
    }
}

impl<'a> Stream<'a> {
    /// Constructs a new stream over a whole string.
    pub fn from_str(text: &'a str) -> Stream<'a> {
        Stream { text, pos: 0, base: 0 }
    }

    /// Constructs a new stream over a span.
    ///
    /// The stream inherits the span's offset, so all positions keep
    /// pointing into the original document.
    pub fn from_span(span: StrSpan<'a>) -> Stream<'a> {
        Stream { text: span.text, pos: 0, base: span.start }
    }

    /// Returns the current position in the original document.
    pub fn pos(&self) -> usize {
        self.base + self.pos
    }

    /// Returns `true` if the cursor is past the last byte.
    pub fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Returns the current byte.
    ///
    /// Returns `UnexpectedEndOfInput` if the stream is at the end.
    pub fn curr_byte(&self) -> Result<u8, ParseError> {
        if self.at_end() {
            return Err(ParseError::new(ErrorKind::UnexpectedEndOfInput, self.pos()));
        }

        Ok(self.text.as_bytes()[self.pos])
    }

    /// Advances the cursor by `n` bytes.
    pub fn advance(&mut self, n: usize) {
        debug_assert!(self.pos + n <= self.text.len());
        self.pos += n;
    }

    /// Checks that the current byte is `b` and advances past it.
    ///
    /// A different byte is an `InvalidByteSequence` error.
    pub fn consume_byte(&mut self, b: u8) -> Result<(), ParseError> {
        if self.curr_byte()? != b {
            return Err(ParseError::new(ErrorKind::InvalidByteSequence, self.pos()));
        }

        self.advance(1);
        Ok(())
    }

    /// Returns `true` if the remaining text starts with `text`.
    pub fn starts_with(&self, text: &str) -> bool {
        self.text.as_bytes()[self.pos..].starts_with(text.as_bytes())
    }

    /// Returns the text between a previous position and the cursor as a span.
    ///
    /// `start` is a position in the original document, like the ones
    /// returned by [`pos`].
    ///
    /// [`pos`]: #method.pos
    pub fn slice_back(&self, start: usize) -> StrSpan<'a> {
        debug_assert!(start >= self.base);
        let local = start - self.base;
        StrSpan::new(&self.text[local..self.pos], start)
    }

    /// Skips whitespace.
    pub fn skip_spaces(&mut self) {
        while !self.at_end() && is_space_byte(self.text.as_bytes()[self.pos]) {
            self.pos += 1;
        }
    }

    /// Skips whitespace and at most one comma.
    ///
    /// This is the separator rule of coordinate lists inside path data.
    pub fn skip_list_separator(&mut self) {
        self.skip_spaces();
        if !self.at_end() && self.text.as_bytes()[self.pos] == b',' {
            self.pos += 1;
            self.skip_spaces();
        }
    }

    /// Consumes bytes while `f` returns `true` and returns them as a span.
    pub fn consume_bytes<F>(&mut self, f: F) -> StrSpan<'a>
        where F: Fn(u8) -> bool
    {
        let start = self.pos;
        while !self.at_end() && f(self.text.as_bytes()[self.pos]) {
            self.pos += 1;
        }

        StrSpan::new(&self.text[start..self.pos], self.base + start)
    }

    /// Consumes an XML-like name.
    ///
    /// An empty name is an `InvalidByteSequence` error.
    pub fn consume_name(&mut self) -> Result<StrSpan<'a>, ParseError> {
        let span = self.consume_bytes(is_name_byte);
        if span.is_empty() {
            return Err(ParseError::new(ErrorKind::InvalidByteSequence, self.pos()));
        }

        Ok(span)
    }

    /// Returns `true` if the current byte can start a number.
    pub fn is_number_start(&self) -> bool {
        match self.text.as_bytes().get(self.pos) {
            Some(&b) => {
                match b {
                    b'0'..=b'9' | b'.' | b'-' | b'+' => true,
                    _ => false,
                }
            }
            None => false,
        }
    }

    /// Parses a number from the stream.
    ///
    /// Accepts the usual decimal and scientific notations. The scan stops
    /// at the first byte that cannot continue the number, so `10-20`
    /// produces `10` and leaves the cursor at the minus.
    pub fn parse_number(&mut self) -> Result<f64, ParseError> {
        let start = self.pos;

        if self.at_end() {
            return Err(ParseError::new(ErrorKind::UnexpectedEndOfInput, self.pos()));
        }

        let bytes = self.text.as_bytes();

        if bytes[self.pos] == b'+' || bytes[self.pos] == b'-' {
            self.pos += 1;
        }

        let mut has_digits = false;
        while !self.at_end() && bytes[self.pos].is_ascii_digit() {
            self.pos += 1;
            has_digits = true;
        }

        if !self.at_end() && bytes[self.pos] == b'.' {
            // A second dot starts a new number, so only the first
            // fraction is consumed here.
            self.pos += 1;
            while !self.at_end() && bytes[self.pos].is_ascii_digit() {
                self.pos += 1;
                has_digits = true;
            }
        }

        if !has_digits {
            self.pos = start;
            return Err(ParseError::new(ErrorKind::MalformedNumber, self.pos()));
        }

        if !self.at_end() && (bytes[self.pos] == b'e' || bytes[self.pos] == b'E') {
            self.pos += 1;
            if !self.at_end() && (bytes[self.pos] == b'+' || bytes[self.pos] == b'-') {
                self.pos += 1;
            }

            let mut has_exp_digits = false;
            while !self.at_end() && bytes[self.pos].is_ascii_digit() {
                self.pos += 1;
                has_exp_digits = true;
            }

            if !has_exp_digits {
                let pos = self.base + start;
                self.pos = start;
                return Err(ParseError::new(ErrorKind::MalformedNumber, pos));
            }
        }

        match self.text[start..self.pos].parse() {
            Ok(n) => Ok(n),
            Err(_) => {
                let pos = self.base + start;
                self.pos = start;
                Err(ParseError::new(ErrorKind::MalformedNumber, pos))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_number {
        ($name:ident, $text:expr, $result:expr) => (
            #[test]
            fn $name() {
                let mut s = Stream::from_str($text);
                assert_eq!(s.parse_number().unwrap(), $result);
            }
        )
    }

    test_number!(parse_number_1, "10", 10.0);
    test_number!(parse_number_2, "-10", -10.0);
    test_number!(parse_number_3, "+10", 10.0);
    test_number!(parse_number_4, "10.5", 10.5);
    test_number!(parse_number_5, ".5", 0.5);
    test_number!(parse_number_6, "-.5", -0.5);
    test_number!(parse_number_7, "1e2", 100.0);
    test_number!(parse_number_8, "1.5e-2", 0.015);
    test_number!(parse_number_9, "10abc", 10.0);

    #[test]
    fn parse_number_10() {
        // the minus ends the first number
        let mut s = Stream::from_str("10-20");
        assert_eq!(s.parse_number().unwrap(), 10.0);
        assert_eq!(s.parse_number().unwrap(), -20.0);
    }

    #[test]
    fn parse_number_11() {
        // the second dot ends the first number
        let mut s = Stream::from_str(".5.5");
        assert_eq!(s.parse_number().unwrap(), 0.5);
        assert_eq!(s.parse_number().unwrap(), 0.5);
    }

    macro_rules! test_number_err {
        ($name:ident, $text:expr, $kind:expr, $pos:expr) => (
            #[test]
            fn $name() {
                let mut s = Stream::from_str($text);
                let e = s.parse_number().unwrap_err();
                assert_eq!(e.kind(), $kind);
                assert_eq!(e.pos(), $pos);
            }
        )
    }

    test_number_err!(parse_number_err_1, "q", ErrorKind::MalformedNumber, 0);
    test_number_err!(parse_number_err_2, "", ErrorKind::UnexpectedEndOfInput, 0);
    test_number_err!(parse_number_err_3, "-", ErrorKind::MalformedNumber, 0);
    test_number_err!(parse_number_err_4, "1e", ErrorKind::MalformedNumber, 0);
    test_number_err!(parse_number_err_5, ".", ErrorKind::MalformedNumber, 0);

    #[test]
    fn spanned_pos_1() {
        // positions must stay global for sub-streams
        let mut s = Stream::from_span(StrSpan::new("abc", 20));
        let e = s.parse_number().unwrap_err();
        assert_eq!(e.pos(), 20);
    }

    #[test]
    fn list_separator_1() {
        let mut s = Stream::from_str("10, 20 ,30  40");
        let mut list = Vec::new();
        while !s.at_end() {
            list.push(s.parse_number().unwrap());
            s.skip_list_separator();
        }
        assert_eq!(list, vec![10.0, 20.0, 30.0, 40.0]);
    }
}
