// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tokenizer for the XML subset used by the vector drawable format.
//!
//! This is not a general XML parser: there are no namespaces beyond the
//! literal prefix in a name, no DTD, no CDATA and no entity references,
//! because the format uses none of them. What it does guarantee is that
//! any input, however broken or truncated, produces either tokens or a
//! typed error with a byte position - never a panic.

use error::{ErrorKind, ParseError};
use stream::{Stream, StrSpan};

/// An XML token.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Token<'a> {
    /// The start of an element: `<name`.
    ///
    /// The span holds the tag name; its offset points at the name.
    ElementStart(StrSpan<'a>),

    /// An attribute inside an open tag: name and raw value.
    Attribute(StrSpan<'a>, StrSpan<'a>),

    /// The end of an open tag or of an element.
    ElementEnd(ElementEnd<'a>),

    /// Non-whitespace text between elements.
    Text(StrSpan<'a>),

    /// A comment: `<!-- text -->`.
    Comment(StrSpan<'a>),

    /// An XML declaration: `<?xml version='1.0'?>`.
    Declaration(StrSpan<'a>),
}

/// The tail variants of an element.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ElementEnd<'a> {
    /// The `>` of an open tag with children.
    Open,

    /// A closing tag: `</name>`.
    Close(StrSpan<'a>),

    /// The `/>` of a self-closed tag.
    Empty,
}

#[derive(Clone, Copy, PartialEq)]
enum State {
    Elements,
    Attributes,
}

/// A pull tokenizer over the document text.
///
/// Yields `Result<Token, ParseError>` items. After the first error the
/// iterator is finished. One token of lookahead at most, no backtracking.
pub struct Tokenizer<'a> {
    stream: Stream<'a>,
    state: State,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    /// Constructs a new tokenizer over a string.
    pub fn from_str(text: &'a str) -> Tokenizer<'a> {
        Tokenizer {
            stream: Stream::from_str(text),
            state: State::Elements,
            finished: false,
        }
    }

    /// Returns the current position in the document.
    pub fn pos(&self) -> usize {
        self.stream.pos()
    }

    fn parse_next(&mut self) -> Option<Result<Token<'a>, ParseError>> {
        match self.state {
            State::Elements => self.parse_element_token(),
            State::Attributes => Some(self.parse_attribute_token()),
        }
    }

    fn parse_element_token(&mut self) -> Option<Result<Token<'a>, ParseError>> {
        loop {
            if self.stream.at_end() {
                return None;
            }

            if self.stream.starts_with("<") {
                return Some(self.parse_markup_token());
            }

            let text = self.stream.consume_bytes(|b| b != b'<');
            if !text.to_str().trim().is_empty() {
                return Some(Ok(Token::Text(text)));
            }

            // Whitespace between elements is not a token.
        }
    }

    fn parse_markup_token(&mut self) -> Result<Token<'a>, ParseError> {
        if self.stream.starts_with("<!--") {
            self.stream.advance(4);
            let span = self.consume_until("-->")?;
            self.stream.advance(3);
            return Ok(Token::Comment(span));
        }

        if self.stream.starts_with("<?") {
            self.stream.advance(2);
            let span = self.consume_until("?>")?;
            self.stream.advance(2);
            return Ok(Token::Declaration(span));
        }

        if self.stream.starts_with("</") {
            self.stream.advance(2);
            let name = self.stream.consume_name()?;
            self.stream.skip_spaces();
            self.stream.consume_byte(b'>')?;
            return Ok(Token::ElementEnd(ElementEnd::Close(name)));
        }

        if self.stream.starts_with("<!") {
            // DOCTYPE and CDATA are not part of the format.
            return Err(ParseError::new(ErrorKind::InvalidByteSequence, self.stream.pos()));
        }

        self.stream.advance(1);
        let name = self.stream.consume_name()?;
        self.state = State::Attributes;
        Ok(Token::ElementStart(name))
    }

    fn parse_attribute_token(&mut self) -> Result<Token<'a>, ParseError> {
        self.stream.skip_spaces();

        match self.stream.curr_byte()? {
            b'/' => {
                self.stream.advance(1);
                self.stream.consume_byte(b'>')?;
                self.state = State::Elements;
                Ok(Token::ElementEnd(ElementEnd::Empty))
            }
            b'>' => {
                self.stream.advance(1);
                self.state = State::Elements;
                Ok(Token::ElementEnd(ElementEnd::Open))
            }
            _ => {
                let name = self.stream.consume_name()?;
                self.stream.skip_spaces();
                self.stream.consume_byte(b'=')?;
                self.stream.skip_spaces();

                let quote = self.stream.curr_byte()?;
                if quote != b'"' && quote != b'\'' {
                    return Err(ParseError::new(ErrorKind::InvalidByteSequence,
                                               self.stream.pos()));
                }
                self.stream.advance(1);

                let value = self.stream.consume_bytes(|b| b != quote);
                self.stream.consume_byte(quote)?;

                Ok(Token::Attribute(name, value))
            }
        }
    }

    fn consume_until(&mut self, pat: &str) -> Result<StrSpan<'a>, ParseError> {
        let start = self.stream.pos();
        while !self.stream.at_end() {
            if self.stream.starts_with(pat) {
                return Ok(self.stream.slice_back(start));
            }

            self.stream.advance(1);
        }

        Err(ParseError::new(ErrorKind::UnexpectedEndOfInput, self.stream.pos()))
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token<'a>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.parse_next();
        if let Some(Err(_)) = token {
            self.finished = true;
        }

        token
    }
}
