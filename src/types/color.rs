// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt;
use std::str;

use error::{ErrorKind, ParseError};
use stream::StrSpan;

/// Representation of a concrete ARGB color.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    #[allow(missing_docs)]
    pub red: u8,
    #[allow(missing_docs)]
    pub green: u8,
    #[allow(missing_docs)]
    pub blue: u8,
    #[allow(missing_docs)]
    pub alpha: u8,
}

impl Color {
    /// Constructs a new opaque color.
    #[inline]
    pub fn new(red: u8, green: u8, blue: u8) -> Color {
        Color { red, green, blue, alpha: 255 }
    }

    /// Constructs a new color with an alpha channel.
    #[inline]
    pub fn with_alpha(alpha: u8, red: u8, green: u8, blue: u8) -> Color {
        Color { red, green, blue, alpha }
    }

    /// Parses a color from a hex literal span.
    ///
    /// Supports the `#RGB`, `#ARGB`, `#RRGGBB` and `#AARRGGBB` notations.
    pub(crate) fn from_span(span: StrSpan) -> Result<Color, ParseError> {
        let err = || ParseError::new(ErrorKind::MalformedNumber, span.start());

        let text = span.to_str().as_bytes();
        if text.first() != Some(&b'#') {
            return Err(err());
        }

        let mut digits = [0u8; 8];
        let hex = &text[1..];
        if hex.len() > 8 {
            return Err(err());
        }

        for (i, &b) in hex.iter().enumerate() {
            digits[i] = match b {
                b'0'..=b'9' => b - b'0',
                b'a'..=b'f' => b - b'a' + 10,
                b'A'..=b'F' => b - b'A' + 10,
                _ => return Err(err()),
            };
        }

        let d = &digits;
        match hex.len() {
            3 => Ok(Color::new(d[0] * 17, d[1] * 17, d[2] * 17)),
            4 => Ok(Color::with_alpha(d[0] * 17, d[1] * 17, d[2] * 17, d[3] * 17)),
            6 => Ok(Color::new(d[0] * 16 + d[1], d[2] * 16 + d[3], d[4] * 16 + d[5])),
            8 => {
                Ok(Color::with_alpha(d[0] * 16 + d[1], d[2] * 16 + d[3],
                                     d[4] * 16 + d[5], d[6] * 16 + d[7]))
            }
            _ => Err(err()),
        }
    }
}

impl str::FromStr for Color {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Color, ParseError> {
        Color::from_span(StrSpan::from_str(text))
    }
}

static CHARS: &'static [u8] = b"0123456789abcdef";

#[inline]
fn int2hex(n: u8) -> (u8, u8) {
    (CHARS[(n >> 4) as usize], CHARS[(n & 0xf) as usize])
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = Vec::with_capacity(9);
        buf.push(b'#');

        if self.alpha != 255 {
            let (a1, a2) = int2hex(self.alpha);
            buf.push(a1);
            buf.push(a2);
        }

        for &c in &[self.red, self.green, self.blue] {
            let (c1, c2) = int2hex(c);
            buf.push(c1);
            buf.push(c2);
        }

        write!(f, "{}", str::from_utf8(&buf).unwrap())
    }
}

/// A symbolic color reference.
///
/// The parser never resolves colors: a path carries either a literal
/// color or the name of a resource or theme attribute, and the host
/// resolves the names through a [`ColorProvider`] when it actually
/// paints.
///
/// [`ColorProvider`]: trait.ColorProvider.html
#[derive(Clone, PartialEq, Debug)]
pub enum ColorRef {
    /// A literal color: `#AARRGGBB` and the shorter hex forms.
    Color(Color),
    /// A resource reference: `@color/accent`.
    Resource(String),
    /// A theme attribute reference: `?attr/colorAccent`.
    Theme(String),
}

impl ColorRef {
    /// Parses a color reference from a span.
    pub(crate) fn from_span(span: StrSpan) -> Result<ColorRef, ParseError> {
        let text = span.to_str();

        match text.as_bytes().first() {
            Some(&b'#') => Color::from_span(span).map(ColorRef::Color),
            Some(&b'@') if text.len() > 1 => Ok(ColorRef::Resource(text[1..].to_string())),
            Some(&b'?') if text.len() > 1 => Ok(ColorRef::Theme(text[1..].to_string())),
            _ => Err(ParseError::new(ErrorKind::UnknownEnumValue, span.start())),
        }
    }

    /// Resolves the reference into a concrete color.
    ///
    /// Literal colors are returned as is; the named variants are looked
    /// up through the provider.
    pub fn resolve(&self, provider: &dyn ColorProvider) -> Color {
        match *self {
            ColorRef::Color(c) => c,
            ColorRef::Resource(ref name) => provider.color_from_resources(name),
            ColorRef::Theme(ref name) => provider.color_from_theme(name),
        }
    }
}

impl str::FromStr for ColorRef {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<ColorRef, ParseError> {
        ColorRef::from_span(StrSpan::from_str(text))
    }
}

/// An external source of named colors.
///
/// Implemented by the host application; the library itself has no color
/// tables.
pub trait ColorProvider {
    /// Resolves a color by its resource name.
    fn color_from_resources(&self, name: &str) -> Color;

    /// Resolves a color by its theme attribute name.
    fn color_from_theme(&self, name: &str) -> Color;
}
