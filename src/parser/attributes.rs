// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Typed decoding of raw attribute values.
//!
//! Every function takes the value as a [`StrSpan`], so the errors it
//! produces point into the original document and not into a copy of
//! the attribute text.
//!
//! [`StrSpan`]: ../../struct.StrSpan.html

use document::{FillType, LineCap, LineJoin};
use error::{ErrorKind, ParseError};
use stream::{Stream, StrSpan};
use types::path::{self, PathData};
use types::ColorRef;

// The dimension suffixes the format defines.
static UNITS: &'static [&'static str] = &["dp", "dip", "px", "sp", "pt", "in", "mm"];

pub fn parse_number(span: StrSpan) -> Result<f64, ParseError> {
    let mut s = Stream::from_span(span);
    s.skip_spaces();
    let n = s.parse_number()?;
    s.skip_spaces();

    if !s.at_end() {
        return Err(ParseError::new(ErrorKind::MalformedNumber, s.pos()));
    }

    Ok(n)
}

pub fn parse_positive_number(span: StrSpan) -> Result<f64, ParseError> {
    let n = parse_number(span)?;
    if n <= 0.0 {
        return Err(ParseError::new(ErrorKind::MalformedNumber, span.start()));
    }

    Ok(n)
}

/// Like `parse_number`, but with an optional dimension suffix, which is
/// stripped: `24dp` decodes as `24`.
pub fn parse_dimension(span: StrSpan) -> Result<f64, ParseError> {
    let mut s = Stream::from_span(span);
    s.skip_spaces();
    let n = s.parse_number()?;

    let unit = s.consume_bytes(|b| b.is_ascii_alphabetic());
    if !unit.is_empty() && !UNITS.contains(&unit.to_str()) {
        return Err(ParseError::new(ErrorKind::MalformedNumber, unit.start()));
    }

    s.skip_spaces();
    if !s.at_end() {
        return Err(ParseError::new(ErrorKind::MalformedNumber, s.pos()));
    }

    Ok(n)
}

pub fn parse_bool(span: StrSpan) -> Result<bool, ParseError> {
    match span.to_str().trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::new(ErrorKind::UnknownEnumValue, span.start())),
    }
}

pub fn parse_path_data(span: StrSpan) -> Result<PathData, ParseError> {
    path::parse_path_span(span)
}

pub fn parse_color_ref(span: StrSpan) -> Result<ColorRef, ParseError> {
    ColorRef::from_span(span)
}

pub fn parse_fill_type(span: StrSpan) -> Result<FillType, ParseError> {
    match span.to_str().trim() {
        "nonZero" => Ok(FillType::NonZero),
        "evenOdd" => Ok(FillType::EvenOdd),
        _ => Err(ParseError::new(ErrorKind::UnknownEnumValue, span.start())),
    }
}

pub fn parse_line_cap(span: StrSpan) -> Result<LineCap, ParseError> {
    match span.to_str().trim() {
        "butt" => Ok(LineCap::Butt),
        "round" => Ok(LineCap::Round),
        "square" => Ok(LineCap::Square),
        _ => Err(ParseError::new(ErrorKind::UnknownEnumValue, span.start())),
    }
}

pub fn parse_line_join(span: StrSpan) -> Result<LineJoin, ParseError> {
    match span.to_str().trim() {
        "miter" => Ok(LineJoin::Miter),
        "round" => Ok(LineJoin::Round),
        "bevel" => Ok(LineJoin::Bevel),
        _ => Err(ParseError::new(ErrorKind::UnknownEnumValue, span.start())),
    }
}

/// The `type` attribute of a gradient.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum GradientType {
    Linear,
    Radial,
}

pub fn parse_gradient_type(span: StrSpan) -> Result<GradientType, ParseError> {
    match span.to_str().trim() {
        "linear" => Ok(GradientType::Linear),
        "radial" => Ok(GradientType::Radial),
        _ => Err(ParseError::new(ErrorKind::UnknownEnumValue, span.start())),
    }
}
