// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! This module contains the path data interpreter.
//!
//! Path data is a compact command string: a single letter selects a
//! drawing command and the numbers after it are its operands. The
//! interpreter resolves it into a list of absolute [`Primitive`]'s:
//! relative coordinates are added to the current point, smooth curves
//! get their reflected control points, horizontal and vertical lines
//! become plain lines and elliptical arcs are decomposed into cubic
//! curves. The state carried between commands lives in a
//! [`PriorContext`] local to the parse call.
//!
//! [`Primitive`]: enum.Primitive.html
//! [`PriorContext`]: struct.PriorContext.html

pub use self::parser::{parse_path, PriorContext};
pub use self::primitive::{PathData, Primitive};

pub(crate) use self::parser::parse_path_span;

mod arc;
mod parser;
mod primitive;
mod writer;
