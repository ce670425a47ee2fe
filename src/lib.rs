// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
This library is designed to represent an Android vector drawable
as a renderable scene graph.

Here is simple overview of such structure:

- [`Document`]
    - viewport and intrinsic sizes
    - [`Element`] children
        - [`Group`]
            - transform properties
            - [`Element`] children
        - [`Path`]
            - [`PathData`]
            - paint properties with unresolved [`ColorRef`]'s
            - optional [`Gradient`]
        - [`ClipPath`]

The [`Document`] is built once from the XML text and is immutable afterwards.
Parsing is strict about structure: malformed numbers, broken path data and
invalid nesting abort the parse with a [`ParseError`] pointing at the exact
byte offset. Unknown elements and attributes, on the other hand, are skipped
with a warning, because the format is designed to evolve.

The path data of each [`Path`] and [`ClipPath`] is interpreted eagerly into a
list of absolute drawing [`Primitive`]'s: relative coordinates are resolved,
smooth curves get explicit control points and elliptical arcs are decomposed
into cubic curves. Colors stay symbolic until a renderer resolves them
through a [`ColorProvider`].

See modules and structs documentation for details.

[`ClipPath`]: struct.ClipPath.html
[`ColorProvider`]: types/trait.ColorProvider.html
[`ColorRef`]: types/enum.ColorRef.html
[`Document`]: struct.Document.html
[`Element`]: enum.Element.html
[`Gradient`]: struct.Gradient.html
[`Group`]: struct.Group.html
[`ParseError`]: struct.ParseError.html
[`Path`]: struct.Path.html
[`PathData`]: types/path/struct.PathData.html
[`Primitive`]: types/path/enum.Primitive.html

*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate dtoa;
extern crate float_cmp;
#[macro_use]
extern crate log;

pub use document::*;
pub use error::{ErrorKind, ParseError};
pub use name::{AttributeId, ElementId};
pub use parser::ParseOptions;
pub use stream::{Stream, StrSpan};

// TODO: #[cfg(test)]
#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => ({
        match (&$left, &$right) {
            (left_val, right_val) => {
                if !(*left_val == *right_val) {
                    panic!("assertion failed: `(left == right)` \
                           \nleft:  `{}`\nright: `{}`",
                           left_val, right_val)
                }
            }
        }
    })
}

mod document;
mod error;
mod name;
mod parser;
mod stream;

pub mod types;
pub mod xml;
