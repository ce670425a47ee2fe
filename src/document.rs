// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use error::ParseError;
use parser::{self, ParseOptions};
use types::path::PathData;
use types::{ColorRef, Transform};

/// The fill rule of a path.
#[derive(Clone, Copy, PartialEq, Debug)]
#[allow(missing_docs)]
pub enum FillType {
    NonZero,
    EvenOdd,
}

/// The shape of stroke ends.
#[derive(Clone, Copy, PartialEq, Debug)]
#[allow(missing_docs)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

/// The shape of stroke corners.
#[derive(Clone, Copy, PartialEq, Debug)]
#[allow(missing_docs)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

/// A child of the document or of a group.
///
/// The hierarchy is a closed set of kinds, so traversal is a pattern
/// match over this enum.
#[derive(Clone, PartialEq, Debug)]
#[allow(missing_docs)]
pub enum Element {
    Group(Group),
    Path(Path),
    ClipPath(ClipPath),
}

/// A transform-bearing container node.
#[derive(Clone, PartialEq, Debug)]
pub struct Group {
    /// The group name.
    pub name: Option<String>,
    /// Rotation around the pivot, in degrees.
    pub rotation: f64,
    /// The x coordinate of the rotation and scale pivot.
    pub pivot_x: f64,
    /// The y coordinate of the rotation and scale pivot.
    pub pivot_y: f64,
    /// Horizontal scale factor.
    pub scale_x: f64,
    /// Vertical scale factor.
    pub scale_y: f64,
    /// Horizontal translation, applied after the other properties.
    pub translate_x: f64,
    /// Vertical translation, applied after the other properties.
    pub translate_y: f64,
    /// Ordered child elements.
    pub children: Vec<Element>,
}

impl Default for Group {
    fn default() -> Group {
        Group {
            name: None,
            rotation: 0.0,
            pivot_x: 0.0,
            pivot_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
            children: Vec::new(),
        }
    }
}

impl Group {
    /// Returns the effective transform of the group.
    ///
    /// The property order is fixed by the format: a point is translated
    /// to the pivot, rotated, scaled and then translated to its final
    /// place.
    pub fn transform(&self) -> Transform {
        Transform::default()
            .translate(self.translate_x + self.pivot_x, self.translate_y + self.pivot_y)
            .scale(self.scale_x, self.scale_y)
            .rotate(self.rotation)
            .translate(-self.pivot_x, -self.pivot_y)
    }
}

/// A drawable geometry node.
#[derive(Clone, PartialEq, Debug)]
pub struct Path {
    /// The path name.
    pub name: Option<String>,
    /// The interpreted path data.
    pub data: PathData,
    /// The fill color reference, if the path is filled.
    pub fill: Option<ColorRef>,
    /// Opacity of the fill, `0.0..=1.0`.
    pub fill_alpha: f64,
    /// The fill rule.
    pub fill_type: FillType,
    /// The stroke color reference, if the path is stroked.
    pub stroke: Option<ColorRef>,
    /// The stroke width in viewport units.
    pub stroke_width: f64,
    /// Opacity of the stroke, `0.0..=1.0`.
    pub stroke_alpha: f64,
    /// The shape of the stroke ends.
    pub stroke_line_cap: LineCap,
    /// The shape of the stroke corners.
    pub stroke_line_join: LineJoin,
    /// The miter limit of the stroke.
    pub stroke_miter_limit: f64,
    /// An owned gradient, overriding the fill color when present.
    pub gradient: Option<Gradient>,
}

impl Default for Path {
    fn default() -> Path {
        Path {
            name: None,
            data: PathData::new(),
            fill: None,
            fill_alpha: 1.0,
            fill_type: FillType::NonZero,
            stroke: None,
            stroke_width: 0.0,
            stroke_alpha: 1.0,
            stroke_line_cap: LineCap::Butt,
            stroke_line_join: LineJoin::Miter,
            stroke_miter_limit: 4.0,
            gradient: None,
        }
    }
}

/// A geometry node that restricts painting of its following siblings.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ClipPath {
    /// The clip name.
    pub name: Option<String>,
    /// The interpreted clip geometry.
    pub data: PathData,
}

/// A color ramp descriptor.
#[derive(Clone, PartialEq, Debug)]
pub struct Gradient {
    /// The gradient geometry.
    pub kind: GradientKind,
    /// The color stops, in declaration order.
    ///
    /// The parser does not reorder stops, so a renderer may rely on
    /// the declared offsets being non-decreasing.
    pub stops: Vec<GradientStop>,
}

/// The geometry of a gradient.
#[derive(Clone, Copy, PartialEq, Debug)]
#[allow(missing_docs)]
pub enum GradientKind {
    Linear {
        start_x: f64,
        start_y: f64,
        end_x: f64,
        end_y: f64,
    },
    Radial {
        center_x: f64,
        center_y: f64,
        radius: f64,
    },
}

/// A single gradient color stop.
#[derive(Clone, PartialEq, Debug)]
pub struct GradientStop {
    /// Position of the stop, `0.0..=1.0`.
    pub offset: f64,
    /// The stop color reference.
    pub color: ColorRef,
}

/// One renderable path produced by the document traversal.
///
/// The geometry is already in viewport coordinates; the colors stay
/// unresolved references on the source [`Path`].
///
/// [`Path`]: struct.Path.html
#[derive(Clone, Debug)]
pub struct Drawable<'a> {
    /// The source path with the paint properties.
    pub path: &'a Path,
    /// The path geometry with all ancestor group transforms applied.
    pub data: PathData,
    /// The active clip geometries, also in viewport coordinates.
    pub clips: Vec<PathData>,
}

/// A parsed vector drawable document.
///
/// The document owns its element tree exclusively and never changes
/// after parsing, so it can be shared between threads for reading.
#[derive(Clone, PartialEq, Debug)]
pub struct Document {
    pub(crate) name: Option<String>,
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) viewport_width: f64,
    pub(crate) viewport_height: f64,
    pub(crate) alpha: f64,
    pub(crate) auto_mirrored: bool,
    pub(crate) children: Vec<Element>,
}

impl Document {
    /// Constructs a new `Document` from the text using a default
    /// [`ParseOptions`].
    ///
    /// [`ParseOptions`]: struct.ParseOptions.html
    pub fn from_str(text: &str) -> Result<Document, ParseError> {
        parser::parse_document_str(text, &ParseOptions::default())
    }

    /// Constructs a new `Document` from the text using a supplied
    /// [`ParseOptions`].
    ///
    /// [`ParseOptions`]: struct.ParseOptions.html
    pub fn from_str_with_opt(text: &str, opt: &ParseOptions) -> Result<Document, ParseError> {
        parser::parse_document_str(text, opt)
    }

    /// Constructs a new `Document` from a byte buffer.
    ///
    /// Non-UTF-8 input is an `InvalidByteSequence` error at the first
    /// invalid byte.
    pub fn from_data(data: &[u8]) -> Result<Document, ParseError> {
        parser::parse_document(data, &ParseOptions::default())
    }

    /// Constructs a new `Document` from a byte buffer using a supplied
    /// [`ParseOptions`].
    ///
    /// [`ParseOptions`]: struct.ParseOptions.html
    pub fn from_data_with_opt(data: &[u8], opt: &ParseOptions) -> Result<Document, ParseError> {
        parser::parse_document(data, opt)
    }

    /// Returns the document name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().map(|n| n.as_str())
    }

    /// Returns the intrinsic width, in density independent pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the intrinsic height, in density independent pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the viewport width.
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Returns the viewport height.
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Returns the whole-drawable opacity.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns `true` if the drawable mirrors itself in right-to-left
    /// layouts.
    pub fn auto_mirrored(&self) -> bool {
        self.auto_mirrored
    }

    /// Returns the top level elements.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Walks the tree and returns its drawable paths.
    ///
    /// Each [`Drawable`] carries geometry in viewport coordinates with
    /// all ancestor group transforms composed, together with the clips
    /// active at that point of the tree. Colors are not resolved - a
    /// renderer materializes them through a
    /// [`ColorProvider`](types/trait.ColorProvider.html) when needed.
    ///
    /// [`Drawable`]: struct.Drawable.html
    pub fn drawables(&self) -> Vec<Drawable> {
        let mut list = Vec::new();
        collect_drawables(&self.children, &Transform::default(), &[], &mut list);
        list
    }
}

fn collect_drawables<'a>(
    children: &'a [Element],
    ts: &Transform,
    inherited_clips: &[PathData],
    out: &mut Vec<Drawable<'a>>,
) {
    let mut clips = inherited_clips.to_vec();

    for child in children {
        match *child {
            Element::Group(ref g) => {
                let mut group_ts = *ts;
                group_ts.append(&g.transform());
                collect_drawables(&g.children, &group_ts, &clips, out);
            }
            Element::Path(ref p) => {
                out.push(Drawable {
                    path: p,
                    data: p.data.transform(ts),
                    clips: clips.clone(),
                });
            }
            Element::ClipPath(ref c) => {
                // a clip affects only the siblings after it
                clips.push(c.data.transform(ts));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_transform_1() {
        // translation alone
        let mut g = Group::default();
        g.translate_x = 10.0;
        g.translate_y = 20.0;
        assert_eq!(g.transform().apply(1.0, 1.0), (11.0, 21.0));
    }

    #[test]
    fn group_transform_2() {
        // the pivot anchors the scale
        let mut g = Group::default();
        g.pivot_x = 10.0;
        g.pivot_y = 10.0;
        g.scale_x = 2.0;
        g.scale_y = 2.0;
        assert_eq!(g.transform().apply(10.0, 10.0), (10.0, 10.0));
        assert_eq!(g.transform().apply(11.0, 10.0), (12.0, 10.0));
    }

    #[test]
    fn group_transform_3() {
        // rotation happens before scale
        use types::FuzzyEq;

        let mut g = Group::default();
        g.rotation = 90.0;
        g.scale_x = 2.0;
        g.scale_y = 1.0;

        let (x, y) = g.transform().apply(1.0, 0.0);
        assert!(x.abs() < 1e-9);
        assert!(y.fuzzy_eq(&1.0));
    }
}
