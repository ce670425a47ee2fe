// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt;

use types::{FuzzyEq, Transform};

/// A resolved drawing primitive.
///
/// All coordinates are absolute. Every variant that draws starts at the
/// end point of the previous primitive of the list.
#[derive(Clone, Copy, PartialEq, Debug)]
#[allow(missing_docs)]
pub enum Primitive {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    CurveTo {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x: f64,
        y: f64,
    },
    QuadTo {
        x1: f64,
        y1: f64,
        x: f64,
        y: f64,
    },
    ClosePath,
}

impl Primitive {
    /// Returns the end point of the primitive, if it has one.
    pub fn end(&self) -> Option<(f64, f64)> {
        match *self {
              Primitive::MoveTo { x, y }
            | Primitive::LineTo { x, y }
            | Primitive::CurveTo { x, y, .. }
            | Primitive::QuadTo { x, y, .. } => Some((x, y)),

            Primitive::ClosePath => None,
        }
    }

    /// Applies an affine transform to all points of the primitive.
    pub fn transform(&self, ts: &Transform) -> Primitive {
        match *self {
            Primitive::MoveTo { x, y } => {
                let (x, y) = ts.apply(x, y);
                Primitive::MoveTo { x, y }
            }
            Primitive::LineTo { x, y } => {
                let (x, y) = ts.apply(x, y);
                Primitive::LineTo { x, y }
            }
            Primitive::CurveTo { x1, y1, x2, y2, x, y } => {
                let (x1, y1) = ts.apply(x1, y1);
                let (x2, y2) = ts.apply(x2, y2);
                let (x, y) = ts.apply(x, y);
                Primitive::CurveTo { x1, y1, x2, y2, x, y }
            }
            Primitive::QuadTo { x1, y1, x, y } => {
                let (x1, y1) = ts.apply(x1, y1);
                let (x, y) = ts.apply(x, y);
                Primitive::QuadTo { x1, y1, x, y }
            }
            Primitive::ClosePath => Primitive::ClosePath,
        }
    }

    /// Compares two primitives using fuzzy float compare algorithm.
    ///
    /// Use it instead of `==`.
    pub fn fuzzy_eq(&self, other: &Primitive) -> bool {
        use self::Primitive as P;

        match (*self, *other) {
            (P::MoveTo { x, y }, P::MoveTo { x: ox, y: oy }) |
            (P::LineTo { x, y }, P::LineTo { x: ox, y: oy }) => {
                x.fuzzy_eq(&ox) && y.fuzzy_eq(&oy)
            }
            (P::CurveTo { x1, y1, x2, y2, x, y },
                P::CurveTo { x1: ox1, y1: oy1, x2: ox2, y2: oy2, x: ox, y: oy }) => {
                   x.fuzzy_eq(&ox)   && y.fuzzy_eq(&oy)
                && x1.fuzzy_eq(&ox1) && y1.fuzzy_eq(&oy1)
                && x2.fuzzy_eq(&ox2) && y2.fuzzy_eq(&oy2)
            }
            (P::QuadTo { x1, y1, x, y },
                P::QuadTo { x1: ox1, y1: oy1, x: ox, y: oy }) => {
                   x.fuzzy_eq(&ox)   && y.fuzzy_eq(&oy)
                && x1.fuzzy_eq(&ox1) && y1.fuzzy_eq(&oy1)
            }
            (P::ClosePath, P::ClosePath) => true,
            _ => false,
        }
    }
}

/// Representation of interpreted path data.
#[derive(Clone, Default, PartialEq)]
pub struct PathData {
    /// Vector which contain all primitives.
    pub d: Vec<Primitive>,
}

impl PathData {
    /// Constructs a new, empty path.
    pub fn new() -> PathData {
        PathData { d: Vec::new() }
    }

    /// Returns the amount of primitives.
    pub fn len(&self) -> usize {
        self.d.len()
    }

    /// Returns `true` if the path has no primitives.
    pub fn is_empty(&self) -> bool {
        self.d.is_empty()
    }

    /// Appends a primitive.
    pub fn push(&mut self, p: Primitive) {
        self.d.push(p);
    }

    /// Returns an iterator over the primitives.
    pub fn iter(&self) -> ::std::slice::Iter<Primitive> {
        self.d.iter()
    }

    /// Returns a copy of the path with an affine transform applied
    /// to all points.
    pub fn transform(&self, ts: &Transform) -> PathData {
        PathData {
            d: self.d.iter().map(|p| p.transform(ts)).collect(),
        }
    }

    /// Compares two paths using fuzzy float compare algorithm.
    ///
    /// Use it instead of `==`.
    pub fn fuzzy_eq(&self, other: &PathData) -> bool {
        if self.d.len() != other.d.len() {
            return false;
        }

        self.d.iter().zip(other.d.iter()).all(|(a, b)| a.fuzzy_eq(b))
    }
}

impl fmt::Debug for PathData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Overload Display.
        write!(f, "{}", &self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use types::Transform;

    #[test]
    fn transform_1() {
        let ts = Transform::default().translate(10.0, 20.0);
        let p = Primitive::LineTo { x: 1.0, y: 2.0 }.transform(&ts);
        assert_eq!(p, Primitive::LineTo { x: 11.0, y: 22.0 });
    }

    #[test]
    fn fuzzy_eq_1() {
        let a = Primitive::MoveTo { x: 10.0, y: 10.1 + 10.2 };
        let b = Primitive::MoveTo { x: 10.0, y: 20.3 };
        assert!(a != b);
        assert!(a.fuzzy_eq(&b));
    }

    #[test]
    fn fuzzy_ne_1() {
        let a = Primitive::MoveTo { x: 10.0, y: 10.0 };
        let b = Primitive::LineTo { x: 10.0, y: 10.0 };
        assert!(!a.fuzzy_eq(&b));
    }
}
