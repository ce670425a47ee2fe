// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Representation of a 2D affine transform.
#[derive(Clone, Copy, PartialEq, Debug)]
#[allow(missing_docs)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Transform {
    /// Constructs a new transform.
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Transform {
        Transform { a, b, c, d, e, f }
    }

    /// Appends a translation to the current transform.
    pub fn translate(mut self, x: f64, y: f64) -> Transform {
        self.append(&Transform::new(1.0, 0.0, 0.0, 1.0, x, y));
        self
    }

    /// Appends a scale to the current transform.
    pub fn scale(mut self, sx: f64, sy: f64) -> Transform {
        self.append(&Transform::new(sx, 0.0, 0.0, sy, 0.0, 0.0));
        self
    }

    /// Appends a rotation, in degrees, to the current transform.
    pub fn rotate(mut self, angle: f64) -> Transform {
        let v = angle.to_radians();
        let a = v.cos();
        let b = v.sin();
        self.append(&Transform::new(a, b, -b, a, 0.0, 0.0));
        self
    }

    /// Appends `t` to the current transform.
    ///
    /// When the result is applied to a point, `t` acts first.
    pub fn append(&mut self, t: &Transform) {
        let a = self.a * t.a + self.c * t.b;
        let b = self.b * t.a + self.d * t.b;
        let c = self.a * t.c + self.c * t.d;
        let d = self.b * t.c + self.d * t.d;
        let e = self.a * t.e + self.c * t.f + self.e;
        let f = self.b * t.e + self.d * t.f + self.f;

        self.a = a;
        self.b = b;
        self.c = c;
        self.d = d;
        self.e = e;
        self.f = f;
    }

    /// Applies the transform to a point.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (self.a * x + self.c * y + self.e,
         self.b * x + self.d * y + self.f)
    }

    /// Returns `true` if the current transform is default, aka (1 0 0 1 0 0).
    pub fn is_default(&self) -> bool {
           self.a == 1.0
        && self.b == 0.0
        && self.c == 0.0
        && self.d == 1.0
        && self.e == 0.0
        && self.f == 0.0
    }
}

impl Default for Transform {
    fn default() -> Transform {
        Transform::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }
}
