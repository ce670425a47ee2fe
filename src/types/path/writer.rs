// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt;
use std::str;

use types::number::write_num;

use super::{PathData, Primitive};

// Primitives are already absolute and explicit, so the canonical text
// uses only the uppercase command letters and spaces.
fn write_primitive(p: &Primitive, buf: &mut Vec<u8>) {
    match *p {
        Primitive::MoveTo { x, y } => {
            buf.extend_from_slice(b"M ");
            write_coords(&[x, y], buf);
        }
        Primitive::LineTo { x, y } => {
            buf.extend_from_slice(b"L ");
            write_coords(&[x, y], buf);
        }
        Primitive::CurveTo { x1, y1, x2, y2, x, y } => {
            buf.extend_from_slice(b"C ");
            write_coords(&[x1, y1, x2, y2, x, y], buf);
        }
        Primitive::QuadTo { x1, y1, x, y } => {
            buf.extend_from_slice(b"Q ");
            write_coords(&[x1, y1, x, y], buf);
        }
        Primitive::ClosePath => {
            buf.push(b'Z');
        }
    }
}

fn write_coords(coords: &[f64], buf: &mut Vec<u8>) {
    for (i, num) in coords.iter().enumerate() {
        if i > 0 {
            buf.push(b' ');
        }

        write_num(*num, buf);
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = Vec::with_capacity(32);
        write_primitive(self, &mut buf);
        write!(f, "{}", str::from_utf8(&buf).unwrap())
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = Vec::with_capacity(256);
        for (i, p) in self.iter().enumerate() {
            if i > 0 {
                buf.push(b' ');
            }

            write_primitive(p, &mut buf);
        }

        write!(f, "{}", str::from_utf8(&buf).unwrap())
    }
}
