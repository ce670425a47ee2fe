// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Elliptical arc to cubic curves decomposition.
//!
//! The arc is converted from the endpoint parameterization to the
//! center one and split so a single cubic covers at most a quarter
//! turn. With the `4/3 * tan(sweep/4)` control distance the start and
//! end tangents are exact and the maximum radial error of a quarter
//! turn is about `2.7e-4` of the radius.

use std::f64;

/// One cubic segment: two control points and the end point.
pub type CubicSegment = [f64; 6];

fn vec_angle(ux: f64, uy: f64, vx: f64, vy: f64) -> f64 {
    let dot = ux * vx + uy * vy;
    let len = (ux * ux + uy * uy).sqrt() * (vx * vx + vy * vy).sqrt();

    let mut angle = (dot / len).max(-1.0).min(1.0).acos();
    if ux * vy - uy * vx < 0.0 {
        angle = -angle;
    }

    angle
}

/// Converts an arc from `(x1, y1)` to `(x2, y2)` into cubic segments.
///
/// The caller is expected to have filtered out the degenerate cases:
/// zero radii and coinciding end points.
pub fn to_cubics(
    x1: f64, y1: f64,
    mut rx: f64, mut ry: f64,
    x_axis_rotation: f64,
    large_arc: bool, sweep: bool,
    x2: f64, y2: f64,
) -> Vec<CubicSegment> {
    let phi = x_axis_rotation.to_radians();
    let cos_phi = phi.cos();
    let sin_phi = phi.sin();

    // Endpoint to center parameterization.
    let dx2 = (x1 - x2) / 2.0;
    let dy2 = (y1 - y2) / 2.0;
    let x1p = cos_phi * dx2 + sin_phi * dy2;
    let y1p = -sin_phi * dx2 + cos_phi * dy2;

    rx = rx.abs();
    ry = ry.abs();

    // Scale the radii up if the end points cannot be connected otherwise.
    let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
    if lambda > 1.0 {
        let s = lambda.sqrt();
        rx *= s;
        ry *= s;
    }

    let rx2 = rx * rx;
    let ry2 = ry * ry;

    let num = rx2 * ry2 - rx2 * y1p * y1p - ry2 * x1p * x1p;
    let den = rx2 * y1p * y1p + ry2 * x1p * x1p;
    let sign = if large_arc != sweep { 1.0 } else { -1.0 };
    let coef = sign * (num / den).max(0.0).sqrt();

    let cxp = coef * rx * y1p / ry;
    let cyp = -coef * ry * x1p / rx;

    let cx = cos_phi * cxp - sin_phi * cyp + (x1 + x2) / 2.0;
    let cy = sin_phi * cxp + cos_phi * cyp + (y1 + y2) / 2.0;

    let ux = (x1p - cxp) / rx;
    let uy = (y1p - cyp) / ry;
    let vx = (-x1p - cxp) / rx;
    let vy = (-y1p - cyp) / ry;

    let theta1 = vec_angle(1.0, 0.0, ux, uy);
    let mut sweep_angle = vec_angle(ux, uy, vx, vy);

    if !sweep && sweep_angle > 0.0 {
        sweep_angle -= 2.0 * f64::consts::PI;
    } else if sweep && sweep_angle < 0.0 {
        sweep_angle += 2.0 * f64::consts::PI;
    }

    // One cubic per quarter turn at most.
    let n_segs = (sweep_angle.abs() / (f64::consts::PI / 2.0)).ceil().max(1.0) as usize;
    let delta = sweep_angle / n_segs as f64;
    let t = 4.0 / 3.0 * (delta / 4.0).tan();

    // A point of the ellipse at the given eccentric angle
    // and its derivative by that angle.
    let ellipse_point = |theta: f64| {
        let cos_t = theta.cos();
        let sin_t = theta.sin();

        let px = cx + cos_phi * rx * cos_t - sin_phi * ry * sin_t;
        let py = cy + sin_phi * rx * cos_t + cos_phi * ry * sin_t;
        let dx = -cos_phi * rx * sin_t - sin_phi * ry * cos_t;
        let dy = -sin_phi * rx * sin_t + cos_phi * ry * cos_t;

        (px, py, dx, dy)
    };

    let mut list = Vec::with_capacity(n_segs);
    for i in 0..n_segs {
        let ta = theta1 + delta * i as f64;
        let tb = ta + delta;

        let (pax, pay, dax, day) = ellipse_point(ta);
        let (mut pbx, mut pby, dbx, dby) = ellipse_point(tb);

        if i + 1 == n_segs {
            // land exactly on the requested end point
            pbx = x2;
            pby = y2;
        }

        list.push([
            pax + t * dax, pay + t * day,
            pbx - t * dbx, pby - t * dby,
            pbx, pby,
        ]);
    }

    list
}
