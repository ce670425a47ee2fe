// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::str::FromStr;

use error::{ErrorKind, ParseError};
use stream::{Stream, StrSpan};

use super::arc;
use super::{PathData, Primitive};

/// List of all path data commands.
#[derive(Clone, Copy, PartialEq, Debug)]
enum Command {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CurveTo,
    SmoothCurveTo,
    Quadratic,
    SmoothQuadratic,
    EllipticalArc,
    ClosePath,
}

impl Command {
    /// Maps a command letter to the command and its coordinate mode.
    fn from_byte(b: u8) -> Option<(Command, bool)> {
        let cmd = match b.to_ascii_lowercase() {
            b'm' => Command::MoveTo,
            b'l' => Command::LineTo,
            b'h' => Command::HorizontalLineTo,
            b'v' => Command::VerticalLineTo,
            b'c' => Command::CurveTo,
            b's' => Command::SmoothCurveTo,
            b'q' => Command::Quadratic,
            b't' => Command::SmoothQuadratic,
            b'a' => Command::EllipticalArc,
            b'z' => Command::ClosePath,
            _ => return None,
        };

        Some((cmd, b.is_ascii_uppercase()))
    }

    fn arity(&self) -> usize {
        match *self {
            Command::MoveTo => 2,
            Command::LineTo => 2,
            Command::HorizontalLineTo => 1,
            Command::VerticalLineTo => 1,
            Command::CurveTo => 6,
            Command::SmoothCurveTo => 4,
            Command::Quadratic => 4,
            Command::SmoothQuadratic => 2,
            Command::EllipticalArc => 7,
            Command::ClosePath => 0,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum LastCurve {
    None,
    Cubic,
    Quad,
}

/// The state carried across path data commands.
///
/// Holds the current point, the control point of the previous curve
/// command and the start point of the current subpath. It exists only
/// for the duration of one interpreter call and is updated after every
/// emitted primitive.
#[derive(Clone, Copy, Debug)]
pub struct PriorContext {
    x: f64,
    y: f64,
    ctrl_x: f64,
    ctrl_y: f64,
    start_x: f64,
    start_y: f64,
    last: LastCurve,
    has_subpath: bool,
}

impl Default for PriorContext {
    fn default() -> PriorContext {
        PriorContext {
            x: 0.0,
            y: 0.0,
            ctrl_x: 0.0,
            ctrl_y: 0.0,
            start_x: 0.0,
            start_y: 0.0,
            last: LastCurve::None,
            has_subpath: false,
        }
    }
}

impl PriorContext {
    /// Returns the current point.
    pub fn point(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Returns the control point of the previous curve command.
    pub fn control(&self) -> (f64, f64) {
        (self.ctrl_x, self.ctrl_y)
    }

    /// Returns the start point of the current subpath.
    pub fn subpath_start(&self) -> (f64, f64) {
        (self.start_x, self.start_y)
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        self.ctrl_x = x;
        self.ctrl_y = y;
        self.start_x = x;
        self.start_y = y;
        self.last = LastCurve::None;
        self.has_subpath = true;
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        self.ctrl_x = x;
        self.ctrl_y = y;
        self.last = LastCurve::None;
    }

    fn curve_to(&mut self, x2: f64, y2: f64, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        self.ctrl_x = x2;
        self.ctrl_y = y2;
        self.last = LastCurve::Cubic;
    }

    fn quad_to(&mut self, x1: f64, y1: f64, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        self.ctrl_x = x1;
        self.ctrl_y = y1;
        self.last = LastCurve::Quad;
    }

    fn close(&mut self) {
        self.x = self.start_x;
        self.y = self.start_y;
        self.ctrl_x = self.x;
        self.ctrl_y = self.y;
        self.last = LastCurve::None;
    }

    /// The first control point of a smooth cubic curve: the previous
    /// control point mirrored around the current point, or the current
    /// point itself when the previous command was not a cubic curve.
    fn cubic_reflection(&self) -> (f64, f64) {
        if self.last == LastCurve::Cubic {
            (2.0 * self.x - self.ctrl_x, 2.0 * self.y - self.ctrl_y)
        } else {
            (self.x, self.y)
        }
    }

    /// Same as `cubic_reflection`, but against a previous quadratic curve.
    fn quad_reflection(&self) -> (f64, f64) {
        if self.last == LastCurve::Quad {
            (2.0 * self.x - self.ctrl_x, 2.0 * self.y - self.ctrl_y)
        } else {
            (self.x, self.y)
        }
    }
}

/// Interprets a path data string into a list of primitives.
///
/// An empty (or whitespace only) string is a valid, empty path.
/// On failure the whole path is discarded and the error points at the
/// offending byte.
pub fn parse_path(text: &str) -> Result<PathData, ParseError> {
    parse_path_span(StrSpan::from_str(text))
}

impl FromStr for PathData {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<PathData, ParseError> {
        parse_path(text)
    }
}

pub(crate) fn parse_path_span(span: StrSpan) -> Result<PathData, ParseError> {
    let mut s = Stream::from_span(span);
    let mut ctx = PriorContext::default();
    let mut path = PathData::new();

    s.skip_spaces();
    while !s.at_end() {
        let cmd_pos = s.pos();
        let b = s.curr_byte()?;

        let (mut cmd, absolute) = match Command::from_byte(b) {
            Some(ca) => ca,
            None => return Err(ParseError::new(ErrorKind::UnknownCommand, cmd_pos)),
        };
        s.advance(1);

        if cmd == Command::ClosePath {
            if !ctx.has_subpath {
                return Err(ParseError::new(ErrorKind::CloseWithoutSubpath, cmd_pos));
            }

            path.push(Primitive::ClosePath);
            ctx.close();
            s.skip_spaces();
            continue;
        }

        // One mandatory operand group, then implicit repetitions for
        // as long as the next token still looks like a number.
        let mut first = true;
        loop {
            s.skip_list_separator();

            if !s.is_number_start() {
                if first {
                    // a command with no operands at all
                    return Err(ParseError::new(ErrorKind::InvalidOperandCount, s.pos()));
                }

                break;
            }

            let mut ops = [0.0; 7];
            for i in 0..cmd.arity() {
                if i > 0 {
                    s.skip_list_separator();
                }

                if !s.is_number_start() {
                    // the group was cut short
                    return Err(ParseError::new(ErrorKind::InvalidOperandCount, s.pos()));
                }

                let num_pos = s.pos();
                let n = s.parse_number()?;

                // the arc flags must be exactly 0 or 1
                if cmd == Command::EllipticalArc && (i == 3 || i == 4)
                    && !(n == 0.0 || n == 1.0)
                {
                    return Err(ParseError::new(ErrorKind::MalformedNumber, num_pos));
                }

                ops[i] = n;
            }

            apply_group(cmd, absolute, &ops, &mut ctx, &mut path);

            // extra coordinate pairs after a move continue as lines
            if cmd == Command::MoveTo {
                cmd = Command::LineTo;
            }

            first = false;
        }
    }

    Ok(path)
}

fn apply_group(
    cmd: Command,
    absolute: bool,
    ops: &[f64; 7],
    ctx: &mut PriorContext,
    path: &mut PathData,
) {
    // offsets for resolving relative coordinates
    let (ox, oy) = if absolute { (0.0, 0.0) } else { (ctx.x, ctx.y) };

    match cmd {
        Command::MoveTo => {
            let x = ops[0] + ox;
            let y = ops[1] + oy;
            path.push(Primitive::MoveTo { x, y });
            ctx.move_to(x, y);
        }
        Command::LineTo => {
            let x = ops[0] + ox;
            let y = ops[1] + oy;
            path.push(Primitive::LineTo { x, y });
            ctx.line_to(x, y);
        }
        Command::HorizontalLineTo => {
            let x = ops[0] + ox;
            let y = ctx.y;
            path.push(Primitive::LineTo { x, y });
            ctx.line_to(x, y);
        }
        Command::VerticalLineTo => {
            let x = ctx.x;
            let y = ops[0] + oy;
            path.push(Primitive::LineTo { x, y });
            ctx.line_to(x, y);
        }
        Command::CurveTo => {
            let x1 = ops[0] + ox;
            let y1 = ops[1] + oy;
            let x2 = ops[2] + ox;
            let y2 = ops[3] + oy;
            let x = ops[4] + ox;
            let y = ops[5] + oy;
            path.push(Primitive::CurveTo { x1, y1, x2, y2, x, y });
            ctx.curve_to(x2, y2, x, y);
        }
        Command::SmoothCurveTo => {
            let (x1, y1) = ctx.cubic_reflection();
            let x2 = ops[0] + ox;
            let y2 = ops[1] + oy;
            let x = ops[2] + ox;
            let y = ops[3] + oy;
            path.push(Primitive::CurveTo { x1, y1, x2, y2, x, y });
            ctx.curve_to(x2, y2, x, y);
        }
        Command::Quadratic => {
            let x1 = ops[0] + ox;
            let y1 = ops[1] + oy;
            let x = ops[2] + ox;
            let y = ops[3] + oy;
            path.push(Primitive::QuadTo { x1, y1, x, y });
            ctx.quad_to(x1, y1, x, y);
        }
        Command::SmoothQuadratic => {
            let (x1, y1) = ctx.quad_reflection();
            let x = ops[0] + ox;
            let y = ops[1] + oy;
            path.push(Primitive::QuadTo { x1, y1, x, y });
            ctx.quad_to(x1, y1, x, y);
        }
        Command::EllipticalArc => {
            let rx = ops[0];
            let ry = ops[1];
            let x = ops[5] + ox;
            let y = ops[6] + oy;

            if rx == 0.0 || ry == 0.0 {
                // a zero radius degenerates the arc to a line
                path.push(Primitive::LineTo { x, y });
                ctx.line_to(x, y);
            } else if x == ctx.x && y == ctx.y {
                // coinciding end points draw nothing
            } else {
                let list = arc::to_cubics(ctx.x, ctx.y, rx, ry, ops[2],
                                          ops[3] != 0.0, ops[4] != 0.0, x, y);
                for c in list {
                    path.push(Primitive::CurveTo {
                        x1: c[0], y1: c[1],
                        x2: c[2], y2: c[3],
                        x: c[4], y: c[5],
                    });
                }

                ctx.line_to(x, y);
            }
        }
        Command::ClosePath => unreachable!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_path {
        ($name:ident, $text:expr, $( $p:expr ),*) => (
            #[test]
            fn $name() {
                let path = parse_path($text).unwrap();
                let expected = vec![$( $p ),*];
                assert_eq!(path.d, expected);
            }
        )
    }

    macro_rules! test_path_err {
        ($name:ident, $text:expr, $kind:expr, $pos:expr) => (
            #[test]
            fn $name() {
                let e = parse_path($text).unwrap_err();
                assert_eq!(e.kind(), $kind);
                assert_eq!(e.pos(), $pos);
            }
        )
    }

    test_path!(parse_empty_1, "", );
    test_path!(parse_empty_2, " \t\n ", );

    test_path!(parse_move_1, "M 10 20",
        Primitive::MoveTo { x: 10.0, y: 20.0 });

    test_path!(parse_line_1, "M 10 20 L 30 40",
        Primitive::MoveTo { x: 10.0, y: 20.0 },
        Primitive::LineTo { x: 30.0, y: 40.0 });

    test_path!(parse_repeat_1, "L 10 10 20 20 30 30",
        Primitive::LineTo { x: 10.0, y: 10.0 },
        Primitive::LineTo { x: 20.0, y: 20.0 },
        Primitive::LineTo { x: 30.0, y: 30.0 });

    // extra pairs after a move continue as lines
    test_path!(parse_repeat_2, "m 10 20 20 20",
        Primitive::MoveTo { x: 10.0, y: 20.0 },
        Primitive::LineTo { x: 30.0, y: 40.0 });

    test_path!(parse_relative_1, "M 5 5 l 5 5",
        Primitive::MoveTo { x: 5.0, y: 5.0 },
        Primitive::LineTo { x: 10.0, y: 10.0 });

    test_path!(parse_hline_vline_1, "M 10 20 H 30 v 5",
        Primitive::MoveTo { x: 10.0, y: 20.0 },
        Primitive::LineTo { x: 30.0, y: 20.0 },
        Primitive::LineTo { x: 30.0, y: 25.0 });

    test_path!(parse_curve_1, "M 10 20 c 10 10 10 10 10 10",
        Primitive::MoveTo { x: 10.0, y: 20.0 },
        Primitive::CurveTo { x1: 20.0, y1: 30.0, x2: 20.0, y2: 30.0, x: 20.0, y: 30.0 });

    // the first control point of a smooth curve is the previous
    // control point mirrored around the current point
    test_path!(parse_smooth_1, "M 10 10 C 20 20 25 30 30 30 S 50 50 60 60",
        Primitive::MoveTo { x: 10.0, y: 10.0 },
        Primitive::CurveTo { x1: 20.0, y1: 20.0, x2: 25.0, y2: 30.0, x: 30.0, y: 30.0 },
        Primitive::CurveTo { x1: 35.0, y1: 30.0, x2: 50.0, y2: 50.0, x: 60.0, y: 60.0 });

    // after a non-curve command the mirrored control point is the
    // current point itself
    test_path!(parse_smooth_2, "M 10 10 S 50 50 60 60",
        Primitive::MoveTo { x: 10.0, y: 10.0 },
        Primitive::CurveTo { x1: 10.0, y1: 10.0, x2: 50.0, y2: 50.0, x: 60.0, y: 60.0 });

    test_path!(parse_quad_1, "M 0 0 Q 10 20 20 0 T 40 0",
        Primitive::MoveTo { x: 0.0, y: 0.0 },
        Primitive::QuadTo { x1: 10.0, y1: 20.0, x: 20.0, y: 0.0 },
        Primitive::QuadTo { x1: 30.0, y1: -20.0, x: 40.0, y: 0.0 });

    // a smooth quadratic does not mirror a cubic control point
    test_path!(parse_quad_2, "M 0 0 C 0 0 10 20 20 0 T 40 0",
        Primitive::MoveTo { x: 0.0, y: 0.0 },
        Primitive::CurveTo { x1: 0.0, y1: 0.0, x2: 10.0, y2: 20.0, x: 20.0, y: 0.0 },
        Primitive::QuadTo { x1: 20.0, y1: 0.0, x: 40.0, y: 0.0 });

    test_path!(parse_close_1, "M 10 10 L 20 20 Z",
        Primitive::MoveTo { x: 10.0, y: 10.0 },
        Primitive::LineTo { x: 20.0, y: 20.0 },
        Primitive::ClosePath);

    // consecutive moves each start a new subpath
    test_path!(parse_subpath_1, "M 10 10 M 20 20 L 30 30",
        Primitive::MoveTo { x: 10.0, y: 10.0 },
        Primitive::MoveTo { x: 20.0, y: 20.0 },
        Primitive::LineTo { x: 30.0, y: 30.0 });

    // a close resets the current point to the subpath start
    test_path!(parse_subpath_2, "M 10 10 l 10 0 z l 5 5",
        Primitive::MoveTo { x: 10.0, y: 10.0 },
        Primitive::LineTo { x: 20.0, y: 10.0 },
        Primitive::ClosePath,
        Primitive::LineTo { x: 15.0, y: 15.0 });

    test_path!(parse_zero_arc_1, "M 10 10 A 0 5 0 0 1 30 30",
        Primitive::MoveTo { x: 10.0, y: 10.0 },
        Primitive::LineTo { x: 30.0, y: 30.0 });

    test_path!(parse_degenerate_arc_1, "M 10 10 A 5 5 0 0 1 10 10",
        Primitive::MoveTo { x: 10.0, y: 10.0 });

    #[test]
    fn parse_arc_1() {
        let path = parse_path("M 0 0 A 50 50 0 0 1 100 0").unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.d[2].end(), Some((100.0, 0.0)));

        for p in path.iter().skip(1) {
            match *p {
                Primitive::CurveTo { .. } => {}
                _ => panic!("expected only curves, got {:?}", p),
            }
        }
    }

    #[test]
    fn parse_comma_separators_1() {
        let path = parse_path("M 10,20 L 30 , 40").unwrap();
        assert_eq!(path.d, vec![
            Primitive::MoveTo { x: 10.0, y: 20.0 },
            Primitive::LineTo { x: 30.0, y: 40.0 },
        ]);
    }

    #[test]
    fn parse_compact_1() {
        // no separators at all, as produced by asset pipelines
        let path = parse_path("M10 20l-5.5.5z").unwrap();
        assert_eq!(path.d, vec![
            Primitive::MoveTo { x: 10.0, y: 20.0 },
            Primitive::LineTo { x: 4.5, y: 20.5 },
            Primitive::ClosePath,
        ]);
    }

    test_path_err!(parse_err_1, "X 10 10", ErrorKind::UnknownCommand, 0);
    test_path_err!(parse_err_2, "M 10 10 e 5", ErrorKind::UnknownCommand, 8);
    test_path_err!(parse_err_3, "Z", ErrorKind::CloseWithoutSubpath, 0);
    test_path_err!(parse_err_4, "L 10 10 Z", ErrorKind::CloseWithoutSubpath, 8);
    test_path_err!(parse_err_5, "M 10", ErrorKind::InvalidOperandCount, 4);
    test_path_err!(parse_err_6, "M 10 10 L 10 10 5", ErrorKind::InvalidOperandCount, 17);
    test_path_err!(parse_err_7, "L", ErrorKind::InvalidOperandCount, 1);
    test_path_err!(parse_err_8, "M 10 2e", ErrorKind::MalformedNumber, 5);
    test_path_err!(parse_err_9, "M 0 0 A 5 5 0 2 1 10 10", ErrorKind::MalformedNumber, 14);

    #[test]
    fn no_partial_output_1() {
        // a failed parse discards everything
        assert!(parse_path("M 10 10 L 20 20 L 30").is_err());
    }
}
