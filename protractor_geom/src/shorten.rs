// Copyright 2026 the Protractor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shortened-line construction for stick rendering.
//!
//! The overlay trims every stick by each handle's knob radius so the lines do
//! not overdraw the handle knobs. The geometry lives in [`shortened_line`];
//! [`draw_shortened_line`] feeds the result to a [`LinePainter`], the one
//! seam the engine has toward a rendering backend.

use kurbo::{Line, Point};

/// Minimal rendering seam: something that can draw a line segment.
///
/// Backends implement this over their painter/context type; tests implement
/// it over a `Vec<Line>`.
pub trait LinePainter {
    /// Draw a single line segment.
    fn line(&mut self, line: Line);
}

/// The segment from `p0` to `p1` with `trim0` cut off the `p0` end and
/// `trim1` off the `p1` end.
///
/// Negative trims are treated as zero. Returns `None` when the segment has
/// zero length or the trims consume it entirely; there is nothing left to
/// draw in either case.
#[must_use]
pub fn shortened_line(p0: Point, p1: Point, trim0: f64, trim1: f64) -> Option<Line> {
    let d = p1 - p0;
    let len = d.hypot();
    if len == 0.0 || trim0.max(0.0) + trim1.max(0.0) >= len {
        return None;
    }
    let t0 = (trim0 / len).clamp(0.0, 1.0);
    let t1 = 1.0 - (trim1 / len).clamp(0.0, 1.0);
    Some(Line::new(p0 + d * t0, p0 + d * t1))
}

/// Draw the shortened segment on `painter`, or nothing when the trims leave
/// nothing to draw.
pub fn draw_shortened_line<P: LinePainter>(
    painter: &mut P,
    p0: Point,
    p1: Point,
    trim0: f64,
    trim1: f64,
) {
    if let Some(line) = shortened_line(p0, p1, trim0, trim1) {
        painter.line(line);
    }
}
