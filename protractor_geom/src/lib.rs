// Copyright 2026 the Protractor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stateless geometry for the on-screen protractor.
//!
//! This crate holds the pure computations behind the protractor overlay: the
//! angle between the two arms, arm-length clamping, and hit testing against
//! the rendered sticks. It is intentionally decoupled from any windowing or
//! painting backend; the interaction layer (`protractor_session`) owns the
//! mutable state and calls into these functions after every anchor move.
//!
//! Positions are expressed in screen coordinates (y grows downward), which is
//! why [`angle_between`] negates y before `atan2`: the reported angle then has
//! the conventional mathematical sense, counter-clockwise from arm 1 to arm 2.
//!
//! # Typical usage
//!
//! ```
//! use kurbo::Point;
//! use protractor_geom::{LengthBounds, Sticks, clamp_length};
//!
//! // The original startup layout: arm 1 at 0°, arm 2 at 90°.
//! let sticks = Sticks {
//!     center: Point::new(200.0, 200.0),
//!     arm1: Point::new(350.0, 200.0),
//!     arm2: Point::new(200.0, 50.0),
//! };
//! let angle = sticks.angle(false);
//! assert!((angle - 90.0).abs() < 1e-9);
//!
//! // Dragging an arm end never leaves the configured length range.
//! let bounds = LengthBounds::default();
//! let dragged = Point::new(600.0, 200.0); // 400 units from center
//! let clamped = clamp_length(sticks.center, dragged, bounds);
//! assert_eq!(clamped, Point::new(500.0, 200.0)); // back at 300 units
//! ```
//!
//! # Degenerate inputs
//!
//! A zero-length arm vector makes the angle and the guide normal undefined.
//! Rather than propagate NaN into a paint pass, every operation here has a
//! documented fallback: [`angle_between`] returns `0.0`, [`clamp_length`]
//! places a center-coincident point at the minimum length along `+x`, and
//! [`Sticks::parallel_guides`] returns `None` (hit testing then skips the
//! guides).
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point
//!   math.

#![no_std]

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

pub mod hit;
pub mod shorten;

pub use hit::{HitParams, StickHit, StickPart, point_near_segment};
pub use shorten::{LinePainter, draw_shortened_line, shortened_line};

/// Inclusive range of allowed arm lengths.
///
/// Arm ends are re-clamped into this range after every move, which also keeps
/// the arm vectors away from zero length (assuming `min > 0`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LengthBounds {
    /// Minimum distance from the center to an arm end.
    pub min: f64,
    /// Maximum distance from the center to an arm end.
    pub max: f64,
}

impl LengthBounds {
    /// Creates bounds from `min` and `max`.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        debug_assert!(
            min > 0.0 && min <= max,
            "LengthBounds requires 0 < min <= max; got {min} and {max}"
        );
        Self { min, max }
    }
}

impl Default for LengthBounds {
    /// The stock stick lengths: 50 to 300 units.
    fn default() -> Self {
        Self {
            min: 50.0,
            max: 300.0,
        }
    }
}

/// Positions of the three anchors: the shared center and the two arm ends.
///
/// This is the geometric view the engine computes over. It carries no colors,
/// no drag state, and no identity beyond the point values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sticks {
    /// The shared center anchor.
    pub center: Point,
    /// End of arm 1 (the user-draggable arm, and the arm the parallel guides
    /// follow).
    pub arm1: Point,
    /// End of arm 2.
    pub arm2: Point,
}

impl Sticks {
    /// The angle from arm 1 to arm 2, honoring `invert`.
    ///
    /// See [`angle_between`].
    #[must_use]
    pub fn angle(&self, invert: bool) -> f64 {
        angle_between(self.center, self.arm1, self.arm2, invert)
    }

    /// Both arm ends re-clamped into `bounds`.
    ///
    /// The center is unchanged; arm ends outside the range land at exactly the
    /// violated bound along their current direction.
    #[must_use]
    pub fn clamp_arms(&self, bounds: LengthBounds) -> Self {
        Self {
            center: self.center,
            arm1: clamp_length(self.center, self.arm1, bounds),
            arm2: clamp_length(self.center, self.arm2, bounds),
        }
    }
}

/// The angle at `center` from the arm ending at `arm1` to the arm ending at
/// `arm2`, in degrees in `[0, 360)`.
///
/// Inputs are screen coordinates (y grows downward); y is negated before
/// `atan2` so the result grows counter-clockwise as seen on screen. With
/// `invert` the complementary angle `360 − a` is reported instead, with an
/// exact 360 wrapped back to `0.0` to keep the half-open range.
///
/// Returns `0.0` when either arm vector has zero length; the angle is
/// undefined there and the fallback keeps NaN out of the label.
#[must_use]
pub fn angle_between(center: Point, arm1: Point, arm2: Point, invert: bool) -> f64 {
    let v1 = arm1 - center;
    let v2 = arm2 - center;
    if v1.hypot2() == 0.0 || v2.hypot2() == 0.0 {
        return 0.0;
    }

    let raw = (-v2.y).atan2(v2.x) - (-v1.y).atan2(v1.x);
    let mut deg = raw.to_degrees();
    if deg < 0.0 {
        deg += 360.0;
        // A raw angle of -ε can round to exactly 360 here.
        if deg == 360.0 {
            deg = 0.0;
        }
    }
    if invert {
        deg = 360.0 - deg;
        // The direct angle is half-open, so inversion can land exactly on 360.
        if deg == 360.0 {
            deg = 0.0;
        }
    }
    deg
}

/// `point` re-clamped so its distance from `center` lies in `bounds`.
///
/// Points already in range are returned unchanged. Out-of-range points are
/// scaled along their current direction to land at exactly the violated
/// bound. A point coincident with the center has no direction to scale along;
/// it is placed at `bounds.min` along the `+x` axis instead of dividing by
/// zero.
#[must_use]
pub fn clamp_length(center: Point, point: Point, bounds: LengthBounds) -> Point {
    let v = point - center;
    let len = v.hypot();
    if len == 0.0 {
        return center + Vec2::new(bounds.min, 0.0);
    }
    if len > bounds.max {
        center + v * (bounds.max / len)
    } else if len < bounds.min {
        center + v * (bounds.min / len)
    } else {
        point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "expected {b}, got {a}");
    }

    #[test]
    fn startup_layout_is_ninety_degrees() {
        // center=(200,200), arm1 at 0°, arm2 at 90° (up on screen).
        let c = Point::new(200.0, 200.0);
        let a1 = Point::new(350.0, 200.0);
        let a2 = Point::new(200.0, 50.0);
        assert_close(angle_between(c, a1, a2, false), 90.0);
        assert_close(angle_between(c, a1, a2, true), 270.0);
    }

    #[test]
    fn angle_is_always_in_range() {
        let c = Point::new(100.0, 100.0);
        for i in 0..24 {
            let theta = f64::from(i) * core::f64::consts::PI / 12.0;
            let a1 = c + Vec2::new(theta.cos(), theta.sin()) * 120.0;
            let a2 = Point::new(40.0, 160.0);
            for invert in [false, true] {
                let deg = angle_between(c, a1, a2, invert);
                assert!((0.0..360.0).contains(&deg), "out of range: {deg}");
            }
        }
    }

    #[test]
    fn inversion_is_complementary() {
        let c = Point::new(0.0, 0.0);
        let a1 = Point::new(10.0, -3.0);
        let a2 = Point::new(-4.0, 7.0);
        let direct = angle_between(c, a1, a2, false);
        let inverted = angle_between(c, a1, a2, true);
        assert_close(inverted, (360.0 - direct) % 360.0);
    }

    #[test]
    fn inverted_zero_angle_wraps_to_zero() {
        // Collinear arms give a direct angle of exactly 0; inversion must not
        // report 360.
        let c = Point::new(0.0, 0.0);
        let a1 = Point::new(10.0, 0.0);
        let a2 = Point::new(20.0, 0.0);
        assert_close(angle_between(c, a1, a2, false), 0.0);
        assert_close(angle_between(c, a1, a2, true), 0.0);
    }

    #[test]
    fn swapping_arms_negates_modulo_360() {
        let c = Point::new(5.0, 5.0);
        let a1 = Point::new(17.0, 2.0);
        let a2 = Point::new(-3.0, 11.0);
        let ab = angle_between(c, a1, a2, false);
        let ba = angle_between(c, a2, a1, false);
        assert_close((ab + ba) % 360.0, 0.0);
    }

    #[test]
    fn degenerate_arm_reports_zero() {
        let c = Point::new(1.0, 2.0);
        let a = Point::new(9.0, 9.0);
        assert_close(angle_between(c, c, a, false), 0.0);
        assert_close(angle_between(c, a, c, false), 0.0);
        assert_close(angle_between(c, c, c, true), 0.0);
    }

    #[test]
    fn clamp_leaves_in_range_points_alone() {
        let c = Point::new(0.0, 0.0);
        let p = Point::new(60.0, 80.0); // length 100
        assert_eq!(clamp_length(c, p, LengthBounds::default()), p);
    }

    #[test]
    fn clamp_pulls_long_arms_to_max() {
        let c = Point::new(200.0, 200.0);
        let p = Point::new(200.0 + 400.0, 200.0);
        let clamped = clamp_length(c, p, LengthBounds::default());
        assert_close((clamped - c).hypot(), 300.0);
        // Same direction.
        assert_close(clamped.y, 200.0);
        assert!(clamped.x > 200.0, "direction flipped");
    }

    #[test]
    fn clamp_pushes_short_arms_to_min() {
        let c = Point::new(200.0, 200.0);
        let p = Point::new(200.0, 200.0 - 10.0);
        let clamped = clamp_length(c, p, LengthBounds::default());
        assert_close((clamped - c).hypot(), 50.0);
        assert_close(clamped.x, 200.0);
        assert!(clamped.y < 200.0, "direction flipped");
    }

    #[test]
    fn clamp_of_coincident_point_uses_plus_x_fallback() {
        let c = Point::new(7.0, -3.0);
        let clamped = clamp_length(c, c, LengthBounds::default());
        assert_eq!(clamped, Point::new(57.0, -3.0));
    }

    #[test]
    fn clamp_arms_clamps_both_ends() {
        let sticks = Sticks {
            center: Point::new(0.0, 0.0),
            arm1: Point::new(1000.0, 0.0),
            arm2: Point::new(0.0, 5.0),
        };
        let clamped = sticks.clamp_arms(LengthBounds::default());
        assert_close((clamped.arm1 - clamped.center).hypot(), 300.0);
        assert_close((clamped.arm2 - clamped.center).hypot(), 50.0);
        assert_eq!(clamped.center, sticks.center);
    }
}
