// Copyright 2026 the Protractor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit testing against the four rendered stick segments.
//!
//! The overlay draws four line segments: the two arms, and two guides running
//! parallel to arm 1 at a fixed perpendicular offset. A pointer position "hits
//! the sticks" when it lies within [`HitParams::tolerance`] of any of the
//! four.
//!
//! Proximity is interior-span only: a point whose projection falls outside a
//! segment's endpoints is a miss even when it is geometrically close to the
//! segment's infinite extension. This matches the overlay's behavior of not
//! grabbing past the stick tips.

use kurbo::{Line, Point, Vec2};

use crate::Sticks;

/// Parameters for stick hit testing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitParams {
    /// Maximum perpendicular distance from a segment for a pointer position
    /// to count as "on" that segment.
    pub tolerance: f64,
    /// Perpendicular offset of each parallel guide from arm 1.
    pub parallel_offset: f64,
}

impl Default for HitParams {
    /// The stock overlay values: 5-unit tolerance, 10-unit guide offset.
    fn default() -> Self {
        Self {
            tolerance: 5.0,
            parallel_offset: 10.0,
        }
    }
}

/// Which rendered segment a hit landed on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StickPart {
    /// The segment from the center to the arm-1 end.
    Arm1,
    /// The segment from the center to the arm-2 end.
    Arm2,
    /// The guide offset from arm 1 against the perpendicular.
    LeftGuide,
    /// The guide offset from arm 1 along the perpendicular.
    RightGuide,
}

/// A successful stick hit.
///
/// [`Sticks::hit_test`] tests the segments in a fixed order and reports the
/// first one within tolerance, so `part` identifies *a* hit segment, not
/// necessarily the nearest one. Callers that only need the boolean predicate
/// use `hit_test(..).is_some()`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StickHit {
    /// The segment that was hit.
    pub part: StickPart,
    /// Perpendicular distance from the pointer to that segment.
    pub distance: f64,
}

/// Perpendicular distance from `pt` to the interior span of `seg`.
///
/// `None` for a zero-length segment (no line to project onto) and for points
/// whose projection parameter falls outside `[0, 1]`.
fn interior_distance(pt: Point, seg: Line) -> Option<f64> {
    let d = seg.p1 - seg.p0;
    let len2 = d.hypot2();
    if len2 == 0.0 {
        return None;
    }
    let t = (pt - seg.p0).dot(d) / len2;
    if !(0.0..=1.0).contains(&t) {
        return None;
    }
    let proj = seg.p0 + d * t;
    Some((pt - proj).hypot())
}

/// Whether `pt` lies within `tolerance` of the interior span of `seg`.
///
/// Zero-length segments never match, and neither do points projecting outside
/// the segment's endpoints (no clamping to the nearest endpoint).
#[must_use]
pub fn point_near_segment(pt: Point, seg: Line, tolerance: f64) -> bool {
    interior_distance(pt, seg).is_some_and(|dist| dist <= tolerance)
}

impl Sticks {
    /// The two guide segments parallel to arm 1, offset by ±`offset` along
    /// the unit normal of the arm-1 vector.
    ///
    /// Returns `None` when arm 1 has zero length: the normal is undefined
    /// there, and skipping the guides beats dividing by zero. The first line
    /// is the left guide (against the perpendicular `(-v.y, v.x)`), the
    /// second the right.
    #[must_use]
    pub fn parallel_guides(&self, offset: f64) -> Option<(Line, Line)> {
        let v = self.arm1 - self.center;
        let len = v.hypot();
        if len == 0.0 {
            return None;
        }
        let n = Vec2::new(-v.y, v.x) * (offset / len);
        Some((
            Line::new(self.center - n, self.arm1 - n),
            Line::new(self.center + n, self.arm1 + n),
        ))
    }

    /// Hit-test `pt` against the four rendered segments.
    ///
    /// Tests arm 1, arm 2, then the two parallel guides, short-circuiting on
    /// the first segment within [`HitParams::tolerance`]. When arm 1 is
    /// degenerate the guides are skipped (see [`Sticks::parallel_guides`]).
    #[must_use]
    pub fn hit_test(&self, pt: Point, params: &HitParams) -> Option<StickHit> {
        let arms = [
            (StickPart::Arm1, Line::new(self.center, self.arm1)),
            (StickPart::Arm2, Line::new(self.center, self.arm2)),
        ];
        for (part, seg) in arms {
            if let Some(distance) = interior_distance(pt, seg)
                && distance <= params.tolerance
            {
                return Some(StickHit { part, distance });
            }
        }

        let (left, right) = self.parallel_guides(params.parallel_offset)?;
        for (part, seg) in [(StickPart::LeftGuide, left), (StickPart::RightGuide, right)] {
            if let Some(distance) = interior_distance(pt, seg)
                && distance <= params.tolerance
            {
                return Some(StickHit { part, distance });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sticks() -> Sticks {
        Sticks {
            center: Point::new(200.0, 200.0),
            arm1: Point::new(350.0, 200.0),
            arm2: Point::new(200.0, 50.0),
        }
    }

    #[test]
    fn midpoint_is_on_segment_for_any_tolerance() {
        let seg = Line::new((0.0, 0.0), (10.0, 0.0));
        assert!(point_near_segment(Point::new(5.0, 0.0), seg, 0.0));
    }

    #[test]
    fn just_beyond_tolerance_misses() {
        let seg = Line::new((0.0, 0.0), (10.0, 0.0));
        assert!(point_near_segment(Point::new(5.0, 5.0), seg, 5.0));
        assert!(!point_near_segment(Point::new(5.0, 5.001), seg, 5.0));
    }

    #[test]
    fn projection_outside_span_misses() {
        let seg = Line::new((0.0, 0.0), (10.0, 0.0));
        // Close to the infinite line, but past the endpoint.
        assert!(!point_near_segment(Point::new(10.5, 0.0), seg, 5.0));
        assert!(!point_near_segment(Point::new(-0.5, 0.0), seg, 5.0));
    }

    #[test]
    fn zero_length_segment_never_matches() {
        let seg = Line::new((3.0, 4.0), (3.0, 4.0));
        assert!(!point_near_segment(Point::new(3.0, 4.0), seg, 5.0));
    }

    #[test]
    fn each_segment_is_hittable() {
        let s = sticks();
        let params = HitParams::default();

        let on_arm1 = Point::new(275.0, 200.0);
        assert_eq!(
            s.hit_test(on_arm1, &params).map(|h| h.part),
            Some(StickPart::Arm1)
        );

        let on_arm2 = Point::new(200.0, 125.0);
        assert_eq!(
            s.hit_test(on_arm2, &params).map(|h| h.part),
            Some(StickPart::Arm2)
        );

        // Arm 1 points along +x, so its guides sit at y = 200 ∓ 10. Query
        // points exactly on a guide but outside arm 1's own tolerance band.
        let on_left = Point::new(275.0, 190.0);
        assert_eq!(
            s.hit_test(on_left, &params).map(|h| h.part),
            Some(StickPart::LeftGuide)
        );

        let on_right = Point::new(275.0, 210.0);
        assert_eq!(
            s.hit_test(on_right, &params).map(|h| h.part),
            Some(StickPart::RightGuide)
        );
    }

    #[test]
    fn miss_beyond_tolerance_everywhere() {
        let s = sticks();
        // Out in the open quadrant, far from all four segments.
        assert!(s.hit_test(Point::new(300.0, 100.0), &HitParams::default()).is_none());
    }

    #[test]
    fn hit_reports_perpendicular_distance() {
        let s = sticks();
        let hit = s
            .hit_test(Point::new(275.0, 203.0), &HitParams::default())
            .expect("within tolerance of arm 1");
        assert_eq!(hit.part, StickPart::Arm1);
        assert!((hit.distance - 3.0).abs() < 1e-9, "got {}", hit.distance);
    }

    #[test]
    fn guides_follow_the_arm_direction() {
        // Arm 1 pointing up on screen: guides sit at x = center.x ± offset.
        let s = Sticks {
            center: Point::new(0.0, 0.0),
            arm1: Point::new(0.0, -100.0),
            arm2: Point::new(50.0, 0.0),
        };
        let (left, right) = s.parallel_guides(10.0).expect("arm 1 is not degenerate");
        assert!((left.p0.x + 10.0).abs() < 1e-9);
        assert!((right.p0.x - 10.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_arm1_skips_guides() {
        let s = Sticks {
            center: Point::new(100.0, 100.0),
            arm1: Point::new(100.0, 100.0),
            arm2: Point::new(100.0, 20.0),
        };
        assert!(s.parallel_guides(10.0).is_none());
        // Arm 2 still hit-tests normally.
        let hit = s
            .hit_test(Point::new(100.0, 60.0), &HitParams::default())
            .expect("arm 2 is live");
        assert_eq!(hit.part, StickPart::Arm2);
        // And a point that would only hit a guide is a clean miss.
        assert!(s.hit_test(Point::new(110.0, 60.0), &HitParams::default()).is_none());
    }
}
