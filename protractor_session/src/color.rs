// Copyright 2026 the Protractor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stick colors.
//!
//! Every double-click re-randomizes all four stick colors along with the
//! invert toggle. The controller only stores the values; picking them is the
//! caller's generator's job, so the crate stays `no_std` and tests stay
//! deterministic.

use rand::Rng;

/// An opaque 8-bit-per-channel RGB color.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// A uniformly random color.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.random(),
            g: rng.random(),
            b: rng.random(),
        }
    }
}

/// One color per rendered stick segment.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StickColors {
    /// Arm 1 (the draggable arm).
    pub arm1: Rgb8,
    /// Arm 2.
    pub arm2: Rgb8,
    /// The left parallel guide.
    pub left_guide: Rgb8,
    /// The right parallel guide.
    pub right_guide: Rgb8,
}

impl StickColors {
    /// Four independent random colors.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            arm1: Rgb8::random(rng),
            arm2: Rgb8::random(rng),
            left_guide: Rgb8::random(rng),
            right_guide: Rgb8::random(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn seeded_colors_are_deterministic() {
        let a = StickColors::random(&mut StdRng::seed_from_u64(42));
        let b = StickColors::random(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn successive_draws_differ() {
        let mut rng = StdRng::seed_from_u64(42);
        let a = StickColors::random(&mut rng);
        let b = StickColors::random(&mut rng);
        assert_ne!(a, b, "twelve identical channel draws in a row");
    }
}
