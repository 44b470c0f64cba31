// Copyright 2026 the Protractor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The overlay session state machine.
//!
//! A [`Session`] tracks the three anchors in overlay-local coordinates plus
//! the presentation state (invert toggle, stick colors) and the active
//! pointer [`Grab`]. Pointer handlers return plain [`Update`] effects for the
//! shell to apply; nothing here blocks, renders, or reaches outside the
//! struct.
//!
//! Two kinds of grab exist, mirroring the two draggable things on screen:
//!
//! - **Handle grab** — the pointer went down on the movable arm-end handle;
//!   subsequent moves drag that anchor, re-clamped after every step.
//! - **Overlay grab** — the pointer went down on one of the four stick
//!   segments; subsequent moves translate the whole overlay window. The
//!   shell applies each returned translation, after which the pointer's
//!   local position is back at the grab origin, so per-event deltas compose
//!   into a smooth window drag.

use alloc::format;
use alloc::string::String;

use kurbo::{Point, Vec2};
use protractor_geom::{HitParams, LengthBounds, Sticks, clamp_length};
use rand::Rng;

use crate::color::StickColors;

/// Side length of the square handle widgets, in overlay units.
pub const HANDLE_SIZE: f64 = 31.0;

/// Radius of the knob drawn at a handle's center.
///
/// Sticks are shortened by this plus one so they stop at the knob edge.
#[must_use]
pub const fn knob_radius() -> f64 {
    HANDLE_SIZE / 4.0
}

/// Radius around an anchor that counts as "on the handle" for grabbing.
#[must_use]
pub const fn handle_grab_radius() -> f64 {
    HANDLE_SIZE / 2.0
}

/// The three named anchors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnchorId {
    /// The shared center.
    Center,
    /// End of arm 1.
    ArmEnd1,
    /// End of arm 2.
    ArmEnd2,
}

impl AnchorId {
    /// Whether the user can drag this anchor.
    ///
    /// Only arm end 1 is draggable in this version; the others remain
    /// settable programmatically through [`Session::set_anchor`].
    #[must_use]
    pub const fn is_movable(self) -> bool {
        matches!(self, Self::ArmEnd1)
    }
}

/// Cursor affordance for the current pointer position.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Cursor {
    /// Nothing interactive under the pointer.
    Arrow,
    /// Over a stick segment; pressing would start an overlay drag.
    OpenHand,
    /// Over the movable handle; pressing would start a handle drag.
    SizeAll,
}

/// The active pointer grab.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Grab {
    /// Dragging the whole overlay window.
    Overlay {
        /// Local pointer position at the press.
        origin: Point,
    },
    /// Dragging a single anchor.
    Handle {
        /// The grabbed anchor.
        id: AnchorId,
        /// Pointer offset from the anchor at the press, preserved while
        /// dragging so the anchor does not jump under the pointer.
        offset: Vec2,
    },
}

/// What the shell must do after an event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Update {
    /// Nothing changed.
    None,
    /// State changed; repaint the overlay and the angle label.
    Redraw,
    /// Translate the whole overlay window by this delta.
    TranslateOverlay(Vec2),
    /// Terminate the application (exit code 0).
    Exit,
}

/// Keys the overlay reacts to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Key {
    /// Terminates the application.
    Escape,
    /// Anything else; passed through untouched.
    Other,
}

/// Build-time interaction constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionConfig {
    /// Allowed arm length range.
    pub bounds: LengthBounds,
    /// Stick hit-test parameters (tolerance and guide offset).
    pub hit: HitParams,
    /// Arm length used for the startup layout.
    pub default_radius: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let bounds = LengthBounds::default();
        Self {
            default_radius: 150.0_f64.min(bounds.max),
            bounds,
            hit: HitParams::default(),
        }
    }
}

/// The protractor overlay's interaction state.
///
/// See the [crate docs](crate) for an end-to-end example.
#[derive(Clone, Debug)]
pub struct Session {
    center: Point,
    arm1: Point,
    arm2: Point,
    angle_invert: bool,
    colors: StickColors,
    config: SessionConfig,
    grab: Option<Grab>,
}

impl Session {
    /// Creates a session with default configuration.
    ///
    /// The startup layout places arm 1 at 0° (to the right of `center`) and
    /// arm 2 at 90° (straight up on screen), both at the default radius.
    /// Colors start randomized, invert starts off.
    pub fn new<R: Rng + ?Sized>(center: Point, rng: &mut R) -> Self {
        Self::with_config(center, SessionConfig::default(), rng)
    }

    /// Creates a session with explicit configuration.
    pub fn with_config<R: Rng + ?Sized>(
        center: Point,
        config: SessionConfig,
        rng: &mut R,
    ) -> Self {
        let r = config.default_radius;
        Self {
            center,
            arm1: center + Vec2::new(r, 0.0),
            arm2: center + Vec2::new(0.0, -r),
            angle_invert: false,
            colors: StickColors::random(rng),
            config,
            grab: None,
        }
    }

    /// The current anchor positions as a geometry-only view.
    #[must_use]
    pub fn sticks(&self) -> Sticks {
        Sticks {
            center: self.center,
            arm1: self.arm1,
            arm2: self.arm2,
        }
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The current stick colors.
    #[must_use]
    pub fn colors(&self) -> &StickColors {
        &self.colors
    }

    /// Whether the complementary angle is being reported.
    #[must_use]
    pub fn angle_invert(&self) -> bool {
        self.angle_invert
    }

    /// The active grab, if a drag is in progress.
    #[must_use]
    pub fn grab(&self) -> Option<Grab> {
        self.grab
    }

    /// The current angle in degrees, honoring the invert toggle.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.sticks().angle(self.angle_invert)
    }

    /// The angle label text, two decimals with a degree suffix.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{:.2}°", self.angle())
    }

    /// Moves an anchor programmatically.
    ///
    /// Both arm ends are re-clamped into the length bounds afterwards, so the
    /// arm-length invariant holds whichever anchor moved.
    pub fn set_anchor(&mut self, id: AnchorId, pos: Point) {
        match id {
            AnchorId::Center => self.center = pos,
            AnchorId::ArmEnd1 => self.arm1 = pos,
            AnchorId::ArmEnd2 => self.arm2 = pos,
        }
        self.arm1 = clamp_length(self.center, self.arm1, self.config.bounds);
        self.arm2 = clamp_length(self.center, self.arm2, self.config.bounds);
    }

    /// Handles a pointer press.
    ///
    /// On the movable handle this begins a handle grab; on any stick segment
    /// it begins an overlay grab. Returns `true` when the press was taken,
    /// `false` when it should pass through to whatever is underneath the
    /// overlay.
    pub fn on_pointer_down(&mut self, pos: Point) -> bool {
        if (pos - self.arm1).hypot() <= handle_grab_radius() {
            self.grab = Some(Grab::Handle {
                id: AnchorId::ArmEnd1,
                offset: pos - self.arm1,
            });
            return true;
        }
        if self.sticks().hit_test(pos, &self.config.hit).is_some() {
            self.grab = Some(Grab::Overlay { origin: pos });
            return true;
        }
        false
    }

    /// Handles a pointer move.
    ///
    /// While a grab is active this drags the grabbed entity; when idle it
    /// changes nothing (use [`Session::cursor_for`] for the hover
    /// affordance).
    pub fn on_pointer_move(&mut self, pos: Point) -> Update {
        match self.grab {
            Some(Grab::Overlay { origin }) => Update::TranslateOverlay(pos - origin),
            Some(Grab::Handle { id, offset }) => {
                self.set_anchor(id, pos - offset);
                Update::Redraw
            }
            None => Update::None,
        }
    }

    /// Handles a pointer release: ends any grab and re-evaluates the cursor
    /// for the release position.
    pub fn on_pointer_up(&mut self, pos: Point) -> Cursor {
        self.grab = None;
        self.cursor_for(pos)
    }

    /// The cursor affordance for an idle pointer at `pos`.
    #[must_use]
    pub fn cursor_for(&self, pos: Point) -> Cursor {
        if (pos - self.arm1).hypot() <= handle_grab_radius() {
            Cursor::SizeAll
        } else if self.sticks().hit_test(pos, &self.config.hit).is_some() {
            Cursor::OpenHand
        } else {
            Cursor::Arrow
        }
    }

    /// Handles a double-click anywhere on the overlay: toggles the invert
    /// reading and re-randomizes all four stick colors.
    pub fn on_double_click<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Update {
        self.angle_invert = !self.angle_invert;
        self.colors = StickColors::random(rng);
        Update::Redraw
    }

    /// Handles a key press. Escape terminates; everything else passes
    /// through.
    pub fn on_key(&mut self, key: Key) -> Update {
        match key {
            Key::Escape => Update::Exit,
            Key::Other => Update::None,
        }
    }
}
