// Copyright 2026 the Protractor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction controller for the on-screen protractor overlay.
//!
//! [`Session`](session::Session) owns the mutable overlay state — the three
//! anchors, the invert toggle, the four stick colors, and the active pointer
//! grab — and delegates every computation to the stateless
//! [`protractor_geom`] engine. The shell (whatever windowing layer hosts the
//! overlay) feeds it pointer and key events and applies the returned
//! [`Update`](session::Update) effects; the controller itself never touches a
//! window or a painter.
//!
//! Event handling is an explicit state machine rather than a callback web:
//! `on_pointer_down` / `on_pointer_move` / `on_pointer_up` transition the
//! grab state and return plain values, so the whole interaction surface can
//! be driven from a test without any UI harness.
//!
//! ```
//! use kurbo::Point;
//! use protractor_session::{Session, Update};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let mut session = Session::new(Point::new(200.0, 200.0), &mut rng);
//!
//! // The startup layout puts the arms at 0° and 90°.
//! assert_eq!(session.label(), "90.00°");
//!
//! // Drag the movable arm end well past the maximum length…
//! assert!(session.on_pointer_down(Point::new(350.0, 200.0)));
//! let update = session.on_pointer_move(Point::new(600.0, 200.0));
//! assert_eq!(update, Update::Redraw);
//! // …and it stays clamped to 300 units.
//! assert_eq!(session.sticks().arm1, Point::new(500.0, 200.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc` (for the angle label).

#![no_std]

extern crate alloc;

pub mod color;
pub mod session;

pub use color::{Rgb8, StickColors};
pub use session::{AnchorId, Cursor, Grab, Key, Session, SessionConfig, Update};
