// Copyright 2026 the Protractor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted end-to-end overlay session, no windowing backend required.
//!
//! This example drives the interaction controller the way a shell would:
//! pointer presses, drags, a double-click, hit-test queries for the cursor,
//! and a final escape. Stick rendering goes through the `LinePainter` seam
//! into `println!`.
//!
//! Run:
//! - `cargo run -p protractor_demos --example overlay_session`

use kurbo::{Line, Point};
use protractor_geom::draw_shortened_line;
use protractor_session::session::knob_radius;
use protractor_session::{Key, Session, Update};

/// A painter that narrates instead of drawing.
struct Narrator;

impl protractor_geom::LinePainter for Narrator {
    fn line(&mut self, line: Line) {
        println!(
            "  stick ({:.1}, {:.1}) -> ({:.1}, {:.1})",
            line.p0.x, line.p0.y, line.p1.x, line.p1.y
        );
    }
}

fn render(session: &Session) {
    let sticks = session.sticks();
    let trim = knob_radius() + 1.0;
    let mut painter = Narrator;

    println!("label: {}", session.label());
    draw_shortened_line(&mut painter, sticks.center, sticks.arm1, trim, trim);
    draw_shortened_line(&mut painter, sticks.center, sticks.arm2, trim, trim);
    if let Some((left, right)) = sticks.parallel_guides(session.config().hit.parallel_offset) {
        for guide in [left, right] {
            draw_shortened_line(&mut painter, guide.p0, guide.p1, trim, trim);
        }
    }
}

fn main() {
    let mut rng = rand::rng();
    let mut session = Session::new(Point::new(200.0, 200.0), &mut rng);

    println!("== startup layout ==");
    render(&session);

    println!("\n== drag arm 1 far past the maximum length ==");
    assert!(session.on_pointer_down(Point::new(350.0, 200.0)));
    session.on_pointer_move(Point::new(600.0, 480.0));
    session.on_pointer_up(Point::new(600.0, 480.0));
    render(&session);

    println!("\n== double-click: invert the reading, reroll the colors ==");
    session.on_double_click(&mut rng);
    println!("colors: {:?}", session.colors());
    render(&session);

    println!("\n== cursor affordances ==");
    let mid_arm1 = session.sticks().center.midpoint(session.sticks().arm1);
    for (label, pt) in [
        ("on the handle", session.sticks().arm1),
        ("mid-arm", mid_arm1),
        ("empty space", Point::new(400.0, 60.0)),
    ] {
        println!("  {label}: {:?}", session.cursor_for(pt));
    }

    println!("\n== drag the whole overlay by a stick ==");
    assert!(session.on_pointer_down(mid_arm1));
    if let Update::TranslateOverlay(delta) =
        session.on_pointer_move(mid_arm1 + kurbo::Vec2::new(12.0, -9.0))
    {
        println!("  shell translates window by ({:.1}, {:.1})", delta.x, delta.y);
    }
    session.on_pointer_up(mid_arm1);

    println!("\n== escape ==");
    if session.on_key(Key::Escape) == Update::Exit {
        println!("  shell exits with code 0");
    }
}
