use anyhow::{Context, Result};
use glam::Vec2;
use log::info;

mod core;
mod engine;
mod game;

use engine::input::{Button, PadSnapshot};
use engine::world::WorldContext;
use engine::Services;
use game::characters::{Element, Roster};

/// Headless demo: run one character through spawn, movement, a jump and a
/// charged shot, logging the state transitions. Pass an element name as the
/// first argument (fire, water, earth or wind).
fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let element: Element = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "fire".to_string())
        .parse()
        .context("failed to pick a character")?;

    info!("Starting Arcanian Core demo with {element}...");

    let world = WorldContext::default();
    let mut services = Services::logged();
    let mut roster = Roster::new();
    roster.spawn(element, Vec2::new(80.0, 60.0), 0, world.clone())?;

    let mut pad = PadSnapshot::new();
    let mut lives = 3;

    // Scripted input, one entry per tick window
    let script: &[(u32, fn(&mut PadSnapshot))] = &[
        // Pick the character and drop in
        (1, |p| p.press(Button::Confirm)),
        (1, |p| p.release(Button::Confirm)),
        // Fall to the ground
        (120, |_| {}),
        // Run right, then stop
        (40, |p| p.set_left_stick(1.0, 0.0)),
        (10, |p| p.set_left_stick(0.0, 0.0)),
        // Jump
        (1, |p| p.press(Button::Jump)),
        (30, |p| p.release(Button::Jump)),
        // Aim up and charge a primary shot
        (10, |p| p.set_right_stick(0.0, 1.0)),
        (1, |p| {
            p.set_right_stick(0.0, 0.0);
            p.press(Button::Primary)
        }),
        (25, |_| {}),
        (1, |p| p.release(Button::Primary)),
        // Let the recharge cycle run
        (200, |_| {}),
    ];

    let arc = roster
        .get_mut(0)
        .context("player slot 0 is empty")?;
    arc.enter_spawning();

    let mut tick = 0u32;
    for &(ticks, apply) in script {
        for _ in 0..ticks {
            pad.begin_frame();
            apply(&mut pad);

            let before = arc.state();
            arc.tick(&pad, &mut services, &mut lives);
            arc.integrate_travel();
            if arc.state() != before {
                info!(
                    "tick {tick}: {} -> {} at ({:.1}, {:.1})",
                    before.label(),
                    arc.state().label(),
                    arc.center.x,
                    arc.center.y
                );
            }

            for launch in arc.skills_mut().drain_launches() {
                info!(
                    "tick {tick}: launched {} (power {:.0}, angle {:.0} deg)",
                    launch.skill, launch.power, launch.angle_deg
                );
            }
            tick += 1;
        }
    }

    let vitals = arc.vitals();
    info!(
        "Demo over: {} ended {} with {} hp / {} shield / {} tp, {} lives left",
        arc.name(),
        arc.state().label(),
        vitals.health,
        vitals.shield,
        vitals.tp,
        lives
    );

    Ok(())
}
