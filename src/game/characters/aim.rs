// Charge-and-aim reticle
//
// The stored angle is in "screen" degrees: a left-facing character keeps a
// mirrored angle (180 - theta), and the clamps below work on the mirrored
// value so each element's cone reads the same regardless of facing.

use glam::Vec2;

use crate::core::math::{mirror_angle, unit_from_degrees};

use super::stats::ArcanianStats;

/// Allowed aim range in degrees, for a right-facing character
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimCone {
    pub min_deg: f32,
    pub max_deg: f32,
}

impl AimCone {
    pub const fn new(min_deg: f32, max_deg: f32) -> Self {
        Self { min_deg, max_deg }
    }
}

/// Aim direction, charge power, and reticle bookkeeping
#[derive(Debug, Clone)]
pub struct Aimer {
    /// Screen-space reticle angle in degrees
    pub angle_deg: f32,
    /// Current charge power; zero while not firing
    pub power: f32,
    /// Reticle radius, grows while charging
    pub reticle_radius: f32,
    /// Whether the cone bound markers are on screen
    pub bounds_shown: bool,
}

impl Aimer {
    pub fn new(stats: &ArcanianStats) -> Self {
        Self {
            angle_deg: stats.aimer_angle,
            power: 0.0,
            reticle_radius: stats.reticle_radius,
            bounds_shown: false,
        }
    }

    /// Rotate from the right-stick vertical axis, clamped to the cone.
    /// Bound markers are shown only while the stick is deflected.
    pub fn update(&mut self, stick_y: f32, facing_left: bool, cone: AimCone, speed: f32) {
        self.bounds_shown = stick_y != 0.0;

        if facing_left {
            self.angle_deg -= stick_y * speed;
            if stick_y > 0.0 && mirror_angle(self.angle_deg) > cone.max_deg {
                self.angle_deg = mirror_angle(cone.max_deg);
            }
            if stick_y < 0.0 && mirror_angle(self.angle_deg) < cone.min_deg {
                self.angle_deg = mirror_angle(cone.min_deg);
            }
        } else {
            self.angle_deg += stick_y * speed;
            if stick_y > 0.0 && self.angle_deg > cone.max_deg {
                self.angle_deg = cone.max_deg;
            }
            if stick_y < 0.0 && self.angle_deg < cone.min_deg {
                self.angle_deg = cone.min_deg;
            }
        }
    }

    /// Mirror the aim when the character turns around
    pub fn flip(&mut self) {
        self.angle_deg = mirror_angle(self.angle_deg);
    }

    /// Cone-relative angle, identical for either facing
    pub fn cone_angle(&self, facing_left: bool) -> f32 {
        if facing_left {
            mirror_angle(self.angle_deg)
        } else {
            self.angle_deg
        }
    }

    /// Where the reticle sits: past the aim bar tip, pushed out with power
    pub fn reticle_center(&self, center: Vec2, stats: &ArcanianStats) -> Vec2 {
        let offset = stats.aimer_bar_width / 2.0 + 20.0 * (self.power / stats.max_power);
        center + unit_from_degrees(self.angle_deg) * offset
    }

    /// One charging tick's worth of reticle growth
    pub fn grow_reticle(&mut self) {
        self.reticle_radius += 0.1;
    }

    pub fn reset_reticle(&mut self, stats: &ArcanianStats) {
        self.reticle_radius = stats.reticle_radius;
    }
}
