// World bounds, gravity integration, and ground-contact queries
//
// Injected into each character at construction instead of living in globals,
// so tests can pick their own bounds and tick rate.

use glam::Vec2;

/// A solid rectangle characters can stand on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub center: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Platform {
    pub fn new(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            center,
            width,
            height,
        }
    }
}

/// Immutable per-match simulation parameters
#[derive(Debug, Clone, PartialEq)]
pub struct WorldContext {
    pub world_min: Vec2,
    pub world_max: Vec2,
    /// Fixed simulation ticks per real-time second
    pub ticks_per_second: u32,
    /// Downward velocity gained per tick
    pub gravity_step: f32,
    /// Largest downward speed gravity integration will produce
    pub terminal_velocity: f32,
    /// Tolerance for the ground-contact query
    pub contact_epsilon: f32,
}

impl Default for WorldContext {
    fn default() -> Self {
        Self {
            world_min: Vec2::ZERO,
            world_max: Vec2::new(160.0, 90.0),
            ticks_per_second: 40,
            gravity_step: 0.02,
            terminal_velocity: 2.0,
            contact_epsilon: 0.1,
        }
    }
}

impl WorldContext {
    /// One step of vertical gravity integration
    pub fn next_velocity_y(&self, velocity_y: f32) -> f32 {
        (velocity_y - self.gravity_step).max(-self.terminal_velocity)
    }

    /// Convert a seconds-based constant to a tick count
    pub fn seconds_to_ticks(&self, seconds: u32) -> u32 {
        seconds * self.ticks_per_second
    }

    /// True when a circle of `radius` at `center` rests on top of the
    /// platform, within `contact_epsilon`
    pub fn standing_on(&self, center: Vec2, radius: f32, platform: &Platform) -> bool {
        let gap = (center.y - platform.center.y).abs();
        let resting_distance = radius + platform.height / 2.0;
        (resting_distance - gap).abs() <= self.contact_epsilon
    }
}
