// Per-frame controller snapshot

use glam::Vec2;
use std::collections::HashSet;

/// The discrete buttons the character core cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// First ability slot
    Primary,
    /// Second ability slot
    Secondary,
    /// Ultimate ability slot
    Ultimate,
    Jump,
    /// Menu accept / spawn accept
    Confirm,
}

/// Immutable-per-tick controller state with both current and previous frame
/// button sets, so callers can ask level ("held") and edge ("just pressed")
/// questions about the same snapshot.
#[derive(Debug, Default, Clone)]
pub struct PadSnapshot {
    /// Left stick axes, components in [-1, 1]
    pub left_stick: Vec2,
    /// Right stick axes, components in [-1, 1]
    pub right_stick: Vec2,
    pressed: HashSet<Button>,
    previous: HashSet<Button>,
}

impl PadSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll the current button set into the previous one.
    /// Call once per frame before feeding new device events.
    pub fn begin_frame(&mut self) {
        self.previous = self.pressed.clone();
    }

    pub fn press(&mut self, button: Button) {
        self.pressed.insert(button);
    }

    pub fn release(&mut self, button: Button) {
        self.pressed.remove(&button);
    }

    pub fn set_left_stick(&mut self, x: f32, y: f32) {
        self.left_stick = Vec2::new(x, y);
    }

    pub fn set_right_stick(&mut self, x: f32, y: f32) {
        self.right_stick = Vec2::new(x, y);
    }

    /// Level query: is the button down this frame
    pub fn is_pressed(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }

    /// Level query: is the button up this frame
    pub fn is_released(&self, button: Button) -> bool {
        !self.pressed.contains(&button)
    }

    /// Edge query: went down between the previous frame and this one
    pub fn just_pressed(&self, button: Button) -> bool {
        self.pressed.contains(&button) && !self.previous.contains(&button)
    }

    /// Edge query: went up between the previous frame and this one
    pub fn just_released(&self, button: Button) -> bool {
        !self.pressed.contains(&button) && self.previous.contains(&button)
    }

    /// Clear sticks and both button sets
    pub fn reset(&mut self) {
        self.left_stick = Vec2::ZERO;
        self.right_stick = Vec2::ZERO;
        self.pressed.clear();
        self.previous.clear();
    }
}
