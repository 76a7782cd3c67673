// Math utilities and helper functions

use glam::Vec2;

/// Stick deflection below this magnitude is treated as neutral.
pub const STICK_DEAD_ZONE: f32 = 0.5;

/// Zero out a stick axis inside the dead zone
pub fn dead_zone(value: f32, threshold: f32) -> f32 {
    if value.abs() < threshold {
        0.0
    } else {
        value
    }
}

/// Check if two f32 values are approximately equal
#[allow(dead_code)]
pub fn approx_equal(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Mirror an angle across the vertical axis (degrees)
pub fn mirror_angle(angle_deg: f32) -> f32 {
    180.0 - angle_deg
}

/// Unit vector pointing along an angle given in degrees
pub fn unit_from_degrees(angle_deg: f32) -> Vec2 {
    let radians = angle_deg.to_radians();
    Vec2::new(radians.cos(), radians.sin())
}
