// Character stats - ALL ELEMENTS SHARE THE SAME BASE NUMBERS
// Differentiation comes from the elemental hooks, not base stats

use glam::Vec2;

/// Fixed character tuning shared by every element
#[derive(Debug, Clone, PartialEq)]
pub struct ArcanianStats {
    // Body
    /// Collision radius in world units
    pub radius: f32,

    // Vitals
    pub max_health: i32,
    pub max_shield: i32,
    /// Shield art radius as a multiple of the body radius
    pub shield_art_scale: f32,
    /// Shield points restored per Earth regen cycle
    pub shield_regen_rate: i32,
    pub max_tp: i32,

    // Movement
    /// Horizontal speed per unit of stick deflection
    pub move_speed: f32,
    /// Velocity applied on (re)spawn
    pub spawn_velocity: Vec2,
    /// Upward velocity applied on jump
    pub jump_strength: f32,
    pub jump_tp_cost: i32,

    // Firing
    /// Charge power granted on entering the firing state
    pub min_power: f32,
    /// Charge power that forces the shot out
    pub max_power: f32,

    // Timers (seconds are converted via WorldContext::seconds_to_ticks)
    /// Ticks between hit-flash visibility toggles
    pub blink_rate: u32,
    /// Total ticks the hit flash runs
    pub max_blink_ticks: u32,
    /// Resting time before the recharge flag arms
    pub recharge_seconds: u32,
    /// Water passive: seconds per point of health
    pub hp_regen_seconds: u32,
    /// Spawning auto-confirms after this long
    pub spawn_timeout_seconds: u32,

    // Aimer
    /// Reticle angle at construction, degrees
    pub aimer_angle: f32,
    /// Degrees of rotation per tick per unit of stick deflection
    pub aimer_speed: f32,
    /// Reticle radius when not charging
    pub reticle_radius: f32,
    /// Length of the aim bar; the reticle orbits past its tip
    pub aimer_bar_width: f32,
}

/// The ONE base tuning used by all four elements
pub const BASE_STATS: ArcanianStats = ArcanianStats {
    radius: 7.0,

    max_health: 200,
    max_shield: 40,
    shield_art_scale: 1.2,
    shield_regen_rate: 5,
    max_tp: 100,

    move_speed: 0.5,
    spawn_velocity: Vec2::new(0.0, -0.1),
    jump_strength: 1.4,
    jump_tp_cost: 10,

    min_power: 5.0,
    max_power: 70.0,

    blink_rate: 5,
    max_blink_ticks: 40,
    recharge_seconds: 4,
    hp_regen_seconds: 4,
    spawn_timeout_seconds: 10,

    aimer_angle: 25.0,
    aimer_speed: 3.0,
    reticle_radius: 2.0,
    aimer_bar_width: 20.0,
};

impl Default for ArcanianStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl ArcanianStats {
    /// Ultimate meter capacity, filled by damage taken
    pub fn max_ultimate(&self) -> i32 {
        self.max_health / 2
    }
}
