// Character state enumeration

/// The current state of an Arcanian.
///
/// Exactly one state is active at a time and every handler leaves the
/// character in some valid next state; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArcanianState {
    /// Standing still on ground, able to act
    Resting,
    /// Moving horizontally on ground
    Moving,
    /// Descending, no horizontal control (Wind excepted)
    Falling,
    /// Playing the death drift toward the top of the world
    Dying,
    /// Waiting at the spawn cursor for confirm or timeout
    Spawning,
    /// Charging a skill, released by letting go of the fire buttons
    Firing,
    /// Hidden and non-interactive (construction-time state)
    #[default]
    InMenu,
    /// Airborne under jump impulse with half-rate steering
    Jumping,
}

impl ArcanianState {
    /// In the air under physics integration
    pub fn is_airborne(&self) -> bool {
        matches!(self, Self::Falling | Self::Jumping)
    }

    /// Mid death-and-respawn cycle; projectiles should ignore the character
    pub fn is_dying_or_spawning(&self) -> bool {
        matches!(self, Self::Dying | Self::Spawning)
    }

    /// Hidden from the draw set with no physics
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::InMenu)
    }

    /// Short label for HUD / status logging
    pub fn label(&self) -> &'static str {
        match self {
            Self::Resting => "resting",
            Self::Moving => "moving",
            Self::Falling => "falling",
            Self::Dying => "dying",
            Self::Spawning => "spawning",
            Self::Firing => "firing",
            Self::InMenu => "in menu",
            Self::Jumping => "jumping",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_in_menu() {
        assert_eq!(ArcanianState::default(), ArcanianState::InMenu);
    }

    #[test]
    fn test_airborne_states() {
        assert!(ArcanianState::Falling.is_airborne());
        assert!(ArcanianState::Jumping.is_airborne());
        assert!(!ArcanianState::Resting.is_airborne());
        assert!(!ArcanianState::Firing.is_airborne());
    }

    #[test]
    fn test_dying_or_spawning() {
        assert!(ArcanianState::Dying.is_dying_or_spawning());
        assert!(ArcanianState::Spawning.is_dying_or_spawning());
        assert!(!ArcanianState::Moving.is_dying_or_spawning());
    }

    #[test]
    fn test_hidden() {
        assert!(ArcanianState::InMenu.is_hidden());
        assert!(!ArcanianState::Spawning.is_hidden());
    }

    #[test]
    fn test_labels() {
        assert_eq!(ArcanianState::Resting.label(), "resting");
        assert_eq!(ArcanianState::InMenu.label(), "in menu");
    }
}
