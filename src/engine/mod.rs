// Engine modules: input, world context, feedback collaborators

pub mod audio;
pub mod haptics;
pub mod input;
pub mod world;

use audio::CuePlayer;
use haptics::Haptics;

/// Bundle of fire-and-forget collaborators handed to the character each tick.
///
/// Audio and haptics cannot fail a tick; implementations are free to drop
/// every call on the floor.
pub struct Services {
    pub audio: Box<dyn CuePlayer>,
    pub haptics: Box<dyn Haptics>,
}

impl Services {
    /// Services that discard every cue and rumble request
    pub fn null() -> Self {
        Self {
            audio: Box::new(audio::NullCues),
            haptics: Box::new(haptics::NullHaptics),
        }
    }

    /// Services that log requests instead of performing them
    pub fn logged() -> Self {
        Self {
            audio: Box::new(audio::LoggedCues),
            haptics: Box::new(haptics::LoggedHaptics),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_services_accept_calls() {
        let mut services = Services::null();
        services.audio.play_cue("shieldhit");
        services.haptics.set_vibration(0, 20);
        services.haptics.set_vibration_motors(1, 10, 0.5, 0.5);
    }
}
