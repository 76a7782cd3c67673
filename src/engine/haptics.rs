// Controller vibration collaborator
//
// Durations are in simulation ticks. Like audio cues, rumble requests are
// fire-and-forget and cannot fail the tick.

use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

pub trait Haptics {
    /// Rumble both motors at full strength
    fn set_vibration(&mut self, player_index: usize, ticks: u32);

    /// Dual-motor overload with per-motor strengths in [0, 1]
    fn set_vibration_motors(&mut self, player_index: usize, ticks: u32, left: f32, right: f32);
}

/// Discards every rumble request
#[derive(Debug, Default)]
pub struct NullHaptics;

impl Haptics for NullHaptics {
    fn set_vibration(&mut self, _player_index: usize, _ticks: u32) {}
    fn set_vibration_motors(&mut self, _player_index: usize, _ticks: u32, _left: f32, _right: f32) {}
}

/// Logs rumble requests instead of driving hardware
#[derive(Debug, Default)]
pub struct LoggedHaptics;

impl Haptics for LoggedHaptics {
    fn set_vibration(&mut self, player_index: usize, ticks: u32) {
        debug!("rumble: player {player_index} for {ticks} ticks");
    }

    fn set_vibration_motors(&mut self, player_index: usize, ticks: u32, left: f32, right: f32) {
        debug!("rumble: player {player_index} for {ticks} ticks (L {left}, R {right})");
    }
}

/// A single recorded rumble request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    pub player_index: usize,
    pub ticks: u32,
    pub left: f32,
    pub right: f32,
}

/// Records rumble requests through a shared handle, for assertions in tests
#[derive(Debug, Default, Clone)]
pub struct RecordingHaptics {
    pulses: Rc<RefCell<Vec<Pulse>>>,
}

impl RecordingHaptics {
    pub fn pulses(&self) -> Vec<Pulse> {
        self.pulses.borrow().clone()
    }
}

impl Haptics for RecordingHaptics {
    fn set_vibration(&mut self, player_index: usize, ticks: u32) {
        self.set_vibration_motors(player_index, ticks, 1.0, 1.0);
    }

    fn set_vibration_motors(&mut self, player_index: usize, ticks: u32, left: f32, right: f32) {
        self.pulses.borrow_mut().push(Pulse {
            player_index,
            ticks,
            left,
            right,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_haptics() {
        let haptics = RecordingHaptics::default();
        let mut driver = haptics.clone();
        driver.set_vibration(0, 20);
        driver.set_vibration_motors(1, 10, 0.5, 0.5);

        let pulses = haptics.pulses();
        assert_eq!(pulses.len(), 2);
        assert_eq!(pulses[0].left, 1.0);
        assert_eq!(pulses[1].ticks, 10);
        assert_eq!(pulses[1].right, 0.5);
    }
}
