// Audio cue collaborator
//
// The core only names cues; actual playback lives outside this crate.

use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

/// Fire-and-forget cue playback. No return value is consulted.
pub trait CuePlayer {
    fn play_cue(&mut self, name: &str);
}

/// Discards every cue
#[derive(Debug, Default)]
pub struct NullCues;

impl CuePlayer for NullCues {
    fn play_cue(&mut self, _name: &str) {}
}

/// Logs cue names instead of playing them
#[derive(Debug, Default)]
pub struct LoggedCues;

impl CuePlayer for LoggedCues {
    fn play_cue(&mut self, name: &str) {
        debug!("cue: {name}");
    }
}

/// Records cue names through a shared handle, for assertions in tests
#[derive(Debug, Default, Clone)]
pub struct RecordingCues {
    played: Rc<RefCell<Vec<String>>>,
}

impl RecordingCues {
    pub fn played(&self) -> Vec<String> {
        self.played.borrow().clone()
    }
}

impl CuePlayer for RecordingCues {
    fn play_cue(&mut self, name: &str) {
        self.played.borrow_mut().push(name.to_string());
    }
}
