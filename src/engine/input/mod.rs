// Input handling
//
// The game loop owns the real device (keyboard, gamepad, whatever) and fills
// a `PadSnapshot` once per frame. The character core only ever sees the
// snapshot, so it can be driven just as easily by a test script.

pub mod pad;

pub use pad::{Button, PadSnapshot};
