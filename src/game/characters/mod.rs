// Character system
//
// Everything that makes an Arcanian tick:
// - stats and the stateful resources (vitals, timers)
// - the 8-state behavior state machine
// - elemental specialization hooks
// - the charge-and-release aimer

pub mod aim;
pub mod character;
pub mod element;
pub mod resources;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use aim::{AimCone, Aimer};
pub use character::{Arcanian, Roster, RosterError};
pub use element::Element;
pub use resources::Vitals;
pub use state::ArcanianState;
pub use stats::{ArcanianStats, BASE_STATS};
