use serde::{Deserialize, Serialize};

/// Events emitted by the simulation during a tick.
///
/// A `GoalScored` carries the whole celebratory sequence with it: front ends
/// react by flashing the message, playing the chime, and bursting confetti.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TickEvent {
    /// The ball entered the capture radius. The ball has already been reset
    /// to spawn with zero velocity by the time this is observed.
    GoalScored {
        /// Ball-to-goal distance at the moment of capture.
        distance: f32,
        /// Goals captured this session, including this one.
        total_goals: u32,
    },
    /// The ball left the field rectangle and was reset to spawn
    /// (bounds-checking variants only). Carries the offending position.
    OutOfBounds { x: f32, z: f32 },
}
