//! Shared data structures for well playback
//!
//! - `SimulationState`: the mutable record the drill and connection phases advance
//! - `Sample`: the 18-channel row emitted once per tick

mod state;
mod sample;

pub use state::*;
pub use sample::*;
