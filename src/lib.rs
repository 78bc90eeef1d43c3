//! Well Playback: synthetic drilling telemetry
//!
//! Replays a well stand by stand from a declarative configuration and writes
//! one 18-channel row per simulated second, for feeding rig-floor displays and
//! test harnesses.
//!
//! ## Architecture
//!
//! - **Config**: well constants and depth-indexed sections (XML or TOML)
//! - **Simulation**: drill and connection phases over one shared state
//! - **Output**: sample sinks (CSV table, in-memory)

pub mod config;
pub mod types;
pub mod simulation;
pub mod output;

// Re-export well configuration
pub use config::{ConfigError, WellConfig};

// Re-export commonly used types
pub use types::{Sample, SimulationState, HEADER};

// Re-export the engine
pub use simulation::{
    write_playback, NoiseSource, RunSummary, Simulation, SimulationError, StandReport,
};

// Re-export sinks
pub use output::{CsvSink, MemorySink, OutputError, SampleSink};
