//! Well Configuration Module
//!
//! Loads the per-well playback document: well constants plus the ordered
//! list of depth-indexed sections that drive the simulation.
//!
//! ## Loading Order
//!
//! 1. `--config <path>` on the command line
//! 2. `WELL_PLAYBACK_CONFIG` environment variable
//! 3. `config.xml` in the current working directory
//!
//! ## Usage
//!
//! ```ignore
//! let config = WellConfig::load(Path::new(defaults::DEFAULT_CONFIG_PATH))?;
//! ```
//!
//! The loaded config is handed to the simulation by reference; there is no
//! global instance.

mod well_config;
pub mod defaults;
pub mod validation;

pub use well_config::*;
