//! Simulation state: the single mutable record every phase advances

use crate::config::{defaults, WellConfig};

/// Everything the rig floor would see at one tick.
///
/// Owned by the driver and lent to each phase by `&mut`; nothing else holds it.
/// Hole depth never trails bit position: [`SimulationState::enforce_depth_invariant`]
/// deepens the hole to the bit, never moves the bit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimulationState {
    // === Depth ===
    /// Deepest point drilled so far (ft)
    pub hole_depth: f64,
    /// Current bit depth (ft)
    pub bit_position: f64,
    /// Hole depth captured when the current drill phase started (ft)
    pub survey_depth: f64,

    // === Loads ===
    /// Weight on bit (klbs)
    pub bit_weight: f64,
    /// Hook load (klbs)
    pub hook_load: f64,
    /// Top drive torque (ft-lbs)
    pub torque: f64,
    /// Top drive RPM
    pub rpm: f64,

    // === Hydraulics ===
    /// Flow out (percent)
    pub flow_out: f64,
    /// Pump pressure (psi)
    pub pump_pressure: f64,
    /// Pump 1 strokes per minute
    pub spm1: f64,
    /// Pump 2 strokes per minute
    pub spm2: f64,
    /// Pit volumes (bbl)
    pub pit1: f64,
    pub pit2: f64,
    pub pit3: f64,

    // === Survey ===
    /// Azimuth (deg)
    pub azimuth: f64,
    /// Inclination (deg)
    pub inclination: f64,
    /// Gravity toolface (deg)
    pub grav: f64,
    /// Magnetic toolface (deg)
    pub mag: f64,

    /// Stands in the hole, counting from 1
    pub stand_number: u32,
}

impl SimulationState {
    /// Initial state for a run: hole at the configured start depth, bit
    /// just off bottom (never above surface), everything else at rest.
    pub fn new(config: &WellConfig) -> Self {
        let start = config.constants.start_depth;
        Self {
            hole_depth: start,
            bit_position: (start - defaults::INITIAL_BIT_OFFSET).max(0.0),
            survey_depth: start,
            stand_number: defaults::FIRST_STAND,
            ..Self::default()
        }
    }

    /// Restore `hole_depth >= bit_position` by deepening the hole.
    pub fn enforce_depth_invariant(&mut self) {
        if self.hole_depth < self.bit_position {
            self.hole_depth = self.bit_position;
        }
    }

    /// Bit distance off bottom (ft).
    pub fn off_bottom(&self) -> f64 {
        self.hole_depth - self.bit_position
    }
}
