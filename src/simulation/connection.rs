//! Connection phase: pull off bottom and shut down while a stand is added.

use tracing::debug;

use super::{Simulation, SimulationError};
use crate::config::defaults;
use crate::output::SampleSink;
use crate::types::SimulationState;

/// Tick counts for one connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionReport {
    /// Ticks spent pulling the bit off bottom (30, give or take float rounding)
    pub retract_ticks: usize,
    /// Always [`defaults::RAMP_DOWN_TICKS`]
    pub ramp_down_ticks: usize,
}

impl ConnectionReport {
    pub fn samples(&self) -> usize {
        self.retract_ticks + self.ramp_down_ticks
    }
}

impl Simulation<'_> {
    /// Retract the bit [`defaults::RETRACT_DISTANCE`] off where it stood, then
    /// ramp flow, pumps, rpm and torque down to rest. Hole depth is untouched.
    pub fn connection_phase(
        &mut self,
        state: &mut SimulationState,
        sink: &mut dyn SampleSink,
    ) -> Result<ConnectionReport, SimulationError> {
        let start_position = state.bit_position;

        let mut retract_ticks = 0;
        while start_position - state.bit_position < defaults::RETRACT_DISTANCE {
            state.bit_position -= defaults::RETRACT_STEP;
            state.bit_weight = 0.0;
            state.hook_load = self.hanging_hook_load(state);
            self.emit(state, sink)?;
            retract_ticks += 1;
        }

        for _ in 0..defaults::RAMP_DOWN_TICKS {
            self.ramp_down_tick(state);
            self.emit(state, sink)?;
        }

        debug!(
            stand = state.stand_number,
            bit_position = %format!("{:.1}", state.bit_position),
            retract_ticks,
            "Connection complete"
        );

        Ok(ConnectionReport {
            retract_ticks,
            ramp_down_ticks: defaults::RAMP_DOWN_TICKS,
        })
    }

    fn ramp_down_tick(&mut self, state: &mut SimulationState) {
        state.flow_out -= self.noise.unit() + 1.0;
        state.spm1 -= self.noise.unit() + 1.0;
        state.spm2 -= self.noise.unit() + 1.0;
        state.pump_pressure = (state.spm1 + state.spm2) * defaults::PUMP_PRESSURE_PER_SPM;
        state.rpm -= self.noise.unit() * defaults::RPM_RAMP_DOWN_STEP;
        state.torque -= self.noise.unit() * defaults::TORQUE_RAMP_DOWN_STEP;
        state.hook_load = self.hanging_hook_load(state);

        for value in [
            &mut state.flow_out,
            &mut state.spm1,
            &mut state.spm2,
            &mut state.pump_pressure,
            &mut state.rpm,
            &mut state.torque,
        ] {
            *value = value.max(0.0);
        }
    }
}
