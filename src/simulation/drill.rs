//! Drill phase: put one stand down.
//!
//! A fixed warm-up burst eases the bit onto bottom and spins up the top drive,
//! then every drilling tick advances the bit by the section ROP while weight,
//! flow, pumps, rpm and torque climb toward the section ceilings. Values are
//! allowed to overshoot a ceiling for the tick they cross it; the overshoot is
//! written, then pulled back to the ceiling with some jitter.

use tracing::debug;

use super::{Simulation, SimulationError};
use crate::config::defaults;
use crate::output::SampleSink;
use crate::types::SimulationState;

/// Tick counts for one drill phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrillReport {
    /// Always [`defaults::WARMUP_TICKS`]
    pub warmup_ticks: usize,
    pub drilling_ticks: usize,
}

impl DrillReport {
    pub fn samples(&self) -> usize {
        self.warmup_ticks + self.drilling_ticks
    }
}

impl Simulation<'_> {
    /// Drill until the hole is one stand length deeper than where the phase began.
    ///
    /// Progress depends on a positive section ROP; there is no tick cap.
    pub fn drill_phase(
        &mut self,
        state: &mut SimulationState,
        sink: &mut dyn SampleSink,
    ) -> Result<DrillReport, SimulationError> {
        self.prepare_section(state)?;
        state.survey_depth = state.hole_depth;
        let target_depth = state.survey_depth + self.config.constants.stand_length;

        for _ in 0..defaults::WARMUP_TICKS {
            self.warmup_tick(state);
            state.enforce_depth_invariant();
            self.emit(state, sink)?;
        }

        let mut drilling_ticks = 0;
        while state.hole_depth < target_depth {
            self.prepare_section(state)?;
            self.drilling_tick(state);
            state.enforce_depth_invariant();
            self.emit(state, sink)?;
            self.clamp_to_ceilings(state);
            drilling_ticks += 1;
        }

        debug!(
            stand = state.stand_number,
            from = %format!("{:.1}", state.survey_depth),
            to = %format!("{:.1}", state.hole_depth),
            ticks = drilling_ticks,
            "Drill phase complete"
        );

        Ok(DrillReport {
            warmup_ticks: defaults::WARMUP_TICKS,
            drilling_ticks,
        })
    }

    fn warmup_tick(&mut self, state: &mut SimulationState) {
        let s = self.active.section;

        state.hook_load = self.drilling_hook_load(state);
        state.bit_position += defaults::WARMUP_BIT_ADVANCE;
        state.rpm = self.ramp(
            state.rpm,
            s.rpm_max,
            defaults::ROTARY_RAMP_STEP,
            0.0,
            defaults::STANDARD_NOISE,
        );
        self.jitter_pits(state);
    }

    fn drilling_tick(&mut self, state: &mut SimulationState) {
        let s = self.active.section;

        state.bit_position += self.rop;
        state.bit_weight = self.ramp(
            state.bit_weight,
            s.bit_weight_max,
            1.0,
            1.0,
            defaults::BIT_WEIGHT_CEILING_NOISE,
        );
        state.flow_out =
            self.ramp(state.flow_out, s.flow_max, 1.0, 1.0, defaults::STANDARD_NOISE);
        state.hook_load = self.drilling_hook_load(state);
        self.jitter_pits(state);

        state.spm1 = self.ramp_spm(state.spm1, s.spm_max);
        state.spm2 = self.ramp_spm(state.spm2, s.spm_max);
        state.pump_pressure = (state.spm1 + state.spm2) * defaults::PUMP_PRESSURE_PER_SPM;

        state.rpm = self.ramp(
            state.rpm,
            s.rpm_max,
            defaults::ROTARY_RAMP_STEP,
            0.0,
            defaults::STANDARD_NOISE,
        );
        state.torque = self.ramp(
            state.torque,
            s.torque_max,
            defaults::ROTARY_RAMP_STEP,
            0.0,
            defaults::TORQUE_NOISE,
        );
    }

    /// Below the ceiling climb by `unit * scale + offset`; at or above it
    /// wander by `noise(level)`. Never steps back down on its own.
    fn ramp(&mut self, value: f64, ceiling: f64, scale: f64, offset: f64, level: f64) -> f64 {
        if value < ceiling {
            value + self.noise.unit() * scale + offset
        } else {
            value + self.noise.noise(level)
        }
    }

    /// Pumps climb like the rest but re-centre on the ceiling once there.
    fn ramp_spm(&mut self, value: f64, ceiling: f64) -> f64 {
        if value < ceiling {
            value + self.noise.unit() * defaults::SPM_RAMP_STEP
        } else {
            ceiling + self.noise.noise(defaults::SPM_CEILING_NOISE)
        }
    }

    /// Pull anything that overshot its ceiling back onto it, with jitter.
    fn clamp_to_ceilings(&mut self, state: &mut SimulationState) {
        let s = self.active.section;

        if state.bit_weight > s.bit_weight_max {
            state.bit_weight = s.bit_weight_max + self.noise.noise(defaults::STANDARD_NOISE);
        }
        if state.flow_out > s.flow_max {
            state.flow_out = s.flow_max + self.noise.noise(defaults::STANDARD_NOISE);
        }
        if state.rpm > s.rpm_max {
            state.rpm = s.rpm_max + self.noise.noise(defaults::STANDARD_NOISE);
        }
        if state.torque > s.torque_max {
            state.torque = s.torque_max + self.noise.noise(defaults::TORQUE_NOISE);
        }
    }

    fn jitter_pits(&mut self, state: &mut SimulationState) {
        let c = &self.config.constants;
        state.pit1 = c.pit1_total_vol + self.noise.noise(defaults::PIT_VOLUME_NOISE);
        state.pit2 = c.pit2_total_vol + self.noise.noise(defaults::PIT_VOLUME_NOISE);
        state.pit3 = c.pit3_total_vol + self.noise.noise(defaults::PIT_VOLUME_NOISE);
    }
}
