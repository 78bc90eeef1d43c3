//! Playback sample: one output row per simulated tick

use super::SimulationState;

/// Column names of the playback table, in output order.
pub const HEADER: [&str; 18] = [
    "Hole Depth",
    "Bit Position",
    "Bit Weight",
    "Flow Out Percent",
    "Hook Load",
    "Pit Volume 1",
    "Pit Volume 2",
    "Pit Volume 3",
    "Pump Pressure",
    "Pump SPM 1",
    "Pump SPM 2",
    "Svy Azimuth",
    "Svy Depth",
    "Svy Inclination",
    "Top Drive RPM",
    "Top Drive Torque",
    "Toolface Grav",
    "Toolface Mag",
];

/// Snapshot of the channels written for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub hole_depth: f64,
    pub bit_position: f64,
    pub bit_weight: f64,
    pub flow_out: f64,
    pub hook_load: f64,
    pub pit1: f64,
    pub pit2: f64,
    pub pit3: f64,
    pub pump_pressure: f64,
    pub spm1: f64,
    pub spm2: f64,
    pub azimuth: f64,
    pub survey_depth: f64,
    pub inclination: f64,
    pub rpm: f64,
    pub torque: f64,
    pub grav: f64,
    pub mag: f64,
}

impl Sample {
    /// Values in [`HEADER`] order.
    pub fn values(&self) -> [f64; 18] {
        [
            self.hole_depth,
            self.bit_position,
            self.bit_weight,
            self.flow_out,
            self.hook_load,
            self.pit1,
            self.pit2,
            self.pit3,
            self.pump_pressure,
            self.spm1,
            self.spm2,
            self.azimuth,
            self.survey_depth,
            self.inclination,
            self.rpm,
            self.torque,
            self.grav,
            self.mag,
        ]
    }

    /// Values as fixed-point strings with six fractional digits.
    pub fn to_record(&self) -> Vec<String> {
        self.values().iter().map(|v| format!("{v:.6}")).collect()
    }
}

impl From<&SimulationState> for Sample {
    fn from(s: &SimulationState) -> Self {
        Self {
            hole_depth: s.hole_depth,
            bit_position: s.bit_position,
            bit_weight: s.bit_weight,
            flow_out: s.flow_out,
            hook_load: s.hook_load,
            pit1: s.pit1,
            pit2: s.pit2,
            pit3: s.pit3,
            pump_pressure: s.pump_pressure,
            spm1: s.spm1,
            spm2: s.spm2,
            azimuth: s.azimuth,
            survey_depth: s.survey_depth,
            inclination: s.inclination,
            rpm: s.rpm,
            torque: s.torque,
            grav: s.grav,
            mag: s.mag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_is_fixed_point_six_digits() {
        let state = SimulationState {
            hole_depth: 1234.5,
            bit_position: 1231.25,
            rpm: 120.123_456_789,
            stand_number: 3,
            ..SimulationState::default()
        };
        let record = Sample::from(&state).to_record();
        assert_eq!(record.len(), HEADER.len());
        assert_eq!(record[0], "1234.500000");
        assert_eq!(record[1], "1231.250000");
        assert_eq!(record[2], "0.000000");
        assert_eq!(record[14], "120.123457");
    }

    #[test]
    fn test_survey_depth_sits_between_azimuth_and_inclination() {
        let state = SimulationState {
            azimuth: 10.0,
            survey_depth: 500.0,
            inclination: 2.0,
            ..SimulationState::default()
        };
        let values = Sample::from(&state).values();
        let idx = |name: &str| HEADER.iter().position(|h| *h == name).expect("column");
        assert!((values[idx("Svy Azimuth")] - 10.0).abs() < f64::EPSILON);
        assert!((values[idx("Svy Depth")] - 500.0).abs() < f64::EPSILON);
        assert!((values[idx("Svy Inclination")] - 2.0).abs() < f64::EPSILON);
    }
}
