//! Config validation: physical range checks over a loaded well config.
//!
//! The engine accepts every numeric value as given. These checks only flag
//! values that will make the playback degenerate (or never finish) so the
//! operator sees a warning before the run starts. Warnings never break a config.

use super::WellConfig;

/// A non-fatal config warning (suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

fn warning(field: impl Into<String>, message: String) -> ValidationWarning {
    ValidationWarning {
        field: field.into(),
        message,
    }
}

/// Check a config for values outside what the playback engine can sensibly run.
pub fn validate_physical_ranges(config: &WellConfig) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let c = &config.constants;

    if c.stand_length <= 0.0 {
        warnings.push(warning(
            "wellConstants.standLength",
            format!(
                "wellConstants.standLength = {:.2} is not positive; each drill phase ends immediately",
                c.stand_length
            ),
        ));
    }

    if c.total_stands == 0 {
        warnings.push(warning(
            "wellConstants.totalStands",
            "wellConstants.totalStands = 0; one stand is still drilled".to_string(),
        ));
    }

    for (field, value) in [
        ("wellConstants.pit1TotalVol", c.pit1_total_vol),
        ("wellConstants.pit2TotalVol", c.pit2_total_vol),
        ("wellConstants.pit3TotalVol", c.pit3_total_vol),
        ("wellConstants.emptyBlock", c.empty_block_weight),
        ("wellConstants.startDepth", c.start_depth),
    ] {
        if value < 0.0 {
            warnings.push(warning(field, format!("{field} = {value:.2} is negative")));
        }
    }

    for (i, section) in config.sections.iter().enumerate() {
        // Drilling advances by rop each tick; without it the phase never ends
        if section.rop <= 0.0 {
            warnings.push(warning(
                format!("sections.section[{i}].rop"),
                format!(
                    "section {} rop = {:.2} is not positive; the drill phase cannot make progress",
                    i + 1,
                    section.rop
                ),
            ));
        }
    }

    for (i, pair) in config.sections.windows(2).enumerate() {
        if pair[1].depth <= pair[0].depth {
            warnings.push(warning(
                format!("sections.section[{}].depth", i + 1),
                format!(
                    "section {} depth {:.1} does not exceed section {} depth {:.1}; sections are used in document order",
                    i + 2,
                    pair[1].depth,
                    i + 1,
                    pair[0].depth
                ),
            ));
        }
    }

    if let Some(deepest) = config.deepest_threshold() {
        if c.start_depth >= deepest {
            warnings.push(warning(
                "wellConstants.startDepth",
                format!(
                    "wellConstants.startDepth = {:.1} is at or below the deepest section ({:.1}); section 1 limits will apply",
                    c.start_depth, deepest
                ),
            ));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Section, WellConstants};

    fn section(depth: f64, rop: f64) -> Section {
        Section {
            depth,
            rop,
            stand_weight: 2.0,
            rpm_max: 120.0,
            torque_max: 5000.0,
            spm_max: 80.0,
            bit_weight_max: 20.0,
            flow_max: 100.0,
            azimuth: 0.0,
            inclination: 0.0,
            mag: 0.0,
            grav: 0.0,
        }
    }

    fn config(sections: Vec<Section>) -> WellConfig {
        WellConfig {
            well_type: "Test".to_string(),
            constants: WellConstants {
                pit1_total_vol: 10.0,
                pit2_total_vol: 10.0,
                pit3_total_vol: 10.0,
                stand_length: 90.0,
                total_stands: 2,
                start_depth: 1000.0,
                empty_block_weight: 50.0,
            },
            sections,
        }
    }

    #[test]
    fn test_sane_config_has_no_warnings() {
        let cfg = config(vec![section(5000.0, 60.0), section(9000.0, 40.0)]);
        let warnings = validate_physical_ranges(&cfg);
        assert!(
            warnings.is_empty(),
            "unexpected warnings: {:?}",
            warnings.iter().map(|w| &w.field).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_zero_rop_warns() {
        let cfg = config(vec![section(5000.0, 0.0)]);
        let warnings = validate_physical_ranges(&cfg);
        assert!(warnings.iter().any(|w| w.field == "sections.section[0].rop"));
    }

    #[test]
    fn test_out_of_order_sections_warn() {
        let cfg = config(vec![section(9000.0, 60.0), section(5000.0, 60.0)]);
        let warnings = validate_physical_ranges(&cfg);
        assert!(warnings.iter().any(|w| w.field == "sections.section[1].depth"));
    }

    #[test]
    fn test_start_below_deepest_section_warns() {
        let mut cfg = config(vec![section(500.0, 60.0)]);
        cfg.constants.start_depth = 800.0;
        let warnings = validate_physical_ranges(&cfg);
        assert!(warnings.iter().any(|w| w.field == "wellConstants.startDepth"));
    }

    #[test]
    fn test_non_positive_stand_length_warns() {
        let mut cfg = config(vec![section(5000.0, 60.0)]);
        cfg.constants.stand_length = 0.0;
        let warnings = validate_physical_ranges(&cfg);
        assert!(warnings.iter().any(|w| w.field == "wellConstants.standLength"));
    }
}
