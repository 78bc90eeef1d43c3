//! Well Configuration - constants and depth-indexed sections for one playback run
//!
//! The document is XML by convention (`config.xml`), with TOML accepted for
//! files ending in `.toml`. Both formats use the same key names; XML carries
//! the well type and every section value as attributes.

use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

// ============================================================================
// Errors
// ============================================================================

/// Fatal configuration errors. Any of these aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),
    #[error("Config parse error ({}): {}", .0.display(), .1)]
    Parse(PathBuf, String),
    #[error("Config has no sections ({})", .0.display())]
    NoSections(PathBuf),
}

// ============================================================================
// Document Format
// ============================================================================

/// On-disk format of a well configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Xml,
    Toml,
}

impl ConfigFormat {
    /// `.toml` files are TOML, everything else is treated as XML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Xml,
        }
    }
}

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for a playback run. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WellConfig {
    /// Free-form label, echoed in the completion message
    #[serde(rename = "@wellType", alias = "wellType")]
    pub well_type: String,

    #[serde(rename = "wellConstants")]
    pub constants: WellConstants,

    /// Sections in document order. Callers rely on this order matching
    /// increasing depth; nothing here sorts or checks it.
    #[serde(deserialize_with = "deserialize_sections")]
    pub sections: Vec<Section>,
}

/// Well-wide constants.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellConstants {
    /// Pit 1 total volume (bbl)
    pub pit1_total_vol: f64,
    /// Pit 2 total volume (bbl)
    pub pit2_total_vol: f64,
    /// Pit 3 total volume (bbl)
    pub pit3_total_vol: f64,
    /// Length of one stand of pipe (ft)
    pub stand_length: f64,
    /// Number of stands to drill
    pub total_stands: u32,
    /// Hole depth at the start of the run (ft)
    pub start_depth: f64,
    /// Weight of the empty travelling block (klbs)
    #[serde(rename = "emptyBlock")]
    pub empty_block_weight: f64,
}

/// Operating limits and survey values that apply above `depth`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Section {
    /// Upper bound of applicability (ft)
    #[serde(rename = "@depth", alias = "depth")]
    pub depth: f64,
    /// Rate of penetration (ft/hr)
    #[serde(rename = "@rop", alias = "rop")]
    pub rop: f64,
    /// Weight added to the hook per stand in the hole (klbs)
    #[serde(rename = "@standWeight", alias = "standWeight")]
    pub stand_weight: f64,
    #[serde(rename = "@rpmMax", alias = "rpmMax")]
    pub rpm_max: f64,
    #[serde(rename = "@torqueMax", alias = "torqueMax")]
    pub torque_max: f64,
    #[serde(rename = "@spmMax", alias = "spmMax")]
    pub spm_max: f64,
    #[serde(rename = "@bitWeightMax", alias = "bitWeightMax")]
    pub bit_weight_max: f64,
    #[serde(rename = "@flowMax", alias = "flowMax")]
    pub flow_max: f64,
    /// Survey azimuth (deg)
    #[serde(rename = "@azimuth", alias = "azimuth")]
    pub azimuth: f64,
    /// Survey inclination (deg)
    #[serde(rename = "@inclination", alias = "inclination")]
    pub inclination: f64,
    /// Magnetic toolface (deg)
    #[serde(rename = "@mag", alias = "mag")]
    pub mag: f64,
    /// Gravity toolface (deg)
    #[serde(rename = "@grav", alias = "grav")]
    pub grav: f64,
}

/// `<sections>` wraps repeated `<section>` elements; TOML mirrors it with
/// `[[sections.section]]`.
fn deserialize_sections<'de, D>(deserializer: D) -> Result<Vec<Section>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct SectionList {
        #[serde(default)]
        section: Vec<Section>,
    }

    SectionList::deserialize(deserializer).map(|list| list.section)
}

impl WellConfig {
    /// Load a configuration document, picking the format from the extension.
    ///
    /// Suspicious values are logged as warnings but never rejected; only an
    /// unreadable file, a malformed document or an empty section list fail.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;

        let format = ConfigFormat::from_path(path);
        let config = Self::parse(&contents, format)
            .map_err(|msg| ConfigError::Parse(path.to_path_buf(), msg))?;

        if config.sections.is_empty() {
            return Err(ConfigError::NoSections(path.to_path_buf()));
        }

        for w in super::validation::validate_physical_ranges(&config) {
            warn!(field = %w.field, "{}", w);
        }

        info!(
            path = %path.display(),
            well_type = %config.well_type,
            sections = config.sections.len(),
            total_stands = config.constants.total_stands,
            "Loaded well config"
        );
        Ok(config)
    }

    /// Parse a document held in memory.
    pub fn parse(contents: &str, format: ConfigFormat) -> Result<Self, String> {
        match format {
            ConfigFormat::Xml => quick_xml::de::from_str(contents).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
        }
    }

    /// Deepest section threshold, if any sections are present.
    pub fn deepest_threshold(&self) -> Option<f64> {
        self.sections.iter().map(|s| s.depth).reduce(f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<config wellType="Horizontal">
    <wellConstants>
        <pit1TotalVol>400</pit1TotalVol>
        <pit2TotalVol>350.5</pit2TotalVol>
        <pit3TotalVol>300</pit3TotalVol>
        <standLength>93</standLength>
        <totalStands>12</totalStands>
        <startDepth>4500</startDepth>
        <emptyBlock>45</emptyBlock>
    </wellConstants>
    <sections>
        <section depth="5000" rop="60" standWeight="2.1" rpmMax="120" torqueMax="8000"
                 spmMax="90" bitWeightMax="25" flowMax="95" azimuth="12.5"
                 inclination="3" mag="40" grav="10"/>
        <section depth="9000" rop="35" standWeight="2.4" rpmMax="100" torqueMax="12000"
                 spmMax="110" bitWeightMax="35" flowMax="98" azimuth="14"
                 inclination="45" mag="55" grav="20"/>
    </sections>
</config>
"#;

    #[test]
    fn test_parse_xml_document() {
        let config = WellConfig::parse(XML, ConfigFormat::Xml).expect("valid XML");
        assert_eq!(config.well_type, "Horizontal");
        assert_eq!(config.constants.total_stands, 12);
        assert!((config.constants.pit2_total_vol - 350.5).abs() < f64::EPSILON);
        assert!((config.constants.empty_block_weight - 45.0).abs() < f64::EPSILON);
        assert_eq!(config.sections.len(), 2);
        assert!((config.sections[0].depth - 5000.0).abs() < f64::EPSILON);
        assert!((config.sections[1].inclination - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sections_keep_document_order() {
        let swapped = XML
            .replace("depth=\"5000\"", "depth=\"TMP\"")
            .replace("depth=\"9000\"", "depth=\"5000\"")
            .replace("depth=\"TMP\"", "depth=\"9000\"");
        let config = WellConfig::parse(&swapped, ConfigFormat::Xml).expect("valid XML");
        assert!((config.sections[0].depth - 9000.0).abs() < f64::EPSILON);
        assert!((config.sections[1].depth - 5000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_constant_is_parse_error() {
        let broken = XML.replace("<standLength>93</standLength>", "");
        assert!(WellConfig::parse(&broken, ConfigFormat::Xml).is_err());
    }

    #[test]
    fn test_missing_section_attribute_is_parse_error() {
        let broken = XML.replacen("rop=\"60\"", "", 1);
        assert!(WellConfig::parse(&broken, ConfigFormat::Xml).is_err());
    }

    #[test]
    fn test_parse_toml_document() {
        let toml_str = r#"
wellType = "Vertical"

[wellConstants]
pit1TotalVol = 10
pit2TotalVol = 10
pit3TotalVol = 10
standLength = 90
totalStands = 3
startDepth = 0
emptyBlock = 50

[[sections.section]]
depth = 100000
rop = 30
standWeight = 500
rpmMax = 120
torqueMax = 5000
spmMax = 80
bitWeightMax = 20
flowMax = 100
azimuth = 10
inclination = 2
mag = 5
grav = 1
"#;
        let config = WellConfig::parse(toml_str, ConfigFormat::Toml).expect("valid TOML");
        assert_eq!(config.well_type, "Vertical");
        assert_eq!(config.constants.total_stands, 3);
        assert_eq!(config.sections.len(), 1);
        assert!((config.sections[0].stand_weight - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("well.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("WELL.TOML")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("config.xml")), ConfigFormat::Xml);
        assert_eq!(ConfigFormat::from_path(Path::new("config")), ConfigFormat::Xml);
    }

    #[test]
    fn test_deepest_threshold() {
        let config = WellConfig::parse(XML, ConfigFormat::Xml).expect("valid XML");
        assert_eq!(config.deepest_threshold(), Some(9000.0));
    }
}
