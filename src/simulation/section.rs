//! Section resolution: which section's limits apply at a given depth

use crate::config::{Section, WellConfig};

/// The section in force at some depth, with its position in the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionLimits {
    /// Zero-based index into `WellConfig::sections`
    pub index: usize,
    pub section: Section,
}

/// Find the section active at `current_depth`.
///
/// Sections are scanned in document order and the first one whose depth
/// threshold is strictly greater than `current_depth` wins. When the depth is
/// past every threshold the first section (index 0) is used, not the deepest.
/// Returns `None` only when the config has no sections.
pub fn resolve(config: &WellConfig, current_depth: f64) -> Option<SectionLimits> {
    let index = config
        .sections
        .iter()
        .position(|s| s.depth > current_depth)
        .unwrap_or(0);

    config
        .sections
        .get(index)
        .map(|section| SectionLimits {
            index,
            section: *section,
        })
}
