//! Lookup tables driving tag-family dispatch and spatial area resolution.
//!
//! The tables are owned by the surrounding catalogue application: the
//! built-in defaults match the historic curation sheet, and deployments can
//! override them from a YAML file. The parser receives the tables by
//! injection and never mutates them.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;
use thiserror::Error;

use crate::finding::Family;

/// Errors returned while loading notation configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),
}

const SPATIAL_TAGS: &[&str] = &[
    "1", "2", "11", "12", "16", "17", "21", "31", "35", "42", "51", "86", "87",
];

const TEMPORAL_TAGS: &[&str] = &[
    "3", "4", "15", "22", "23", "25", "26", "27", "30", "32", "33", "36", "37", "39", "46", "49",
    "53", "55", "56", "57", "62", "63", "69", "70", "71", "72", "74", "75", "76", "77", "78", "85",
];

const FREQUENCY_TAGS: &[&str] = &["5", "13", "14", "28", "29"];

/// Tag codes that name a canonical brain region directly.
const TAG_AREAS: &[(&str, &str)] = &[
    ("1", "Ventral Stream"),
    ("2", "V1"),
    ("11", "A1"),
    ("12", "Dorsal Stream"),
    ("17", "DMN"),
    ("31", "V4"),
    ("35", "S1"),
    ("51", "Uncinate Fasciculus"),
    ("86", "Dorsal Attention Network"),
    ("87", "Visual Network"),
];

/// Membership sets and the tag→area map used by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotationConfig {
    spatial: BTreeSet<String>,
    temporal: BTreeSet<String>,
    frequency: BTreeSet<String>,
    areas: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct NotationConfigWire {
    #[serde(default)]
    spatial_tags: Vec<String>,

    #[serde(default)]
    temporal_tags: Vec<String>,

    #[serde(default)]
    frequency_tags: Vec<String>,

    #[serde(default)]
    areas: BTreeMap<String, String>,
}

impl Default for NotationConfig {
    fn default() -> Self {
        Self {
            spatial: SPATIAL_TAGS.iter().map(|t| (*t).to_owned()).collect(),
            temporal: TEMPORAL_TAGS.iter().map(|t| (*t).to_owned()).collect(),
            frequency: FREQUENCY_TAGS.iter().map(|t| (*t).to_owned()).collect(),
            areas: TAG_AREAS
                .iter()
                .map(|(tag, area)| ((*tag).to_owned(), (*area).to_owned()))
                .collect(),
        }
    }
}

impl NotationConfig {
    /// Load tables from a YAML document.
    ///
    /// Expected keys: `spatial_tags`, `temporal_tags`, `frequency_tags`
    /// (lists of tag codes) and `areas` (tag code → region name). Missing
    /// keys default to empty; unknown keys are rejected.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let wire: NotationConfigWire = serde_yaml::from_str(yaml)?;
        Ok(Self {
            spatial: wire.spatial_tags.into_iter().collect(),
            temporal: wire.temporal_tags.into_iter().collect(),
            frequency: wire.frequency_tags.into_iter().collect(),
            areas: wire.areas,
        })
    }

    /// Classify a clean (sign-stripped) tag code.
    ///
    /// The three sets are disjoint in practice; if a deployment overlaps
    /// them, spatial wins over temporal over frequency. Codes in no set are
    /// [`Family::Generic`].
    pub fn family_of(&self, clean_code: &str) -> Family {
        if self.spatial.contains(clean_code) {
            Family::Spatial
        } else if self.temporal.contains(clean_code) {
            Family::Temporal
        } else if self.frequency.contains(clean_code) {
            Family::Frequency
        } else {
            Family::Generic
        }
    }

    /// Canonical region name for a clean tag code, when the code itself
    /// names an area.
    pub fn area_for(&self, clean_code: &str) -> Option<&str> {
        self.areas.get(clean_code).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tables_classify_known_codes() {
        let config = NotationConfig::default();
        assert_eq!(config.family_of("2"), Family::Spatial);
        assert_eq!(config.family_of("3"), Family::Temporal);
        assert_eq!(config.family_of("14"), Family::Frequency);
        assert_eq!(config.family_of("99"), Family::Generic);
        // 0 carries no structured payload; its body is free-text comment.
        assert_eq!(config.family_of("0"), Family::Generic);
    }

    #[test]
    fn default_tables_resolve_areas() {
        let config = NotationConfig::default();
        assert_eq!(config.area_for("11"), Some("A1"));
        assert_eq!(config.area_for("16"), None);
    }

    #[test]
    fn loads_tables_from_yaml() {
        let yaml = "spatial_tags: ['1']\nfrequency_tags: ['5']\nareas:\n  '1': Ventral Stream\n";
        let config = NotationConfig::from_yaml(yaml).expect("valid config");
        assert_eq!(config.family_of("1"), Family::Spatial);
        assert_eq!(config.family_of("5"), Family::Frequency);
        assert_eq!(config.family_of("3"), Family::Generic);
        assert_eq!(config.area_for("1"), Some("Ventral Stream"));
    }

    #[test]
    fn rejects_unknown_yaml_keys() {
        let err = NotationConfig::from_yaml("spatial_codes: ['1']\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidYaml(_)));
    }
}
