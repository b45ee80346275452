//! Typed finding records produced by the parser.
//!
//! A [`Finding`] is one decoded observation extracted from a single tag's
//! body text. Findings are plain values with no identity of their own; the
//! import pipeline turns them into database rows.

use catalog_types::TagCode;
use serde::Serialize;

use crate::FindingTagDataError;

/// Decoder family a tag code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Spatial,
    Temporal,
    Frequency,
    Generic,
}

/// Analysis carried out to obtain a frequency finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisType {
    Power,
    Connectivity,
    Phi,
    Complexity,
    /// Transfer entropy
    Te,
    /// Principal components analysis
    Pca,
    /// Long-range temporal correlations
    Lrtc,
    Microstates,
    /// Correlation dimension
    Cd,
    Clustering,
    /// Minimum spanning tree
    Mst,
    /// Power spectral density
    Psd,
    /// Event-related spectral perturbations
    Ersp,
}

impl std::str::FromStr for AnalysisType {
    type Err = FindingTagDataError;

    /// Matches case-insensitively; `microstate` is a historic alias for
    /// `microstates`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let analysis = match s.to_ascii_lowercase().as_str() {
            "power" => Self::Power,
            "connectivity" => Self::Connectivity,
            "phi" => Self::Phi,
            "complexity" => Self::Complexity,
            "te" => Self::Te,
            "pca" => Self::Pca,
            "lrtc" => Self::Lrtc,
            "microstates" | "microstate" => Self::Microstates,
            "cd" => Self::Cd,
            "clustering" => Self::Clustering,
            "mst" => Self::Mst,
            "psd" => Self::Psd,
            "ersp" => Self::Ersp,
            _ => return Err(FindingTagDataError::UnknownAnalysisType(s.to_owned())),
        };
        Ok(analysis)
    }
}

/// Direction of a frequency effect. Positive unless the body carries the
/// literal `Neg` token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Positive,
    Negative,
}

/// Onset/offset window in milliseconds.
///
/// Both `None` means the time was not specified. When the notation gives a
/// single value, onset and offset are equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TemporalSpan {
    pub onset: Option<f64>,
    pub offset: Option<f64>,
}

/// Family-specific payload of a finding.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum FindingDetail {
    Spatial {
        /// Resolved canonical region name, or the curator's free text.
        area: String,
    },
    Temporal {
        span: TemporalSpan,
    },
    Frequency {
        analysis: AnalysisType,
        direction: Direction,
        band_low: f64,
        band_high: f64,
        span: TemporalSpan,
    },
    /// Tag codes outside the spatial/temporal/frequency tables carry no
    /// structured payload; their body text survives as the comment.
    Generic,
}

/// One decoded observation from a raw findings cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    /// The original identifier token, negation sign included.
    pub tag_code: TagCode,
    /// False when the tag was negated (a reported-but-excluded observation).
    pub is_relevant: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technique: Option<String>,
    #[serde(flatten)]
    pub detail: FindingDetail,
}

impl Finding {
    /// The family of the decoder that produced this finding.
    pub fn family(&self) -> Family {
        match self.detail {
            FindingDetail::Spatial { .. } => Family::Spatial,
            FindingDetail::Temporal { .. } => Family::Temporal,
            FindingDetail::Frequency { .. } => Family::Frequency,
            FindingDetail::Generic => Family::Generic,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_type_matches_case_insensitively() {
        assert_eq!("Power".parse::<AnalysisType>().expect("known"), AnalysisType::Power);
        assert_eq!("CONNECTIVITY".parse::<AnalysisType>().expect("known"), AnalysisType::Connectivity);
    }

    #[test]
    fn analysis_type_accepts_microstate_alias() {
        assert_eq!(
            "microstate".parse::<AnalysisType>().expect("alias"),
            AnalysisType::Microstates
        );
    }

    #[test]
    fn analysis_type_rejects_unknown_keyword() {
        let err = "wavelet".parse::<AnalysisType>().expect_err("unknown");
        assert!(matches!(err, FindingTagDataError::UnknownAnalysisType(s) if s == "wavelet"));
    }

    // The import pipeline and the CLI both consume this JSON shape.
    #[test]
    fn finding_serializes_with_family_tag() {
        let finding = Finding {
            tag_code: TagCode::new("-5").expect("valid code"),
            is_relevant: false,
            comment: Some("gamma activity".to_owned()),
            technique: None,
            detail: FindingDetail::Frequency {
                analysis: AnalysisType::Power,
                direction: Direction::Positive,
                band_low: 30.0,
                band_high: 40.0,
                span: TemporalSpan {
                    onset: Some(340.0),
                    offset: Some(420.0),
                },
            },
        };
        let value = serde_json::to_value(&finding).expect("serializes");
        assert_eq!(value["tag_code"], "-5");
        assert_eq!(value["is_relevant"], false);
        assert_eq!(value["family"], "frequency");
        assert_eq!(value["analysis"], "power");
        assert_eq!(value["direction"], "positive");
        assert_eq!(value["band_low"], 30.0);
        assert_eq!(value["span"]["onset"], 340.0);
        assert!(value.get("technique").is_none());
    }
}
