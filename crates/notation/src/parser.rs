//! Finding-tag parser: base decoding, family decoders, and dispatch.

use catalog_types::TagCode;

use crate::config::NotationConfig;
use crate::finding::{AnalysisType, Direction, Family, Finding, FindingDetail, TemporalSpan};
use crate::span::RawSpan;
use crate::{scan, span, FindingTagDataError, NotationResult};

/// Parses raw findings cells into [`Finding`] records.
///
/// Holds the injected lookup tables and nothing else; parsing is pure and
/// per-call, so one parser can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: NotationConfig,
}

/// Shared fields every family decoder starts from.
struct BaseParts {
    residual: String,
    comment: String,
    technique: Option<String>,
}

impl Parser {
    /// Creates a parser with the built-in lookup tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with catalogue-supplied lookup tables.
    pub fn with_config(config: NotationConfig) -> Self {
        Self { config }
    }

    /// The lookup tables this parser dispatches with.
    pub fn config(&self) -> &NotationConfig {
        &self.config
    }

    /// Parse one raw findings cell.
    ///
    /// Output order is stable: left-to-right over `+`-separated tag items,
    /// then left-to-right over `&`-separated sub-findings within an item.
    /// An empty or whitespace-only cell yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`FindingTagDataError`] on the first malformed item; nothing
    /// is recovered within the cell. The caller logs the offending text and
    /// decides what to do with the row.
    pub fn parse(&self, raw: &str) -> NotationResult<Vec<Finding>> {
        let mut findings = Vec::new();
        for item in scan::split_items(raw) {
            let tag_code = TagCode::new(&item.head)
                .map_err(|_| FindingTagDataError::EmptyTagCode(item.raw.clone()))?;
            let family = self.config.family_of(tag_code.code());
            for text in scan::split_subfindings(&item.body) {
                findings.push(self.decode(family, &tag_code, text)?);
            }
        }
        Ok(findings)
    }

    /// Decode one sub-finding text with the decoder its family selects.
    fn decode(&self, family: Family, tag_code: &TagCode, text: &str) -> NotationResult<Finding> {
        let base = decode_base(text);
        let detail = match family {
            Family::Spatial => FindingDetail::Spatial {
                area: self.resolve_area(tag_code, &base.residual),
            },
            Family::Temporal => FindingDetail::Temporal {
                span: convert_span(span::split_span(&base.residual))?,
            },
            Family::Frequency => decode_frequency(&base.residual)?,
            Family::Generic => FindingDetail::Generic,
        };
        Ok(Finding {
            is_relevant: tag_code.is_relevant(),
            tag_code: tag_code.clone(),
            comment: none_if_empty(base.comment),
            technique: base.technique.and_then(none_if_empty),
            detail,
        })
    }

    /// Resolve the spatial area: the tag→area table wins over the body's
    /// free text.
    fn resolve_area(&self, tag_code: &TagCode, residual: &str) -> String {
        match self.config.area_for(tag_code.code()) {
            Some(area) => area.to_owned(),
            None => residual.trim().to_owned(),
        }
    }
}

/// Base finding decoding shared by every family: comment off the first
/// `#`, technique off the last non-temporal `<...>` bracket.
fn decode_base(text: &str) -> BaseParts {
    let (residual, comment) = scan::split_comment(text);
    let (residual, technique) = scan::split_technique(residual);
    BaseParts {
        residual: residual.to_owned(),
        comment,
        technique,
    }
}

/// Convert raw span tokens to numbers.
fn convert_span(raw: RawSpan) -> NotationResult<TemporalSpan> {
    Ok(TemporalSpan {
        onset: raw.onset.as_deref().map(scan::decimal).transpose()?,
        offset: raw.offset.as_deref().map(scan::decimal).transpose()?,
    })
}

/// Decode a frequency body: `ANALYSIS [Neg] LOW-HIGHHz [<ONSET-OFFSETms>]`.
fn decode_frequency(residual: &str) -> NotationResult<FindingDetail> {
    let flattened = residual.replace('<', " ");
    let tokens: Vec<&str> = flattened.split_whitespace().collect();

    let analysis_token = tokens
        .first()
        .ok_or_else(|| FindingTagDataError::UnknownAnalysisType(residual.trim().to_owned()))?;
    let analysis: AnalysisType = analysis_token.parse()?;

    // The direction token is optional, so it shifts the band's position.
    let (direction, band_index) = if tokens.contains(&"Neg") {
        (Direction::Negative, 2)
    } else {
        (Direction::Positive, 1)
    };

    let band_token = tokens
        .get(band_index)
        .ok_or_else(|| FindingTagDataError::MissingBand(residual.trim().to_owned()))?;
    let band = band_token.replace("Hz", "");
    let mut bounds = band.split('-');
    let band_low = scan::decimal(bounds.next().unwrap_or_default())?;
    let band_high = match bounds.next() {
        Some(bound) => scan::decimal(bound)?,
        None => band_low,
    };

    // The time window, unlike the band, is optional here.
    let span = match residual.rsplit_once('<') {
        Some((_, tail)) => convert_span(span::split_span(tail))?,
        None => TemporalSpan::default(),
    };

    Ok(FindingDetail::Frequency {
        analysis,
        direction,
        band_low,
        band_high,
        span,
    })
}

fn none_if_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
