//! Temporal span decoding.
//!
//! A time expression reads `ONSET-OFFSETms`, with `!` marking a negative
//! time and `~` marking approximation (discarded). The `-` character is
//! overloaded: it separates onset from offset *and*, after the `!` → `-`
//! substitution, signs a negative number. The splitter here resolves that
//! by treating a `-` at the start of a token as a sign and only splitting
//! on a `-` that follows token content, so `!50-!20` decodes to −50/−20.

/// Raw onset/offset tokens cut out of a time expression, before numeric
/// conversion. Conversion (and the resulting error) belongs to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RawSpan {
    pub onset: Option<String>,
    pub offset: Option<String>,
}

/// Decode a time expression into raw onset/offset tokens.
///
/// An empty onset token means the time was unspecified: both sides come
/// back `None`. A single token fills both sides. The expression may be a
/// whole bracketed window (`<100-200ms>`), so both bracket characters are
/// stripped from the tokens.
pub(crate) fn split_span(text: &str) -> RawSpan {
    let cleaned = text.replace("ms", "").replace('!', "-").replace('~', "");
    let mut tokens = split_signed(&cleaned)
        .into_iter()
        .map(|token| {
            token
                .trim()
                .trim_start_matches('<')
                .trim_end_matches('>')
                .trim()
                .to_owned()
        });

    let Some(onset) = tokens.next() else {
        return RawSpan::default();
    };
    if onset.is_empty() {
        return RawSpan::default();
    }
    let offset = match tokens.next() {
        Some(token) => token,
        None => onset.clone(),
    };
    RawSpan {
        onset: Some(onset),
        offset: Some(offset),
    }
}

/// Split on `-` used as a separator, not as a sign.
///
/// A `-` only splits when the current token already has content; at the
/// start of a token it prefixes the number that follows.
fn split_signed(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    for (i, c) in text.char_indices() {
        if c == '-' && i > start {
            tokens.push(&text[start..i]);
            start = i + 1;
        }
    }
    tokens.push(&text[start..]);
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(onset: &str, offset: &str) -> RawSpan {
        RawSpan {
            onset: Some(onset.to_owned()),
            offset: Some(offset.to_owned()),
        }
    }

    #[test]
    fn decodes_plain_window() {
        assert_eq!(split_span("100-200"), span("100", "200"));
    }

    #[test]
    fn removes_ms_and_trailing_bracket() {
        assert_eq!(split_span("340-420ms>"), span("340", "420"));
    }

    // A temporal body can be one fully bracketed window; the brackets must
    // not leak into the tokens.
    #[test]
    fn fully_bracketed_window_drops_both_brackets() {
        assert_eq!(split_span("<100-200ms>"), span("100", "200"));
    }

    #[test]
    fn single_value_fills_both_sides() {
        assert_eq!(split_span("250ms"), span("250", "250"));
    }

    #[test]
    fn negative_timing_marker_becomes_sign() {
        assert_eq!(split_span("!10-550ms"), span("-10", "550"));
    }

    // The doubly-signed range is ambiguous in the notation; this fixture
    // pins the chosen reading.
    #[test]
    fn doubly_signed_range_keeps_both_signs() {
        assert_eq!(split_span("!50-!20"), span("-50", "-20"));
    }

    #[test]
    fn approximation_marker_is_discarded() {
        assert_eq!(split_span("~300-550ms"), span("300", "550"));
    }

    #[test]
    fn empty_expression_is_unspecified() {
        assert_eq!(split_span(""), RawSpan::default());
        assert_eq!(split_span("  "), RawSpan::default());
        assert_eq!(split_span("ms"), RawSpan::default());
    }
}
