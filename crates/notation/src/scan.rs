//! Low-level scanners over a raw findings cell.
//!
//! Each tie-break rule of the notation lives here as one named function:
//! items split on `+`, sub-findings on `&`, the comment on the *first* `#`,
//! the technique on the *last* `<` (unless the bracket is temporal). The
//! scanners never fail; malformed tag codes surface later, at dispatch.

use crate::FindingTagDataError;

/// One `tag (body)` item cut out of a cell, before dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawItem {
    /// The trimmed item text, kept for error payloads.
    pub raw: String,
    /// Everything before the first `(`; may be empty on malformed input.
    pub head: String,
    /// Everything between the parentheses, trimmed.
    pub body: String,
}

/// Split a cell on `+` into tag items.
///
/// Items without a `(` get an empty body. The body drops its final
/// character, assumed to be the closing `)`; input missing the close paren
/// is an accepted edge case and loses its last character instead.
pub(crate) fn split_items(raw: &str) -> Vec<RawItem> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split('+')
        .map(|item| {
            let item = item.trim();
            let (head, tail) = item.split_once('(').unwrap_or((item, ")"));
            let mut body = tail.to_owned();
            body.pop();
            RawItem {
                raw: item.to_owned(),
                head: head.to_owned(),
                body: body.trim().to_owned(),
            }
        })
        .collect()
}

/// Split an item body on `&` into trimmed sub-finding texts.
///
/// An empty body is a single empty sub-finding (the tag alone is still a
/// finding); pieces of a non-empty body that trim to nothing are dropped,
/// so a trailing `&` does not produce a phantom finding.
pub(crate) fn split_subfindings(body: &str) -> Vec<&str> {
    if body.is_empty() {
        return vec![""];
    }
    body.split('&')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Split off the comment at the first `#`.
///
/// With no `#`, the whole body doubles as its own comment; the residual is
/// returned unchanged either way so the caller keeps decoding it.
pub(crate) fn split_comment(text: &str) -> (&str, String) {
    match text.split_once('#') {
        Some((residual, comment)) => (residual, comment.trim().to_owned()),
        None => (text, text.to_owned()),
    }
}

/// Split off a technique annotation at the last `<`, if that bracket is not
/// temporal.
///
/// The technique bracket, when present, is always the last one, but a
/// nested temporal bracket can also be last. A tail containing `ms` is
/// temporal and is left in place.
pub(crate) fn split_technique(residual: &str) -> (&str, Option<String>) {
    let Some((before, tail)) = residual.rsplit_once('<') else {
        return (residual, None);
    };
    if tail.contains("ms") {
        return (residual, None);
    }
    let technique = tail.trim_end().trim_end_matches('>').trim().to_owned();
    (before.trim(), Some(technique))
}

/// Parse a decimal token, stripping thousands-separator commas.
pub(crate) fn decimal(token: &str) -> Result<f64, FindingTagDataError> {
    token
        .replace(',', "")
        .trim()
        .parse::<f64>()
        .map_err(|_| FindingTagDataError::InvalidNumber(token.to_owned()))
}
