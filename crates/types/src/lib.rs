/// Errors that can occur when creating validated tag tokens.
#[derive(Debug, thiserror::Error)]
pub enum TagCodeError {
    /// The input token was empty or contained only whitespace
    #[error("Tag code cannot be empty")]
    Empty,
}

/// A finding-tag token as written by a curator, e.g. `"5"` or `"-3"`.
///
/// This type wraps a `String` and ensures it contains at least one
/// non-whitespace character. All whitespace is removed during construction
/// (curators occasionally space out the token, `"- 3"`). The leading `-`,
/// the negation sign of the notation, is kept as part of the token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagCode(String);

impl TagCode {
    /// Creates a new `TagCode` from the given input.
    ///
    /// Whitespace is removed from the input. If nothing remains, an error
    /// is returned.
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted to a string reference
    ///
    /// # Returns
    ///
    /// Returns `Ok(TagCode)` if the input contains non-whitespace content,
    /// or `Err(TagCodeError::Empty)` otherwise.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TagCodeError> {
        let cleaned: String = input
            .as_ref()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if cleaned.is_empty() {
            return Err(TagCodeError::Empty);
        }
        Ok(Self(cleaned))
    }

    /// Returns the full token, including the negation sign when present.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the token with the leading negation sign stripped.
    ///
    /// This is the form used for family and area lookups; the same decoder
    /// handles a tag whether or not it is negated.
    pub fn code(&self) -> &str {
        self.0.strip_prefix('-').unwrap_or(&self.0)
    }

    /// Whether the finding is directly relevant to the outcome of interest.
    ///
    /// True unless the token carries the leading negation sign.
    pub fn is_relevant(&self) -> bool {
        !self.0.starts_with('-')
    }
}

impl std::fmt::Display for TagCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TagCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for TagCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for TagCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        TagCode::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_negation_sign_and_strips_spaces() {
        let code = TagCode::new("- 3").expect("valid code");
        assert_eq!(code.as_str(), "-3");
        assert_eq!(code.code(), "3");
        assert!(!code.is_relevant());
    }

    #[test]
    fn unsigned_code_is_relevant() {
        let code = TagCode::new("5").expect("valid code");
        assert_eq!(code.code(), "5");
        assert!(code.is_relevant());
    }

    #[test]
    fn rejects_empty_and_whitespace_only() {
        assert!(matches!(TagCode::new(""), Err(TagCodeError::Empty)));
        assert!(matches!(TagCode::new("   "), Err(TagCodeError::Empty)));
    }
}
