//! Validated free-text values supplied by staff during registration.

/// Errors that can occur when creating validated text types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextError {
    /// The input was empty or contained only whitespace.
    #[error("name cannot be empty")]
    Empty,
    /// The input exceeded the allowed number of characters.
    #[error("name exceeds maximum length of {max} characters")]
    TooLong { max: usize },
    /// The input contained control characters.
    #[error("name contains control characters")]
    ControlCharacters,
}

/// A staff member's display name.
///
/// Leading and trailing whitespace is removed and internal runs of whitespace are collapsed to
/// a single space, so `"  Jane   Doe "` becomes `"Jane Doe"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Longest accepted name, counted in characters after normalisation.
    pub const MAX_CHARS: usize = 120;

    /// Normalises and validates `input`.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::Empty`] for blank input, [`TextError::ControlCharacters`] if any
    /// non-whitespace control character is present and [`TextError::TooLong`] if the
    /// normalised name is longer than [`PersonName::MAX_CHARS`].
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let input = input.as_ref();
        if input.chars().any(|c| c.is_control() && !c.is_whitespace()) {
            return Err(TextError::ControlCharacters);
        }

        let normalised = input.split_whitespace().collect::<Vec<_>>().join(" ");
        if normalised.is_empty() {
            return Err(TextError::Empty);
        }
        if normalised.chars().count() > Self::MAX_CHARS {
            return Err(TextError::TooLong {
                max: Self::MAX_CHARS,
            });
        }

        Ok(Self(normalised))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PersonName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for PersonName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for PersonName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        PersonName::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_internal_whitespace() {
        let name = PersonName::new("  Jane \t  Doe  ").expect("valid name");
        assert_eq!(name.as_str(), "Jane Doe");
    }

    #[test]
    fn rejects_blank_input() {
        assert_eq!(PersonName::new("   "), Err(TextError::Empty));
        assert_eq!(PersonName::new(""), Err(TextError::Empty));
    }

    #[test]
    fn rejects_control_characters() {
        assert_eq!(
            PersonName::new("Jane\u{0007}Doe"),
            Err(TextError::ControlCharacters)
        );
    }

    #[test]
    fn rejects_overlong_names() {
        let long = "a".repeat(PersonName::MAX_CHARS + 1);
        assert_eq!(
            PersonName::new(long),
            Err(TextError::TooLong {
                max: PersonName::MAX_CHARS
            })
        );
        assert!(PersonName::new("a".repeat(PersonName::MAX_CHARS)).is_ok());
    }

    #[test]
    fn deserialize_normalises() {
        let name: PersonName = serde_json::from_str("\" Dr  Ada Lovelace \"").expect("valid");
        assert_eq!(name.to_string(), "Dr Ada Lovelace");
        assert!(serde_json::from_str::<PersonName>("\"  \"").is_err());
    }
}
