//! Logical key under which the saved-itinerary blob is stored.
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Key used when the caller does not configure one.
pub const DEFAULT_STORAGE_KEY: &str = "saved_itineraries";

/// Validated key for a key-value store entry.
///
/// Keys double as file names in the directory-backed adapter, so only ASCII
/// alphanumerics, `-`, `_` and `.` are accepted and a leading `.` is refused.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    /// Construct a key after validating its characters.
    ///
    /// # Errors
    ///
    /// Returns [`StorageKeyValidationError`] for blank, padded, hidden or
    /// otherwise unsafe keys.
    pub fn new(value: impl Into<String>) -> Result<Self, StorageKeyValidationError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(StorageKeyValidationError::Empty);
        }
        if raw.trim() != raw {
            return Err(StorageKeyValidationError::ContainsWhitespace);
        }
        if raw.starts_with('.') {
            return Err(StorageKeyValidationError::LeadingDot);
        }
        if let Some(character) = raw
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        {
            return Err(StorageKeyValidationError::InvalidCharacter { character });
        }
        Ok(Self(raw))
    }

    /// Borrow the underlying key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StorageKey {
    fn default() -> Self {
        Self(DEFAULT_STORAGE_KEY.to_owned())
    }
}

impl FromStr for StorageKey {
    type Err = StorageKeyValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Validation errors returned when constructing [`StorageKey`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageKeyValidationError {
    /// Key is empty after trimming whitespace.
    #[error("storage key must not be empty")]
    Empty,
    /// Key contains leading or trailing whitespace.
    #[error("storage key must not contain surrounding whitespace")]
    ContainsWhitespace,
    /// Key would name a hidden file.
    #[error("storage key must not start with '.'")]
    LeadingDot,
    /// Key contains a character outside the accepted set.
    #[error("storage key contains unsupported character '{character}'")]
    InvalidCharacter {
        /// First offending character.
        character: char,
    },
}

#[cfg(test)]
mod tests {
    //! Validates storage key parsing.
    use super::{DEFAULT_STORAGE_KEY, StorageKey, StorageKeyValidationError};
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn rejects_blank(#[case] value: &str) {
        let err = StorageKey::new(value).expect_err("blank keys rejected");
        assert_eq!(err, StorageKeyValidationError::Empty);
    }

    #[rstest]
    #[case(" leading")]
    #[case("trailing ")]
    fn rejects_whitespace_padding(#[case] value: &str) {
        let err = StorageKey::new(value).expect_err("padded key rejected");
        assert_eq!(err, StorageKeyValidationError::ContainsWhitespace);
    }

    #[rstest]
    #[case("../escape", StorageKeyValidationError::LeadingDot)]
    #[case("nested/key", StorageKeyValidationError::InvalidCharacter { character: '/' })]
    #[case("with space", StorageKeyValidationError::InvalidCharacter { character: ' ' })]
    fn rejects_path_like_keys(#[case] value: &str, #[case] expected: StorageKeyValidationError) {
        let err = StorageKey::new(value).expect_err("unsafe key rejected");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn accepts_clean_input() {
        let key: StorageKey = "saved_itineraries.v2".parse().expect("valid key");
        assert_eq!(key.as_str(), "saved_itineraries.v2");
        assert_eq!(key.to_string(), "saved_itineraries.v2");
    }

    #[rstest]
    fn default_key_is_valid() {
        let key = StorageKey::default();
        assert_eq!(StorageKey::new(DEFAULT_STORAGE_KEY), Ok(key));
    }
}
