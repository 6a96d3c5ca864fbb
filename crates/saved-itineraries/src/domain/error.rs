//! Errors surfaced by saved-itinerary mutations.

use thiserror::Error;

use super::ports::KeyValueStoreError;
use super::{CollectionDecodeError, SavedItineraryValidationError};

/// Failures of `save`, `remove` and `clear`.
///
/// [`SavedItineraryError::Duplicate`] is kept apart from storage failures so
/// callers can show an "already saved" message instead of a retry prompt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SavedItineraryError {
    /// The trip already has a saved itinerary.
    #[error("trip '{trip_id}' is already saved")]
    Duplicate {
        /// Trip that was saved before.
        trip_id: String,
    },
    /// The draft failed validation.
    #[error("invalid saved itinerary: {0}")]
    Validation(#[from] SavedItineraryValidationError),
    /// The underlying key-value store failed.
    #[error("saved itinerary storage failed: {0}")]
    Storage(#[from] KeyValueStoreError),
    /// The stored blob could not be decoded, so it was not overwritten.
    #[error("saved itinerary blob is unreadable: {0}")]
    Corrupt(#[from] CollectionDecodeError),
    /// The collection could not be encoded for writing.
    #[error("failed to encode saved itineraries: {message}")]
    Encode {
        /// Serializer error message.
        message: String,
    },
}

impl SavedItineraryError {
    /// Whether the failure is a duplicate save.
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(
        SavedItineraryError::Duplicate { trip_id: "trip-3".to_owned() },
        "trip 'trip-3' is already saved"
    )]
    #[case(
        SavedItineraryError::Storage(KeyValueStoreError::write("disk full")),
        "saved itinerary storage failed: key-value store write failed: disk full"
    )]
    #[case(
        SavedItineraryError::Validation(SavedItineraryValidationError::EmptyTripId),
        "invalid saved itinerary: trip id must not be empty"
    )]
    #[case(
        SavedItineraryError::Corrupt(CollectionDecodeError::UnsupportedVersion { expected: 2, actual: 9 }),
        "saved itinerary blob is unreadable: unsupported saved-itinerary schema: expected at most 2, found 9"
    )]
    fn formats_messages(#[case] error: SavedItineraryError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn only_duplicates_report_is_duplicate() {
        assert!(
            SavedItineraryError::Duplicate {
                trip_id: "t".to_owned()
            }
            .is_duplicate()
        );
        assert!(!SavedItineraryError::Storage(KeyValueStoreError::read("eio")).is_duplicate());
    }
}
