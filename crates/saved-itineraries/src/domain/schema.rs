//! Versioned JSON layout of the persisted saved-itinerary blob.
//!
//! Version 1 is the legacy layout: a bare JSON array of records. Version 2
//! wraps the records in an envelope carrying the schema version and a
//! monotonic collection revision. Version 1 blobs are migrated on read and
//! rewritten as version 2 by the next mutation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::SavedItinerary;

/// Schema version written by this crate.
pub const CURRENT_SCHEMA_VERSION: u32 = 2;

const LEGACY_SCHEMA_VERSION: u32 = 1;

/// Errors raised when a stored blob cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionDecodeError {
    /// The blob is not valid JSON or does not match either layout.
    #[error("malformed saved-itinerary blob: {message}")]
    Malformed {
        /// Parser error message.
        message: String,
    },
    /// The blob was written by a newer schema.
    #[error("unsupported saved-itinerary schema: expected at most {expected}, found {actual}")]
    UnsupportedVersion {
        /// Newest version this crate understands.
        expected: u32,
        /// Version found in the blob.
        actual: u32,
    },
}

/// The decoded collection together with its bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCollection {
    /// Revision stamped by the last write; `0` for empty or legacy blobs.
    pub revision: u64,
    /// Records in storage order.
    pub itineraries: Vec<SavedItinerary>,
    /// Version the blob was read as.
    pub source_version: u32,
}

impl StoredCollection {
    /// Collection used when nothing has been stored yet.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            revision: 0,
            itineraries: Vec::new(),
            source_version: CURRENT_SCHEMA_VERSION,
        }
    }

    /// Whether the blob was read through the legacy migration path.
    #[must_use]
    pub const fn was_migrated(&self) -> bool {
        self.source_version < CURRENT_SCHEMA_VERSION
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EnvelopeRef<'a> {
    schema_version: u32,
    revision: u64,
    itineraries: &'a [SavedItinerary],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEnvelope {
    schema_version: u32,
    #[serde(default)]
    revision: u64,
    #[serde(default)]
    itineraries: Vec<SavedItinerary>,
}

fn malformed(err: &serde_json::Error) -> CollectionDecodeError {
    CollectionDecodeError::Malformed {
        message: err.to_string(),
    }
}

/// Decode a stored blob, migrating the legacy layout when needed.
///
/// # Errors
///
/// Returns [`CollectionDecodeError`] when the text is not a recognised
/// layout or was written by a newer schema version.
pub fn decode_collection(text: &str) -> Result<StoredCollection, CollectionDecodeError> {
    let value: Value = serde_json::from_str(text).map_err(|err| malformed(&err))?;
    match value {
        Value::Array(_) => migrate_legacy(value),
        Value::Object(_) => decode_envelope(value),
        other => Err(CollectionDecodeError::Malformed {
            message: format!("expected an array or object, found {other}"),
        }),
    }
}

fn migrate_legacy(value: Value) -> Result<StoredCollection, CollectionDecodeError> {
    let itineraries: Vec<SavedItinerary> =
        serde_json::from_value(value).map_err(|err| malformed(&err))?;
    Ok(StoredCollection {
        revision: 0,
        itineraries,
        source_version: LEGACY_SCHEMA_VERSION,
    })
}

fn decode_envelope(value: Value) -> Result<StoredCollection, CollectionDecodeError> {
    let raw: RawEnvelope = serde_json::from_value(value).map_err(|err| malformed(&err))?;
    if raw.schema_version > CURRENT_SCHEMA_VERSION {
        return Err(CollectionDecodeError::UnsupportedVersion {
            expected: CURRENT_SCHEMA_VERSION,
            actual: raw.schema_version,
        });
    }
    Ok(StoredCollection {
        revision: raw.revision,
        itineraries: raw.itineraries,
        source_version: raw.schema_version,
    })
}

/// Encode records as a current-version blob stamped with `revision`.
///
/// # Errors
///
/// Returns the serializer error if a record cannot be encoded.
pub fn encode_collection(
    itineraries: &[SavedItinerary],
    revision: u64,
) -> Result<String, serde_json::Error> {
    serde_json::to_string(&EnvelopeRef {
        schema_version: CURRENT_SCHEMA_VERSION,
        revision,
        itineraries,
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const LEGACY_BLOB: &str = r#"[
        {
            "id": "saved_1700000000000",
            "tripId": "post-17",
            "destination": "Marrakech",
            "duration": "4 jours",
            "budget": "600€",
            "highlights": ["Jemaa el-Fna", "Jardin Majorelle"],
            "steps": [{"id": "s1", "title": "Médina", "order": 1}],
            "savedAt": "2026-01-05T10:00:00.000Z",
            "authorName": "Yasmine",
            "tags": ["Culture"]
        }
    ]"#;

    #[rstest]
    fn migrates_legacy_array() {
        let collection = decode_collection(LEGACY_BLOB).expect("legacy blob decodes");

        assert!(collection.was_migrated());
        assert_eq!(collection.revision, 0);
        assert_eq!(collection.itineraries.len(), 1);
        let first = collection.itineraries.first().expect("one record");
        assert_eq!(first.trip_id(), "post-17");
        assert_eq!(first.steps().len(), 1);
    }

    #[rstest]
    fn encoded_blob_carries_version_and_revision() {
        let legacy = decode_collection(LEGACY_BLOB).expect("legacy blob decodes");

        let text = encode_collection(&legacy.itineraries, 7).expect("encode");
        let value: Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(value["schemaVersion"], CURRENT_SCHEMA_VERSION);
        assert_eq!(value["revision"], 7);

        let decoded = decode_collection(&text).expect("current blob decodes");
        assert!(!decoded.was_migrated());
        assert_eq!(decoded.revision, 7);
        assert_eq!(decoded.itineraries, legacy.itineraries);
    }

    #[rstest]
    #[case::not_json("{oops")]
    #[case::scalar("42")]
    #[case::wrong_record_shape(r#"[{"tripId": 5}]"#)]
    #[case::missing_version(r#"{"itineraries": []}"#)]
    fn rejects_malformed_blobs(#[case] text: &str) {
        let result = decode_collection(text);
        assert!(matches!(result, Err(CollectionDecodeError::Malformed { .. })));
    }

    #[rstest]
    fn rejects_newer_schema() {
        let result = decode_collection(r#"{"schemaVersion": 3, "itineraries": []}"#);
        assert_eq!(
            result,
            Err(CollectionDecodeError::UnsupportedVersion {
                expected: 2,
                actual: 3
            })
        );
    }
}
