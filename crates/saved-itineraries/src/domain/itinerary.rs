//! Saved itinerary entities and save-time validation.
//!
//! A [`SavedItinerary`] is created exactly once from a [`SavedItineraryDraft`]
//! and is never mutated afterwards. Author and cover metadata are captured at
//! save time and not refreshed.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Number of tags shown on list cards.
pub const DISPLAY_TAG_LIMIT: usize = 3;

fn generate_itinerary_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// One stop or activity inside an itinerary.
///
/// `order` reflects the itinerary sequence and is not required to match the
/// step's index in [`SavedItinerary::steps`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryStep {
    /// Step identifier, unique within its itinerary.
    pub id: String,
    /// Short step title.
    pub title: String,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional display duration, e.g. "2h".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Optional location label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Position in the itinerary sequence.
    pub order: u32,
}

/// Input payload for [`SavedItinerary::from_draft`].
///
/// This is a saved itinerary without its `savedAt` stamp. When deserialized
/// without an `id`, a fresh UUID is generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedItineraryDraft {
    /// Record identifier.
    #[serde(default = "generate_itinerary_id")]
    pub id: String,
    /// Originating trip or post.
    pub trip_id: String,
    /// Destination label.
    pub destination: String,
    /// Display duration, e.g. "5 jours".
    #[serde(default)]
    pub duration: String,
    /// Display budget, e.g. "800€".
    #[serde(default)]
    pub budget: String,
    /// Optional difficulty label.
    #[serde(default)]
    pub difficulty: Option<String>,
    /// Optional best travel period.
    #[serde(default)]
    pub best_time: Option<String>,
    /// Highlights in insertion order.
    #[serde(default)]
    pub highlights: Vec<String>,
    /// Itinerary steps.
    #[serde(default)]
    pub steps: Vec<ItineraryStep>,
    /// Author display name at save time.
    #[serde(default)]
    pub author_name: String,
    /// Author avatar URL at save time.
    #[serde(default)]
    pub author_avatar: Option<String>,
    /// Cover image URL at save time.
    #[serde(default)]
    pub cover_image: Option<String>,
    /// Free-text labels.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl SavedItineraryDraft {
    /// Creates a draft with the required fields and empty display metadata.
    ///
    /// # Examples
    ///
    /// ```
    /// use saved_itineraries::domain::SavedItineraryDraft;
    ///
    /// let draft = SavedItineraryDraft::new("saved-1", "trip-1", "Kyoto");
    /// assert!(draft.tags.is_empty());
    /// ```
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        trip_id: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            trip_id: trip_id.into(),
            destination: destination.into(),
            duration: String::new(),
            budget: String::new(),
            difficulty: None,
            best_time: None,
            highlights: Vec::new(),
            steps: Vec::new(),
            author_name: String::new(),
            author_avatar: None,
            cover_image: None,
            tags: Vec::new(),
        }
    }
}

/// Validation errors raised when turning a draft into a saved itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SavedItineraryValidationError {
    /// The record id is blank.
    #[error("saved itinerary id must not be empty")]
    EmptyId,
    /// The trip id is blank.
    #[error("trip id must not be empty")]
    EmptyTripId,
    /// Two steps share the same id.
    #[error("step id '{step_id}' appears more than once")]
    DuplicateStepId {
        /// Repeated step id.
        step_id: String,
    },
}

/// A locally bookmarked copy of a shared trip itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedItinerary {
    id: String,
    trip_id: String,
    destination: String,
    #[serde(default)]
    duration: String,
    #[serde(default)]
    budget: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    best_time: Option<String>,
    #[serde(default)]
    highlights: Vec<String>,
    #[serde(default)]
    steps: Vec<ItineraryStep>,
    saved_at: DateTime<Utc>,
    #[serde(default)]
    author_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    author_avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cover_image: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

impl SavedItinerary {
    /// Validates a draft and stamps it with `saved_at`.
    ///
    /// # Errors
    ///
    /// Returns [`SavedItineraryValidationError`] when an id is blank or step
    /// ids repeat.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use saved_itineraries::domain::{SavedItinerary, SavedItineraryDraft};
    ///
    /// let now = Utc::now();
    /// let draft = SavedItineraryDraft::new("saved-1", "trip-1", "Kyoto");
    /// let saved = SavedItinerary::from_draft(draft, now).expect("valid draft");
    /// assert_eq!(saved.saved_at(), now);
    /// ```
    pub fn from_draft(
        draft: SavedItineraryDraft,
        saved_at: DateTime<Utc>,
    ) -> Result<Self, SavedItineraryValidationError> {
        if draft.id.trim().is_empty() {
            return Err(SavedItineraryValidationError::EmptyId);
        }
        if draft.trip_id.trim().is_empty() {
            return Err(SavedItineraryValidationError::EmptyTripId);
        }
        validate_unique_step_ids(&draft.steps)?;

        Ok(Self {
            id: draft.id,
            trip_id: draft.trip_id,
            destination: draft.destination,
            duration: draft.duration,
            budget: draft.budget,
            difficulty: draft.difficulty,
            best_time: draft.best_time,
            highlights: draft.highlights,
            steps: draft.steps,
            saved_at,
            author_name: draft.author_name,
            author_avatar: draft.author_avatar,
            cover_image: draft.cover_image,
            tags: draft.tags,
        })
    }

    /// Returns the record id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the originating trip id.
    #[must_use]
    pub fn trip_id(&self) -> &str {
        &self.trip_id
    }

    /// Returns the destination label.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Returns the display duration.
    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    /// Returns the display budget.
    #[must_use]
    pub fn budget(&self) -> &str {
        &self.budget
    }

    /// Returns the difficulty label, if any.
    #[must_use]
    pub fn difficulty(&self) -> Option<&str> {
        self.difficulty.as_deref()
    }

    /// Returns the best travel period, if any.
    #[must_use]
    pub fn best_time(&self) -> Option<&str> {
        self.best_time.as_deref()
    }

    /// Returns highlights in insertion order.
    #[must_use]
    pub fn highlights(&self) -> &[String] {
        self.highlights.as_slice()
    }

    /// Returns steps in stored order.
    #[must_use]
    pub fn steps(&self) -> &[ItineraryStep] {
        self.steps.as_slice()
    }

    /// Returns steps sorted by their sequence number.
    ///
    /// Steps sharing an `order` keep their stored relative position.
    #[must_use]
    pub fn steps_in_order(&self) -> Vec<&ItineraryStep> {
        let mut ordered: Vec<&ItineraryStep> = self.steps.iter().collect();
        ordered.sort_by_key(|step| step.order);
        ordered
    }

    /// Returns when the itinerary was saved.
    #[must_use]
    pub const fn saved_at(&self) -> DateTime<Utc> {
        self.saved_at
    }

    /// Returns the author name captured at save time.
    #[must_use]
    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    /// Returns the author avatar captured at save time.
    #[must_use]
    pub fn author_avatar(&self) -> Option<&str> {
        self.author_avatar.as_deref()
    }

    /// Returns the cover image captured at save time.
    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.cover_image.as_deref()
    }

    /// Returns all tags.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        self.tags.as_slice()
    }

    /// Returns the tags shown on a list card.
    #[must_use]
    pub fn display_tags(&self) -> &[String] {
        let end = self.tags.len().min(DISPLAY_TAG_LIMIT);
        self.tags.get(..end).unwrap_or_default()
    }
}

fn validate_unique_step_ids(steps: &[ItineraryStep]) -> Result<(), SavedItineraryValidationError> {
    let mut seen = HashSet::new();
    for step in steps {
        if !seen.insert(step.id.as_str()) {
            return Err(SavedItineraryValidationError::DuplicateStepId {
                step_id: step.id.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    //! Draft validation and serialisation contract.

    use chrono::TimeZone;
    use rstest::rstest;

    use super::*;

    fn saved_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0)
            .single()
            .expect("valid fixture timestamp")
    }

    fn step(id: &str, order: u32) -> ItineraryStep {
        ItineraryStep {
            id: id.to_owned(),
            title: format!("Étape {id}"),
            description: None,
            duration: None,
            location: None,
            order,
        }
    }

    #[rstest]
    #[case::blank_id("  ", "trip-1", SavedItineraryValidationError::EmptyId)]
    #[case::blank_trip("saved-1", "", SavedItineraryValidationError::EmptyTripId)]
    fn rejects_blank_identifiers(
        #[case] id: &str,
        #[case] trip_id: &str,
        #[case] expected: SavedItineraryValidationError,
    ) {
        let draft = SavedItineraryDraft::new(id, trip_id, "Porto");
        let err = SavedItinerary::from_draft(draft, saved_at()).expect_err("invalid draft");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn rejects_repeated_step_ids() {
        let mut draft = SavedItineraryDraft::new("saved-1", "trip-1", "Porto");
        draft.steps = vec![step("a", 1), step("a", 2)];

        let err = SavedItinerary::from_draft(draft, saved_at()).expect_err("duplicate step");
        assert_eq!(
            err,
            SavedItineraryValidationError::DuplicateStepId {
                step_id: "a".to_owned()
            }
        );
    }

    #[rstest]
    fn steps_in_order_sorts_by_sequence_not_index() {
        let mut draft = SavedItineraryDraft::new("saved-1", "trip-1", "Porto");
        draft.steps = vec![step("c", 3), step("a", 1), step("b", 2)];
        let saved = SavedItinerary::from_draft(draft, saved_at()).expect("valid draft");

        let ids: Vec<&str> = saved
            .steps_in_order()
            .into_iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(saved.steps().first().map(|s| s.id.as_str()), Some("c"));
    }

    #[rstest]
    #[case(&[], 0)]
    #[case(&["Culture", "Plage"], 2)]
    #[case(&["Culture", "Plage", "Gastronomie", "Randonnée"], 3)]
    fn display_tags_truncates_to_three(#[case] tags: &[&str], #[case] expected: usize) {
        let mut draft = SavedItineraryDraft::new("saved-1", "trip-1", "Porto");
        draft.tags = tags.iter().map(|t| (*t).to_owned()).collect();
        let saved = SavedItinerary::from_draft(draft, saved_at()).expect("valid draft");

        assert_eq!(saved.display_tags().len(), expected);
        assert!(saved.display_tags().iter().zip(tags).all(|(a, b)| a == b));
    }

    #[rstest]
    fn serialises_with_camel_case_keys() {
        let mut draft = SavedItineraryDraft::new("saved-1", "trip-1", "Porto");
        draft.best_time = Some("Printemps".to_owned());
        draft.author_name = "Inès".to_owned();
        let saved = SavedItinerary::from_draft(draft, saved_at()).expect("valid draft");

        let json = serde_json::to_value(&saved).expect("serialise");
        assert_eq!(json["tripId"], "trip-1");
        assert_eq!(json["bestTime"], "Printemps");
        assert_eq!(json["authorName"], "Inès");
        assert_eq!(json["savedAt"], "2026-03-14T09:00:00Z");
        assert!(json.get("trip_id").is_none());
        assert!(json.get("coverImage").is_none());
    }

    #[rstest]
    fn draft_without_id_receives_generated_id() {
        let draft: SavedItineraryDraft =
            serde_json::from_str(r#"{"tripId": "trip-9", "destination": "Oslo"}"#)
                .expect("parse draft");

        assert_eq!(draft.id.len(), 32);
        assert_eq!(draft.trip_id, "trip-9");
        assert!(draft.highlights.is_empty());
    }
}
