//! Driving port for saved-itinerary mutations.
//!
//! Screens that bookmark or un-bookmark a trip depend on this trait rather
//! than on a concrete store, so tests can swap in doubles.

use async_trait::async_trait;

use crate::domain::{SavedItinerary, SavedItineraryDraft, SavedItineraryError};

/// Mutating operations over the saved-itinerary collection.
#[async_trait]
pub trait SavedItinerariesCommand: Send + Sync {
    /// Save a new itinerary, stamping `savedAt` with the current time.
    ///
    /// Fails with [`SavedItineraryError::Duplicate`] when the trip is already
    /// saved; the stored collection is left untouched in that case.
    async fn save(&self, draft: SavedItineraryDraft)
    -> Result<SavedItinerary, SavedItineraryError>;

    /// Remove the itinerary saved for `trip_id`. Removing an unsaved trip is a
    /// no-op.
    async fn remove(&self, trip_id: &str) -> Result<(), SavedItineraryError>;

    /// Delete the whole collection.
    async fn clear(&self) -> Result<(), SavedItineraryError>;
}
