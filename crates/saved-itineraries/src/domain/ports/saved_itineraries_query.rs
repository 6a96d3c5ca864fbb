//! Driving port for reading saved itineraries.
//!
//! Reads never fail: storage problems surface as an empty collection. Every
//! derived helper is computed from [`SavedItinerariesQuery::list`].

use async_trait::async_trait;

use crate::domain::{SavedItinerary, filter_by_destination, filter_by_tag};

/// Read-side operations over the saved-itinerary collection.
#[async_trait]
pub trait SavedItinerariesQuery: Send + Sync {
    /// Return every saved itinerary, most recently saved first.
    async fn list(&self) -> Vec<SavedItinerary>;

    /// Return the itinerary saved for `trip_id`, if any.
    async fn find(&self, trip_id: &str) -> Option<SavedItinerary> {
        self.list()
            .await
            .into_iter()
            .find(|itinerary| itinerary.trip_id() == trip_id)
    }

    /// Report whether `trip_id` is saved.
    async fn exists(&self, trip_id: &str) -> bool {
        self.find(trip_id).await.is_some()
    }

    /// Number of saved itineraries.
    async fn count(&self) -> usize {
        self.list().await.len()
    }

    /// Saved itineraries whose destination contains `query`, ignoring case.
    async fn find_by_destination(&self, query: &str) -> Vec<SavedItinerary> {
        filter_by_destination(self.list().await, query)
    }

    /// Saved itineraries with a tag containing `query`, ignoring case.
    async fn find_by_tag(&self, query: &str) -> Vec<SavedItinerary> {
        filter_by_tag(self.list().await, query)
    }
}
