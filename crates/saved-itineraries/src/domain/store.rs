//! Saved-itinerary store implementing the command and query driving ports.
//!
//! Every mutation is one full read followed by one full write of the blob.
//! There is no locking: two overlapping mutations can each write a snapshot
//! missing the other's change. The revision stamped on each write is the hook
//! for optimistic concurrency should multiple writers ever appear.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info, warn};

use crate::domain::ports::{KeyValueStore, SavedItinerariesCommand, SavedItinerariesQuery};
use crate::domain::{
    CURRENT_SCHEMA_VERSION, Locale, SavedItinerary, SavedItineraryDraft, SavedItineraryError,
    StorageKey, StoredCollection, decode_collection, encode_collection, format_saved_date,
};

/// Device-local store of saved itineraries.
///
/// Construct one per app lifetime and hand clones to the screens that need
/// it; clones share the same storage and clock.
pub struct SavedItineraryStore<S> {
    storage: Arc<S>,
    key: StorageKey,
    clock: Arc<dyn Clock>,
}

impl<S> Clone for SavedItineraryStore<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            key: self.key.clone(),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<S> SavedItineraryStore<S> {
    /// Create a store persisting under `key` in `storage`.
    ///
    /// ```rust
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// # use saved_itineraries::domain::{SavedItineraryStore, StorageKey};
    /// # use saved_itineraries::outbound::InMemoryKeyValueStore;
    /// let store = SavedItineraryStore::new(
    ///     Arc::new(InMemoryKeyValueStore::default()),
    ///     StorageKey::default(),
    ///     Arc::new(DefaultClock),
    /// );
    /// assert_eq!(store.key().as_str(), "saved_itineraries");
    /// ```
    #[must_use]
    pub const fn new(storage: Arc<S>, key: StorageKey, clock: Arc<dyn Clock>) -> Self {
        Self {
            storage,
            key,
            clock,
        }
    }

    /// Key the blob is stored under.
    #[must_use]
    pub const fn key(&self) -> &StorageKey {
        &self.key
    }

    /// Relative "saved …" label for `itinerary`, measured against the store's clock.
    #[must_use]
    pub fn saved_date_label(&self, itinerary: &SavedItinerary, locale: Locale) -> String {
        format_saved_date(itinerary.saved_at(), self.clock.utc(), locale)
    }
}

impl<S> SavedItineraryStore<S>
where
    S: KeyValueStore,
{
    async fn read_collection(&self) -> Result<StoredCollection, SavedItineraryError> {
        let Some(text) = self.storage.get(&self.key).await? else {
            return Ok(StoredCollection::empty());
        };
        let collection = decode_collection(&text)?;
        if collection.was_migrated() {
            debug!(
                key = %self.key,
                from_version = collection.source_version,
                records = collection.itineraries.len(),
                "read legacy saved-itinerary blob"
            );
        }
        Ok(collection)
    }

    async fn write_collection(
        &self,
        itineraries: &[SavedItinerary],
        revision: u64,
        source_version: u32,
    ) -> Result<(), SavedItineraryError> {
        let text =
            encode_collection(itineraries, revision).map_err(|err| SavedItineraryError::Encode {
                message: err.to_string(),
            })?;
        self.storage.set(&self.key, &text).await?;
        if source_version < CURRENT_SCHEMA_VERSION {
            info!(
                key = %self.key,
                from_version = source_version,
                to_version = CURRENT_SCHEMA_VERSION,
                records = itineraries.len(),
                "migrated legacy saved-itinerary blob"
            );
        }
        Ok(())
    }

    /// Revision of the stored collection, or `None` when it cannot be read.
    pub async fn revision(&self) -> Option<u64> {
        self.read_collection()
            .await
            .ok()
            .map(|collection| collection.revision)
    }
}

#[async_trait]
impl<S> SavedItinerariesCommand for SavedItineraryStore<S>
where
    S: KeyValueStore,
{
    async fn save(
        &self,
        draft: SavedItineraryDraft,
    ) -> Result<SavedItinerary, SavedItineraryError> {
        let StoredCollection {
            revision,
            mut itineraries,
            source_version,
        } = self.read_collection().await?;

        if itineraries
            .iter()
            .any(|existing| existing.trip_id() == draft.trip_id)
        {
            return Err(SavedItineraryError::Duplicate {
                trip_id: draft.trip_id,
            });
        }

        let saved = SavedItinerary::from_draft(draft, self.clock.utc())?;
        itineraries.push(saved.clone());
        let next_revision = revision.saturating_add(1);
        self.write_collection(&itineraries, next_revision, source_version)
            .await?;

        debug!(
            trip_id = saved.trip_id(),
            revision = next_revision,
            records = itineraries.len(),
            "saved itinerary"
        );
        Ok(saved)
    }

    async fn remove(&self, trip_id: &str) -> Result<(), SavedItineraryError> {
        let StoredCollection {
            revision,
            mut itineraries,
            source_version,
        } = self.read_collection().await?;

        let before = itineraries.len();
        itineraries.retain(|itinerary| itinerary.trip_id() != trip_id);
        if itineraries.len() == before {
            debug!(trip_id, "remove skipped, trip not saved");
            return Ok(());
        }

        let next_revision = revision.saturating_add(1);
        self.write_collection(&itineraries, next_revision, source_version)
            .await?;
        debug!(
            trip_id,
            revision = next_revision,
            records = itineraries.len(),
            "removed saved itinerary"
        );
        Ok(())
    }

    async fn clear(&self) -> Result<(), SavedItineraryError> {
        self.storage.delete(&self.key).await?;
        debug!(key = %self.key, "cleared saved itineraries");
        Ok(())
    }
}

#[async_trait]
impl<S> SavedItinerariesQuery for SavedItineraryStore<S>
where
    S: KeyValueStore,
{
    async fn list(&self) -> Vec<SavedItinerary> {
        let mut itineraries = match self.read_collection().await {
            Ok(collection) => collection.itineraries,
            Err(error) => {
                warn!(key = %self.key, %error, "treating unreadable saved itineraries as empty");
                Vec::new()
            }
        };
        itineraries.sort_by(|a, b| b.saved_at().cmp(&a.saved_at()));
        itineraries
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
