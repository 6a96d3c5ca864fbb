//! Device-local persistence for bookmarked TripShare itineraries.
//!
//! A saved itinerary is a user's local copy of a shared trip. The whole
//! collection lives as one JSON blob under a fixed key in a key-value store,
//! and every mutation rewrites that blob in full.
//!
//! # Overview
//!
//! - [`domain::SavedItineraryStore`] owns the collection and enforces one
//!   record per trip.
//! - [`domain::ports::KeyValueStore`] is the storage primitive the store
//!   consumes; [`outbound`] ships an in-memory and a directory-backed adapter.
//! - [`domain::format_saved_date`] renders coarse "saved 3 days ago" labels.
//! - [`cli`] backs the `saved-itineraries` binary over the directory adapter.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use mockable::DefaultClock;
//! use saved_itineraries::domain::ports::{SavedItinerariesCommand, SavedItinerariesQuery};
//! use saved_itineraries::domain::{SavedItineraryDraft, SavedItineraryStore, StorageKey};
//! use saved_itineraries::outbound::InMemoryKeyValueStore;
//!
//! # tokio::runtime::Builder::new_current_thread().build().map(|rt| rt.block_on(async {
//! let store = SavedItineraryStore::new(
//!     Arc::new(InMemoryKeyValueStore::default()),
//!     StorageKey::default(),
//!     Arc::new(DefaultClock),
//! );
//!
//! let draft = SavedItineraryDraft::new("saved-1", "trip-42", "Lisbonne");
//! store.save(draft).await.expect("first save succeeds");
//!
//! assert!(store.exists("trip-42").await);
//! assert_eq!(store.count().await, 1);
//! # })).expect("runtime builds");
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod outbound;
