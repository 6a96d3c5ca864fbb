//! Domain types and services for saved itineraries.
//!
//! Public surface:
//! - [`SavedItinerary`] / [`SavedItineraryDraft`]: the bookmarked record and
//!   its save input.
//! - [`SavedItineraryStore`]: the store behind the command and query ports.
//! - [`filter_by_destination`], [`filter_by_tag`], [`format_saved_date`]:
//!   pure helpers used by list screens.
//! - [`decode_collection`] / [`encode_collection`]: the versioned blob layout.

mod error;
mod itinerary;
pub mod ports;
mod query;
mod saved_date;
mod schema;
mod storage_key;
mod store;

pub use self::error::SavedItineraryError;
pub use self::itinerary::{
    DISPLAY_TAG_LIMIT, ItineraryStep, SavedItinerary, SavedItineraryDraft,
    SavedItineraryValidationError,
};
pub use self::query::{filter_by_destination, filter_by_tag};
pub use self::saved_date::{Locale, SavedDateBucket, UnsupportedLocaleError, format_saved_date};
pub use self::schema::{
    CURRENT_SCHEMA_VERSION, CollectionDecodeError, StoredCollection, decode_collection,
    encode_collection,
};
pub use self::storage_key::{DEFAULT_STORAGE_KEY, StorageKey, StorageKeyValidationError};
pub use self::store::SavedItineraryStore;
