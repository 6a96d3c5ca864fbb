//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod key_value_store;
mod saved_itineraries_command;
mod saved_itineraries_query;

#[cfg(test)]
pub use key_value_store::MockKeyValueStore;
pub use key_value_store::{FixtureKeyValueStore, KeyValueStore, KeyValueStoreError};
pub use saved_itineraries_command::SavedItinerariesCommand;
pub use saved_itineraries_query::SavedItinerariesQuery;
