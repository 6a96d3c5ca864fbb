//! Outbound adapters for the key-value storage port.

mod atomic_io;
mod directory;
mod memory;

pub use directory::DirectoryKeyValueStore;
pub use memory::InMemoryKeyValueStore;
