//! Storage adapters for board persistence.

pub mod directory;
pub mod memory;

pub use directory::DirectoryStorage;
pub use memory::InMemoryStorage;
