//! The bundled read store.
//!
//! [`InMemoryStore`] implements every read port over immutable in-memory data;
//! [`SeedLoader`] fills it from YAML seed files.

mod in_memory;
mod seed;

pub use in_memory::InMemoryStore;
pub use seed::SeedLoader;
