//! Collection store adapters.

mod json_store;
mod memory;

pub use json_store::JsonFileStore;
pub use memory::InMemoryStore;
