//! In-memory record stores backing the collaborator traits.

pub mod entity_store;

pub use entity_store::{InMemoryEntityStore, InMemoryMenuStore, InMemoryRoleStore, InMemoryUserStore};
