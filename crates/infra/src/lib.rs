//! Infrastructure layer: record stores and seed loading.

pub mod read_model;
pub mod seed;

pub use read_model::{InMemoryEntityStore, InMemoryMenuStore, InMemoryRoleStore, InMemoryUserStore};
pub use seed::{Seed, SeededStores};
