//! `menugate-core`: shared domain building blocks.
//!
//! Identifiers, the entity contract and the domain error model. No IO.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{MenuId, RoleId, UserId};
