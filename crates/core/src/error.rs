//! Domain error model.

use thiserror::Error;

use crate::MenuId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic data/business failures. Store and
/// transport failures have their own error types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The menu hierarchy loops back on itself through `menu_id`.
    ///
    /// This is a data-integrity fault of the menu source, not an empty grant.
    #[error("malformed menu hierarchy: menu '{menu_id}' is its own ancestor")]
    MalformedHierarchy { menu_id: MenuId },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn malformed_hierarchy(menu_id: MenuId) -> Self {
        Self::MalformedHierarchy { menu_id }
    }
}
