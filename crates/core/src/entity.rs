//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Stores look records up by this identifier (`id in [...]` queries).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
