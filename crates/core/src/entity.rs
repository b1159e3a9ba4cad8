//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Record stores key their contents by this identity.
pub trait Entity {
    /// Identifier type of the entity.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
