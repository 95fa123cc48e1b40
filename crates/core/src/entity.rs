//! Entity trait: identity + continuity across state changes.
//!
//! Two entities of the same type with the same [`EntityId`] are the same
//! entity, whatever their other fields hold. Implementors express that with
//! [`impl_identity_eq!`](crate::impl_identity_eq), which derives `PartialEq`,
//! `Eq` and `Hash` from the identity alone.

use crate::id::EntityId;

/// Entity marker + minimal interface.
pub trait Entity: Eq + core::hash::Hash + core::fmt::Debug {
    /// Returns the entity identifier.
    fn id(&self) -> EntityId;
}

/// Implement `PartialEq`, `Eq` and `Hash` for an [`Entity`] type using only
/// its identity.
///
/// ```ignore
/// #[derive(Debug, Clone)]
/// struct Course { id: EntityId, title: String }
///
/// impl_identity_eq!(Course);
///
/// impl Entity for Course {
///     fn id(&self) -> EntityId { self.id }
/// }
/// ```
#[macro_export]
macro_rules! impl_identity_eq {
    ($t:ty) => {
        impl ::core::cmp::PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                $crate::Entity::id(self) == $crate::Entity::id(other)
            }
        }

        impl ::core::cmp::Eq for $t {}

        impl ::core::hash::Hash for $t {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash(&$crate::Entity::id(self), state);
            }
        }
    };
}
