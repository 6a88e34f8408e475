//! Identity-based equality for domain entities.
//!
//! Two entities are the same iff they have the same concrete type and equal
//! identifiers. Comparing through `dyn Entity` checks the concrete [`TypeId`]
//! explicitly, so sibling types which share an identifier type never compare
//! equal.

use std::{
    any::{self, Any, TypeId},
    fmt::{self, Debug},
    hash::{Hash, Hasher},
};

/// A domain object identified by its concrete type and [`Entity::id`].
pub trait Entity: ConcreteType {
    type Id: Eq + Hash;

    /// The identifier assigned when the entity was created. It must not
    /// change for the lifetime of the entity.
    fn id(&self) -> &Self::Id;
}

/// Reports the concrete type of a value, including through a trait object.
pub trait ConcreteType {
    fn concrete_type_id(&self) -> TypeId;

    fn concrete_type_name(&self) -> &'static str;
}

impl<T: Any> ConcreteType for T {
    fn concrete_type_id(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn concrete_type_name(&self) -> &'static str {
        any::type_name::<T>()
    }
}

#[derive(Clone, Copy)]
pub struct IdentityKey<'e, I> {
    type_id: TypeId,
    type_name: &'static str,
    id: &'e I,
}

impl<'e, I> IdentityKey<'e, I> {
    pub fn of<E>(entity: &'e E) -> Self
    where
        E: Entity<Id = I> + ?Sized,
    {
        Self {
            type_id: entity.concrete_type_id(),
            type_name: entity.concrete_type_name(),
            id: entity.id(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl<I: PartialEq> PartialEq for IdentityKey<'_, I> {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id && self.id == other.id
    }
}

impl<I: Eq> Eq for IdentityKey<'_, I> {}

impl<I: Hash> Hash for IdentityKey<'_, I> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
        self.id.hash(state);
    }
}

impl<I: Debug> Debug for IdentityKey<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.type_name, self.id)
    }
}

impl<I: Eq + Hash> PartialEq for dyn Entity<Id = I> + '_ {
    fn eq(&self, other: &Self) -> bool {
        IdentityKey::of(self) == IdentityKey::of(other)
    }
}

impl<I: Eq + Hash> Eq for dyn Entity<Id = I> + '_ {}

impl<I: Eq + Hash> Hash for dyn Entity<Id = I> + '_ {
    fn hash<H: Hasher>(&self, state: &mut H) {
        IdentityKey::of(self).hash(state);
    }
}

impl<I: Eq + Hash + Debug> Debug for dyn Entity<Id = I> + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        IdentityKey::of(self).fmt(f)
    }
}

/// Implements `PartialEq`, `Eq` and `Hash` for entity types in terms of their
/// [`IdentityKey`].
#[macro_export]
macro_rules! entity_identity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ::core::cmp::PartialEq for $ty {
                fn eq(&self, other: &Self) -> bool {
                    $crate::entity::IdentityKey::of(self) == $crate::entity::IdentityKey::of(other)
                }
            }

            impl ::core::cmp::Eq for $ty {}

            impl ::core::hash::Hash for $ty {
                fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                    ::core::hash::Hash::hash(&$crate::entity::IdentityKey::of(self), state)
                }
            }
        )+
    };
}
