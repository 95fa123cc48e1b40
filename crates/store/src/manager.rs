//! Invariant-enforcing layer over an injected [`Repository`].
//!
//! The manager owns no state besides the repository it was given. Every
//! mutation is preceded by an identity lookup through the same repository:
//!
//! - `add_entity` fails with `Conflict` when the identity is already present.
//! - `remove_entity` fails with `Conflict` when the identity is absent.
//!
//! In both failure cases the repository's mutating method is never called, so
//! the stored sequence is left untouched.
//!
//! ## Concurrency
//!
//! The lookup and the mutation are two separate repository calls. Mutating
//! methods take `&mut self`, which makes the pair exclusive for as long as the
//! manager is only reachable through one owner. Callers that share a manager
//! across threads must wrap the whole manager (e.g. in a `Mutex`); the
//! repository contract offers no atomic compare-and-insert.

use core::marker::PhantomData;

use roster_core::{DomainError, DomainResult, Entity, EntityId};

use crate::repository::Repository;

/// Entity manager over an injected repository.
#[derive(Debug)]
pub struct Manager<T, R> {
    repository: R,
    _entity: PhantomData<fn() -> T>,
}

impl<T, R> Manager<T, R>
where
    T: Entity,
    R: Repository<T>,
{
    /// Wrap `repository`.
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            _entity: PhantomData,
        }
    }

    /// Wrap an optionally-present repository.
    ///
    /// Fails with `InvalidArgument` when `repository` is `None`.
    pub fn try_new(repository: Option<R>) -> DomainResult<Self> {
        match repository {
            Some(repository) => Ok(Self::new(repository)),
            None => Err(DomainError::invalid_argument("repository is missing")),
        }
    }

    /// Number of entities in the wrapped repository.
    pub fn count(&self) -> usize {
        self.repository.count()
    }

    /// Add `entity` unless an entity with the same identity already exists.
    pub fn add_entity(&mut self, entity: T) -> DomainResult<()> {
        let id = entity.id();
        if self.repository.get_by_id(id).is_some() {
            tracing::warn!(entity_id = %id, "rejected add: entity already exists");
            return Err(DomainError::conflict("entity already exists"));
        }

        self.repository.add(entity);
        tracing::debug!(entity_id = %id, "entity added");
        Ok(())
    }

    /// Entity with identity `id`, if stored.
    pub fn get_by_id(&self, id: EntityId) -> Option<T> {
        self.repository.get_by_id(id)
    }

    /// All entities in insertion order (a copy).
    pub fn get_all(&self) -> Vec<T> {
        self.repository.get_all()
    }

    /// Remove `entity`, failing if no entity with its identity exists.
    pub fn remove_entity(&mut self, entity: &T) -> DomainResult<()> {
        let id = entity.id();
        if self.repository.get_by_id(id).is_none() {
            tracing::warn!(entity_id = %id, "rejected remove: entity does not exist");
            return Err(DomainError::conflict("entity does not exist"));
        }

        self.repository.remove(entity);
        tracing::debug!(entity_id = %id, "entity removed");
        Ok(())
    }

    /// Borrow the injected repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Give the injected repository back.
    pub fn into_inner(self) -> R {
        self.repository
    }
}
