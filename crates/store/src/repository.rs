use roster_core::{Entity, EntityId};

/// Ordered collection of entities addressable by identity.
///
/// Implementations keep insertion order and perform **no** invariant checks:
/// duplicate identities are structurally allowed and removing a missing entity
/// is a no-op. Uniqueness and existence rules live in [`Manager`](crate::Manager).
pub trait Repository<T: Entity> {
    /// Number of stored entities.
    fn count(&self) -> usize;

    /// Append an entity to the end of the sequence.
    fn add(&mut self, entity: T);

    /// Remove the first stored entity equal to `entity`, if any.
    fn remove(&mut self, entity: &T);

    /// Snapshot of all entities in insertion order.
    ///
    /// The returned vector is a copy; mutating it never affects the repository.
    fn get_all(&self) -> Vec<T>;

    /// First entity whose identity is `id`.
    fn get_by_id(&self, id: EntityId) -> Option<T>;

    /// Whether the repository holds no entities.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl<T, R> Repository<T> for &mut R
where
    T: Entity,
    R: Repository<T> + ?Sized,
{
    fn count(&self) -> usize {
        (**self).count()
    }

    fn add(&mut self, entity: T) {
        (**self).add(entity)
    }

    fn remove(&mut self, entity: &T) {
        (**self).remove(entity)
    }

    fn get_all(&self) -> Vec<T> {
        (**self).get_all()
    }

    fn get_by_id(&self, id: EntityId) -> Option<T> {
        (**self).get_by_id(id)
    }
}

impl<T, R> Repository<T> for Box<R>
where
    T: Entity,
    R: Repository<T> + ?Sized,
{
    fn count(&self) -> usize {
        (**self).count()
    }

    fn add(&mut self, entity: T) {
        (**self).add(entity)
    }

    fn remove(&mut self, entity: &T) {
        (**self).remove(entity)
    }

    fn get_all(&self) -> Vec<T> {
        (**self).get_all()
    }

    fn get_by_id(&self, id: EntityId) -> Option<T> {
        (**self).get_by_id(id)
    }
}
