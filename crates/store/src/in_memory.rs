use roster_core::{Entity, EntityId};

use crate::repository::Repository;

/// In-memory ordered repository.
///
/// Intended for tests/dev. Lookups are linear scans.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    items: Vec<T>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Seed the repository with `entities`, kept in iteration order.
    pub fn with_entities(entities: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: entities.into_iter().collect(),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for InMemoryRepository<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::with_entities(iter)
    }
}

impl<T> Repository<T> for InMemoryRepository<T>
where
    T: Entity + Clone,
{
    fn count(&self) -> usize {
        self.items.len()
    }

    fn add(&mut self, entity: T) {
        self.items.push(entity);
    }

    fn remove(&mut self, entity: &T) {
        if let Some(pos) = self.items.iter().position(|e| e == entity) {
            self.items.remove(pos);
        }
    }

    fn get_all(&self) -> Vec<T> {
        self.items.clone()
    }

    fn get_by_id(&self, id: EntityId) -> Option<T> {
        self.items.iter().find(|e| e.id() == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::impl_identity_eq;

    #[derive(Debug, Clone)]
    struct Item {
        id: EntityId,
        label: &'static str,
    }

    impl_identity_eq!(Item);

    impl Entity for Item {
        fn id(&self) -> EntityId {
            self.id
        }
    }

    fn item(id: i64, label: &'static str) -> Item {
        Item {
            id: EntityId::new(id),
            label,
        }
    }

    #[test]
    fn new_repository_is_empty() {
        let repo: InMemoryRepository<Item> = InMemoryRepository::new();
        assert_eq!(repo.count(), 0);
        assert!(repo.is_empty());
        assert!(repo.get_all().is_empty());
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let mut repo = InMemoryRepository::new();
        repo.add(item(2, "b"));
        repo.add(item(1, "a"));

        let ids: Vec<i64> = repo.get_all().iter().map(|e| e.id.get()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn add_permits_duplicate_identities() {
        let mut repo = InMemoryRepository::new();
        repo.add(item(1, "first"));
        repo.add(item(1, "second"));

        assert_eq!(repo.count(), 2);
        assert_eq!(repo.get_by_id(EntityId::new(1)).unwrap().label, "first");
    }

    #[test]
    fn remove_drops_only_first_equal_entity() {
        let mut repo: InMemoryRepository<Item> =
            [item(1, "first"), item(2, "x"), item(1, "second")].into_iter().collect();

        repo.remove(&item(1, "whatever"));

        let labels: Vec<&str> = repo.get_all().iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["x", "second"]);
    }

    #[test]
    fn remove_missing_entity_is_silent_noop() {
        let mut repo = InMemoryRepository::with_entities([item(1, "a")]);
        repo.remove(&item(9, "missing"));
        assert_eq!(repo.count(), 1);
    }

    #[test]
    fn get_all_returns_defensive_copy() {
        let mut repo = InMemoryRepository::with_entities([item(1, "a"), item(2, "b")]);

        let mut snapshot = repo.get_all();
        snapshot.clear();
        snapshot.push(item(3, "c"));

        assert_eq!(repo.count(), 2);
        assert_eq!(repo.get_all(), vec![item(1, "a"), item(2, "b")]);
        assert!(repo.get_by_id(EntityId::new(3)).is_none());

        repo.add(item(4, "d"));
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn get_by_id_returns_none_when_absent() {
        let repo = InMemoryRepository::with_entities([item(1, "a")]);
        assert!(repo.get_by_id(EntityId::new(2)).is_none());
    }
}
