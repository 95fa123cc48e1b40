use serde::{Deserialize, Serialize};

use roster_core::{Entity, EntityId, impl_identity_eq};
use roster_store::{InMemoryRepository, Manager};

/// Manager over students, backed by any repository (in-memory by default).
pub type StudentManager<R = InMemoryRepository<Student>> = Manager<Student, R>;

/// A student record.
///
/// Equality and hashing use the identity only; two records with the same id
/// but different names are the same student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    id: EntityId,
    pub name: String,
    pub email: String,
}

impl Student {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}

impl_identity_eq!(Student);

impl Entity for Student {
    fn id(&self) -> EntityId {
        self.id
    }
}
