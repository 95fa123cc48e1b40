//! Walkthrough used by the `roster-demo` binary.

use roster_core::{DomainResult, EntityId};
use roster_store::InMemoryRepository;

use crate::student::{Student, StudentManager};

/// Seed a roster, exercise the rejection paths, and return the final roster.
///
/// Only unexpected failures are returned as errors; the duplicate add and the
/// removal of an unknown student are expected to be rejected and are logged.
pub fn run() -> DomainResult<Vec<Student>> {
    let mut students: StudentManager = StudentManager::new(InMemoryRepository::new());

    students.add_entity(Student::new(2, "Grace Hopper", "grace@example.com"))?;
    students.add_entity(Student::new(1, "Ada Lovelace", "ada@example.com"))?;
    tracing::info!(count = students.count(), "roster seeded");

    if let Err(e) = students.add_entity(Student::new(1, "Ada (again)", "ada2@example.com")) {
        tracing::info!(error = %e, "duplicate student rejected");
    }

    let id = EntityId::new(2);
    match students.get_by_id(id) {
        Some(s) => tracing::info!(id = %id, name = %s.name, "lookup hit"),
        None => tracing::info!(id = %id, "lookup miss"),
    }

    if let Err(e) = students.remove_entity(&Student::new(3, "Nobody", "nobody@example.com")) {
        tracing::info!(error = %e, "removal of unknown student rejected");
    }

    students.remove_entity(&Student::new(2, "", ""))?;
    tracing::info!(count = students.count(), "student 2 removed");

    Ok(students.get_all())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_leaves_only_the_first_added_ada_record() {
        let roster = run().unwrap();

        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0], Student::new(1, "", ""));
        assert_eq!(roster[0].name, "Ada Lovelace");
        assert_eq!(roster[0].email, "ada@example.com");
    }
}
