// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use orgchart_domain::{Organization, OrganizationId, Person, PersonId};

use crate::{ApiError, Directory};

/// A directory held entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    organizations: Vec<Organization>,
    persons: Vec<(OrganizationId, Person)>,
    pub reads: usize,
    pub unavailable: bool,
}

impl InMemoryDirectory {
    pub fn with_organization(organization_id: i64, name: &str, persons: Vec<Person>) -> Self {
        let id = OrganizationId::new(organization_id);
        Self {
            organizations: vec![Organization::new(id, name.to_string())],
            persons: persons.into_iter().map(|p| (id, p)).collect(),
            reads: 0,
            unavailable: false,
        }
    }
}

impl Directory for InMemoryDirectory {
    fn find_organization(
        &mut self,
        organization_id: OrganizationId,
    ) -> Result<Option<Organization>, ApiError> {
        self.reads += 1;
        if self.unavailable {
            return Err(ApiError::Internal {
                message: String::from("directory unavailable"),
            });
        }
        Ok(self
            .organizations
            .iter()
            .find(|o| o.id == organization_id)
            .cloned())
    }

    fn list_active_persons(
        &mut self,
        organization_id: OrganizationId,
    ) -> Result<Vec<Person>, ApiError> {
        self.reads += 1;
        Ok(self
            .persons
            .iter()
            .filter(|(id, _)| *id == organization_id)
            .map(|(_, p)| p.clone())
            .collect())
    }
}

pub fn create_test_person(id: i64, name: &str, seniority: &str, department: &str) -> Person {
    Person::new(PersonId::new(id), name.to_string(), format!("{name} title"))
        .with_seniority(seniority)
        .with_department(department)
}

/// Acme: a three-person sales chain.
pub fn create_sales_directory() -> InMemoryDirectory {
    InMemoryDirectory::with_organization(
        1,
        "Acme",
        vec![
            create_test_person(3, "Carol", "MANAGER", "Sales").with_email("carol@acme.test"),
            create_test_person(1, "Alice", "VP", "Sales"),
            create_test_person(2, "Bob", "DIRECTOR", "Sales"),
        ],
    )
}

/// Globex: one executive plus an ungrounded specialist elsewhere.
pub fn create_mixed_directory() -> InMemoryDirectory {
    InMemoryDirectory::with_organization(
        2,
        "Globex",
        vec![
            create_test_person(10, "Eve", "C_LEVEL", "Board"),
            create_test_person(11, "Dave", "SPECIALIST", "Marketing"),
        ],
    )
}
