// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod directory_tests;
mod initialization_tests;

use crate::{NewPerson, SqlitePersistence};
use orgchart_domain::Organization;

pub fn create_test_persistence() -> SqlitePersistence {
    SqlitePersistence::new_in_memory().expect("Failed to create in-memory directory")
}

pub fn create_test_person(name: &str, seniority: &str, department: &str) -> NewPerson {
    NewPerson::new(name, &format!("{seniority} title"))
        .with_seniority(seniority)
        .with_department(department)
}

/// Creates an organization with a small sales chain.
pub fn create_test_organization(persistence: &mut SqlitePersistence) -> Organization {
    persistence
        .seed_organization(
            "Acme",
            &[
                create_test_person("Carol", "MANAGER", "Sales"),
                create_test_person("Alice", "VP", "Sales"),
                create_test_person("Bob", "DIRECTOR", "Sales"),
            ],
        )
        .expect("Failed to seed test organization")
}
