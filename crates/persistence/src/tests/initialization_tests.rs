// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_organization, create_test_persistence};
use crate::{PersistenceError, SqlitePersistence};

#[test]
fn test_persistence_initialization() {
    let result: Result<SqlitePersistence, PersistenceError> = SqlitePersistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_foreign_key_enforcement_is_active() {
    let mut persistence = create_test_persistence();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1 = create_test_persistence();
    let mut db2 = create_test_persistence();

    let organization = create_test_organization(&mut db1);

    assert_eq!(db1.count_active_persons(organization.id).unwrap(), 3);
    assert!(db2.get_organization(organization.id).unwrap().is_none());
    assert_eq!(db2.count_active_persons(organization.id).unwrap(), 0);
}

#[test]
fn test_file_database_persists_across_reopen() {
    let path = std::env::temp_dir().join(format!(
        "orgchart_persistence_test_{}.db",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    let organization = {
        let mut persistence = SqlitePersistence::new_with_file(&path).unwrap();
        create_test_organization(&mut persistence)
    };

    let mut reopened = SqlitePersistence::new_with_file(&path).unwrap();
    assert_eq!(
        reopened.get_organization(organization.id).unwrap(),
        Some(organization.clone())
    );
    assert_eq!(reopened.count_active_persons(organization.id).unwrap(), 3);

    drop(reopened);
    let _ = std::fs::remove_file(&path);
}
