// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_organization, create_test_person, create_test_persistence};
use crate::{NewPerson, PersistenceError};
use orgchart_domain::{DomainError, OrganizationId, PersonId};

#[test]
fn test_create_and_get_organization() {
    let mut persistence = create_test_persistence();
    let created = persistence.create_organization("Initech").unwrap();

    let fetched = persistence.get_organization(created.id).unwrap();
    assert_eq!(fetched, Some(created));
}

#[test]
fn test_get_missing_organization_is_none() {
    let mut persistence = create_test_persistence();
    let result = persistence.get_organization(OrganizationId::new(404)).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_create_organization_rejects_blank_name() {
    let mut persistence = create_test_persistence();
    let result = persistence.create_organization("   ");
    assert!(matches!(
        result,
        Err(PersistenceError::Validation(DomainError::InvalidOrganizationName(_)))
    ));
}

#[test]
fn test_list_active_persons_round_trips_all_fields() {
    let mut persistence = create_test_persistence();
    let organization = persistence.create_organization("Acme").unwrap();

    let mut entry = NewPerson::new("Dana", "Head of Growth")
        .with_department("Marketing")
        .with_seniority("svp")
        .with_email("dana@acme.test");
    entry.phone = Some(String::from("+1 555 0100"));
    entry.profile_url = Some(String::from("https://example.test/dana"));

    let person_id = persistence.create_person(organization.id, &entry).unwrap();
    let persons = persistence.list_active_persons(organization.id).unwrap();

    assert_eq!(persons.len(), 1);
    assert_eq!(persons[0], entry.to_person(person_id));
    // Tags are stored exactly as written
    assert_eq!(persons[0].seniority.as_deref(), Some("svp"));
}

#[test]
fn test_absent_optional_fields_stay_absent() {
    let mut persistence = create_test_persistence();
    let organization = persistence.create_organization("Acme").unwrap();
    persistence
        .create_person(organization.id, &NewPerson::new("Eve", ""))
        .unwrap();

    let persons = persistence.list_active_persons(organization.id).unwrap();
    assert_eq!(persons[0].department, None);
    assert_eq!(persons[0].seniority, None);
    assert_eq!(persons[0].email, None);
}

#[test]
fn test_list_active_persons_is_scoped_to_organization() {
    let mut persistence = create_test_persistence();
    let acme = create_test_organization(&mut persistence);
    let other = persistence.create_organization("Other").unwrap();
    persistence
        .create_person(other.id, &create_test_person("Zed", "C_LEVEL", "Board"))
        .unwrap();

    let names: Vec<String> = persistence
        .list_active_persons(acme.id)
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Carol", "Alice", "Bob"]);
    assert_eq!(persistence.count_active_persons(other.id).unwrap(), 1);
}

#[test]
fn test_archive_person_excludes_from_listing() {
    let mut persistence = create_test_persistence();
    let organization = create_test_organization(&mut persistence);
    let carol = persistence.list_active_persons(organization.id).unwrap()[0].id;

    persistence.archive_person(carol).unwrap();

    let persons = persistence.list_active_persons(organization.id).unwrap();
    assert_eq!(persons.len(), 2);
    assert!(persons.iter().all(|p| p.id != carol));
    assert_eq!(persistence.count_active_persons(organization.id).unwrap(), 2);
}

#[test]
fn test_archive_person_twice_fails() {
    let mut persistence = create_test_persistence();
    let organization = create_test_organization(&mut persistence);
    let first = persistence.list_active_persons(organization.id).unwrap()[0].id;

    persistence.archive_person(first).unwrap();
    let result = persistence.archive_person(first);
    assert_eq!(result, Err(PersistenceError::PersonNotFound(first.value())));
}

#[test]
fn test_archive_unknown_person_fails() {
    let mut persistence = create_test_persistence();
    let result = persistence.archive_person(PersonId::new(999));
    assert_eq!(result, Err(PersistenceError::PersonNotFound(999)));
}

#[test]
fn test_create_person_for_missing_organization_fails() {
    let mut persistence = create_test_persistence();
    let result =
        persistence.create_person(OrganizationId::new(77), &create_test_person("A", "VP", "X"));
    assert_eq!(result, Err(PersistenceError::OrganizationNotFound(77)));
}

#[test]
fn test_create_person_validates_fields() {
    let mut persistence = create_test_persistence();
    let organization = persistence.create_organization("Acme").unwrap();

    let blank = persistence.create_person(organization.id, &NewPerson::new("", "Title"));
    assert!(matches!(
        blank,
        Err(PersistenceError::Validation(DomainError::InvalidName(_)))
    ));

    let bad_email = persistence.create_person(
        organization.id,
        &NewPerson::new("Ann", "Title").with_email("not-an-email"),
    );
    assert!(matches!(
        bad_email,
        Err(PersistenceError::Validation(DomainError::InvalidEmail(_)))
    ));

    assert_eq!(persistence.count_active_persons(organization.id).unwrap(), 0);
}

#[test]
fn test_unknown_seniority_is_accepted_on_write() {
    let mut persistence = create_test_persistence();
    let organization = persistence.create_organization("Acme").unwrap();
    let result = persistence.create_person(
        organization.id,
        &create_test_person("Ann", "CHIEF_VIBES_OFFICER", "Ops"),
    );
    assert!(result.is_ok());
}

#[test]
fn test_seed_entry_deserializes_with_defaults() {
    let entry: NewPerson =
        serde_json::from_str(r#"{ "name": "Eve", "seniority": "C_LEVEL" }"#).unwrap();
    assert_eq!(entry.name, "Eve");
    assert_eq!(entry.title, "");
    assert_eq!(entry.seniority.as_deref(), Some("C_LEVEL"));
    assert_eq!(entry.department, None);
}
