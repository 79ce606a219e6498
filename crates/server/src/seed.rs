// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Directory seeding from a JSON file.
//!
//! ```json
//! {
//!   "organizations": [
//!     {
//!       "name": "Acme",
//!       "persons": [
//!         { "name": "Alice", "title": "VP Sales", "department": "Sales", "seniority": "VP" }
//!       ]
//!     }
//!   ]
//! }
//! ```

use orgchart_domain::Organization;
use orgchart_persistence::{NewPerson, Persistence, PersistenceError};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// The contents of a seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedFile {
    pub organizations: Vec<SeedOrganization>,
}

/// One organization in a seed file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedOrganization {
    pub name: String,
    #[serde(default)]
    pub persons: Vec<NewPerson>,
}

/// Parses seed file contents.
///
/// # Errors
///
/// Returns an error if the text is not a valid seed document.
pub fn parse_seed(text: &str) -> Result<SeedFile, serde_json::Error> {
    serde_json::from_str(text)
}

/// Writes every organization in a seed file to the directory.
///
/// # Errors
///
/// Returns an error on the first organization or person that fails to write.
pub fn apply_seed(
    persistence: &mut Persistence,
    seed: &SeedFile,
) -> Result<Vec<Organization>, PersistenceError> {
    seed.organizations
        .iter()
        .map(|org| persistence.seed_organization(&org.name, &org.persons))
        .collect()
}

/// Reads, parses and applies a seed file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or a write fails.
pub fn load_seed_file(
    persistence: &mut Persistence,
    path: &Path,
) -> Result<Vec<Organization>, Box<dyn std::error::Error>> {
    let text: String = std::fs::read_to_string(path)?;
    let seed: SeedFile = parse_seed(&text)?;
    let organizations: Vec<Organization> = apply_seed(persistence, &seed)?;

    info!(
        path = %path.display(),
        organization_count = organizations.len(),
        "Loaded seed file"
    );
    Ok(organizations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed_with_optional_fields_missing() {
        let seed = parse_seed(
            r#"{"organizations":[{"name":"Acme","persons":[{"name":"Alice","title":"VP"}]},{"name":"Empty"}]}"#,
        )
        .unwrap();

        assert_eq!(seed.organizations.len(), 2);
        assert_eq!(seed.organizations[0].persons[0].name, "Alice");
        assert_eq!(seed.organizations[0].persons[0].seniority, None);
        assert!(seed.organizations[1].persons.is_empty());
    }

    #[test]
    fn test_apply_seed_writes_organizations_in_order() {
        let mut persistence = Persistence::new_in_memory().unwrap();
        let seed = parse_seed(
            r#"{"organizations":[
                {"name":"Acme","persons":[
                    {"name":"Alice","title":"VP Sales","department":"Sales","seniority":"VP"},
                    {"name":"Bob","title":"Director","department":"Sales","seniority":"DIRECTOR"}
                ]},
                {"name":"Globex","persons":[]}
            ]}"#,
        )
        .unwrap();

        let organizations = apply_seed(&mut persistence, &seed).unwrap();
        assert_eq!(organizations.len(), 2);
        assert_eq!(organizations[0].name, "Acme");
        assert_eq!(
            persistence.count_active_persons(organizations[0].id).unwrap(),
            2
        );
        assert_eq!(
            persistence.count_active_persons(organizations[1].id).unwrap(),
            0
        );
    }

    #[test]
    fn test_apply_seed_rejects_invalid_person() {
        let mut persistence = Persistence::new_in_memory().unwrap();
        let seed = parse_seed(r#"{"organizations":[{"name":"Acme","persons":[{"name":""}]}]}"#)
            .unwrap();

        assert!(matches!(
            apply_seed(&mut persistence, &seed),
            Err(PersistenceError::Validation(_))
        ));
    }

    #[test]
    fn test_parse_seed_rejects_malformed_json() {
        assert!(parse_seed(r#"{"organizations": "#).is_err());
    }
}
