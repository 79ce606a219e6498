// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Person;

/// Maximum length of a display name or title, in characters.
const MAX_TEXT_LEN: usize = 200;

/// Validates that a person's basic field constraints are met.
///
/// This is applied on writes into the directory, never by the hierarchy
/// engine. The seniority tag is deliberately not checked: unknown tags are
/// stored as-is and resolve to the default rank when read.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty or too long
/// - The title is too long
/// - The email is present but has no `@` separating two non-empty parts
pub fn validate_person_fields(person: &Person) -> Result<(), DomainError> {
    if person.name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }

    if person.name.chars().count() > MAX_TEXT_LEN {
        return Err(DomainError::InvalidName(format!(
            "Name cannot exceed {MAX_TEXT_LEN} characters"
        )));
    }

    if person.title.chars().count() > MAX_TEXT_LEN {
        return Err(DomainError::InvalidTitle(format!(
            "Title cannot exceed {MAX_TEXT_LEN} characters"
        )));
    }

    if let Some(email) = &person.email {
        let valid: bool = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
        if !valid {
            return Err(DomainError::InvalidEmail(email.clone()));
        }
    }

    Ok(())
}

/// Validates an organization name.
///
/// # Errors
///
/// Returns an error if the name is empty or too long.
pub fn validate_organization_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidOrganizationName(String::from(
            "Organization name cannot be empty",
        )));
    }

    if name.chars().count() > MAX_TEXT_LEN {
        return Err(DomainError::InvalidOrganizationName(format!(
            "Organization name cannot exceed {MAX_TEXT_LEN} characters"
        )));
    }

    Ok(())
}
