// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::department::department_key;
use crate::seniority::{SeniorityLevel, SeniorityRank, resolve_rank};
use serde::{Deserialize, Serialize};

/// Canonical identifier of a person, assigned by the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(i64);

impl PersonId {
    /// Wraps a raw directory identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical identifier of an organization, assigned by the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrganizationId(i64);

impl OrganizationId {
    /// Wraps a raw directory identifier.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for OrganizationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An organization known to the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    /// The organization's identifier.
    pub id: OrganizationId,
    /// The organization's display name.
    pub name: String,
}

impl Organization {
    /// Creates a new `Organization`.
    #[must_use]
    pub const fn new(id: OrganizationId, name: String) -> Self {
        Self { id, name }
    }
}

/// A snapshot of one person as held by the directory.
///
/// The hierarchy engine only ever reads these. The seniority tag is kept
/// exactly as stored, so an unrecognized value survives into the output
/// unchanged while still resolving to a safe rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// The person's identifier. Unique within an organization.
    pub id: PersonId,
    /// Display name.
    pub name: String,
    /// Job title as free text.
    pub title: String,
    /// Optional email address.
    pub email: Option<String>,
    /// Optional phone number.
    pub phone: Option<String>,
    /// Optional external profile URL.
    pub profile_url: Option<String>,
    /// Optional department label as free text.
    pub department: Option<String>,
    /// Optional seniority classification tag.
    pub seniority: Option<String>,
}

impl Person {
    /// Creates a person with only the required fields set.
    #[must_use]
    pub const fn new(id: PersonId, name: String, title: String) -> Self {
        Self {
            id,
            name,
            title,
            email: None,
            phone: None,
            profile_url: None,
            department: None,
            seniority: None,
        }
    }

    /// Sets the department label.
    #[must_use]
    pub fn with_department(mut self, department: &str) -> Self {
        self.department = Some(department.to_string());
        self
    }

    /// Sets the seniority classification tag.
    #[must_use]
    pub fn with_seniority(mut self, seniority: &str) -> Self {
        self.seniority = Some(seniority.to_string());
        self
    }

    /// Sets the email address.
    #[must_use]
    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    /// Returns the parsed seniority classification, if recognized.
    #[must_use]
    pub fn seniority_level(&self) -> Option<SeniorityLevel> {
        self.seniority.as_deref().and_then(SeniorityLevel::parse)
    }

    /// Returns the resolved seniority rank.
    #[must_use]
    pub fn rank(&self) -> SeniorityRank {
        resolve_rank(self.seniority.as_deref())
    }

    /// Returns the department bucket key for this person.
    #[must_use]
    pub fn department_key(&self) -> &str {
        department_key(self.department.as_deref())
    }
}
