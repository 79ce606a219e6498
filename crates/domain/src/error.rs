// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
///
/// The hierarchy engine itself never produces these; they guard writes
/// into the directory and strict parsing at the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A seniority tag is outside the closed classification set.
    #[error("Unknown seniority classification: '{0}'")]
    UnknownSeniority(String),
    /// A person's display name is empty or invalid.
    #[error("Invalid name: {0}")]
    InvalidName(String),
    /// A person's title is invalid.
    #[error("Invalid title: {0}")]
    InvalidTitle(String),
    /// A person's email address is malformed.
    #[error("Invalid email: {0}")]
    InvalidEmail(String),
    /// An organization name is empty or invalid.
    #[error("Invalid organization name: {0}")]
    InvalidOrganizationName(String),
    /// The organization does not exist.
    #[error("Organization {0} not found")]
    OrganizationNotFound(i64),
    /// The person does not exist.
    #[error("Person {0} not found")]
    PersonNotFound(i64),
}
