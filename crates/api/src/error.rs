// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use orgchart_domain::DomainError;
use orgchart_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent the
/// API contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The organization has more active persons than a chart may be built
    /// from.
    #[error("Organization has {actual} active persons, more than the limit of {limit}")]
    InputTooLarge {
        /// The configured cap.
        limit: usize,
        /// The number of persons found.
        actual: usize,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

/// Translates a domain error into an API error.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::UnknownSeniority(tag) => ApiError::InvalidInput {
            field: String::from("seniority"),
            message: format!("Unknown seniority classification '{tag}'"),
        },
        DomainError::InvalidName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidTitle(msg) => ApiError::InvalidInput {
            field: String::from("title"),
            message: msg,
        },
        DomainError::InvalidEmail(email) => ApiError::InvalidInput {
            field: String::from("email"),
            message: format!("'{email}' is not a valid email address"),
        },
        DomainError::InvalidOrganizationName(msg) => ApiError::InvalidInput {
            field: String::from("organization_name"),
            message: msg,
        },
        DomainError::OrganizationNotFound(id) => organization_not_found(id),
        DomainError::PersonNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Person"),
            message: format!("Person {id} does not exist"),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Storage failures surface as `Internal`; their detail is kept in the
/// message for logging, not for clients to act on.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::OrganizationNotFound(id) => organization_not_found(id),
        PersistenceError::PersonNotFound(id) => {
            translate_domain_error(DomainError::PersonNotFound(id))
        }
        PersistenceError::Validation(domain_err) => translate_domain_error(domain_err),
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}

fn organization_not_found(id: i64) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Organization"),
        message: format!("Organization {id} does not exist"),
    }
}
