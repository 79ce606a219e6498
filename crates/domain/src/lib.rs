// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod department;
mod error;
mod labels;
mod seniority;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use department::{GENERAL_DEPARTMENT, department_key};
pub use error::DomainError;
pub use labels::format_label;
pub use seniority::{
    EXECUTIVE_RANK_CUTOFF, SeniorityLevel, SeniorityRank, UNKNOWN_RANK, is_executive,
    resolve_rank,
};
pub use types::{Organization, OrganizationId, Person, PersonId};
pub use validation::{validate_organization_name, validate_person_fields};
