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

//! Organizational hierarchy construction.
//!
//! Directory records carry no reports-to relationship. This crate infers a
//! plausible management forest for one organization from each person's
//! seniority classification and department label alone. The result is a
//! display heuristic and is never written back to the directory.

mod annotate;
mod builder;
mod engine;
mod fallback;
mod node;
mod ordering;
mod partition;
mod search;
mod stats;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use annotate::annotate;
pub use builder::{Placement, UngroundedPolicy, assign_managers};
pub use engine::{BuildStrategy, EngineOptions, OrgChart, build_org_chart};
pub use fallback::{needs_fallback, single_root_placement};
pub use node::{HierarchyNode, materialize};
pub use ordering::{OrderedPerson, compare_persons, order_persons};
pub use partition::{DepartmentBucket, partition};
pub use search::{SearchFilter, search_forest};
pub use stats::{OrgChartStats, UNKNOWN_SENIORITY, statistics};
