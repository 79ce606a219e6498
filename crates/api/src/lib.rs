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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

//! API boundary for the organization chart service.
//!
//! Reads directory snapshots through the [`Directory`] seam, runs the
//! hierarchy engine and shapes the result into response DTOs. Transport
//! concerns live in the server crate.

mod directory;
mod error;
mod export;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use directory::Directory;
pub use error::{ApiError, translate_domain_error, translate_persistence_error};
pub use export::{CSV_HEADERS, forest_to_csv};
pub use handlers::{
    ChartPolicy, DEFAULT_MAX_PERSONS, DirectorySnapshot, build_org_chart_csv,
    build_org_chart_response, build_org_chart_stats_response, export_org_chart_csv,
    get_org_chart, get_org_chart_stats, load_snapshot, validate_org_chart_request,
};
pub use request_response::{
    OrgChartNodeInfo, OrgChartRequest, OrgChartResponse, OrgChartStatsResponse, OrganizationInfo,
};
