// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Org-chart operations.
//!
//! Each operation runs in two steps: [`load_snapshot`] reads the directory,
//! then a pure step builds the response from the snapshot. Callers that
//! hold a lock on the directory can release it between the two.

use std::str::FromStr;

use orgchart::{
    EngineOptions, OrgChart, OrgChartStats, SearchFilter, build_org_chart, search_forest,
    statistics,
};
use orgchart_domain::{Organization, OrganizationId, Person, SeniorityLevel};
use tracing::{debug, info, warn};

use crate::directory::Directory;
use crate::error::{ApiError, translate_domain_error};
use crate::export::forest_to_csv;
use crate::request_response::{
    OrgChartNodeInfo, OrgChartRequest, OrgChartResponse, OrgChartStatsResponse, OrganizationInfo,
};

/// Default cap on the number of persons a chart is built from.
pub const DEFAULT_MAX_PERSONS: usize = 5000;

/// Settings applied to every chart build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartPolicy {
    /// Options handed to the hierarchy engine.
    pub engine: EngineOptions,
    /// Largest number of active persons a chart is built from.
    pub max_persons: usize,
}

impl Default for ChartPolicy {
    fn default() -> Self {
        Self {
            engine: EngineOptions::default(),
            max_persons: DEFAULT_MAX_PERSONS,
        }
    }
}

/// An organization and its active persons, read in one go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySnapshot {
    /// The organization the persons belong to.
    pub organization: Organization,
    /// Active persons, in directory order.
    pub persons: Vec<Person>,
}

/// Reads the organization and its active persons from the directory.
///
/// # Errors
///
/// Returns an error if:
/// - The organization does not exist
/// - The organization has more active persons than `policy.max_persons`
/// - The directory cannot be read
pub fn load_snapshot<D: Directory + ?Sized>(
    directory: &mut D,
    organization_id: OrganizationId,
    policy: &ChartPolicy,
) -> Result<DirectorySnapshot, ApiError> {
    let organization: Organization =
        directory
            .find_organization(organization_id)?
            .ok_or_else(|| ApiError::ResourceNotFound {
                resource_type: String::from("Organization"),
                message: format!("Organization {organization_id} does not exist"),
            })?;

    let persons: Vec<Person> = directory.list_active_persons(organization_id)?;
    if persons.len() > policy.max_persons {
        warn!(
            organization_id = %organization_id,
            person_count = persons.len(),
            limit = policy.max_persons,
            "Refusing to build oversized org chart"
        );
        return Err(ApiError::InputTooLarge {
            limit: policy.max_persons,
            actual: persons.len(),
        });
    }

    debug!(
        organization_id = %organization_id,
        person_count = persons.len(),
        "Loaded directory snapshot"
    );
    Ok(DirectorySnapshot {
        organization,
        persons,
    })
}

/// Builds and searches an org chart from a snapshot.
///
/// # Errors
///
/// Returns an error if the seniority filter is not a recognized tag.
pub fn build_org_chart_response(
    snapshot: &DirectorySnapshot,
    request: &OrgChartRequest,
    policy: &ChartPolicy,
) -> Result<OrgChartResponse, ApiError> {
    let filter: SearchFilter = search_filter(request)?;
    let chart: OrgChart = build_org_chart(&snapshot.persons, &policy.engine);

    let hierarchy: Vec<OrgChartNodeInfo> = if filter.is_empty() {
        chart.roots.iter().map(OrgChartNodeInfo::from).collect()
    } else {
        let matches = search_forest(&chart.roots, &filter);
        info!(
            organization_id = %snapshot.organization.id,
            root_count = matches.len(),
            "Filtered org chart"
        );
        matches.iter().map(OrgChartNodeInfo::from).collect()
    };

    Ok(OrgChartResponse {
        organization: OrganizationInfo::new(&snapshot.organization, snapshot.persons.len()),
        hierarchy,
        total_persons: chart.total_persons,
        strategy: chart.strategy,
        hidden_person_ids: chart.hidden.iter().map(|id| id.value()).collect(),
    })
}

/// Builds the statistics response from a snapshot.
#[must_use]
pub fn build_org_chart_stats_response(
    snapshot: &DirectorySnapshot,
    policy: &ChartPolicy,
) -> OrgChartStatsResponse {
    let chart: OrgChart = build_org_chart(&snapshot.persons, &policy.engine);
    let stats: OrgChartStats = statistics(&chart.roots);

    OrgChartStatsResponse {
        organization: OrganizationInfo::new(&snapshot.organization, snapshot.persons.len()),
        strategy: chart.strategy,
        total_persons: stats.total_persons,
        by_department: stats.by_department,
        by_seniority: stats.by_seniority,
        average_direct_reports: stats.average_direct_reports,
        max_depth: stats.max_depth,
    }
}

/// Renders the org chart of a snapshot as CSV.
///
/// # Errors
///
/// Returns an error if the CSV cannot be written.
pub fn build_org_chart_csv(
    snapshot: &DirectorySnapshot,
    policy: &ChartPolicy,
) -> Result<String, ApiError> {
    let chart: OrgChart = build_org_chart(&snapshot.persons, &policy.engine);
    forest_to_csv(&chart.roots)
}

/// Checks an org-chart request's filters without touching the directory.
///
/// # Errors
///
/// Returns an error if the seniority filter is not a recognized tag.
pub fn validate_org_chart_request(request: &OrgChartRequest) -> Result<(), ApiError> {
    search_filter(request).map(|_| ())
}

/// Builds an organization's org chart.
///
/// # Errors
///
/// Returns an error if the organization does not exist, is too large, the
/// seniority filter is unknown, or the directory cannot be read.
pub fn get_org_chart<D: Directory + ?Sized>(
    directory: &mut D,
    request: &OrgChartRequest,
    policy: &ChartPolicy,
) -> Result<OrgChartResponse, ApiError> {
    validate_org_chart_request(request)?;
    let snapshot: DirectorySnapshot = load_snapshot(directory, request.organization_id, policy)?;
    build_org_chart_response(&snapshot, request, policy)
}

/// Computes summary statistics for an organization's org chart.
///
/// # Errors
///
/// Returns an error if the organization does not exist, is too large, or the
/// directory cannot be read.
pub fn get_org_chart_stats<D: Directory + ?Sized>(
    directory: &mut D,
    organization_id: OrganizationId,
    policy: &ChartPolicy,
) -> Result<OrgChartStatsResponse, ApiError> {
    let snapshot: DirectorySnapshot = load_snapshot(directory, organization_id, policy)?;
    Ok(build_org_chart_stats_response(&snapshot, policy))
}

/// Exports an organization's org chart as CSV.
///
/// # Errors
///
/// Returns an error if the organization does not exist, is too large, or the
/// directory cannot be read.
pub fn export_org_chart_csv<D: Directory + ?Sized>(
    directory: &mut D,
    organization_id: OrganizationId,
    policy: &ChartPolicy,
) -> Result<String, ApiError> {
    let snapshot: DirectorySnapshot = load_snapshot(directory, organization_id, policy)?;
    build_org_chart_csv(&snapshot, policy)
}

fn search_filter(request: &OrgChartRequest) -> Result<SearchFilter, ApiError> {
    let seniority: Option<String> = match non_blank(request.seniority.as_deref()) {
        Some(tag) => Some(
            SeniorityLevel::from_str(tag)
                .map_err(translate_domain_error)?
                .as_str()
                .to_string(),
        ),
        None => None,
    };

    Ok(SearchFilter {
        query: non_blank(request.query.as_deref()).map(str::to_string),
        department: non_blank(request.department.as_deref()).map(str::to_string),
        seniority,
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
