// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use orgchart::{BuildStrategy, HierarchyNode};
use orgchart_domain::{Organization, OrganizationId, format_label};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// API request for an organization's org chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgChartRequest {
    /// The organization to chart.
    pub organization_id: OrganizationId,
    /// Optional free-text search over name, title, email and department.
    pub query: Option<String>,
    /// Optional exact department filter.
    pub department: Option<String>,
    /// Optional seniority filter. Parsed leniently.
    pub seniority: Option<String>,
}

impl OrgChartRequest {
    /// Creates an unfiltered request.
    #[must_use]
    pub const fn new(organization_id: OrganizationId) -> Self {
        Self {
            organization_id,
            query: None,
            department: None,
            seniority: None,
        }
    }
}

/// Organization summary included with every chart response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationInfo {
    /// The organization's identifier.
    pub id: i64,
    /// The organization's display name.
    pub name: String,
    /// Number of active persons the chart was built from.
    pub person_count: usize,
}

impl OrganizationInfo {
    /// Summarizes an organization.
    #[must_use]
    pub fn new(organization: &Organization, person_count: usize) -> Self {
        Self {
            id: organization.id.value(),
            name: organization.name.clone(),
            person_count,
        }
    }
}

/// One node of the rendered hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgChartNodeInfo {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub profile_url: Option<String>,
    /// The department label as stored.
    pub department: Option<String>,
    /// The seniority tag as stored.
    pub seniority: Option<String>,
    /// Human-readable seniority, for recognized tags only.
    pub seniority_label: Option<String>,
    pub rank: u8,
    pub level: usize,
    pub bucket_position: usize,
    pub direct_report_count: usize,
    pub auto_expand: bool,
    pub children: Vec<Self>,
}

impl From<&HierarchyNode> for OrgChartNodeInfo {
    fn from(node: &HierarchyNode) -> Self {
        let person = &node.person;
        Self {
            id: person.id.value(),
            name: person.name.clone(),
            title: person.title.clone(),
            email: person.email.clone(),
            phone: person.phone.clone(),
            profile_url: person.profile_url.clone(),
            department: person.department.clone(),
            seniority: person.seniority.clone(),
            seniority_label: person
                .seniority_level()
                .map(|level| format_label(level.as_str())),
            rank: node.rank,
            level: node.level,
            bucket_position: node.bucket_position,
            direct_report_count: node.direct_report_count,
            auto_expand: node.auto_expand,
            children: node.children.iter().map(Self::from).collect(),
        }
    }
}

/// API response for an org chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgChartResponse {
    pub organization: OrganizationInfo,
    /// Root nodes in display order, each carrying its subtree.
    pub hierarchy: Vec<OrgChartNodeInfo>,
    /// Number of persons the chart was built from, before any search.
    pub total_persons: usize,
    pub strategy: BuildStrategy,
    /// Persons left out of the chart by the ungrounded-person policy.
    pub hidden_person_ids: Vec<i64>,
}

/// API response for org chart statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgChartStatsResponse {
    pub organization: OrganizationInfo,
    pub strategy: BuildStrategy,
    /// Number of persons visible in the chart.
    pub total_persons: usize,
    /// Visible persons per department bucket.
    pub by_department: BTreeMap<String, usize>,
    /// Visible persons per canonical seniority tag (`UNKNOWN` otherwise).
    pub by_seniority: BTreeMap<String, usize>,
    pub average_direct_reports: f64,
    pub max_depth: usize,
}
