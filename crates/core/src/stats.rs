// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::node::HierarchyNode;
use std::collections::BTreeMap;

/// Seniority key used for persons without a recognized classification.
pub const UNKNOWN_SENIORITY: &str = "UNKNOWN";

/// Summary figures for a built forest.
#[derive(Debug, Clone, PartialEq)]
pub struct OrgChartStats {
    /// Number of persons present in the forest.
    pub total_persons: usize,
    /// Person count per department bucket key.
    pub by_department: BTreeMap<String, usize>,
    /// Person count per canonical seniority tag.
    pub by_seniority: BTreeMap<String, usize>,
    /// Mean number of direct reports among persons who have any, to one
    /// decimal place.
    pub average_direct_reports: f64,
    /// Deepest level in the forest. Roots are level 0.
    pub max_depth: usize,
}

/// Computes summary figures for a forest.
#[must_use]
pub fn statistics(forest: &[HierarchyNode]) -> OrgChartStats {
    let mut total_persons: usize = 0;
    let mut by_department: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_seniority: BTreeMap<String, usize> = BTreeMap::new();
    let mut managers: usize = 0;
    let mut reports: usize = 0;
    let mut max_depth: usize = 0;

    for root in forest {
        root.walk(None, &mut |node, _| {
            total_persons += 1;
            *by_department.entry(node.department.clone()).or_insert(0) += 1;

            let seniority: &str = node
                .person
                .seniority_level()
                .map_or(UNKNOWN_SENIORITY, |level| level.as_str());
            *by_seniority.entry(seniority.to_string()).or_insert(0) += 1;

            if !node.children.is_empty() {
                managers += 1;
                reports += node.children.len();
            }
            max_depth = max_depth.max(node.level);
        });
    }

    OrgChartStats {
        total_persons,
        by_department,
        by_seniority,
        average_direct_reports: average_to_one_decimal(reports, managers),
        max_depth,
    }
}

#[allow(clippy::cast_precision_loss)]
fn average_to_one_decimal(total: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let average: f64 = total as f64 / count as f64;
    (average * 10.0).round() / 10.0
}
