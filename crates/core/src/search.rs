// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Search and filtering over a built forest.
//!
//! A node survives when it matches or when any of its descendants matches,
//! so the path from a root down to every match stays intact.

use crate::node::HierarchyNode;

/// Criteria for narrowing a forest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    /// Free-text query matched against name, title, email and department.
    pub query: Option<String>,
    /// Exact department bucket key.
    pub department: Option<String>,
    /// Canonical seniority tag.
    pub seniority: Option<String>,
}

impl SearchFilter {
    /// Returns whether the filter keeps every node.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.normalized_query().is_none() && self.department.is_none() && self.seniority.is_none()
    }

    fn normalized_query(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    fn matches(&self, node: &HierarchyNode, query: Option<&str>) -> bool {
        let person = &node.person;

        let text_match = query.is_none_or(|q| {
            person.name.to_lowercase().contains(q)
                || person.title.to_lowercase().contains(q)
                || person
                    .email
                    .as_deref()
                    .is_some_and(|email| email.to_lowercase().contains(q))
                || node.department.to_lowercase().contains(q)
        });

        let department_match = self
            .department
            .as_deref()
            .is_none_or(|department| department == node.department);

        let seniority_match = self.seniority.as_deref().is_none_or(|seniority| {
            person
                .seniority_level()
                .is_some_and(|level| level.as_str() == seniority)
        });

        text_match && department_match && seniority_match
    }
}

/// Narrows a forest to the nodes matching a filter and their ancestors.
///
/// Kept nodes with kept children are expanded. `direct_report_count` keeps
/// its unfiltered value.
#[must_use]
pub fn search_forest(forest: &[HierarchyNode], filter: &SearchFilter) -> Vec<HierarchyNode> {
    if filter.is_empty() {
        return forest.to_vec();
    }

    let query: Option<String> = filter.normalized_query();
    forest
        .iter()
        .filter_map(|root| prune(root, filter, query.as_deref()))
        .collect()
}

fn prune(node: &HierarchyNode, filter: &SearchFilter, query: Option<&str>) -> Option<HierarchyNode> {
    let children: Vec<HierarchyNode> = node
        .children
        .iter()
        .filter_map(|child| prune(child, filter, query))
        .collect();

    if children.is_empty() && !filter.matches(node, query) {
        return None;
    }

    Some(HierarchyNode {
        auto_expand: node.auto_expand || !children.is_empty(),
        children,
        ..node.clone_shallow()
    })
}

impl HierarchyNode {
    fn clone_shallow(&self) -> Self {
        Self {
            person: self.person.clone(),
            rank: self.rank,
            department: self.department.clone(),
            level: self.level,
            bucket_position: self.bucket_position,
            direct_report_count: self.direct_report_count,
            auto_expand: self.auto_expand,
            children: Vec::new(),
        }
    }
}
