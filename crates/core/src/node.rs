// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Hierarchy nodes and their materialization from a placement.

use crate::builder::Placement;
use crate::ordering::OrderedPerson;
use orgchart_domain::{Person, PersonId, SeniorityRank};

/// One person in the rendered hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyNode {
    /// The directory record this node renders.
    pub person: Person,
    /// The resolved seniority rank.
    pub rank: SeniorityRank,
    /// The department bucket key the person was grouped under.
    pub department: String,
    /// Depth in the rendered tree (roots are 0).
    pub level: usize,
    /// Position within the person's department bucket.
    pub bucket_position: usize,
    /// Number of immediate children.
    pub direct_report_count: usize,
    /// Whether a tree view should show this node expanded by default.
    pub auto_expand: bool,
    /// Direct reports, in assignment order.
    pub children: Vec<Self>,
}

impl HierarchyNode {
    /// Returns the person's identifier.
    #[must_use]
    pub const fn id(&self) -> PersonId {
        self.person.id
    }

    /// Returns the number of nodes in this subtree, including this one.
    #[must_use]
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(Self::subtree_size).sum::<usize>()
    }

    /// Visits this node and its descendants in pre-order.
    ///
    /// The visitor receives each node with its parent, if any.
    pub fn walk<'a, F>(&'a self, parent: Option<&'a Self>, visit: &mut F)
    where
        F: FnMut(&'a Self, Option<&'a Self>),
    {
        visit(self, parent);
        for child in &self.children {
            child.walk(Some(self), visit);
        }
    }
}

/// Materializes the forest described by a placement.
///
/// Only annotation-free structure is produced here: `level`,
/// `direct_report_count` and `auto_expand` are left at their defaults for
/// the display pass to fill in.
#[must_use]
pub fn materialize(ordered: &[OrderedPerson<'_>], placement: &Placement) -> Vec<HierarchyNode> {
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); ordered.len()];
    for (index, parent) in placement.parents.iter().enumerate() {
        if let Some(manager) = parent {
            children[*manager].push(index);
        }
    }

    placement
        .roots
        .iter()
        .map(|&root| build_node(root, ordered, placement, &children))
        .collect()
}

// Recursion depth is bounded by the number of distinct ranks, since every
// manager is strictly more senior than their reports.
fn build_node(
    index: usize,
    ordered: &[OrderedPerson<'_>],
    placement: &Placement,
    children: &[Vec<usize>],
) -> HierarchyNode {
    let entry: &OrderedPerson<'_> = &ordered[index];
    HierarchyNode {
        person: entry.person.clone(),
        rank: entry.rank,
        department: entry.department.to_string(),
        level: 0,
        bucket_position: placement.bucket_positions[index],
        direct_report_count: 0,
        auto_expand: false,
        children: children[index]
            .iter()
            .map(|&child| build_node(child, ordered, placement, children))
            .collect(),
    }
}
