// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The hierarchy build pipeline.
//!
//! ordering -> partition -> manager assignment -> conditional fallback ->
//! materialization -> annotation
//!
//! The build never fails. Missing or unrecognized fields resolve to their
//! defaults before the pipeline starts.

use crate::annotate::annotate;
use crate::builder::{Placement, UngroundedPolicy, assign_managers};
use crate::fallback::{needs_fallback, single_root_placement};
use crate::node::{HierarchyNode, materialize};
use crate::ordering::{OrderedPerson, order_persons};
use crate::partition::{DepartmentBucket, partition};
use orgchart_domain::{Person, PersonId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Options controlling a hierarchy build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Handling of non-executive persons with no senior predecessor.
    pub ungrounded: UngroundedPolicy,
}

/// Which path produced a forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildStrategy {
    /// Per-department manager assignment.
    Departmental,
    /// Single most senior root with everyone else as a direct report.
    SingleRootFallback,
}

impl BuildStrategy {
    /// Returns the wire name of the strategy.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Departmental => "departmental",
            Self::SingleRootFallback => "single_root_fallback",
        }
    }
}

impl std::fmt::Display for BuildStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A built org chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrgChart {
    /// Root nodes in global order.
    pub roots: Vec<HierarchyNode>,
    /// Number of persons handed to the build.
    pub total_persons: usize,
    /// The path that produced the forest.
    pub strategy: BuildStrategy,
    /// Persons left out of the forest, in global order.
    pub hidden: Vec<PersonId>,
}

impl OrgChart {
    /// Returns the number of persons present in the forest.
    #[must_use]
    pub fn visible_persons(&self) -> usize {
        self.roots.iter().map(HierarchyNode::subtree_size).sum()
    }

    /// Returns whether the forest has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// Builds the org chart for a snapshot of an organization's persons.
///
/// Person identifiers are expected to be unique within the snapshot.
#[must_use]
pub fn build_org_chart(persons: &[Person], options: &EngineOptions) -> OrgChart {
    let ordered: Vec<OrderedPerson<'_>> = order_persons(persons);
    let buckets: Vec<DepartmentBucket<'_>> = partition(&ordered);
    debug!(
        person_count = ordered.len(),
        bucket_count = buckets.len(),
        policy = ?options.ungrounded,
        "Partitioned persons into department buckets"
    );

    let departmental: Placement = assign_managers(&ordered, &buckets, options.ungrounded);

    let (placement, strategy) = if needs_fallback(&departmental, ordered.len()) {
        (
            single_root_placement(departmental),
            BuildStrategy::SingleRootFallback,
        )
    } else {
        (departmental, BuildStrategy::Departmental)
    };

    let mut roots: Vec<HierarchyNode> = materialize(&ordered, &placement);
    annotate(&mut roots);

    let hidden: Vec<PersonId> = placement
        .hidden
        .iter()
        .map(|&index| ordered[index].person.id)
        .collect();

    info!(
        total_persons = persons.len(),
        root_count = roots.len(),
        hidden_count = hidden.len(),
        %strategy,
        "Built org chart"
    );

    OrgChart {
        roots,
        total_persons: persons.len(),
        strategy,
        hidden,
    }
}
