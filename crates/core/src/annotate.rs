// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::node::HierarchyNode;
use orgchart_domain::is_executive;

/// Stamps display metadata on every node of a forest.
///
/// `level` is the depth along parent links (roots are 0),
/// `direct_report_count` is the number of children and `auto_expand` is set
/// for executive ranks.
pub fn annotate(forest: &mut [HierarchyNode]) {
    for root in forest {
        annotate_node(root, 0);
    }
}

fn annotate_node(node: &mut HierarchyNode, level: usize) {
    node.level = level;
    node.direct_report_count = node.children.len();
    node.auto_expand = is_executive(node.rank);
    for child in &mut node.children {
        annotate_node(child, level + 1);
    }
}
