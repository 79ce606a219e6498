// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::builder::Placement;
use tracing::debug;

/// Returns whether the single-root fallback must replace a placement.
///
/// The fallback applies only when persons exist but none of them was
/// placed at the top level.
#[must_use]
pub fn needs_fallback(placement: &Placement, person_count: usize) -> bool {
    person_count > 0 && placement.has_no_roots()
}

/// Builds the single-root placement for a globally ordered slice.
///
/// The first person in global order (the most senior, ties already broken by
/// the ordering rules) becomes the only root and everyone else reports to
/// them directly. Department boundaries are ignored. Bucket positions are
/// carried over from the departmental placement.
#[must_use]
pub fn single_root_placement(departmental: Placement) -> Placement {
    let person_count: usize = departmental.parents.len();
    debug!(person_count, "Falling back to single-root hierarchy");

    if person_count == 0 {
        return departmental;
    }

    let mut parents: Vec<Option<usize>> = vec![Some(0); person_count];
    parents[0] = None;

    Placement {
        parents,
        roots: vec![0],
        hidden: Vec::new(),
        bucket_positions: departmental.bucket_positions,
    }
}
