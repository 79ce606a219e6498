// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ordering::OrderedPerson;
use std::collections::HashMap;

/// The persons sharing one department key.
///
/// Members are indices into the globally ordered slice the bucket was
/// partitioned from, kept in that global order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentBucket<'a> {
    /// The department key.
    pub department: &'a str,
    /// Indices into the ordered person slice.
    pub members: Vec<usize>,
}

/// Groups an ordered person slice by department key.
///
/// Buckets are returned in order of the first appearance of their key, which
/// puts the department of the most senior person first. Keys are compared
/// exactly, so differently cased labels land in different buckets.
#[must_use]
pub fn partition<'a>(ordered: &[OrderedPerson<'a>]) -> Vec<DepartmentBucket<'a>> {
    let mut buckets: Vec<DepartmentBucket<'a>> = Vec::new();
    let mut index_by_key: HashMap<&'a str, usize> = HashMap::new();

    for (position, entry) in ordered.iter().enumerate() {
        let bucket_index: usize = *index_by_key.entry(entry.department).or_insert_with(|| {
            buckets.push(DepartmentBucket {
                department: entry.department,
                members: Vec::new(),
            });
            buckets.len() - 1
        });
        buckets[bucket_index].members.push(position);
    }

    buckets
}
