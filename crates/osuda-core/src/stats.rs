//! Calendar-day statistics over the collection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::Post;

/// Post count for a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStat {
    pub date: String,
    pub count: u64,
}

/// Group posts by effective-date calendar day and count them.
///
/// The range is inclusive and only applies when both bounds are present;
/// bounds are compared as plain strings, which is correct for zero-padded
/// ISO days. Days without posts are absent from the result, which is
/// ascending by day.
pub fn aggregate(posts: &[Post], start_date: Option<&str>, end_date: Option<&str>) -> Vec<DayStat> {
    let mut buckets: BTreeMap<String, u64> = BTreeMap::new();

    for post in posts {
        let day = post.effective_day();
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if day.as_str() < start || day.as_str() > end {
                continue;
            }
        }
        *buckets.entry(day).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|(date, count)| DayStat { date, count })
        .collect()
}
