use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a single journal entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub content: String,
    /// Raw comma-separated tag list, stored verbatim.
    pub keywords: String,
    pub created_at: DateTime<Utc>,
    /// Optional override of `created_at` for display, sorting, and
    /// day-bucketing. Cleared when an update omits it.
    pub manual_date: Option<DateTime<Utc>>,
}

impl Post {
    /// The date a post is sorted and bucketed under: `manual_date` when
    /// set, `created_at` otherwise. Every filter, ordering, and statistic
    /// goes through this accessor.
    pub fn effective_date(&self) -> DateTime<Utc> {
        self.manual_date.unwrap_or(self.created_at)
    }

    /// Calendar day (`YYYY-MM-DD`) of the effective date.
    pub fn effective_day(&self) -> String {
        self.effective_date().date_naive().to_string()
    }
}

/// Validated input for creating or updating a post.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub content: String,
    pub keywords: String,
    pub manual_date: Option<DateTime<Utc>>,
}

/// Parse a client-supplied timestamp.
///
/// Accepts RFC 3339, the naive `YYYY-MM-DDTHH:MM[:SS]` form produced by
/// datetime-local inputs (read as UTC), and a bare calendar day (midnight
/// UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|day| day.and_time(NaiveTime::MIN).and_utc())
}
