//! Pure filtering and ordering over a snapshot of the collection.

use crate::domain::Post;

/// Sort order for post listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    /// Anything other than `oldest` sorts newest-first.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("oldest") => SortOrder::Oldest,
            _ => SortOrder::Newest,
        }
    }
}

/// Filter/sort parameters for a post listing.
///
/// Filters are conjunctive; an absent field means no filtering on that
/// dimension. Applying a query never mutates the underlying collection.
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    /// Case-insensitive substring on `content`.
    pub search: Option<String>,
    /// Case-insensitive substring on the raw `keywords` field, not the
    /// parsed tag set.
    pub keyword: Option<String>,
    /// Effective-date prefix, usually a `YYYY-MM-DD` day.
    pub date: Option<String>,
    pub sort: SortOrder,
}

impl PostQuery {
    /// Apply the query to a snapshot, returning the visible posts in order.
    /// Sorting is stable: ties keep collection order.
    pub fn apply(&self, posts: Vec<Post>) -> Vec<Post> {
        let mut visible: Vec<Post> = posts.into_iter().filter(|p| self.matches(p)).collect();

        match self.sort {
            SortOrder::Newest => {
                visible.sort_by(|a, b| b.effective_date().cmp(&a.effective_date()))
            }
            SortOrder::Oldest => {
                visible.sort_by(|a, b| a.effective_date().cmp(&b.effective_date()))
            }
        }

        visible
    }

    fn matches(&self, post: &Post) -> bool {
        if let Some(term) = &self.search {
            if !post
                .content
                .to_lowercase()
                .contains(&term.to_lowercase())
            {
                return false;
            }
        }

        if let Some(term) = &self.keyword {
            if !post
                .keywords
                .to_lowercase()
                .contains(&term.to_lowercase())
            {
                return false;
            }
        }

        if let Some(prefix) = &self.date {
            if !post.effective_date().to_rfc3339().starts_with(prefix) {
                return false;
            }
        }

        true
    }
}
