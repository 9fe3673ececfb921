//! Data Transfer Objects - request/query types for the API.

use serde::{Deserialize, Serialize};

/// Body of a create or update request.
///
/// `content` is required by the API but modeled as an Option so a missing
/// field reaches the validation layer instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostPayload {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub manual_date: Option<String>,
}

/// Query string of `GET /api/posts`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPostsQuery {
    pub search: Option<String>,
    pub keyword: Option<String>,
    pub date: Option<String>,
    pub sort: Option<String>,
}

/// Query string of `GET /api/stats`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}
