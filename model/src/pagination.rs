use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::User;

/// Rows per page, for the table and the list service alike.
pub const PAGE_SIZE: usize = 10;

/// Number of pages needed for `total` rows.
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

/// Index range of the 1-based `page` within `len` rows.
///
/// Pages past the end yield an empty range at `len`.
pub fn page_range(page: usize, len: usize) -> Range<usize> {
    let start = page
        .saturating_sub(1)
        .saturating_mul(PAGE_SIZE)
        .min(len);
    let end = start.saturating_add(PAGE_SIZE).min(len);
    start..end
}

/// Interpret a raw `page` query value. Missing, non-numeric and non-positive
/// values all mean page 1.
pub fn parse_page(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|page| *page >= 1)
        .unwrap_or(1)
}

/// Body of `GET /api/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUsersResponse {
    pub users: Vec<User>,
    pub total_users: usize,
}
