//! Per-business review page requests.
//!
//! Only the request side lives here; the page itself is fetched with
//! `LIMIT`/`OFFSET` by the catalog store and wrapped in a [`Page`](crate::Page).

use serde::Deserialize;

use crate::paginate::PageWindow;
use crate::params::{coerce_count, non_blank};

pub const DEFAULT_REVIEW_PAGE_SIZE: u32 = 8;
pub const MAX_REVIEW_PAGE_SIZE: u32 = 20;

/// Raw review-page query-string parameters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPageParams {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub rating: Option<String>,
    pub sort: Option<String>,
    pub country: Option<String>,
}

/// Review ordering. `Highest` and `Lowest` break ties newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewSort {
    #[default]
    Newest,
    Oldest,
    Highest,
    Lowest,
}

impl ReviewSort {
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("oldest") => ReviewSort::Oldest,
            Some("highest") => ReviewSort::Highest,
            Some("lowest") => ReviewSort::Lowest,
            _ => ReviewSort::Newest,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ReviewSort::Newest => "newest",
            ReviewSort::Oldest => "oldest",
            ReviewSort::Highest => "highest",
            ReviewSort::Lowest => "lowest",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewPageQuery {
    pub window: PageWindow,
    /// Exact star filter; `None` lists every rating.
    pub rating: Option<u8>,
    pub sort: ReviewSort,
    pub country: String,
}

impl ReviewPageQuery {
    #[must_use]
    pub fn from_params(params: &ReviewPageParams, default_country: &str) -> Self {
        let window = PageWindow {
            page: coerce_count(params.page.as_deref(), 1, 1, u32::MAX),
            page_size: coerce_count(
                params.page_size.as_deref(),
                DEFAULT_REVIEW_PAGE_SIZE,
                1,
                MAX_REVIEW_PAGE_SIZE,
            ),
        };

        Self {
            window,
            rating: parse_rating(params.rating.as_deref()),
            sort: ReviewSort::parse(params.sort.as_deref()),
            country: non_blank(params.country.as_deref())
                .unwrap_or_else(|| default_country.to_string()),
        }
    }
}

/// `"all"`, absent and anything outside 1..=5 disable the filter.
fn parse_rating(raw: Option<&str>) -> Option<u8> {
    raw.map(str::trim)
        .and_then(|s| s.parse::<u8>().ok())
        .filter(|r| (1..=5).contains(r))
}
