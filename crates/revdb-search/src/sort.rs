use std::cmp::Ordering;

use crate::filter::ScoredBusiness;
use crate::listing::ListingQuery;

/// Listing sort strategy. Unknown values fall back to [`SortMode::MostRelevant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    Nearest,
    MostReviewed,
    RecentlyReviewed,
    Newest,
    #[default]
    MostRelevant,
}

impl SortMode {
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("nearest") => SortMode::Nearest,
            Some("most-reviewed") => SortMode::MostReviewed,
            Some("recently-reviewed") => SortMode::RecentlyReviewed,
            Some("newest") => SortMode::Newest,
            _ => SortMode::MostRelevant,
        }
    }

    /// `MostRelevant` resolved against the query: proximity when an origin
    /// is present, relevance when a term is present, recency otherwise.
    #[must_use]
    fn resolve(self, query: &ListingQuery) -> Strategy {
        match self {
            SortMode::Nearest => Strategy::Distance,
            SortMode::MostReviewed => Strategy::ReviewCount,
            SortMode::RecentlyReviewed => Strategy::Activity,
            SortMode::Newest => Strategy::Created,
            SortMode::MostRelevant if query.geo.is_some() => Strategy::Distance,
            SortMode::MostRelevant if query.term.is_some() => Strategy::Relevance,
            SortMode::MostRelevant => Strategy::Created,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    Distance,
    ReviewCount,
    Activity,
    Created,
    Relevance,
}

/// Stable in-place sort; equal keys keep their incoming order.
pub fn sort_candidates(candidates: &mut [ScoredBusiness], mode: SortMode, query: &ListingQuery) {
    let compare: fn(&ScoredBusiness, &ScoredBusiness) -> Ordering = match mode.resolve(query) {
        Strategy::Distance => by_distance,
        Strategy::ReviewCount => |a, b| b.business.review_count.cmp(&a.business.review_count),
        Strategy::Activity => |a, b| b.business.activity_at().cmp(&a.business.activity_at()),
        Strategy::Created => |a, b| b.business.created_at.cmp(&a.business.created_at),
        Strategy::Relevance => |a, b| b.relevance.cmp(&a.relevance),
    };
    candidates.sort_by(compare);
}

/// Ascending distance; candidates without one sort last.
fn by_distance(a: &ScoredBusiness, b: &ScoredBusiness) -> Ordering {
    let a = a.distance_km.unwrap_or(f64::INFINITY);
    let b = b.distance_km.unwrap_or(f64::INFINITY);
    a.total_cmp(&b)
}
