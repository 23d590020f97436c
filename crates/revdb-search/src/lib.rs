//! Business discovery engine: filtering, relevance scoring, sorting and
//! pagination over an in-memory candidate catalog.
//!
//! Everything here is synchronous and request-scoped. Callers fetch the
//! catalog once per query and hand it to [`run_listing`] or [`suggest`].

pub mod analytics;
pub mod filter;
pub mod listing;
pub mod paginate;
pub mod params;
pub mod reviews;
pub mod scoring;
pub mod sort;
pub mod suggest;

pub use analytics::{
    category_analytics, count_by_category, CategoryAnalytics, CategoryFamily, CategoryStat,
    GroupedFamily,
};
pub use filter::{filter_candidates, ScoredBusiness};
pub use listing::{run_listing, GeoFilter, Listing, ListingParams, ListingQuery};
pub use paginate::{paginate, Page, PageWindow};
pub use params::{coerce_number, SearchTerm, MIN_TERM_CHARS};
pub use reviews::{ReviewPageParams, ReviewPageQuery, ReviewSort};
pub use scoring::{
    score, Signal, GLOBAL_SEARCH_PROFILE, LISTING_PROFILE, LOCATION_FILTER_BONUS, POPULARITY_CAP,
};
pub use sort::{sort_candidates, SortMode};
pub use suggest::{
    suggest, CategorySuggestion, CompanySuggestion, LocationSuggestion, SearchResponse,
};
