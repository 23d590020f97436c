//! Additive relevance scoring.
//!
//! Two weight tables exist for the same conceptual score: one for the
//! listing/browse endpoint and one for the typeahead search. They are kept
//! as separate constants and must not be merged.

use revdb_core::BusinessRecord;

use crate::params::{contains_ci, starts_with_ci};

/// An independent match signal evaluated against a lowercased query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    NameStartsWith,
    NameContains,
    DescriptionContains,
    CategoryStartsWith,
    CategoryContains,
    WebsiteContains,
    /// City, state or country contains the query.
    LocationContains,
}

impl Signal {
    #[must_use]
    pub fn matches(self, business: &BusinessRecord, lowered: &str) -> bool {
        match self {
            Signal::NameStartsWith => starts_with_ci(Some(&business.name), lowered),
            Signal::NameContains => contains_ci(Some(&business.name), lowered),
            Signal::DescriptionContains => contains_ci(business.description.as_deref(), lowered),
            Signal::CategoryStartsWith => starts_with_ci(Some(&business.category), lowered),
            Signal::CategoryContains => contains_ci(Some(&business.category), lowered),
            Signal::WebsiteContains => contains_ci(business.website.as_deref(), lowered),
            Signal::LocationContains => {
                contains_ci(business.city.as_deref(), lowered)
                    || contains_ci(business.state.as_deref(), lowered)
                    || contains_ci(business.country.as_deref(), lowered)
            }
        }
    }
}

/// Weights used by the listing/browse endpoint.
pub const LISTING_PROFILE: &[(Signal, u32)] = &[
    (Signal::NameStartsWith, 120),
    (Signal::NameContains, 70),
    (Signal::DescriptionContains, 20),
    (Signal::CategoryContains, 30),
    (Signal::LocationContains, 50),
];

/// Weights used by the typeahead/global search endpoint.
pub const GLOBAL_SEARCH_PROFILE: &[(Signal, u32)] = &[
    (Signal::NameStartsWith, 120),
    (Signal::NameContains, 70),
    (Signal::CategoryStartsWith, 40),
    (Signal::CategoryContains, 20),
    (Signal::WebsiteContains, 10),
    (Signal::LocationContains, 60),
];

/// Upper bound on the review-count contribution to a score.
pub const POPULARITY_CAP: u32 = 50;

/// Listing-only bonus when the separate location filter matches
/// the business's "city state country" label.
pub const LOCATION_FILTER_BONUS: u32 = 100;

/// Sum of every matching signal's weight plus the capped popularity bonus.
#[must_use]
pub fn score(business: &BusinessRecord, lowered: &str, profile: &[(Signal, u32)]) -> u32 {
    let signals: u32 = profile
        .iter()
        .filter(|(signal, _)| signal.matches(business, lowered))
        .map(|(_, weight)| weight)
        .sum();
    signals + business.review_count.min(POPULARITY_CAP)
}

/// True when the lowercased location filter is contained in
/// `"{city} {state} {country}"`.
#[must_use]
pub fn location_label_matches(business: &BusinessRecord, lowered_location: &str) -> bool {
    let label = format!(
        "{} {} {}",
        business.city.as_deref().unwrap_or_default(),
        business.state.as_deref().unwrap_or_default(),
        business.country.as_deref().unwrap_or_default()
    )
    .to_lowercase();
    label.contains(lowered_location)
}
