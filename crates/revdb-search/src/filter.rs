use revdb_core::{distance_km, matches_country, BusinessRecord};
use serde::Serialize;

use crate::listing::ListingQuery;
use crate::params::contains_ci;
use crate::scoring::{location_label_matches, score, LISTING_PROFILE, LOCATION_FILTER_BONUS};

/// A candidate that survived filtering, annotated for sorting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredBusiness {
    #[serde(flatten)]
    pub business: BusinessRecord,
    /// Zero unless the query carried a search term.
    pub relevance: u32,
    /// Set only when the query has an origin and the business has coordinates.
    pub distance_km: Option<f64>,
}

/// Apply every listing filter (AND-combined) and annotate the survivors.
///
/// Order of the input is preserved.
#[must_use]
pub fn filter_candidates(catalog: Vec<BusinessRecord>, query: &ListingQuery) -> Vec<ScoredBusiness> {
    let terms = query.country_terms();

    catalog
        .into_iter()
        .filter(|b| {
            query
                .category
                .as_deref()
                .is_none_or(|category| b.category == category)
        })
        .filter(|b| {
            query
                .term
                .as_ref()
                .is_none_or(|term| matches_term(b, term.lowered()))
        })
        .filter(|b| {
            query
                .location
                .as_deref()
                .is_none_or(|location| matches_location(b, location))
        })
        .filter(|b| !query.verified_only || b.verified)
        .filter(|b| matches_country(b.country.as_deref(), &terms))
        .filter_map(|business| {
            let distance = query.geo.and_then(|geo| {
                business
                    .coordinates()
                    .map(|(lat, lng)| distance_km(geo.lat, geo.lng, lat, lng))
            });

            if let Some(radius) = query.geo.and_then(|geo| geo.radius_km) {
                if !distance.is_some_and(|d| d <= radius) {
                    return None;
                }
            }

            let relevance = query.term.as_ref().map_or(0, |term| {
                let mut relevance = score(&business, term.lowered(), LISTING_PROFILE);
                if let Some(location) = query.location.as_deref() {
                    if location_label_matches(&business, location) {
                        relevance += LOCATION_FILTER_BONUS;
                    }
                }
                relevance
            });

            Some(ScoredBusiness {
                business,
                relevance,
                distance_km: distance,
            })
        })
        .filter(|candidate| candidate.business.average_rating >= query.min_rating)
        .collect()
}

fn matches_term(business: &BusinessRecord, lowered: &str) -> bool {
    contains_ci(Some(&business.name), lowered)
        || contains_ci(business.description.as_deref(), lowered)
        || contains_ci(Some(&business.category), lowered)
        || matches_location(business, lowered)
}

fn matches_location(business: &BusinessRecord, lowered: &str) -> bool {
    contains_ci(business.city.as_deref(), lowered)
        || contains_ci(business.state.as_deref(), lowered)
        || contains_ci(business.country.as_deref(), lowered)
}
