//! Typeahead aggregation: top companies, matching categories and locations
//! for a short free-text query.

use std::collections::HashMap;

use revdb_core::{country_terms, matches_country, round_rating, BusinessRecord, CATEGORY_CATALOG};
use serde::Serialize;

use crate::analytics::count_by_category;
use crate::params::{contains_ci, SearchTerm};
use crate::scoring::{score, GLOBAL_SEARCH_PROFILE};

/// Businesses considered per text match before ranking.
const CANDIDATE_LIMIT: usize = 20;
const COMPANY_LIMIT: usize = 5;
const CATEGORY_MATCH_LIMIT: usize = 8;
const CATEGORY_LIMIT: usize = 6;
const LOCATION_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySuggestion {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub website: Option<String>,
    pub category: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub logo: Option<String>,
    pub verified: bool,
    pub review_count: u32,
    pub average_rating: f64,
    pub relevance: u32,
}

impl CompanySuggestion {
    fn new(business: &BusinessRecord, relevance: u32) -> Self {
        Self {
            id: business.id,
            name: business.name.clone(),
            slug: business.slug.clone(),
            website: business.website.clone(),
            category: business.category.clone(),
            city: business.city.clone(),
            state: business.state.clone(),
            country: business.country.clone(),
            logo: business.logo.clone(),
            verified: business.verified,
            review_count: business.review_count,
            average_rating: round_rating(business.average_rating),
            relevance,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySuggestion {
    pub name: String,
    pub business_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSuggestion {
    pub name: String,
    pub business_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,
    pub country: String,
    pub companies: Vec<CompanySuggestion>,
    pub categories: Vec<CategorySuggestion>,
    pub locations: Vec<LocationSuggestion>,
}

impl SearchResponse {
    /// The response for a query too short to search on.
    #[must_use]
    pub fn empty(query: &str, country: &str) -> Self {
        Self {
            query: query.trim().to_string(),
            country: country.to_string(),
            companies: Vec::new(),
            categories: Vec::new(),
            locations: Vec::new(),
        }
    }
}

/// Build all three suggestion lists for `term` within `country`.
///
/// `catalog` is the full candidate set; country filtering happens here.
#[must_use]
pub fn suggest(term: &SearchTerm, country: &str, catalog: &[BusinessRecord]) -> SearchResponse {
    let terms = country_terms(country);
    let q = term.lowered();
    let in_country = |b: &&BusinessRecord| matches_country(b.country.as_deref(), &terms);

    let companies = suggest_companies(catalog.iter().filter(in_country), q);
    let categories = suggest_categories(catalog, &terms, q);
    let locations = suggest_locations(catalog.iter().filter(in_country), q);

    tracing::debug!(
        query = term.as_str(),
        country,
        companies = companies.len(),
        categories = categories.len(),
        locations = locations.len(),
        "typeahead suggestions built"
    );

    SearchResponse {
        query: term.as_str().to_string(),
        country: country.to_string(),
        companies,
        categories,
        locations,
    }
}

fn suggest_companies<'a>(
    candidates: impl Iterator<Item = &'a BusinessRecord>,
    q: &str,
) -> Vec<CompanySuggestion> {
    let mut companies: Vec<CompanySuggestion> = candidates
        .filter(|b| {
            contains_ci(Some(&b.name), q)
                || contains_ci(Some(&b.category), q)
                || contains_ci(b.website.as_deref(), q)
                || matches_location(b, q)
        })
        .take(CANDIDATE_LIMIT)
        .map(|b| CompanySuggestion::new(b, score(b, q, GLOBAL_SEARCH_PROFILE)))
        .collect();

    companies.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    companies.truncate(COMPANY_LIMIT);
    companies
}

fn suggest_categories(
    catalog: &[BusinessRecord],
    country_terms: &[String],
    q: &str,
) -> Vec<CategorySuggestion> {
    let matched: Vec<&str> = CATEGORY_CATALOG
        .iter()
        .filter(|entry| contains_ci(Some(entry.name), q) || contains_ci(Some(entry.slug), q))
        .take(CATEGORY_MATCH_LIMIT)
        .map(|entry| entry.name)
        .collect();
    if matched.is_empty() {
        return Vec::new();
    }

    let counts = count_by_category(catalog, country_terms);
    let mut categories: Vec<CategorySuggestion> = matched
        .into_iter()
        .map(|name| CategorySuggestion {
            name: name.to_string(),
            business_count: counts.get(name).copied().unwrap_or(0),
        })
        .collect();

    categories.sort_by(|a, b| {
        b.business_count
            .cmp(&a.business_count)
            .then_with(|| a.name.cmp(&b.name))
    });
    categories.truncate(CATEGORY_LIMIT);
    categories
}

fn suggest_locations<'a>(
    candidates: impl Iterator<Item = &'a BusinessRecord>,
    q: &str,
) -> Vec<LocationSuggestion> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, u32> = HashMap::new();

    for label in candidates
        .filter(|b| matches_location(b, q))
        .take(CANDIDATE_LIMIT)
        .filter_map(BusinessRecord::location_label)
    {
        let count = counts.entry(label.clone()).or_insert(0);
        if *count == 0 {
            order.push(label);
        }
        *count += 1;
    }

    let mut locations: Vec<LocationSuggestion> = order
        .into_iter()
        .map(|name| {
            let business_count = counts.get(&name).copied().unwrap_or(0);
            LocationSuggestion {
                name,
                business_count,
            }
        })
        .collect();

    locations.sort_by(|a, b| b.business_count.cmp(&a.business_count));
    locations.truncate(LOCATION_LIMIT);
    locations
}

fn matches_location(business: &BusinessRecord, q: &str) -> bool {
    contains_ci(business.city.as_deref(), q)
        || contains_ci(business.state.as_deref(), q)
        || contains_ci(business.country.as_deref(), q)
}
