//! Listing/browse queries: raw parameters in, ranked and paginated businesses out.

use revdb_core::{country_terms, BusinessRecord};
use serde::{Deserialize, Serialize};

use crate::filter::{filter_candidates, ScoredBusiness};
use crate::paginate::{paginate, Page, PageWindow};
use crate::params::{
    coerce_bounded, coerce_coordinate, coerce_count, coerce_number, coerce_page_size, non_blank,
    SearchTerm,
};
use crate::sort::{sort_candidates, SortMode};

pub const DEFAULT_PAGE_SIZE: u32 = 12;
pub const MAX_PAGE_SIZE: u32 = 50;
pub const DEFAULT_RADIUS_KM: f64 = 25.0;
/// Half the Earth's circumference; any larger radius covers the globe.
pub const MAX_RADIUS_KM: f64 = 20_016.0;
const MAX_RATING: f64 = 5.0;

/// Raw listing query-string parameters, exactly as received.
///
/// Every field is a string so that malformed numbers reach the coercion
/// step instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingParams {
    pub category: Option<String>,
    pub search: Option<String>,
    pub location: Option<String>,
    pub min_rating: Option<String>,
    pub verified: Option<String>,
    pub country: Option<String>,
    pub sort: Option<String>,
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub radius_km: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

/// Origin point plus an optional positive radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoFilter {
    pub lat: f64,
    pub lng: f64,
    /// `None` when the supplied radius was not positive; distances are still
    /// computed but nothing is excluded by them.
    pub radius_km: Option<f64>,
}

/// A fully-coerced listing query.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery {
    /// Exact category filter; `None` for absent or `"all"`.
    pub category: Option<String>,
    pub term: Option<SearchTerm>,
    /// A non-blank search shorter than [`crate::MIN_TERM_CHARS`]; matches nothing.
    pub term_too_short: bool,
    /// Lowercased location filter.
    pub location: Option<String>,
    pub min_rating: f64,
    pub verified_only: bool,
    pub country: String,
    pub geo: Option<GeoFilter>,
    pub sort: SortMode,
    /// `None` selects the legacy unpaginated response.
    pub window: Option<PageWindow>,
}

impl ListingQuery {
    /// Coerce raw parameters, falling back to `default_country` when none is given.
    #[must_use]
    pub fn from_params(params: &ListingParams, default_country: &str) -> Self {
        let category = non_blank(params.category.as_deref()).filter(|c| c != "all");
        let term = SearchTerm::parse(params.search.as_deref());
        let term_too_short = term.is_none() && non_blank(params.search.as_deref()).is_some();
        let location = non_blank(params.location.as_deref()).map(|l| l.to_lowercase());
        let min_rating = coerce_bounded(params.min_rating.as_deref(), 0.0, 0.0, MAX_RATING);
        let verified_only = params.verified.as_deref() == Some("true");
        let country =
            non_blank(params.country.as_deref()).unwrap_or_else(|| default_country.to_string());
        let sort = SortMode::parse(params.sort.as_deref());

        let lat = coerce_coordinate(params.lat.as_deref(), -90.0, 90.0);
        let lng = coerce_coordinate(params.lng.as_deref(), -180.0, 180.0);
        let geo = lat.zip(lng).map(|(lat, lng)| {
            let radius = coerce_number(
                params.radius_km.as_deref(),
                DEFAULT_RADIUS_KM,
                0.0,
                MAX_RADIUS_KM,
            );
            GeoFilter {
                lat,
                lng,
                radius_km: (radius > 0.0).then_some(radius),
            }
        });

        let window = (params.page.is_some() || params.page_size.is_some()).then(|| PageWindow {
            page: coerce_count(params.page.as_deref(), 1, 1, u32::MAX),
            page_size: coerce_page_size(
                params.page_size.as_deref(),
                DEFAULT_PAGE_SIZE,
                MAX_PAGE_SIZE,
            ),
        });

        Self {
            category,
            term,
            term_too_short,
            location,
            min_rating,
            verified_only,
            country,
            geo,
            sort,
            window,
        }
    }

    pub(crate) fn country_terms(&self) -> Vec<String> {
        country_terms(&self.country)
    }
}

/// Listing response: a bare array in legacy mode, a page otherwise.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Listing {
    All(Vec<ScoredBusiness>),
    Paged(Page<ScoredBusiness>),
}

impl Listing {
    /// Number of matching businesses before pagination.
    #[must_use]
    pub fn total(&self) -> usize {
        match self {
            Listing::All(items) => items.len(),
            Listing::Paged(page) => page.total,
        }
    }
}

/// Filter, score, sort and paginate `catalog` for `query`.
///
/// `catalog` is expected in creation-descending order; equal sort keys keep
/// that order. A too-short search term yields an empty result.
#[must_use]
pub fn run_listing(catalog: Vec<BusinessRecord>, query: &ListingQuery) -> Listing {
    let catalog_size = catalog.len();
    let mut candidates = if query.term_too_short {
        Vec::new()
    } else {
        filter_candidates(catalog, query)
    };
    sort_candidates(&mut candidates, query.sort, query);

    tracing::debug!(
        catalog_size,
        matched = candidates.len(),
        sort = ?query.sort,
        "listing query evaluated"
    );

    match query.window {
        Some(window) => Listing::Paged(paginate(candidates, window)),
        None => Listing::All(candidates),
    }
}
