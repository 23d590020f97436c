//! Read-only discovery commands. Each mirrors one HTTP endpoint and prints
//! the same JSON payload the endpoint would return under `data`.

use clap::Args;
use revdb_core::{country_terms, sanitize_country_list};
use revdb_search::{
    category_analytics, params::non_blank, run_listing, suggest, ListingParams, ListingQuery,
    SearchResponse, SearchTerm,
};
use serde::Serialize;

/// Listing filters. Numeric values are passed through the same lenient
/// coercion as the HTTP query string.
#[derive(Debug, Default, Args)]
pub struct BrowseArgs {
    /// Exact category name, or "all"
    #[arg(long)]
    pub category: Option<String>,
    /// Free-text search term
    #[arg(long)]
    pub search: Option<String>,
    /// City, state or country text
    #[arg(long)]
    pub location: Option<String>,
    /// Minimum average rating (0-5)
    #[arg(long)]
    pub min_rating: Option<String>,
    /// Only verified businesses
    #[arg(long)]
    pub verified: bool,
    #[arg(long)]
    pub country: Option<String>,
    /// nearest | most-reviewed | recently-reviewed | newest | most-relevant
    #[arg(long)]
    pub sort: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub lng: Option<String>,
    #[arg(long)]
    pub radius_km: Option<String>,
    #[arg(long)]
    pub page: Option<String>,
    #[arg(long)]
    pub page_size: Option<String>,
}

impl BrowseArgs {
    fn to_params(&self) -> ListingParams {
        ListingParams {
            category: self.category.clone(),
            search: self.search.clone(),
            location: self.location.clone(),
            min_rating: self.min_rating.clone(),
            verified: self.verified.then(|| "true".to_string()),
            country: self.country.clone(),
            sort: self.sort.clone(),
            lat: self.lat.clone(),
            lng: self.lng.clone(),
            radius_km: self.radius_km.clone(),
            page: self.page.clone(),
            page_size: self.page_size.clone(),
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn resolve_country(requested: Option<&str>, default_country: &str) -> String {
    non_blank(requested).unwrap_or_else(|| default_country.to_string())
}

/// # Errors
///
/// Returns an error if the catalog cannot be fetched.
pub(crate) async fn run_browse(
    pool: &sqlx::PgPool,
    args: &BrowseArgs,
    default_country: &str,
) -> anyhow::Result<()> {
    let query = ListingQuery::from_params(&args.to_params(), default_country);
    let catalog = revdb_db::list_catalog(pool).await?;
    print_json(&run_listing(catalog, &query))
}

/// # Errors
///
/// Returns an error if the catalog cannot be fetched.
pub(crate) async fn run_suggest(
    pool: &sqlx::PgPool,
    query: &str,
    country: Option<&str>,
    default_country: &str,
) -> anyhow::Result<()> {
    let country = resolve_country(country, default_country);
    let Some(term) = SearchTerm::parse(Some(query)) else {
        return print_json(&SearchResponse::empty(query, &country));
    };

    let catalog = revdb_db::list_catalog(pool).await?;
    print_json(&suggest(&term, &country, &catalog))
}

/// # Errors
///
/// Returns an error if the category counts cannot be fetched.
pub(crate) async fn run_categories(
    pool: &sqlx::PgPool,
    country: Option<&str>,
    default_country: &str,
) -> anyhow::Result<()> {
    let country = resolve_country(country, default_country);
    let counts = revdb_db::count_businesses_by_category(pool, &country_terms(&country)).await?;
    print_json(&category_analytics(&counts))
}

/// # Errors
///
/// Returns an error if the distinct countries cannot be fetched.
pub(crate) async fn run_countries(pool: &sqlx::PgPool, default_country: &str) -> anyhow::Result<()> {
    let values = revdb_db::list_distinct_countries(pool).await?;
    print_json(&sanitize_country_list(values, default_country))
}
