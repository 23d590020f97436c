//! Catalog reads over the `businesses` table, joined to approved-review aggregates.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use revdb_core::{round_rating, BusinessRecord};
use sqlx::PgPool;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row type
// ---------------------------------------------------------------------------

/// A `businesses` row plus its approved-review count, mean and latest timestamp.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BusinessRow {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub logo: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub verified: bool,
    pub claimed_by_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub review_count: i64,
    pub average_rating: f64,
    pub last_review_at: Option<DateTime<Utc>>,
}

impl From<BusinessRow> for BusinessRecord {
    fn from(row: BusinessRow) -> Self {
        Self {
            id: row.id,
            slug: row.slug,
            name: row.name,
            category: row.category,
            description: row.description,
            website: row.website,
            logo: row.logo,
            city: row.city,
            state: row.state,
            country: row.country,
            latitude: row.latitude,
            longitude: row.longitude,
            verified: row.verified,
            claimed_by_id: row.claimed_by_id,
            review_count: u32::try_from(row.review_count).unwrap_or(u32::MAX),
            average_rating: round_rating(row.average_rating),
            created_at: row.created_at,
            last_review_at: row.last_review_at,
        }
    }
}

const CATALOG_SELECT: &str = "\
    SELECT b.id, b.slug, b.name, b.category, b.description, b.website, b.logo, \
           b.city, b.state, b.country, b.latitude, b.longitude, b.verified, \
           b.claimed_by_id, b.created_at, \
           COALESCE(r.review_count, 0)::BIGINT AS review_count, \
           COALESCE(r.average_rating, 0)::FLOAT8 AS average_rating, \
           r.last_review_at \
    FROM businesses b \
    LEFT JOIN ( \
        SELECT business_id, COUNT(*) AS review_count, AVG(rating)::FLOAT8 AS average_rating, \
               MAX(created_at) AS last_review_at \
        FROM reviews \
        WHERE status = 'APPROVED' \
        GROUP BY business_id \
    ) r ON r.business_id = b.id";

// Matches when no terms are given, or when any term is a substring of the
// lowercased country. Mirrors `revdb_core::matches_country`.
const COUNTRY_FILTER: &str = "\
    (cardinality($1::TEXT[]) = 0 OR EXISTS ( \
        SELECT 1 FROM unnest($1::TEXT[]) AS t(term) \
        WHERE strpos(lower(COALESCE(b.country, '')), t.term) > 0))";

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Fetch every business with review aggregates, newest first.
///
/// This is the candidate catalog the discovery engine filters in memory.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_catalog(pool: &PgPool) -> Result<Vec<BusinessRecord>, DbError> {
    let rows = sqlx::query_as::<_, BusinessRow>(&format!(
        "{CATALOG_SELECT} ORDER BY b.created_at DESC, b.id DESC"
    ))
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(BusinessRecord::from).collect())
}

/// Returns a single business by slug, or `None` if not found.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_business_by_slug(
    pool: &PgPool,
    slug: &str,
) -> Result<Option<BusinessRecord>, DbError> {
    let row = sqlx::query_as::<_, BusinessRow>(&format!("{CATALOG_SELECT} WHERE b.slug = $1"))
        .bind(slug)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(BusinessRecord::from))
}

/// `GROUP BY category, COUNT(*)` over businesses matching `country_terms`.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn count_businesses_by_category(
    pool: &PgPool,
    country_terms: &[String],
) -> Result<HashMap<String, u32>, DbError> {
    let rows = sqlx::query_as::<_, (String, i64)>(&format!(
        "SELECT b.category, COUNT(*) FROM businesses b \
         WHERE {COUNTRY_FILTER} \
         GROUP BY b.category"
    ))
    .bind(country_terms)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(category, count)| (category, u32::try_from(count).unwrap_or(u32::MAX)))
        .collect())
}

/// Distinct, non-null country values as stored, in no particular order.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_distinct_countries(pool: &PgPool) -> Result<Vec<String>, DbError> {
    let rows = sqlx::query_scalar::<_, String>(
        "SELECT DISTINCT country FROM businesses WHERE country IS NOT NULL",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
