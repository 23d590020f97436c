use revdb_core::SeedBusiness;
use sqlx::PgPool;

use crate::DbError;

/// Upsert seed businesses by slug.
///
/// Returns the number of businesses processed (inserted or updated).
/// All upserts run inside a single transaction; if any operation fails
/// the entire batch is rolled back. Review data and claims are untouched.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any database operation fails.
pub async fn seed_businesses(pool: &PgPool, businesses: &[SeedBusiness]) -> Result<usize, DbError> {
    let mut tx = pool.begin().await?;
    let mut count = 0usize;

    for business in businesses {
        sqlx::query(
            "INSERT INTO businesses (slug, name, category, description, website, city, state, \
                                     country, latitude, longitude, verified) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             ON CONFLICT (slug) DO UPDATE SET \
                 name = EXCLUDED.name, \
                 category = EXCLUDED.category, \
                 description = EXCLUDED.description, \
                 website = EXCLUDED.website, \
                 city = EXCLUDED.city, \
                 state = EXCLUDED.state, \
                 country = EXCLUDED.country, \
                 latitude = EXCLUDED.latitude, \
                 longitude = EXCLUDED.longitude, \
                 verified = EXCLUDED.verified, \
                 updated_at = NOW()",
        )
        .bind(business.resolved_slug())
        .bind(business.name.trim())
        .bind(&business.category)
        .bind(&business.description)
        .bind(&business.website)
        .bind(&business.city)
        .bind(&business.state)
        .bind(&business.country)
        .bind(business.latitude)
        .bind(business.longitude)
        .bind(business.verified)
        .execute(&mut *tx)
        .await?;

        count += 1;
    }

    tx.commit().await?;
    Ok(count)
}
