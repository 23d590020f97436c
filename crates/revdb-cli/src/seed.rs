//! `seed` command handlers.

use std::path::Path;

use revdb_core::load_seed_file;

/// Validate the seed file and print what would be written.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or fails validation.
pub(crate) fn run_seed_dry_run(path: &Path) -> anyhow::Result<()> {
    let seed = load_seed_file(path)?;

    println!("{:<32}{:<28}COUNTRY", "SLUG", "CATEGORY");
    for business in &seed.businesses {
        println!(
            "{:<32}{:<28}{}",
            business.resolved_slug(),
            business.category,
            business.country.as_deref().unwrap_or("-")
        );
    }
    println!("{} business(es) valid; nothing written", seed.businesses.len());
    Ok(())
}

/// Load the seed file and upsert every business by slug.
///
/// # Errors
///
/// Returns an error if the file is invalid or the database write fails.
pub(crate) async fn run_seed(pool: &sqlx::PgPool, path: &Path) -> anyhow::Result<()> {
    let seed = load_seed_file(path)?;
    let count = revdb_db::seed_businesses(pool, &seed.businesses).await?;

    tracing::info!(count, path = %path.display(), "seeded businesses");
    println!("seeded {count} business(es) from {}", path.display());
    Ok(())
}
