pub mod app_config;
pub mod business;
pub mod categories;
pub mod config;
pub mod country;
pub mod geo;
pub mod seed;

pub use app_config::{AppConfig, Environment};
pub use business::{round_rating, BusinessRecord};
pub use categories::{
    category_by_name, category_by_slug, category_family, related_categories, CategoryEntry, CATEGORY_CATALOG,
};
pub use config::{load_app_config, load_app_config_from_env, DEFAULT_COUNTRY};
pub use country::{country_terms, matches_country, sanitize_country_list, FALLBACK_COUNTRIES};
pub use geo::{distance_km, EARTH_RADIUS_KM};
pub use seed::{load_seed_file, slugify, SeedBusiness, SeedFile};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read seed file {path}: {source}")]
    SeedFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file: {0}")]
    SeedFileParse(#[source] serde_yaml::Error),

    #[error("seed validation failed: {0}")]
    Validation(String),
}
