use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::categories::category_by_name;
use crate::ConfigError;

/// A business entry in a YAML seed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedBusiness {
    pub name: String,
    pub category: String,
    pub slug: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub verified: bool,
}

impl SeedBusiness {
    /// The explicit slug when given, otherwise one derived from the name.
    #[must_use]
    pub fn resolved_slug(&self) -> String {
        match self.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slugify(slug),
            _ => slugify(&self.name),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SeedFile {
    pub businesses: Vec<SeedBusiness>,
}

/// Generate a URL-safe slug: lowercase ASCII alphanumerics joined by single dashes.
#[must_use]
pub fn slugify(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '-')
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Load and validate a business seed file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_seed_file(path: &Path) -> Result<SeedFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SeedFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let seed: SeedFile = serde_yaml::from_str(&content).map_err(ConfigError::SeedFileParse)?;

    validate_seed(&seed)?;

    Ok(seed)
}

fn validate_seed(seed: &SeedFile) -> Result<(), ConfigError> {
    let mut seen_slugs = HashSet::new();

    for business in &seed.businesses {
        if business.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "business name must be non-empty".to_string(),
            ));
        }

        if category_by_name(business.category.trim()).is_none() {
            return Err(ConfigError::Validation(format!(
                "business '{}' has unknown category '{}'",
                business.name, business.category
            )));
        }

        match (business.latitude, business.longitude) {
            (Some(lat), Some(lng)) => {
                if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
                    return Err(ConfigError::Validation(format!(
                        "business '{}' has out-of-range coordinates ({lat}, {lng})",
                        business.name
                    )));
                }
            }
            (None, None) => {}
            _ => {
                return Err(ConfigError::Validation(format!(
                    "business '{}' must set both latitude and longitude or neither",
                    business.name
                )));
            }
        }

        let slug = business.resolved_slug();
        if slug.is_empty() {
            return Err(ConfigError::Validation(format!(
                "business '{}' produces an empty slug",
                business.name
            )));
        }
        if !seen_slugs.insert(slug.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate business slug: '{}' (from business '{}')",
                slug, business.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn business(name: &str) -> SeedBusiness {
        SeedBusiness {
            name: name.to_string(),
            category: "Bank".to_string(),
            slug: None,
            website: None,
            description: None,
            city: None,
            state: None,
            country: None,
            latitude: None,
            longitude: None,
            verified: false,
        }
    }

    #[test]
    fn slug_simple_name() {
        assert_eq!(slugify("Summit Savings"), "summit-savings");
    }

    #[test]
    fn slug_strips_punctuation_and_collapses_dashes() {
        assert_eq!(slugify("  Joe's -- Bistro & Bar "), "joes-bistro-bar");
    }

    #[test]
    fn slug_strips_non_ascii() {
        assert_eq!(slugify("Señorita Café"), "seorita-caf");
    }

    #[test]
    fn explicit_slug_wins_over_name() {
        let mut b = business("Summit Savings");
        b.slug = Some("Summit HQ".to_string());
        assert_eq!(b.resolved_slug(), "summit-hq");
    }

    #[test]
    fn validate_rejects_unknown_category() {
        let mut b = business("Summit Savings");
        b.category = "Spaceships".to_string();
        let result = validate_seed(&SeedFile {
            businesses: vec![b],
        });
        assert!(matches!(result, Err(ConfigError::Validation(ref m)) if m.contains("unknown category")));
    }

    #[test]
    fn validate_rejects_half_coordinates() {
        let mut b = business("Summit Savings");
        b.latitude = Some(51.5);
        let result = validate_seed(&SeedFile {
            businesses: vec![b],
        });
        assert!(matches!(result, Err(ConfigError::Validation(ref m)) if m.contains("both latitude")));
    }

    #[test]
    fn validate_rejects_duplicate_slugs() {
        let result = validate_seed(&SeedFile {
            businesses: vec![business("Summit Savings"), business("summit savings")],
        });
        assert!(matches!(result, Err(ConfigError::Validation(ref m)) if m.contains("duplicate")));
    }

    #[test]
    fn parse_seed_yaml() {
        let yaml = r"
businesses:
  - name: Summit Savings
    category: Bank
    city: London
    country: UK
    latitude: 51.5072
    longitude: -0.1276
    verified: true
  - name: Fresh Basket
    category: Bakery & Pastry
";
        let seed: SeedFile = serde_yaml::from_str(yaml).expect("parse");
        assert_eq!(seed.businesses.len(), 2);
        assert!(seed.businesses[0].verified);
        assert!(!seed.businesses[1].verified);
        validate_seed(&seed).expect("valid seed");
    }
}
