use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A business listing together with its aggregated review signal.
///
/// Read-only to the discovery engine. `latitude` and `longitude` are either
/// both present or both absent; use [`BusinessRecord::coordinates`] rather
/// than reading them separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessRecord {
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
    /// Number of approved reviews.
    pub review_count: u32,
    /// Mean approved rating rounded to one decimal, `0.0` when unreviewed.
    pub average_rating: f64,
    pub created_at: DateTime<Utc>,
    /// Timestamp of the most recent approved review.
    pub last_review_at: Option<DateTime<Utc>>,
}

impl BusinessRecord {
    /// Returns `(latitude, longitude)` only when both are set and finite.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => Some((lat, lng)),
            _ => None,
        }
    }

    /// `last_review_at`, falling back to `created_at` for unreviewed businesses.
    #[must_use]
    pub fn activity_at(&self) -> DateTime<Utc> {
        self.last_review_at.unwrap_or(self.created_at)
    }

    /// Human-readable "City, State, Country" label with empty parts omitted.
    ///
    /// Returns `None` when every part is blank.
    #[must_use]
    pub fn location_label(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.city, &self.state, &self.country]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

/// Round a mean rating to one decimal place.
#[must_use]
pub fn round_rating(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record() -> BusinessRecord {
        BusinessRecord {
            id: 1,
            slug: "acme".to_string(),
            name: "Acme".to_string(),
            category: "Bank".to_string(),
            description: None,
            website: None,
            logo: None,
            city: Some("Lagos".to_string()),
            state: None,
            country: Some("Nigeria".to_string()),
            latitude: None,
            longitude: None,
            verified: false,
            claimed_by_id: None,
            review_count: 0,
            average_rating: 0.0,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            last_review_at: None,
        }
    }

    #[test]
    fn coordinates_require_both_values() {
        let mut business = record();
        business.latitude = Some(6.5);
        assert_eq!(business.coordinates(), None);
        business.longitude = Some(3.4);
        assert_eq!(business.coordinates(), Some((6.5, 3.4)));
    }

    #[test]
    fn location_label_skips_missing_parts() {
        assert_eq!(record().location_label().as_deref(), Some("Lagos, Nigeria"));
    }

    #[test]
    fn location_label_is_none_when_all_blank() {
        let mut business = record();
        business.city = Some("  ".to_string());
        business.country = None;
        assert_eq!(business.location_label(), None);
    }

    #[test]
    fn activity_falls_back_to_created_at() {
        let mut business = record();
        assert_eq!(business.activity_at(), business.created_at);
        let reviewed = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        business.last_review_at = Some(reviewed);
        assert_eq!(business.activity_at(), reviewed);
    }

    #[test]
    fn round_rating_keeps_one_decimal() {
        assert!((round_rating(4.449) - 4.4).abs() < f64::EPSILON);
        assert!((round_rating(4.25) - 4.3).abs() < f64::EPSILON);
    }
}
