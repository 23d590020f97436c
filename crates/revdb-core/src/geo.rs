//! Great-circle distance on a spherical Earth.

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two `(lat, lon)` points in degrees.
#[must_use]
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON: (f64, f64) = (51.5072, -0.1276);
    const MANCHESTER: (f64, f64) = (53.4808, -2.2426);

    #[test]
    fn same_point_is_zero() {
        assert!(distance_km(LONDON.0, LONDON.1, LONDON.0, LONDON.1).abs() < 1e-9);
    }

    #[test]
    fn london_to_manchester_is_about_262_km() {
        let d = distance_km(LONDON.0, LONDON.1, MANCHESTER.0, MANCHESTER.1);
        assert!((d - 262.0).abs() < 3.0, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let there = distance_km(LONDON.0, LONDON.1, MANCHESTER.0, MANCHESTER.1);
        let back = distance_km(MANCHESTER.0, MANCHESTER.1, LONDON.0, LONDON.1);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn antipodes_are_half_circumference() {
        let d = distance_km(0.0, 0.0, 0.0, 180.0);
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }
}
