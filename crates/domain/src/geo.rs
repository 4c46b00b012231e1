// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Great-circle distance computation for duplicate detection.

use crate::error::DomainError;

/// Mean Earth radius in meters, used for Haversine distance.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Validates that a coordinate pair is within the WGS84 range.
///
/// # Errors
///
/// Returns `DomainError::InvalidCoordinates` if `|latitude| > 90` or
/// `|longitude| > 180`, or if either value is not finite.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), DomainError> {
    if !latitude.is_finite()
        || !longitude.is_finite()
        || latitude.abs() > 90.0
        || longitude.abs() > 180.0
    {
        return Err(DomainError::InvalidCoordinates {
            latitude,
            longitude,
        });
    }
    Ok(())
}

/// Computes the great-circle distance in meters between two WGS84 points.
///
/// Uses the Haversine formula:
/// `a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)`,
/// `c = 2·atan2(√a, √(1−a))`, `distance = R·c`.
///
/// Inputs are degrees; callers are responsible for range validation.
#[must_use]
pub fn haversine_distance_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance_for_identical_points() {
        let d = haversine_distance_meters(-23.5505, -46.6333, -23.5505, -46.6333);
        assert!(d.abs() < 1e-6);
    }

    #[test]
    fn test_distance_one_arcsecond_of_longitude() {
        // ~11 m apart at São Paulo's latitude
        let d = haversine_distance_meters(-23.5505, -46.6333, -23.5505, -46.6334);
        assert!(d > 5.0 && d < 20.0, "unexpected distance: {d}");
    }

    #[test]
    fn test_distance_about_one_kilometer() {
        // ~1.1 km of latitude difference
        let d = haversine_distance_meters(-23.5505, -46.6333, -23.5600, -46.6333);
        assert!(d > 1_000.0 && d < 1_200.0, "unexpected distance: {d}");
    }

    #[test]
    fn test_distance_is_symmetric() {
        let forward = haversine_distance_meters(-23.5505, -46.6333, -22.9068, -43.1729);
        let backward = haversine_distance_meters(-22.9068, -43.1729, -23.5505, -46.6333);
        assert!((forward - backward).abs() < 1e-6);
    }

    #[test]
    fn test_valid_coordinates() {
        assert!(validate_coordinates(-23.5505, -46.6333).is_ok());
        assert!(validate_coordinates(90.0, 180.0).is_ok());
        assert!(validate_coordinates(-90.0, -180.0).is_ok());
        assert!(validate_coordinates(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_out_of_range_coordinates() {
        assert!(validate_coordinates(90.5, 0.0).is_err());
        assert!(validate_coordinates(-91.0, 0.0).is_err());
        assert!(validate_coordinates(0.0, 180.5).is_err());
        assert!(validate_coordinates(0.0, -181.0).is_err());
    }

    #[test]
    fn test_non_finite_coordinates() {
        assert!(validate_coordinates(f64::NAN, 0.0).is_err());
        assert!(validate_coordinates(0.0, f64::INFINITY).is_err());
    }
}
