// libs/facility-cell/src/services/geo.rs
use tracing::debug;

use shared_models::GeoPoint;

use crate::models::{FacilityCandidate, NearbyFacility};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres (haversine). Inputs are not re-validated.
pub fn distance_km(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    let d_lat = (p2.latitude - p1.latitude).to_radians();
    let d_lon = (p2.longitude - p1.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + p1.latitude.to_radians().cos()
            * p2.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);
    // rounding can push `a` just past 1.0 near antipodes, making sqrt(1 - a) NaN
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Facilities with `capacity_used < capacity_max`, input order kept.
pub fn filter_with_capacity<'a, I>(candidates: I) -> Vec<FacilityCandidate>
where
    I: IntoIterator<Item = &'a FacilityCandidate>,
{
    candidates
        .into_iter()
        .filter(|facility| facility.has_available_capacity())
        .cloned()
        .collect()
}

/// Radius search over an in-memory facility list. Capacity is not considered.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeoDistanceEngine;

impl GeoDistanceEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn distance_km(&self, p1: &GeoPoint, p2: &GeoPoint) -> f64 {
        distance_km(p1, p2)
    }

    /// Candidates within `radius_km` of `center`, nearest first, at most `limit`.
    /// Equal distances keep input order.
    pub fn find_nearby(
        &self,
        center: &GeoPoint,
        candidates: &[FacilityCandidate],
        radius_km: f64,
        limit: usize,
    ) -> Vec<NearbyFacility> {
        let mut nearby: Vec<NearbyFacility> = candidates
            .iter()
            .map(|facility| NearbyFacility {
                distance_km: distance_km(center, &facility.coordinates),
                facility: facility.clone(),
            })
            .filter(|found| found.distance_km <= radius_km)
            .collect();

        nearby.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        nearby.truncate(limit);

        debug!(
            "Found {} of {} facilities within {:.2} km of ({}, {})",
            nearby.len(),
            candidates.len(),
            radius_km,
            center.latitude,
            center.longitude
        );
        nearby
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAO_PAULO: GeoPoint = GeoPoint::new_unchecked(-23.5505, -46.6333);
    const RIO: GeoPoint = GeoPoint::new_unchecked(-22.9068, -43.1729);

    #[test]
    fn test_distance_to_self_is_zero() {
        assert_eq!(distance_km(&SAO_PAULO, &SAO_PAULO), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let there = distance_km(&SAO_PAULO, &RIO);
        let back = distance_km(&RIO, &SAO_PAULO);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn test_sao_paulo_to_rio() {
        let d = distance_km(&SAO_PAULO, &RIO);
        assert!((357.0..=361.0).contains(&d), "got {}", d);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let d = distance_km(&GeoPoint::new_unchecked(0.0, 0.0), &GeoPoint::new_unchecked(1.0, 0.0));
        assert!((d - 111.19).abs() < 0.01, "got {}", d);
    }

    #[test]
    fn test_antipodes() {
        let d = distance_km(&GeoPoint::new_unchecked(0.0, 0.0), &GeoPoint::new_unchecked(0.0, 180.0));
        assert!((d - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn test_near_antipodal_pairs_stay_finite() {
        let half_circumference = EARTH_RADIUS_KM * std::f64::consts::PI;

        let d = distance_km(
            &GeoPoint::new_unchecked(-87.843, -176.79),
            &GeoPoint::new_unchecked(87.843, 3.21),
        );
        assert!(d.is_finite(), "got {}", d);
        assert!((d - half_circumference).abs() < 1.0, "got {}", d);

        // exact antipode of every point on a coarse grid
        for lat_step in -17..=17 {
            for lon_step in -36..36 {
                let lat = lat_step as f64 * 5.0 - 0.157;
                let lon = lon_step as f64 * 5.0 + 0.21;
                let here = GeoPoint::new_unchecked(lat, lon);
                let there = GeoPoint::new_unchecked(-lat, lon + 180.0);
                let d = distance_km(&here, &there);
                assert!(d.is_finite(), "NaN for ({}, {})", lat, lon);
                assert!((d - half_circumference).abs() < 1.0, "({}, {}) -> {}", lat, lon, d);
            }
        }
    }
}
