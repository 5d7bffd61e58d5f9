// libs/facility-cell/src/services/nearby.rs
use std::sync::Arc;

use tracing::{debug, info};

use shared_config::AppConfig;
use shared_models::GeoPoint;

use crate::models::{FacilityCandidate, FacilityError, NearbyFacility, NearbySearchQuery};
use crate::services::geo::{filter_with_capacity, GeoDistanceEngine};

/// Boundary in front of [`GeoDistanceEngine`]: validates raw input, fills in
/// the configured defaults, then runs the search.
pub struct NearbySearchService {
    config: Arc<AppConfig>,
    engine: GeoDistanceEngine,
}

impl NearbySearchService {
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            config,
            engine: GeoDistanceEngine::new(),
        }
    }

    pub fn search(
        &self,
        query: &NearbySearchQuery,
        candidates: &[FacilityCandidate],
    ) -> Result<Vec<NearbyFacility>, FacilityError> {
        let center = GeoPoint::new(query.latitude, query.longitude)?;
        let radius_km = self.resolve_radius(query.radius_km)?;
        let limit = self.resolve_limit(query.limit)?;

        debug!(
            "Nearby search at ({}, {}) radius {} km limit {} only_available {}",
            center.latitude, center.longitude, radius_km, limit, query.only_available
        );

        let results = if query.only_available {
            let open = filter_with_capacity(candidates);
            self.engine.find_nearby(&center, &open, radius_km, limit)
        } else {
            self.engine.find_nearby(&center, candidates, radius_km, limit)
        };

        info!("Nearby search returned {} facilities", results.len());
        Ok(results)
    }

    fn resolve_radius(&self, radius_km: Option<f64>) -> Result<f64, FacilityError> {
        let radius = radius_km.unwrap_or(self.config.nearby_default_radius_km);
        if !radius.is_finite() || radius < 0.0 {
            return Err(FacilityError::InvalidSearch(format!(
                "radius must be a non-negative number of kilometres, got {}",
                radius
            )));
        }
        Ok(radius)
    }

    fn resolve_limit(&self, limit: Option<usize>) -> Result<usize, FacilityError> {
        match limit {
            Some(0) => Err(FacilityError::InvalidSearch(
                "limit must be at least 1".to_string(),
            )),
            Some(requested) => Ok(requested.min(self.config.nearby_max_limit)),
            None => Ok(self.config.nearby_default_limit),
        }
    }
}
