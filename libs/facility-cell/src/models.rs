use serde::{Deserialize, Serialize};
use uuid::Uuid;
use thiserror::Error;

use shared_models::{CoreError, GeoPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacilityType {
    Hospital,
    Clinic,
    Laboratory,
    Pharmacy,
    EmergencyCare,
}

/// Catalog snapshot of a facility. Read-only inside this cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityCandidate {
    pub id: Uuid,
    pub name: String,
    pub facility_type: FacilityType,
    pub address: Option<String>,
    pub coordinates: GeoPoint,
    pub capacity_used: u32,
    pub capacity_max: u32,
}

impl FacilityCandidate {
    pub fn has_available_capacity(&self) -> bool {
        self.capacity_used < self.capacity_max
    }

    pub fn available_capacity(&self) -> u32 {
        self.capacity_max.saturating_sub(self.capacity_used)
    }

    pub fn occupancy_rate(&self) -> f64 {
        if self.capacity_max == 0 {
            return 1.0;
        }
        f64::from(self.capacity_used) / f64::from(self.capacity_max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbyFacility {
    pub facility: FacilityCandidate,
    pub distance_km: f64,
}

/// Raw nearby-search input as it arrives at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearbySearchQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_km: Option<f64>,
    pub limit: Option<usize>,
    #[serde(default)]
    pub only_available: bool,
}

impl NearbySearchQuery {
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            radius_km: None,
            limit: None,
            only_available: false,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FacilityError {
    #[error("Invalid search: {0}")]
    InvalidSearch(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facility(used: u32, max: u32) -> FacilityCandidate {
        FacilityCandidate {
            id: Uuid::new_v4(),
            name: "Central Clinic".to_string(),
            facility_type: FacilityType::Clinic,
            address: None,
            coordinates: GeoPoint::new_unchecked(0.0, 0.0),
            capacity_used: used,
            capacity_max: max,
        }
    }

    #[test]
    fn test_capacity_helpers() {
        let open = facility(3, 10);
        assert!(open.has_available_capacity());
        assert_eq!(open.available_capacity(), 7);
        assert!((open.occupancy_rate() - 0.3).abs() < 1e-9);

        let full = facility(10, 10);
        assert!(!full.has_available_capacity());
        assert_eq!(full.available_capacity(), 0);

        let overbooked = facility(12, 10);
        assert!(!overbooked.has_available_capacity());
        assert_eq!(overbooked.available_capacity(), 0);

        assert_eq!(facility(0, 0).occupancy_rate(), 1.0);
    }
}
