use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Validated constructor for values arriving from outside the core.
    pub fn new(latitude: f64, longitude: f64) -> CoreResult<Self> {
        let point = Self { latitude, longitude };
        if !point.is_valid() {
            return Err(CoreError::InvalidCoordinate { latitude, longitude });
        }
        Ok(point)
    }

    /// For coordinates that were already validated upstream (stored catalog data).
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}
