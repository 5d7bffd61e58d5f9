pub mod geo;
pub mod nearby;

pub use geo::{distance_km, filter_with_capacity, GeoDistanceEngine, EARTH_RADIUS_KM};
pub use nearby::NearbySearchService;
