pub mod error;
pub mod geo;
pub mod interval;

pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use interval::{overlaps, split_overlap, SplitSchedule, TimeWindow};
