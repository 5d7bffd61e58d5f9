pub mod clock;
pub mod telemetry;
pub mod test_utils;

pub use clock::{Clock, FixedClock, SystemClock};
