use chrono::NaiveTime;
use thiserror::Error;

/// Precondition failures shared by every cell.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid interval: end {end} is not after start {start}")]
    InvalidInterval { start: NaiveTime, end: NaiveTime },

    #[error("Invalid schedule: {0}")]
    InvalidSchedule(String),

    #[error("Invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
}

pub type CoreResult<T> = Result<T, CoreError>;
