// Fixtures shared by the cells' test suites.
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use tracing_subscriber::EnvFilter;

use shared_config::AppConfig;
use shared_models::{SplitSchedule, TimeWindow};

use crate::clock::FixedClock;

/// Route `tracing` output through the test harness. Safe to call repeatedly.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

pub struct TestConfig {
    pub nearby_default_radius_km: f64,
    pub nearby_default_limit: usize,
    pub nearby_max_limit: usize,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            nearby_default_radius_km: 10.0,
            nearby_default_limit: 10,
            nearby_max_limit: 50,
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            nearby_default_radius_km: self.nearby_default_radius_km,
            nearby_default_limit: self.nearby_default_limit,
            nearby_max_limit: self.nearby_max_limit,
            ..AppConfig::default()
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid test time")
}

pub fn window(start: (u32, u32), end: (u32, u32)) -> TimeWindow {
    TimeWindow::new(time(start.0, start.1), time(end.0, end.1)).expect("valid test window")
}

pub fn split(primary: ((u32, u32), (u32, u32)), secondary: Option<((u32, u32), (u32, u32))>) -> SplitSchedule {
    SplitSchedule::new(
        window(primary.0, primary.1),
        secondary.map(|(start, end)| window(start, end)),
    )
    .expect("valid test schedule")
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub fn instant(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("valid test instant")
}

pub fn clock_at(year: i32, month: u32, day: u32, hour: u32) -> Arc<FixedClock> {
    Arc::new(FixedClock::new(instant(year, month, day, hour)))
}
