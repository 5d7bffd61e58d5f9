use std::env;
use std::str::FromStr;

use tracing::warn;

pub const DEFAULT_NEARBY_RADIUS_KM: f64 = 10.0;
pub const DEFAULT_NEARBY_LIMIT: usize = 10;
pub const DEFAULT_NEARBY_MAX_LIMIT: usize = 100;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub nearby_default_radius_km: f64,
    pub nearby_default_limit: usize,
    pub nearby_max_limit: usize,
    pub appointment_buffer_minutes: u32,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            nearby_default_radius_km: DEFAULT_NEARBY_RADIUS_KM,
            nearby_default_limit: DEFAULT_NEARBY_LIMIT,
            nearby_max_limit: DEFAULT_NEARBY_MAX_LIMIT,
            appointment_buffer_minutes: 0,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let defaults = Self::default();
        let config = Self {
            nearby_default_radius_km: parse_var(
                "NEARBY_DEFAULT_RADIUS_KM",
                defaults.nearby_default_radius_km,
            ),
            nearby_default_limit: parse_var("NEARBY_DEFAULT_LIMIT", defaults.nearby_default_limit),
            nearby_max_limit: parse_var("NEARBY_MAX_LIMIT", defaults.nearby_max_limit),
            appointment_buffer_minutes: parse_var(
                "APPOINTMENT_BUFFER_MINUTES",
                defaults.appointment_buffer_minutes,
            ),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| defaults.log_level.clone()),
        };

        if !config.is_valid() {
            warn!("Nearby search configuration is inconsistent, falling back to defaults");
            return Self {
                log_level: config.log_level,
                appointment_buffer_minutes: config.appointment_buffer_minutes,
                ..defaults
            };
        }

        config
    }

    pub fn is_valid(&self) -> bool {
        self.nearby_default_radius_km.is_finite()
            && self.nearby_default_radius_km >= 0.0
            && self.nearby_default_limit > 0
            && self.nearby_default_limit <= self.nearby_max_limit
    }
}

fn parse_var<T: FromStr + Copy + std::fmt::Display>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value {:?}, using default {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}
