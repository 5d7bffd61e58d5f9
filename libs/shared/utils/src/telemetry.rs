use anyhow::{anyhow, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use shared_config::AppConfig;

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init_tracing(config: &AppConfig) -> Result<()> {
    let filter = log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok(), &config.log_level)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))
}

// An unparsable RUST_LOG falls back to the configured level; an unparsable
// configured level is an error.
fn log_filter(env_directives: Option<String>, log_level: &str) -> Result<EnvFilter> {
    if let Some(directives) = env_directives {
        if let Ok(filter) = EnvFilter::try_new(&directives) {
            return Ok(filter);
        }
    }
    EnvFilter::try_new(log_level).map_err(|e| anyhow!("Invalid log filter {:?}: {}", log_level, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_log_filter_prefers_env_directives() {
        let filter = log_filter(Some("debug".to_string()), "info").unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_log_filter_falls_back_to_config_level() {
        let filter = log_filter(None, "warn").unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));

        let filter = log_filter(Some("shared_utils=loudest".to_string()), "error").unwrap();
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }

    #[test]
    fn test_log_filter_rejects_bad_config_level() {
        let err = log_filter(None, "shared_utils=loudest").unwrap_err();
        assert!(err.to_string().contains("Invalid log filter"));
    }

    #[test]
    fn test_init_tracing_installs_once() {
        let config = AppConfig::default();
        assert!(init_tracing(&config).is_ok());
        assert!(init_tracing(&config).is_err());
    }
}
