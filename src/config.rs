use chrono::NaiveDate;
use log::{warn, Level};
use serde::Deserialize;

use crate::error::ConfigError;

const EMBEDDED_CONFIG: &str = include_str!("../celebration.json");

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct StorageKeys {
    /// Long-lived key, kept in `localStorage`.
    pub revealed: String,
    /// Per-session key, kept in `sessionStorage`.
    pub session: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            revealed: "hasUnveiledPresent".to_string(),
            session: "currentSessionHasUnveiled".to_string(),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TriggerLabels {
    pub unveil: String,
    pub unveiling: String,
    pub go_to_tributes: String,
}

impl Default for TriggerLabels {
    fn default() -> Self {
        Self {
            unveil: "Click to Unveil Present".to_string(),
            unveiling: "🎁 Unveiling...".to_string(),
            go_to_tributes: "View Guest Book".to_string(),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CelebrationConfig {
    pub honoree: String,
    pub target_month: u32,
    pub target_day: u32,
    pub overlay_delay_ms: u32,
    pub tick_interval_ms: u32,
    pub storage_keys: StorageKeys,
    pub labels: TriggerLabels,
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            honoree: "Dad".to_string(),
            target_month: 1,
            target_day: 31,
            overlay_delay_ms: 1000,
            tick_interval_ms: 1000,
            storage_keys: StorageKeys::default(),
            labels: TriggerLabels::default(),
        }
    }
}

impl CelebrationConfig {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let config: CelebrationConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        // 2000 is a leap year, so Feb 29 passes here.
        if NaiveDate::from_ymd_opt(2000, self.target_month, self.target_day).is_none() {
            return Err(ConfigError::InvalidTarget {
                month: self.target_month,
                day: self.target_day,
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidInterval);
        }
        Ok(())
    }

    /// Loads the config bundled into the binary, falling back to defaults.
    pub fn load() -> Self {
        match Self::parse(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                warn!("Using default celebration config: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_is_valid() {
        let config = CelebrationConfig::parse(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.target_month, 1);
        assert_eq!(config.target_day, 31);
        assert_eq!(config.storage_keys, StorageKeys::default());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = CelebrationConfig::parse(r#"{ "honoree": "Mum" }"#).unwrap();
        assert_eq!(config.honoree, "Mum");
        assert_eq!(config.overlay_delay_ms, 1000);
        assert_eq!(config.labels, TriggerLabels::default());
    }

    #[test]
    fn rejects_impossible_target_date() {
        let err = CelebrationConfig::parse(r#"{ "target_month": 2, "target_day": 30 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTarget { month: 2, day: 30 }));
    }

    #[test]
    fn rejects_zero_tick_interval() {
        let err = CelebrationConfig::parse(r#"{ "tick_interval_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidInterval));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = CelebrationConfig::parse("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
