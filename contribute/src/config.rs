//! Configuration for the contribution flow.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use ledger::DEFAULT_STORAGE_KEY;

/// Configuration for a contribution verification flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowConfig {
    /// Duration of the simulated scan progress (ms)
    pub scan_duration_ms: u64,
    /// Settling delay after the scan completes, before the outcome (ms)
    pub settle_delay_ms: u64,
    /// Token reward for every success under the current policy
    pub tokens_per_success: u32,
    /// Impact score assigned to every success under the current policy
    pub impact_score: f32,
    /// Storage key for the achievement ledger
    pub storage_key: String,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            scan_duration_ms: 3000,
            settle_delay_ms: 500,
            tokens_per_success: 75,
            impact_score: 8.5,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl FlowConfig {
    /// Scan duration as a [`Duration`].
    pub fn scan_duration(&self) -> Duration {
        Duration::from_millis(self.scan_duration_ms)
    }

    /// Settling delay as a [`Duration`].
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Load config from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FlowConfig::default();
        assert_eq!(config.scan_duration_ms, 3000);
        assert_eq!(config.settle_delay_ms, 500);
        assert_eq!(config.tokens_per_success, 75);
        assert_eq!(config.storage_key, "@achievements");
    }

    #[test]
    fn test_yaml_roundtrip() {
        let mut config = FlowConfig::default();
        config.scan_duration_ms = 100;

        let yaml = config.to_yaml().unwrap();
        let parsed = FlowConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.scan_duration_ms, 100);
        assert_eq!(parsed.tokens_per_success, 75);
    }
}
