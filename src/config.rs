use serde::Deserialize;
use std::time::Duration;

use crate::counter_source::CounterSourceKind;
use crate::sampler::SamplerConfig;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub monitoring: MonitoringConfig,
    #[serde(default)]
    pub interfaces: InterfacesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitoringConfig {
    #[serde(default = "default_sample_interval_ms")]
    pub sample_interval_ms: u64,
    /// Minimum seconds between repeated "sample failed" log lines.
    #[serde(default = "default_error_log_interval_secs")]
    pub error_log_interval_secs: u64,
    #[serde(default)]
    pub counter_source: CounterSourceKind,
}

fn default_sample_interval_ms() -> u64 {
    1000
}

fn default_error_log_interval_secs() -> u64 {
    5
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: default_sample_interval_ms(),
            error_log_interval_secs: default_error_log_interval_secs(),
            counter_source: CounterSourceKind::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InterfacesConfig {
    /// Extra interface names ignored like loopback (e.g. "docker0").
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl AppConfig {
    /// Load from `CONFIG_FILE` (default `config.toml`). A missing file means defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = match std::fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path, "config file not found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(anyhow::anyhow!("read config {}: {}", path, e)),
        };
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.monitoring.sample_interval_ms > 0,
            "monitoring.sample_interval_ms must be > 0, got {}",
            self.monitoring.sample_interval_ms
        );
        anyhow::ensure!(
            self.monitoring.error_log_interval_secs > 0,
            "monitoring.error_log_interval_secs must be > 0, got {}",
            self.monitoring.error_log_interval_secs
        );
        anyhow::ensure!(
            self.interfaces.exclude.iter().all(|n| !n.trim().is_empty()),
            "interfaces.exclude must not contain empty names"
        );
        Ok(())
    }

    pub fn sampler_config(&self) -> SamplerConfig {
        SamplerConfig {
            interval: Duration::from_millis(self.monitoring.sample_interval_ms),
            error_log_interval: Duration::from_secs(self.monitoring.error_log_interval_secs),
        }
    }
}
