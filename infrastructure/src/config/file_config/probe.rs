//! Probe configuration from TOML (`[probe]` section)

use super::ConfigValidationError;
use brewenv_application::ProbeParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw probe configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProbeConfig {
    /// Timeout in seconds for each probe request
    pub timeout_seconds: u64,
    /// User-Agent override
    pub user_agent: Option<String>,
}

impl Default for FileProbeConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: ProbeParams::default().timeout.as_secs(),
            user_agent: None,
        }
    }
}

impl FileProbeConfig {
    pub fn to_probe_params(&self) -> Result<ProbeParams, ConfigValidationError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        let mut params =
            ProbeParams::default().with_timeout(Duration::from_secs(self.timeout_seconds));
        if let Some(agent) = &self.user_agent {
            params = params.with_user_agent(agent.clone());
        }
        Ok(params)
    }
}
