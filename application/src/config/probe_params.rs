//! Probe parameters: reachability check control.
//!
//! [`ProbeParams`] groups the static parameters the HTTP probe adapter is
//! built with. These are application-layer concerns, not part of the
//! deployment record.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Reachability probe parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeParams {
    /// Timeout for each probe request.
    pub timeout: Duration,
    /// User-Agent header sent with probe requests.
    pub user_agent: String,
}

impl Default for ProbeParams {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_PROBE_TIMEOUT,
            user_agent: format!("brewenv/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ProbeParams {
    // ==================== Builder Methods ====================

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
