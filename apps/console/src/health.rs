use crate::api::ClientError;
use crate::models::BackendHealth;

const BASE_INTERVAL_MS: u64 = 3_000;
const MAX_INTERVAL_MS: u64 = 15_000;

/// Bookkeeping for the periodic `/status` probe: backs off after failures and
/// resets on the first success.
#[derive(Clone, Debug, Default)]
pub struct HealthTracker {
    consecutive_failures: u32,
    health: BackendHealth,
}

impl HealthTracker {
    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    pub fn record_success(&mut self, detail: String) -> &BackendHealth {
        self.consecutive_failures = 0;
        self.health = BackendHealth {
            online: true,
            detail: Some(detail).filter(|text| !text.is_empty()),
        };
        &self.health
    }

    pub fn record_failure(&mut self, err: &ClientError) -> &BackendHealth {
        self.consecutive_failures = self.consecutive_failures.saturating_add(1);
        self.health = BackendHealth {
            online: false,
            detail: Some(err.to_string()),
        };
        &self.health
    }

    pub fn next_interval_ms(&self) -> u64 {
        if self.consecutive_failures == 0 {
            return BASE_INTERVAL_MS;
        }
        (BASE_INTERVAL_MS * 2u64.pow(self.consecutive_failures.min(3))).min(MAX_INTERVAL_MS)
    }
}
