use crate::session::RateLimitPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Local mirror of the backend's question quota.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Questions a visitor may ask per window.
    #[serde(default = "default_max_questions")]
    pub max_questions: u32,
    /// Lockout after the quota is used up, in milliseconds.
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
}

fn default_max_questions() -> u32 {
    3
}

fn default_cooldown_ms() -> u64 {
    3 * 60 * 1000
}

impl SessionConfig {
    pub fn policy(&self) -> RateLimitPolicy {
        RateLimitPolicy::new(self.max_questions, Duration::from_millis(self.cooldown_ms))
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_questions: default_max_questions(),
            cooldown_ms: default_cooldown_ms(),
        }
    }
}
