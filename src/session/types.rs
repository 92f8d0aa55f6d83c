use crate::platform::clock::truncate_to_millis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Rate-limit ledger for one anonymous visitor.
///
/// Serialized in camelCase with instants as epoch milliseconds, the layout
/// kept under [`crate::storage::SESSION_KEY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub session_id: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    pub questions_count: u32,
    /// Most recent question, or creation time if none was asked yet.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub last_question_at: DateTime<Utc>,
}

impl Session {
    /// A fresh window with a new identifier and an empty counter.
    pub fn new(now: DateTime<Utc>) -> Self {
        let now = truncate_to_millis(now);
        Self {
            session_id: Uuid::new_v4().to_string(),
            created_at: now,
            questions_count: 0,
            last_question_at: now,
        }
    }
}

/// Quota size and lockout length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    pub max_questions: u32,
    pub cooldown: Duration,
}

impl RateLimitPolicy {
    pub fn new(max_questions: u32, cooldown: Duration) -> Self {
        Self {
            max_questions,
            cooldown,
        }
    }
}

/// What the visitor may do right now, after Fresh/Expired transitions have
/// been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active { remaining_questions: u32 },
    Throttled { remaining: Duration },
}

impl SessionStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }
}
