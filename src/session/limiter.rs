//! Pure rate-limit transitions.
//!
//! Every function here is a function of `(stored session, now, policy)` only.
//! Nothing reads a clock or touches storage, so the state machine can be
//! driven with arbitrary timestamps.

use super::types::{RateLimitPolicy, Session, SessionStatus};
use crate::platform::clock::truncate_to_millis;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Outcome of resolving the stored session against the current time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Active or Throttled: the stored value stands, nothing to persist.
    Unchanged(Session),
    /// Nothing was stored: a first session was created.
    Created(Session),
    /// The cooldown after a full quota elapsed: the old session is replaced.
    Reset { previous: Session, session: Session },
}

impl Resolution {
    pub fn session(&self) -> &Session {
        match self {
            Self::Unchanged(session) | Self::Created(session) | Self::Reset { session, .. } => {
                session
            }
        }
    }

    pub fn into_session(self) -> Session {
        match self {
            Self::Unchanged(session) | Self::Created(session) | Self::Reset { session, .. } => {
                session
            }
        }
    }

    /// Whether the resolved session must be written back.
    pub fn needs_persist(&self) -> bool {
        !matches!(self, Self::Unchanged(_))
    }
}

pub fn resolve(
    stored: Option<Session>,
    now: DateTime<Utc>,
    policy: &RateLimitPolicy,
) -> Resolution {
    let Some(session) = stored else {
        return Resolution::Created(Session::new(now));
    };

    let expired = is_exhausted(&session, policy)
        && elapsed_since_last_question(&session, now) >= policy.cooldown;
    if expired {
        return Resolution::Reset {
            previous: session,
            session: Session::new(now),
        };
    }

    Resolution::Unchanged(session)
}

pub fn can_ask(session: &Session, policy: &RateLimitPolicy) -> bool {
    !is_exhausted(session, policy)
}

/// Time left before a throttled session expires.
///
/// `None` while questions remain, and `None` again once the cooldown has
/// fully elapsed.
pub fn remaining_time(
    session: &Session,
    now: DateTime<Utc>,
    policy: &RateLimitPolicy,
) -> Option<Duration> {
    if !is_exhausted(session, policy) {
        return None;
    }

    let remaining = policy
        .cooldown
        .saturating_sub(elapsed_since_last_question(session, now));
    if remaining.is_zero() {
        None
    } else {
        Some(remaining)
    }
}

pub fn status(session: &Session, now: DateTime<Utc>, policy: &RateLimitPolicy) -> SessionStatus {
    match remaining_time(session, now, policy) {
        Some(remaining) => SessionStatus::Throttled { remaining },
        None => SessionStatus::Active {
            remaining_questions: policy.max_questions.saturating_sub(session.questions_count),
        },
    }
}

/// The session after one more answered question.
pub fn record_question(session: &Session, now: DateTime<Utc>) -> Session {
    Session {
        questions_count: session.questions_count.saturating_add(1),
        last_question_at: truncate_to_millis(now),
        ..session.clone()
    }
}

fn is_exhausted(session: &Session, policy: &RateLimitPolicy) -> bool {
    session.questions_count >= policy.max_questions
}

/// A clock that moved backwards counts as no time elapsed.
fn elapsed_since_last_question(session: &Session, now: DateTime<Utc>) -> Duration {
    (now - session.last_question_at)
        .to_std()
        .unwrap_or(Duration::ZERO)
}
