use super::limiter::{self, Resolution};
use super::store::SessionStore;
use super::types::{RateLimitPolicy, Session, SessionStatus};
use crate::platform::Clock;
use crate::storage::KeyValueStore;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;

/// Drives the rate-limit state machine against the injected store and clock.
///
/// No session is cached here: every operation re-reads the stored record,
/// so callers firing in close succession (a periodic tick and a user action)
/// observe the same transition.
pub struct SessionManager {
    store: SessionStore,
    clock: Arc<dyn Clock>,
    policy: RateLimitPolicy,
}

impl SessionManager {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        policy: RateLimitPolicy,
    ) -> Self {
        Self {
            store: SessionStore::new(store),
            clock,
            policy,
        }
    }

    pub fn policy(&self) -> &RateLimitPolicy {
        &self.policy
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Resolve Fresh and Expired states and return the live session.
    ///
    /// Writes only when a session is created or reset. With storage
    /// unavailable the result is a fresh ephemeral session.
    pub fn get_or_create_session(&self) -> Session {
        self.resolve_at(self.clock.now()).into_session()
    }

    /// Like [`get_or_create_session`](Self::get_or_create_session), but keeps
    /// the transition so callers can drop state tied to a replaced session.
    pub fn resolve_session(&self) -> Resolution {
        self.resolve_at(self.clock.now())
    }

    pub fn can_ask_question(&self) -> bool {
        limiter::can_ask(&self.get_or_create_session(), &self.policy)
    }

    /// Record one answered question.
    ///
    /// Must be called once per successful round trip, and only after
    /// [`can_ask_question`](Self::can_ask_question) allowed it.
    pub fn increment_question_count(&self) -> Session {
        let now = self.clock.now();
        let current = self.resolve_at(now).into_session();
        if !limiter::can_ask(&current, &self.policy) {
            tracing::warn!(
                session_id = %current.session_id,
                questions_count = current.questions_count,
                max_questions = self.policy.max_questions,
                "question recorded past the quota"
            );
        }

        let updated = limiter::record_question(&current, now);
        self.persist(&updated);
        updated
    }

    pub fn get_remaining_time(&self) -> Option<Duration> {
        let now = self.clock.now();
        let session = self.resolve_at(now).into_session();
        limiter::remaining_time(&session, now, &self.policy)
    }

    pub fn status(&self) -> SessionStatus {
        let now = self.clock.now();
        let session = self.resolve_at(now).into_session();
        limiter::status(&session, now, &self.policy)
    }

    /// Replace the stored session with a fresh one regardless of its state.
    pub fn reset(&self) -> Session {
        let session = Session::new(self.clock.now());
        tracing::info!(session_id = %session.session_id, "session reset on request");
        self.persist(&session);
        session
    }

    fn resolve_at(&self, now: DateTime<Utc>) -> Resolution {
        let stored = match self.store.load() {
            Ok(stored) => stored,
            Err(error) => {
                tracing::debug!(%error, "session storage unavailable, using ephemeral session");
                return Resolution::Created(Session::new(now));
            }
        };

        let resolution = limiter::resolve(stored, now, &self.policy);
        match &resolution {
            Resolution::Unchanged(_) => {}
            Resolution::Created(session) => {
                tracing::info!(session_id = %session.session_id, "session created");
            }
            Resolution::Reset { previous, session } => {
                tracing::info!(
                    previous_session_id = %previous.session_id,
                    session_id = %session.session_id,
                    "cooldown elapsed, session renewed"
                );
            }
        }

        if resolution.needs_persist() {
            self.persist(resolution.session());
        }
        resolution
    }

    fn persist(&self, session: &Session) {
        if let Err(error) = self.store.save(session) {
            tracing::warn!(
                %error,
                backend = self.store.backend_name(),
                "failed to persist session"
            );
        }
    }
}
