use super::history::MessageLog;
use super::types::Message;
use crate::backend::{ChatBackend, ChatRequest, ChatResponse};
use crate::config::ChatConfig;
use crate::error::TransportError;
use crate::session::{RateLimitPolicy, Session, SessionManager};
use std::sync::Arc;
use std::time::Duration;

/// Why a question never left the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum RejectReason {
    Empty,
    TooLong,
    Busy,
    LimitReached,
}

/// Result of one user submission.
#[derive(Debug)]
pub enum SendOutcome {
    /// Nothing was sent and nothing was appended.
    Rejected(RejectReason),
    /// The answer was appended and the question counted.
    Answered { questions_remaining: u32 },
    /// An apology was appended; the question was not counted.
    Failed(TransportError),
}

/// Result of the periodic re-check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    CoolingDown(Duration),
    /// The cooldown elapsed and a new session replaced the throttled one.
    SessionRenewed,
    Idle,
}

/// A question accepted by [`ChatOrchestrator::begin`] whose answer is still
/// outstanding.
#[derive(Debug)]
pub struct PendingQuestion {
    request: ChatRequest,
}

impl PendingQuestion {
    pub fn request(&self) -> &ChatRequest {
        &self.request
    }
}

/// Per-conversation knobs, usually taken from the `[chat]` config section.
#[derive(Debug, Clone)]
pub struct ChatOptions {
    /// Longest question accepted, in characters.
    pub max_message_chars: usize,
    /// Name the greeting speaks on behalf of. Empty uses a generic wording.
    pub owner_name: String,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self {
            owner_name: String::new(),
            ..Self::from(&ChatConfig::default())
        }
    }
}

impl From<&ChatConfig> for ChatOptions {
    fn from(config: &ChatConfig) -> Self {
        Self {
            max_message_chars: config.max_message_chars,
            owner_name: config.owner_name.clone(),
        }
    }
}

/// Owns the conversation: gates questions on the session quota, calls the
/// backend, and keeps the message log in step.
pub struct ChatOrchestrator {
    manager: SessionManager,
    log: MessageLog,
    backend: Arc<dyn ChatBackend>,
    options: ChatOptions,
    session: Session,
    messages: Vec<Message>,
    waiting: bool,
    remaining_time: Option<Duration>,
}

impl ChatOrchestrator {
    pub fn new(
        manager: SessionManager,
        log: MessageLog,
        backend: Arc<dyn ChatBackend>,
        options: ChatOptions,
    ) -> Self {
        let resolution = manager.resolve_session();
        log.discard_if_renewed(&resolution);
        let session = resolution.into_session();
        let remaining_time = manager.get_remaining_time();
        let messages = log.load_messages();
        let mut orchestrator = Self {
            manager,
            log,
            backend,
            options,
            session,
            messages,
            waiting: false,
            remaining_time,
        };
        orchestrator.seed_greeting();
        orchestrator
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn policy(&self) -> &RateLimitPolicy {
        self.manager.policy()
    }

    pub fn backend(&self) -> Arc<dyn ChatBackend> {
        Arc::clone(&self.backend)
    }

    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    /// Cooldown left as of the last send or tick.
    pub fn remaining_time(&self) -> Option<Duration> {
        self.remaining_time
    }

    pub fn is_limit_reached(&self) -> bool {
        self.session.questions_count >= self.policy().max_questions
    }

    pub fn questions_remaining(&self) -> u32 {
        self.policy()
            .max_questions
            .saturating_sub(self.session.questions_count)
    }

    /// Accept a question and record the user turn.
    ///
    /// A rejection sends nothing and appends nothing.
    pub fn begin(&mut self, text: &str) -> Result<PendingQuestion, RejectReason> {
        let text = text.trim();
        if text.is_empty() {
            return Err(RejectReason::Empty);
        }
        if text.chars().count() > self.options.max_message_chars {
            return Err(RejectReason::TooLong);
        }
        if self.waiting {
            return Err(RejectReason::Busy);
        }
        if !self.manager.can_ask_question() {
            self.remaining_time = self.manager.get_remaining_time();
            return Err(RejectReason::LimitReached);
        }

        self.refresh_session();
        self.remaining_time = None;

        self.messages.push(Message::user(text, self.manager.now()));
        self.log.save_messages(&self.messages);
        self.waiting = true;

        Ok(PendingQuestion {
            request: ChatRequest {
                message: text.to_string(),
                session_id: self.session.session_id.clone(),
            },
        })
    }

    /// Apply the backend's answer to a question accepted by [`begin`](Self::begin).
    pub fn complete(
        &mut self,
        pending: PendingQuestion,
        result: Result<ChatResponse, TransportError>,
    ) -> SendOutcome {
        self.waiting = false;
        let now = self.manager.now();

        match result {
            Ok(response) => {
                tracing::debug!(
                    session_id = %pending.request.session_id,
                    query_id = ?response.query_id,
                    tokens_used = ?response.tokens_used,
                    cost = ?response.cost,
                    provider_used = ?response.provider_used,
                    questions_remaining = ?response.questions_remaining,
                    "chat answered"
                );

                self.session = self.manager.increment_question_count();
                self.remaining_time = self.manager.get_remaining_time();
                let answer =
                    Message::assistant(response.response, now).with_sources(response.sources);
                self.messages.push(answer);
                self.log.save_messages(&self.messages);

                SendOutcome::Answered {
                    questions_remaining: self.questions_remaining(),
                }
            }
            Err(error) => {
                tracing::warn!(
                    %error,
                    status = ?error.status(),
                    backend = self.backend.name(),
                    session_id = %pending.request.session_id,
                    "chat request failed"
                );

                self.messages.push(Message::assistant(t!("chat.apology"), now));
                self.log.save_messages(&self.messages);

                SendOutcome::Failed(error)
            }
        }
    }

    /// One full round trip: gate, call, apply.
    pub async fn send(&mut self, text: &str) -> SendOutcome {
        let pending = match self.begin(text) {
            Ok(pending) => pending,
            Err(reason) => return SendOutcome::Rejected(reason),
        };

        let backend = self.backend();
        let result = backend.ask(pending.request()).await;
        self.complete(pending, result)
    }

    /// Periodic re-check of the cooldown.
    pub fn tick(&mut self) -> TickOutcome {
        if let Some(remaining) = self.manager.get_remaining_time() {
            self.remaining_time = Some(remaining);
            return TickOutcome::CoolingDown(remaining);
        }

        self.remaining_time = None;
        if self.refresh_session() {
            TickOutcome::SessionRenewed
        } else {
            TickOutcome::Idle
        }
    }

    /// Start over with a new session and an empty conversation.
    pub fn reset_session(&mut self) {
        self.session = self.manager.reset();
        self.remaining_time = None;
        self.restart_conversation();
    }

    /// Pick up the stored session. Returns true when a throttled session was
    /// replaced after its cooldown, in which case the conversation restarts.
    fn refresh_session(&mut self) -> bool {
        let current = self.manager.get_or_create_session();
        let renewed = self.is_limit_reached() && current.session_id != self.session.session_id;
        self.session = current;
        if renewed {
            tracing::debug!(
                session_id = %self.session.session_id,
                "new session observed, clearing log"
            );
            self.restart_conversation();
        }
        renewed
    }

    fn restart_conversation(&mut self) {
        self.log.clear_messages();
        self.messages.clear();
        self.seed_greeting();
    }

    fn seed_greeting(&mut self) {
        if !self.messages.is_empty() {
            return;
        }
        let owner = if self.options.owner_name.is_empty() {
            t!("chat.default_owner").into_owned()
        } else {
            self.options.owner_name.clone()
        };
        let greeting = t!(
            "chat.greeting",
            owner = owner,
            max = self.policy().max_questions
        );
        self.messages.push(Message::assistant(greeting, self.manager.now()));
    }
}
