use super::style;
use crate::chat::{Message, MessageRole, RejectReason, Source};
use crate::session::{RateLimitPolicy, Session, SessionStatus, format_remaining_time};
use std::time::Duration;

/// One conversation turn, with its citations underneath.
pub fn render_message(message: &Message) -> String {
    let label = match message.role {
        MessageRole::User => style::user_label(t!("chat.you")),
        MessageRole::Assistant => style::assistant_label(t!("chat.assistant")),
    };

    let mut lines = vec![format!("{label} {}", message.content)];
    if let Some(sources) = &message.sources {
        lines.push(style::dim(t!("chat.sources")));
        lines.extend(sources.iter().map(render_source));
    }
    lines.join("\n")
}

fn render_source(source: &Source) -> String {
    style::dim(format!(
        "  - [{}] {} ({}%)",
        source.kind,
        source.title,
        source.score_percent()
    ))
}

pub fn render_counter(questions_remaining: u32, max_questions: u32) -> String {
    style::dim(t!(
        "chat.counter",
        remaining = questions_remaining,
        max = max_questions
    ))
}

/// Shown while the quota is used up. Without a remaining time the banner
/// says the limit will lift shortly.
pub fn render_limit_banner(remaining: Option<Duration>, contact_email: Option<&str>) -> String {
    let mut lines = vec![style::warning(t!("chat.limit_title"))];
    match remaining {
        Some(remaining) => lines.push(
            t!("chat.limit_wait", time = format_remaining_time(remaining)).into_owned(),
        ),
        None => lines.push(t!("chat.limit_soon").into_owned()),
    }
    if let Some(email) = contact_email {
        lines.push(t!("chat.limit_contact", email = style::url(email)).into_owned());
    }
    lines.join("\n")
}

pub fn render_reject(reason: RejectReason, max_message_chars: usize) -> String {
    let text = match reason {
        RejectReason::Empty => t!("chat.reject_empty"),
        RejectReason::TooLong => t!("chat.reject_too_long", max = max_message_chars),
        RejectReason::Busy => t!("chat.reject_busy"),
        RejectReason::LimitReached => t!("chat.limit_title"),
    };
    style::warning(text)
}

/// Session block of the `status` report.
pub fn render_session(
    session: &Session,
    status: &SessionStatus,
    policy: &RateLimitPolicy,
) -> String {
    let state = match status {
        SessionStatus::Active {
            remaining_questions,
        } => t!(
            "status.active",
            remaining = remaining_questions,
            max = policy.max_questions
        )
        .into_owned(),
        SessionStatus::Throttled { remaining } => {
            t!("status.throttled", time = format_remaining_time(*remaining)).into_owned()
        }
    };

    [
        style::header(t!("status.title")),
        format!("  {}  {}", t!("status.session"), session.session_id),
        format!(
            "  {}  {}",
            t!("status.created"),
            session.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        format!(
            "  {}  {}/{}",
            t!("status.questions"),
            session.questions_count,
            policy.max_questions
        ),
        format!("  {}  {state}", t!("status.state")),
    ]
    .join("\n")
}
