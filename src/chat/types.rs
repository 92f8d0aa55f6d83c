use crate::platform::clock::truncate_to_millis;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}

/// Which corpus a citation was retrieved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SourceKind {
    Experience,
    Project,
    Formation,
}

/// A citation attached to an assistant answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    #[serde(rename = "type")]
    pub kind: SourceKind,
    pub id: i64,
    pub title: String,
    /// Relevance in `[0, 1]`.
    pub score: f64,
}

impl Source {
    /// Relevance as a rounded percentage, clamped to `0..=100`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn score_percent(&self) -> u8 {
        if self.score.is_nan() {
            return 0;
        }
        (self.score * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// One conversation turn. Position in the log, not `timestamp`, is the
/// ordering authority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Source>>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(content: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
            sources: None,
            timestamp: truncate_to_millis(now),
        }
    }

    pub fn assistant(content: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
            sources: None,
            timestamp: truncate_to_millis(now),
        }
    }

    /// Attach citations; an empty list leaves the turn without sources.
    pub fn with_sources(mut self, sources: Vec<Source>) -> Self {
        self.sources = if sources.is_empty() {
            None
        } else {
            Some(sources)
        };
        self
    }
}
