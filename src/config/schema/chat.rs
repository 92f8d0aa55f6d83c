use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Interval of the cooldown re-check while chatting.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Longest question accepted, in characters.
    #[serde(default = "default_max_message_chars")]
    pub max_message_chars: usize,
    /// Name the greeting introduces the assistant on behalf of.
    #[serde(default = "default_owner_name")]
    pub owner_name: String,
    /// Shown in the limit banner when set.
    #[serde(default)]
    pub contact_email: Option<String>,
}

fn default_poll_interval_secs() -> u64 {
    10
}

fn default_max_message_chars() -> usize {
    1_000
}

fn default_owner_name() -> String {
    "the candidate".into()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
            max_message_chars: default_max_message_chars(),
            owner_name: default_owner_name(),
            contact_email: None,
        }
    }
}
