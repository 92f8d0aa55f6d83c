use super::Config;
use std::path::PathBuf;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("CVCHAT_API_URL").or_else(|_| std::env::var("API_URL"))
            && !url.is_empty()
        {
            self.api_url = url;
        }

        if let Ok(max_str) = std::env::var("CVCHAT_MAX_QUESTIONS")
            && let Ok(max) = max_str.parse::<u32>()
        {
            self.session.max_questions = max;
        }

        if let Ok(cooldown_str) = std::env::var("CVCHAT_COOLDOWN_MS")
            && let Ok(cooldown) = cooldown_str.parse::<u64>()
        {
            self.session.cooldown_ms = cooldown;
        }

        if let Ok(locale) = std::env::var("CVCHAT_LOCALE")
            && !locale.is_empty()
        {
            self.locale = locale.trim().to_lowercase();
        }

        if let Ok(dir) = std::env::var("CVCHAT_STORAGE_DIR")
            && !dir.is_empty()
        {
            self.storage.dir = Some(PathBuf::from(dir));
        }
    }
}
