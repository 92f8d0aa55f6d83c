use super::{Config, SUPPORTED_LOCALES};

/// Language part of a locale tag: `"fr_FR.UTF-8"` -> `"fr"`.
fn language_of(raw: &str) -> String {
    let base = raw.split('.').next().unwrap_or(raw);
    let lang = base.split(['_', '-']).next().unwrap_or(base);
    lang.trim().to_lowercase()
}

fn supported(raw: &str) -> Option<String> {
    let lang = language_of(raw);
    SUPPORTED_LOCALES
        .contains(&lang.as_str())
        .then_some(lang)
}

/// `CVCHAT_LANG` env -> config value (when not the default) -> system `LANG` -> `"en"`.
///
/// Candidates without a translation file are skipped.
fn detect_locale(config_locale: &str) -> String {
    if let Ok(lang) = std::env::var("CVCHAT_LANG")
        && let Some(lang) = supported(&lang)
    {
        return lang;
    }

    if config_locale != "en"
        && let Some(lang) = supported(config_locale)
    {
        return lang;
    }

    if let Ok(lang) = std::env::var("LANG")
        && let Some(lang) = supported(&lang)
    {
        return lang;
    }

    "en".into()
}

impl Config {
    /// Pick the display language and hand it to `rust_i18n`.
    pub fn apply_locale(&self) -> String {
        let locale = detect_locale(&self.locale);
        rust_i18n::set_locale(&locale);
        locale
    }
}
