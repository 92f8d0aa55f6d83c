use std::sync::{LazyLock, Mutex, MutexGuard};

/// Serialises tests that touch process environment variables.
static ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Every variable the config layer reads.
pub(super) const OVERRIDE_VARS: [&str; 8] = [
    "CVCHAT_API_URL",
    "API_URL",
    "CVCHAT_MAX_QUESTIONS",
    "CVCHAT_COOLDOWN_MS",
    "CVCHAT_LOCALE",
    "CVCHAT_STORAGE_DIR",
    "CVCHAT_LANG",
    "LANG",
];

/// Holds the env lock and restores every overridable variable on drop.
pub(super) struct EnvSandbox {
    saved: Vec<(&'static str, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvSandbox {
    /// Lock the environment and start from a state with no overrides set.
    pub(super) fn clean() -> Self {
        let lock = ENV_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let saved = OVERRIDE_VARS
            .iter()
            .map(|key| (*key, std::env::var(key).ok()))
            .collect();
        for key in OVERRIDE_VARS {
            // SAFETY: Test-only. ENV_LOCK is held for the sandbox lifetime,
            // so no other test mutates the environment concurrently.
            unsafe {
                std::env::remove_var(key);
            }
        }
        Self { saved, _lock: lock }
    }

    pub(super) fn set(&self, key: &'static str, value: &str) {
        // SAFETY: Test-only. ENV_LOCK is held by this sandbox.
        unsafe {
            std::env::set_var(key, value);
        }
    }
}

impl Drop for EnvSandbox {
    fn drop(&mut self) {
        for (key, previous) in &self.saved {
            // SAFETY: Test-only restoration while ENV_LOCK is still held.
            unsafe {
                match previous {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}
