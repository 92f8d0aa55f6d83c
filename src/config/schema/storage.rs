use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory of the persisted session and message log.
    /// Defaults to `storage/` next to the config file.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}
