use super::Config;
use anyhow::{Context, Result};
use directories::UserDirs;
use std::fs;
use std::path::Path;

impl Config {
    /// Load `~/.cvchat/config.toml`, writing the defaults on first run.
    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        Self::load_or_init_in(&home.join(".cvchat"))
    }

    /// Same as [`Config::load_or_init`] with an explicit config directory.
    ///
    /// Environment overrides are applied after the file is read and are never
    /// written back.
    pub fn load_or_init_in(cvchat_dir: &Path) -> Result<Self> {
        let config_path = cvchat_dir.join("config.toml");

        if !cvchat_dir.exists() {
            fs::create_dir_all(cvchat_dir).context("Failed to create .cvchat directory")?;
        }

        let mut config = if config_path.exists() {
            let contents =
                fs::read_to_string(&config_path).context("Failed to read config file")?;
            let mut config: Config =
                toml::from_str(&contents).context("Failed to parse config file")?;
            config.config_path.clone_from(&config_path);
            config.home_dir = cvchat_dir.to_path_buf();
            config
        } else {
            let config = Self {
                config_path: config_path.clone(),
                home_dir: cvchat_dir.to_path_buf(),
                ..Self::default()
            };
            config.save()?;
            tracing::info!(path = %config_path.display(), "wrote default config");
            config
        };

        config.apply_env_overrides();
        config.validate().context("Invalid configuration")?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }
}
