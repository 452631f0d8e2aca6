use std::{path::PathBuf, time::Duration};

use color_eyre::eyre::Result;
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;

use crate::{domain::reveal::RevealDelay, presentation::config::keybindings, utils};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// Per-slot typewriter speeds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    #[serde(rename = "status_delay_ms")]
    pub status_delay: RevealDelay,
    #[serde(rename = "description_delay_ms")]
    pub description_delay: RevealDelay,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            status_delay: RevealDelay::from(Duration::from_millis(100)),
            description_delay: RevealDelay::from(Duration::from_millis(20)),
        }
    }
}

/// Star ticker settings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    pub initial_stars: u64,
    pub interval_ms: u64,
    /// Upper bound (inclusive) of one random increment
    pub max_increment: u64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            initial_stars: 42_069,
            interval_ms: 3_000,
            max_increment: 2,
        }
    }
}

impl StatsConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

fn default_load_delay_ms() -> u64 {
    100
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default = "default_load_delay_ms")]
    pub load_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            keybindings: keybindings::KeyBindings::default(),
            reveal: RevealConfig::default(),
            stats: StatsConfig::default(),
            load_delay_ms: default_load_delay_ms(),
        }
    }
}

impl Config {
    /// Embedded defaults overlaid with optional user files from the config directory.
    pub fn new() -> Result<Self, ConfigError> {
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            found_config |= config_dir.join(file).exists();
        }
        if !found_config {
            log::info!(
                "no user configuration in {}, using defaults",
                config_dir.display()
            );
        }

        Self::build(builder)
    }

    /// Deserialize `builder` and fill in default keybindings the user left unset.
    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings into user config (flat mapping)
        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(keyseq.clone()).or_insert(*action);
        }

        Ok(cfg)
    }

    /// Defaults shipped inside the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}
