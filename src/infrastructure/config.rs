use std::{path::PathBuf, time::Duration};

use config::ConfigError;
use serde::Deserialize;

use crate::{
    core::state::ConsoleSettings,
    domain::coordinates::{TargetCoordinates, DEFAULT_LATITUDE, DEFAULT_LONGITUDE},
    presentation::config::{keybindings, styles},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// The `console` section
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub countdown_from: u8,
    pub tick_millis: u64,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            countdown_from: 10,
            tick_millis: 1000,
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub console: ConsoleConfig,
}

impl Config {
    /// Loads user config files from the config directory on top of the embedded defaults.
    /// Missing files are fine; user keybindings and styles win over the defaults.
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::defaults()?;
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
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_defaults(&default_config);
        Ok(cfg)
    }

    /// The embedded default configuration
    pub fn defaults() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    fn merge_defaults(&mut self, defaults: &Config) {
        for (keyseq, action) in defaults.keybindings.iter() {
            self.keybindings.entry(keyseq.clone()).or_insert(*action);
        }
        for (style_key, style) in defaults.styles.iter() {
            self.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }
    }

    /// Console tunables with out-of-range values clamped
    pub fn console_settings(&self) -> ConsoleSettings {
        ConsoleSettings {
            countdown_from: self.console.countdown_from.max(1),
            tick_interval: Duration::from_millis(self.console.tick_millis.max(1)),
            default_target: TargetCoordinates::new(self.console.latitude, self.console.longitude),
        }
    }
}
