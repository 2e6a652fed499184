use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::Dirs;

/// A configuration used for the application.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory containing the audio source directories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_dir: Option<PathBuf>,
    /// Playback command. `ffplay` is used if unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
}

impl Config {
    pub fn load(dirs: &Dirs) -> Result<Self> {
        let config_path = dirs.config_path();

        let config = if config_path.exists() {
            let data = std::fs::read_to_string(&config_path)?;
            toml::from_str(&data)?
        } else {
            Self::default()
        };

        Ok(config)
    }
}
