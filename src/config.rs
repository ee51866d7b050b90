use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::canvas::Canvas;

pub const CONFIG_FILE: &str = "icon-assets.toml";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output_dir: PathBuf,
    pub width: u32,
    pub height: u32,
    /// `[r, g, b, a]`
    pub color: [u8; 4],
    pub pwa: PwaConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PwaConfig {
    pub enabled: bool,
    pub dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("src-tauri").join("icons"),
            width: 32,
            height: 32,
            color: [0xFB, 0x5B, 0x6B, 0xFF],
            pwa: PwaConfig::default(),
        }
    }
}

impl Default for PwaConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dir: PathBuf::from("public"),
        }
    }
}

impl Config {
    /// Reads `icon-assets.toml` from `base` when present, otherwise the built-in defaults.
    pub fn load(base: &Path) -> Result<Self> {
        let path = base.join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!("No {} in {}, using defaults", CONFIG_FILE, base.display());
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        config.validate()?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        // ICO directory entries store each dimension in one byte (0 = 256)
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !(1..=256).contains(&value) {
                bail!("{} must be between 1 and 256, got {}", name, value);
            }
        }
        // The PNG carries no alpha channel, so the icon must stay opaque to match it
        if self.color[3] != 0xFF {
            bail!("color alpha must be 255, got {}", self.color[3]);
        }
        Ok(())
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
            color: self.color.into(),
        }
    }
}
