use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    pub double_tap_window_ms: u64,
    pub suppression_window_ms: u64,
    pub seek_step_ms: u64,
    pub seek_zone_fraction: f32, // share of the surface width for each of the left/right zones
    pub hint_duration_ms: u64,
    pub inline_seek_zones: bool,
    pub fullscreen_seek_zones: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            double_tap_window_ms: 300,
            suppression_window_ms: 350,
            seek_step_ms: 10_000,
            seek_zone_fraction: 0.35,
            hint_duration_ms: 800,
            inline_seek_zones: true,
            fullscreen_seek_zones: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub inline_vertical_fraction: f32,
    pub standalone_vertical_fraction: f32,
    pub landscape_min_height: f32,
    pub landscape_max_fraction: f32,
    pub default_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            inline_vertical_fraction: 0.25,
            standalone_vertical_fraction: 0.92,
            landscape_min_height: 180.0,
            landscape_max_fraction: 0.5,
            default_height: 220.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub gestures: GestureConfig,
    pub layout: LayoutConfig,
}

impl PlayerConfig {
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Reads `path`, writing defaults there when it is missing or can no
    /// longer be parsed.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Self::write_defaults(path, "no config file");
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config at {}: {}", path.display(), e))?;
        match serde_json::from_str::<Self>(&content) {
            Ok(config) => {
                log::info!("Player config loaded from {}", path.display());
                Ok(config)
            }
            Err(e) => {
                log::warn!("Unreadable player config ({}), resetting gestures and layout", e);
                Self::write_defaults(path, "unreadable config")
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| anyhow::anyhow!("Failed to write config at {}: {}", path.display(), e))
    }

    fn write_defaults(path: &Path, reason: &str) -> anyhow::Result<Self> {
        let config = Self::default();
        config.save_to(path)
            .map_err(|e| anyhow::anyhow!("Failed to write default config ({}): {}", reason, e))?;
        log::info!("Wrote default player config to {} ({})", path.display(), reason);
        Ok(config)
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dual-player")
            .join("config.json")
    }
}
