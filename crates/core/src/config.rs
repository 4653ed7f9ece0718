//! Application configuration.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::{Bounds, QuizDefinition};

/// Directory under the user's config dir holding our files.
pub const APP_DIR: &str = "guessr";
/// Config file name inside [`APP_DIR`].
pub const CONFIG_FILE: &str = "config.json";
/// Prefix for environment overrides, e.g. `GUESSR_IMAGE_MAX_WIDTH=300`.
pub const ENV_PREFIX: &str = "GUESSR";

/// Optional colour overrides as `#rrggbb` or `#rgb` strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Window background.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Plain text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    /// Labels such as "Your Guess:".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Submit action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit: Option<String>,
    /// Load-more action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load: Option<String>,
    /// Game-over text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    /// Restart action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restart: Option<String>,
    /// Wrong-guess feedback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub danger: Option<String>,
}

/// Top-level settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Quizzes offered on the menu.
    pub quizzes: Vec<QuizDefinition>,
    /// Width images are scaled to fit before display.
    pub image_max_width: u32,
    /// Height images are scaled to fit before display.
    pub image_max_height: u32,
    /// Colour overrides.
    pub theme: ThemeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let bounds = Bounds::default();
        Self {
            quizzes: vec![QuizDefinition::characters(), QuizDefinition::logos()],
            image_max_width: bounds.width,
            image_max_height: bounds.height,
            theme: ThemeConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load from the default config path plus environment overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(config_path())
    }

    /// Load from `path` (which may be missing) plus environment overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Json).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("failed to read config {}", path.display()))?;
        settings
            .try_deserialize()
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Write the config to `path`, creating parent directories if needed.
    pub fn persist(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory {}", parent.display())
            })?;
        }
        let serialized =
            serde_json::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(path, serialized)
            .with_context(|| format!("failed to write config {}", path.display()))
    }

    /// Bounding box for decoded images.
    pub fn bounds(&self) -> Bounds {
        Bounds {
            width: self.image_max_width.max(1),
            height: self.image_max_height.max(1),
        }
    }
}

/// `<config dir>/guessr`, falling back to the working directory.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Full path of the config file.
pub fn config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Write the default config to the default path if nothing is there yet.
pub fn ensure_default_config() -> Result<PathBuf> {
    let path = config_path();
    ensure_default_config_at(&path)?;
    Ok(path)
}

/// Write the default config to `path` if nothing is there yet.
pub fn ensure_default_config_at(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(());
    }
    info!(path = %path.display(), "Writing default config");
    AppConfig::default().persist(path)
}
