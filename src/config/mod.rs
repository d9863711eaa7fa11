//! Surface configuration and TOML loading.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::grid::{DEFAULT_COLS, DEFAULT_LINES};
use crate::render::Rgba;
use crate::window::DEFAULT_FONT_SIZE;

/// Top-level configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub grid: GridConfig,
    pub font: FontConfig,
    pub render: RenderConfig,
    pub window: WindowConfig,
}

/// Initial grid dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub columns: usize,
    pub rows: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLS,
            rows: DEFAULT_LINES,
        }
    }
}

/// Font configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub size: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_FONT_SIZE,
        }
    }
}

/// Redraw cadence and overlay colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub frame_interval_ms: u64,
    /// Selection overlay as `"#RRGGBB"` or `"#RRGGBBAA"` hex.
    pub selection_color: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 33,
            selection_color: "#0078D780".to_owned(),
        }
    }
}

/// Host window policies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub update_title_from_terminal: bool,
    pub close_on_process_exit: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            update_title_from_terminal: true,
            close_on_process_exit: true,
        }
    }
}

impl SurfaceConfig {
    /// Parse config from TOML text. Missing sections and fields use defaults.
    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Read and parse the config at `path`.
    ///
    /// Unlike [`load_or_default`](Self::load_or_default), this keeps the
    /// distinction between "unreadable" and "invalid" so callers can keep
    /// a previous config on error.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&data).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config from `path`, falling back to defaults if the file is
    /// missing or can't be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(cfg) => {
                log::info!("config: loaded from {}", path.display());
                cfg
            }
            Err(Error::ConfigRead { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Self::default()
            }
            Err(e) => {
                log::warn!("config: {e}");
                Self::default()
            }
        }
    }

    /// Serialize to pretty-printed TOML.
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Flush cadence, never shorter than 1 ms.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.render.frame_interval_ms.max(1))
    }

    /// Parsed selection overlay color.
    pub fn selection_rgba(&self) -> Result<Rgba> {
        Rgba::from_hex(&self.render.selection_color)
    }
}

#[cfg(test)]
mod tests;
