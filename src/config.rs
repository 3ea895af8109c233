use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{DockError, DockResult};

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub providers: ProviderConfig,
}

/// Vertical metrics of the palette, in the same unit the host uses when it
/// reports the mount size. Fixed by the visual design; kept as configuration
/// so themes can restyle entry density without touching layout logic.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LayoutConfig {
    pub entry_height: u16,
    pub margin_top: u16,
    pub toggle_height: u16,
    pub margin_bottom: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            entry_height: 46,
            margin_top: 20,
            toggle_height: 10,
            margin_bottom: 20,
        }
    }
}

impl LayoutConfig {
    /// Fixed vertical overhead around the entries region.
    pub fn margin_total(&self) -> u16 {
        self.margin_top
            .saturating_add(self.toggle_height)
            .saturating_add(self.margin_bottom)
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProviderConfig {
    pub default_priority: u32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            default_priority: 1000,
        }
    }
}

impl Config {
    pub fn load() -> DockResult<Self> {
        let Some(path) = default_config_path() else {
            return Ok(Self::default());
        };
        Self::load_from_path(path)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> DockResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        if !path.is_file() {
            return Err(DockError::invalid_argument(format!(
                "config path is not a regular file: {}",
                path.display()
            )));
        }

        let raw = fs::read_to_string(path).map_err(|source| {
            DockError::io_with_context(
                source,
                format!("failed to read config: {}", path.display()),
            )
        })?;
        let parsed = toml::from_str::<Self>(&raw).map_err(|source| {
            DockError::invalid_argument(format!(
                "failed to parse config {}: {source}",
                path.display()
            ))
        })?;
        Ok(parsed.sanitized())
    }

    fn sanitized(mut self) -> Self {
        self.layout.entry_height = self.layout.entry_height.max(1);
        self
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os("DOCK_CONFIG_PATH")
        && !explicit.is_empty()
    {
        return Some(PathBuf::from(explicit));
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Some(PathBuf::from(xdg).join("dock").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME")
        && !home.is_empty()
    {
        return Some(
            PathBuf::from(home)
                .join(".config")
                .join("dock")
                .join("config.toml"),
        );
    }
    if let Some(appdata) = std::env::var_os("APPDATA")
        && !appdata.is_empty()
    {
        return Some(PathBuf::from(appdata).join("dock").join("config.toml"));
    }
    None
}
