//! Resolution of the style override document.
//!
//! Lookup order: explicit path, then `MPP_STYLES`, then
//! `<config dir>/mpp-styles/styles.json` when that file exists.

use crate::error::{Result, StyleError};
use crate::registry::{StyleRegistry, StyleRegistryBuilder};
use crate::storage;
use std::path::{Path, PathBuf};

/// Environment variable naming an override document.
pub const STYLES_ENV: &str = "MPP_STYLES";

/// Directory under the user config dir that holds `styles.json`.
pub const CONFIG_DIR_NAME: &str = "mpp-styles";

/// Where the override document came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StylesSource {
    Explicit(PathBuf),
    Env(PathBuf),
    UserConfig(PathBuf),
}

impl StylesSource {
    pub fn path(&self) -> &Path {
        match self {
            StylesSource::Explicit(p) | StylesSource::Env(p) | StylesSource::UserConfig(p) => p,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Override document given on the command line.
    pub styles: Option<PathBuf>,
    /// Start from an empty registry instead of the built-in styles.
    pub replace_defaults: bool,
}

impl Settings {
    /// Resolve the override document from the process environment.
    pub fn resolve_source(&self) -> Option<StylesSource> {
        let env = std::env::var_os(STYLES_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let user = dirs::config_dir().map(|d| d.join(CONFIG_DIR_NAME).join("styles.json"));
        self.resolve_source_with(env, user)
    }

    /// Same as [`resolve_source`](Self::resolve_source) with the environment
    /// lookups supplied by the caller.
    pub fn resolve_source_with(
        &self,
        env: Option<PathBuf>,
        user_config: Option<PathBuf>,
    ) -> Option<StylesSource> {
        if let Some(p) = &self.styles {
            return Some(StylesSource::Explicit(p.clone()));
        }
        if let Some(p) = env {
            return Some(StylesSource::Env(p));
        }
        user_config
            .filter(|p| p.is_file())
            .map(StylesSource::UserConfig)
    }

    /// Build the effective registry: built-ins (unless replaced) plus the
    /// records of the resolved override document, in document order.
    pub fn load_registry(&self) -> Result<StyleRegistry> {
        self.load_registry_from(self.resolve_source())
    }

    pub fn load_registry_from(&self, source: Option<StylesSource>) -> Result<StyleRegistry> {
        let mut builder = if self.replace_defaults {
            StyleRegistryBuilder::new()
        } else {
            StyleRegistry::builtin().to_builder()
        };
        match source {
            Some(src) => {
                let path = src.path();
                if !path.exists() {
                    return Err(StyleError::MissingStyles(path.to_path_buf()));
                }
                log::info!("applying style overrides from {}", path.display());
                builder = builder.extend(storage::load_path(path)?);
            }
            None => log::debug!("no style overrides configured"),
        }
        Ok(builder.build())
    }
}
