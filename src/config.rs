//! Configuration loaded from ~/.dexview/config.toml
//!
//! ```toml
//! [catalog]
//! api_base_url = "https://pokeapi.co/api/v2/"
//! page_size = 9
//! ```
//!
//! Every key is optional; a missing file or section means defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::paginate::DEFAULT_PAGE_SIZE;

/// Directory under the home directory holding the config file
pub const CONFIG_DIR: &str = ".dexview";

/// Config file name within [`CONFIG_DIR`]
pub const CONFIG_TOML: &str = "config.toml";

/// Environment variable overriding `api_base_url`
pub const API_URL_ENV: &str = "DEXVIEW_API_URL";

/// Catalog and presentation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base of the creature database API (trailing slash expected)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Base URL for official artwork sprites
    #[serde(default = "default_sprite_base_url")]
    pub sprite_base_url: String,

    /// Base URL for type badge icons
    #[serde(default = "default_type_icon_base_url")]
    pub type_icon_base_url: String,

    /// `limit` sent with the catalog request
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,

    /// Entries per gallery page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Per-request timeout in seconds (0 = no timeout)
    #[serde(default)]
    pub request_timeout_secs: u64,
}

fn default_api_base_url() -> String {
    "https://pokeapi.co/api/v2/".to_string()
}

fn default_sprite_base_url() -> String {
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/"
        .to_string()
}

fn default_type_icon_base_url() -> String {
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/types/generation-viii/sword-shield/"
        .to_string()
}

fn default_list_limit() -> usize {
    10000
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            sprite_base_url: default_sprite_base_url(),
            type_icon_base_url: default_type_icon_base_url(),
            list_limit: default_list_limit(),
            page_size: default_page_size(),
            request_timeout_secs: 0,
        }
    }
}

/// Path of the user config file, if a home directory exists
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR).join(CONFIG_TOML))
}

/// Load `[catalog]` from `path`, falling back to defaults
pub fn load_config(path: &Path) -> Result<CatalogConfig> {
    if !path.exists() {
        log::debug!("No config found at {:?}, using defaults", path);
        return Ok(CatalogConfig::default());
    }

    let config_str = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let toml_value: toml::Value = toml::from_str(&config_str)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    if let Some(catalog_table) = toml_value.get("catalog") {
        let config: CatalogConfig = catalog_table
            .clone()
            .try_into()
            .context("Failed to parse [catalog] section")?;
        Ok(config)
    } else {
        log::debug!("No [catalog] section in {:?}, using defaults", path);
        Ok(CatalogConfig::default())
    }
}

/// Load the user config and apply environment overrides
pub fn load_user_config() -> Result<CatalogConfig> {
    let mut config = match user_config_path() {
        Some(path) => load_config(&path)?,
        None => {
            log::debug!("Could not determine home directory");
            CatalogConfig::default()
        }
    };

    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.trim().is_empty() {
            log::info!("Using API base from {}: {}", API_URL_ENV, url);
            config.api_base_url = url;
        }
    }

    Ok(config)
}
