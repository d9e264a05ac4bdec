//! Loads the site configuration consumed by the header.
//!
//! The file is JSON with camelCase keys (see [`SiteConfig`]). Its location
//! comes from `SITE_CONFIG`, falling back to `site.config.json` in the
//! working directory. A missing file means defaults; a broken one is an
//! error so typos do not silently change the site.

use app::types::SiteConfig;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::{info, warn};

pub const CONFIG_ENV: &str = "SITE_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "site.config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read site config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid site config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[must_use]
pub fn config_path() -> PathBuf {
    env::var(CONFIG_ENV).map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

pub fn load_site_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "site config not found; using defaults");
            return Ok(SiteConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let config: SiteConfig = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        path = %path.display(),
        title = %config.title,
        sticky = config.sticky_enabled(),
        "loaded site config"
    );
    Ok(config)
}
