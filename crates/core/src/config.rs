use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Environment variable pointing at a TOML hotel profile.
pub const CONFIG_PATH_ENV: &str = "STAYQUOTE_CONFIG";

/// Hotel identity rendered into guest-facing quote messages. Every field has
/// a default so a partial TOML file only overrides what it names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HotelProfile {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub checkin_time: String,
    pub checkout_time: String,
    pub quote_validity_hours: u32,
}

impl Default for HotelProfile {
    fn default() -> Self {
        Self {
            name: "Grand Resort Mahabaleshwar".to_string(),
            address: "Satara Road, Mahabaleshwar, Maharashtra 412806".to_string(),
            phone: "+91 98765 43210".to_string(),
            email: "reservations@grandresort.example".to_string(),
            checkin_time: "2:00 PM".to_string(),
            checkout_time: "11:00 AM".to_string(),
            quote_validity_hours: 48,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read hotel profile {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("could not parse hotel profile {path}: {source}")]
    Parse { path: PathBuf, source: toml::de::Error },
}

impl HotelProfile {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }

    /// Loads the profile named by `STAYQUOTE_CONFIG`, falling back to the
    /// defaults when the variable is unset or the file is unusable.
    pub fn load_or_default() -> Self {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Self::default();
        };
        Self::load(Path::new(&path)).unwrap_or_else(|error| {
            warn!(%error, "falling back to default hotel profile");
            Self::default()
        })
    }
}
