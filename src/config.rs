// config.rs - Runtime configuration for rollguard
// Purpose: Marker location and optional build-identity overrides,
// loaded from a JSON file or the environment

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{RollguardError, RollguardResult};
use crate::marker::BuildIdentity;
use crate::marker_store_file::FileMarkerStore;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollguardConfig {
    /// Marker file location. Defaults to the platform data directory.
    pub marker_path: Option<String>,
    /// Identity overrides, mainly for staging and test deployments;
    /// a release build uses its compiled-in identity.
    pub magic: Option<u32>,
    pub version: Option<u32>,
}

impl RollguardConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> RollguardResult<Self> {
        let content = fs::read_to_string(&path).map_err(|e| {
            RollguardError::config(format!(
                "failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;
        serde_json::from_str(&content)
            .map_err(|e| RollguardError::config(format!("invalid JSON config: {}", e)))
    }

    /// Build configuration from ROLLGUARD_* environment variables.
    /// Every variable is optional; unset means the compiled-in default.
    pub fn from_env() -> RollguardResult<Self> {
        let marker_path = std::env::var("ROLLGUARD_MARKER_PATH").ok().and_then(|v| {
            if v.trim().is_empty() {
                None
            } else {
                Some(v)
            }
        });

        let magic = parse_env_u32("ROLLGUARD_MAGIC")?;
        let version = parse_env_u32("ROLLGUARD_VERSION")?;

        Ok(Self {
            marker_path,
            magic,
            version,
        })
    }

    /// Resolve the build identity this process should assert.
    pub fn identity(&self) -> BuildIdentity {
        let compiled = BuildIdentity::current();
        BuildIdentity {
            magic: self.magic.unwrap_or(compiled.magic),
            version: self.version.unwrap_or(compiled.version),
        }
    }

    /// Resolve the marker file location.
    pub fn marker_path(&self) -> PathBuf {
        self.marker_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(FileMarkerStore::default_path)
    }
}

fn parse_env_u32(var: &str) -> RollguardResult<Option<u32>> {
    match std::env::var(var) {
        Err(_) => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|e| RollguardError::config(format!("{} is not a u32: {}", var, e))),
    }
}
