// marker_store_file.rs - File-backed marker store
// Purpose: Development implementation of MarkerStore over a local file,
// simulating the hardware-backed store of a production deployment

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::{RollguardError, RollguardResult};
use crate::marker::Marker;
use crate::marker_store::{MarkerRead, MarkerStore};

/// Default marker file name under the platform data directory.
pub const DEV_MARKER_FILE: &str = "no_rollback.dev";

pub struct FileMarkerStore {
    path: PathBuf,
}

impl FileMarkerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location: `<data_dir>/rollguard/no_rollback.dev`, falling
    /// back to the working directory when no data dir is available.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join("rollguard").join(DEV_MARKER_FILE))
            .unwrap_or_else(|| PathBuf::from(DEV_MARKER_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Deliberate operator intervention: delete the marker so the next
    /// boot reinitializes it. Never called from the guard core.
    pub fn reset(&mut self) -> RollguardResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(RollguardError::persistence("removing marker file", e)),
        }
    }
}

impl MarkerStore for FileMarkerStore {
    fn read(&self) -> RollguardResult<MarkerRead> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(MarkerRead::NotFound);
            }
            Err(e) => return Err(RollguardError::persistence("reading marker file", e)),
        };

        // Non-UTF-8 content is corrupt marker data, not a store failure.
        let raw = match String::from_utf8(bytes) {
            Ok(raw) => raw,
            Err(_) => return Ok(MarkerRead::Malformed),
        };

        match Marker::parse(&raw) {
            Some(marker) => Ok(MarkerRead::Found(marker)),
            None => Ok(MarkerRead::Malformed),
        }
    }

    fn write(&mut self, marker: &Marker) -> RollguardResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| RollguardError::persistence("creating marker directory", e))?;
            }
        }

        let mut file = File::create(&self.path)
            .map_err(|e| RollguardError::persistence("creating marker file", e))?;
        file.write_all(marker.to_string().as_bytes())
            .map_err(|e| RollguardError::persistence("writing marker file", e))?;
        // Durable before Ok: a reported write that did not reach disk
        // would reopen the rollback window on the next boot.
        file.sync_all()
            .map_err(|e| RollguardError::persistence("syncing marker file", e))?;
        Ok(())
    }
}
