//! Library root for the `rollguard` crate
//!
//! Anti-rollback guard for a boot or startup path: compares the running
//! build's (magic, version) identity against a persisted high-water
//! mark and refuses to proceed when the build has regressed.

// Core error handling
pub mod errors;

// Marker data model & wire format
pub mod marker;

// Marker persistence
pub mod marker_store;
pub mod marker_store_file;

// Guard decision core
pub mod guard;

// Configuration & CLI
pub mod cli;
pub mod config;
pub mod config_loader;

// Logging
pub mod log_sink;

// Re-export the types an embedding caller needs for one evaluation
pub use errors::{RollguardError, RollguardResult};
pub use guard::{evaluate, GuardOutcome};
pub use marker::{BuildIdentity, Marker};
pub use marker_store::{MarkerRead, MarkerStore};
pub use marker_store_file::FileMarkerStore;
