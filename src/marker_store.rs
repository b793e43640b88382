use crate::errors::RollguardResult;
use crate::marker::Marker;

/// Result of one store read. The three-way split is load-bearing:
/// "never written" initializes, "written but unparseable" is fatal,
/// and only a valid marker reaches version comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerRead {
    NotFound,
    Malformed,
    Found(Marker),
}

/// Backing store for the anti-rollback marker. A production deployment
/// implements this over hardware-backed secure storage; the crate ships
/// a file-backed store for development.
pub trait MarkerStore: Send + Sync {
    /// Read the persisted marker. I/O-level failures (present but
    /// unreadable) are errors, distinct from `Malformed`.
    fn read(&self) -> RollguardResult<MarkerRead>;

    /// Persist the marker. Must be durable before returning Ok; the
    /// guard reports Initialized/Advanced only on a successful write.
    fn write(&mut self, marker: &Marker) -> RollguardResult<()>;
}
