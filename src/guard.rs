// guard.rs - Anti-rollback decision core
// Purpose: Decide whether the current build may run, and keep the persisted
// marker in sync with the highest version ever run

use crate::errors::{RollguardError, RollguardResult};
use crate::marker::{BuildIdentity, Marker};
use crate::marker_store::{MarkerRead, MarkerStore};

/// Success outcomes of one guard evaluation. Failures (malformed or
/// foreign markers, detected rollback, write failure) are the error
/// side of the Result; all of them are fatal for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// No prior marker; one was written for this build. Expected on
    /// first-ever run, never an error.
    Initialized,
    /// The marker was older and has been advanced to this build.
    Advanced,
    /// The marker already matches this build. Nothing written.
    UpToDate,
}

/// Evaluate the anti-rollback protocol once.
///
/// Called exactly once per startup, before anything else initializes.
/// The only side effect is a marker write on the Initialized/Advanced
/// paths; termination on failure belongs to the caller.
pub fn evaluate(
    identity: BuildIdentity,
    store: &mut dyn MarkerStore,
) -> RollguardResult<GuardOutcome> {
    let marker = match store.read()? {
        MarkerRead::NotFound => {
            store.write(&Marker::new(identity.magic, identity.version))?;
            return Ok(GuardOutcome::Initialized);
        }
        MarkerRead::Malformed => return Err(RollguardError::InvalidFormat),
        MarkerRead::Found(marker) => marker,
    };

    if marker.magic != identity.magic {
        return Err(RollguardError::invalid_magic(identity.magic, marker.magic));
    }

    if marker.version > identity.version {
        return Err(RollguardError::rollback(marker.version, identity.version));
    }

    if marker.version < identity.version {
        store.write(&Marker::new(marker.magic, identity.version))?;
        return Ok(GuardOutcome::Advanced);
    }

    Ok(GuardOutcome::UpToDate)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory store with a write-failure switch, for exercising the
    /// no-false-success contract without touching the filesystem.
    struct MemStore {
        contents: Option<String>,
        fail_writes: bool,
    }

    impl MemStore {
        fn empty() -> Self {
            Self {
                contents: None,
                fail_writes: false,
            }
        }

        fn with(raw: &str) -> Self {
            Self {
                contents: Some(raw.to_string()),
                fail_writes: false,
            }
        }
    }

    impl MarkerStore for MemStore {
        fn read(&self) -> RollguardResult<MarkerRead> {
            match &self.contents {
                None => Ok(MarkerRead::NotFound),
                Some(raw) => match Marker::parse(raw) {
                    Some(marker) => Ok(MarkerRead::Found(marker)),
                    None => Ok(MarkerRead::Malformed),
                },
            }
        }

        fn write(&mut self, marker: &Marker) -> RollguardResult<()> {
            if self.fail_writes {
                return Err(RollguardError::persistence(
                    "writing marker",
                    std::io::Error::new(std::io::ErrorKind::Other, "store unavailable"),
                ));
            }
            self.contents = Some(marker.to_string());
            Ok(())
        }
    }

    fn identity() -> BuildIdentity {
        BuildIdentity::new(1234, 3)
    }

    #[test]
    fn missing_marker_initializes() {
        let mut store = MemStore::empty();
        let outcome = evaluate(identity(), &mut store).unwrap();
        assert_eq!(outcome, GuardOutcome::Initialized);
        assert_eq!(store.contents.as_deref(), Some("1234-3"));
    }

    #[test]
    fn older_marker_advances_keeping_magic() {
        let mut store = MemStore::with("1234-2");
        let outcome = evaluate(identity(), &mut store).unwrap();
        assert_eq!(outcome, GuardOutcome::Advanced);
        assert_eq!(store.contents.as_deref(), Some("1234-3"));
    }

    #[test]
    fn equal_marker_is_a_noop() {
        let mut store = MemStore::with("1234-3");
        let outcome = evaluate(identity(), &mut store).unwrap();
        assert_eq!(outcome, GuardOutcome::UpToDate);
        assert_eq!(store.contents.as_deref(), Some("1234-3"));
    }

    #[test]
    fn newer_marker_is_rejected_without_write() {
        let mut store = MemStore::with("1234-5");
        let err = evaluate(identity(), &mut store).unwrap_err();
        assert!(matches!(
            err,
            RollguardError::RollbackDetected {
                persisted: 5,
                current: 3
            }
        ));
        assert_eq!(store.contents.as_deref(), Some("1234-5"));
    }

    #[test]
    fn foreign_magic_is_rejected_regardless_of_version() {
        // both older and newer foreign versions must hit the same wall
        for raw in ["9999-1", "9999-9"] {
            let mut store = MemStore::with(raw);
            let err = evaluate(identity(), &mut store).unwrap_err();
            assert!(matches!(
                err,
                RollguardError::InvalidMagic {
                    expected: 1234,
                    found: 9999
                }
            ));
            assert_eq!(store.contents.as_deref(), Some(raw));
        }
    }

    #[test]
    fn malformed_marker_is_rejected_without_write() {
        let mut store = MemStore::with("not-a-version");
        let err = evaluate(identity(), &mut store).unwrap_err();
        assert!(matches!(err, RollguardError::InvalidFormat));
        assert_eq!(store.contents.as_deref(), Some("not-a-version"));
    }

    #[test]
    fn failed_initial_write_never_reports_success() {
        let mut store = MemStore::empty();
        store.fail_writes = true;
        let err = evaluate(identity(), &mut store).unwrap_err();
        assert!(matches!(err, RollguardError::Persistence { .. }));
        assert!(store.contents.is_none());
    }

    #[test]
    fn failed_advance_write_never_reports_success() {
        let mut store = MemStore::with("1234-1");
        store.fail_writes = true;
        let err = evaluate(identity(), &mut store).unwrap_err();
        assert!(matches!(err, RollguardError::Persistence { .. }));
        assert_eq!(store.contents.as_deref(), Some("1234-1"));
    }
}
