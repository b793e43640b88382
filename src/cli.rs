use clap::{Parser, Subcommand};

use crate::config::RollguardConfig;
use crate::config_loader::load_config;
use crate::errors::RollguardError;
use crate::guard::{self, GuardOutcome};
use crate::log_sink::{LogEvent, LogLevel};
use crate::marker_store::{MarkerRead, MarkerStore};
use crate::marker_store_file::FileMarkerStore;

/// Top-level CLI interface for rollguard
#[derive(Parser)]
#[command(
    name = "rollguard",
    version = "0.1.0",
    about = "Anti-rollback boot guard"
)]
pub struct Cli {
    /// Path to a JSON config file; environment variables are used when absent
    #[arg(short, long)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the guard once: initialize/advance the marker or refuse startup
    Check,

    /// Display the persisted marker without writing anything
    Status,

    /// Delete the marker (factory reset); the next check reinitializes it
    Reset {
        #[arg(long)]
        confirm: bool,
    },
}

/// Execute the parsed CLI, returning the process exit code. A nonzero
/// code from `check` means the caller must halt startup.
pub fn run(cli: Cli) -> i32 {
    let loaded = match load_config(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            LogEvent::new("cli", "load_config", e.to_string())
                .with_level(LogLevel::Fatal)
                .emit();
            return 1;
        }
    };
    loaded.event.emit();

    let mut store = FileMarkerStore::new(loaded.config.marker_path());

    match cli.command.unwrap_or(Commands::Check) {
        Commands::Check => handle_check(&loaded.config, &mut store),
        Commands::Status => handle_status(&store),
        Commands::Reset { confirm } => handle_reset(&mut store, confirm),
    }
}

fn handle_check(config: &RollguardConfig, store: &mut FileMarkerStore) -> i32 {
    let identity = config.identity();

    match guard::evaluate(identity, store) {
        Ok(outcome) => {
            let (event_type, context) = match outcome {
                GuardOutcome::Initialized => (
                    "marker_initialized",
                    format!("first run, wrote {}-{}", identity.magic, identity.version),
                ),
                GuardOutcome::Advanced => (
                    "marker_advanced",
                    format!("advanced to version {}", identity.version),
                ),
                GuardOutcome::UpToDate => ("version_match", "marker already current".to_string()),
            };
            LogEvent::new("guard", event_type, context).emit();
            println!("✅ rollback check passed");
            0
        }
        Err(e) => {
            let event_type = match e {
                RollguardError::InvalidFormat => "invalid_format",
                RollguardError::InvalidMagic { .. } => "invalid_magic",
                RollguardError::RollbackDetected { .. } => "rollback_detected",
                RollguardError::Persistence { .. } => "persistence_failure",
                RollguardError::Config { .. } => "config_error",
            };
            LogEvent::new("guard", event_type, e.to_string())
                .with_level(LogLevel::Fatal)
                .emit();
            eprintln!("❌ rollback check failed: {}", e);
            1
        }
    }
}

fn handle_status(store: &FileMarkerStore) -> i32 {
    match store.read() {
        Ok(MarkerRead::Found(marker)) => {
            println!(
                "marker at {}: magic={} version={}",
                store.path().display(),
                marker.magic,
                marker.version
            );
            0
        }
        Ok(MarkerRead::NotFound) => {
            println!("no marker at {}", store.path().display());
            0
        }
        Ok(MarkerRead::Malformed) => {
            eprintln!("❌ marker at {} is malformed", store.path().display());
            1
        }
        Err(e) => {
            eprintln!("❌ failed to read marker: {}", e);
            1
        }
    }
}

fn handle_reset(store: &mut FileMarkerStore, confirm: bool) -> i32 {
    if !confirm {
        eprintln!("reset deletes the anti-rollback marker; pass --confirm to proceed");
        return 2;
    }

    match store.reset() {
        Ok(()) => {
            LogEvent::new("cli", "marker_reset", store.path().display().to_string())
                .with_level(LogLevel::Warn)
                .emit();
            println!("✅ marker removed; next check will reinitialize it");
            0
        }
        Err(e) => {
            eprintln!("❌ failed to remove marker: {}", e);
            1
        }
    }
}
