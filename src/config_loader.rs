// config_loader.rs - Config loading for rollguard
// Purpose: Load config from file or environment and carry a structured
// trace of where the configuration came from

use crate::config::RollguardConfig;
use crate::errors::RollguardResult;
use crate::log_sink::{LogEvent, LogLevel};

#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: RollguardConfig,
    pub event: LogEvent,
}

/// Attempts to load configuration from a JSON file, then environment as fallback
pub fn load_config(path: Option<&str>) -> RollguardResult<ConfigLoadResult> {
    let (config, source_note) = if let Some(path_str) = path {
        let cfg = RollguardConfig::from_file(path_str)?;
        (cfg, format!("loaded from file: {}", path_str))
    } else {
        let cfg = RollguardConfig::from_env()?;
        (cfg, "loaded from environment".to_string())
    };

    let event = LogEvent::new("config_loader", "load_config", source_note)
        .with_level(LogLevel::Debug);

    Ok(ConfigLoadResult { config, event })
}
