//! Maps the `log` section of the config onto the shared logger.

use std::str::FromStr;

use anyhow::anyhow;
use hvadan_logging::{LevelFilter, LogDestination, LogSettings};

use crate::config::{LogConfig, LogTarget};

pub fn settings_from(
    config: &LogConfig,
    target_override: Option<LogTarget>,
) -> anyhow::Result<LogSettings> {
    let level = LevelFilter::from_str(config.level.trim())
        .map_err(|_| anyhow!("unknown log level {:?}", config.level))?;
    let destination = match target_override.unwrap_or(config.destination) {
        LogTarget::File => LogDestination::File,
        LogTarget::Terminal => LogDestination::Terminal,
        LogTarget::Both => LogDestination::Both,
    };
    Ok(LogSettings {
        destination,
        level,
        file_path: config.file.clone(),
    })
}

pub fn initialize(config: &LogConfig, target_override: Option<LogTarget>) -> anyhow::Result<()> {
    let settings = settings_from(config, target_override)?;
    if !hvadan_logging::initialize(&settings) {
        eprintln!("Warning: logging is disabled");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins_over_configured_destination() {
        let config = LogConfig {
            level: "Debug".to_string(),
            ..LogConfig::default()
        };
        let settings = settings_from(&config, Some(LogTarget::File)).unwrap();
        assert_eq!(settings.destination, LogDestination::File);
        assert_eq!(settings.level, LevelFilter::Debug);
    }

    #[test]
    fn unknown_level_is_rejected() {
        let config = LogConfig {
            level: "chatty".to_string(),
            ..LogConfig::default()
        };
        assert!(settings_from(&config, None).is_err());
    }
}
