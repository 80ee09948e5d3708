//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::game::{Difficulty, GameRules};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Game configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameConfig {
    /// Difficulty selected when a session starts
    #[serde(default)]
    pub difficulty: Difficulty,

    /// Overrides for scoring and timing
    #[serde(default)]
    pub rules: GameRules,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// A resolved configuration and where it came from
///
/// Files that exist but fail to load are collected in `skipped` so the
/// caller can report them once logging is up.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from, `None` for built-in defaults
    pub source: Option<PathBuf>,
    pub skipped: Vec<ConfigError>,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the configuration for a run
    ///
    /// An explicitly given path must load. Otherwise the default locations
    /// are tried in order and broken files are skipped.
    pub fn resolve(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
        match explicit {
            Some(path) => Ok(LoadedConfig {
                config: Self::load_with_env(path)?,
                source: Some(path.to_path_buf()),
                skipped: Vec::new(),
            }),
            None => Self::load_default(),
        }
    }

    /// Load from default locations or environment
    pub fn load_default() -> Result<LoadedConfig, ConfigError> {
        Self::load_first(&default_config_paths(), |key| std::env::var(key).ok())
    }

    /// Load the first of `paths` that exists and parses, then apply overrides
    fn load_first(
        paths: &[PathBuf],
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<LoadedConfig, ConfigError> {
        let mut skipped = Vec::new();
        let mut found = None;

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load(path) {
                Ok(config) => {
                    found = Some((config, path.clone()));
                    break;
                }
                Err(e) => skipped.push(e),
            }
        }

        let (mut config, source) = match found {
            Some((config, path)) => (config, Some(path)),
            None => (Config::default(), None),
        };
        config.apply_overrides(lookup)?;
        config.validate()?;

        Ok(LoadedConfig {
            config,
            source,
            skipped,
        })
    }

    /// Check values that parse but make no sense
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rules = &self.game.rules;
        if rules.max_level == 0 {
            return Err(ConfigError::Invalid("game.rules.max_level must be at least 1".into()));
        }
        if rules.tick_ms == 0 {
            return Err(ConfigError::Invalid("game.rules.tick_ms must be positive".into()));
        }
        if rules.countdown_base_secs == 0 && rules.countdown_secs_per_tile == 0 {
            return Err(ConfigError::Invalid(
                "game.rules countdown_base_secs and countdown_secs_per_tile cannot both be 0"
                    .into(),
            ));
        }
        match self.logging.format.as_str() {
            "pretty" | "json" => Ok(()),
            other => Err(ConfigError::Invalid(format!(
                "logging.format must be pretty or json, got {}",
                other
            ))),
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        // Game overrides
        if let Some(difficulty) = lookup("NEUROGROW_DIFFICULTY") {
            self.game.difficulty = difficulty
                .parse()
                .map_err(|e| ConfigError::Invalid(format!("NEUROGROW_DIFFICULTY: {}", e)))?;
        }
        if let Some(max_level) = lookup("NEUROGROW_MAX_LEVEL") {
            match max_level.parse::<u32>() {
                Ok(level) if level > 0 => self.game.rules.max_level = level,
                _ => {
                    return Err(ConfigError::Invalid(format!(
                        "NEUROGROW_MAX_LEVEL must be a positive integer, got {:?}",
                        max_level
                    )))
                }
            }
        }

        // Logging overrides
        if let Some(level) = lookup("NEUROGROW_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("NEUROGROW_LOG_FORMAT") {
            self.logging.format = format;
        }
        Ok(())
    }
}

/// Config file locations, most specific first
pub fn default_config_paths() -> Vec<PathBuf> {
    [
        dirs::config_dir().map(|p| p.join("neurogrow").join("config.toml")),
        Some(PathBuf::from("./neurogrow.toml")),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# NeuroGrow Configuration
#
# Environment variables override these settings:
# - NEUROGROW_DIFFICULTY
# - NEUROGROW_MAX_LEVEL
# - NEUROGROW_LOG_LEVEL
# - NEUROGROW_LOG_FORMAT

[game]
# Starting difficulty: easy, medium, hard
difficulty = "easy"

[game.rules]
# Completing this level ends the run
max_level = 10

# Score per level number (reward = level * level_reward + seconds left)
level_reward = 10

# Delay before the first tile lights up (ms)
lead_in_ms = 500

# Blank gap between highlighted tiles (ms)
reveal_gap_ms = 200

# Countdown tick (ms)
tick_ms = 1000

# Pause before the next level starts (ms)
advance_delay_ms = 1500

# Input countdown = sequence length * countdown_secs_per_tile + countdown_base_secs
countdown_base_secs = 5
countdown_secs_per_tile = 2

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.game.difficulty, Difficulty::Easy);
        assert_eq!(config.game.rules, GameRules::default());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        config.validate().unwrap();
        assert_eq!(config.game.rules, GameRules::default());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[game]\ndifficulty = \"hard\"\n\n[game.rules]\nmax_level = 4\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.game.difficulty, Difficulty::Hard);
        assert_eq!(config.game.rules.max_level, 4);
        assert_eq!(config.game.rules.level_reward, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_bad_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[game]\ndifficulty = \"extreme\"\n").unwrap();
        assert!(matches!(
            Config::load(&path).unwrap_err(),
            ConfigError::Parse { .. }
        ));
    }

    #[test]
    fn test_validate_rejects_zero_levels() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[game.rules]\nmax_level = 0\n").unwrap();
        assert!(matches!(
            Config::load(&path).unwrap_err(),
            ConfigError::Invalid(_)
        ));
    }

    #[test]
    fn test_validate_rejects_zero_countdown() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[game.rules]\ncountdown_base_secs = 0\ncountdown_secs_per_tile = 0\n",
        )
        .unwrap();
        assert!(matches!(
            Config::load(&path).unwrap_err(),
            ConfigError::Invalid(_)
        ));

        // Either term alone still gives a budget
        std::fs::write(&path, "[game.rules]\ncountdown_base_secs = 0\n").unwrap();
        assert!(Config::load(&path).is_ok());
    }

    #[test]
    fn test_explicit_path_must_load() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(Config::resolve(Some(&missing)).is_err());
    }

    #[test]
    fn test_broken_file_is_skipped_and_reported() {
        let dir = tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        let absent = dir.path().join("absent.toml");
        std::fs::write(&broken, "[game]\ndifficulty = \"extreme\"\n").unwrap();
        std::fs::write(&good, "[game]\ndifficulty = \"medium\"\n").unwrap();

        let loaded =
            Config::load_first(&[absent, broken.clone(), good.clone()], |_| None).unwrap();

        assert_eq!(loaded.source, Some(good));
        assert_eq!(loaded.config.game.difficulty, Difficulty::Medium);
        assert_eq!(loaded.skipped.len(), 1);
        assert!(matches!(
            &loaded.skipped[0],
            ConfigError::Parse { path, .. } if *path == broken
        ));
    }

    #[test]
    fn test_no_usable_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[game.rules]\nmax_level = 0\n").unwrap();

        let loaded = Config::load_first(&[broken], |key| {
            (key == "NEUROGROW_DIFFICULTY").then(|| "hard".to_string())
        })
        .unwrap();

        assert_eq!(loaded.source, None);
        assert_eq!(loaded.config.game.difficulty, Difficulty::Hard);
        assert_eq!(loaded.config.game.rules, GameRules::default());
        assert!(matches!(loaded.skipped[..], [ConfigError::Invalid(_)]));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("NEUROGROW_DIFFICULTY", "medium"),
            ("NEUROGROW_MAX_LEVEL", "3"),
            ("NEUROGROW_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.game.difficulty, Difficulty::Medium);
        assert_eq!(config.game.rules.max_level, 3);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_bad_overrides_are_rejected() {
        let mut config = Config::default();
        let err = config
            .apply_overrides(|key| (key == "NEUROGROW_DIFFICULTY").then(|| "legendary".into()))
            .unwrap_err();
        assert!(err.to_string().contains("NEUROGROW_DIFFICULTY"));

        for value in ["0", "-2", "ten"] {
            let err = Config::default()
                .apply_overrides(|key| (key == "NEUROGROW_MAX_LEVEL").then(|| value.into()))
                .unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)));
        }
    }

    #[test]
    fn test_overridden_log_format_is_validated() {
        let dir = tempdir().unwrap();
        let err = Config::load_first(&[dir.path().join("none.toml")], |key| {
            (key == "NEUROGROW_LOG_FORMAT").then(|| "xml".to_string())
        })
        .unwrap_err();
        assert!(err.to_string().contains("logging.format"));
    }
}
