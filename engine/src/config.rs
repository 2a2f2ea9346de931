//! TOML configuration for pinpad.
//!
//! Loaded once at startup from `$PINPAD_CONFIG`, `~/.pinpad/config.toml`,
//! or `./.pinpad/config.toml`, whichever exists first. Every field is
//! optional; a missing or unreadable file degrades to defaults with a
//! warning rather than refusing to start.

use std::path::PathBuf;
use std::time::Duration;
use std::{env, fs};

use serde::Deserialize;
use thiserror::Error;

/// Default number of slots in the code row.
const DEFAULT_CODE_LENGTH: usize = 6;
/// Rows longer than this stop being a useful single-code control.
const MAX_CODE_LENGTH: usize = 12;
/// Default auto-mask delay.
const DEFAULT_REVEAL_MS: u64 = 3000;

#[derive(Debug, Default, Deserialize)]
pub struct PinpadConfig {
    pub code: Option<CodeConfig>,
    pub ui: Option<UiConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CodeConfig {
    /// Number of digit slots. Clamped to 1..=12.
    pub length: Option<usize>,
    /// Auto-mask delay in milliseconds.
    pub reveal_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UiConfig {
    /// Use ASCII-only glyphs for the mask bullet and borders.
    #[serde(default)]
    pub ascii_only: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl PinpadConfig {
    /// Load the config file, if one exists. `Ok(None)` means no file
    /// was found, which is not an error.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read { path, source: err });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse { path, source: err })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Slot count, clamped to a sane range.
    #[must_use]
    pub fn code_length(&self) -> usize {
        self.code
            .as_ref()
            .and_then(|code| code.length)
            .unwrap_or(DEFAULT_CODE_LENGTH)
            .clamp(1, MAX_CODE_LENGTH)
    }

    /// Auto-mask delay.
    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        let ms = self
            .code
            .as_ref()
            .and_then(|code| code.reveal_ms)
            .unwrap_or(DEFAULT_REVEAL_MS);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn ascii_only(&self) -> bool {
        self.ui.as_ref().is_some_and(|ui| ui.ascii_only)
    }
}

fn config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var("PINPAD_CONFIG") {
        return Some(PathBuf::from(path));
    }
    let mut candidates = Vec::new();
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".pinpad").join("config.toml"));
    }
    candidates.push(PathBuf::from(".pinpad").join("config.toml"));
    first_existing(candidates)
}

/// First candidate present on disk; when none are, the first candidate
/// stands in as the reported path.
fn first_existing(candidates: Vec<PathBuf>) -> Option<PathBuf> {
    match candidates.iter().position(|path| path.exists()) {
        Some(found) => candidates.into_iter().nth(found),
        None => candidates.into_iter().next(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_empty() {
        let config = PinpadConfig::default();
        assert_eq!(config.code_length(), 6);
        assert_eq!(config.reveal_delay(), Duration::from_millis(3000));
        assert!(!config.ascii_only());
    }

    #[test]
    fn parses_full_config() {
        let config: PinpadConfig = toml::from_str(
            r#"
            [code]
            length = 4
            reveal_ms = 1500

            [ui]
            ascii_only = true
            "#,
        )
        .unwrap();

        assert_eq!(config.code_length(), 4);
        assert_eq!(config.reveal_delay(), Duration::from_millis(1500));
        assert!(config.ascii_only());
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config: PinpadConfig = toml::from_str("[code]\nlength = 8\n").unwrap();
        assert_eq!(config.code_length(), 8);
        assert_eq!(config.reveal_delay(), Duration::from_millis(3000));
    }

    #[test]
    fn length_is_clamped() {
        let config: PinpadConfig = toml::from_str("[code]\nlength = 0\n").unwrap();
        assert_eq!(config.code_length(), 1);

        let config: PinpadConfig = toml::from_str("[code]\nlength = 99\n").unwrap();
        assert_eq!(config.code_length(), 12);
    }

    #[test]
    fn existing_candidate_wins_over_order() {
        let dir = env::temp_dir().join(format!("pinpad-config-test-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let present = dir.join("config.toml");
        fs::write(&present, "[code]\nlength = 4\n").unwrap();
        let missing = dir.join("does-not-exist").join("config.toml");

        assert_eq!(
            first_existing(vec![missing.clone(), present.clone()]),
            Some(present)
        );
        // Nothing on disk: the first candidate is reported.
        assert_eq!(first_existing(vec![missing.clone()]), Some(missing));
        assert_eq!(first_existing(Vec::new()), None);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn garbage_toml_is_a_parse_error() {
        let parsed: Result<PinpadConfig, _> = toml::from_str("code = {{{{");
        assert!(parsed.is_err());
    }
}
