//! Application settings persistence
//!
//! Handles saving and loading user preferences.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variable that overrides `server.base_url`
pub const SERVER_URL_ENV: &str = "ZENSCAPE_SERVER_URL";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// What to do when the session endpoint cannot be reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Substitute the local fallback session and carry on
    #[default]
    SilentFallback,
    /// Show a blocking alert and stay on the selection page
    AlertAndAbort,
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailurePolicy::SilentFallback => write!(f, "silent fallback"),
            FailurePolicy::AlertAndAbort => write!(f, "alert and abort"),
        }
    }
}

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Session service settings
    #[serde(default)]
    pub server: ServerSettings,
    /// Audio output settings
    #[serde(default)]
    pub audio: AudioSettings,
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Session service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Base URL of the session service
    pub base_url: String,
    /// Request timeout in seconds (0 = no explicit timeout)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Behavior when the service is unreachable
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

fn default_timeout_secs() -> u64 {
    30
}

impl ServerSettings {
    /// Base URL after applying the environment override
    pub fn effective_base_url(&self) -> String {
        std::env::var(SERVER_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| self.base_url.clone())
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

/// Audio output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioSettings {
    /// Selected audio output device (None = system default)
    pub output_device: Option<String>,
    /// Maximum size of the ambient audio cache in MB
    #[serde(default = "default_cache_limit_mb")]
    pub cache_limit_mb: u64,
}

fn default_cache_limit_mb() -> u64 {
    256
}

/// Display and interface settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
    /// Application language
    pub language: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: default_timeout_secs(),
            failure_policy: FailurePolicy::SilentFallback,
        }
    }
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            output_device: None,
            cache_limit_mb: default_cache_limit_mb(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            language: "en".to_string(),
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "zenscape", "Zenscape")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };
        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(_)) => Self::default(),
            Err(e) => {
                tracing::warn!("Ignoring unreadable settings at {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use tempfile::TempDir;

    /// Tests that touch `SERVER_URL_ENV` hold this lock
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.base_url, "http://127.0.0.1:8000");
        assert_eq!(settings.server.failure_policy, FailurePolicy::SilentFallback);
        assert_eq!(settings.server.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(settings.audio.cache_limit_mb, 256);
        assert!(settings.display.dark_mode);
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let mut settings = Settings::default();
        settings.server.failure_policy = FailurePolicy::AlertAndAbort;
        settings.audio.output_device = Some("USB DAC".to_string());
        settings.display.language = "zh".to_string();
        settings.save_to_file(&path).unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded.server.failure_policy, FailurePolicy::AlertAndAbort);
        assert_eq!(loaded.audio.output_device.as_deref(), Some("USB DAC"));
        assert_eq!(loaded.display.language, "zh");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{"server": {"base_url": "https://zen.example.com", "failure_policy": "alert_and_abort"}}"#,
        )
        .unwrap();

        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded.server.base_url, "https://zen.example.com");
        assert_eq!(loaded.server.timeout_secs, 30);
        assert_eq!(loaded.server.failure_policy, FailurePolicy::AlertAndAbort);
        assert_eq!(loaded.audio.cache_limit_mb, 256);
    }

    #[test]
    fn test_errors_are_classified() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            Settings::load_from_file(&missing),
            Err(SettingsError::Io(_))
        ));

        let garbage = dir.path().join("garbage.json");
        std::fs::write(&garbage, "{ not json").unwrap();
        assert!(matches!(
            Settings::load_from_file(&garbage),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_env_override_wins_unless_blank() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let server = ServerSettings {
            base_url: "https://from-file.example.com".to_string(),
            ..Default::default()
        };

        // SAFETY: env access in this module is serialized by ENV_LOCK
        unsafe { std::env::set_var(SERVER_URL_ENV, "https://from-env.example.com") };
        assert_eq!(server.effective_base_url(), "https://from-env.example.com");

        unsafe { std::env::set_var(SERVER_URL_ENV, "   ") };
        assert_eq!(server.effective_base_url(), "https://from-file.example.com");

        unsafe { std::env::remove_var(SERVER_URL_ENV) };
        assert_eq!(server.effective_base_url(), "https://from-file.example.com");
    }

    #[test]
    fn test_zero_timeout_means_client_default() {
        let server = ServerSettings {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(server.timeout(), None);
    }
}
