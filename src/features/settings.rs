//! Application settings
//!
//! Loads user preferences from the config directory, falling back to defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_ENDPOINT;

/// Substitute image used once when a thumbnail fails to load
pub const DEFAULT_PLACEHOLDER_THUMBNAIL: &str =
    "https://via.placeholder.com/100x100?text=No+Image+Available";

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Analysis service settings
    #[serde(default)]
    pub analyzer: AnalyzerSettings,
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Network settings
    #[serde(default)]
    pub network: NetworkSettings,
}

/// Analysis service settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerSettings {
    /// Scrape-playlist endpoint URL
    pub endpoint: String,
    /// Request timeout in seconds, none by default
    pub request_timeout_secs: Option<u64>,
    /// Placeholder image for failed thumbnails
    pub placeholder_thumbnail_url: String,
}

impl AnalyzerSettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

/// Display and interface settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
    /// Application language
    pub language: String,
    /// Show a transient toast when an analysis fails
    pub show_error_toasts: bool,
}

/// Proxy type for network settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProxyType {
    /// No proxy
    #[default]
    None,
    /// HTTP proxy
    Http,
    /// HTTPS proxy
    Https,
    /// SOCKS5 proxy
    Socks5,
    /// Use system proxy settings
    System,
}

/// Network settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSettings {
    /// Proxy type
    pub proxy_type: ProxyType,
    /// Proxy host address
    pub proxy_host: String,
    /// Proxy port
    pub proxy_port: u16,
    /// Proxy username (optional)
    pub proxy_username: Option<String>,
    /// Proxy password (optional)
    pub proxy_password: Option<String>,
}

impl NetworkSettings {
    /// Build proxy URL string from settings
    /// Returns None if proxy is disabled or incomplete
    pub fn proxy_url(&self) -> Option<String> {
        let scheme = match self.proxy_type {
            ProxyType::None => return None,
            ProxyType::System => {
                return std::env::var("HTTP_PROXY")
                    .or_else(|_| std::env::var("http_proxy"))
                    .or_else(|_| std::env::var("HTTPS_PROXY"))
                    .or_else(|_| std::env::var("https_proxy"))
                    .ok();
            }
            ProxyType::Http => "http",
            ProxyType::Https => "https",
            ProxyType::Socks5 => "socks5",
        };

        if self.proxy_host.is_empty() || self.proxy_port == 0 {
            return None;
        }

        let auth = match (&self.proxy_username, &self.proxy_password) {
            (Some(user), Some(pass)) if !user.is_empty() => format!("{}:{}@", user, pass),
            (Some(user), None) if !user.is_empty() => format!("{}@", user),
            _ => String::new(),
        };

        Some(format!(
            "{}://{}{}:{}",
            scheme, auth, self.proxy_host, self.proxy_port
        ))
    }
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: None,
            placeholder_thumbnail_url: DEFAULT_PLACEHOLDER_THUMBNAIL.to_string(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: true,
            language: "en".to_string(),
            show_error_toasts: true,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "tubelens", "Tubelens")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from the config directory, or return defaults.
    ///
    /// On first run the defaults are written out as an editable template.
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::warn!("Could not determine config directory, using default settings");
            return Self::default();
        };

        if !path.exists() {
            let settings = Self::default();
            match settings.save_to_file(&path) {
                Ok(()) => tracing::info!("Wrote default settings to {:?}", path),
                Err(e) => tracing::warn!("Failed to write default settings: {}", e),
            }
            return settings;
        }

        match Self::load_from_file(&path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                tracing::warn!("Failed to load settings from {:?}: {}", path, e);
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

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
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
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
}
