//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::state::Section;

/// Environment variable that overrides the config file location
const CONFIG_PATH_ENV: &str = "FOLIO_TUI_CONFIG";
const DEFAULT_SCHEDULING_URL: &str = "https://calendly.com/";
const DEFAULT_RESUME_URL: &str = "/Resume.pdf";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    /// Play the slide-in animation when a section is shown
    pub animations: Option<bool>,
    /// Seconds a toast stays on screen
    pub toast_seconds: Option<u64>,
    /// Section to open on start (anchor name, e.g. "contact")
    pub start_section: Option<String>,
    /// Link copied by the "Schedule Call" button
    pub scheduling_url: Option<String>,
    /// Link copied from the about section's resume action
    pub resume_url: Option<String>,
}

impl SiteConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("io", "kivevox", "folio-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: SiteConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config in {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to file
    #[allow(dead_code)] // the app saves through the path it resolved at startup
    pub fn save(&self) -> Result<()> {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    pub fn animations_enabled(&self) -> bool {
        self.animations.unwrap_or(true)
    }

    pub fn toast_duration(&self) -> Duration {
        self.toast_seconds
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(5))
    }

    /// Starting section; unknown names fall back to the top of the page
    pub fn start_section(&self) -> Section {
        match self.start_section.as_deref() {
            Some(anchor) => Section::from_anchor(anchor).unwrap_or_else(|| {
                tracing::warn!("Unknown start_section '{anchor}', using home");
                Section::Home
            }),
            None => Section::Home,
        }
    }

    pub fn scheduling_url(&self) -> &str {
        self.scheduling_url
            .as_deref()
            .unwrap_or(DEFAULT_SCHEDULING_URL)
    }

    pub fn resume_url(&self) -> &str {
        self.resume_url.as_deref().unwrap_or(DEFAULT_RESUME_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert!(config.animations.is_none());
        assert!(config.toast_seconds.is_none());
        assert!(config.start_section.is_none());
        assert!(config.scheduling_url.is_none());
        assert!(config.resume_url.is_none());
    }

    #[test]
    fn test_defaults_resolve() {
        let config = SiteConfig::default();
        assert!(config.animations_enabled());
        assert_eq!(config.toast_duration(), Duration::from_secs(5));
        assert_eq!(config.start_section(), Section::Home);
        assert_eq!(config.scheduling_url(), "https://calendly.com/");
        assert_eq!(config.resume_url(), "/Resume.pdf");
    }

    #[test]
    fn test_serialization() {
        let config = SiteConfig {
            animations: Some(false),
            toast_seconds: Some(3),
            start_section: Some("contact".to_string()),
            scheduling_url: Some("https://cal.example/peter".to_string()),
            resume_url: None,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: SiteConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.animations, Some(false));
        assert_eq!(parsed.toast_seconds, Some(3));
        assert_eq!(parsed.start_section(), Section::Contact);
        assert_eq!(parsed.scheduling_url(), "https://cal.example/peter");
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: SiteConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.animations.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"toast_seconds": 9, "unknown_field": "value"}"#;
        let parsed: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.toast_duration(), Duration::from_secs(9));
    }

    #[test]
    fn test_unknown_start_section_falls_back_to_home() {
        let config = SiteConfig {
            start_section: Some("pricing".to_string()),
            ..Default::default()
        };
        assert_eq!(config.start_section(), Section::Home);
    }

    #[test]
    fn test_start_section_accepts_hash_prefix() {
        let config = SiteConfig {
            start_section: Some("#portfolio".to_string()),
            ..Default::default()
        };
        assert_eq!(config.start_section(), Section::Portfolio);
    }

    #[test]
    fn test_load_returns_default_when_no_file() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert!(config.animations.is_none());
        assert!(config.toast_seconds.is_none());
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        let err = SiteConfig::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid config"));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("config.json");
        let config = SiteConfig {
            animations: Some(false),
            resume_url: Some("https://kivevox.example/cv.pdf".to_string()),
            ..Default::default()
        };

        config.save_to(&path).unwrap();
        assert!(path.exists());

        let loaded = SiteConfig::load_from(&path).unwrap();
        assert_eq!(loaded.animations, Some(false));
        assert_eq!(loaded.resume_url(), "https://kivevox.example/cv.pdf");
    }

    #[test]
    fn test_save_fails_when_parent_is_a_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let result = SiteConfig::default().save_to(&blocker.join("config.json"));
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_env_var_overrides_config_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom").join("folio.json");
        std::env::set_var(CONFIG_PATH_ENV, &path);

        assert_eq!(SiteConfig::config_path(), Some(path.clone()));

        let config = SiteConfig {
            toast_seconds: Some(2),
            ..Default::default()
        };
        config.save().unwrap();
        let loaded = SiteConfig::load().unwrap();

        std::env::remove_var(CONFIG_PATH_ENV);

        assert!(path.exists());
        assert_eq!(loaded.toast_duration(), Duration::from_secs(2));
    }
}
