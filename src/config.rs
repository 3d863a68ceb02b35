use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::PortfolioError;
use crate::registry::CategoryRegistry;

/// Screen the TUI opens on
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub enum StartScreen {
    #[default]
    Home,
    Edits,
    Reviews,
}

impl StartScreen {
    pub fn display_name(&self) -> &'static str {
        match self {
            StartScreen::Home => "Home",
            StartScreen::Edits => "Edits",
            StartScreen::Reviews => "Reviews and More",
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// JSON content file replacing the built-in categories
    #[serde(default)]
    pub content_path: Option<PathBuf>,
    /// When false, "open" copies the link to the clipboard instead
    #[serde(default = "default_true")]
    pub open_links_in_browser: bool,
    #[serde(default)]
    pub last_category: Option<String>,
    #[serde(default)]
    pub start_screen: StartScreen,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            content_path: None,
            open_links_in_browser: true,
            last_category: None,
            start_screen: StartScreen::default(),
        }
    }
}

impl AppConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "reelfolio", "reel-portfolio")
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|p| p.config_dir().join("config.json"))
    }

    pub fn load() -> Result<Self, anyhow::Error> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(AppConfig::default()),
        }
    }

    /// Read a config file. A file that is not a valid config is a
    /// `PortfolioError::Config` naming the path.
    pub fn load_from(path: &Path) -> Result<Self, anyhow::Error> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)
            .map_err(|e| PortfolioError::Config(format!("{}: {}", path.display(), e)))?;
        log::debug!("config loaded from {}", path.display());
        Ok(config)
    }

    pub fn save(&self) -> Result<(), anyhow::Error> {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), anyhow::Error> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Registry for this configuration: the content file if one is set,
    /// otherwise the built-in table.
    pub fn registry(&self) -> Result<CategoryRegistry, anyhow::Error> {
        self.registry_with(None)
    }

    /// Like [`registry`](Self::registry), with a one-off content file that
    /// takes precedence over `content_path` without being stored in it.
    pub fn registry_with(&self, content: Option<&Path>) -> Result<CategoryRegistry, anyhow::Error> {
        match content.or(self.content_path.as_deref()) {
            Some(path) => Ok(CategoryRegistry::load_file(path)?),
            None => Ok(CategoryRegistry::builtin().clone()),
        }
    }

    /// Remember the gallery last opened. Persisted by the next `save()`.
    pub fn set_last_category(&mut self, id: &str) -> bool {
        if self.last_category.as_deref() == Some(id) {
            return false;
        }
        self.last_category = Some(id.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.open_links_in_browser);
    }

    #[test]
    fn test_roundtrip_json() {
        let config = AppConfig {
            content_path: Some(PathBuf::from("/tmp/content.json")),
            open_links_in_browser: false,
            last_category: Some("bts".to_string()),
            start_screen: StartScreen::Edits,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_registry_defaults_to_builtin() {
        let registry = AppConfig::default().registry().unwrap();
        assert_eq!(registry.len(), CategoryRegistry::builtin().len());
    }

    #[test]
    fn test_unparseable_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ \"open_links_in_browser\": \"yes\" }").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        match err.downcast_ref::<PortfolioError>() {
            Some(PortfolioError::Config(msg)) => assert!(msg.contains("config.json")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_save_and_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = AppConfig {
            last_category: Some("fashion".to_string()),
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(AppConfig::load_from(&path).unwrap(), config);
    }
}
