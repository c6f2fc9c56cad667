use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "easyrapport";
const STATE_FILE: &str = "state.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Author written into a freshly reset report.
    #[serde(default)]
    pub default_author: Option<String>,
    /// Location of the persisted report state.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/easyrapport/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("easyrapport/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("easyrapport\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Missing or malformed files yield the default configuration.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = std::fs::read_to_string(path) {
                if let Ok(config) = toml::from_str(&content) {
                    return config;
                }
            }
        }
        Self::default()
    }

    pub fn effective_default_author(&self) -> &str {
        self.default_author.as_deref().unwrap_or("")
    }

    /// Resolves where report state lives: explicit path, then config, then
    /// the platform data directory.
    pub fn state_file_path(&self, explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        if let Some(path) = &self.data_file {
            return path.clone();
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR).join(STATE_FILE))
            .unwrap_or_else(|| PathBuf::from(STATE_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_from_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.toml"));
        assert!(config.default_author.is_none());
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_load_from_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "default_author = \"Camille\"\ndata_file = \"/tmp/rapport.json\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path);
        assert_eq!(config.effective_default_author(), "Camille");
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/rapport.json")));
    }

    #[test]
    fn test_load_from_invalid_toml_is_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_author = [unterminated").unwrap();

        let config = AppConfig::load_from(&path);
        assert_eq!(config.effective_default_author(), "");
    }

    #[test]
    fn test_state_file_precedence() {
        let config = AppConfig {
            default_author: None,
            data_file: Some(PathBuf::from("from-config.json")),
        };
        assert_eq!(
            config.state_file_path(Some(Path::new("explicit.json"))),
            PathBuf::from("explicit.json")
        );
        assert_eq!(config.state_file_path(None), PathBuf::from("from-config.json"));

        let fallback = AppConfig::default().state_file_path(None);
        assert!(fallback.ends_with(STATE_FILE));
    }
}
