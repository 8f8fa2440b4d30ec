use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Whether the active theme is an explicit pick or follows the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Manual,
    #[default]
    System,
}

/// Client-side preferences. Everything else the app shows lives behind the
/// backend; this file only carries theming and the language pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default = "default_source_lang")]
    pub source_lang: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
    #[serde(default = "default_secondary_lang")]
    pub secondary_lang: String,
    #[serde(default = "default_include_secondary")]
    pub include_secondary: bool,
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_source_lang() -> String {
    "de".to_string()
}

fn default_target_lang() -> String {
    "en".to_string()
}

fn default_secondary_lang() -> String {
    "fa".to_string()
}

fn default_include_secondary() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: default_theme(),
            theme_mode: ThemeMode::default(),
            source_lang: default_source_lang(),
            target_lang: default_target_lang(),
            secondary_lang: default_secondary_lang(),
            include_secondary: default_include_secondary(),
        }
    }
}

pub fn data_dir() -> PathBuf {
    if cfg!(target_os = "windows") {
        let home = std::env::var("USERPROFILE").unwrap_or_else(|_| "C:\\Users\\User".to_string());
        PathBuf::from(home).join(".local\\share\\vocab-station")
    } else {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/home/user".to_string());
        PathBuf::from(home).join(".local/share/vocab-station")
    }
}

pub fn config_path() -> PathBuf {
    data_dir().join("config.json")
}

impl Config {
    /// Unreadable or malformed files fall back to defaults; preferences are
    /// not worth refusing to start over.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default()
    }

    pub fn save(&self) -> io::Result<()> {
        self.save_to(&config_path())
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.theme, "default");
        assert_eq!(config.theme_mode, ThemeMode::System);
        assert_eq!(config.source_lang, "de");
        assert_eq!(config.target_lang, "en");
        assert_eq!(config.secondary_lang, "fa");
        assert!(config.include_secondary);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.json"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            theme: "tokyo-night".to_string(),
            theme_mode: ThemeMode::Manual,
            source_lang: "ja".to_string(),
            target_lang: "en".to_string(),
            secondary_lang: "ko".to_string(),
            include_secondary: false,
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path), config);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"theme":"ayu","theme_mode":"manual"}"#).unwrap();

        let config = Config::load_from(&path);
        assert_eq!(config.theme, "ayu");
        assert_eq!(config.theme_mode, ThemeMode::Manual);
        assert_eq!(config.source_lang, "de");
        assert!(config.include_secondary);
    }
}
