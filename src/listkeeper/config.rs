use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ListKeeperError, Result};
use crate::model::NoteColor;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Configuration for listkeeper, stored in the data directory as
/// `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListKeeperConfig {
    /// Palette color used when `add` is not given one
    #[serde(default)]
    pub default_color: NoteColor,

    /// chrono format string for printing due dates
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for ListKeeperConfig {
    fn default() -> Self {
        Self {
            default_color: NoteColor::default(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl ListKeeperConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ListKeeperError::Io)?;
        let config: ListKeeperConfig =
            serde_json::from_str(&content).map_err(ListKeeperError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ListKeeperError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ListKeeperError::Serialization)?;
        fs::write(config_path, content).map_err(ListKeeperError::Io)?;
        Ok(())
    }

    pub fn set_default_color(&mut self, color: NoteColor) {
        self.default_color = color;
    }

    pub fn set_date_format(&mut self, format: &str) {
        self.date_format = format.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ListKeeperConfig::default();
        assert_eq!(config.default_color, NoteColor::Green);
        assert_eq!(config.date_format, "%Y-%m-%d %H:%M");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = tempfile::tempdir().unwrap();
        let config = ListKeeperConfig::load(temp.path().join("missing")).unwrap();
        assert_eq!(config, ListKeeperConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = tempfile::tempdir().unwrap();

        let mut config = ListKeeperConfig::default();
        config.set_default_color(NoteColor::Blue);
        config.set_date_format("%d/%m/%Y");
        config.save(temp.path()).unwrap();

        let loaded = ListKeeperConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.default_color, NoteColor::Blue);
        assert_eq!(loaded.date_format, "%d/%m/%Y");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = ListKeeperConfig {
            default_color: NoteColor::Purple,
            date_format: "%b %e".to_string(),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: ListKeeperConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let json = r##"{"default_color":"#F8D7DA"}"##;
        let config: ListKeeperConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.default_color, NoteColor::Red);
        assert_eq!(config.date_format, "%Y-%m-%d %H:%M");
    }
}
