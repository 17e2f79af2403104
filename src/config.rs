use crate::error::{Error, Result};
use crate::favourites::DEFAULT_SLOT_KEY;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CATALOG: &str = "properties.json";

/// Settings for the search host, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Catalog location: a file path or an http(s) URL
    #[serde(default = "default_catalog")]
    pub catalog: String,

    /// Where the favourites slot lives; platform data dir when unset
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Key the favourites are stored under
    #[serde(default = "default_slot_key")]
    pub slot_key: String,
}

fn default_catalog() -> String {
    DEFAULT_CATALOG.to_string()
}

fn default_slot_key() -> String {
    DEFAULT_SLOT_KEY.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            data_dir: None,
            slot_key: default_slot_key(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "property-search")
}

impl Settings {
    /// Platform config directory, if one can be determined.
    pub fn default_config_dir() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load settings from `config_dir`, or defaults if no config file exists
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(Error::Io)?;
        let settings: Settings = serde_json::from_str(&content).map_err(|e| {
            Error::Config(format!("{}: {}", config_path.display(), e))
        })?;
        Ok(settings)
    }

    /// Directory holding the favourites slot.
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| Error::Config("Could not determine a data directory".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load(dir.path()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.slot_key, "propertyFavourites");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{ "catalog": "https://example.com/properties.json" }"#,
        )
        .unwrap();

        let settings = Settings::load(dir.path()).unwrap();
        assert_eq!(settings.catalog, "https://example.com/properties.json");
        assert_eq!(settings.slot_key, DEFAULT_SLOT_KEY);
        assert_eq!(settings.data_dir, None);
    }

    #[test]
    fn invalid_file_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "catalog = 1").unwrap();
        assert!(matches!(Settings::load(dir.path()), Err(Error::Config(_))));
    }

    #[test]
    fn explicit_data_dir_wins() {
        let settings = Settings {
            data_dir: Some(PathBuf::from("/tmp/favs")),
            ..Settings::default()
        };
        assert_eq!(settings.resolve_data_dir().unwrap(), PathBuf::from("/tmp/favs"));
    }
}
