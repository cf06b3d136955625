//! Front end configuration (TOML)

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading '{path:?}': {error}")]
    Io {
        error: std::io::Error,
        path: PathBuf,
    },
    #[error("Parse error in '{path:?}': {error}")]
    Parse {
        error: toml::de::Error,
        path: PathBuf,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// JSON file with weapons and armors
    pub equipment_path: PathBuf,
    /// Fixed seed for reproducible fights; entropy when absent
    pub seed: Option<u64>,
    /// Default tracing filter, overridden by `RUST_LOG`
    pub log_filter: String,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            equipment_path: PathBuf::from("data/equipment.json"),
            seed: None,
            log_filter: "arena_core=info,equipment_core=info".to_string(),
        }
    }
}

impl ArenaConfig {
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            error: e,
            path: path.to_path_buf(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            error: e,
            path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("arena.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(dir.path(), "seed = 42\n");

        let config = ArenaConfig::load_from_path(&path).unwrap();

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.equipment_path, PathBuf::from("data/equipment.json"));
        assert_eq!(config.log_filter, ArenaConfig::default().log_filter);
    }

    #[test]
    fn test_full_config() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            dir.path(),
            r#"
equipment_path = "/srv/arena/equipment.json"
log_filter = "debug"
"#,
        );

        let config = ArenaConfig::load_from_path(&path).unwrap();

        assert_eq!(config.equipment_path, PathBuf::from("/srv/arena/equipment.json"));
        assert_eq!(config.log_filter, "debug");
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_bad_toml() {
        let dir = TempDir::new().unwrap();
        let path = write_config(dir.path(), "seed = \"many\"\n");
        assert!(matches!(
            ArenaConfig::load_from_path(&path),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            ArenaConfig::load_from_path(&dir.path().join("nope.toml")),
            Err(ConfigError::Io { .. })
        ));
    }
}
