use std::path::Path;

use log::warn;

use crate::error::ConfigError;
use crate::game::Grid;

/// Board dimensions for a new match.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig { rows: 6, cols: 7 }
    }
}

/// Automated opponent settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Fixed search depth in `1..=6`. When unset the depth follows the board
    /// width, which never goes past 6 either.
    pub depth: Option<usize>,
    /// Complete a vertical stack of three before searching.
    pub vertical_shortcut: bool,
}

/// Top-level engine configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub board: BoardConfig,
    pub search: SearchConfig,
}

const MAX_FIXED_DEPTH: usize = 6;

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !Grid::is_supported_size(self.board.rows) {
            return Err(ConfigError::Validation(
                "board.rows must be in [4, 8]".into(),
            ));
        }
        if !Grid::is_supported_size(self.board.cols) {
            return Err(ConfigError::Validation(
                "board.cols must be in [4, 8]".into(),
            ));
        }
        if let Some(depth) = self.search.depth {
            if depth == 0 || depth > MAX_FIXED_DEPTH {
                return Err(ConfigError::Validation(format!(
                    "search.depth must be in [1, {MAX_FIXED_DEPTH}]"
                )));
            }
        }
        Ok(())
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&EngineConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = EngineConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.board, BoardConfig { rows: 6, cols: 7 });
        assert_eq!(config.search.depth, None);
        assert!(!config.search.vertical_shortcut);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[board]
cols = 8
"#;
        let config: EngineConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.board.cols, 8);
        assert_eq!(config.board.rows, 6);
        assert_eq!(config.search, SearchConfig::default());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: EngineConfig = toml::from_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_validation_rejects_small_board() {
        let mut config = EngineConfig::default();
        config.board.rows = 3;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_wide_board() {
        let mut config = EngineConfig::default();
        config.board.cols = 9;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_depth() {
        let mut config = EngineConfig::default();
        config.search.depth = Some(0);
        assert!(config.validate().is_err());
        config.search.depth = Some(4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_caps_fixed_depth_at_schedule_maximum() {
        let mut config = EngineConfig::default();
        config.search.depth = Some(6);
        assert!(config.validate().is_ok());
        config.search.depth = Some(7);
        assert!(config.validate().is_err());
        config.search.depth = Some(8);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = EngineConfig::load_or_default(Path::new("nonexistent_engine.toml")).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[board]
rows = 4
cols = 5

[search]
depth = 2
vertical_shortcut = true
"#
        )
        .unwrap();

        let config = EngineConfig::load(&path).unwrap();
        assert_eq!(config.board, BoardConfig { rows: 4, cols: 5 });
        assert_eq!(config.search.depth, Some(2));
        assert!(config.search.vertical_shortcut);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.toml");
        std::fs::write(&path, "[board]\nrows = 12\n").unwrap();
        assert!(matches!(
            EngineConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = EngineConfig::default_toml();
        let config: EngineConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, EngineConfig::default());
    }
}
