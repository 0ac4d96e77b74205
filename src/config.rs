use std::path::Path;

use crate::error::ConfigError;
use crate::game::{Board, PlayerNames, DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_CELLS};

/// Game configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    pub player_one: String,
    pub player_two: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        let names = PlayerNames::default();
        GameConfig {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            player_one: names.one,
            player_two: names.two,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::Validation("rows must be >= 1".into()));
        }
        if self.columns == 0 {
            return Err(ConfigError::Validation("columns must be >= 1".into()));
        }
        if Board::cell_count(self.rows, self.columns).is_none() {
            return Err(ConfigError::Validation(format!(
                "rows * columns must be <= {MAX_CELLS}"
            )));
        }
        if self.player_one.trim().is_empty() {
            return Err(ConfigError::Validation(
                "player_one must not be empty".into(),
            ));
        }
        if self.player_two.trim().is_empty() {
            return Err(ConfigError::Validation(
                "player_two must not be empty".into(),
            ));
        }
        Ok(())
    }

    pub fn player_names(&self) -> PlayerNames {
        PlayerNames::new(self.player_one.clone(), self.player_two.clone())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.rows, 6);
        assert_eq!(config.columns, 7);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
player_one = "Ada"
"#;
        let config: GameConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.player_one, "Ada");
        assert_eq!(config.player_two, "Player Two");
        assert_eq!(config.rows, 6);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_validation_rejects_zero_rows() {
        let mut config = GameConfig::default();
        config.rows = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_columns() {
        let mut config = GameConfig::default();
        config.columns = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_board() {
        let mut config = GameConfig::default();
        config.rows = usize::MAX / 2;
        config.columns = 4;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

        config.rows = MAX_CELLS;
        config.columns = 2;
        assert!(config.validate().is_err());

        config.columns = 1;
        config.validate().expect("board at the cell limit is valid");
    }

    #[test]
    fn test_validation_rejects_blank_name() {
        let mut config = GameConfig::default();
        config.player_two = "   ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = GameConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
rows = 8
player_two = "Grace"
"#
        )
        .unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.rows, 8);
        assert_eq!(config.player_two, "Grace");
        // Others are defaults
        assert_eq!(config.columns, 7);
        assert_eq!(config.player_names().name(crate::game::Player::One), "Player One");
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.toml");
        std::fs::write(&path, "columns = 0\n").unwrap();
        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.toml");
        std::fs::write(&path, "rows = \"six\"\n").unwrap();
        assert!(matches!(GameConfig::load(&path), Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = GameConfig::default_toml();
        let config: GameConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, GameConfig::default());
    }
}
