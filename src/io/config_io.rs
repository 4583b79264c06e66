use std::fs;
use std::io;
use std::path::Path;

use crate::model::config::AppConfig;

/// Error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config.toml: {0}")]
    Io(#[from] io::Error),
    #[error("could not parse config.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load `config.toml` from the data directory. A missing file yields the
/// defaults; a malformed one is an error the caller logs and ignores.
pub fn load_config(data_dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = data_dir.join("config.toml");
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = fs::read_to_string(&path)?;
    Ok(toml::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path()).unwrap();
        assert!(config.ui.colors.is_empty());
        assert!(config.ui.light_colors.is_empty());
    }

    #[test]
    fn color_overrides_parse() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            r##"
[ui.colors]
background = "#10111A"

[ui.light_colors]
background = "#FFFFFF"
"##,
        )
        .unwrap();

        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.ui.colors.get("background").unwrap(), "#10111A");
        assert_eq!(config.ui.light_colors.get("background").unwrap(), "#FFFFFF");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "not toml [[[").unwrap();
        assert!(matches!(
            load_config(dir.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
