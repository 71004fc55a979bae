use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Tab shown on start, by id.
    #[serde(default)]
    pub initial_tab: Option<String>,

    /// JSON fixture file replacing the built-in sample data.
    #[serde(default)]
    pub fixtures: Option<String>,

    /// Columns below which the tab bar collapses.
    #[serde(default)]
    pub narrow_width: Option<u16>,

    /// Base of the evaluation detail/form hand-off URLs.
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default)]
    pub facilitator: Option<String>,

    #[serde(default)]
    pub log_file: Option<String>,
}

impl Config {
    pub fn fixtures_path(&self) -> Option<PathBuf> {
        self.fixtures.as_deref().and_then(expand_path)
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.as_deref().and_then(expand_path)
    }

    pub fn facilitator(&self) -> Option<&str> {
        self.facilitator
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Read the config at `path`. A missing file is the default config; any
/// other read failure or a malformed file is an error for the caller to log.
pub fn parse_file(path: &Path) -> Result<Config, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(err) => return Err(err.into()),
    };
    Ok(toml::from_str(&content)?)
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("VALUEMEET_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("valuemeet").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("valuemeet").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "valuemeet", "valuemeet")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("valuemeet"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("valuemeet"));
    }
    directories::ProjectDirs::from("io", "valuemeet", "valuemeet")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn default_log_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("valuemeet.log"))
}

/// Expand a leading `~/` against `$HOME`.
pub fn expand_path(path: &str) -> Option<PathBuf> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Some(rest) = trimmed.strip_prefix("~/") {
        let home = std::env::var_os("HOME").map(PathBuf::from)?;
        return Some(home.join(rest));
    }
    Some(PathBuf::from(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_file_reads_all_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
initial_tab = "meetings"
fixtures = "/tmp/fixtures.json"
narrow_width = 100
base_url = "https://meet.example.com/"
facilitator = "佐藤花子"
log_file = "/tmp/valuemeet.log"
"#
        )
        .unwrap();

        let config = parse_file(file.path()).unwrap();
        assert_eq!(config.initial_tab.as_deref(), Some("meetings"));
        assert_eq!(config.fixtures_path(), Some(PathBuf::from("/tmp/fixtures.json")));
        assert_eq!(config.narrow_width, Some(100));
        assert_eq!(config.base_url.as_deref(), Some("https://meet.example.com/"));
        assert_eq!(config.facilitator(), Some("佐藤花子"));
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/valuemeet.log")));
    }

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = parse_file(&dir.path().join("missing.toml")).unwrap();
        assert!(config.initial_tab.is_none());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "narrow_width = \"wide\"").unwrap();
        assert!(matches!(parse_file(file.path()), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_unreadable_config_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x66, 0x6f, 0xff, 0xfe, 0x0a]).unwrap();
        assert!(matches!(parse_file(file.path()), Err(ConfigError::Io(_))));

        // A directory exists but cannot be read as a file.
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(parse_file(dir.path()), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_blank_facilitator_is_ignored() {
        let config = Config {
            facilitator: Some("  ".to_string()),
            ..Config::default()
        };
        assert_eq!(config.facilitator(), None);
        assert_eq!(expand_path(""), None);
    }
}
