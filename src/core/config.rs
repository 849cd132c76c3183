//! Cipher configuration from YAML

use crate::core::iterator::{CipherOptions, ForceCase, NonLetterMode};
use crate::core::key::Key;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable consulted for the key when none is given on the command line
pub const KEY_ENV_VAR: &str = "VIGENERE_KEY";

/// Top-level configuration loaded from YAML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CipherConfig {
    /// Inline key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// File holding the key (alternative to `key`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_file: Option<PathBuf>,

    /// Case of the output letters
    #[serde(default)]
    pub force_case: ForceCase,

    /// Whether non-letters are kept or dropped
    #[serde(default)]
    pub non_letters: NonLetterMode,
}

/// Where a resolved key came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeySource {
    Argument,
    ArgumentFile(PathBuf),
    Environment,
    Config,
    ConfigFile(PathBuf),
}

impl std::fmt::Display for KeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeySource::Argument => write!(f, "command line"),
            KeySource::ArgumentFile(path) => write!(f, "key file {}", path.display()),
            KeySource::Environment => write!(f, "${}", KEY_ENV_VAR),
            KeySource::Config => write!(f, "config"),
            KeySource::ConfigFile(path) => write!(f, "config key file {}", path.display()),
        }
    }
}

impl CipherConfig {
    /// Load configuration from a YAML file
    ///
    /// A relative `key_file` is taken relative to the config file's directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::parse(&content)?;

        if let (Some(key_file), Some(dir)) = (&config.key_file, path.parent()) {
            if key_file.is_relative() {
                config.key_file = Some(dir.join(key_file));
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config = Self::parse(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn parse(yaml: &str) -> Result<Self> {
        // An empty document is a valid, empty config
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Default config location: `<config dir>/vigenere/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vigenere").join("config.yaml"))
    }

    /// Load the explicit config, the default config if present, or an empty one
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!("Loading config from {}", path.display());
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                debug!("Loading default config from {}", path.display());
                Self::from_file(&path)
            }
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.key.is_some() && self.key_file.is_some() {
            anyhow::bail!("Config sets both 'key' and 'key_file'; use only one");
        }

        if let Some(key) = &self.key {
            Key::new(key).context("Config 'key' is invalid")?;
        }

        if let Some(path) = &self.key_file {
            if !path.exists() {
                anyhow::bail!("Config 'key_file' doesn't exist: {}", path.display());
            }
        }

        Ok(())
    }

    /// Output options described by this config
    pub fn options(&self) -> CipherOptions {
        CipherOptions::new()
            .with_force_case(self.force_case)
            .with_non_letters(self.non_letters)
    }

    /// Resolve the key from the config alone
    pub fn key(&self) -> Result<Option<(Key, KeySource)>> {
        if let Some(key) = &self.key {
            let key = Key::new(key).context("Config 'key' is invalid")?;
            return Ok(Some((key, KeySource::Config)));
        }
        if let Some(path) = &self.key_file {
            let key = read_key_file(path)?;
            return Ok(Some((key, KeySource::ConfigFile(path.clone()))));
        }
        Ok(None)
    }
}

/// Read a key from a file
///
/// Whitespace and other non-letters are ignored, so a key file may hold a
/// phrase such as `why rust`.
pub fn read_key_file(path: &Path) -> Result<Key> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read key file {}", path.display()))?;
    Key::from_phrase(content.trim())
        .with_context(|| format!("Key file {} holds no usable key", path.display()))
}

/// Resolve the key following the lookup order: argument, argument file, environment, config
///
/// `env_key` is passed in rather than read here so callers (and clap's `env`
/// support) decide how the environment is consulted.
pub fn resolve_key(
    arg_key: Option<&str>,
    arg_key_file: Option<&Path>,
    env_key: Option<&str>,
    config: &CipherConfig,
) -> Result<(Key, KeySource)> {
    if let Some(key) = arg_key {
        let key = Key::new(key).context("Invalid --key")?;
        return Ok((key, KeySource::Argument));
    }
    if let Some(path) = arg_key_file {
        let key = read_key_file(path)?;
        return Ok((key, KeySource::ArgumentFile(path.to_path_buf())));
    }
    if let Some(key) = env_key {
        let key = Key::new(key).with_context(|| format!("Invalid ${}", KEY_ENV_VAR))?;
        return Ok((key, KeySource::Environment));
    }
    match config.key()? {
        Some(resolved) => Ok(resolved),
        None => anyhow::bail!(
            "no key provided (use --key, --key-file, ${} or a config file)",
            KEY_ENV_VAR
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
key: "WHYRUST"
force_case: upper
non_letters: skip
"#;

        let config = CipherConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.key.as_deref(), Some("WHYRUST"));
        assert_eq!(config.force_case, ForceCase::ToUpper);
        assert_eq!(config.non_letters, NonLetterMode::Skip);
        assert_eq!(
            config.options(),
            CipherOptions::new()
                .with_force_case(ForceCase::ToUpper)
                .with_non_letters(NonLetterMode::Skip)
        );
    }

    #[test]
    fn test_defaults() {
        let config = CipherConfig::from_yaml("key: lemon").unwrap();
        assert_eq!(config.force_case, ForceCase::Keep);
        assert_eq!(config.non_letters, NonLetterMode::Keep);

        let empty = CipherConfig::from_yaml("").unwrap();
        assert!(empty.key.is_none());
    }

    #[test]
    fn test_invalid_key_fails() {
        let err = CipherConfig::from_yaml("key: \"WHY RUST\"").unwrap_err();
        assert!(format!("{:#}", err).contains("position 3"));
    }

    #[test]
    fn test_unknown_force_case_fails() {
        assert!(CipherConfig::from_yaml("force_case: sideways").is_err());
    }

    #[test]
    fn test_key_and_key_file_conflict() {
        let yaml = r#"
key: "LEMON"
key_file: "/tmp/whatever.key"
"#;
        let err = CipherConfig::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("both"));
    }

    #[test]
    fn test_missing_key_file_fails() {
        let yaml = "key_file: \"/tmp/nonexistent_vigenere_key_12345\"";
        let err = CipherConfig::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("nonexistent_vigenere_key_12345"));
    }

    #[test]
    fn test_read_key_file_accepts_phrase() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("secret.key");
        std::fs::write(&path, "why rust\n").unwrap();

        let key = read_key_file(&path).unwrap();
        assert_eq!(key.as_str(), "WHYRUST");
    }

    #[test]
    fn test_read_empty_key_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.key");
        std::fs::write(&path, "  \n").unwrap();

        assert!(read_key_file(&path).is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "key: lemon\nnon_letters: skip\n").unwrap();

        let config = CipherConfig::load(Some(&path)).unwrap();
        assert_eq!(config.non_letters, NonLetterMode::Skip);

        let missing = dir.path().join("missing.yaml");
        assert!(CipherConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_relative_key_file_is_next_to_config() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("secret.key"), "lemon\n").unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "key_file: secret.key\n").unwrap();

        // Resolution must not depend on the working directory
        let config = CipherConfig::from_file(&path).unwrap();
        assert_eq!(config.key_file, Some(dir.path().join("secret.key")));

        let (key, source) = config.key().unwrap().unwrap();
        assert_eq!(key.as_str(), "LEMON");
        assert_eq!(source, KeySource::ConfigFile(dir.path().join("secret.key")));
    }

    #[test]
    fn test_resolve_key_order() {
        let dir = TempDir::new().unwrap();
        let key_file = dir.path().join("k.key");
        std::fs::write(&key_file, "FILE").unwrap();

        let config = CipherConfig {
            key: Some("CONFIG".to_string()),
            ..Default::default()
        };

        let (key, source) =
            resolve_key(Some("ARG"), Some(&key_file), Some("ENV"), &config).unwrap();
        assert_eq!((key.as_str(), source), ("ARG", KeySource::Argument));

        let (key, source) = resolve_key(None, Some(&key_file), Some("ENV"), &config).unwrap();
        assert_eq!(key.as_str(), "FILE");
        assert_eq!(source, KeySource::ArgumentFile(key_file.clone()));

        let (key, source) = resolve_key(None, None, Some("ENV"), &config).unwrap();
        assert_eq!((key.as_str(), source), ("ENV", KeySource::Environment));

        let (key, source) = resolve_key(None, None, None, &config).unwrap();
        assert_eq!((key.as_str(), source), ("CONFIG", KeySource::Config));
    }

    #[test]
    fn test_resolve_key_from_config_file() {
        let dir = TempDir::new().unwrap();
        let key_file = dir.path().join("k.key");
        std::fs::write(&key_file, "lemon").unwrap();

        let config = CipherConfig {
            key_file: Some(key_file.clone()),
            ..Default::default()
        };

        let (key, source) = resolve_key(None, None, None, &config).unwrap();
        assert_eq!(key.as_str(), "LEMON");
        assert_eq!(source, KeySource::ConfigFile(key_file));
    }

    #[test]
    fn test_resolve_key_missing() {
        let err = resolve_key(None, None, None, &CipherConfig::default()).unwrap_err();
        assert!(err.to_string().contains("no key provided"));
    }
}
