use ndr_core::RedactionTag;
use ndr_storage::DigestAlgorithm;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for ndr
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub hashing: HashingConfig,

    #[serde(default)]
    pub names: NamesConfig,

    #[serde(default)]
    pub patterns: PatternsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// File name of the redacted copy, written next to the source
    #[serde(default = "default_output_name")]
    pub file_name: String,

    /// Write outputs here instead of next to the source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashingConfig {
    #[serde(default)]
    pub algorithm: DigestAlgorithm,

    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NamesConfig {
    /// Names redacted on every run, in addition to the ones given per run
    #[serde(default)]
    pub default: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatternsConfig {
    /// Built-in categories to skip
    #[serde(default)]
    pub disabled: Vec<RedactionTag>,

    /// Extra matchers, applied after the built-in ones
    #[serde(default)]
    pub extra: Vec<ExtraPattern>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraPattern {
    pub tag: RedactionTag,
    pub pattern: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_name: default_output_name(),
            directory: None,
        }
    }
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            algorithm: DigestAlgorithm::default(),
            log_path: default_log_path(),
        }
    }
}

fn default_output_name() -> String {
    "redacted_nda.txt".to_string()
}

fn default_log_path() -> PathBuf {
    PathBuf::from("hashes.log")
}

impl Config {
    /// Load config from default location or create default if not found
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path();

        if path.exists() {
            Self::load_from(&path)
        } else {
            // Create default config file
            let config = Config::default();
            config.save_to(&path)?;
            Ok(config)
        }
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Write config as TOML, creating parent directories
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "ndr", "ndr") {
            dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("~/.ndr/config.toml")
        }
    }
}
