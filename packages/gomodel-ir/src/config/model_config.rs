//! Model configuration (YAML schema v1)

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};

/// Supported schema versions
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// Top-level configuration for one discovery session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    /// Schema version (always 1 for v1)
    pub version: u32,

    #[serde(default)]
    pub discovery: DiscoveryConfig,

    #[serde(default)]
    pub build: BuildConfig,
}

/// Package discovery settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct DiscoveryConfig {
    /// Source file extension, without the leading dot
    pub extension: String,

    /// Follow symbolic links (cycles are detected and reported)
    pub follow_symlinks: bool,

    /// Skip directories whose name starts with '.'
    pub skip_hidden: bool,

    /// Directory names never descended into
    pub exclude_dirs: Vec<String>,

    /// Include `_test` files
    pub include_tests: bool,

    /// Maximum directory depth below the root (root = 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,

    /// Abort discovery after this many milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            extension: "go".to_string(),
            follow_symlinks: true,
            skip_hidden: true,
            exclude_dirs: Vec::new(),
            include_tests: true,
            max_depth: None,
            timeout_ms: None,
        }
    }
}

impl DiscoveryConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    /// Whether `file_name` is a source file under this configuration
    pub fn is_source_file(&self, file_name: &str) -> bool {
        let Some(stem) = file_name
            .strip_suffix(self.extension.as_str())
            .and_then(|rest| rest.strip_suffix('.'))
        else {
            return false;
        };
        if stem.is_empty() {
            return false;
        }
        self.include_tests || !stem.ends_with("_test")
    }

    /// Whether a directory named `dir_name` must not be walked
    pub fn is_excluded_dir(&self, dir_name: &str) -> bool {
        (self.skip_hidden && dir_name.starts_with('.') && dir_name != "." && dir_name != "..")
            || self.exclude_dirs.iter().any(|d| d == dir_name)
    }
}

/// What to do with a variable/constant initializer outside the supported shapes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitializerPolicy {
    /// Abort the build with an `UnsupportedInitializer` error
    #[default]
    Reject,
    /// Keep the binding without a value and record a diagnostic
    Report,
}

/// Entity building settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct BuildConfig {
    pub initializer_policy: InitializerPolicy,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            version: 1,
            discovery: DiscoveryConfig::default(),
            build: BuildConfig::default(),
        }
    }
}

impl ModelConfig {
    /// Load and validate a YAML configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML configuration text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let raw: serde_yaml::Value = serde_yaml::from_str(content)?;
        if raw.get("version").is_none() {
            return Err(ConfigError::MissingVersion);
        }
        let config: ModelConfig = serde_yaml::from_value(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !SUPPORTED_VERSIONS.contains(&self.version) {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }
        let ext = &self.discovery.extension;
        if ext.is_empty() || ext.starts_with('.') || ext.contains('/') {
            return Err(ConfigError::InvalidValue {
                field: "discovery.extension".to_string(),
                value: ext.clone(),
                hint: "Use a bare extension such as 'go'.".to_string(),
            });
        }
        if self.discovery.timeout_ms == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "discovery.timeout_ms".to_string(),
                value: "0".to_string(),
                hint: "Omit the field to disable the timeout.".to_string(),
            });
        }
        Ok(())
    }

    pub fn with_initializer_policy(mut self, policy: InitializerPolicy) -> Self {
        self.build.initializer_policy = policy;
        self
    }

    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.discovery.follow_symlinks = follow;
        self
    }
}
