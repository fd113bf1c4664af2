//! Session configuration
//!
//! Defaults cover the common case; a versioned YAML file can override any
//! discovery or build setting.
//!
//! ```rust,ignore
//! use gomodel_ir::config::ModelConfig;
//!
//! let config = ModelConfig::default();
//! let config = ModelConfig::from_yaml("gomodel.yaml")?;
//! ```

pub mod error;
pub mod model_config;

pub use error::{ConfigError, ConfigResult};
pub use model_config::{BuildConfig, DiscoveryConfig, InitializerPolicy, ModelConfig};
