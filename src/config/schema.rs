//! config::schema
//!
//! Configuration schema types.
//!
//! The same schema is used for the global file and the project file.
//! Every field is optional so layers can be merged with
//! [`WithDefaults`](crate::defaults::WithDefaults).
//!
//! # Example
//!
//! ```toml
//! pretty = true
//! seed = 42
//! separator = " | "
//! format = "lines"
//! ```

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::impl_with_defaults;

/// Output formats accepted by the `format` key.
pub const VALID_FORMATS: [&str; 2] = ["json", "lines"];

/// One layer of pippi configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PippiConfig {
    /// Indent JSON output
    pub pretty: Option<bool>,

    /// Seed for shuffle/random; absent means a fresh thread-local generator
    pub seed: Option<u64>,

    /// Separator used by `join`
    pub separator: Option<String>,

    /// Output format: "json" or "lines"
    pub format: Option<String>,
}

impl_with_defaults!(PippiConfig {
    pretty,
    seed,
    separator,
    format,
});

impl PippiConfig {
    /// Values used when no layer sets a field.
    pub fn builtin() -> Self {
        Self {
            pretty: Some(false),
            seed: None,
            separator: Some(",".to_string()),
            format: Some("json".to_string()),
        }
    }

    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(format) = &self.format {
            if !VALID_FORMATS.contains(&format.as_str()) {
                return Err(ConfigError::InvalidValue(format!(
                    "invalid format '{}', must be one of: {}",
                    format,
                    VALID_FORMATS.join(", ")
                )));
            }
        }
        Ok(())
    }
}
