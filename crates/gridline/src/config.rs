//! Serializable table settings.
//!
//! ```yaml
//! style: rounded
//! width: 60
//! ```

use serde::{Deserialize, Serialize};

use crate::border::BorderPreset;
use crate::error::Result;

/// Presentation settings that can be loaded from YAML and applied to a table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Border preset, by name.
    pub style: BorderPreset,
    /// Total width budget; absent means unconstrained.
    pub width: Option<usize>,
}

impl TableConfig {
    /// Parses a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serializes to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
