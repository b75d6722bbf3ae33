//! Column registry configuration.

use serde::{Deserialize, Serialize};

/// Column registry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnsConfig {
    /// Key of the built-in column after which registered columns are spliced.
    #[serde(default = "default_anchor_key")]
    pub anchor_key: String,
    /// Opaque signature recorded on wrapped host entry points so the same
    /// interception point is never wrapped twice by this toolkit.
    #[serde(default = "default_patch_signature")]
    pub patch_signature: String,
    /// Flex weight applied to columns that do not specify one.
    #[serde(default = "default_flex")]
    pub default_flex: f32,
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            anchor_key: default_anchor_key(),
            patch_signature: default_patch_signature(),
            default_flex: default_flex(),
        }
    }
}

fn default_anchor_key() -> String {
    "title".to_string()
}

fn default_patch_signature() -> String {
    concat!("treecol@", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_flex() -> f32 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_signature_carries_version() {
        let config = ColumnsConfig::default();
        assert!(config.patch_signature.starts_with("treecol@"));
    }
}
