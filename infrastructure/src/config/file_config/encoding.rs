//! Encoding configuration from TOML (`[encoding]` section)

use serde::{Deserialize, Serialize};
use sylcode_application::EncodingParams;

/// Domains that have an encoder
pub const SUPPORTED_DOMAINS: &[&str] = &["syllogistic-generalized"];

/// Raw encoding configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEncodingConfig {
    /// Encoder domain
    pub domain: String,
    /// Stop a batch at the first record that fails to encode
    pub fail_fast: bool,
}

impl Default for FileEncodingConfig {
    fn default() -> Self {
        Self {
            domain: SUPPORTED_DOMAINS[0].to_string(),
            fail_fast: true,
        }
    }
}

impl FileEncodingConfig {
    /// Convert to application-layer batch parameters
    pub fn to_params(&self) -> EncodingParams {
        EncodingParams::default().with_fail_fast(self.fail_fast)
    }
}
