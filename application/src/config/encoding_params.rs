//! Encoding parameters: batch loop control.
//!
//! [`EncodingParams`] groups the static parameters that control the batch
//! loop in [`EncodeRecordsUseCase`](crate::use_cases::encode_records::EncodeRecordsUseCase).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};

/// Batch encoding control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodingParams {
    /// Stop at the first record that fails to encode.
    ///
    /// When false, failing records are emitted with their error and the
    /// batch continues.
    pub fail_fast: bool,
    /// Keep every encoded record in the output (in addition to the sink).
    pub collect_records: bool,
}

impl Default for EncodingParams {
    fn default() -> Self {
        Self {
            fail_fast: true,
            collect_records: true,
        }
    }
}

impl EncodingParams {
    // ==================== Builder Methods ====================

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn with_collect_records(mut self, collect: bool) -> Self {
        self.collect_records = collect;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = EncodingParams::default();
        assert!(params.fail_fast);
        assert!(params.collect_records);
    }

    #[test]
    fn test_builder() {
        let params = EncodingParams::default()
            .with_fail_fast(false)
            .with_collect_records(false);

        assert!(!params.fail_fast);
        assert!(!params.collect_records);
    }
}
