//! Infrastructure layer for sylcode
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod records;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileEncodingConfig, FileOutputConfig,
    SUPPORTED_DOMAINS,
};
pub use records::{JsonlEncodingWriter, JsonlRecordSource};
