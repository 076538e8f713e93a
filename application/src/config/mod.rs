//! Application-level configuration.
//!
//! - [`EncodingParams`]: batch loop control (fail-fast, record collection)

pub mod encoding_params;

pub use encoding_params::EncodingParams;
