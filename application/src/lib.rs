//! Application layer for sylcode
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::EncodingParams;
pub use ports::{
    encoding_sink::{EncodedRecord, EncodingSink, NoEncodingSink, RecordFailure},
    record_source::{
        EncodingRecord, InMemoryRecordSource, RecordSource, RecordSourceError, SourcedRecord,
    },
};
pub use use_cases::encode_records::{EncodeRecordsError, EncodeRecordsOutput, EncodeRecordsUseCase};
pub use use_cases::summary::EncodingSummary;
