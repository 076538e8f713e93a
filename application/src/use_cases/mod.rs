//! Use cases (application services)

pub mod encode_records;
pub mod summary;
