//! Record I/O: JSONL adapters for the record ports.
//!
//! Provides [`JsonlRecordSource`], which implements the
//! [`RecordSource`](sylcode_application::RecordSource) port, and
//! [`JsonlEncodingWriter`], which implements the
//! [`EncodingSink`](sylcode_application::EncodingSink) port.

mod jsonl_reader;
mod jsonl_writer;

pub use jsonl_reader::JsonlRecordSource;
pub use jsonl_writer::JsonlEncodingWriter;
