//! JSONL writer for encoded records.
//!
//! Each [`EncodedRecord`] is serialized as a single JSON line and appended
//! via a buffered writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Mutex;
use sylcode_application::{EncodedRecord, EncodingSink};
use tracing::warn;

/// JSONL sink that writes one JSON object per encoded record.
///
/// Thread-safe via `Mutex<BufWriter<_>>`. Flushes on `Drop`.
pub struct JsonlEncodingWriter {
    writer: Mutex<BufWriter<Box<dyn Write + Send>>>,
}

impl JsonlEncodingWriter {
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(BufWriter::new(Box::new(writer))),
        }
    }

    /// Write to standard output
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }

    /// Create (or truncate) a file, creating parent directories if needed
    pub fn create(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Self::new(File::create(path)?))
    }
}

impl EncodingSink for JsonlEncodingWriter {
    fn emit(&self, record: &EncodedRecord) {
        let line = match serde_json::to_string(record) {
            Ok(line) => line,
            Err(e) => {
                warn!("Could not serialize record on line {}: {}", record.line, e);
                return;
            }
        };

        if let Ok(mut writer) = self.writer.lock()
            && let Err(e) = writeln!(writer, "{}", line)
        {
            warn!("Could not write record on line {}: {}", record.line, e);
        }
    }
}

impl Drop for JsonlEncodingWriter {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock()
            && let Err(e) = writer.flush()
        {
            warn!("Could not flush encoded records: {}", e);
        }
    }
}
