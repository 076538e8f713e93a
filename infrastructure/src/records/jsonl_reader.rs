//! JSONL reader for encoding records.
//!
//! Each non-blank line holds one [`EncodingRecord`] as a JSON object.
//! Line numbers count every physical line, blank ones included, so they
//! match what an editor shows.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use sylcode_application::{EncodingRecord, RecordSource, RecordSourceError, SourcedRecord};
use tracing::debug;

/// Record source over any buffered reader (file, stdin, in-memory bytes)
pub struct JsonlRecordSource<R: BufRead> {
    lines: std::io::Lines<R>,
    line: usize,
}

impl<R: BufRead> JsonlRecordSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }
}

impl JsonlRecordSource<BufReader<File>> {
    /// Open a JSONL file
    pub fn open(path: impl AsRef<Path>) -> Result<Self, RecordSourceError> {
        let path = path.as_ref();
        debug!("Reading records from {}", path.display());
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> RecordSource for JsonlRecordSource<R> {
    fn next_record(&mut self) -> Option<Result<SourcedRecord, RecordSourceError>> {
        loop {
            let text = match self.lines.next()? {
                Ok(text) => text,
                Err(e) => return Some(Err(e.into())),
            };
            self.line += 1;

            if text.trim().is_empty() {
                continue;
            }

            let line = self.line;
            return Some(
                serde_json::from_str::<EncodingRecord>(&text)
                    .map(|record| SourcedRecord { line, record })
                    .map_err(|e| RecordSourceError::InvalidRecord {
                        line,
                        message: e.to_string(),
                    }),
            );
        }
    }
}
