//! Encode Records use case
//!
//! Encodes a batch of task/response records into task and response codes.

use crate::config::EncodingParams;
use crate::ports::encoding_sink::{EncodedRecord, EncodingSink, NoEncodingSink, RecordFailure};
use crate::ports::record_source::{RecordSource, RecordSourceError, SourcedRecord};
use crate::use_cases::summary::EncodingSummary;
use std::sync::Arc;
use sylcode_domain::{DomainEncoder, EncodeError, ResponseRepr, TaskRepr};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that abort a batch
#[derive(Error, Debug)]
pub enum EncodeRecordsError {
    #[error("Record {line}: {source}")]
    Encode {
        line: usize,
        #[source]
        source: EncodeError,
    },

    #[error(transparent)]
    Source(#[from] RecordSourceError),
}

impl EncodeRecordsError {
    /// Line of the record that aborted the batch, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            EncodeRecordsError::Encode { line, .. } => Some(*line),
            EncodeRecordsError::Source(e) => e.line(),
        }
    }
}

/// Output of the EncodeRecords use case
#[derive(Debug, Clone, Default)]
pub struct EncodeRecordsOutput {
    /// Encoded records in source order (empty unless collected)
    pub records: Vec<EncodedRecord>,
    /// Counts by task and response code
    pub summary: EncodingSummary,
}

/// Use case for encoding a batch of records
pub struct EncodeRecordsUseCase<E>
where
    E: DomainEncoder<Task = TaskRepr, Response = ResponseRepr>,
{
    encoder: Arc<E>,
    sink: Arc<dyn EncodingSink>,
}

impl<E> EncodeRecordsUseCase<E>
where
    E: DomainEncoder<Task = TaskRepr, Response = ResponseRepr>,
{
    pub fn new(encoder: Arc<E>) -> Self {
        Self {
            encoder,
            sink: Arc::new(NoEncodingSink),
        }
    }

    /// Emit each record to the given sink as soon as it is encoded
    pub fn with_sink(mut self, sink: Arc<dyn EncodingSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Encode every record of the source
    pub fn execute(
        &self,
        source: &mut dyn RecordSource,
        params: &EncodingParams,
    ) -> Result<EncodeRecordsOutput, EncodeRecordsError> {
        info!("Encoding records ({} domain)", self.encoder.domain());

        let mut output = EncodeRecordsOutput::default();

        while let Some(next) = source.next_record() {
            let encoded = match next {
                Ok(sourced) => self.encode_one(sourced, params)?,
                Err(RecordSourceError::InvalidRecord { line, message }) if !params.fail_fast => {
                    warn!("Skipping invalid record on line {}: {}", line, message);
                    EncodedRecord::failure(line, None, RecordFailure::new("invalid_record", message))
                }
                Err(e) => return Err(e.into()),
            };

            self.sink.emit(&encoded);
            output.summary.record(&encoded);
            if params.collect_records {
                output.records.push(encoded);
            }
        }

        info!(
            "Encoded {} of {} records ({} failed)",
            output.summary.encoded(),
            output.summary.total,
            output.summary.failed
        );

        Ok(output)
    }

    fn encode_one(
        &self,
        sourced: SourcedRecord,
        params: &EncodingParams,
    ) -> Result<EncodedRecord, EncodeRecordsError> {
        let SourcedRecord { line, record } = sourced;

        match self.encode_codes(&record.task, record.response.as_ref()) {
            Ok((task_code, response_code)) => {
                debug!(
                    "Line {}: task {} response {}",
                    line,
                    task_code,
                    response_code.as_deref().unwrap_or("-")
                );
                Ok(EncodedRecord::success(line, record.id, task_code, response_code))
            }
            Err(source) if params.fail_fast => Err(EncodeRecordsError::Encode { line, source }),
            Err(error) => {
                warn!("Line {}: {}", line, error);
                Ok(EncodedRecord::failure(
                    line,
                    record.id,
                    RecordFailure::from(&error),
                ))
            }
        }
    }

    fn encode_codes(
        &self,
        task: &TaskRepr,
        response: Option<&ResponseRepr>,
    ) -> Result<(String, Option<String>), EncodeError> {
        let task_code = self.encoder.encode_task(task)?;
        let response_code = response
            .map(|r| self.encoder.encode_response(r, task))
            .transpose()?;
        Ok((task_code, response_code))
    }
}
