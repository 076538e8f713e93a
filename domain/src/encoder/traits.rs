//! Encoder domain traits

use crate::core::error::EncodeError;

/// Abbreviates tasks and responses of one reasoning domain into short codes
///
/// Implementations are pure: the same input always yields the same code, and
/// an encoder can be shared across threads without locking.
pub trait DomainEncoder: Send + Sync {
    /// Task representation accepted by this encoder
    type Task: ?Sized;
    /// Response representation accepted by this encoder
    type Response: ?Sized;

    /// Short identifier of the encoded domain
    fn domain(&self) -> &'static str;

    /// Encode a task into its canonical code
    fn encode_task(&self, task: &Self::Task) -> Result<String, EncodeError>;

    /// Encode a response relative to the task it answers
    fn encode_response(
        &self,
        response: &Self::Response,
        task: &Self::Task,
    ) -> Result<String, EncodeError>;
}
