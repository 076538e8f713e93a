//! Domain layer for sylcode
//!
//! This crate contains the syllogism vocabulary and the encoders that
//! abbreviate tasks and responses into short canonical codes.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Task codes
//!
//! A task is a pair of quantified premises. Its code is the symbol of each
//! premise's quantifier followed by the figure number, e.g. `AI1` for
//! "All A are B / Some B are C".
//!
//! ## Response codes
//!
//! A response is either `NVC` (no valid conclusion) or a quantified
//! conclusion over the two end terms. Its code is the quantifier symbol
//! followed by `ac` or `ca`, depending on whether the conclusion's subject
//! is the end term of premise 1.

pub mod config;
pub mod core;
pub mod encoder;
pub mod syllogism;

// Re-export commonly used types
pub use config::OutputFormat;
pub use crate::core::error::EncodeError;
pub use encoder::{generalized::GeneralizedSyllogisticEncoder, traits::DomainEncoder};
pub use syllogism::{
    proposition::{Proposition, Term},
    quantifier::{Quantifier, symbol_of},
    response::{NVC, Response},
    task::{Figure, Task, TaskTerms},
    wire::{ResponseRepr, TaskRepr},
};
