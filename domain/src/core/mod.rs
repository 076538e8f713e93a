//! Core domain concepts shared across all subdomains.
//!
//! - [`error::EncodeError`]: encoding errors

pub mod error;
