//! Generalized syllogism vocabulary.
//!
//! - [`quantifier::Quantifier`]: the ten quantifiers and their symbols
//! - [`proposition::Proposition`]: a quantified statement over two terms
//! - [`task::Task`] / [`task::Figure`]: a premise pair and its figure
//! - [`response::Response`]: a conclusion or NVC
//! - [`wire`]: list representations exchanged with callers

pub mod proposition;
pub mod quantifier;
pub mod response;
pub mod task;
pub mod wire;
