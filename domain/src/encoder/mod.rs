//! Domain encoders.
//!
//! [`traits::DomainEncoder`] is the capability every domain encoder exposes;
//! [`generalized::GeneralizedSyllogisticEncoder`] implements it for the
//! ten-quantifier generalized syllogistic domain.

pub mod generalized;
pub mod traits;
