//! Exact rational numbers on fixed-width integers.
//!
//! Every [`Fraction`] is reduced when it is built and never changes
//! afterwards; arithmetic returns new values.

mod error;
mod fraction;
pub mod numeric;
mod ops;
mod view;

pub use crate::error::FractionError;
pub use crate::fraction::Fraction;
