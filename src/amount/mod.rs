//! Multi-dimensional amounts: capacities and demands along a
//! problem-defined number of dimensions.

#[allow(clippy::module_inception)]
pub mod amount;
pub mod error;
mod ops;
mod repr;

pub use amount::Amount;
pub use error::{AmountError, Shape};
