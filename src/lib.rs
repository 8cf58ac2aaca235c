pub mod amount;
pub mod load;
pub mod types;

pub use amount::{Amount, AmountError, Shape};
pub use load::{Job, JobKind, LoadError, LoadProfile};
pub use types::capacity::Capacity;
