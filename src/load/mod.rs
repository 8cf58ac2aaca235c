//! Load accumulation along an ordered sequence of stops.

pub mod job;
pub mod profile;

pub use job::{Job, JobKind};
pub use profile::{LoadError, LoadProfile};
