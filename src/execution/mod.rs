//! Cipher execution - async I/O around the core cipher

pub mod executor;
pub mod job;

pub use executor::transform_stream;
pub use job::{Job, JobOutcome, Sink, Source};
