//! The streaming response pipeline.
//!
//! Three pieces drive an open stream: the [`LineReader`] pulls delimited
//! lines out of the body byte stream, [`classify`] turns each line into a
//! typed event, and the pump owns the background task that feeds classified
//! events into the outbound channel until the stream terminates.

mod classifier;
mod line_reader;
mod pump;

pub use classifier::{classify, Classification, DONE_SENTINEL};
pub use line_reader::{LineOutcome, LineReader};

pub(crate) use pump::open_stream;
