//! Request, response, and stream event types.

pub mod request;
pub mod stream;

pub use request::{Request, Response};
pub use stream::{StreamEvent, StreamEventKind};
