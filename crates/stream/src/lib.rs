//! Streaming run boundary for the ampacity engine.
//!
//! A run executes on a blocking worker so it cannot stall the caller's
//! interactive thread. Telemetry crosses that boundary through an unbounded
//! channel: the worker enqueues every sample as it is produced and the
//! consumer drains at its own cadence, for example on a render tick, so
//! computation speed is fully decoupled from presentation speed. The
//! terminal result is delivered exactly once, after the search has stopped
//! evaluating samples.
//!
//! Two equivalent transport bindings are provided:
//!
//! - [`spawn`]: push-style delivery of samples as they are produced
//! - [`collect`]: synchronous computation of the full sample collection
//!   plus the result, for replay as a pseudo-stream
//!
//! Cancellation is caller-driven: close or drop [`RunHandle::samples`] and
//! the worker winds down after the next sample.

mod error;
mod run;
mod sink;

pub use error::RunError;
pub use run::{RunHandle, collect, spawn};
pub use sink::{ChannelSink, Recorder};
