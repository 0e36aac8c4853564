use ampacity_core::{Observer, Sample};
use ampacity_solvers::traits::{CanStopEarly, HasSample};
use tokio::sync::mpsc;

/// Forwards every sample into an unbounded channel.
///
/// Sends never block, so a slow consumer cannot stall the search. If the
/// receiving side is gone the sink stops the search early instead, which is
/// how a caller cancels a run.
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<Sample>,
}

impl ChannelSink {
    /// Creates a sink that sends into the given channel.
    #[must_use]
    pub fn new(tx: mpsc::UnboundedSender<Sample>) -> Self {
        Self { tx }
    }
}

impl<E, A> Observer<E, A> for ChannelSink
where
    E: HasSample,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if self.tx.send(event.sample().clone()).is_err() {
            tracing::debug!("sample consumer is gone, stopping the run early");
            return Some(A::stop_early());
        }
        None
    }
}

/// Collects every sample into a vector, in emission order.
///
/// Backs the synchronous transport binding, where the caller replays the
/// collection as a pseudo-stream.
#[derive(Debug, Default)]
pub struct Recorder {
    samples: Vec<Sample>,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the recorder and returns the samples in emission order.
    #[must_use]
    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}

impl<E, A> Observer<E, A> for &mut Recorder
where
    E: HasSample,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.samples.push(event.sample().clone());
        None
    }
}
