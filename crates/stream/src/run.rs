use ampacity_core::{Params, RunResult, Sample};
use tokio::{sync::mpsc, task::JoinHandle};

use crate::{ChannelSink, Recorder, RunError};

/// Handle to a run executing on a blocking worker.
pub struct RunHandle {
    /// Live telemetry, in emission order.
    ///
    /// The channel is unbounded: the worker never waits on a slow consumer.
    /// Closing or dropping the receiver stops the run early.
    pub samples: mpsc::UnboundedReceiver<Sample>,
    worker: JoinHandle<Result<RunResult, ampacity_solvers::Error>>,
}

impl RunHandle {
    /// Waits for the search to finish and returns its result.
    ///
    /// The result is delivered exactly once, after the worker has stopped
    /// evaluating samples. Samples not yet drained are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Worker`] if the worker task crashed.
    pub async fn finish(self) -> Result<RunResult, RunError> {
        let Self { samples, worker } = self;
        let result = worker.await??;
        drop(samples);
        Ok(result)
    }
}

/// Starts a run on a blocking worker and returns its handle.
///
/// The worker pushes each sample into the handle's channel as it is
/// produced, decoupling computation speed from consumption speed. Must be
/// called from within a tokio runtime.
///
/// # Errors
///
/// Returns [`RunError::Params`] if the parameters fail structural
/// validation; the check runs before any worker is spawned.
pub fn spawn(params: Params) -> Result<RunHandle, RunError> {
    params.validate().map_err(ampacity_solvers::Error::from)?;

    let (tx, rx) = mpsc::unbounded_channel();
    let worker = tokio::task::spawn_blocking(move || {
        tracing::debug!(
            algorithm = ?params.algorithm,
            mode = ?params.mode,
            max_current = params.max_current,
            "starting run"
        );

        let result = ampacity_solvers::run(&params, ChannelSink::new(tx));
        if let Ok(report) = &result {
            tracing::debug!(
                status = ?report.status,
                max_safe_current = report.max_safe_current,
                "run finished"
            );
        }
        result
    });

    Ok(RunHandle {
        samples: rx,
        worker,
    })
}

/// Runs the search synchronously, returning the full sample collection and
/// the result for replay as a pseudo-stream.
///
/// # Errors
///
/// Returns [`RunError::Params`] if the parameters fail structural
/// validation.
pub fn collect(params: &Params) -> Result<(Vec<Sample>, RunResult), RunError> {
    let mut recorder = Recorder::new();
    let result = ampacity_solvers::run(params, &mut recorder)?;
    Ok((recorder.into_samples(), result))
}
