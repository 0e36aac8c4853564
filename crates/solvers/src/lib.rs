//! Current search algorithms for the ampacity engine.
//!
//! Both algorithms find the maximum current a device can sustain without
//! violating the active limits, and both emit one event per evaluated
//! sample to an [`Observer`]:
//!
//! - [`sweep`]: linear sweep in strictly increasing current order
//! - [`bisection`]: bisection over the current range, emitting probes in
//!   probe order
//!
//! [`run`] dispatches on the algorithm configured in the parameters. Each
//! run is a self-contained function over its own parameters; no state is
//! shared between runs, so independent runs may execute sequentially or
//! concurrently without interference.
//!
//! [`Observer`]: ampacity_core::Observer

pub mod bisection;
pub mod sweep;
pub mod traits;

mod error;
mod outcome;

pub use error::Error;

use ampacity_core::{Algorithm, Observer, Params, RunResult};

/// Runs the search configured in the parameters.
///
/// # Errors
///
/// Returns an error if the parameters fail structural validation.
pub fn run<Obs>(params: &Params, observer: Obs) -> Result<RunResult, Error>
where
    Obs: for<'a> Observer<sweep::Event<'a>, sweep::Action>
        + for<'a> Observer<bisection::Event<'a>, bisection::Action>,
{
    match params.algorithm {
        Algorithm::Iterative => sweep::search(params, observer),
        Algorithm::Binary => bisection::search(params, observer),
    }
}

/// Runs the configured search without observation.
///
/// # Errors
///
/// Returns an error if the parameters fail structural validation.
pub fn run_unobserved(params: &Params) -> Result<RunResult, Error> {
    run(params, ())
}
