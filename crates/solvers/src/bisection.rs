//! Bisection search over the (0, max_current] interval.
//!
//! The search keeps a bracket whose lower bound is proven safe (0 is
//! assumed safe) and whose upper bound starts at the device rating, which
//! is never exceeded. Each iteration probes the midpoint: a safe probe
//! raises the lower bound, an unsafe probe lowers the upper bound.
//!
//! The search stops once the bracket is narrower than
//! `max_current / precision_steps`, so the reported current agrees with a
//! sweep at the same precision to within one sweep increment. An iteration
//! cap of `ceil(log2(max_current / tolerance)) + 2` guarantees termination
//! even under floating-point edge cases.
//!
//! Probes are emitted in probe order, which is not current-ordered; any
//! consumer needing a current-ordered series must sort.

use ampacity_core::{Observer, Params, RunResult, SafetyCheck, Sample};

use crate::{Error, outcome};

/// Control actions supported by the bisection search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the search early and report what has been proven so far.
    StopEarly,
}

/// Per-probe event emitted by the bisection search.
pub struct Event<'a> {
    /// Bisection iteration (1-based).
    pub iter: u32,
    /// Search bracket at the time of the probe.
    pub bracket: [f64; 2],
    /// The evaluated sample.
    pub sample: &'a Sample,
    /// The safety verdict for the sample.
    pub check: &'a SafetyCheck,
}

/// Bisects the current range until the safe boundary is bracketed within
/// tolerance.
///
/// # Errors
///
/// Returns an error if the parameters fail structural validation.
pub fn search<Obs>(params: &Params, mut observer: Obs) -> Result<RunResult, Error>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    params.validate()?;

    let model = params.loss_model();
    let limits = params.limits();
    let limit_value = limits.active_limit_value();

    let tolerance = params.max_current / f64::from(params.precision_steps);
    let max_iters = iteration_cap(params.max_current, tolerance);

    // low is proven safe (0 by assumption); high is the smallest current
    // known unsafe, or the device rating if no probe has failed yet.
    let mut low = 0.0_f64;
    let mut high = params.max_current;
    let mut last_breach: Option<SafetyCheck> = None;

    for iter in 1..=max_iters {
        if high - low <= tolerance {
            break;
        }

        let mid = 0.5 * (low + high);
        let point = model.at(mid);
        let check = limits.assess(&point);

        let progress = f64::from(iter) / f64::from(max_iters) * 100.0;
        let sample = Sample::from_point(&point, progress, limit_value);

        let event = Event {
            iter,
            bracket: [low, high],
            sample: &sample,
            check: &check,
        };
        let stop = matches!(observer.observe(&event), Some(Action::StopEarly));

        if check.is_safe {
            low = mid;
        } else {
            high = mid;
            last_breach = Some(check);
        }

        if stop {
            break;
        }
    }

    match last_breach {
        Some(breach) => Ok(outcome::failed(low, &breach)),
        None => {
            let at_low = limits.assess(&model.at(low));
            Ok(outcome::safe(low, &at_low))
        }
    }
}

/// Iterations needed to shrink the full range to the tolerance, plus slack
/// for floating-point edge cases.
fn iteration_cap(max_current: f64, tolerance: f64) -> u32 {
    let halvings = (max_current / tolerance).log2().ceil();
    halvings as u32 + 2
}
