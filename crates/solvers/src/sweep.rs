//! Linear sweep over equally spaced candidate currents.
//!
//! The sweep partitions `(0, max_current]` into `precision_steps` equal
//! increments and evaluates them in strictly increasing order, emitting one
//! [`Event`] per sample with `progress = step / precision_steps × 100`. It
//! stops at the first unsafe sample; the maximum safe current is the last
//! sample proven safe, or 0 if the first sample already fails. A sweep that
//! never fails reports a safe result at the device's full rating.

use ampacity_core::{Observer, Params, RunResult, SafetyCheck, Sample};

use crate::{Error, outcome};

/// Control actions supported by the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the sweep early and report what has been proven so far.
    StopEarly,
}

/// Per-sample event emitted by the sweep.
pub struct Event<'a> {
    /// Sweep step (1-based).
    pub step: u32,
    /// The evaluated sample.
    pub sample: &'a Sample,
    /// The safety verdict for the sample.
    pub check: &'a SafetyCheck,
}

/// Sweeps candidate currents in increasing order until one fails.
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
    let steps = params.precision_steps;

    let mut max_safe_current = 0.0;
    let mut last_safe: Option<SafetyCheck> = None;

    for step in 1..=steps {
        let fraction = f64::from(step) / f64::from(steps);
        let current = params.max_current * fraction;

        let point = model.at(current);
        let check = limits.assess(&point);
        let sample = Sample::from_point(&point, fraction * 100.0, limit_value);

        let event = Event {
            step,
            sample: &sample,
            check: &check,
        };
        let stop = matches!(observer.observe(&event), Some(Action::StopEarly));

        if !check.is_safe {
            return Ok(outcome::failed(max_safe_current, &check));
        }

        max_safe_current = current;
        last_safe = Some(check);

        if stop {
            break;
        }
    }

    // precision_steps is at least 10, so the loop evaluated a sample.
    let at_max_safe = last_safe.unwrap_or_else(|| limits.assess(&model.at(max_safe_current)));
    Ok(outcome::safe(max_safe_current, &at_max_safe))
}
