//! Capability traits for cross-algorithm observers.
//!
//! These traits abstract over the per-algorithm event and action types so a
//! single observer (a channel sink, a recorder) can watch either search.
//!
//! # Example
//!
//! ```rust
//! use ampacity_core::Observer;
//! use ampacity_solvers::traits::{CanStopEarly, HasSample};
//!
//! struct FirstN {
//!     remaining: usize,
//! }
//!
//! impl<E: HasSample, A: CanStopEarly> Observer<E, A> for FirstN {
//!     fn observe(&mut self, _event: &E) -> Option<A> {
//!         if self.remaining == 0 {
//!             return Some(A::stop_early());
//!         }
//!         self.remaining -= 1;
//!         None
//!     }
//! }
//! ```

use ampacity_core::Sample;

use crate::{bisection, sweep};

/// An event that carries the evaluated sample.
pub trait HasSample {
    /// Returns the sample for this event.
    fn sample(&self) -> &Sample;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the search early.
    fn stop_early() -> Self;
}

impl HasSample for sweep::Event<'_> {
    fn sample(&self) -> &Sample {
        self.sample
    }
}

impl HasSample for bisection::Event<'_> {
    fn sample(&self) -> &Sample {
        self.sample
    }
}

impl CanStopEarly for sweep::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
