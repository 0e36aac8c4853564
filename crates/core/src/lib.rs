//! Core types for the ampacity engine.
//!
//! This crate defines the shared pieces the search algorithms and the
//! streaming layer build on:
//!
//! - [`RawParams`] and [`Params`]: form-unit inputs and the validated,
//!   unit-normalized parameter set for one run
//! - [`Catalog`] and [`CoolingProfile`]: read-only cooling options
//! - [`LossModel`]: conduction and switching losses and the resulting
//!   junction temperature
//! - [`Limits`]: per-mode safety checks with a fixed failure priority
//! - [`Sample`] and [`RunResult`]: streamed telemetry and the terminal result
//! - [`Observer`]: receives search events and can stop a run early

mod cooling;
mod limits;
mod loss;
mod observer;
mod params;
mod report;
mod sample;
pub mod units;

pub use cooling::{Catalog, CatalogError, CoolingProfile};
pub use limits::{Limit, Limits, SafetyCheck};
pub use loss::{LossModel, OperatingPoint, PowerBreakdown};
pub use observer::Observer;
pub use params::{
    Algorithm, Conduction, Mode, PRECISION_STEPS_RANGE, Params, ParamsError, RawConduction,
    RawParams,
};
pub use report::{RunRecord, RunResult, RunStatus};
pub use sample::Sample;
