use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{cooling::CoolingProfile, limits::Limits, loss::LossModel, units};

/// Accepted range for the search resolution.
pub const PRECISION_STEPS_RANGE: RangeInclusive<u32> = 10..=500;

/// Which operating limits end a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Junction temperature limit only.
    Temp,
    /// Cooling power budget only.
    Budget,
    /// First limit to trip ends the run: temperature, budget, or rating.
    Ftf,
}

/// Search algorithm used to find the maximum safe current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Linear sweep over equally spaced candidate currents.
    Iterative,
    /// Bisection over the (0, max current] interval.
    Binary,
}

/// Conduction behavior as entered on the form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum RawConduction {
    /// Channel behaves as a resistance (MOSFET-style devices).
    Resistive { rds_on_milliohms: f64 },
    /// Fixed saturation voltage drop (BJT/IGBT-style devices).
    Saturation { vce_sat: f64 },
}

/// Normalized conduction variant.
///
/// The variant selects which field is authoritative and which loss formula
/// applies: `I² · Rds(on)` for [`Resistive`](Self::Resistive), `I · Vce(sat)`
/// for [`Saturation`](Self::Saturation).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Conduction {
    /// On-resistance in Ω.
    Resistive { rds_on: f64 },
    /// Saturation voltage in V.
    Saturation { vce_sat: f64 },
}

impl Conduction {
    /// Returns the authoritative conduction parameter for the variant.
    #[must_use]
    pub fn value(&self) -> f64 {
        match *self {
            Conduction::Resistive { rds_on } => rds_on,
            Conduction::Saturation { vce_sat } => vce_sat,
        }
    }
}

/// Raw analysis inputs in form units.
///
/// Times are in ns, the switching frequency in kHz, and the on-resistance in
/// mΩ. [`resolve`](Self::resolve) converts everything to SI and validates
/// the result against the structural invariants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawParams {
    pub conduction: RawConduction,
    /// Device current rating in A.
    pub max_current: f64,
    /// Blocking voltage during switching in V.
    pub max_voltage: f64,
    pub rise_time_ns: f64,
    pub fall_time_ns: f64,
    pub switching_frequency_khz: f64,
    /// Junction-to-case thermal resistance in °C/W.
    pub rth_jc: f64,
    /// Junction temperature limit in °C.
    pub max_temperature: f64,
    /// Ambient temperature in °C.
    pub ambient_temperature: f64,
    pub mode: Mode,
    pub algorithm: Algorithm,
    pub precision_steps: u32,
    /// Id of the selected cooling profile.
    pub cooling_profile: String,
}

impl RawParams {
    /// Resolves the raw inputs and the selected cooling profile into a
    /// fully-specified, unit-normalized parameter set.
    ///
    /// # Errors
    ///
    /// Returns a [`ParamsError`] if any structural invariant is violated.
    /// This is a configuration error, distinct from a run whose result
    /// reports a failed limit.
    pub fn resolve(&self, profile: &CoolingProfile) -> Result<Params, ParamsError> {
        let conduction = match self.conduction {
            RawConduction::Resistive { rds_on_milliohms } => Conduction::Resistive {
                rds_on: units::ohms_from_milliohms(rds_on_milliohms),
            },
            RawConduction::Saturation { vce_sat } => Conduction::Saturation { vce_sat },
        };

        let params = Params {
            conduction,
            max_current: self.max_current,
            max_voltage: self.max_voltage,
            rise_time: units::seconds_from_nanoseconds(self.rise_time_ns),
            fall_time: units::seconds_from_nanoseconds(self.fall_time_ns),
            switching_frequency: units::hertz_from_kilohertz(self.switching_frequency_khz),
            rth_jc: self.rth_jc,
            cooling_rth: profile.thermal_resistance,
            total_rth: self.rth_jc + profile.thermal_resistance,
            effective_cooling_budget: profile.cooling_budget,
            max_temperature: self.max_temperature,
            ambient_temperature: self.ambient_temperature,
            mode: self.mode,
            algorithm: self.algorithm,
            precision_steps: self.precision_steps,
        };

        params.validate()?;
        Ok(params)
    }
}

/// Fully-specified, unit-normalized parameters for one run.
///
/// All fields are SI (A, V, s, Hz, W) except thermal resistances (°C/W) and
/// temperatures (°C). A value is immutable for the duration of its run; a
/// follow-up analysis is a fresh `Params` and a fresh run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Params {
    pub conduction: Conduction,
    pub max_current: f64,
    pub max_voltage: f64,
    pub rise_time: f64,
    pub fall_time: f64,
    pub switching_frequency: f64,
    pub rth_jc: f64,
    /// Thermal resistance contributed by the selected cooling profile.
    pub cooling_rth: f64,
    /// `rth_jc + cooling_rth`, must be positive.
    pub total_rth: f64,
    /// Cooling budget of the selected profile in W.
    pub effective_cooling_budget: f64,
    pub max_temperature: f64,
    pub ambient_temperature: f64,
    pub mode: Mode,
    pub algorithm: Algorithm,
    pub precision_steps: u32,
}

impl Params {
    /// Checks the structural invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant: a non-finite or negative field,
    /// a non-positive current rating or total thermal resistance, or a
    /// precision outside [`PRECISION_STEPS_RANGE`].
    pub fn validate(&self) -> Result<(), ParamsError> {
        let fields = [
            ("max current", self.max_current),
            ("max voltage", self.max_voltage),
            ("rise time", self.rise_time),
            ("fall time", self.fall_time),
            ("switching frequency", self.switching_frequency),
            ("junction-to-case thermal resistance", self.rth_jc),
            ("cooling thermal resistance", self.cooling_rth),
            ("cooling budget", self.effective_cooling_budget),
            ("max temperature", self.max_temperature),
            ("ambient temperature", self.ambient_temperature),
            ("conduction parameter", self.conduction.value()),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ParamsError::NonFinite { field });
            }
        }

        let non_negative = [
            ("max voltage", self.max_voltage),
            ("rise time", self.rise_time),
            ("fall time", self.fall_time),
            ("switching frequency", self.switching_frequency),
            ("conduction parameter", self.conduction.value()),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(ParamsError::Negative { field });
            }
        }

        if self.max_current <= 0.0 {
            return Err(ParamsError::MaxCurrent);
        }
        if self.total_rth <= 0.0 {
            return Err(ParamsError::TotalRth);
        }
        if !PRECISION_STEPS_RANGE.contains(&self.precision_steps) {
            return Err(ParamsError::PrecisionSteps {
                steps: self.precision_steps,
            });
        }

        Ok(())
    }

    /// Returns the loss model for these parameters.
    #[must_use]
    pub fn loss_model(&self) -> LossModel {
        LossModel {
            conduction: self.conduction,
            max_voltage: self.max_voltage,
            transition_time: self.rise_time + self.fall_time,
            switching_frequency: self.switching_frequency,
            total_rth: self.total_rth,
            ambient_temperature: self.ambient_temperature,
        }
    }

    /// Returns the active limits for these parameters.
    #[must_use]
    pub fn limits(&self) -> Limits {
        Limits {
            mode: self.mode,
            max_temperature: self.max_temperature,
            cooling_budget: self.effective_cooling_budget,
            max_current: self.max_current,
        }
    }
}

/// Errors that can occur when validating run parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParamsError {
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },

    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    #[error("max current must be positive")]
    MaxCurrent,

    #[error("total thermal resistance must be positive")]
    TotalRth,

    #[error("precision steps must be within 10..=500, got {steps}")]
    PrecisionSteps { steps: u32 },
}
