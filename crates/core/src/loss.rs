use serde::{Deserialize, Serialize};

use crate::params::Conduction;

/// Steady-state power dissipation split by mechanism, in W.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerBreakdown {
    pub total: f64,
    pub conduction: f64,
    pub switching: f64,
}

/// Computed losses and junction temperature at one candidate current.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    pub current: f64,
    /// Junction temperature in °C.
    pub junction_temperature: f64,
    pub power: PowerBreakdown,
}

/// Linear loss model for a switching power transistor.
///
/// Conduction loss is `I² · Rds(on)` or `I · Vce(sat)` depending on the
/// conduction variant; switching loss is
/// `0.5 · V · I · (t_rise + t_fall) · f_sw`. The junction temperature is the
/// ambient temperature plus the total loss times the accumulated thermal
/// resistance.
///
/// All methods are pure functions of the model and the candidate current.
/// Both loss terms are non-decreasing in current, which the bisection search
/// relies on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LossModel {
    pub conduction: Conduction,
    /// Blocking voltage during switching in V.
    pub max_voltage: f64,
    /// Sum of rise and fall times in s.
    pub transition_time: f64,
    /// Switching frequency in Hz.
    pub switching_frequency: f64,
    /// Junction-to-ambient thermal resistance in °C/W.
    pub total_rth: f64,
    /// Ambient temperature in °C.
    pub ambient_temperature: f64,
}

impl LossModel {
    /// Power dissipated while the device is fully on, in W.
    #[must_use]
    pub fn conduction_loss(&self, current: f64) -> f64 {
        match self.conduction {
            Conduction::Resistive { rds_on } => current * current * rds_on,
            Conduction::Saturation { vce_sat } => current * vce_sat,
        }
    }

    /// Power dissipated during on/off transitions, in W.
    #[must_use]
    pub fn switching_loss(&self, current: f64) -> f64 {
        0.5 * self.max_voltage * current * self.transition_time * self.switching_frequency
    }

    /// Sum of conduction and switching losses, in W.
    #[must_use]
    pub fn total_loss(&self, current: f64) -> f64 {
        self.conduction_loss(current) + self.switching_loss(current)
    }

    /// Steady-state junction temperature at the given current, in °C.
    #[must_use]
    pub fn junction_temperature(&self, current: f64) -> f64 {
        self.ambient_temperature + self.total_loss(current) * self.total_rth
    }

    /// Evaluates the full operating point at the given current.
    #[must_use]
    pub fn at(&self, current: f64) -> OperatingPoint {
        let conduction = self.conduction_loss(current);
        let switching = self.switching_loss(current);
        let total = conduction + switching;

        OperatingPoint {
            current,
            junction_temperature: self.ambient_temperature + total * self.total_rth,
            power: PowerBreakdown {
                total,
                conduction,
                switching,
            },
        }
    }
}
