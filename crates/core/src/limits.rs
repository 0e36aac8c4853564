use serde::{Deserialize, Serialize};

use crate::{
    loss::{OperatingPoint, PowerBreakdown},
    params::Mode,
};

/// The operating limit that failed a safety check.
///
/// Declaration order is the fixed first-to-fail priority: when several
/// limits trip at the same sampled current, the earliest variant is
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Limit {
    /// Junction temperature above the configured maximum.
    Temperature,
    /// Total dissipation above the effective cooling budget.
    Budget,
    /// Current above the device rating.
    Rating,
}

/// Verdict for a single operating point.
#[derive(Debug, Clone, PartialEq)]
pub struct SafetyCheck {
    pub is_safe: bool,
    /// The limit that failed, `None` when the point is safe.
    pub breach: Option<Limit>,
    pub details: String,
    pub junction_temperature: f64,
    pub power: PowerBreakdown,
}

/// The limits active for one run, applied per the configured mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    pub mode: Mode,
    pub max_temperature: f64,
    pub cooling_budget: f64,
    pub max_current: f64,
}

impl Limits {
    /// Checks an operating point against the active limits.
    ///
    /// Purely a function of its inputs; no side effects.
    #[must_use]
    pub fn assess(&self, point: &OperatingPoint) -> SafetyCheck {
        let breach = self.first_breach(point);

        let details = match breach {
            Some(Limit::Temperature) => format!(
                "Junction temperature {:.2} °C exceeds the {:.0} °C limit.",
                point.junction_temperature, self.max_temperature
            ),
            Some(Limit::Budget) => format!(
                "Total dissipation {:.2} W exceeds the {:.0} W cooling budget.",
                point.power.total, self.cooling_budget
            ),
            Some(Limit::Rating) => format!(
                "Current {:.2} A exceeds the {:.0} A device rating.",
                point.current, self.max_current
            ),
            None => "Operating within all limits.".to_string(),
        };

        SafetyCheck {
            is_safe: breach.is_none(),
            breach,
            details,
            junction_temperature: point.junction_temperature,
            power: point.power,
        }
    }

    /// Returns the first tripped limit in priority order, if any.
    fn first_breach(&self, point: &OperatingPoint) -> Option<Limit> {
        let over_temperature = point.junction_temperature > self.max_temperature;
        let over_budget = point.power.total > self.cooling_budget;
        let over_rating = point.current > self.max_current;

        match self.mode {
            Mode::Temp => over_temperature.then_some(Limit::Temperature),
            Mode::Budget => over_budget.then_some(Limit::Budget),
            Mode::Ftf => {
                if over_temperature {
                    Some(Limit::Temperature)
                } else if over_budget {
                    Some(Limit::Budget)
                } else if over_rating {
                    Some(Limit::Rating)
                } else {
                    None
                }
            }
        }
    }

    /// The limit value reported alongside each sample: the temperature limit
    /// in temp mode, the cooling budget in budget mode, and 100 (a percent
    /// headroom scale) in first-to-fail mode.
    #[must_use]
    pub fn active_limit_value(&self) -> f64 {
        match self.mode {
            Mode::Temp => self.max_temperature,
            Mode::Budget => self.cooling_budget,
            Mode::Ftf => 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(current: f64, junction_temperature: f64, total: f64) -> OperatingPoint {
        OperatingPoint {
            current,
            junction_temperature,
            power: PowerBreakdown {
                total,
                conduction: total,
                switching: 0.0,
            },
        }
    }

    fn limits(mode: Mode) -> Limits {
        Limits {
            mode,
            max_temperature: 150.0,
            cooling_budget: 50.0,
            max_current: 40.0,
        }
    }

    #[test]
    fn temp_mode_only_checks_temperature() {
        let limits = limits(Mode::Temp);

        // Over budget and over rating, but within temperature.
        let check = limits.assess(&point(100.0, 149.0, 500.0));
        assert!(check.is_safe);

        let check = limits.assess(&point(1.0, 150.1, 1.0));
        assert_eq!(check.breach, Some(Limit::Temperature));
    }

    #[test]
    fn budget_mode_only_checks_dissipation() {
        let limits = limits(Mode::Budget);

        let check = limits.assess(&point(100.0, 400.0, 49.9));
        assert!(check.is_safe);

        let check = limits.assess(&point(1.0, 30.0, 50.1));
        assert_eq!(check.breach, Some(Limit::Budget));
        assert!(!check.is_safe);
    }

    #[test]
    fn ftf_mode_checks_all_limits() {
        let limits = limits(Mode::Ftf);

        assert!(limits.assess(&point(39.0, 149.0, 49.0)).is_safe);
        assert_eq!(
            limits.assess(&point(39.0, 151.0, 49.0)).breach,
            Some(Limit::Temperature)
        );
        assert_eq!(
            limits.assess(&point(39.0, 149.0, 51.0)).breach,
            Some(Limit::Budget)
        );
        assert_eq!(
            limits.assess(&point(41.0, 149.0, 49.0)).breach,
            Some(Limit::Rating)
        );
    }

    #[test]
    fn ftf_reports_temperature_before_budget_and_rating() {
        let limits = limits(Mode::Ftf);

        // All three limits trip at once.
        let check = limits.assess(&point(41.0, 200.0, 80.0));
        assert_eq!(check.breach, Some(Limit::Temperature));
    }

    #[test]
    fn ftf_reports_budget_before_rating() {
        let limits = limits(Mode::Ftf);

        let check = limits.assess(&point(41.0, 100.0, 80.0));
        assert_eq!(check.breach, Some(Limit::Budget));
    }

    #[test]
    fn exact_limit_values_are_safe() {
        let limits = limits(Mode::Ftf);

        // Limits fail strictly above the threshold, not at it.
        assert!(limits.assess(&point(40.0, 150.0, 50.0)).is_safe);
    }

    #[test]
    fn safe_check_has_no_reason() {
        let limits = limits(Mode::Ftf);
        let check = limits.assess(&point(10.0, 60.0, 10.0));

        assert!(check.is_safe);
        assert_eq!(check.breach, None);
        assert_eq!(check.details, "Operating within all limits.");
    }

    #[test]
    fn active_limit_value_per_mode() {
        assert_eq!(limits(Mode::Temp).active_limit_value(), 150.0);
        assert_eq!(limits(Mode::Budget).active_limit_value(), 50.0);
        assert_eq!(limits(Mode::Ftf).active_limit_value(), 100.0);
    }
}
