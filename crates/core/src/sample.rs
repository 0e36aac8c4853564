use serde::{Deserialize, Serialize};

use crate::loss::OperatingPoint;

/// One telemetry point, emitted per evaluated candidate current.
///
/// The sweep algorithm emits samples with non-decreasing `current`; the
/// bisection algorithm emits them in probe order, which is not
/// current-ordered. Consumers needing a current-ordered series must sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sample {
    pub current: f64,
    pub temperature: f64,
    pub power_loss: f64,
    pub conduction_loss: f64,
    pub switching_loss: f64,
    /// Search progress in percent.
    pub progress: f64,
    /// The active limit for the run, for plotting against the samples.
    pub limit_value: f64,
}

impl Sample {
    /// Builds a sample from an evaluated operating point.
    ///
    /// Progress is clamped to [0, 100].
    #[must_use]
    pub fn from_point(point: &OperatingPoint, progress: f64, limit_value: f64) -> Self {
        Self {
            current: point.current,
            temperature: point.junction_temperature,
            power_loss: point.power.total,
            conduction_loss: point.power.conduction,
            switching_loss: point.power.switching,
            progress: progress.clamp(0.0, 100.0),
            limit_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::loss::PowerBreakdown;

    #[test]
    fn from_point_copies_the_breakdown() {
        let point = OperatingPoint {
            current: 12.0,
            junction_temperature: 80.0,
            power: PowerBreakdown {
                total: 25.0,
                conduction: 5.0,
                switching: 20.0,
            },
        };

        let sample = Sample::from_point(&point, 40.0, 150.0);

        assert_relative_eq!(sample.current, 12.0);
        assert_relative_eq!(sample.temperature, 80.0);
        assert_relative_eq!(sample.power_loss, 25.0);
        assert_relative_eq!(sample.conduction_loss, 5.0);
        assert_relative_eq!(sample.switching_loss, 20.0);
        assert_relative_eq!(sample.progress, 40.0);
        assert_relative_eq!(sample.limit_value, 150.0);
    }

    #[test]
    fn progress_is_clamped() {
        let point = OperatingPoint {
            current: 1.0,
            junction_temperature: 30.0,
            power: PowerBreakdown {
                total: 1.0,
                conduction: 1.0,
                switching: 0.0,
            },
        };

        assert_relative_eq!(Sample::from_point(&point, 120.0, 100.0).progress, 100.0);
        assert_relative_eq!(Sample::from_point(&point, -5.0, 100.0).progress, 0.0);
    }
}
