use serde::{Deserialize, Serialize};

use crate::{limits::Limit, loss::PowerBreakdown, params::Params};

/// Whether the search reached the device's full range or hit a limit.
///
/// A `Failed` status is a successful analysis outcome (a limit was found),
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Safe,
    Failed,
}

/// Terminal result of one run, produced exactly once after the search
/// stops evaluating samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResult {
    pub status: RunStatus,
    /// The largest current proven safe by the search, in A.
    pub max_safe_current: f64,
    /// The limit that ended the search, `None` for a fully safe run.
    pub failure_reason: Option<Limit>,
    pub details: String,
    /// Junction temperature at the reported sample, in °C.
    pub final_temperature: f64,
    pub power: PowerBreakdown,
}

/// A completed analysis paired with its inputs.
///
/// Consumed opaquely by the history/persistence layer; the engine is
/// agnostic to how records are stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRecord {
    pub params: Params,
    pub result: RunResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::params::{Algorithm, Conduction, Mode};

    fn record() -> RunRecord {
        RunRecord {
            params: Params {
                conduction: Conduction::Resistive { rds_on: 0.0175 },
                max_current: 49.0,
                max_voltage: 55.0,
                rise_time: 60.0e-9,
                fall_time: 45.0e-9,
                switching_frequency: 100_000.0,
                rth_jc: 0.5,
                cooling_rth: 0.3,
                total_rth: 0.8,
                effective_cooling_budget: 60.0,
                max_temperature: 150.0,
                ambient_temperature: 25.0,
                mode: Mode::Ftf,
                algorithm: Algorithm::Binary,
                precision_steps: 200,
            },
            result: RunResult {
                status: RunStatus::Failed,
                max_safe_current: 31.5,
                failure_reason: Some(Limit::Budget),
                details: "Total dissipation 61.02 W exceeds the 60 W cooling budget.".to_string(),
                final_temperature: 73.8,
                power: PowerBreakdown {
                    total: 61.02,
                    conduction: 17.7,
                    switching: 43.32,
                },
            },
        }
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = record();
        let json = serde_json::to_string(&record).expect("serializes");
        let back: RunRecord = serde_json::from_str(&json).expect("deserializes");

        assert_eq!(back, record);
    }

    #[test]
    fn record_uses_camel_case_wire_names() {
        let json = serde_json::to_string(&record()).expect("serializes");

        assert!(json.contains("\"maxSafeCurrent\""));
        assert!(json.contains("\"failureReason\":\"budget\""));
        assert!(json.contains("\"status\":\"failed\""));
        assert!(json.contains("\"precisionSteps\""));
        assert!(json.contains("\"rdsOn\""));
    }
}
