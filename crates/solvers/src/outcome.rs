use ampacity_core::{RunResult, RunStatus, SafetyCheck};

/// Builds the result for a search that hit a limit.
///
/// The failure fields come from the unsafe check that ended (or bounded)
/// the search.
pub(crate) fn failed(max_safe_current: f64, breach: &SafetyCheck) -> RunResult {
    RunResult {
        status: RunStatus::Failed,
        max_safe_current,
        failure_reason: breach.breach,
        details: breach.details.clone(),
        final_temperature: breach.junction_temperature,
        power: breach.power,
    }
}

/// Builds the result for a search that never hit a limit.
///
/// `at_max_safe` is the evaluation at the reported current.
pub(crate) fn safe(max_safe_current: f64, at_max_safe: &SafetyCheck) -> RunResult {
    RunResult {
        status: RunStatus::Safe,
        max_safe_current,
        failure_reason: None,
        details: format!("Device operates safely up to {max_safe_current:.2} A within all limits."),
        final_temperature: at_max_safe.junction_temperature,
        power: at_max_safe.power,
    }
}
