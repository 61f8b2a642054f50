use crate::check::metric::not_available;
use crate::check::result::CheckResult;
use crate::check::severity::Severity;
use crate::collector::{ReadingSet, StateField};

/// Evaluation order of the common status fields
pub const FIELDS: [StateField; 3] = [StateField::Breaker, StateField::Engine, StateField::Mode];

/// Any state other than the healthy one is critical. A missing state is
/// unknown unless the category is already critical.
pub fn evaluate(readings: &ReadingSet, result: &mut CheckResult) {
    for field in FIELDS {
        match readings.state(field).and_then(|s| s.value.as_deref()) {
            Some(value) => {
                let severity = if value == field.healthy_value() {
                    Severity::Ok
                } else {
                    Severity::Critical
                };
                result.add_message(severity, format!("{}: {}", field.label(), value));
            }
            None => {
                let severity = result.worst_severity().combine(Severity::Unknown);
                result.add_message(severity, not_available(field.label()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::StateReading;

    fn healthy() -> ReadingSet {
        ReadingSet::new()
            .with_state(StateField::Mode, "Auto")
            .with_state(StateField::Breaker, "MainsOper")
            .with_state(StateField::Engine, "Ready")
    }

    fn texts(result: &CheckResult) -> Vec<(Severity, &str)> {
        result
            .messages()
            .iter()
            .map(|m| (m.severity, m.text.as_str()))
            .collect()
    }

    #[test]
    fn healthy_generator_is_ok() {
        let mut result = CheckResult::new();
        evaluate(&healthy(), &mut result);

        assert_eq!(
            texts(&result),
            vec![
                (Severity::Ok, "Breaker: MainsOper"),
                (Severity::Ok, "Engine: Ready"),
                (Severity::Ok, "Mode: Auto"),
            ]
        );
        assert_eq!(result.finalize().exit_code, 0);
    }

    #[test]
    fn manual_mode_is_critical() {
        let readings = healthy().with_state(StateField::Mode, "Manual");
        let mut result = CheckResult::new();
        evaluate(&readings, &mut result);

        assert!(texts(&result).contains(&(Severity::Critical, "Mode: Manual")));
        assert_eq!(result.worst_severity(), Severity::Critical);
        assert_eq!(result.finalize().exit_code, 2);
    }

    #[test]
    fn missing_state_is_unknown() {
        let readings = ReadingSet::new()
            .with_state(StateField::Engine, "Ready")
            .with_state(StateField::Mode, "Auto");
        let mut result = CheckResult::new();
        evaluate(&readings, &mut result);

        assert_eq!(texts(&result)[0], (Severity::Unknown, "Breaker: Na"));
        assert_eq!(result.worst_severity(), Severity::Unknown);
    }

    #[test]
    fn missing_state_after_critical_stays_critical() {
        // breaker failure first, then the engine state is missing
        let mut readings = ReadingSet::new()
            .with_state(StateField::Breaker, "GenOper")
            .with_state(StateField::Mode, "Auto");
        readings.insert_state(
            StateField::Engine,
            StateReading {
                name: StateField::Engine.label(),
                value: None,
            },
        );
        let mut result = CheckResult::new();
        evaluate(&readings, &mut result);

        assert_eq!(
            texts(&result),
            vec![
                (Severity::Critical, "Breaker: GenOper"),
                (Severity::Critical, "Engine: Na"),
                (Severity::Ok, "Mode: Auto"),
            ]
        );
        assert_eq!(result.finalize().exit_code, 2);
    }
}
