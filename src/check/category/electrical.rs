use super::ThresholdConfig;
use crate::check::CheckError;
use crate::check::metric::{Policy, Thresholds, format_metric, not_available};
use crate::check::result::CheckResult;
use crate::check::severity::Severity;
use crate::collector::{Category, ReadingSet, SensorField, Unit};

/// Which side of the transfer switch a reading belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Supply {
    Mains,
    Generator,
}

/// Evaluation order of the electrical fields
pub const FIELDS: [(SensorField, Supply); 11] = [
    (SensorField::GenCurrentL1, Supply::Generator),
    (SensorField::GenCurrentL2, Supply::Generator),
    (SensorField::GenCurrentL3, Supply::Generator),
    (SensorField::GenFrequency, Supply::Generator),
    (SensorField::GenPower, Supply::Generator),
    (SensorField::GenVoltageL1, Supply::Generator),
    (SensorField::GenVoltageL2, Supply::Generator),
    (SensorField::GenVoltageL3, Supply::Generator),
    (SensorField::MainsVoltageL1, Supply::Mains),
    (SensorField::MainsVoltageL2, Supply::Mains),
    (SensorField::MainsVoltageL3, Supply::Mains),
];

/// Mains is always monitored. A generator that is not running reads zero,
/// which is not an alarm.
fn supply_policy(thresholds: &Thresholds, supply: Supply) -> Policy<'_> {
    match supply {
        Supply::Mains => Policy::Evaluate(thresholds),
        Supply::Generator => Policy::EvaluateNonZero(thresholds),
    }
}

/// Routes every field by its unit. Voltage and frequency readings of zero on
/// the generator side are OK, current and power are always evaluated.
pub fn evaluate(
    readings: &ReadingSet,
    thresholds: &ThresholdConfig,
    result: &mut CheckResult,
) -> Result<(), CheckError> {
    for (field, supply) in FIELDS {
        let Some(reading) = readings.sensor(field) else {
            result.add_message(Severity::Unknown, not_available(field.label()));
            continue;
        };

        let policy = match reading.unit {
            Unit::Volt => supply_policy(&thresholds.voltage, supply),
            Unit::Hertz => supply_policy(&thresholds.frequency, supply),
            Unit::Amp => Policy::Evaluate(&thresholds.current),
            Unit::Watt | Unit::KiloWatt => Policy::Evaluate(&thresholds.power),
            unit => {
                return Err(CheckError::UnexpectedUnit {
                    category: Category::Electrical,
                    field: field.label(),
                    unit: unit.label().to_string(),
                });
            }
        };

        result.add_metric(format_metric(reading, policy));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::SensorReading;

    fn running_generator() -> ReadingSet {
        let mut set = ReadingSet::new();
        for field in [
            SensorField::MainsVoltageL1,
            SensorField::MainsVoltageL2,
            SensorField::MainsVoltageL3,
            SensorField::GenVoltageL1,
            SensorField::GenVoltageL2,
            SensorField::GenVoltageL3,
        ] {
            set = set.with_sensor(field, Unit::Volt, 1, 230);
        }
        for field in [
            SensorField::GenCurrentL1,
            SensorField::GenCurrentL2,
            SensorField::GenCurrentL3,
        ] {
            set = set.with_sensor(field, Unit::Amp, 1, 12);
        }
        set.with_sensor(SensorField::GenPower, Unit::KiloWatt, 1, 8)
            .with_sensor(SensorField::GenFrequency, Unit::Hertz, 1, 50)
    }

    fn run(readings: &ReadingSet) -> Result<CheckResult, CheckError> {
        let mut result = CheckResult::new();
        evaluate(readings, &ThresholdConfig::default(), &mut result)?;
        Ok(result)
    }

    fn severity_of(result: &CheckResult, prefix: &str) -> Severity {
        result
            .messages()
            .iter()
            .find(|m| m.text.starts_with(prefix))
            .map(|m| m.severity)
            .unwrap()
    }

    #[test]
    fn fields_are_in_display_name_order() {
        let labels: Vec<&str> = FIELDS.iter().map(|(f, _)| f.label()).collect();
        let mut sorted = labels.clone();
        sorted.sort();
        assert_eq!(labels, sorted);
    }

    #[test]
    fn running_generator_is_ok() {
        let result = run(&running_generator()).unwrap();
        assert_eq!(result.messages().len(), 11);
        assert_eq!(result.perf_data().len(), 11);
        assert_eq!(result.messages()[0].text, "Gen Current L1: 12A");
        assert_eq!(result.messages()[3].text, "Gen Frequency: 50Hz");
        assert_eq!(result.messages()[4].text, "Gen Power: 8kW");
        assert_eq!(result.worst_severity(), Severity::Ok);
    }

    #[test]
    fn stopped_generator_zero_is_ok() {
        let mut readings = running_generator()
            .with_sensor(SensorField::GenFrequency, Unit::Hertz, 10, 0);
        for field in [
            SensorField::GenVoltageL1,
            SensorField::GenVoltageL2,
            SensorField::GenVoltageL3,
        ] {
            readings = readings.with_sensor(field, Unit::Volt, 1, 0);
        }

        let result = run(&readings).unwrap();
        assert_eq!(severity_of(&result, "Gen Frequency"), Severity::Ok);
        assert_eq!(severity_of(&result, "Gen Voltage L1"), Severity::Ok);
        assert!(
            result
                .messages()
                .iter()
                .any(|m| m.text == "Gen Frequency: 0.0Hz")
        );
        assert_eq!(result.worst_severity(), Severity::Ok);
    }

    #[test]
    fn mains_zero_is_critical() {
        let readings = running_generator().with_sensor(SensorField::MainsVoltageL2, Unit::Volt, 1, 0);
        let result = run(&readings).unwrap();
        assert_eq!(severity_of(&result, "Mains Voltage L2"), Severity::Critical);
        assert_eq!(result.worst_severity(), Severity::Critical);
    }

    #[test]
    fn zero_current_and_power_are_evaluated() {
        let thresholds = ThresholdConfig {
            current: Thresholds::new("5:30".parse().unwrap(), "2:40".parse().unwrap()),
            power: Thresholds::new("1:13".parse().unwrap(), "15".parse().unwrap()),
            ..ThresholdConfig::default()
        };
        let readings = running_generator()
            .with_sensor(SensorField::GenCurrentL1, Unit::Amp, 1, 0)
            .with_sensor(SensorField::GenPower, Unit::KiloWatt, 1, 0);

        let mut result = CheckResult::new();
        evaluate(&readings, &thresholds, &mut result).unwrap();
        assert_eq!(severity_of(&result, "Gen Current L1"), Severity::Critical);
        assert_eq!(severity_of(&result, "Gen Power"), Severity::Warning);
    }

    #[test]
    fn overload_raises_warning_and_critical() {
        let readings = running_generator()
            .with_sensor(SensorField::GenCurrentL1, Unit::Amp, 1, 25)
            .with_sensor(SensorField::GenCurrentL3, Unit::Amp, 1, 30);
        let result = run(&readings).unwrap();
        assert_eq!(severity_of(&result, "Gen Current L1"), Severity::Warning);
        assert_eq!(severity_of(&result, "Gen Current L3"), Severity::Critical);
        assert_eq!(result.finalize().exit_code, 2);
    }

    #[test]
    fn missing_field_is_unknown() {
        let mut readings = running_generator();
        readings.insert_sensor(
            SensorField::GenPower,
            SensorReading::absent(SensorField::GenPower, Unit::KiloWatt),
        );
        let result = run(&readings).unwrap();
        assert_eq!(result.messages()[4].text, "Gen Power: Na");
        assert_eq!(result.messages()[4].severity, Severity::Unknown);
        assert_eq!(result.perf_data().len(), 10);
        assert_eq!(result.worst_severity(), Severity::Unknown);
    }

    #[test]
    fn unexpected_unit_aborts() {
        let readings = running_generator().with_sensor(SensorField::GenPower, Unit::Percent, 1, 80);
        let err = run(&readings).unwrap_err();
        assert!(matches!(
            err,
            CheckError::UnexpectedUnit { field: "Gen Power", .. }
        ));
    }
}
