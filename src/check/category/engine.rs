use super::ThresholdConfig;
use crate::check::metric::{Policy, format_metric, not_available};
use crate::check::result::CheckResult;
use crate::check::severity::Severity;
use crate::collector::{ReadingSet, SensorField};

/// Evaluation order of the engine fields
pub const FIELDS: [SensorField; 5] = [
    SensorField::BatteryVoltage,
    SensorField::CoolantTemperature,
    SensorField::FuelConsumption,
    SensorField::FuelLevel,
    SensorField::RunningHours,
];

fn policy(field: SensorField, thresholds: &ThresholdConfig) -> Policy<'_> {
    match field {
        SensorField::BatteryVoltage => Policy::Evaluate(&thresholds.battery_voltage),
        SensorField::CoolantTemperature => Policy::Evaluate(&thresholds.coolant_temperature),
        SensorField::FuelLevel => Policy::Evaluate(&thresholds.fuel_level),
        _ => Policy::Informational,
    }
}

pub fn evaluate(readings: &ReadingSet, thresholds: &ThresholdConfig, result: &mut CheckResult) {
    for field in FIELDS {
        match readings.sensor(field) {
            Some(reading) => result.add_metric(format_metric(reading, policy(field, thresholds))),
            None => result.add_message(Severity::Unknown, not_available(field.label())),
        }
    }

    // start counter is reported last, outside the sorted block
    let starts = SensorField::NumberOfStarts;
    match readings.sensor(starts).filter(|r| r.is_present()) {
        Some(reading) => result.add_metric(format_metric(reading, Policy::Informational)),
        None => {
            let severity = result.worst_severity().combine(Severity::Unknown);
            result.add_message(severity, not_available(starts.label()));
        }
    }
}
