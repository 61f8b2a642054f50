use serde::Serialize;
use std::fmt;

use super::severity::{Severity, evaluate};
use super::threshold::ThresholdRule;
use crate::collector::SensorReading;

/// Warning/critical rule pair for one metric kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub warning: ThresholdRule,
    pub critical: ThresholdRule,
}

impl Thresholds {
    pub fn new(warning: ThresholdRule, critical: ThresholdRule) -> Self {
        Self { warning, critical }
    }

    pub fn evaluate(&self, value: f64) -> Severity {
        evaluate(value, &self.warning, &self.critical)
    }
}

/// How a present reading contributes to the check severity
#[derive(Debug, Clone, Copy)]
pub enum Policy<'a> {
    /// Always evaluated against the thresholds.
    Evaluate(&'a Thresholds),
    /// Raw zero means the generator is not running and is reported OK.
    EvaluateNonZero(&'a Thresholds),
    /// Reported only, always OK.
    Informational,
}

impl Policy<'_> {
    fn thresholds(&self) -> Option<&Thresholds> {
        match *self {
            Policy::Evaluate(t) | Policy::EvaluateNonZero(t) => Some(t),
            Policy::Informational => None,
        }
    }
}

/// Performance data record, rendered as `'label'=value[unit];warn;crit;min;max`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerfDataRecord {
    pub label: String,
    pub value: String,
    pub unit: String,
    pub warn: String,
    pub crit: String,
    pub min: String,
    pub max: String,
}

impl fmt::Display for PerfDataRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}'={}{};{};{};{};{}",
            self.label, self.value, self.unit, self.warn, self.crit, self.min, self.max
        )
    }
}

/// Result of formatting one reading
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedMetric {
    pub severity: Severity,
    pub message: String,
    pub perf_data: Option<PerfDataRecord>,
}

/// Message for a field the device did not return
pub fn not_available(name: &str) -> String {
    format!("{}: Na", name)
}

/// Formats a sensor reading and evaluates it under `policy`.
///
/// Thresholds apply to the raw value. The message shows the value scaled by
/// the divisor, the performance data keeps the raw integer.
pub fn format_metric(reading: &SensorReading, policy: Policy<'_>) -> FormattedMetric {
    let Some(raw) = reading.value else {
        return FormattedMetric {
            severity: Severity::Unknown,
            message: not_available(reading.name),
            perf_data: None,
        };
    };

    let severity = match policy {
        Policy::Evaluate(t) => t.evaluate(raw as f64),
        Policy::EvaluateNonZero(t) if raw != 0 => t.evaluate(raw as f64),
        Policy::EvaluateNonZero(_) | Policy::Informational => Severity::Ok,
    };

    let shown = if reading.divisor > 1 {
        format!("{:.1}", raw as f64 / reading.divisor as f64)
    } else {
        raw.to_string()
    };

    let (warn, crit) = match policy.thresholds() {
        Some(t) => (t.warning.to_string(), t.critical.to_string()),
        None => (String::new(), String::new()),
    };

    FormattedMetric {
        severity,
        message: format!("{}: {}{}", reading.name, shown, reading.unit.label()),
        perf_data: Some(PerfDataRecord {
            label: reading.name.to_string(),
            value: raw.to_string(),
            unit: reading.unit.perf_label().to_string(),
            warn,
            crit,
            min: "0".to_string(),
            max: String::new(),
        }),
    }
}
