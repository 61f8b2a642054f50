use serde::Serialize;
use std::fmt;

use super::threshold::ThresholdRule;

/// Plugin status level. The discriminant is the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    #[default]
    Ok = 0,
    Warning = 1,
    Critical = 2,
    Unknown = 3,
}

impl Severity {
    pub fn exit_code(self) -> i32 {
        self as i32
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
            Severity::Unknown => "UNKNOWN",
        }
    }

    /// Folds `next` into a running severity.
    ///
    /// The running value only escalates, with one exception: missing data
    /// (UNKNOWN) never replaces an already recorded CRITICAL, even though
    /// UNKNOWN ranks higher.
    pub fn combine(self, next: Severity) -> Severity {
        if self == Severity::Critical && next == Severity::Unknown {
            return Severity::Critical;
        }
        self.max(next)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evaluates a value against independent warning and critical rules.
/// Critical is checked first and wins.
pub fn evaluate(value: f64, warn: &ThresholdRule, crit: &ThresholdRule) -> Severity {
    if crit.is_breached(value) {
        Severity::Critical
    } else if warn.is_breached(value) {
        Severity::Warning
    } else {
        Severity::Ok
    }
}
