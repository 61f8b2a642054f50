use super::metric::Thresholds;
use super::result::CheckResult;
use super::threshold::ThresholdRule;
use super::CheckError;
use crate::collector::{Category, ReadingSet};

pub mod common;
pub mod electrical;
pub mod engine;

/// Warning/critical pairs for every metric kind the checks evaluate
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdConfig {
    pub voltage: Thresholds,
    pub current: Thresholds,
    pub power: Thresholds,
    pub frequency: Thresholds,
    /// Raw controller units, tenths of a volt
    pub battery_voltage: Thresholds,
    pub fuel_level: Thresholds,
    pub coolant_temperature: Thresholds,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        use ThresholdRule::{Bound, Range};

        Self {
            voltage: Thresholds::new(Range(215.0, 245.0), Range(210.0, 250.0)),
            current: Thresholds::new(Bound(24.0), Bound(27.0)),
            power: Thresholds::new(Bound(13.0), Bound(15.0)),
            frequency: Thresholds::new(Range(48.0, 52.0), Range(46.0, 54.0)),
            battery_voltage: Thresholds::new(Range(130.0, 145.0), Range(120.0, 155.0)),
            fuel_level: Thresholds::new(Range(20.0, 100.0), Range(10.0, 100.0)),
            coolant_temperature: Thresholds::new(Bound(98.0), Bound(104.0)),
        }
    }
}

/// Evaluates one category into a fresh result.
///
/// On error nothing of the category is returned.
pub fn evaluate(
    category: Category,
    readings: &ReadingSet,
    thresholds: &ThresholdConfig,
) -> Result<CheckResult, CheckError> {
    let mut result = CheckResult::new();

    match category {
        Category::Common => common::evaluate(readings, &mut result),
        Category::Electrical => electrical::evaluate(readings, thresholds, &mut result)?,
        Category::Engine => engine::evaluate(readings, thresholds, &mut result),
    }

    tracing::debug!(
        %category,
        messages = result.messages().len(),
        severity = %result.worst_severity(),
        "category evaluated"
    );

    Ok(result)
}
