use serde::Serialize;

use super::PLUGIN_NAME;
use crate::check::result::Message;
use crate::check::{CheckResult, PerfDataRecord, Severity};
use crate::collector::Category;

/// JSON document for consumers that do not parse plugin output
#[derive(Debug, Clone, Serialize)]
pub struct CheckResultJson {
    pub plugin: String,
    pub category: Category,
    pub status: Severity,
    pub exit_code: i32,
    pub timestamp: String,
    pub summary: ResultSummary,
    pub messages: Vec<Message>,
    pub perf_data: Vec<PerfDataRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultSummary {
    pub total_messages: usize,
    pub ok: usize,
    pub warning: usize,
    pub critical: usize,
    pub unknown: usize,
    pub perf_records: usize,
}

/// JSON formatter for check results
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn format_check_result(category: Category, result: &CheckResult) -> CheckResultJson {
        let timestamp = chrono::Utc::now().to_rfc3339();
        let status = result.worst_severity();

        let count = |severity: Severity| {
            result
                .messages()
                .iter()
                .filter(|m| m.severity == severity)
                .count()
        };

        let summary = ResultSummary {
            total_messages: result.messages().len(),
            ok: count(Severity::Ok),
            warning: count(Severity::Warning),
            critical: count(Severity::Critical),
            unknown: count(Severity::Unknown),
            perf_records: result.perf_data().len(),
        };

        CheckResultJson {
            plugin: PLUGIN_NAME.to_string(),
            category,
            status,
            exit_code: status.exit_code(),
            timestamp,
            summary,
            messages: result.messages().to_vec(),
            perf_data: result.perf_data().to_vec(),
        }
    }

    /// Serializes the result into a pretty printed JSON string
    pub fn to_json_string(category: Category, result: &CheckResult) -> anyhow::Result<String> {
        let json_result = Self::format_check_result(category, result);
        serde_json::to_string_pretty(&json_result)
            .map_err(|e| anyhow::anyhow!("JSON serialization failed: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::metric::{Policy, format_metric};
    use crate::collector::{SensorField, SensorReading, Unit};

    #[test]
    fn document_shape() {
        let mut result = CheckResult::new();
        result.add_metric(format_metric(
            &SensorReading::present(SensorField::RunningHours, Unit::Hours, 10, 15234),
            Policy::Informational,
        ));
        result.add_message(Severity::Unknown, "Number of Starts: Na");

        let json = JsonFormatter::to_json_string(Category::Engine, &result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["plugin"], "GEN");
        assert_eq!(value["category"], "engine");
        assert_eq!(value["status"], "UNKNOWN");
        assert_eq!(value["exit_code"], 3);
        assert_eq!(value["summary"]["total_messages"], 2);
        assert_eq!(value["summary"]["unknown"], 1);
        assert_eq!(value["messages"][0]["severity"], "OK");
        assert_eq!(value["messages"][0]["text"], "Running Hours: 1523.4h");
        assert_eq!(value["perf_data"][0]["value"], "15234");
        assert!(value["timestamp"].as_str().is_some());
    }
}
