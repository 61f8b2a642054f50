use serde::Serialize;

use super::metric::{FormattedMetric, PerfDataRecord};
use super::severity::Severity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub severity: Severity,
    pub text: String,
}

/// Messages, performance data and the running severity of one check run
#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    messages: Vec<Message>,
    perf_data: Vec<PerfDataRecord>,
    worst: Severity,
}

/// Final outcome handed to the output boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub severity: Severity,
    pub summary: String,
    pub exit_code: i32,
}

impl CheckResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_message(&mut self, severity: Severity, text: impl Into<String>) {
        self.worst = self.worst.combine(severity);
        self.messages.push(Message {
            severity,
            text: text.into(),
        });
    }

    pub fn add_perf_data(&mut self, record: PerfDataRecord) {
        self.perf_data.push(record);
    }

    /// Adds the message and, if any, the performance data of a formatted metric
    pub fn add_metric(&mut self, metric: FormattedMetric) {
        self.add_message(metric.severity, metric.message);
        if let Some(record) = metric.perf_data {
            self.add_perf_data(record);
        }
    }

    /// Worst severity folded with [`Severity::combine`], OK when nothing was added
    pub fn worst_severity(&self) -> Severity {
        self.worst
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn perf_data(&self) -> &[PerfDataRecord] {
        &self.perf_data
    }

    /// One `[STATUS] text` line per message in insertion order, then a
    /// `| ` line with all performance data.
    pub fn finalize(self) -> Verdict {
        let severity = self.worst_severity();

        let mut lines: Vec<String> = self
            .messages
            .iter()
            .map(|m| format!("[{}] {}", m.severity, m.text))
            .collect();

        if !self.perf_data.is_empty() {
            let perf: Vec<String> = self.perf_data.iter().map(|p| p.to_string()).collect();
            lines.push(format!("| {}", perf.join(" ")));
        }

        Verdict {
            severity,
            summary: lines.join("\n"),
            exit_code: severity.exit_code(),
        }
    }
}
