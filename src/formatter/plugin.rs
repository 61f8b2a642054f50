use std::fmt::Display;

use super::PLUGIN_NAME;
use crate::check::{Severity, Verdict};

/// Renders plugin output in the Icinga/Nagios format
pub struct PluginFormatter;

impl PluginFormatter {
    /// `GEN <STATUS>` header followed by the verdict summary
    pub fn render(verdict: &Verdict) -> String {
        if verdict.summary.is_empty() {
            format!("{} {}", PLUGIN_NAME, verdict.severity)
        } else {
            format!("{} {}\n{}", PLUGIN_NAME, verdict.severity, verdict.summary)
        }
    }

    /// Single line for a check that could not produce a verdict
    pub fn render_error(error: &impl Display) -> String {
        format!("{} {} - {}", PLUGIN_NAME, Severity::Unknown, error)
    }
}
