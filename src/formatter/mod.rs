pub mod json;
pub mod plugin;

pub use json::JsonFormatter;
pub use plugin::PluginFormatter;

/// Check prefix shown in front of the status
pub const PLUGIN_NAME: &str = "GEN";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Icinga/Nagios plugin output
    Text,
    /// Structured JSON document
    Json,
}
