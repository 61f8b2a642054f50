pub mod category;
pub mod metric;
pub mod result;
pub mod severity;
pub mod threshold;

pub use category::ThresholdConfig;
pub use metric::{PerfDataRecord, Thresholds};
pub use result::{CheckResult, Verdict};
pub use severity::Severity;
pub use threshold::{ParseError, ThresholdRule};

use crate::collector::{Category, DeviceError, GeneratorReader};

#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("invalid {kind} threshold: {source}")]
    Threshold {
        kind: &'static str,
        source: ParseError,
    },

    #[error("unexpected unit '{unit}' for {field} in {category} readings")]
    UnexpectedUnit {
        category: Category,
        field: &'static str,
        unit: String,
    },

    #[error(transparent)]
    Device(#[from] DeviceError),
}

/// Fetches the readings of one category and evaluates them.
///
/// Any device failure aborts the check before evaluation starts.
pub async fn run_check<R: GeneratorReader>(
    reader: &mut R,
    category: Category,
    thresholds: &ThresholdConfig,
) -> Result<CheckResult, CheckError> {
    let readings = reader.fetch(category).await?;
    tracing::debug!(%category, fields = readings.len(), ?readings, "readings received");

    category::evaluate(category, &readings, thresholds)
}
