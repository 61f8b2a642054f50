use tokio::time::{Duration, timeout};

use crate::config::Profile;
use crate::snmp::{RawValue, SnmpClient, parse_oid};

pub mod types;

pub use types::{
    Category, ReadingSet, SensorField, SensorReading, StateField, StateReading, Unit,
};

/// Failure talking to the generator controller. Aborts the whole check.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    #[error("SNMP session to {target} failed: {reason}")]
    Session { target: String, reason: String },

    #[error("SNMP request for {field} failed: {reason}")]
    Request { field: &'static str, reason: String },

    #[error("SNMP request timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("profile entry for {field} is invalid: {reason}")]
    Profile { field: &'static str, reason: String },
}

/// Source of generator readings
pub trait GeneratorReader {
    /// Reads every field of `category`. Fields the device does not return
    /// are absent from the set or carry no value.
    async fn fetch(&mut self, category: Category) -> Result<ReadingSet, DeviceError>;
}

/// Reads generator fields over SNMP using the OIDs of a device profile
pub struct SnmpCollector {
    client: SnmpClient,
    profile: Profile,
    timeout: Duration,
}

impl SnmpCollector {
    pub fn new(client: SnmpClient, profile: Profile, timeout: Duration) -> Self {
        Self {
            client,
            profile,
            timeout,
        }
    }

    /// GETs one OID, bounded by the configured timeout
    async fn get_value(
        client: &mut SnmpClient,
        field: &'static str,
        oid_str: &str,
        timeout_duration: Duration,
    ) -> Result<RawValue, DeviceError> {
        let oid = parse_oid(oid_str).map_err(|e| DeviceError::Profile {
            field,
            reason: format!("{:#}", e),
        })?;

        match timeout(timeout_duration, client.get(&oid)).await {
            Ok(Ok(value)) => {
                tracing::trace!(field, oid = oid_str, ?value, "SNMP value");
                Ok(value)
            }
            Ok(Err(e)) => Err(DeviceError::Request {
                field,
                reason: format!("{:#}", e),
            }),
            Err(_) => Err(DeviceError::Timeout {
                secs: timeout_duration.as_secs(),
            }),
        }
    }

    /// Collects the numeric sensors of one category
    async fn collect_sensors(&mut self, category: Category) -> Result<ReadingSet, DeviceError> {
        let mut readings = ReadingSet::new();

        let fields = self
            .profile
            .sensors
            .iter()
            .filter(|(field, _)| field.category() == category);

        for (field, sensor) in fields {
            let value =
                Self::get_value(&mut self.client, field.label(), &sensor.oid, self.timeout).await?;

            let reading = match value.as_integer() {
                Some(raw) => SensorReading::present(*field, sensor.unit, sensor.divisor, raw),
                None => {
                    tracing::debug!(field = field.label(), ?value, "sensor not available");
                    SensorReading::absent(*field, sensor.unit)
                }
            };
            readings.insert_sensor(*field, reading);
        }

        Ok(readings)
    }

    /// Collects the enumerated controller states
    async fn collect_states(&mut self) -> Result<ReadingSet, DeviceError> {
        let mut readings = ReadingSet::new();

        for (field, state) in &self.profile.states {
            let value =
                Self::get_value(&mut self.client, field.label(), &state.oid, self.timeout).await?;

            let resolved = match value {
                RawValue::Integer(code) => Some(state.resolve(code)),
                RawValue::Text(text) if !text.is_empty() => Some(text),
                _ => None,
            };
            readings.insert_state(
                *field,
                StateReading {
                    name: field.label(),
                    value: resolved,
                },
            );
        }

        Ok(readings)
    }
}

impl GeneratorReader for SnmpCollector {
    async fn fetch(&mut self, category: Category) -> Result<ReadingSet, DeviceError> {
        tracing::debug!(%category, profile = %self.profile.name, "collecting generator info");

        match category {
            Category::Common => self.collect_states().await,
            Category::Electrical | Category::Engine => self.collect_sensors(category).await,
        }
    }
}
