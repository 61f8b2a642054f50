use anyhow::{Context, Result};
use snmp2::{AsyncSession, Oid, Value};

/// SNMP protocol version used for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnmpVersion {
    V1,
    V2c,
}

impl TryFrom<u8> for SnmpVersion {
    type Error = anyhow::Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(SnmpVersion::V1),
            2 => Ok(SnmpVersion::V2c),
            other => anyhow::bail!("unsupported SNMP version {}, expected 1 or 2", other),
        }
    }
}

/// Owned form of a varbind value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    Integer(i64),
    Text(String),
    /// noSuchObject, noSuchInstance, an error status or an unsupported type
    Missing,
}

impl RawValue {
    /// Numeric value. Controllers sometimes report numbers as strings.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            RawValue::Integer(n) => Some(*n),
            RawValue::Text(s) => s.trim().parse().ok(),
            RawValue::Missing => None,
        }
    }
}

impl From<Value<'_>> for RawValue {
    fn from(value: Value<'_>) -> Self {
        match value {
            Value::Integer(n) => RawValue::Integer(n),
            Value::Counter32(n) | Value::Unsigned32(n) | Value::Timeticks(n) => {
                RawValue::Integer(i64::from(n))
            }
            Value::Counter64(n) => i64::try_from(n).map_or(RawValue::Missing, RawValue::Integer),
            Value::OctetString(bytes) => {
                RawValue::Text(String::from_utf8_lossy(bytes).trim().to_string())
            }
            _ => RawValue::Missing,
        }
    }
}

pub struct SnmpClient {
    session: AsyncSession,
}

impl SnmpClient {
    pub async fn connect(target: &str, version: SnmpVersion, community: &[u8]) -> Result<Self> {
        let session = match version {
            SnmpVersion::V1 => AsyncSession::new_v1(target, community, 2).await,
            SnmpVersion::V2c => AsyncSession::new_v2c(target, community, 2).await,
        }
        .context(format!("cannot create SNMP session to {}", target))?;

        Ok(Self { session })
    }

    pub async fn get(&mut self, oid: &Oid<'_>) -> Result<RawValue> {
        let resp = self
            .session
            .get(oid)
            .await
            .context("SNMP GET request failed")?;

        // v1 agents answer unknown OIDs with noSuchName
        if resp.error_status != 0 {
            return Ok(RawValue::Missing);
        }

        let (_, value) = resp
            .varbinds
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("empty SNMP response"))?;

        Ok(RawValue::from(value))
    }
}
