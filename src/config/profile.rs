use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::collector::{SensorField, StateField, Unit};
use crate::snmp::parse_oid;

const BUILTIN_PROFILE: &str = include_str!("../../profiles/generator.yaml");

/// OID map of one generator controller model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub sensors: HashMap<SensorField, SensorOid>,
    #[serde(default)]
    pub states: HashMap<StateField, StateOid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorOid {
    pub oid: String,
    pub unit: Unit,
    /// Raw value divided by this gives the displayed value
    #[serde(default = "default_divisor")]
    pub divisor: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateOid {
    pub oid: String,
    /// Integer codes reported by the controller mapped to state names.
    /// String values are used as they are.
    #[serde(default)]
    pub labels: HashMap<i64, String>,
}

fn default_divisor() -> u32 {
    1
}

impl Profile {
    pub fn load(path: &str) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).context(format!("cannot read profile: {}", path))?;

        Self::from_yaml(&content).context(format!("invalid profile: {}", path))
    }

    /// Profile shipped with the plugin
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_PROFILE).context("invalid built-in profile")
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let profile: Profile = serde_yml::from_str(content).context("cannot parse YAML")?;
        profile.validate()?;
        Ok(profile)
    }

    fn validate(&self) -> Result<()> {
        if self.sensors.is_empty() && self.states.is_empty() {
            anyhow::bail!("profile '{}' is empty", self.name);
        }

        for (field, sensor) in &self.sensors {
            if sensor.divisor == 0 {
                anyhow::bail!("{}: divisor must be at least 1", field.label());
            }
            parse_oid(&sensor.oid).context(field.label())?;
        }

        for (field, state) in &self.states {
            parse_oid(&state.oid).context(field.label())?;
        }

        Ok(())
    }
}

impl StateOid {
    /// Resolves a raw state value to its name
    pub fn resolve(&self, code: i64) -> String {
        self.labels
            .get(&code)
            .cloned()
            .unwrap_or_else(|| code.to_string())
    }
}
