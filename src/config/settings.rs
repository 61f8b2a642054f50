use crate::snmp::SnmpVersion;

/// Base connection settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub connection: ConnectionSettings,
    pub auth: AuthSettings,
}

#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    pub port: u16,
    /// Timeout for a single SNMP request (seconds)
    pub timeout: u64,
}

#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub version: SnmpVersion,
    pub community: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            connection: ConnectionSettings {
                port: 161,
                timeout: 10,
            },
            auth: AuthSettings {
                version: SnmpVersion::V2c,
                community: "public".to_string(),
            },
        }
    }
}
