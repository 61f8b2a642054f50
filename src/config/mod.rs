use anyhow::Result;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use crate::check::ThresholdConfig;
use crate::collector::Category;
use crate::formatter::OutputFormat;
use crate::snmp::SnmpVersion;

pub mod cli;
pub mod profile;
pub mod settings;

pub use cli::Args;
pub use profile::Profile;
pub use settings::Settings;

/// Everything one check run needs, resolved from the command line
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub category: Category,
    pub output: OutputFormat,
    /// OID profile of the controller
    pub profile: Profile,
    pub settings: Settings,
    pub thresholds: ThresholdConfig,
}

impl AppConfig {
    /// Thresholds are parsed first so a malformed one fails before any
    /// device I/O.
    pub fn from_args(args: Args) -> Result<Self> {
        let thresholds = args.thresholds.to_config()?;

        let profile = match &args.profile {
            Some(path) => Profile::load(path)?,
            None => Profile::builtin()?,
        };

        let mut settings = Settings::default();
        settings.connection.port = args.port;
        settings.auth.version = SnmpVersion::try_from(args.snmp_version)?;
        settings.auth.community = args.community;
        if let Some(timeout) = args.timeout {
            settings.connection.timeout = timeout;
        }

        Ok(Self {
            host: args.host,
            category: args.category,
            output: args.output,
            profile,
            settings,
            thresholds,
        })
    }

    /// `host:port` of the controller, IPv6 addresses bracketed
    pub fn get_target(&self) -> String {
        SocketAddr::new(self.host, self.settings.connection.port).to_string()
    }

    pub fn get_timeout(&self) -> Duration {
        Duration::from_secs(self.settings.connection.timeout)
    }

    pub fn get_community(&self) -> Vec<u8> {
        self.settings.auth.community.clone().into_bytes()
    }

    pub fn debug_config(&self) {
        tracing::debug!(
            addr = %self.get_target(),
            category = %self.category,
            profile = %self.profile.name,
            timeout_secs = self.settings.connection.timeout,
            sensors = self.profile.sensors.len(),
            states = self.profile.states.len(),
            "configuration loaded"
        );
    }
}
