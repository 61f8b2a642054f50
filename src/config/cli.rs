use clap::Parser;
use std::net::IpAddr;

use crate::check::{CheckError, ThresholdConfig, ThresholdRule, Thresholds};
use crate::collector::Category;
use crate::formatter::OutputFormat;

/// Power generator status plugin for Icinga2 compatible systems
#[derive(Debug, Parser)]
#[command(name = "check-powergen", version, about, disable_version_flag = true)]
pub struct Args {
    /// Print version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,

    /// Generator controller IP address
    #[arg(short = 'H', long = "host")]
    pub host: IpAddr,

    /// SNMP port
    #[arg(short = 'P', long, default_value_t = 161)]
    pub port: u16,

    /// SNMP version (1|2)
    #[arg(short = 'V', long = "snmp-version", default_value_t = 2,
          value_parser = clap::value_parser!(u8).range(1..=2))]
    pub snmp_version: u8,

    /// SNMP community
    #[arg(short = 'u', long, env = "POWERGEN_COMMUNITY", default_value = "public",
          hide_env_values = true)]
    pub community: String,

    /// Check type
    #[arg(short = 't', long = "type", value_enum)]
    pub category: Category,

    /// Timeout for a single SNMP request in seconds
    #[arg(long, env = "POWERGEN_TIMEOUT")]
    pub timeout: Option<u64>,

    /// YAML OID profile, the built-in profile is used when omitted
    #[arg(long)]
    pub profile: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Print debug info to stderr
    #[arg(short = 'd', long)]
    pub debug: bool,

    #[command(flatten)]
    pub thresholds: ThresholdArgs,
}

/// Threshold options, `N` for an upper bound or `N:M` for an allowed range
#[derive(Debug, Clone, clap::Args)]
pub struct ThresholdArgs {
    /// Warning level for mains and gen. voltage (V). Type electrical
    #[arg(long = "wv", default_value = "215:245")]
    pub warn_voltage: String,
    /// Critical level for mains and gen. voltage (V). Type electrical
    #[arg(long = "cv", default_value = "210:250")]
    pub crit_voltage: String,
    /// Warning level for gen. current (A). Type electrical
    #[arg(long = "wc", default_value = "24")]
    pub warn_current: String,
    /// Critical level for gen. current (A). Type electrical
    #[arg(long = "cc", default_value = "27")]
    pub crit_current: String,
    /// Warning level for gen. power (kW). Type electrical
    #[arg(long = "wp", default_value = "13")]
    pub warn_power: String,
    /// Critical level for gen. power (kW). Type electrical
    #[arg(long = "cp", default_value = "15")]
    pub crit_power: String,
    /// Warning level for gen. frequency (Hz). Type electrical
    #[arg(long = "wf", default_value = "48:52")]
    pub warn_frequency: String,
    /// Critical level for gen. frequency (Hz). Type electrical
    #[arg(long = "cf", default_value = "46:54")]
    pub crit_frequency: String,
    /// Warning level for battery voltage (V*10). Type engine
    #[arg(long = "wb", default_value = "130:145")]
    pub warn_battery: String,
    /// Critical level for battery voltage (V*10). Type engine
    #[arg(long = "cb", default_value = "120:155")]
    pub crit_battery: String,
    /// Warning level for fuel level (%). Type engine
    #[arg(long = "wl", default_value = "20:100")]
    pub warn_fuel: String,
    /// Critical level for fuel level (%). Type engine
    #[arg(long = "cl", default_value = "10:100")]
    pub crit_fuel: String,
    /// Warning level for coolant temperature (°C). Type engine
    #[arg(long = "wt", default_value = "98")]
    pub warn_coolant: String,
    /// Critical level for coolant temperature (°C). Type engine
    #[arg(long = "ct", default_value = "104")]
    pub crit_coolant: String,
}

fn pair(kind: &'static str, warn: &str, crit: &str) -> Result<Thresholds, CheckError> {
    let parse = |s: &str| {
        s.parse::<ThresholdRule>()
            .map_err(|source| CheckError::Threshold { kind, source })
    };
    Ok(Thresholds::new(parse(warn)?, parse(crit)?))
}

impl ThresholdArgs {
    /// Parses every threshold, failing on the first malformed one
    pub fn to_config(&self) -> Result<ThresholdConfig, CheckError> {
        Ok(ThresholdConfig {
            voltage: pair("voltage", &self.warn_voltage, &self.crit_voltage)?,
            current: pair("current", &self.warn_current, &self.crit_current)?,
            power: pair("power", &self.warn_power, &self.crit_power)?,
            frequency: pair("frequency", &self.warn_frequency, &self.crit_frequency)?,
            battery_voltage: pair("battery voltage", &self.warn_battery, &self.crit_battery)?,
            fuel_level: pair("fuel level", &self.warn_fuel, &self.crit_fuel)?,
            coolant_temperature: pair("coolant temperature", &self.warn_coolant, &self.crit_coolant)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::ParseError;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("check-powergen").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_is_consistent() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn default_thresholds_match_config_defaults() {
        let args = parse(&["-H", "10.0.0.5", "-t", "engine"]);
        assert_eq!(args.thresholds.to_config().unwrap(), ThresholdConfig::default());
        assert_eq!(args.category, Category::Engine);
        assert_eq!(args.snmp_version, 2);
        assert_eq!(args.port, 161);
    }

    #[test]
    fn threshold_flags_override_defaults() {
        let args = parse(&["-H", "10.0.0.5", "-t", "electrical", "--wc", "20", "--cf", "45:55"]);
        let config = args.thresholds.to_config().unwrap();
        assert_eq!(config.current.warning, ThresholdRule::Bound(20.0));
        assert_eq!(config.frequency.critical, ThresholdRule::Range(45.0, 55.0));
    }

    #[test]
    fn malformed_threshold_names_the_metric() {
        let args = parse(&["-H", "10.0.0.5", "-t", "engine", "--wt", "1:2:3"]);
        let err = args.thresholds.to_config().unwrap_err();
        assert!(matches!(
            err,
            CheckError::Threshold {
                kind: "coolant temperature",
                source: ParseError::TooManyColons(_),
            }
        ));
    }

    #[test]
    fn host_must_be_an_ip_address() {
        let result = Args::try_parse_from(["check-powergen", "-H", "genset.local", "-t", "common"]);
        assert!(result.is_err());
    }

    #[test]
    fn unsupported_snmp_version_is_rejected() {
        let result = Args::try_parse_from(["check-powergen", "-H", "10.0.0.5", "-t", "common", "-V", "3"]);
        assert!(result.is_err());
    }
}
