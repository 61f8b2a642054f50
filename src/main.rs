use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod check;
mod collector;
mod config;
mod formatter;
mod snmp;

use check::Severity;
use collector::{DeviceError, SnmpCollector};
use config::{AppConfig, Args};
use formatter::{JsonFormatter, OutputFormat, PluginFormatter};

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version go to stdout and exit 0
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(Severity::Unknown.exit_code());
        }
    };

    init_tracing(args.debug);

    let exit_code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            println!("{}", PluginFormatter::render_error(&format!("{:#}", e)));
            Severity::Unknown.exit_code()
        }
    };

    std::process::exit(exit_code);
}

/// Logs go to stderr, stdout carries the plugin output only
fn init_tracing(debug: bool) {
    let default_filter = if debug {
        "check_powergen=debug"
    } else {
        "check_powergen=warn"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(args: Args) -> Result<i32> {
    let config = AppConfig::from_args(args)?;
    config.debug_config();

    let mut collector = create_collector(&config).await?;
    let result = check::run_check(&mut collector, config.category, &config.thresholds)
        .await
        .context(format!("{} check failed", config.category))?;

    let exit_code = match config.output {
        OutputFormat::Text => {
            let verdict = result.finalize();
            println!("{}", PluginFormatter::render(&verdict));
            verdict.exit_code
        }
        OutputFormat::Json => {
            println!("{}", JsonFormatter::to_json_string(config.category, &result)?);
            result.worst_severity().exit_code()
        }
    };

    Ok(exit_code)
}

/// Opens the SNMP session to the controller
async fn create_collector(config: &AppConfig) -> Result<SnmpCollector, DeviceError> {
    let target = config.get_target();

    let client = snmp::SnmpClient::connect(
        &target,
        config.settings.auth.version,
        &config.get_community(),
    )
    .await
    .map_err(|e| DeviceError::Session {
        target: target.clone(),
        reason: format!("{:#}", e),
    })?;

    Ok(SnmpCollector::new(
        client,
        config.profile.clone(),
        config.get_timeout(),
    ))
}
