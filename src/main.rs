use anyhow::Result;
use clap::Parser;
use clap_serde_derive::ClapSerde;
use tokio::net::TcpListener;
use tracing::info;

use llm_service::config::{from_toml, LlmServiceConfig};
use llm_service::telemetry::{init_telemetry, shutdown_telemetry, TelemetryArgs};
use llm_service::{exit_err, llm, shutdown_signal};

#[cfg(unix)]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

const DEFAULT_CONFIG_FILE: &str = "LlmService.toml";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, env, default_value = DEFAULT_CONFIG_FILE)]
    config_file: String,

    #[command(flatten)]
    telemetry: TelemetryArgs,

    /// Configuration options
    #[command(flatten)]
    pub opt_config: <LlmServiceConfig as ClapSerde>::Opt,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_telemetry(env!("CARGO_BIN_NAME"), &args.telemetry)?;

    let config = match from_toml::<<LlmServiceConfig as ClapSerde>::Opt>(&args.config_file) {
        Ok(conf) => LlmServiceConfig::from(conf).merge(args.opt_config),
        Err(err) => {
            if args.config_file == DEFAULT_CONFIG_FILE {
                LlmServiceConfig::from(args.opt_config)
            } else {
                exit_err!(
                    1,
                    "Failed to read configuration file {} with error: {}",
                    args.config_file,
                    err
                );
            }
        }
    };

    let listener = TcpListener::bind(format!("{}:{}", config.address, config.port)).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, llm::router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    shutdown_telemetry();
    Ok(())
}
