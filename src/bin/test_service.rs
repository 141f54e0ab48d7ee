use anyhow::Result;
use clap::Parser;
use clap_serde_derive::ClapSerde;
use tokio::net::TcpListener;
use tracing::info;

use llm_service::config::{from_toml, TestServiceConfig};
use llm_service::relay::client::LlmClient;
use llm_service::relay::{self, AppState};
use llm_service::telemetry::{init_telemetry, shutdown_telemetry, TelemetryArgs};
use llm_service::{exit_err, shutdown_signal};

#[cfg(unix)]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

const DEFAULT_CONFIG_FILE: &str = "LlmTestService.toml";

#[derive(Parser)]
#[command(author, version, about = "Test harness relaying requests to the LLM service", long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, env, default_value = DEFAULT_CONFIG_FILE)]
    config_file: String,

    #[command(flatten)]
    telemetry: TelemetryArgs,

    /// Configuration options
    #[command(flatten)]
    pub opt_config: <TestServiceConfig as ClapSerde>::Opt,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_telemetry(env!("CARGO_BIN_NAME"), &args.telemetry)?;

    let config = match from_toml::<<TestServiceConfig as ClapSerde>::Opt>(&args.config_file) {
        Ok(conf) => TestServiceConfig::from(conf).merge(args.opt_config),
        Err(err) => {
            if args.config_file == DEFAULT_CONFIG_FILE {
                TestServiceConfig::from(args.opt_config)
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

    let client = LlmClient::new(&config.llm_service_url, config.timeouts())?;
    let state = AppState {
        client,
        llm_service_url: config.llm_service_url,
    };

    let listener = TcpListener::bind(format!("{}:{}", config.address, config.port)).await?;
    info!(
        "Listening on {}, relaying to {}",
        listener.local_addr()?,
        state.client.base_url()
    );

    axum::serve(listener, relay::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    shutdown_telemetry();
    Ok(())
}
