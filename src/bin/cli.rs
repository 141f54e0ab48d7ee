use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use clap::Subcommand;

use llm_service::api::ProcessingRequest;
use llm_service::relay::client::{LlmClient, Timeouts};

#[derive(Parser)]
#[command(author, version, about = "Command line client for the LLM service", long_about = None)]
struct Args {
    /// Base URL of the LLM processing service
    #[arg(short = 'u', long, env, default_value = "http://localhost:8000")]
    llm_service_url: String,

    /// Timeout in seconds for health and discovery calls
    #[arg(long, default_value = "5")]
    health_timeout_secs: u64,

    /// Timeout in seconds for processing calls
    #[arg(long, default_value = "30")]
    process_timeout_secs: u64,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Checks whether the service answers its health endpoint
    Health,
    /// Lists the supported model families
    Models,
    /// Lists the supported platforms
    Platforms,
    /// Submits a processing request and prints the response
    Process {
        /// Platform to target
        #[clap(short, long)]
        platform: String,

        /// Model to use
        #[clap(short, long)]
        model: String,

        /// Natural language prompt
        #[clap(short = 'P', long)]
        prompt: String,

        /// Artifacts passed as context, may be repeated
        #[clap(short, long)]
        artifact: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let timeouts = Timeouts {
        metadata: Duration::from_secs(args.health_timeout_secs),
        process: Duration::from_secs(args.process_timeout_secs),
    };
    let client = LlmClient::new(&args.llm_service_url, timeouts)?;

    match args.cmd {
        Commands::Health => {
            if client.check_health().await {
                println!("LLM service at {} is healthy", client.base_url());
            } else {
                anyhow::bail!("LLM service at {} is unhealthy", client.base_url());
            }
        }
        Commands::Models => {
            for model in client.supported_models().await {
                println!("{model}");
            }
        }
        Commands::Platforms => {
            for platform in client.supported_platforms().await {
                println!("{platform}");
            }
        }
        Commands::Process {
            platform,
            model,
            prompt,
            artifact,
        } => {
            let request = ProcessingRequest {
                artifacts: artifact,
                platform,
                model,
                prompt,
            };
            let response = client.process(&request).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }
    Ok(())
}
