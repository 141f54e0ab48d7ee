use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use reqwest::{StatusCode, Url};
use serde::Deserialize;

use llm_service::api::HealthStatus;

/// Container health probe for the LLM service and the test service.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Health endpoint to check, e.g. http://localhost:8000/health
    #[arg(env = "HEALTHCHECK_URL", default_value = "http://localhost:8000/health")]
    url: Url,

    /// Request timeout in seconds
    #[arg(short, long, default_value = "5")]
    timeout_secs: u64,

    /// Also accept a degraded test service, whose LLM service is down
    #[arg(long)]
    allow_degraded: bool,
}

#[derive(Deserialize)]
struct Health {
    status: HealthStatus,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let client = match reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(args.timeout_secs))
        .build()
    {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Failed to build HTTP client: {err}");
            return ExitCode::FAILURE;
        }
    };

    let res = match client.get(args.url.clone()).send() {
        Ok(res) => res,
        Err(err) => {
            eprintln!("Request to {} failed: {err}", args.url);
            return ExitCode::FAILURE;
        }
    };
    if res.status() != StatusCode::OK {
        eprintln!("{} answered {}", args.url, res.status());
        return ExitCode::FAILURE;
    }

    match res.json::<Health>() {
        Ok(Health {
            status: HealthStatus::Healthy,
        }) => ExitCode::SUCCESS,
        Ok(Health {
            status: HealthStatus::Degraded,
        }) if args.allow_degraded => ExitCode::SUCCESS,
        Ok(Health { status }) => {
            eprintln!("{} reports {:?}", args.url, status);
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Invalid health response from {}: {err}", args.url);
            ExitCode::FAILURE
        }
    }
}
