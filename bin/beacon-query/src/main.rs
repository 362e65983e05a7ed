use std::{env, process};

use anyhow::Context;
use beacon_query::{cli::Cli, command::run_query};
use beacon_query_client::{ClientWithBaseUrl, RequestContext};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const EXIT_NOT_FOUND: i32 = 1;
const EXIT_FAILURE: i32 = 2;

/// Entry point for the beacon-query client. Initializes logging, parses CLI arguments and runs
/// a single query against the configured beacon node. Ctrl-C cancels the in-flight request.
fn main() {
    let cli = Cli::parse();

    // Set the default log level based on verbosity flag or RUST_LOG env var
    let rust_log = env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let env_filter = match rust_log.is_empty() {
        true => EnvFilter::builder().parse_lossy(cli.log_directive()),
        false => EnvFilter::builder().parse_lossy(rust_log),
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            error!("{err:#}");
            EXIT_FAILURE
        }
    };

    process::exit(exit_code);
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Unable to create tokio runtime")?;

    runtime.block_on(async {
        let client = ClientWithBaseUrl::new(cli.beacon_api_endpoint.clone(), cli.request_timeout)
            .context("Failed to build HTTP client")?;
        let ctx = RequestContext::new();

        let ctrl_c = {
            let ctx = ctx.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    info!("Ctrl-C received, cancelling request...");
                    ctx.cancel();
                }
            })
        };

        info!("Querying {}", cli.beacon_api_endpoint);
        let result = run_query(&ctx, &client, &cli.command).await;
        ctrl_c.abort();

        match result.context("Beacon API request failed")? {
            Some(value) => {
                println!("{}", serde_json::to_string_pretty(&value)?);
                Ok(0)
            }
            None => {
                warn!("Resource not found");
                Ok(EXIT_NOT_FOUND)
            }
        }
    })
}
