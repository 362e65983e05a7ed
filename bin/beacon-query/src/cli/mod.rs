pub mod query;

use std::time::Duration;

use clap::Parser;
use query::QueryCommand;
use url::Url;

const DEFAULT_BEACON_API_ENDPOINT: &str = "http://localhost:5052";
const DEFAULT_REQUEST_TIMEOUT: &str = "60";
const DEFAULT_VERBOSITY: u8 = 3;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, global = true, default_value_t = DEFAULT_VERBOSITY)]
    pub verbosity: u8,

    #[arg(
        long,
        global = true,
        env = "BEACON_API_ENDPOINT",
        help = "Set HTTP url of the beacon api endpoint",
        default_value = DEFAULT_BEACON_API_ENDPOINT
    )]
    pub beacon_api_endpoint: Url,

    #[arg(
        long,
        global = true,
        help = "Set HTTP request timeout for beacon api calls, in seconds",
        default_value = DEFAULT_REQUEST_TIMEOUT,
        value_parser = duration_parser
    )]
    pub request_timeout: Duration,

    #[command(subcommand)]
    pub command: QueryCommand,
}

impl Cli {
    /// Log filter directive for the configured verbosity.
    pub fn log_directive(&self) -> &'static str {
        match self.verbosity {
            0 => "error",
            1 => "warn",
            2 | 3 => "info",
            4 => "debug",
            _ => "trace",
        }
    }
}

pub fn duration_parser(duration_string: &str) -> Result<Duration, String> {
    Ok(Duration::from_secs(duration_string.parse().map_err(
        |err| format!("Could not parse the request timeout: {err:?}"),
    )?))
}
