//! Stratus CLI - call Kendra and Amazon Location from the shell.
//!
//! Every command prints the operation output as pretty JSON on stdout. Logs
//! go to stderr.
//!
//! # Usage
//!
//! ```text
//! stratus kendra query --index-id 0123 "how do I reset my password"
//! stratus --endpoint-url http://localhost:4566 location list-maps
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `AWS_REGION` | `us-east-1` | Region, overridden by `--region` |
//! | `AWS_ENDPOINT_URL` | *(unset)* | Endpoint override, overridden by `--endpoint-url` |
//! | `AWS_ENDPOINT_URL_KENDRA` / `AWS_ENDPOINT_URL_LOCATION` | *(unset)* | Per-service endpoint override |
//! | `AWS_DISABLE_HOST_PREFIX_INJECTION` | `false` | Do not prepend operation host prefixes |
//! | `LOG_LEVEL` | `warn` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

mod kendra;
mod location;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use stratus_core::{AwsRegion, ClientConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "stratus", version, about = "Call Kendra and Amazon Location")]
struct Cli {
    /// Send requests to this endpoint instead of the regional AWS one.
    #[arg(long, global = true)]
    endpoint_url: Option<String>,

    /// AWS region.
    #[arg(long, global = true)]
    region: Option<String>,

    /// Do not prepend operation host prefixes (`routes.`, `cp.maps.`, ...).
    #[arg(long, global = true)]
    no_host_prefix: bool,

    /// Log level filter, used when `RUST_LOG` is unset.
    #[arg(long, global = true, env = "LOG_LEVEL", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    service: Service,
}

#[derive(Debug, Subcommand)]
enum Service {
    /// Kendra frontend service.
    Kendra {
        #[command(subcommand)]
        command: kendra::KendraCommand,
    },
    /// Amazon Location service.
    Location {
        #[command(subcommand)]
        command: location::LocationCommand,
    },
}

impl Cli {
    /// Environment configuration with the command line overrides applied.
    fn client_config(&self, service_env_id: &str) -> ClientConfig {
        let mut config = ClientConfig::from_env()
            .with_service_endpoint(service_env_id, |key| std::env::var(key).ok());
        if let Some(url) = &self.endpoint_url {
            config.endpoint_url = Some(url.clone());
        }
        if let Some(region) = &self.region {
            config.region = AwsRegion::new(region.as_str());
        }
        if self.no_host_prefix {
            config.host_prefix_injection = false;
        }
        debug!(
            region = %config.region,
            endpoint = config.endpoint_url.as_deref().unwrap_or("-"),
            host_prefix = config.host_prefix_injection,
            "resolved client configuration"
        );
        config
    }
}

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to `--log-level`.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("failed to render output")?;
    println!("{out}");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    match &cli.service {
        Service::Kendra { command } => {
            let config = cli.client_config(&stratus_kendra::marshall::METADATA.env_id());
            kendra::run(config, command).await
        }
        Service::Location { command } => {
            let config = cli.client_config(&stratus_location::marshall::METADATA.env_id());
            location::run(config, command).await
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_should_have_valid_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_should_apply_command_line_overrides() {
        let cli = Cli::try_parse_from([
            "stratus",
            "--endpoint-url",
            "http://localhost:4566",
            "--region",
            "eu-west-1",
            "--no-host-prefix",
            "location",
            "list-maps",
        ])
        .unwrap();

        let config = cli.client_config("LOCATION");
        assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:4566"));
        assert_eq!(config.region.as_str(), "eu-west-1");
        assert!(!config.host_prefix_injection);
    }

    #[test]
    fn test_should_accept_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "stratus",
            "kendra",
            "list-indices",
            "--region",
            "ap-southeast-2",
        ])
        .unwrap();
        assert_eq!(cli.region.as_deref(), Some("ap-southeast-2"));
        assert!(matches!(cli.service, Service::Kendra { .. }));
    }
}
