//! MCP stdio server exposing a fuel delivery controller.

use anyhow::Context as _;
use clap::Parser;
use fdc_client::{FdcClient, FdcConfig};
use fdc_mcp::server::FdcToolServer;
use fdc_mcp::service::FdcService;
use rmcp::ServiceExt as _;
use rmcp::transport::stdio;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "fdc-mcp", about = "MCP server for a fuel delivery controller (FDC)")]
struct Cli {
    /// Base URL of the FDC HTTP service.
    #[arg(long, env = "FDC_BASE_URL", default_value = fdc_client::config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, env = "FDC_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries the MCP transport; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = FdcConfig::new(cli.base_url)
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    tracing::info!(base_url = %config.base_url, "starting FDC MCP server on stdio");

    let client = FdcClient::new(config).context("build FDC client")?;
    let server = FdcToolServer::new(FdcService::new(client));

    let service = server.serve(stdio()).await.context("serve MCP over stdio")?;
    service.waiting().await.context("wait for MCP session")?;
    Ok(())
}
