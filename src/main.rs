//! Nutrition & Health Assistant (nutriplan)
//!
//! An MCP server for food lookup, daily needs, and sample meal plans.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use nutriplan::build_info;
use nutriplan::config::Config;
use nutriplan::mcp::NutriService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout carries the MCP stream
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nutriplan=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let config = Config::from_env();
    tracing::info!(
        "Fallback targets: {:.0} kcal, {:.0} g protein",
        config.fallback_targets.calories,
        config.fallback_targets.protein_grams
    );

    eprintln!("Starting MCP server on stdio...");

    // One stdio connection, one session
    let service = NutriService::new(config);
    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;

    server.waiting().await?;

    Ok(())
}
