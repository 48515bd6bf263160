//! Macrolog
//!
//! An MCP server for meal and macro tracking.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use macrolog::build_info;
use macrolog::config::Config;
use macrolog::db::{migrations, Database};
use macrolog::mcp::MacrologService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries the MCP transport
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("macrolog=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::log_startup_banner();

    let config = Config::from_env()?;
    info!(path = %config.database_path.display(), "Opening database");

    let database = Database::open(&config.database_path)?;
    let version = database.with_conn(migrations::get_schema_version)?;
    info!(schema_version = version, "Database ready");

    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY not set; AI tools are disabled");
    } else {
        info!(model = %config.gemini_model, "AI tools enabled");
    }

    let service = MacrologService::new(&config, database);

    info!("Starting MCP server on stdio");
    let server = service.serve((stdin(), stdout())).await?;
    server.waiting().await?;

    Ok(())
}
