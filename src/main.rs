//! CLI entry point: the tool-invocation boundary.
//!
//! Lists, describes, and calls registered tools. Errors propagated out of
//! the tool layer are converted into `{"success": false, "error": ...}`
//! envelopes here and nowhere deeper.

use clap::{Parser, Subcommand};
use ghl_mcp::api::{GoHighLevelClient, TransportConfig};
use ghl_mcp::auth::StaticTokenProvider;
use ghl_mcp::config::ServerConfig;
use ghl_mcp::mcp::ToolRegistry;
use ghl_mcp::observability::init_default_logging;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::{error, info};

/// GoHighLevel MCP tool server
#[derive(Parser)]
#[command(name = "ghl-mcp")]
#[command(about = "Typed GoHighLevel API client with an MCP tool surface")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered tools
    ListTools,
    /// Show a tool's description and parameter schema
    Describe {
        /// Tool name
        tool: String,
    },
    /// Call a tool with a JSON parameter object
    Call {
        /// Tool name
        tool: String,
        /// Parameters as a JSON object
        #[arg(long, default_value = "{}")]
        params: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_default_logging();

    let config = match load_configuration(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let registry = match build_registry(&config) {
        Ok(registry) => registry,
        Err(e) => {
            error!("Failed to initialize client: {}", e);
            process::exit(1);
        }
    };

    match cli.command {
        Commands::ListTools => {
            for name in registry.list_tools() {
                println!("{name}");
            }
        }
        Commands::Describe { tool } => match registry.describe_tool(&tool) {
            Some(description) => {
                println!("{}: {}", description.name, description.description);
                println!(
                    "{}",
                    serde_json::to_string_pretty(&description.parameters)
                        .unwrap_or_else(|_| "{}".to_string())
                );
            }
            None => {
                error!("Unknown tool: {}", tool);
                process::exit(1);
            }
        },
        Commands::Call { tool, params } => {
            let parameters: Value = match serde_json::from_str(&params) {
                Ok(parameters) => parameters,
                Err(e) => {
                    error!("Invalid JSON parameters: {}", e);
                    process::exit(1);
                }
            };

            info!(tool = %tool, "invoking tool");
            // The invocation boundary: propagated errors become failure
            // envelopes only here.
            let envelope = match registry.execute_tool(&tool, &parameters).await {
                Ok(result) => result,
                Err(e) => json!({ "success": false, "error": e.to_string() }),
            };

            println!(
                "{}",
                serde_json::to_string_pretty(&envelope).unwrap_or_else(|_| "{}".to_string())
            );
        }
    }
}

fn load_configuration(config_path: &Option<PathBuf>) -> Result<ServerConfig, ghl_mcp::GhlError> {
    match config_path {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            Ok(ServerConfig::load_from_file(path)?)
        }
        None => {
            let default_paths = ["ghl-mcp.toml", "config/ghl-mcp.toml"];

            for path_str in default_paths {
                let path = PathBuf::from(path_str);
                if path.exists() {
                    info!("Loading configuration from: {}", path.display());
                    return Ok(ServerConfig::load_from_file(&path)?);
                }
            }

            error!(
                "No configuration file found. Provide one with -c/--config or create ghl-mcp.toml"
            );
            process::exit(1);
        }
    }
}

fn build_registry(config: &ServerConfig) -> Result<ToolRegistry, ghl_mcp::GhlError> {
    let token = config.get_access_token()?;
    let auth = Arc::new(StaticTokenProvider::new(token));
    let client = GoHighLevelClient::new(TransportConfig::from(&config.api), auth)?;
    Ok(ToolRegistry::with_all_tools(Arc::new(client)))
}
