use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use blog_router::config::{load_config, validate_config, RouterConfig};
use blog_router::routing::{Params, RouteTable};
use blog_router::ViewRegistry;

#[derive(Parser)]
#[command(name = "route-cli")]
#[command(about = "Inspect the blog route table", long_about = None)]
struct Cli {
    /// Route configuration file (TOML). Uses the built-in blog table if omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a path, fragment or URL
    Resolve { path: String },
    /// Build the link to a named route
    Href {
        name: String,
        /// Route params as key=value
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// List routes in match order
    Routes,
    /// Validate the configuration
    Check,
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };

    let registry = ViewRegistry::placeholders(&config);
    let table = RouteTable::from_config(&config.routes, &registry)?;

    match cli.command {
        Commands::Resolve { path } => {
            print_json(&table.resolve(&path))?;
        }
        Commands::Href { name, params } => {
            let params: Params = params.into_iter().collect();
            println!("{}", table.href(&name, &params)?);
        }
        Commands::Routes => {
            let routes: Vec<_> = table
                .routes()
                .map(|r| {
                    json!({
                        "name": r.name,
                        "path": r.path,
                        "view": r.view,
                        "lazy": r.is_deferred(),
                    })
                })
                .collect();
            print_json(&routes)?;
        }
        Commands::Check => {
            // load_config already validated files; the built-in table is checked here
            validate_config(&config).map_err(|errors| {
                errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            })?;
            println!("OK: {} routes", table.len());
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
