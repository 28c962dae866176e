//! Blog router (headless).
//!
//! Installs the router on an in-memory host and replays navigation commands
//! read from stdin, one per line:
//!
//! ```text
//! #/article/42        push a location (URL, fragment or path)
//! replace #/aboutme   replace the current entry
//! back                history back
//! forward             history forward
//! ```
//!
//! Each outcome is printed as a JSON line on stdout; logs go to stderr.

use std::path::PathBuf;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use blog_router::config::{load_config, RouterConfig};
use blog_router::navigation::NavigationOutcome;
use blog_router::observability::logging::init_logging;
use blog_router::{Application, MemoryHost, ViewRegistry};

#[derive(Parser)]
#[command(name = "blog-router")]
#[command(about = "Replay navigations against the blog route table", long_about = None)]
struct Args {
    /// Route configuration file (TOML). Uses the built-in blog table if omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Location opened at startup.
    #[arg(short, long, default_value = "#/")]
    initial: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };
    init_logging(&config.observability)?;

    tracing::info!("blog-router v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        routes = config.routes.len(),
        mount = %config.mount_selector,
        scroll = ?config.scroll.behavior,
        "Configuration loaded"
    );

    let registry = ViewRegistry::placeholders(&config);
    let host = MemoryHost::with_mount_point(config.mount_selector.clone());
    let mut app = Application::install(config, &registry, host, &args.initial).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let navigator = app.navigator_mut();
        let result = match line.split_once(' ') {
            Some(("replace", target)) => navigator.replace(target.trim()).await,
            _ if line == "back" => navigator.back().await,
            _ if line == "forward" => navigator.forward().await,
            _ => navigator.push(line).await,
        };

        match result {
            Ok(outcome) => print_outcome(&outcome)?,
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    tracing::info!("Input closed, exiting");
    Ok(())
}

fn print_outcome(outcome: &NavigationOutcome) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string(outcome)?);
    Ok(())
}
