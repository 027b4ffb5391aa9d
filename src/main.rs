//! Storefront development host
//!
//! Run with: cargo run -- serve
//!
//! Build the client first with `trunk build` in `storefront-ui/`, or use
//! `trunk serve` there, which proxies `/api` the same way.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront::config::{generate_default_config, BackendConfig, Config, LogFormat, LoggingConfig};
use storefront::server::{serve, AppState};

#[derive(Parser)]
#[command(name = "storefront")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Development host for the storefront client")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the client bundle and forward /api to the backend
    Serve {
        /// Address to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Backend address as HOST:PORT
        #[arg(short, long)]
        backend: Option<BackendConfig>,
        /// Directory containing the built client
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Print a default configuration file
    InitConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (host, port, backend, static_dir) = match cli.command {
        Some(Commands::InitConfig) => {
            print!("{}", generate_default_config());
            return Ok(());
        }
        Some(Commands::Serve {
            host,
            port,
            backend,
            static_dir,
        }) => (host, port, backend, static_dir),
        None => (None, None, None, None),
    };

    let mut config = Config::resolve(cli.config.as_deref())?;
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(backend) = backend {
        config.backend = backend;
    }
    if let Some(dir) = static_dir {
        config.server.static_dir = dir;
    }

    init_tracing(&config.logging);

    tracing::info!("Starting storefront v{}", env!("CARGO_PKG_VERSION"));
    tracing::debug!(?config, "Resolved configuration");
    if !config.server.static_dir.join("index.html").exists() {
        tracing::warn!(
            "No index.html in {:?}; run `trunk build` in storefront-ui/ first",
            config.server.static_dir
        );
    }

    let state = AppState::new(&config)?;
    serve(state, &config.server).await?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("storefront={},tower_http=debug", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    match logging.format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }
}
