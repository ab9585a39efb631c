//! Prebid Server status service entry point.

use std::time::Duration;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use prebid_status::api;
use prebid_status::config::{Config, LogFormat};
use prebid_status::probe::{StatusProbe, DEFAULT_PROBE_TIMEOUT};
use prebid_status::utils::shutdown_signal;

/// Prebid Server status service.
#[derive(Parser, Debug)]
#[command(name = "prebid-status")]
#[command(about = "Serves the Prebid Server identity and liveness endpoints")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log output format (text or json).
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve {
        /// HTTP server port, overriding PORT.
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,

    /// Query a running instance's /status endpoint.
    Probe {
        /// Liveness URL; defaults to the configured port on loopback.
        #[arg(long)]
        url: Option<String>,

        /// Request timeout in seconds.
        #[arg(long, default_value_t = DEFAULT_PROBE_TIMEOUT.as_secs())]
        timeout_secs: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Environment errors surface only in the commands that need the config
    let env_config = Config::load();
    let mut log_config = env_config.as_ref().ok().cloned().unwrap_or_default();
    args.apply_to(&mut log_config);

    init_tracing(&log_config);

    match &args.command {
        Some(Command::Serve { port }) => cmd_serve(&args, env_config, *port).await,
        Some(Command::CheckConfig) => cmd_check_config(&args),
        Some(Command::Probe { url, timeout_secs }) => {
            cmd_probe(url.clone(), Duration::from_secs(*timeout_secs)).await
        }
        None => cmd_serve(&args, env_config, None).await,
    }
}

impl Args {
    /// Merge global CLI flags over environment configuration.
    fn apply_to(&self, config: &mut Config) {
        if self.verbose {
            config.verbose = true;
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }
    }
}

/// Install the global tracing subscriber.
fn init_tracing(config: &Config) {
    let filter = if config.verbose {
        EnvFilter::new("prebid_status=debug,info")
    } else {
        EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let fmt_layer = match config.log_format {
        LogFormat::Text => fmt::layer().boxed(),
        LogFormat::Json => fmt::layer().json().boxed(),
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .init();
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(
    args: &Args,
    env_config: prebid_status::Result<Config>,
    port_override: Option<u16>,
) -> anyhow::Result<()> {
    let mut config = env_config.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;
    args.apply_to(&mut config);

    if let Some(port) = port_override {
        config.port = port;
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(e.into());
    }

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(
        service = prebid_status::status::SERVICE_ID,
        version = prebid_status::status::SERVICE_VERSION,
        "starting status server"
    );

    api::serve(listener, shutdown_signal()).await?;
    Ok(())
}

/// Load, validate and summarize configuration.
fn cmd_check_config(args: &Args) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("PREBID STATUS - CONFIGURATION CHECK");
    println!("======================================================================");

    // Load configuration
    print!("Loading configuration... ");
    let mut config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };
    args.apply_to(&mut config);

    // Validate configuration
    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Bind Address: {}:{}", config.host, config.port);
    println!("  Log Filter: {}", config.rust_log);
    println!("  Log Format: {}", config.log_format);
    println!("  Verbose: {}", config.verbose);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Probe a running instance; fails unless it reports UP.
async fn cmd_probe(url: Option<String>, timeout: Duration) -> anyhow::Result<()> {
    // PORT is only consulted when no URL was given
    let url = match url {
        Some(url) => url,
        None => Config::load()?.status_url(),
    };
    let probe = StatusProbe::new(url, timeout)?;

    match probe.check().await {
        Ok(status) => {
            println!("{} is {} (timestamp {})", status.service, status.status, status.timestamp);
            Ok(())
        }
        Err(e) => {
            error!("Probe of {} failed: {}", probe.url(), e);
            Err(e.into())
        }
    }
}
