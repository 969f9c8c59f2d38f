use clap::Parser;
use soawatch_api::{AppState, SessionLimiter};
use soawatch_domain::CliOverrides;
use tokio_util::sync::CancellationToken;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "soawatch")]
#[command(version = "0.1.0")]
#[command(about = "soawatch - stream notifications when a zone's SOA record changes")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Upstream resolver (ip:port)
    #[arg(long, value_name = "ADDR")]
    upstream: Option<String>,

    /// Polling interval in seconds
    #[arg(long, value_name = "SECS")]
    interval: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind.clone(),
        upstream: cli.upstream.clone(),
        interval_secs: cli.interval,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config)?;

    info!("Starting soawatch v{}", env!("CARGO_PKG_VERSION"));

    let use_cases = di::UseCases::new(&config)?;
    let shutdown = CancellationToken::new();

    let app_state = AppState {
        fetch_soa: use_cases.fetch_soa,
        check_soa: use_cases.check_soa,
        watch_interval_secs: config.watch.interval_secs,
        sessions: SessionLimiter::new(config.watch.max_sessions),
        shutdown: shutdown.clone(),
    };

    let web_addr = config.server.listen_addr().parse()?;
    server::start_web_server(web_addr, app_state, shutdown).await?;

    info!("Server shutdown complete");
    Ok(())
}
