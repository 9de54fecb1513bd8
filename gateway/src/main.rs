//! Gateway binary entry point

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use shared::{ServiceId, logging, service_info, service_warn};

use gateway::{Gateway, GatewayConfig, GatewayError, GatewayResult, ProviderRouter, RealProviderRouter, config};

#[derive(Parser, Debug)]
#[command(name = "gateway")]
#[command(about = "NeuralBrain AI question answering gateway")]
struct Args {
    /// Host interface to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port for HTTP server
    #[arg(long, default_value = "8000")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Anthropic messages endpoint
    #[arg(long, default_value = config::ANTHROPIC_API_URL)]
    anthropic_url: String,

    /// OpenAI chat completions endpoint
    #[arg(long, default_value = config::OPENAI_API_URL)]
    openai_url: String,

    /// Timeout for upstream provider calls (transport default when unset)
    #[arg(long)]
    request_timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> GatewayResult<()> {
    // Load .env before anything reads the environment
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let args = Args::parse();

    ServiceId::init_gateway();
    let log_level = logging::parse_log_level(&args.log_level)?;
    logging::init_tracing_with_level(Some(&log_level));
    logging::log_startup(ServiceId::current(), "NeuralBrain AI Backend");

    if dotenv_loaded {
        service_info!(ServiceId::current(), "Loaded environment from .env");
    }

    let bind_address: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| GatewayError::config(format!("Invalid bind address: {}", e)))?;

    let gateway_config = GatewayConfig::from_env()
        .with_anthropic_url(args.anthropic_url)
        .with_openai_url(args.openai_url)
        .with_request_timeout(args.request_timeout_secs.map(Duration::from_secs));

    let provider_router = RealProviderRouter::new(gateway_config)?;

    let availability = provider_router.availability();
    if !availability.claude {
        service_warn!(ServiceId::current(), "{} not set, Claude requests will use demo mode", config::ANTHROPIC_KEY_VAR);
    }
    if !availability.openai {
        service_warn!(ServiceId::current(), "{} not set, GPT requests will use demo mode", config::OPENAI_KEY_VAR);
    }

    let gateway = Gateway::new(bind_address, provider_router);
    gateway.run().await?;

    logging::log_success(ServiceId::current(), "Gateway stopped gracefully");
    Ok(())
}
