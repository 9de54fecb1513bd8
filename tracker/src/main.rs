//! Tracker binary entry point

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;
use shared::{ServiceId, logging, service_info};

use tracker::{AutomationDelays, MemoryStore, Tracker, TrackerConfig, TrackerError, TrackerResult};

#[derive(Parser, Debug)]
#[command(name = "tracker")]
#[command(about = "NeuralBrain course progress and analytics tracker")]
struct Args {
    /// Host interface to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port for HTTP server
    #[arg(long, default_value = "8001")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Override the simulated processing delay for every page type
    #[arg(long)]
    automation_delay_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> TrackerResult<()> {
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    ServiceId::init_tracker();
    let log_level = logging::parse_log_level(&args.log_level)?;
    logging::init_tracing_with_level(Some(&log_level));
    logging::log_startup(ServiceId::current(), "NeuralBrain Progress Tracker");

    let bind_address: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| TrackerError::config(format!("Invalid bind address: {}", e)))?;

    let delays = match args.automation_delay_ms {
        Some(ms) => {
            service_info!(ServiceId::current(), "Automation delay overridden to {}ms", ms);
            AutomationDelays::uniform(Duration::from_millis(ms))
        }
        None => AutomationDelays::default(),
    };
    let config = TrackerConfig::default().with_automation_delays(delays);

    let tracker = Tracker::new(bind_address, MemoryStore::new(), config);
    tracker.run().await?;

    logging::log_success(ServiceId::current(), "Tracker stopped gracefully");
    Ok(())
}
