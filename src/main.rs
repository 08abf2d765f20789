use clap::Parser;
use mockgeo::config::{ServeConfig, DEFAULT_HOST, DEFAULT_MAX_BATCH, DEFAULT_PORT};
use mockgeo::geocode::{address_hash, geocode_address, geocode_batch};
use std::io::{self, BufRead};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// mockgeo — deterministic placeholder geocoder
///
/// Maps any address to a repeatable coordinate near downtown Los Angeles.
/// The same address always yields the same coordinate.
///
/// Examples:
///   mockgeo "123 Main St"
///   mockgeo --hash "123 Main St"
///   cat addresses.txt | mockgeo --stdin
///   mockgeo --serve --port 8787
#[derive(Parser)]
#[command(name = "mockgeo", version, about, long_about = None)]
struct Cli {
    /// Address to geocode. Example: mockgeo "123 Main St"
    #[arg(index = 1)]
    address: Option<String>,

    /// Read addresses from stdin, one per line, and print a JSON array.
    #[arg(long)]
    stdin: bool,

    /// Print only the 32-bit address hash.
    #[arg(long)]
    hash: bool,

    /// Run the HTTP API instead of geocoding once.
    #[arg(long)]
    serve: bool,

    /// Host to bind in --serve mode.
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port to bind in --serve mode.
    #[arg(long, short = 'p', default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Maximum addresses per batch request in --serve mode.
    #[arg(long, default_value_t = DEFAULT_MAX_BATCH)]
    max_batch: usize,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mockgeo=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> mockgeo::Result<()> {
    // Priority: --serve > --stdin > positional address > usage

    if cli.serve {
        let cfg = ServeConfig {
            host: cli.host,
            port: cli.port,
            max_batch: cli.max_batch,
        };
        return mockgeo::server::start(&cfg).await;
    }

    if cli.stdin {
        let lines = io::stdin().lock().lines().collect::<Result<Vec<_>, _>>()?;
        if cli.hash {
            for line in &lines {
                println!("{}", address_hash(line));
            }
            return Ok(());
        }
        let results = geocode_batch(&lines);
        tracing::debug!(count = results.len(), "geocoded stdin batch");
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if let Some(ref address) = cli.address {
        if cli.hash {
            println!("{}", address_hash(address));
            return Ok(());
        }
        let result = geocode_address(address);
        eprintln!("  {}", result.display_line());
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    eprintln!("Error: No address specified.");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  mockgeo \"123 Main St\"");
    eprintln!("  mockgeo --hash \"123 Main St\"");
    eprintln!("  cat addresses.txt | mockgeo --stdin");
    eprintln!("  mockgeo --serve --port 8787");
    std::process::exit(1);
}
