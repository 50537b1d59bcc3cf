use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;

use subway_transit::{FarePolicy, LineProvider, PathService, Rider, StationIdentifier};

mod input;
mod output;

use input::{read_fare_policy, read_network};

#[derive(Parser, Debug)]
#[command(
    name = "subway-path",
    author,
    version,
    about = "Find the shortest path and fare between two subway stations",
    long_about = "Loads a JSON snapshot of the subway network (stations and lines made of \
                  sections), builds the station graph and prints the minimum-distance \
                  path between two stations together with its distance-based fare."
)]
struct Args {
    /// Network snapshot JSON file
    #[arg(short, long)]
    network: PathBuf,

    /// Departure station identifier
    #[arg(short, long)]
    source: String,

    /// Arrival station identifier
    #[arg(short, long)]
    target: String,

    /// Rider age, applies child and teenager discounts
    #[arg(long)]
    age: Option<u32>,

    /// Fare policy JSON file (defaults to the standard fare bands)
    #[arg(long)]
    fare_policy: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .format_timestamp(None)
    .init();

    if !args.network.exists() {
        bail!("Network file does not exist: {}", args.network.display());
    }

    log::info!("Network: {}", args.network.display());
    let provider = read_network(&args.network).context("Failed to load network")?;
    log::info!(
        "  Loaded {} stations on {} lines",
        provider.all_stations().len(),
        provider.all_lines().len()
    );

    let policy = match &args.fare_policy {
        Some(path) => {
            log::info!("Fare policy: {}", path.display());
            read_fare_policy(path)?
        }
        None => FarePolicy::default(),
    };

    let rider = args.age.map(Rider::new);
    if let Some(rider) = &rider {
        log::debug!("Rider category: {:?}", rider.category());
    }

    let service = PathService::with_policy(provider, policy).context("Invalid fare policy")?;
    let source = StationIdentifier::new(&args.source);
    let target = StationIdentifier::new(&args.target);

    let result = service
        .find_shortest_path_for(&source, &target, rider.as_ref())
        .with_context(|| format!("No route from {} to {}", source, target))?;

    if args.json {
        println!("{}", output::to_json(&result)?);
    } else {
        println!("{}", output::to_text(&result));
    }

    Ok(())
}
