use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use homesit_core::{gateways::geocode::GeoCodingGateway, geocode_cache::GeocodeCache, usecases};
use homesit_entities::{address::Address, geo::MapPoint};

use crate::{config::Config, gateways};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
#[command(name = "homesit", version, about = "Geocoding and proximity backend for the HomeSit house & pet sitting community")]
struct Args {
    /// Path to the configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the web server (default)
    Serve,
    /// Resolve a free-text location, e.g. "Carlton, VIC"
    Geocode { location: String },
    /// Describe a coordinate
    Reverse { lat: f64, lon: f64 },
}

pub async fn run() -> Result<()> {
    let args = Args::parse();
    let config = Config::try_load_from_file_or_default(args.config.as_deref())?;
    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Geocode { location } => geocode(&config, &location),
        Command::Reverse { lat, lon } => reverse(&config, lat, lon),
    }
}

async fn serve(config: Config) -> Result<()> {
    let geo_gw = gateways::geocoding_gateway(&config);
    let directory_gw = gateways::directory_gateway(&config);

    let cfg = homesit_webserver::Cfg {
        api_tokens: config.auth.api_tokens,
        admin_tokens: config.auth.admin_tokens,
        rate_limit: homesit_webserver::RateLimitCfg {
            max_requests: config.rate_limit.max_requests,
            window: config.rate_limit.window,
        },
    };

    log::info!("Starting homesit v{VERSION}");
    homesit_webserver::run(
        cfg,
        config.webserver.enable_cors,
        geo_gw,
        directory_gw,
        VERSION,
    )
    .await;
    Ok(())
}

fn geocode(config: &Config, location: &str) -> Result<()> {
    let gw = gateways::geocoding_gateway(config);
    let cache = GeocodeCache::new();
    match usecases::resolve_location(gw.as_ref(), &cache, location) {
        Some(pos) => println!("{location} -> lat {}, lng {}", pos.lat(), pos.lng()),
        None => println!("{location} could not be resolved"),
    }
    Ok(())
}

fn reverse(config: &Config, lat: f64, lon: f64) -> Result<()> {
    let gw = gateways::geocoding_gateway(config);
    let pos = MapPoint::try_from_lat_lng_deg(lat, lon)
        .ok_or_else(|| anyhow!("Invalid coordinates: {lat},{lon}"))?;
    match gw.reverse_lookup(pos)? {
        Some(place) => {
            let locality = place.address.as_ref().and_then(Address::locality);
            println!("{}", locality.unwrap_or(&place.display_name));
        }
        None => println!("No place found at {lat},{lon}"),
    }
    Ok(())
}
