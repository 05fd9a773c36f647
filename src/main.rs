use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

use gisgraphy_client::config::FileConfig;
use gisgraphy_client::{Address, GeocodeClient, format_address};

/// Geocode a postal address with the Gisgraphy geocoding service
///
/// Examples:
///   # Geocode the Museum of Modern Art in New York (built-in demo address)
///   gisgraphy
///
///   # Geocode a German address
///   gisgraphy --street "Rhondorfer Str." --number 665 --zip 50939 --city Köln -C DE
///
///   # Show the request without sending it
///   gisgraphy --street "Hoge Wei" --number 27 --zip 1930 --city Zaventem -C BE --dry-run
///
///   # Use a private server
///   gisgraphy --server geo.example.org --api-key SECRET --city Paris -C FR
#[derive(Parser, Debug)]
#[command(name = "gisgraphy")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches gisgraphy.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Street name
    #[arg(long)]
    street: Option<String>,

    /// House number
    #[arg(short = 'n', long)]
    number: Option<String>,

    /// Postal code
    #[arg(short = 'z', long)]
    zip: Option<String>,

    /// City name
    #[arg(short = 'c', long)]
    city: Option<String>,

    /// State, province or region
    #[arg(long)]
    state: Option<String>,

    /// Two-letter ISO country code (e.g. US, DE, FR)
    #[arg(short = 'C', long)]
    country: Option<String>,

    /// Geocoding server host (defaults to the free public service)
    #[arg(long)]
    server: Option<String>,

    /// API key for non-free servers
    #[arg(long)]
    api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(short = 't', long)]
    timeout: Option<u64>,

    /// Print the formatted address and request URL without contacting the server
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Args {
    fn has_address(&self) -> bool {
        [
            &self.street,
            &self.number,
            &self.zip,
            &self.city,
            &self.state,
        ]
        .iter()
        .any(|f| f.is_some())
    }
}

fn demo_address() -> Address {
    Address::new("West 53 Street", "11", "10019", "New York", "NY", "US")
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = if let Some(ref config_path) = args.config {
        if !config_path.exists() {
            bail!("Config file not found: {:?}", config_path);
        }
        Some(FileConfig::from_path(config_path)?)
    } else {
        FileConfig::load()
    };

    let verbose = args.verbose || file_config.as_ref().is_some_and(|c| c.verbose);
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if verbose { "debug" } else { "warn" }),
    )
    .init();

    let client_config = file_config
        .as_ref()
        .map(|c| c.client.clone())
        .unwrap_or_default()
        .with_overrides(args.server.clone(), args.api_key.clone(), args.timeout);

    let base = if args.has_address() {
        Address::default()
    } else {
        file_config
            .as_ref()
            .and_then(|c| c.address.clone())
            .unwrap_or_else(demo_address)
    };
    let address = Address {
        street: args.street.clone().unwrap_or(base.street),
        number: args.number.clone().unwrap_or(base.number),
        zip: args.zip.clone().unwrap_or(base.zip),
        city: args.city.clone().unwrap_or(base.city),
        state: args.state.clone().unwrap_or(base.state),
        country: args
            .country
            .clone()
            .or_else(|| {
                file_config
                    .as_ref()
                    .and_then(|c| c.address.as_ref())
                    .map(|a| a.country.clone())
            })
            .unwrap_or(base.country),
        ..Default::default()
    };

    if address.country.trim().is_empty() {
        bail!("--country is required (two-letter ISO code, e.g. US)");
    }
    if address.is_blank() {
        bail!("Nothing to geocode: provide at least one of --street, --number, --zip, --city, --state");
    }

    let client = GeocodeClient::new(client_config).context("Failed to create geocoding client")?;

    if verbose || args.dry_run {
        println!("Configuration:");
        println!("  Server: {}", client.config().server);
        println!("  Timeout: {}s", client.config().timeout_secs);
        println!(
            "  API key: {}",
            if client.config().api_key.is_some() {
                "set"
            } else {
                "none"
            }
        );
        println!("  Query: {}", format_address(&address));
        println!("  URL: {}", client.request_url(&address));
        println!();
    }

    if args.dry_run {
        return Ok(());
    }

    let spinner = create_spinner(&format!("Geocoding {}...", address));
    let start = Instant::now();
    let results = client.geocode(&address);
    spinner.finish_and_clear();
    let results = results.context("Failed to geocode address")?;

    println!(
        "Geocoded {} -> {} result(s) [{:.1}s]",
        address,
        results.len(),
        start.elapsed().as_secs_f32()
    );
    for result in &results {
        println!("  {}", result);
        if verbose {
            for (label, value) in [
                ("state", &result.admin_area1),
                ("district", &result.admin_area2),
                ("quarter", &result.admin_area3),
            ] {
                if !value.is_empty() {
                    println!("    {}: {}", label, value);
                }
            }
        }
    }

    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        pb.set_style(style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]));
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
