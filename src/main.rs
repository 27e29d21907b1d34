//! FixturePricing - Main Entry Point
//!
//! Prices a single fixture from the command line and prints the
//! recommendation (and optionally the elasticity curve) as JSON.

use anyhow::{bail, Context, Result};
use chrono::Weekday;
use clap::Parser;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use fixture_pricing::config::load_config;
use fixture_pricing::{
    CurvePoint, PreviousMatch, PricingEngine, PricingRecommendation, PricingRequest,
    ReferenceCatalog,
};

/// CLI arguments for the application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Home club
    #[arg(long)]
    home: String,

    /// Visiting club
    #[arg(long)]
    away: String,

    /// City the fixture is played in
    #[arg(long)]
    city: String,

    /// Venue name
    #[arg(long)]
    stadium: String,

    /// Kickoff time, HH:MM
    #[arg(long, default_value = "19:30")]
    time: String,

    /// Day of the week, e.g. "sat"
    #[arg(long)]
    day: Option<String>,

    /// Base price to use instead of the model estimate
    #[arg(long)]
    base_price: Option<Decimal>,

    /// Earlier meeting of this pairing as ATTENDANCE:PRICE (repeatable)
    #[arg(long = "previous")]
    previous: Vec<String>,

    /// Also print the price elasticity curve
    #[arg(long)]
    curve: bool,
}

#[derive(Serialize)]
struct Output<'a> {
    recommendation: &'a PricingRecommendation,
    #[serde(skip_serializing_if = "Option::is_none")]
    curve: Option<Vec<CurvePoint>>,
}

fn parse_previous(raw: &str) -> Result<PreviousMatch> {
    let (attendance, price) = raw
        .split_once(':')
        .with_context(|| format!("expected ATTENDANCE:PRICE, got {raw:?}"))?;
    Ok(PreviousMatch::new(
        attendance.trim().parse::<u32>().context("attendance")?,
        price.trim().parse::<Decimal>().context("price")?,
    ))
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    info!("Configuration file: {}", args.config);
    let config = load_config(Some(&args.config))?;

    let catalog = match &config.settings.catalog_path {
        Some(path) => {
            info!("Loading reference catalog from {}", path);
            ReferenceCatalog::from_json_file(path)?
        }
        None => ReferenceCatalog::builtin()?,
    };

    let engine = PricingEngine::initialize(catalog, config)?;

    let mut request = PricingRequest::new(args.home, args.away, args.city, args.stadium, args.time);
    if let Some(day) = args.day {
        match day.parse::<Weekday>() {
            Ok(day) => request = request.on(day),
            Err(_) => bail!("unrecognised day of week {day:?}"),
        }
    }
    if let Some(price) = args.base_price {
        request = request.with_base_price(price);
    }
    request = request.with_previous_matches(
        args.previous
            .iter()
            .map(|raw| parse_previous(raw))
            .collect::<Result<Vec<_>>>()?,
    );

    let recommendation = engine.recommend(&request);
    let curve = args
        .curve
        .then(|| engine.elasticity_curve(recommendation.recommended_price, &request.descriptor()));

    let output = Output {
        recommendation: &recommendation,
        curve,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
