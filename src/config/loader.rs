//! Configuration loader

use config::{Config, Environment, File};
use rust_decimal::Decimal;
use std::path::Path;

use super::types::AppConfig;
use crate::common::errors::{PricingError, Result};

/// Load configuration from file and environment variables
///
/// Priority (highest to lowest):
/// 1. Environment variables (prefixed with APP_, nested with `__`)
/// 2. Configuration file (TOML format)
/// 3. Default values
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let mut builder = Config::builder();

    if let Some(path) = config_path {
        if Path::new(path).exists() {
            builder = builder.add_source(File::with_name(path).required(false));
        }
    }

    builder = builder.add_source(
        Environment::with_prefix("APP")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    config
        .try_deserialize()
        .map_err(|e| PricingError::Configuration(e.to_string()))
}

/// Load configuration from environment variables only
pub fn load_from_env() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::default();

    if let Some(min_price) = env_parse("PRICING_MIN_PRICE")? {
        config.pricing.min_price = min_price;
    }
    if let Some(seed) = env_parse("PRICING_SYNTHETIC_SEED")? {
        config.pricing.synthetic_seed = Some(seed);
    }
    if let Some(points) = env_parse("PRICING_CURVE_POINTS")? {
        config.curve.points = points;
    }
    if let Ok(path) = std::env::var("PRICING_CATALOG_PATH") {
        config.settings.catalog_path = Some(path);
    }
    if let Ok(level) = std::env::var("PRICING_LOG_LEVEL") {
        config.settings.log_level = level;
    }

    validate(&config)?;
    Ok(config)
}

/// Reject parameter combinations the engine cannot price with
pub fn validate(config: &AppConfig) -> Result<()> {
    let p = &config.pricing;
    positive_money("min_price", p.min_price)?;
    positive_money("price_granularity", p.price_granularity)?;
    positive_money("tier_base_prices.high", p.tier_base_prices.high)?;
    positive_money("tier_base_prices.medium", p.tier_base_prices.medium)?;
    positive_money("tier_base_prices.low", p.tier_base_prices.low)?;
    if p.fallback_threshold < Decimal::ZERO {
        return Err(PricingError::Configuration(format!(
            "fallback_threshold {} is negative",
            p.fallback_threshold
        )));
    }
    if !(0.0..=1.0).contains(&p.fallback_weight) {
        return Err(PricingError::Configuration(format!(
            "fallback_weight {} is outside [0, 1]",
            p.fallback_weight
        )));
    }
    if p.prime_time_start_hour > p.prime_time_end_hour || p.prime_time_end_hour > 23 {
        return Err(PricingError::Configuration(format!(
            "prime window {}..={} is not a valid hour range",
            p.prime_time_start_hour, p.prime_time_end_hour
        )));
    }
    if p.synthetic_samples_per_band == 0 {
        return Err(PricingError::Configuration(
            "synthetic_samples_per_band must be at least 1".to_string(),
        ));
    }

    let c = &config.curve;
    if c.points < 2 {
        return Err(PricingError::Configuration(
            "curve needs at least 2 points".to_string(),
        ));
    }
    if !(c.range_multiplier.is_finite() && c.range_multiplier > 0.0) {
        return Err(PricingError::Configuration(format!(
            "curve range_multiplier {} must be finite and positive",
            c.range_multiplier
        )));
    }
    // NaN fails the range check too
    if !(0.0..1.0).contains(&c.low_fraction) {
        return Err(PricingError::Configuration(format!(
            "curve low_fraction {} is outside [0, 1)",
            c.low_fraction
        )));
    }
    Ok(())
}

fn positive_money(name: &str, value: Decimal) -> Result<()> {
    if value <= Decimal::ZERO {
        return Err(PricingError::Configuration(format!(
            "{name} must be positive, got {value}"
        )));
    }
    Ok(())
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Result<Option<T>> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| PricingError::Configuration(format!("{key}={raw} is not valid"))),
        Err(_) => Ok(None),
    }
}
