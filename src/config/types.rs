//! Configuration types

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Price recommendation parameters
    #[serde(default)]
    pub pricing: PricingConfig,
    /// Elasticity curve parameters
    #[serde(default)]
    pub curve: CurveConfig,
    /// General application settings
    #[serde(default)]
    pub settings: AppSettings,
}

/// Tiered base prices used by the low-price fallback blend
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierBasePrices {
    pub high: Decimal,
    pub medium: Decimal,
    pub low: Decimal,
}

impl Default for TierBasePrices {
    fn default() -> Self {
        Self {
            high: dec!(150),
            medium: dec!(80),
            low: dec!(40),
        }
    }
}

/// Pricing engine parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// No recommendation goes below this price
    #[serde(default = "default_min_price")]
    pub min_price: Decimal,
    /// Recommendations are rounded to a multiple of this
    #[serde(default = "default_price_granularity")]
    pub price_granularity: Decimal,
    /// Raw prices under this are blended with the tiered base price
    #[serde(default = "default_fallback_threshold")]
    pub fallback_threshold: Decimal,
    /// Weight of the adjusted tiered base in the fallback blend
    #[serde(default = "default_fallback_weight")]
    pub fallback_weight: f64,
    #[serde(default)]
    pub tier_base_prices: TierBasePrices,
    /// First kickoff hour (inclusive) of the evening prime window
    #[serde(default = "default_prime_start_hour")]
    pub prime_time_start_hour: u32,
    /// Last kickoff hour (inclusive) of the evening prime window
    #[serde(default = "default_prime_end_hour")]
    pub prime_time_end_hour: u32,
    /// Synthetic samples generated per importance band when no history exists
    #[serde(default = "default_synthetic_samples")]
    pub synthetic_samples_per_band: usize,
    /// Seed for synthetic data; None draws from OS entropy
    #[serde(default)]
    pub synthetic_seed: Option<u64>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            min_price: default_min_price(),
            price_granularity: default_price_granularity(),
            fallback_threshold: default_fallback_threshold(),
            fallback_weight: default_fallback_weight(),
            tier_base_prices: TierBasePrices::default(),
            prime_time_start_hour: default_prime_start_hour(),
            prime_time_end_hour: default_prime_end_hour(),
            synthetic_samples_per_band: default_synthetic_samples(),
            synthetic_seed: None,
        }
    }
}

fn default_min_price() -> Decimal {
    dec!(15)
}

fn default_price_granularity() -> Decimal {
    dec!(5)
}

fn default_fallback_threshold() -> Decimal {
    dec!(30)
}

fn default_fallback_weight() -> f64 {
    0.7
}

fn default_prime_start_hour() -> u32 {
    18
}

fn default_prime_end_hour() -> u32 {
    21
}

fn default_synthetic_samples() -> usize {
    25
}

/// Elasticity curve parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Number of sample points
    #[serde(default = "default_curve_points")]
    pub points: usize,
    /// Top of the sampled range as a multiple of the recommended price
    #[serde(default = "default_range_multiplier")]
    pub range_multiplier: f64,
    /// Bottom of the sampled range as a fraction of the top
    #[serde(default = "default_low_fraction")]
    pub low_fraction: f64,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            points: default_curve_points(),
            range_multiplier: default_range_multiplier(),
            low_fraction: default_low_fraction(),
        }
    }
}

fn default_curve_points() -> usize {
    10
}

fn default_range_multiplier() -> f64 {
    1.5
}

fn default_low_fraction() -> f64 {
    0.4
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// JSON file replacing the built-in reference catalog
    #[serde(default)]
    pub catalog_path: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            catalog_path: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
