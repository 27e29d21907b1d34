use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::ReferenceCatalog;
use crate::config::PricingConfig;
use crate::pricing::features::extract_historical_feature;

/// Where the regression's training pairs came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingSource {
    Historical,
    Synthetic,
}

impl std::fmt::Display for TrainingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrainingSource::Historical => write!(f, "historical data"),
            TrainingSource::Synthetic => write!(f, "synthetic data"),
        }
    }
}

/// Parallel feature and price vectors ready for fitting
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSet {
    pub source: TrainingSource,
    pub features: Vec<f64>,
    pub prices: Vec<f64>,
}

impl TrainingSet {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Feature range and price band for one importance stratum
struct SyntheticBand {
    feature_min: f64,
    feature_max: f64,
    price_min: f64,
    price_max: f64,
}

impl SyntheticBand {
    const fn new(feature_min: f64, feature_max: f64, price_min: f64, price_max: f64) -> Self {
        Self {
            feature_min,
            feature_max,
            price_min,
            price_max,
        }
    }
}

/// Low, medium, high and derby strata, covering the same feature space
/// live fixtures project into
const SYNTHETIC_BANDS: [SyntheticBand; 4] = [
    SyntheticBand::new(0.0, 3.0, 20.0, 45.0),
    SyntheticBand::new(3.0, 6.5, 45.0, 90.0),
    SyntheticBand::new(6.5, 10.0, 90.0, 150.0),
    SyntheticBand::new(10.0, 14.5, 150.0, 230.0),
];

/// Training pairs from the catalog's historical fixtures
pub fn historical_training_set(catalog: &ReferenceCatalog) -> TrainingSet {
    let (features, prices) = catalog
        .fixtures()
        .iter()
        .filter_map(|record| {
            let price = record.ticket_price.to_f64()?;
            Some((extract_historical_feature(catalog, record), price))
        })
        .unzip();

    TrainingSet {
        source: TrainingSource::Historical,
        features,
        prices,
    }
}

/// Stratified synthetic pairs, for catalogs without any history
///
/// Within each band the price tracks the feature's position in the band,
/// with up to 10% noise.
pub fn synthetic_training_set(config: &PricingConfig) -> TrainingSet {
    let mut rng = match config.synthetic_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let per_band = config.synthetic_samples_per_band;
    let mut features = Vec::with_capacity(per_band * SYNTHETIC_BANDS.len());
    let mut prices = Vec::with_capacity(per_band * SYNTHETIC_BANDS.len());

    for band in &SYNTHETIC_BANDS {
        for _ in 0..per_band {
            let position: f64 = rng.gen_range(0.0..1.0);
            let feature = band.feature_min + position * (band.feature_max - band.feature_min);
            let base = band.price_min + position * (band.price_max - band.price_min);
            let noise: f64 = rng.gen_range(-0.1..0.1);
            features.push(feature);
            prices.push(base * (1.0 + noise));
        }
    }

    warn!(
        "No historical fixtures available, training on {} synthetic samples",
        features.len()
    );

    TrainingSet {
        source: TrainingSource::Synthetic,
        features,
        prices,
    }
}

/// Historical pairs when the catalog has any, synthetic otherwise
pub fn training_set(catalog: &ReferenceCatalog, config: &PricingConfig) -> TrainingSet {
    let set = historical_training_set(catalog);
    if set.is_empty() {
        synthetic_training_set(config)
    } else {
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> PricingConfig {
        PricingConfig {
            synthetic_seed: Some(seed),
            ..PricingConfig::default()
        }
    }

    #[test]
    fn test_historical_set_covers_every_fixture() {
        let catalog = ReferenceCatalog::builtin().unwrap();
        let set = historical_training_set(&catalog);
        assert_eq!(set.source, TrainingSource::Historical);
        assert_eq!(set.len(), catalog.fixtures().len());
        assert_eq!(set.features.len(), set.prices.len());
        assert!(set.prices.iter().all(|p| *p > 0.0));
    }

    #[test]
    fn test_synthetic_set_is_stratified() {
        let set = synthetic_training_set(&seeded(11));
        assert_eq!(set.source, TrainingSource::Synthetic);
        assert_eq!(set.len(), 4 * 25);
        for (band, chunk) in SYNTHETIC_BANDS.iter().zip(set.features.chunks(25)) {
            assert!(chunk
                .iter()
                .all(|f| *f >= band.feature_min && *f <= band.feature_max));
        }
        assert!(set.prices.iter().all(|p| *p > 0.0));
    }

    #[test]
    fn test_seeded_synthetic_set_is_reproducible() {
        assert_eq!(synthetic_training_set(&seeded(3)), synthetic_training_set(&seeded(3)));
    }

    #[test]
    fn test_empty_catalog_falls_back_to_synthetic() {
        let catalog = ReferenceCatalog::builtin().unwrap().without_fixtures();
        let set = training_set(&catalog, &seeded(5));
        assert_eq!(set.source, TrainingSource::Synthetic);
        assert!(!set.is_empty());
    }
}
