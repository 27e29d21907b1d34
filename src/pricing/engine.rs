use rust_decimal::Decimal;
use tracing::info;

use crate::catalog::ReferenceCatalog;
use crate::common::errors::Result;
use crate::config::{validate, AppConfig};
use crate::pricing::calculator::PriceCalculator;
use crate::pricing::elasticity::generate_elasticity_curve;
use crate::pricing::regression::LinearRegression;
use crate::pricing::training::{training_set, TrainingSource};
use crate::pricing::types::{CurvePoint, FixtureDescriptor, PricingRecommendation, PricingRequest};

/// Fitted, immutable pricing engine
///
/// Built once by [`PricingEngine::initialize`]. Every method takes `&self`,
/// so one engine can serve any number of threads without locking.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    catalog: ReferenceCatalog,
    config: AppConfig,
    model: LinearRegression,
    source: TrainingSource,
}

impl PricingEngine {
    /// Fit the price model and return a ready engine
    ///
    /// Trains on the catalog's historical fixtures, or on synthetic data when
    /// the catalog has none.
    ///
    /// # Errors
    /// Invalid configuration or an unusable training set. Both are fatal:
    /// a mis-fit model would mislead every recommendation after it.
    pub fn initialize(catalog: ReferenceCatalog, config: AppConfig) -> Result<Self> {
        validate(&config)?;

        let set = training_set(&catalog, &config.pricing);
        let model = LinearRegression::fit(&set.features, &set.prices)?;

        let d = model.diagnostics();
        info!(
            "Pricing model fitted on {} samples from {}: price = {:.2} + {:.2} * feature (R² {:.3}, MAE {:.2})",
            d.samples,
            set.source,
            model.intercept(),
            model.slope(),
            d.r_squared,
            d.mean_absolute_error
        );

        Ok(Self {
            catalog,
            config,
            model,
            source: set.source,
        })
    }

    /// Engine over the compiled-in catalog with default configuration
    pub fn with_defaults() -> Result<Self> {
        Self::initialize(ReferenceCatalog::builtin()?, AppConfig::default())
    }

    /// Recommended price, sellout forecast and confidence for a fixture
    pub fn recommend(&self, request: &PricingRequest) -> PricingRecommendation {
        PriceCalculator::new(&self.catalog, &self.config.pricing, &self.model, self.source)
            .recommend(request)
    }

    /// Price/demand/revenue curve around an already recommended price
    pub fn elasticity_curve(
        &self,
        recommended_price: Decimal,
        descriptor: &FixtureDescriptor,
    ) -> Vec<CurvePoint> {
        generate_elasticity_curve(&self.catalog, &self.config.curve, recommended_price, descriptor)
    }

    pub fn model(&self) -> &LinearRegression {
        &self.model
    }

    pub fn training_source(&self) -> TrainingSource {
        self.source
    }

    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
