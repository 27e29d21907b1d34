//! FixturePricing Library
//!
//! Dynamic ticket-price recommendations for football fixtures: a regression
//! fitted on historical fixtures, adjusted by match importance, expected
//! demand, venue scarcity and attendance history.

pub mod catalog;
pub mod common;
pub mod config;
pub mod pricing;

// Re-export commonly used types
pub use catalog::{CatalogData, HistoricalMatchRecord, ReferenceCatalog};
pub use common::errors::{PricingError, Result};
pub use common::types::{normalize_team_name, FixtureImportance, OpponentRanking, TeamTier};
pub use config::types::AppConfig;

// Pricing types
pub use pricing::{
    CurvePoint, DemandLevel, FixtureDescriptor, ImportanceLevel, LinearRegression, MatchType,
    ModelDiagnostics, PreviousMatch, PriceBreakdown, PricingEngine, PricingRecommendation,
    PricingRequest, SelloutProbability, TrainingSource,
};
