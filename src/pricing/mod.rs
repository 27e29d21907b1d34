//! Ticket price recommendation
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    START-UP (once)                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ReferenceCatalog fixtures ──► extract_historical_feature   │
//! │       (or synthetic bands)          │                       │
//! │                                     ▼                       │
//! │                          LinearRegression::fit              │
//! │                          (immutable from here on)           │
//! └─────────────────────────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PER REQUEST (pure)                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  PricingRequest                                             │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  classify ─► predict_demand ─► extract_fixture_feature      │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  model.predict × importance × demand × capacity × attendance│
//! │       │                                                     │
//! │       ▼ (below threshold)                                   │
//! │  blend with tiered base ─► floor ─► round to grid           │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  PricingRecommendation                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Components
//!
//! - [`classify`]: match type and importance from the two clubs
//! - [`predict_demand`]: expected-demand category
//! - [`extract_fixture_feature`] / [`extract_historical_feature`]: the
//!   regression's single input dimension
//! - [`LinearRegression`]: univariate OLS fitted once at start-up
//! - [`PriceCalculator`]: multipliers, fallback blend, confidence
//! - [`generate_elasticity_curve`]: display-only demand curve
//! - [`PricingEngine`]: the handle that owns all of the above
//!
//! # Example
//!
//! ```no_run
//! use fixture_pricing::{PricingEngine, PricingRequest};
//! use chrono::Weekday;
//!
//! let engine = PricingEngine::with_defaults()?;
//! let request = PricingRequest::new(
//!     "Shanghai Port",
//!     "Shanghai Shenhua",
//!     "Shanghai",
//!     "Shanghai Stadium",
//!     "19:35",
//! )
//! .on(Weekday::Sat);
//!
//! let rec = engine.recommend(&request);
//! println!("{} ({:?})", rec.recommended_price, rec.sellout_probability);
//! # Ok::<(), fixture_pricing::PricingError>(())
//! ```

mod calculator;
mod classifier;
mod demand;
mod elasticity;
mod engine;
mod features;
mod regression;
mod training;
mod types;

pub use types::{
    CurvePoint,
    DemandLevel,
    FixtureDescriptor,
    ImportanceLevel,
    MatchClassification,
    MatchType,
    PreviousMatch,
    PriceBreakdown,
    PricingRecommendation,
    PricingRequest,
    SelloutProbability,
};

pub use calculator::{
    capacity_multiplier,
    demand_multiplier,
    importance_multiplier,
    round_price,
    sellout_probability,
    AttendanceSignal,
    PriceCalculator,
    MAX_CONFIDENCE,
};

pub use classifier::classify;
pub use demand::{demand_score, predict_demand, DEFAULT_DEMAND_ATTENDANCE_RATE};
pub use elasticity::{elasticity_for, generate_elasticity_curve};
pub use engine::PricingEngine;
pub use features::{
    extract_fixture_feature,
    extract_historical_feature,
    is_prime_time,
    parse_kickoff,
};
pub use regression::{LinearRegression, ModelDiagnostics};
pub use training::{
    historical_training_set,
    synthetic_training_set,
    training_set,
    TrainingSet,
    TrainingSource,
};
