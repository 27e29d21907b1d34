//! Common test utilities and fixtures

#![allow(dead_code)]

use chrono::Weekday;
use fixture_pricing::{AppConfig, PricingEngine, PricingRequest, ReferenceCatalog};
use once_cell::sync::Lazy;

/// Engine over the built-in catalog, fitted once for the whole test binary
pub static ENGINE: Lazy<PricingEngine> =
    Lazy::new(|| PricingEngine::with_defaults().expect("built-in engine initializes"));

/// Engine trained on seeded synthetic data
pub fn synthetic_engine(seed: u64) -> PricingEngine {
    let mut config = AppConfig::default();
    config.pricing.synthetic_seed = Some(seed);
    let catalog = ReferenceCatalog::builtin()
        .expect("built-in catalog")
        .without_fixtures();
    PricingEngine::initialize(catalog, config).expect("synthetic engine initializes")
}

/// Shanghai derby in a 25,000 seat ground, Saturday evening
pub fn shanghai_derby() -> PricingRequest {
    PricingRequest::new(
        "Shanghai Port",
        "Shanghai Shenhua",
        "Shanghai",
        "Changchun Stadium",
        "19:35",
    )
    .on(Weekday::Sat)
}

/// Two small clubs, afternoon weekday kickoff outside the primary markets
pub fn low_profile_fixture() -> PricingRequest {
    PricingRequest::new(
        "Qingdao Hainiu",
        "Meizhou Hakka",
        "Meizhou",
        "Meizhou Wuhua Olympic Sports Center",
        "14:00",
    )
    .on(Weekday::Wed)
}

/// A spread of requests covering every match type and odd inputs
pub fn request_grid() -> Vec<PricingRequest> {
    vec![
        shanghai_derby(),
        low_profile_fixture(),
        PricingRequest::new(
            "Beijing Guoan",
            "Shandong Taishan",
            "Beijing",
            "Workers' Stadium",
            "20:00",
        ),
        PricingRequest::new(
            "Qingdao West Coast",
            "Qingdao Hainiu",
            "Qingdao",
            "Qingdao Youth Football Stadium",
            "19:00",
        )
        .on(Weekday::Sun),
        PricingRequest::new(
            "Henan FC",
            "Zhejiang FC",
            "Zhengzhou",
            "Zhengzhou Hanghai Stadium",
            "not a time",
        ),
        PricingRequest::new(
            "team Tianjin Jinmen Tiger",
            "team Beijing Guoan",
            "Tianjin",
            "Tianjin Olympic Center",
            "19:35",
        ),
        PricingRequest::new(
            "Atlantis Rovers",
            "El Dorado City",
            "Atlantis",
            "Nowhere Arena",
            "03:00",
        ),
        PricingRequest::new("", "", "", "", ""),
    ]
}
