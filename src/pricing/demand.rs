use crate::catalog::ReferenceCatalog;
use crate::pricing::types::{DemandLevel, MatchType};

/// Attendance rate assumed for clubs without a record
pub const DEFAULT_DEMAND_ATTENDANCE_RATE: f64 = 0.80;

/// Fans per seat it takes to reach a demand ratio of 1.0
const FANS_PER_SEAT: f64 = 50.0;
const LOCAL_MATCH_MULTIPLIER: f64 = 1.2;
const HIGH_DEMAND_SCORE: f64 = 2.5;
const MEDIUM_DEMAND_SCORE: f64 = 1.5;

fn match_type_multiplier(match_type: MatchType) -> f64 {
    match match_type {
        MatchType::Derby => 1.5,
        MatchType::Marquee => 1.3,
        MatchType::Local | MatchType::Ordinary => 1.0,
    }
}

/// Raw demand score behind [`predict_demand`]
pub fn demand_score(
    catalog: &ReferenceCatalog,
    home: &str,
    away: &str,
    stadium: &str,
    match_type: MatchType,
) -> f64 {
    let fans = (catalog.fan_base(home) + catalog.fan_base(away)) as f64;
    let capacity = catalog.stadium_capacity(stadium) as f64;
    let rate = |team: &str| {
        catalog
            .attendance_rate(team)
            .unwrap_or(DEFAULT_DEMAND_ATTENDANCE_RATE)
    };

    let mut score = fans / (capacity * FANS_PER_SEAT);
    score *= match_type_multiplier(match_type);
    score *= (rate(home) + rate(away)) / 2.0;
    if catalog.share_home_city(home, away) {
        score *= LOCAL_MATCH_MULTIPLIER;
    }
    score
}

/// Expected ticket demand for a fixture
pub fn predict_demand(
    catalog: &ReferenceCatalog,
    home: &str,
    away: &str,
    stadium: &str,
    match_type: MatchType,
) -> DemandLevel {
    let score = demand_score(catalog, home, away, stadium, match_type);
    if score > HIGH_DEMAND_SCORE {
        DemandLevel::High
    } else if score > MEDIUM_DEMAND_SCORE {
        DemandLevel::Medium
    } else {
        DemandLevel::Low
    }
}
