//! Projection of fixtures onto the regression's single input dimension
//!
//! A live request and a historical record carry different raw fields, but
//! both must land in the same feature space or the fitted coefficients mean
//! nothing for live fixtures. The shared terms (team tier, market, derby)
//! therefore use the same indicators and the same weights in both
//! extractors.

use chrono::{NaiveTime, Timelike, Weekday};
use tracing::warn;

use crate::catalog::{HistoricalMatchRecord, ReferenceCatalog};
use crate::common::types::{FixtureImportance, TeamTier};
use crate::config::PricingConfig;
use crate::pricing::types::{MatchType, PricingRequest};

pub const TEAM_TIER_WEIGHT: f64 = 2.5;
pub const PRIMARY_MARKET_WEIGHT: f64 = 1.2;
pub const PRIME_TIME_WEIGHT: f64 = 0.8;
pub const WEEKEND_WEIGHT: f64 = 0.7;
pub const DERBY_WEIGHT: f64 = 3.0;
pub const OPPONENT_RANKING_WEIGHT: f64 = 2.0;
pub const ATTENDANCE_RATIO_WEIGHT: f64 = 1.5;

/// 2 if either club is major, 1 if either is medium, else 0
pub fn team_tier_indicator(catalog: &ReferenceCatalog, home: &str, away: &str) -> f64 {
    match (catalog.tier(home), catalog.tier(away)) {
        (TeamTier::Major, _) | (_, TeamTier::Major) => 2.0,
        (TeamTier::Medium, _) | (_, TeamTier::Medium) => 1.0,
        (TeamTier::Other, TeamTier::Other) => 0.0,
    }
}

fn indicator(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}

/// Parse a kickoff time such as "19:35" or "19:35:00"
pub fn parse_kickoff(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

/// Kickoff falls in the evening prime window; unparseable times do not
pub fn is_prime_time(raw: &str, config: &PricingConfig) -> bool {
    match parse_kickoff(raw) {
        Some(time) => {
            (config.prime_time_start_hour..=config.prime_time_end_hour).contains(&time.hour())
        }
        None => {
            warn!("Unparseable kickoff time {:?}, treating as off-peak", raw);
            false
        }
    }
}

pub fn is_weekend(day: Option<Weekday>) -> bool {
    matches!(day, Some(Weekday::Sat | Weekday::Sun))
}

/// Feature value for a fixture being priced
///
/// `match_type` comes from the classifier so derby detection matches the
/// rest of the pipeline.
pub fn extract_fixture_feature(
    catalog: &ReferenceCatalog,
    config: &PricingConfig,
    request: &PricingRequest,
    match_type: MatchType,
) -> f64 {
    team_tier_indicator(catalog, &request.home_team, &request.away_team) * TEAM_TIER_WEIGHT
        + indicator(catalog.is_primary_market(&request.city)) * PRIMARY_MARKET_WEIGHT
        + indicator(is_prime_time(&request.time, config)) * PRIME_TIME_WEIGHT
        + indicator(is_weekend(request.day_of_week)) * WEEKEND_WEIGHT
        + indicator(match_type == MatchType::Derby) * DERBY_WEIGHT
}

/// Feature value for a played fixture in the training set
pub fn extract_historical_feature(
    catalog: &ReferenceCatalog,
    record: &HistoricalMatchRecord,
) -> f64 {
    let capacity = catalog.stadium_capacity(&record.stadium) as f64;
    let attendance_ratio = (record.attendance as f64 / capacity).min(1.0);

    team_tier_indicator(catalog, &record.home_team, &record.away_team) * TEAM_TIER_WEIGHT
        + indicator(catalog.is_primary_market(&record.city)) * PRIMARY_MARKET_WEIGHT
        + record.opponent_ranking.indicator() * OPPONENT_RANKING_WEIGHT
        + indicator(record.importance == FixtureImportance::Derby) * DERBY_WEIGHT
        + attendance_ratio * ATTENDANCE_RATIO_WEIGHT
}
