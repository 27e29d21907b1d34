use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::catalog::ReferenceCatalog;
use crate::config::CurveConfig;
use crate::pricing::calculator::to_money;
use crate::pricing::demand::DEFAULT_DEMAND_ATTENDANCE_RATE;
use crate::pricing::features::team_tier_indicator;
use crate::pricing::types::{CurvePoint, FixtureDescriptor};

/// Price elasticity by the strongest club tier involved
///
/// Major clubs' fans are the least price sensitive.
pub fn elasticity_for(catalog: &ReferenceCatalog, descriptor: &FixtureDescriptor) -> f64 {
    let tier = team_tier_indicator(catalog, &descriptor.home_team, &descriptor.away_team);
    if tier >= 2.0 {
        0.8
    } else if tier >= 1.0 {
        1.0
    } else {
        1.5
    }
}

/// Simulated price/demand/revenue samples around a recommended price
///
/// Display only; nothing here feeds back into the recommendation. Returns
/// an empty curve for a non-positive price.
pub fn generate_elasticity_curve(
    catalog: &ReferenceCatalog,
    config: &CurveConfig,
    recommended_price: Decimal,
    descriptor: &FixtureDescriptor,
) -> Vec<CurvePoint> {
    let recommended = match recommended_price.to_f64() {
        Some(p) if p > 0.0 => p,
        _ => return Vec::new(),
    };

    let capacity = catalog.stadium_capacity(&descriptor.stadium) as f64;
    let rate = |team: &str| {
        catalog
            .attendance_rate(team)
            .unwrap_or(DEFAULT_DEMAND_ATTENDANCE_RATE)
    };
    let mean_rate = (rate(&descriptor.home_team) + rate(&descriptor.away_team)) / 2.0;
    let base_demand = capacity * mean_rate;
    let elasticity = elasticity_for(catalog, descriptor);

    let top = recommended * config.range_multiplier;
    let bottom = top * config.low_fraction;
    let steps = config.points.saturating_sub(1).max(1) as f64;

    (0..config.points)
        .map(|i| {
            let price = (bottom + (top - bottom) * i as f64 / steps).round();
            let ratio = price / recommended;
            let demand = (base_demand * ratio.powf(-elasticity)).min(capacity).round();
            let price = to_money(price);
            let demand = demand as u32;
            CurvePoint {
                price,
                demand,
                revenue: price
                    .checked_mul(Decimal::from(demand))
                    .unwrap_or(Decimal::MAX),
            }
        })
        .collect()
}
