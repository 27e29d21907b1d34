use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

use crate::catalog::ReferenceCatalog;
use crate::common::types::normalize_team_name;
use crate::config::PricingConfig;
use crate::pricing::classifier::classify;
use crate::pricing::demand::predict_demand;
use crate::pricing::features::extract_fixture_feature;
use crate::pricing::regression::LinearRegression;
use crate::pricing::training::TrainingSource;
use crate::pricing::types::{
    DemandLevel, ImportanceLevel, MatchType, PriceBreakdown, PricingRecommendation,
    PricingRequest, SelloutProbability,
};

/// Venue size at which the scarcity multiplier is neutral
const REFERENCE_CAPACITY: f64 = 60_000.0;
const SCARCITY_PREMIUM: f64 = 0.15;

const LOW_ATTENDANCE: f64 = 0.7;
const HIGH_ATTENDANCE: f64 = 0.9;
/// Attendance share reported when nothing is known about the home club
const DEFAULT_RESOLVED_ATTENDANCE: f64 = 0.75;

pub const MAX_CONFIDENCE: f64 = 0.95;
const BASE_CONFIDENCE: f64 = 0.60;

pub fn importance_multiplier(importance: ImportanceLevel, match_type: MatchType) -> f64 {
    match (importance, match_type) {
        (ImportanceLevel::High, _) | (_, MatchType::Derby) => 1.25,
        (ImportanceLevel::Medium, _) => 1.10,
        (ImportanceLevel::Low, _) => 0.90,
    }
}

pub fn demand_multiplier(demand: DemandLevel) -> f64 {
    match demand {
        DemandLevel::High => 1.25,
        DemandLevel::Medium => 1.05,
        DemandLevel::Low => 0.85,
    }
}

/// Smaller venues command a premium; venues above the reference size a discount
pub fn capacity_multiplier(capacity: u32) -> f64 {
    1.0 + SCARCITY_PREMIUM * (1.0 - capacity as f64 / REFERENCE_CAPACITY)
}

pub fn sellout_probability(importance_mult: f64, demand_mult: f64) -> SelloutProbability {
    let product = importance_mult * demand_mult;
    if product > 1.4 {
        SelloutProbability::VeryHigh
    } else if product > 1.2 {
        SelloutProbability::High
    } else if product > 1.0 {
        SelloutProbability::Medium
    } else {
        SelloutProbability::Low
    }
}

/// Attendance adjustment and the share it was decided on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttendanceSignal {
    pub adjustment: f64,
    pub rate: f64,
    pub from_history: bool,
}

fn adjustment_for(rate: f64) -> f64 {
    if rate < LOW_ATTENDANCE {
        0.90
    } else if rate > HIGH_ATTENDANCE {
        1.15
    } else {
        1.0
    }
}

/// Snap to the price grid, never below the floor
///
/// Amounts too large to divide onto the grid are truncated down to it.
pub fn round_price(price: Decimal, min_price: Decimal, granularity: Decimal) -> Decimal {
    let floor_to_grid = |p: Decimal| p - p.checked_rem(granularity).unwrap_or(Decimal::ZERO);

    let rounded = price
        .max(min_price)
        .checked_div(granularity)
        .and_then(|steps| steps.round().checked_mul(granularity))
        .unwrap_or_else(|| floor_to_grid(price.max(min_price)));

    if rounded < min_price {
        min_price
            .checked_div(granularity)
            .and_then(|steps| steps.ceil().checked_mul(granularity))
            .unwrap_or(min_price)
    } else {
        rounded
    }
}

/// Money from an f64 estimate, saturating at the representable bounds
pub(crate) fn to_money(value: f64) -> Decimal {
    match Decimal::from_f64(value) {
        Some(money) => money,
        None if value > 0.0 => Decimal::MAX,
        None => Decimal::ZERO,
    }
}

/// Apply a non-negative multiplier to an amount, saturating on overflow
fn scale(amount: Decimal, factor: f64) -> Decimal {
    amount
        .checked_mul(to_money(factor))
        .unwrap_or(Decimal::MAX)
}

/// Turns a request into a recommendation against a fitted model
///
/// Borrows everything it needs; the engine hands out one per call.
pub struct PriceCalculator<'a> {
    catalog: &'a ReferenceCatalog,
    config: &'a PricingConfig,
    model: &'a LinearRegression,
    source: TrainingSource,
}

impl<'a> PriceCalculator<'a> {
    pub fn new(
        catalog: &'a ReferenceCatalog,
        config: &'a PricingConfig,
        model: &'a LinearRegression,
        source: TrainingSource,
    ) -> Self {
        Self {
            catalog,
            config,
            model,
            source,
        }
    }

    /// Observed average attendance when supplied, else the home club's rate
    pub fn attendance_signal(&self, request: &PricingRequest, capacity: u32) -> AttendanceSignal {
        if !request.previous_matches.is_empty() {
            let total: f64 = request
                .previous_matches
                .iter()
                .map(|m| m.attendance as f64)
                .sum();
            let rate = total / request.previous_matches.len() as f64 / capacity as f64;
            return AttendanceSignal {
                adjustment: adjustment_for(rate),
                rate,
                from_history: true,
            };
        }

        match self.catalog.attendance_rate(&request.home_team) {
            Some(rate) => AttendanceSignal {
                adjustment: adjustment_for(rate),
                rate,
                from_history: false,
            },
            None => AttendanceSignal {
                adjustment: 1.0,
                rate: DEFAULT_RESOLVED_ATTENDANCE,
                from_history: false,
            },
        }
    }

    fn base_price(&self, request: &PricingRequest, feature: f64) -> Decimal {
        request
            .base_price
            .filter(|p| *p > Decimal::ZERO)
            .unwrap_or_else(|| to_money(self.model.predict(feature)))
    }

    fn tier_base(&self, importance: ImportanceLevel) -> Decimal {
        let tiers = &self.config.tier_base_prices;
        match importance {
            ImportanceLevel::High => tiers.high,
            ImportanceLevel::Medium => tiers.medium,
            ImportanceLevel::Low => tiers.low,
        }
    }

    pub fn recommend(&self, request: &PricingRequest) -> PricingRecommendation {
        let request = PricingRequest {
            home_team: normalize_team_name(&request.home_team),
            away_team: normalize_team_name(&request.away_team),
            ..request.clone()
        };
        let home = request.home_team.as_str();
        let away = request.away_team.as_str();

        let classification = classify(self.catalog, home, away);
        let match_type = classification.match_type;
        let importance = classification.importance;
        let demand = predict_demand(self.catalog, home, away, &request.stadium, match_type);

        let feature = extract_fixture_feature(self.catalog, self.config, &request, match_type);
        let base_price = self.base_price(&request, feature);

        let capacity = self.catalog.stadium_capacity(&request.stadium);
        let importance_mult = importance_multiplier(importance, match_type);
        let demand_mult = demand_multiplier(demand);
        let capacity_mult = capacity_multiplier(capacity);
        let attendance = self.attendance_signal(&request, capacity);

        let conditions = demand_mult * capacity_mult * attendance.adjustment;
        let raw_price = scale(base_price, importance_mult * conditions);

        let (blended_price, tiered_base) = if raw_price < self.config.fallback_threshold {
            let tiered = scale(self.tier_base(importance), conditions);
            let w = to_money(self.config.fallback_weight);
            (w * tiered + (Decimal::ONE - w) * raw_price, Some(tiered))
        } else {
            (raw_price, None)
        };

        let price = round_price(
            blended_price,
            self.config.min_price,
            self.config.price_granularity,
        );

        let breakdown = PriceBreakdown {
            feature,
            base_price,
            importance_multiplier: importance_mult,
            demand_multiplier: demand_mult,
            capacity_multiplier: capacity_mult,
            attendance_adjustment: attendance.adjustment,
            attendance_rate: attendance.rate,
            raw_price,
            tiered_base,
            blended_price,
        };

        debug!(
            home,
            away,
            %match_type,
            %importance,
            %demand,
            %price,
            ?breakdown,
            "Priced fixture"
        );

        PricingRecommendation {
            recommended_price: price,
            confidence: self.confidence(home, away, match_type, &attendance),
            sellout_probability: sellout_probability(importance_mult, demand_mult),
            rationale: self.rationale(match_type, importance, demand, &breakdown),
            match_type,
            importance,
            demand,
            breakdown,
        }
    }

    fn confidence(
        &self,
        home: &str,
        away: &str,
        match_type: MatchType,
        attendance: &AttendanceSignal,
    ) -> f64 {
        let mut score = BASE_CONFIDENCE;
        if self.catalog.is_major(home) || self.catalog.is_major(away) {
            score += 0.08;
        }
        if match_type.is_headline() {
            score += 0.08;
        }
        if attendance.from_history {
            score += 0.05;
        }
        if attendance.rate > 0.8 {
            score += 0.04;
        }
        score += self.model.diagnostics().r_squared.clamp(0.0, 1.0) * 0.15;
        if self.source == TrainingSource::Historical {
            score += 0.05;
        }
        score.clamp(0.0, MAX_CONFIDENCE)
    }

    fn rationale(
        &self,
        match_type: MatchType,
        importance: ImportanceLevel,
        demand: DemandLevel,
        breakdown: &PriceBreakdown,
    ) -> String {
        let profile = match importance {
            ImportanceLevel::High => "High-profile",
            ImportanceLevel::Medium => "Mid-profile",
            ImportanceLevel::Low => "Low-profile",
        };
        let outlook = match demand {
            DemandLevel::High => "strong expected demand supports a premium price",
            DemandLevel::Medium => "steady expected demand supports a standard price",
            DemandLevel::Low => "soft expected demand calls for an accessible price",
        };

        let label = match match_type {
            MatchType::Derby => format!(" ({})", self.catalog.derby_label()),
            MatchType::Marquee => format!(" ({})", self.catalog.marquee_label()),
            MatchType::Local | MatchType::Ordinary => String::new(),
        };

        let mut text = format!("{profile} {match_type} fixture{label}; {outlook}.");
        if breakdown.fallback_applied() {
            text.push_str(&format!(
                " Model estimate was below {}, blended toward the {importance} tier base price.",
                self.config.fallback_threshold
            ));
        }

        let d = self.model.diagnostics();
        text.push_str(&format!(
            " Model: R² {:.2}, MAE {:.1} over {} samples ({}).",
            d.r_squared, d.mean_absolute_error, d.samples, self.source
        ));
        text
    }
}
