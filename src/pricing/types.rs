use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a fixture is classified from its two clubs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchType {
    /// Configured rivalry pairing
    Derby,
    /// Configured top-tier pairing that is not a derby
    Marquee,
    /// Both clubs share a home city
    Local,
    Ordinary,
}

impl MatchType {
    pub fn is_headline(self) -> bool {
        matches!(self, MatchType::Derby | MatchType::Marquee)
    }
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchType::Derby => write!(f, "derby"),
            MatchType::Marquee => write!(f, "marquee"),
            MatchType::Local => write!(f, "local"),
            MatchType::Ordinary => write!(f, "ordinary"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImportanceLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for ImportanceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportanceLevel::Low => write!(f, "low"),
            ImportanceLevel::Medium => write!(f, "medium"),
            ImportanceLevel::High => write!(f, "high"),
        }
    }
}

/// Result of classifying a pairing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchClassification {
    pub match_type: MatchType,
    pub importance: ImportanceLevel,
}

/// Expected ticket demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DemandLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for DemandLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DemandLevel::Low => write!(f, "low"),
            DemandLevel::Medium => write!(f, "medium"),
            DemandLevel::High => write!(f, "high"),
        }
    }
}

/// Coarse forecast of how likely a fixture is to sell out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SelloutProbability {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl std::fmt::Display for SelloutProbability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelloutProbability::Low => write!(f, "low"),
            SelloutProbability::Medium => write!(f, "medium"),
            SelloutProbability::High => write!(f, "high"),
            SelloutProbability::VeryHigh => write!(f, "very high"),
        }
    }
}

/// One earlier meeting of the same pairing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreviousMatch {
    pub attendance: u32,
    pub price: Decimal,
}

impl PreviousMatch {
    pub fn new(attendance: u32, price: Decimal) -> Self {
        Self { attendance, price }
    }
}

/// A fixture to price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRequest {
    pub home_team: String,
    pub away_team: String,
    pub city: String,
    pub stadium: String,
    /// Kickoff time as entered, e.g. "19:35"
    pub time: String,
    #[serde(default)]
    pub day_of_week: Option<Weekday>,
    /// Replaces the regression estimate as the base price
    #[serde(default)]
    pub base_price: Option<Decimal>,
    #[serde(default)]
    pub previous_matches: Vec<PreviousMatch>,
}

impl PricingRequest {
    pub fn new(
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        city: impl Into<String>,
        stadium: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            home_team: home_team.into(),
            away_team: away_team.into(),
            city: city.into(),
            stadium: stadium.into(),
            time: time.into(),
            day_of_week: None,
            base_price: None,
            previous_matches: Vec::new(),
        }
    }

    pub fn on(mut self, day: Weekday) -> Self {
        self.day_of_week = Some(day);
        self
    }

    pub fn with_base_price(mut self, price: Decimal) -> Self {
        self.base_price = Some(price);
        self
    }

    pub fn with_previous_matches(mut self, matches: Vec<PreviousMatch>) -> Self {
        self.previous_matches = matches;
        self
    }

    pub fn descriptor(&self) -> FixtureDescriptor {
        FixtureDescriptor {
            home_team: self.home_team.clone(),
            away_team: self.away_team.clone(),
            stadium: self.stadium.clone(),
        }
    }
}

/// Every intermediate value behind a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub feature: f64,
    /// Regression estimate, or the caller's override
    pub base_price: Decimal,
    pub importance_multiplier: f64,
    pub demand_multiplier: f64,
    pub capacity_multiplier: f64,
    pub attendance_adjustment: f64,
    /// Attendance share the adjustment was decided on
    pub attendance_rate: f64,
    /// base_price times all four multipliers
    pub raw_price: Decimal,
    /// Set when the raw price was blended with the tiered base
    pub tiered_base: Option<Decimal>,
    /// Price after blending, before floor and rounding
    pub blended_price: Decimal,
}

impl PriceBreakdown {
    pub fn fallback_applied(&self) -> bool {
        self.tiered_base.is_some()
    }
}

/// Engine output for one fixture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRecommendation {
    pub recommended_price: Decimal,
    /// In [0, 0.95]
    pub confidence: f64,
    pub sellout_probability: SelloutProbability,
    pub rationale: String,
    pub match_type: MatchType,
    pub importance: ImportanceLevel,
    pub demand: DemandLevel,
    pub breakdown: PriceBreakdown,
}

/// Fixture fields the elasticity curve depends on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureDescriptor {
    pub home_team: String,
    pub away_team: String,
    pub stadium: String,
}

/// One sample on a price/demand curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub price: Decimal,
    pub demand: u32,
    pub revenue: Decimal,
}
