//! Reference data catalog
//!
//! Static lookup tables the pricing pipeline reads from: stadium capacities,
//! club fan bases, home cities, attendance rates, commercial tiers, derby and
//! marquee pairings, primary markets and the historical fixtures the
//! regression is trained on.
//!
//! The catalog is immutable once built. All team keys are normalized with
//! [`normalize_team_name`] on the way in and on every lookup; stadium and
//! city keys are compared case-insensitively.

mod builtin;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::common::errors::{PricingError, Result};
use crate::common::types::{normalize_team_name, FixtureImportance, OpponentRanking, TeamTier};

/// Capacity assumed for stadiums missing from the catalog
pub const DEFAULT_STADIUM_CAPACITY: u32 = 25_000;

/// Fan base assumed for clubs missing from the catalog
pub const DEFAULT_FAN_BASE: u64 = 500_000;

/// Everything the catalog knows about one club
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamProfile {
    pub name: String,
    pub fan_base: u64,
    #[serde(default)]
    pub home_city: Option<String>,
    /// Typical attendance as a share of capacity, in (0, 1]
    #[serde(default)]
    pub attendance_rate: Option<f64>,
    #[serde(default)]
    pub tier: TeamTier,
}

/// A venue and its capacity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stadium {
    pub name: String,
    pub capacity: u32,
}

/// A labelled set of unordered team pairings (derbies, marquee fixtures)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTypeDefinition {
    pub label: String,
    pub pairs: Vec<(String, String)>,
}

/// A played fixture with observed attendance and ticket price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalMatchRecord {
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
    pub city: String,
    pub stadium: String,
    pub attendance: u32,
    pub ticket_price: Decimal,
    pub opponent_ranking: OpponentRanking,
    pub importance: FixtureImportance,
}

/// Serializable form of the catalog, as stored in a JSON override file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogData {
    pub teams: Vec<TeamProfile>,
    pub stadiums: Vec<Stadium>,
    pub primary_markets: Vec<String>,
    pub derbies: MatchTypeDefinition,
    pub marquee: MatchTypeDefinition,
    #[serde(default)]
    pub fixtures: Vec<HistoricalMatchRecord>,
}

/// Unordered pair key, so (A, B) and (B, A) hash the same
type PairKey = (String, String);

fn pair_key(a: &str, b: &str) -> PairKey {
    let a = normalize_team_name(a);
    let b = normalize_team_name(b);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn fold_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Immutable, indexed reference data
#[derive(Debug, Clone)]
pub struct ReferenceCatalog {
    teams: HashMap<String, TeamProfile>,
    stadiums: HashMap<String, u32>,
    primary_markets: HashSet<String>,
    derby_label: String,
    derbies: HashSet<PairKey>,
    marquee_label: String,
    marquee: HashSet<PairKey>,
    fixtures: Vec<HistoricalMatchRecord>,
}

impl ReferenceCatalog {
    /// Build an indexed catalog, validating every entry
    pub fn new(data: CatalogData) -> Result<Self> {
        let mut teams = HashMap::with_capacity(data.teams.len());
        for mut team in data.teams {
            team.name = normalize_team_name(&team.name);
            if team.name.is_empty() {
                return Err(PricingError::Catalog("team with empty name".to_string()));
            }
            if let Some(rate) = team.attendance_rate {
                if !(rate > 0.0 && rate <= 1.0) {
                    return Err(PricingError::Catalog(format!(
                        "attendance rate {} for {} is outside (0, 1]",
                        rate, team.name
                    )));
                }
            }
            teams.insert(team.name.clone(), team);
        }

        let mut stadiums = HashMap::with_capacity(data.stadiums.len());
        for stadium in data.stadiums {
            if stadium.capacity == 0 {
                return Err(PricingError::Catalog(format!(
                    "stadium {} has zero capacity",
                    stadium.name
                )));
            }
            stadiums.insert(fold_key(&stadium.name), stadium.capacity);
        }

        for fixture in &data.fixtures {
            if fixture.ticket_price <= Decimal::ZERO {
                return Err(PricingError::Catalog(format!(
                    "fixture {} vs {} on {} has non-positive price {}",
                    fixture.home_team, fixture.away_team, fixture.date, fixture.ticket_price
                )));
            }
        }

        Ok(Self {
            teams,
            stadiums,
            primary_markets: data.primary_markets.iter().map(|c| fold_key(c)).collect(),
            derby_label: data.derbies.label,
            derbies: data.derbies.pairs.iter().map(|(a, b)| pair_key(a, b)).collect(),
            marquee_label: data.marquee.label,
            marquee: data.marquee.pairs.iter().map(|(a, b)| pair_key(a, b)).collect(),
            fixtures: data.fixtures,
        })
    }

    /// The compiled-in Chinese Super League reference data
    pub fn builtin() -> Result<Self> {
        Self::new(builtin::catalog_data())
    }

    /// Load a catalog override from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let data: CatalogData = serde_json::from_str(&raw)?;
        Self::new(data)
    }

    /// Same catalog with the historical fixtures removed
    ///
    /// Used to exercise the synthetic training path.
    pub fn without_fixtures(mut self) -> Self {
        self.fixtures.clear();
        self
    }

    pub fn team(&self, name: &str) -> Option<&TeamProfile> {
        self.teams.get(&normalize_team_name(name))
    }

    pub fn stadium_capacity(&self, stadium: &str) -> u32 {
        self.stadiums
            .get(&fold_key(stadium))
            .copied()
            .unwrap_or(DEFAULT_STADIUM_CAPACITY)
    }

    pub fn fan_base(&self, team: &str) -> u64 {
        self.team(team).map(|t| t.fan_base).unwrap_or(DEFAULT_FAN_BASE)
    }

    pub fn home_city(&self, team: &str) -> Option<&str> {
        self.team(team).and_then(|t| t.home_city.as_deref())
    }

    /// Historical attendance rate, if the club has one on record
    ///
    /// Callers pick their own default for a miss.
    pub fn attendance_rate(&self, team: &str) -> Option<f64> {
        self.team(team).and_then(|t| t.attendance_rate)
    }

    pub fn tier(&self, team: &str) -> TeamTier {
        self.team(team).map(|t| t.tier).unwrap_or_default()
    }

    pub fn is_major(&self, team: &str) -> bool {
        self.tier(team) == TeamTier::Major
    }

    /// Both clubs known and based in the same city
    pub fn share_home_city(&self, a: &str, b: &str) -> bool {
        match (self.home_city(a), self.home_city(b)) {
            (Some(ca), Some(cb)) => fold_key(ca) == fold_key(cb),
            _ => false,
        }
    }

    pub fn is_derby(&self, a: &str, b: &str) -> bool {
        self.derbies.contains(&pair_key(a, b))
    }

    pub fn is_marquee(&self, a: &str, b: &str) -> bool {
        self.marquee.contains(&pair_key(a, b))
    }

    pub fn derby_label(&self) -> &str {
        &self.derby_label
    }

    pub fn marquee_label(&self) -> &str {
        &self.marquee_label
    }

    pub fn is_primary_market(&self, city: &str) -> bool {
        self.primary_markets.contains(&fold_key(city))
    }

    pub fn fixtures(&self) -> &[HistoricalMatchRecord] {
        &self.fixtures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = ReferenceCatalog::builtin().unwrap();
        assert!(!catalog.fixtures().is_empty());
        assert_eq!(catalog.derby_label(), "Derby");
    }

    #[test]
    fn test_lookups_normalize_team_names() {
        let catalog = ReferenceCatalog::builtin().unwrap();
        assert_eq!(catalog.fan_base("team Shanghai Port"), catalog.fan_base("Shanghai Port"));
        assert_eq!(catalog.home_city("Team Beijing Guoan"), Some("Beijing"));
        assert!(catalog.is_major("team Shandong Taishan"));
    }

    #[test]
    fn test_unknown_lookups_use_defaults() {
        let catalog = ReferenceCatalog::builtin().unwrap();
        assert_eq!(catalog.stadium_capacity("Nowhere Arena"), DEFAULT_STADIUM_CAPACITY);
        assert_eq!(catalog.fan_base("Atlantis Rovers"), DEFAULT_FAN_BASE);
        assert_eq!(catalog.tier("Atlantis Rovers"), TeamTier::Other);
        assert_eq!(catalog.attendance_rate("Atlantis Rovers"), None);
        assert_eq!(catalog.home_city("Atlantis Rovers"), None);
    }

    #[test]
    fn test_stadium_lookup_is_case_insensitive() {
        let catalog = ReferenceCatalog::builtin().unwrap();
        assert_eq!(catalog.stadium_capacity("workers' stadium"), 68_000);
        assert_eq!(catalog.stadium_capacity("  Changchun Stadium "), 25_000);
    }

    #[test]
    fn test_pairings_are_symmetric() {
        let catalog = ReferenceCatalog::builtin().unwrap();
        assert!(catalog.is_derby("Shanghai Port", "Shanghai Shenhua"));
        assert!(catalog.is_derby("Shanghai Shenhua", "team Shanghai Port"));
        assert!(catalog.is_marquee("Shanghai Port", "Beijing Guoan"));
        assert!(catalog.is_marquee("Beijing Guoan", "Shanghai Port"));
        assert!(!catalog.is_derby("Henan FC", "Meizhou Hakka"));
    }

    #[test]
    fn test_unknown_teams_never_share_a_city() {
        let catalog = ReferenceCatalog::builtin().unwrap();
        assert!(!catalog.share_home_city("Atlantis Rovers", "Atlantis United"));
        assert!(catalog.share_home_city("Qingdao Hainiu", "Qingdao West Coast"));
    }

    #[test]
    fn test_rejects_bad_attendance_rate() {
        let mut data = builtin::catalog_data();
        data.teams[0].attendance_rate = Some(1.4);
        let err = ReferenceCatalog::new(data).unwrap_err();
        assert!(matches!(err, PricingError::Catalog(_)));
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let mut data = builtin::catalog_data();
        data.stadiums[0].capacity = 0;
        assert!(ReferenceCatalog::new(data).is_err());
    }

    #[test]
    fn test_rejects_non_positive_price() {
        let mut data = builtin::catalog_data();
        data.fixtures[0].ticket_price = Decimal::ZERO;
        assert!(ReferenceCatalog::new(data).is_err());
    }

    #[test]
    fn test_catalog_data_json_roundtrip_builds() {
        let json = serde_json::to_string(&builtin::catalog_data()).unwrap();
        let data: CatalogData = serde_json::from_str(&json).unwrap();
        let catalog = ReferenceCatalog::new(data).unwrap();
        assert_eq!(catalog.fixtures().len(), ReferenceCatalog::builtin().unwrap().fixtures().len());
    }

    #[test]
    fn test_without_fixtures() {
        let catalog = ReferenceCatalog::builtin().unwrap().without_fixtures();
        assert!(catalog.fixtures().is_empty());
        assert!(catalog.is_derby("Shanghai Port", "Shanghai Shenhua"));
    }
}
