//! Types shared by the reference catalog and the pricing pipeline

use serde::{Deserialize, Serialize};

/// Localized prefix some callers put in front of club names
const TEAM_PREFIX: &str = "team ";

/// Strip the localized "team " prefix and surrounding whitespace.
///
/// Every catalog key and every comparison between team names goes through
/// this function, so "Team Shanghai Port" and "Shanghai Port" resolve to the
/// same club.
pub fn normalize_team_name(raw: &str) -> String {
    let trimmed = raw.trim();
    let stripped = match trimmed.get(..TEAM_PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(TEAM_PREFIX) => &trimmed[TEAM_PREFIX.len()..],
        _ => trimmed,
    };
    stripped.trim().to_string()
}

/// Commercial tier of a club
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TeamTier {
    /// Large, price-insensitive fan base
    Major,
    Medium,
    #[default]
    Other,
}

impl std::fmt::Display for TeamTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamTier::Major => write!(f, "major"),
            TeamTier::Medium => write!(f, "medium"),
            TeamTier::Other => write!(f, "other"),
        }
    }
}

/// Strength of the visiting side in a historical fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentRanking {
    Strong,
    Medium,
    Weak,
}

impl OpponentRanking {
    /// Indicator used by the historical feature (weak=0, medium=1, strong=2)
    pub fn indicator(self) -> f64 {
        match self {
            OpponentRanking::Weak => 0.0,
            OpponentRanking::Medium => 1.0,
            OpponentRanking::Strong => 2.0,
        }
    }
}

/// Importance recorded against a historical fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixtureImportance {
    Derby,
    Ordinary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_prefix() {
        assert_eq!(normalize_team_name("team Shanghai Port"), "Shanghai Port");
        assert_eq!(normalize_team_name("Team Beijing Guoan"), "Beijing Guoan");
        assert_eq!(normalize_team_name("  TEAM   Henan FC "), "Henan FC");
    }

    #[test]
    fn test_normalize_leaves_plain_names() {
        assert_eq!(normalize_team_name("Shanghai Shenhua"), "Shanghai Shenhua");
        assert_eq!(normalize_team_name(" Zhejiang FC "), "Zhejiang FC");
        // Prefix only counts as a whole word
        assert_eq!(normalize_team_name("Teamsters United"), "Teamsters United");
    }

    #[test]
    fn test_normalize_handles_short_and_multibyte_input() {
        assert_eq!(normalize_team_name(""), "");
        assert_eq!(normalize_team_name("FC"), "FC");
        assert_eq!(normalize_team_name("上海海港"), "上海海港");
    }

    #[test]
    fn test_opponent_indicator() {
        assert_eq!(OpponentRanking::Weak.indicator(), 0.0);
        assert_eq!(OpponentRanking::Medium.indicator(), 1.0);
        assert_eq!(OpponentRanking::Strong.indicator(), 2.0);
    }
}
