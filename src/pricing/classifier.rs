use crate::catalog::ReferenceCatalog;
use crate::pricing::types::{ImportanceLevel, MatchClassification, MatchType};

/// Derive match type and importance from the two clubs
///
/// Symmetric in its arguments. Unknown clubs count as non-major and simply
/// miss the pairing and city lookups.
pub fn classify(catalog: &ReferenceCatalog, home: &str, away: &str) -> MatchClassification {
    let match_type = if catalog.is_derby(home, away) {
        MatchType::Derby
    } else if catalog.is_marquee(home, away) {
        MatchType::Marquee
    } else if catalog.share_home_city(home, away) {
        MatchType::Local
    } else {
        MatchType::Ordinary
    };

    let majors = [catalog.is_major(home), catalog.is_major(away)]
        .iter()
        .filter(|m| **m)
        .count();

    let importance = match (match_type, majors) {
        (MatchType::Derby | MatchType::Marquee, _) => ImportanceLevel::High,
        (_, 2) => ImportanceLevel::High,
        (_, 1) => ImportanceLevel::Medium,
        (MatchType::Local, _) => ImportanceLevel::Medium,
        (MatchType::Ordinary, _) => ImportanceLevel::Low,
    };

    MatchClassification {
        match_type,
        importance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ReferenceCatalog {
        ReferenceCatalog::builtin().unwrap()
    }

    #[test]
    fn test_derby_is_high_importance() {
        let c = classify(&catalog(), "Shanghai Port", "Shanghai Shenhua");
        assert_eq!(c.match_type, MatchType::Derby);
        assert_eq!(c.importance, ImportanceLevel::High);
    }

    #[test]
    fn test_derby_across_cities() {
        let c = classify(&catalog(), "Tianjin Jinmen Tiger", "Beijing Guoan");
        assert_eq!(c.match_type, MatchType::Derby);
        assert_eq!(c.importance, ImportanceLevel::High);
    }

    #[test]
    fn test_marquee_is_high_importance() {
        let c = classify(&catalog(), "Chengdu Rongcheng", "Shanghai Port");
        assert_eq!(c.match_type, MatchType::Marquee);
        assert_eq!(c.importance, ImportanceLevel::High);
    }

    #[test]
    fn test_classification_is_symmetric() {
        let catalog = catalog();
        let pairs = [
            ("Shanghai Port", "Shanghai Shenhua"),
            ("Beijing Guoan", "Shandong Taishan"),
            ("Qingdao Hainiu", "Qingdao West Coast"),
            ("Henan FC", "Meizhou Hakka"),
            ("Shanghai Port", "Atlantis Rovers"),
        ];
        for (a, b) in pairs {
            assert_eq!(classify(&catalog, a, b), classify(&catalog, b, a), "{a} / {b}");
        }
    }

    #[test]
    fn test_prefixed_names_classify_the_same() {
        let catalog = catalog();
        assert_eq!(
            classify(&catalog, "team Shanghai Port", "Team Shanghai Shenhua"),
            classify(&catalog, "Shanghai Port", "Shanghai Shenhua")
        );
    }

    #[test]
    fn test_local_fixture_is_medium() {
        let c = classify(&catalog(), "Qingdao Hainiu", "Qingdao West Coast");
        assert_eq!(c.match_type, MatchType::Local);
        assert_eq!(c.importance, ImportanceLevel::Medium);
    }

    #[test]
    fn test_one_major_club_is_medium() {
        let c = classify(&catalog(), "Shanghai Shenhua", "Henan FC");
        assert_eq!(c.match_type, MatchType::Ordinary);
        assert_eq!(c.importance, ImportanceLevel::Medium);
    }

    #[test]
    fn test_unknown_clubs_are_low() {
        let c = classify(&catalog(), "Atlantis Rovers", "El Dorado City");
        assert_eq!(c.match_type, MatchType::Ordinary);
        assert_eq!(c.importance, ImportanceLevel::Low);
    }

    #[test]
    fn test_ordinary_minor_clubs_are_low() {
        let c = classify(&catalog(), "Henan FC", "Meizhou Hakka");
        assert_eq!(c.importance, ImportanceLevel::Low);
    }
}
