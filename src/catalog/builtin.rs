//! Compiled-in reference data for the Chinese Super League

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{CatalogData, HistoricalMatchRecord, MatchTypeDefinition, Stadium, TeamProfile};
use crate::common::types::{FixtureImportance, OpponentRanking, TeamTier};

fn team(name: &str, fan_base: u64, city: &str, rate: f64, tier: TeamTier) -> TeamProfile {
    TeamProfile {
        name: name.to_string(),
        fan_base,
        home_city: Some(city.to_string()),
        attendance_rate: Some(rate),
        tier,
    }
}

fn stadium(name: &str, capacity: u32) -> Stadium {
    Stadium {
        name: name.to_string(),
        capacity,
    }
}

fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
    list.iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn fixture(
    (y, m, d): (i32, u32, u32),
    home: &str,
    away: &str,
    city: &str,
    stadium: &str,
    attendance: u32,
    price: Decimal,
    opponent_ranking: OpponentRanking,
    importance: FixtureImportance,
) -> Option<HistoricalMatchRecord> {
    Some(HistoricalMatchRecord {
        date: NaiveDate::from_ymd_opt(y, m, d)?,
        home_team: home.to_string(),
        away_team: away.to_string(),
        city: city.to_string(),
        stadium: stadium.to_string(),
        attendance,
        ticket_price: price,
        opponent_ranking,
        importance,
    })
}

pub(super) fn catalog_data() -> CatalogData {
    use FixtureImportance::{Derby, Ordinary};
    use OpponentRanking::{Medium, Strong, Weak};
    use TeamTier::{Major, Medium as Mid, Other};

    let teams = vec![
        team("Shanghai Port", 3_500_000, "Shanghai", 0.82, Major),
        team("Shanghai Shenhua", 4_500_000, "Shanghai", 0.88, Major),
        team("Beijing Guoan", 5_000_000, "Beijing", 0.86, Major),
        team("Shandong Taishan", 4_000_000, "Jinan", 0.85, Major),
        team("Chengdu Rongcheng", 2_500_000, "Chengdu", 0.92, Mid),
        team("Wuhan Three Towns", 1_200_000, "Wuhan", 0.65, Mid),
        team("Zhejiang FC", 1_500_000, "Hangzhou", 0.70, Mid),
        team("Tianjin Jinmen Tiger", 1_800_000, "Tianjin", 0.72, Other),
        team("Henan FC", 2_000_000, "Zhengzhou", 0.78, Other),
        team("Changchun Yatai", 1_000_000, "Changchun", 0.68, Other),
        team("Qingdao Hainiu", 800_000, "Qingdao", 0.60, Other),
        team("Qingdao West Coast", 500_000, "Qingdao", 0.58, Other),
        team("Meizhou Hakka", 600_000, "Meizhou", 0.62, Other),
        team("Shenzhen Peng City", 700_000, "Shenzhen", 0.55, Other),
    ];

    let stadiums = vec![
        stadium("Shanghai Pudong Football Stadium", 37_000),
        stadium("Shanghai Stadium", 56_000),
        stadium("Workers' Stadium", 68_000),
        stadium("Jinan Olympic Sports Center", 56_000),
        stadium("Phoenix Hill Football Stadium", 50_000),
        stadium("Wuhan Sports Center", 54_000),
        stadium("Huanglong Sports Center", 51_000),
        stadium("Tianjin Olympic Center", 54_000),
        stadium("Zhengzhou Hanghai Stadium", 29_000),
        stadium("Changchun Stadium", 25_000),
        stadium("Qingdao Youth Football Stadium", 50_000),
        stadium("Meizhou Wuhua Olympic Sports Center", 27_000),
        stadium("Shenzhen Youth Football Stadium", 20_000),
    ];

    let derbies = MatchTypeDefinition {
        label: "Derby".to_string(),
        pairs: pairs(&[
            ("Shanghai Port", "Shanghai Shenhua"),
            ("Beijing Guoan", "Tianjin Jinmen Tiger"),
        ]),
    };

    let marquee = MatchTypeDefinition {
        label: "Summit".to_string(),
        pairs: pairs(&[
            ("Beijing Guoan", "Shanghai Shenhua"),
            ("Beijing Guoan", "Shanghai Port"),
            ("Shandong Taishan", "Shanghai Port"),
            ("Shandong Taishan", "Beijing Guoan"),
            ("Shandong Taishan", "Shanghai Shenhua"),
            ("Chengdu Rongcheng", "Shanghai Port"),
        ]),
    };

    let fixtures = [
        fixture(
            (2023, 4, 8),
            "Shenzhen Peng City",
            "Henan FC",
            "Shenzhen",
            "Shenzhen Youth Football Stadium",
            12_600,
            dec!(30),
            Medium,
            Ordinary,
        ),
        fixture(
            (2023, 4, 15),
            "Shanghai Port",
            "Shanghai Shenhua",
            "Shanghai",
            "Shanghai Pudong Football Stadium",
            36_800,
            dec!(220),
            Strong,
            Derby,
        ),
        fixture(
            (2023, 4, 29),
            "Chengdu Rongcheng",
            "Shanghai Port",
            "Chengdu",
            "Phoenix Hill Football Stadium",
            48_900,
            dec!(120),
            Strong,
            Ordinary,
        ),
        fixture(
            (2023, 5, 6),
            "Shanghai Shenhua",
            "Henan FC",
            "Shanghai",
            "Shanghai Stadium",
            41_000,
            dec!(100),
            Medium,
            Ordinary,
        ),
        fixture(
            (2023, 5, 13),
            "Tianjin Jinmen Tiger",
            "Changchun Yatai",
            "Tianjin",
            "Tianjin Olympic Center",
            29_800,
            dec!(35),
            Weak,
            Ordinary,
        ),
        fixture(
            (2023, 5, 20),
            "Beijing Guoan",
            "Tianjin Jinmen Tiger",
            "Beijing",
            "Workers' Stadium",
            64_200,
            dec!(180),
            Medium,
            Derby,
        ),
        fixture(
            (2023, 6, 10),
            "Beijing Guoan",
            "Shanghai Shenhua",
            "Beijing",
            "Workers' Stadium",
            61_500,
            dec!(160),
            Strong,
            Ordinary,
        ),
        fixture(
            (2023, 6, 17),
            "Henan FC",
            "Qingdao Hainiu",
            "Zhengzhou",
            "Zhengzhou Hanghai Stadium",
            21_500,
            dec!(35),
            Weak,
            Ordinary,
        ),
        fixture(
            (2023, 6, 24),
            "Beijing Guoan",
            "Changchun Yatai",
            "Beijing",
            "Workers' Stadium",
            45_100,
            dec!(95),
            Weak,
            Ordinary,
        ),
        fixture(
            (2023, 7, 8),
            "Shandong Taishan",
            "Shanghai Port",
            "Jinan",
            "Jinan Olympic Sports Center",
            52_300,
            dec!(140),
            Strong,
            Ordinary,
        ),
        fixture(
            (2023, 7, 15),
            "Changchun Yatai",
            "Meizhou Hakka",
            "Changchun",
            "Changchun Stadium",
            16_200,
            dec!(25),
            Weak,
            Ordinary,
        ),
        fixture(
            (2023, 7, 22),
            "Shandong Taishan",
            "Meizhou Hakka",
            "Jinan",
            "Jinan Olympic Sports Center",
            38_600,
            dec!(75),
            Weak,
            Ordinary,
        ),
        fixture(
            (2023, 8, 5),
            "Qingdao Hainiu",
            "Shenzhen Peng City",
            "Qingdao",
            "Qingdao Youth Football Stadium",
            22_400,
            dec!(25),
            Weak,
            Ordinary,
        ),
        fixture(
            (2023, 8, 12),
            "Shanghai Port",
            "Beijing Guoan",
            "Shanghai",
            "Shanghai Pudong Football Stadium",
            35_200,
            dec!(170),
            Strong,
            Ordinary,
        ),
        fixture(
            (2023, 8, 26),
            "Chengdu Rongcheng",
            "Wuhan Three Towns",
            "Chengdu",
            "Phoenix Hill Football Stadium",
            46_200,
            dec!(70),
            Medium,
            Ordinary,
        ),
        fixture(
            (2023, 9, 9),
            "Wuhan Three Towns",
            "Zhejiang FC",
            "Wuhan",
            "Wuhan Sports Center",
            28_400,
            dec!(50),
            Medium,
            Ordinary,
        ),
        fixture(
            (2023, 9, 16),
            "Meizhou Hakka",
            "Qingdao West Coast",
            "Meizhou",
            "Meizhou Wuhua Olympic Sports Center",
            14_800,
            dec!(20),
            Weak,
            Ordinary,
        ),
        fixture(
            (2023, 9, 23),
            "Shanghai Shenhua",
            "Shanghai Port",
            "Shanghai",
            "Shanghai Stadium",
            55_100,
            dec!(240),
            Strong,
            Derby,
        ),
        fixture(
            (2023, 10, 7),
            "Qingdao West Coast",
            "Qingdao Hainiu",
            "Qingdao",
            "Qingdao Youth Football Stadium",
            27_600,
            dec!(40),
            Medium,
            Ordinary,
        ),
        fixture(
            (2023, 10, 21),
            "Zhejiang FC",
            "Henan FC",
            "Hangzhou",
            "Huanglong Sports Center",
            30_500,
            dec!(50),
            Medium,
            Ordinary,
        ),
        fixture(
            (2023, 10, 28),
            "Tianjin Jinmen Tiger",
            "Beijing Guoan",
            "Tianjin",
            "Tianjin Olympic Center",
            51_800,
            dec!(150),
            Strong,
            Derby,
        ),
        fixture(
            (2023, 11, 4),
            "Shanghai Port",
            "Chengdu Rongcheng",
            "Shanghai",
            "Shanghai Pudong Football Stadium",
            34_100,
            dec!(130),
            Strong,
            Ordinary,
        ),
    ]
    .into_iter()
    .flatten()
    .collect();

    CatalogData {
        teams,
        stadiums,
        primary_markets: vec!["Shanghai".to_string(), "Beijing".to_string()],
        derbies,
        marquee,
        fixtures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_fixture_date_is_valid() {
        // `fixture` drops records with an impossible date; none should be lost
        assert_eq!(catalog_data().fixtures.len(), 22);
    }

    #[test]
    fn test_fixture_venues_are_catalogued() {
        let data = catalog_data();
        for f in &data.fixtures {
            assert!(
                data.stadiums.iter().any(|s| s.name == f.stadium),
                "missing stadium {}",
                f.stadium
            );
            assert!(f.attendance > 0);
        }
    }
}
