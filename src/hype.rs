use log::{debug, trace};

use crate::constants::{
    AP_TIERS, GAP_PENALTY_PER_RANK, KENPOM_DEFAULT_MULTIPLIER, KENPOM_TIERS,
    NO_DATA_FALLBACK_SCORE, SINGLE_RANKED_MULTIPLIER, UNRANKED_CEILING, UNRANKED_KENPOM_DIVISOR,
};
use crate::error::HypeError;
use crate::team::Team;

/// Which ranking situation a matchup falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
    /// Both teams have an effective AP rank
    BothRanked { home: u32, away: u32 },
    /// Exactly one team has an effective AP rank
    OneRanked { rank: u32, home_is_ranked: bool },
    /// Neither team has an effective AP rank
    NeitherRanked,
}

/// Effective (AP, KenPom) ranks for a team, falling back to the previous
/// season when current rankings are not yet published.
pub fn get_effective_ranks(team: &Team) -> (Option<u32>, Option<u32>) {
    let ranks = (team.effective_ap_rank(), team.effective_kenpom_rank());
    if team.ap_rank.is_none() && ranks.0.is_some() {
        trace!("{}: using previous season AP rank {:?}", team.name, ranks.0);
    }
    if team.kenpom_rank.is_none() && ranks.1.is_some() {
        trace!("{}: using previous season KenPom rank {:?}", team.name, ranks.1);
    }
    ranks
}

/// Base hype score for an AP rank.
///
/// # Errors
/// Returns [`HypeError::InvalidApRank`] if `rank` is outside 1-25.
pub fn get_ap_tier_score(rank: u32) -> Result<u32, HypeError> {
    AP_TIERS
        .iter()
        .find(|(range, _)| range.contains(&rank))
        .map(|(_, score)| *score)
        .ok_or(HypeError::InvalidApRank { rank })
}

/// Penalty for the ranking gap between two ranked teams.
///
/// Each position of difference costs two points, so #3 vs #18 loses 30.
pub fn get_ranking_gap_penalty(rank_a: u32, rank_b: u32) -> f64 {
    f64::from(rank_a.abs_diff(rank_b)) * GAP_PENALTY_PER_RANK
}

/// Hype multiplier for an unranked opponent based on its KenPom rank.
pub fn get_kenpom_multiplier(kenpom_rank: u32) -> f64 {
    KENPOM_TIERS
        .iter()
        .find(|(threshold, _)| kenpom_rank <= *threshold)
        .map_or(KENPOM_DEFAULT_MULTIPLIER, |(_, multiplier)| *multiplier)
}

/// Decide which scenario applies from the teams' effective AP ranks.
pub fn classify_matchup(home_team: &Team, away_team: &Team) -> Scenario {
    let (home_rank, _) = get_effective_ranks(home_team);
    let (away_rank, _) = get_effective_ranks(away_team);

    match (home_rank, away_rank) {
        (Some(home), Some(away)) => Scenario::BothRanked { home, away },
        (Some(rank), None) => Scenario::OneRanked { rank, home_is_ranked: true },
        (None, Some(rank)) => Scenario::OneRanked { rank, home_is_ranked: false },
        (None, None) => Scenario::NeitherRanked,
    }
}

/// Calculate the hype score (0-100) for a matchup.
///
/// - Both ranked: tier score of the better rank, minus the gap penalty.
/// - One ranked: tier score dampened by [`SINGLE_RANKED_MULTIPLIER`], then
///   scaled by the unranked team's current KenPom rank if it has one.
/// - Neither ranked: KenPom-driven score capped at [`UNRANKED_CEILING`], or
///   [`NO_DATA_FALLBACK_SCORE`] without KenPom data for both teams.
///
/// # Errors
/// Returns [`HypeError::InvalidApRank`] if an AP rank outside 1-25 is used.
pub fn calculate_hype(home_team: &Team, away_team: &Team) -> Result<f64, HypeError> {
    let scenario = classify_matchup(home_team, away_team);
    let score = match scenario {
        Scenario::BothRanked { home, away } => {
            let base_score = f64::from(get_ap_tier_score(home.min(away))?);
            let penalty = get_ranking_gap_penalty(home, away);
            (base_score - penalty).max(0.0)
        }
        Scenario::OneRanked { rank, home_is_ranked } => {
            let unranked_team = if home_is_ranked { away_team } else { home_team };
            let base_score = f64::from(get_ap_tier_score(rank)?) * SINGLE_RANKED_MULTIPLIER;

            // Current-season KenPom only, see DESIGN.md
            match unranked_team.kenpom_rank {
                Some(kenpom) => base_score * get_kenpom_multiplier(kenpom),
                None => base_score,
            }
        }
        Scenario::NeitherRanked => match (home_team.kenpom_rank, away_team.kenpom_rank) {
            (Some(home), Some(away)) => {
                let avg_kenpom = (f64::from(home) + f64::from(away)) / 2.0;
                (UNRANKED_CEILING - avg_kenpom / UNRANKED_KENPOM_DIVISOR).max(0.0)
            }
            _ => NO_DATA_FALLBACK_SCORE,
        },
    };

    debug!(
        "{} vs {}: {:?} -> hype {:.2}",
        home_team.name, away_team.name, scenario, score
    );
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{AP_RANK_MAX, AP_RANK_MIN};

    fn ranked(name: &str, ap: u32, kenpom: u32) -> Team {
        Team::new(name).with_ap_rank(ap).with_kenpom_rank(kenpom)
    }

    fn unranked(name: &str, kenpom: Option<u32>) -> Team {
        let team = Team::new(name);
        match kenpom {
            Some(rank) => team.with_kenpom_rank(rank),
            None => team,
        }
    }

    #[test]
    fn test_close_rankings_high_hype() {
        let score = calculate_hype(&ranked("Duke", 3, 3), &ranked("Kentucky", 5, 5)).unwrap();
        assert!(score >= 80.0, "Expected >= 80 for close top-5 matchup, got {}", score);
        assert!((score - 96.0).abs() < 1e-10);
    }

    #[test]
    fn test_far_apart_rankings_lower_hype() {
        let close = calculate_hype(&ranked("Kansas", 1, 1), &ranked("Duke", 5, 5)).unwrap();
        let far = calculate_hype(&ranked("Kansas", 1, 1), &ranked("Arkansas", 25, 22)).unwrap();
        assert!(close > far, "close {} should beat far {}", close, far);
    }

    #[test]
    fn test_gap_penalty_reduces_base() {
        // 16 vs 25: base 40, penalty 18 -> 22
        let score = calculate_hype(&ranked("A", 16, 40), &ranked("B", 25, 60)).unwrap();
        assert!((score - 22.0).abs() < 1e-10);

        // 5 vs 25: base 100, penalty 40 -> 60
        let score = calculate_hype(&ranked("A", 5, 5), &ranked("B", 25, 60)).unwrap();
        assert!((score - 60.0).abs() < 1e-10);

        // 10 vs 25: base 60, penalty 30 -> 30
        let score = calculate_hype(&ranked("A", 10, 10), &ranked("B", 25, 60)).unwrap();
        assert!((score - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_gap_penalty_floors_at_zero() {
        // Only the better rank goes through the tier lookup
        let score = calculate_hype(&ranked("A", 1, 1), &ranked("B", 80, 150)).unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_order_of_teams_does_not_matter_when_both_ranked() {
        let a = ranked("A", 7, 9);
        let b = ranked("B", 12, 20);
        let ab = calculate_hype(&a, &b).unwrap();
        let ba = calculate_hype(&b, &a).unwrap();
        assert!((ab - ba).abs() < 1e-10);
    }

    #[test]
    fn test_single_ranked_below_both_ranked() {
        let both = calculate_hype(&ranked("Duke", 3, 3), &ranked("Kentucky", 5, 5)).unwrap();
        let one = calculate_hype(&ranked("Duke", 3, 3), &unranked("Davidson", Some(45))).unwrap();
        assert!(both > one, "both ranked {} should beat one ranked {}", both, one);
        assert!((one - 100.0 * 0.6 * 0.9).abs() < 1e-10);
    }

    #[test]
    fn test_high_kenpom_unranked_boosts_hype() {
        let home = ranked("Duke", 3, 3);
        let strong = calculate_hype(&home, &unranked("Davidson", Some(30))).unwrap();
        let weak = calculate_hype(&home, &unranked("Wofford", Some(180))).unwrap();
        assert!(strong > weak);
    }

    #[test]
    fn test_ranked_away_team_is_found() {
        let home = unranked("Davidson", Some(30));
        let away = ranked("Duke", 8, 10);
        let score = calculate_hype(&home, &away).unwrap();
        assert!((score - 80.0 * 0.6 * 0.9).abs() < 1e-10);
    }

    #[test]
    fn test_unranked_team_without_kenpom_uses_dampened_base() {
        let score = calculate_hype(&ranked("Duke", 3, 3), &unranked("Unknown", None)).unwrap();
        assert!(score > 0.0);
        assert!((score - 100.0 * SINGLE_RANKED_MULTIPLIER).abs() < 1e-10);
    }

    #[test]
    fn test_very_weak_unranked_uses_default_multiplier() {
        let score = calculate_hype(&ranked("Duke", 3, 3), &unranked("Weak", Some(250))).unwrap();
        assert!((score - 100.0 * 0.6 * 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_one_ranked_ignores_previous_season_kenpom() {
        let home = ranked("Duke", 3, 3);
        let away = Team::new("Davidson").with_previous_season(None, Some(20));
        let score = calculate_hype(&home, &away).unwrap();
        assert!((score - 100.0 * SINGLE_RANKED_MULTIPLIER).abs() < 1e-10);
    }

    #[test]
    fn test_early_season_fallback_uses_previous_rankings() {
        let home = Team::new("Duke").with_previous_season(Some(3), Some(3));
        let away = Team::new("Kentucky").with_previous_season(Some(5), Some(5));
        let fallback = calculate_hype(&home, &away).unwrap();
        let current = calculate_hype(&ranked("Duke", 3, 3), &ranked("Kentucky", 5, 5)).unwrap();

        assert!(fallback >= 80.0, "Expected high hype using previous season ranks, got {}", fallback);
        assert!((fallback - current).abs() < 1e-10);
    }

    #[test]
    fn test_neither_ranked_kenpom_score() {
        let score =
            calculate_hype(&unranked("Davidson", Some(60)), &unranked("Wofford", Some(80))).unwrap();
        assert!((0.0..=40.0).contains(&score));
        assert!((score - 33.0).abs() < 1e-10);
    }

    #[test]
    fn test_neither_ranked_no_data_fallback() {
        let score = calculate_hype(&unranked("A", None), &unranked("B", None)).unwrap();
        assert_eq!(score, 20.0);
    }

    #[test]
    fn test_neither_ranked_one_kenpom_missing_fallback() {
        let score = calculate_hype(&unranked("A", Some(10)), &unranked("B", None)).unwrap();
        assert_eq!(score, NO_DATA_FALLBACK_SCORE);
    }

    #[test]
    fn test_neither_ranked_low_quality() {
        let score = calculate_hype(&unranked("A", Some(280)), &unranked("B", Some(310))).unwrap();
        assert!(score <= 20.0);
        assert!((score - 10.5).abs() < 1e-10);
    }

    #[test]
    fn test_neither_ranked_floors_at_zero() {
        let score = calculate_hype(&unranked("A", Some(450)), &unranked("B", Some(500))).unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_invalid_ap_rank_propagates() {
        // Only the better rank is looked up when both are ranked
        let score = calculate_hype(&ranked("A", 30, 1), &ranked("B", 2, 2)).unwrap();
        assert!((score - 44.0).abs() < 1e-10);

        let err = calculate_hype(&ranked("A", 30, 1), &ranked("B", 40, 2)).unwrap_err();
        assert_eq!(err, HypeError::InvalidApRank { rank: 30 });

        let err = calculate_hype(&ranked("A", 30, 1), &unranked("B", None)).unwrap_err();
        assert_eq!(err, HypeError::InvalidApRank { rank: 30 });
    }

    #[test]
    fn test_get_ap_tier_score_invalid() {
        let err = get_ap_tier_score(30).unwrap_err();
        assert!(err.to_string().contains("Invalid AP rank"));
        assert!(err.to_string().contains("30"));
        assert!(get_ap_tier_score(0).is_err());
        assert!(get_ap_tier_score(26).is_err());
    }

    #[test]
    fn test_get_ap_tier_score_full_domain() {
        for rank in AP_RANK_MIN..=AP_RANK_MAX {
            let expected = match rank {
                1..=5 => 100,
                6..=9 => 80,
                10..=15 => 60,
                _ => 40,
            };
            assert_eq!(get_ap_tier_score(rank), Ok(expected), "rank {}", rank);
        }
    }

    #[test]
    fn test_kenpom_multiplier_boundaries() {
        assert_eq!(get_kenpom_multiplier(1), 0.9);
        assert_eq!(get_kenpom_multiplier(50), 0.9);
        assert_eq!(get_kenpom_multiplier(51), 0.75);
        assert_eq!(get_kenpom_multiplier(100), 0.75);
        assert_eq!(get_kenpom_multiplier(101), 0.6);
        assert_eq!(get_kenpom_multiplier(200), 0.6);
        assert_eq!(get_kenpom_multiplier(201), 0.5);
        assert_eq!(get_kenpom_multiplier(363), 0.5);
    }

    #[test]
    fn test_ranking_gap_penalty() {
        assert_eq!(get_ranking_gap_penalty(3, 18), 30.0);
        assert_eq!(get_ranking_gap_penalty(18, 3), 30.0);
        assert_eq!(get_ranking_gap_penalty(7, 7), 0.0);
    }

    #[test]
    fn test_classify_matchup() {
        let a = ranked("A", 4, 4);
        let b = unranked("B", Some(90));
        let c = Team::new("C").with_previous_season(Some(11), None);

        assert_eq!(classify_matchup(&a, &c), Scenario::BothRanked { home: 4, away: 11 });
        assert_eq!(classify_matchup(&a, &b), Scenario::OneRanked { rank: 4, home_is_ranked: true });
        assert_eq!(classify_matchup(&b, &c), Scenario::OneRanked { rank: 11, home_is_ranked: false });
        assert_eq!(classify_matchup(&b, &b), Scenario::NeitherRanked);
    }
}
