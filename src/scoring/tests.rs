use assert_float_eq::*;

use super::*;
use crate::testing::{lopsided_results, result};

#[test]
fn unknown_team_falls_back_to_defaults() {
    let rates = ScoringRates::from_results(&lopsided_results());
    let stranger = Team::new("Nobody FC");
    assert_eq!(1.0 / 90.0, rates.goals_scored_per_minute(&stranger));
    assert_eq!(1.0, rates.defensive_factor(&stranger));
}

#[test]
fn empty_model_falls_back_to_defaults() {
    let rates = ScoringRates::from_results(&[]);
    assert_eq!(0, rates.teams());
    assert_eq!(DEFAULT_GOALS_PER_MINUTE, rates.goals_scored_per_minute(&Team::new("A")));
    assert_eq!(NEUTRAL_DEFENSIVE_FACTOR, rates.defensive_factor(&Team::new("A")));
}

#[test]
fn accumulates_both_sides_symmetrically() {
    let rates = ScoringRates::from_results(&[result("A", "B", 3, 1), result("C", "A", 2, 2)]);
    assert_eq!(
        Some(&TeamScoring {
            goals_scored: 5,
            goals_conceded: 3,
            matches: 2
        }),
        rates.team(&Team::new("A"))
    );
    assert_eq!(
        Some(&TeamScoring {
            goals_scored: 1,
            goals_conceded: 3,
            matches: 1
        }),
        rates.team(&Team::new("B"))
    );
    assert_eq!(8, rates.total_goals());
    assert_eq!(2, rates.total_matches());
}

#[test]
fn goals_scored_per_minute() {
    let rates = ScoringRates::from_results(&lopsided_results());
    assert_f64_near!(4.0 / 180.0, rates.goals_scored_per_minute(&Team::new("Team A")));
    assert_eq!(0.0, rates.goals_scored_per_minute(&Team::new("Team B")));
}

#[test]
fn defensive_factor_relative_to_league() {
    // 4 goals over 2 matches: each side concedes 1 per match on average
    let rates = ScoringRates::from_results(&lopsided_results());
    assert_f64_near!(1.0, rates.league_goals_conceded_per_match());
    assert_eq!(0.0, rates.defensive_factor(&Team::new("Team A")));
    assert_f64_near!(2.0, rates.defensive_factor(&Team::new("Team B")));
}

#[test]
fn defensive_factor_in_goalless_league() {
    let rates = ScoringRates::from_results(&[result("A", "B", 0, 0)]);
    assert_eq!(NEUTRAL_DEFENSIVE_FACTOR, rates.defensive_factor(&Team::new("A")));
}

#[test]
fn fold_order_does_not_matter() {
    let results = vec![
        result("A", "B", 3, 1),
        result("C", "A", 2, 2),
        result("B", "C", 0, 1),
        result("A", "C", 4, 0),
    ];
    let forward = ScoringRates::from_results(&results);
    let backward = ScoringRates::from_results(results.iter().rev());
    assert_eq!(forward, backward);

    let mut left = ScoringRates::builder();
    left.extend(&results[..2]);
    let mut right = ScoringRates::builder();
    right.extend(&results[2..]);
    assert_eq!(forward, right.merge(left).build());
}

#[test]
fn collect_from_iterator() {
    let results = lopsided_results();
    let rates: ScoringRates = results.iter().collect();
    assert_eq!(2, rates.teams());
}
