use log::debug;
use rayon::prelude::*;

use crate::error::HypeError;
use crate::game::Game;
use crate::hype::calculate_hype;
use crate::team::Team;

/// Calculate hype scores for many matchups.
///
/// Uses parallel processing; results are returned in input order.
///
/// # Arguments
/// * `matchups` - (home, away) pairs
///
/// # Errors
/// Returns the first [`HypeError`] hit by any matchup.
pub fn calculate_hype_batch(matchups: &[(Team, Team)]) -> Result<Vec<f64>, HypeError> {
    debug!("scoring {} matchups", matchups.len());
    matchups
        .par_iter()
        .map(|(home, away)| calculate_hype(home, away))
        .collect()
}

/// Store a predicted hype score on every game in the slate.
///
/// Every game is scored before any prediction is written, so an error
/// leaves the slate untouched.
pub fn predict_slate(games: &mut [Game]) -> Result<(), HypeError> {
    debug!("predicting hype for {} games", games.len());
    let scores: Vec<f64> = games
        .par_iter()
        .map(|game| calculate_hype(&game.home_team, &game.away_team))
        .collect::<Result<_, _>>()?;

    for (game, score) in games.iter_mut().zip(scores) {
        game.predicted_score = Some(score);
    }
    Ok(())
}

/// Games with a prediction, highest hype first.
///
/// Returns (game_id, predicted_score) pairs; ties are ordered by game id.
pub fn rank_slate(games: &[Game]) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = games
        .iter()
        .filter_map(|game| game.predicted_score.map(|score| (game.game_id.clone(), score)))
        .collect();

    ranked.sort_by(|(id_a, a), (id_b, b)| b.total_cmp(a).then_with(|| id_a.cmp(id_b)));
    ranked
}
