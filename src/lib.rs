//! Hype Core - matchup hype scoring for college basketball.
//!
//! Scores a matchup from the two teams' AP poll and KenPom ranks. Python
//! bindings via PyO3 are built with the `python` feature.

pub mod constants;
pub mod error;
pub mod game;
pub mod hype;
pub mod slate;
pub mod team;

pub use constants::{
    AP_TIERS, KENPOM_DEFAULT_MULTIPLIER, KENPOM_TIERS, NO_DATA_FALLBACK_SCORE,
    SINGLE_RANKED_MULTIPLIER, UNRANKED_CEILING,
};
pub use error::HypeError;
pub use game::{Game, GameSnapshot, GameState};
pub use hype::{
    calculate_hype, classify_matchup, get_ap_tier_score, get_effective_ranks,
    get_kenpom_multiplier, get_ranking_gap_penalty, Scenario,
};
pub use slate::{calculate_hype_batch, predict_slate, rank_slate};
pub use team::Team;

#[cfg(feature = "python")]
mod python {
    use pyo3::prelude::*;

    use crate::constants::{
        KENPOM_DEFAULT_MULTIPLIER, NO_DATA_FALLBACK_SCORE, SINGLE_RANKED_MULTIPLIER,
        UNRANKED_CEILING,
    };
    use crate::game::{Game, GameSnapshot, GameState};
    use crate::team::Team;

    /// Calculate the hype score for a matchup.
    ///
    /// Raises ValueError for an AP rank outside 1-25.
    #[pyfunction]
    #[pyo3(name = "calculate_hype")]
    fn py_calculate_hype(home_team: &Team, away_team: &Team) -> PyResult<f64> {
        Ok(crate::hype::calculate_hype(home_team, away_team)?)
    }

    #[pyfunction]
    #[pyo3(name = "get_ap_tier_score")]
    fn py_get_ap_tier_score(rank: u32) -> PyResult<u32> {
        Ok(crate::hype::get_ap_tier_score(rank)?)
    }

    #[pyfunction]
    #[pyo3(name = "get_kenpom_multiplier")]
    fn py_get_kenpom_multiplier(kenpom_rank: u32) -> f64 {
        crate::hype::get_kenpom_multiplier(kenpom_rank)
    }

    #[pyfunction]
    #[pyo3(name = "get_ranking_gap_penalty")]
    fn py_get_ranking_gap_penalty(rank_a: u32, rank_b: u32) -> f64 {
        crate::hype::get_ranking_gap_penalty(rank_a, rank_b)
    }

    /// Score many (home, away) matchups in parallel.
    #[pyfunction]
    #[pyo3(name = "calculate_hype_batch")]
    fn py_calculate_hype_batch(py: Python<'_>, matchups: Vec<(Team, Team)>) -> PyResult<Vec<f64>> {
        let scores = py.allow_threads(|| crate::slate::calculate_hype_batch(&matchups))?;
        Ok(scores)
    }

    /// Python module definition
    #[pymodule]
    fn hype_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
        // Classes
        m.add_class::<Team>()?;
        m.add_class::<Game>()?;
        m.add_class::<GameSnapshot>()?;
        m.add_class::<GameState>()?;

        // Scoring functions
        m.add_function(wrap_pyfunction!(py_calculate_hype, m)?)?;
        m.add_function(wrap_pyfunction!(py_get_ap_tier_score, m)?)?;
        m.add_function(wrap_pyfunction!(py_get_kenpom_multiplier, m)?)?;
        m.add_function(wrap_pyfunction!(py_get_ranking_gap_penalty, m)?)?;
        m.add_function(wrap_pyfunction!(py_calculate_hype_batch, m)?)?;

        // Constants
        m.add("SINGLE_RANKED_MULTIPLIER", SINGLE_RANKED_MULTIPLIER)?;
        m.add("KENPOM_DEFAULT_MULTIPLIER", KENPOM_DEFAULT_MULTIPLIER)?;
        m.add("NO_DATA_FALLBACK_SCORE", NO_DATA_FALLBACK_SCORE)?;
        m.add("UNRANKED_CEILING", UNRANKED_CEILING)?;

        Ok(())
    }
}
