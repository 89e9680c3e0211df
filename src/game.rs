#[cfg(feature = "python")]
use pyo3::prelude::*;

use crate::error::HypeError;
use crate::hype::calculate_hype;
use crate::team::Team;

#[cfg_attr(feature = "python", pyclass(eq, eq_int))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    PreGame,
    Live,
    Final,
}

/// Game state at a single point in time.
#[cfg_attr(feature = "python", pyclass(get_all, set_all))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Seconds left in the game (0 = final)
    pub clock_seconds_remaining: u32,
    pub home_score: u32,
    pub away_score: u32,
    /// Total lead changes so far
    pub lead_changes: u32,
    pub home_fg_made: u32,
    pub away_fg_made: u32,
    /// Estimated total possessions so far
    pub possessions: u32,
    pub overtime_periods: u32,
}

/// A scheduled or played matchup and the hype scores recorded for it.
#[cfg_attr(feature = "python", pyclass(get_all, set_all))]
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    pub game_id: String,
    pub home_team: Team,
    pub away_team: Team,
    pub state: GameState,
    /// Snapshots in the order they were taken.
    ///
    /// From Python this attribute returns a copy, so appending to it does not
    /// change the game; use `push_snapshot` instead.
    pub snapshots: Vec<GameSnapshot>,
    pub final_snapshot: Option<GameSnapshot>,
    pub predicted_score: Option<f64>,
    pub live_score: Option<f64>,
    pub final_score: Option<f64>,
}

impl Game {
    pub fn new(game_id: impl Into<String>, home_team: Team, away_team: Team, state: GameState) -> Self {
        Game {
            game_id: game_id.into(),
            home_team,
            away_team,
            state,
            snapshots: Vec::new(),
            final_snapshot: None,
            predicted_score: None,
            live_score: None,
            final_score: None,
        }
    }

    /// Score the matchup from rankings and store it as the prediction.
    pub fn predict_hype(&mut self) -> Result<f64, HypeError> {
        let score = calculate_hype(&self.home_team, &self.away_team)?;
        self.predicted_score = Some(score);
        Ok(score)
    }

    pub fn push_snapshot(&mut self, snapshot: GameSnapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn latest_snapshot(&self) -> Option<&GameSnapshot> {
        self.snapshots.last()
    }
}

#[cfg(feature = "python")]
#[pymethods]
impl GameSnapshot {
    #[new]
    #[pyo3(signature = (
        clock_seconds_remaining,
        home_score,
        away_score,
        lead_changes,
        home_fg_made,
        away_fg_made,
        possessions,
        overtime_periods = 0
    ))]
    #[allow(clippy::too_many_arguments)]
    fn py_new(
        clock_seconds_remaining: u32,
        home_score: u32,
        away_score: u32,
        lead_changes: u32,
        home_fg_made: u32,
        away_fg_made: u32,
        possessions: u32,
        overtime_periods: u32,
    ) -> Self {
        GameSnapshot {
            clock_seconds_remaining,
            home_score,
            away_score,
            lead_changes,
            home_fg_made,
            away_fg_made,
            possessions,
            overtime_periods,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "GameSnapshot({}-{}, {}s left, OT {})",
            self.home_score, self.away_score, self.clock_seconds_remaining, self.overtime_periods
        )
    }
}

#[cfg(feature = "python")]
#[pymethods]
impl Game {
    #[new]
    #[pyo3(signature = (game_id, home_team, away_team, state = GameState::PreGame))]
    fn py_new(game_id: String, home_team: Team, away_team: Team, state: GameState) -> Self {
        Game::new(game_id, home_team, away_team, state)
    }

    /// Compute and store the predicted hype score.
    #[pyo3(name = "predict_hype")]
    fn py_predict_hype(&mut self) -> PyResult<f64> {
        Ok(self.predict_hype()?)
    }

    #[pyo3(name = "push_snapshot")]
    fn py_push_snapshot(&mut self, snapshot: GameSnapshot) {
        self.push_snapshot(snapshot);
    }

    fn __repr__(&self) -> String {
        format!(
            "Game({:?}, {} vs {}, {:?}, predicted={:?})",
            self.game_id, self.home_team.name, self.away_team.name, self.state, self.predicted_score
        )
    }
}
