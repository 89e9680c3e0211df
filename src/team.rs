#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Team with poll and efficiency rankings.
///
/// Ranks are `None` when the team is unranked or the data is not yet
/// published. Previous-season ranks cover the early part of the season.
#[cfg_attr(feature = "python", pyclass(get_all, set_all))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Team {
    pub name: String,

    /// AP poll rank (1-25)
    pub ap_rank: Option<u32>,

    pub previous_season_ap_rank: Option<u32>,

    /// KenPom efficiency rank
    pub kenpom_rank: Option<u32>,

    pub previous_season_kenpom_rank: Option<u32>,
}

impl Team {
    /// Create an unranked team with no KenPom data.
    pub fn new(name: impl Into<String>) -> Self {
        Team {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_ap_rank(mut self, rank: u32) -> Self {
        self.ap_rank = Some(rank);
        self
    }

    pub fn with_kenpom_rank(mut self, rank: u32) -> Self {
        self.kenpom_rank = Some(rank);
        self
    }

    /// Attach last season's final ranks, used until current ranks exist.
    pub fn with_previous_season(mut self, ap_rank: Option<u32>, kenpom_rank: Option<u32>) -> Self {
        self.previous_season_ap_rank = ap_rank;
        self.previous_season_kenpom_rank = kenpom_rank;
        self
    }

    /// Current AP rank, falling back to last season's.
    pub fn effective_ap_rank(&self) -> Option<u32> {
        self.ap_rank.or(self.previous_season_ap_rank)
    }

    /// Current KenPom rank, falling back to last season's.
    pub fn effective_kenpom_rank(&self) -> Option<u32> {
        self.kenpom_rank.or(self.previous_season_kenpom_rank)
    }
}

#[cfg(feature = "python")]
#[pymethods]
impl Team {
    #[new]
    #[pyo3(signature = (
        name,
        ap_rank = None,
        kenpom_rank = None,
        previous_season_ap_rank = None,
        previous_season_kenpom_rank = None
    ))]
    fn py_new(
        name: String,
        ap_rank: Option<u32>,
        kenpom_rank: Option<u32>,
        previous_season_ap_rank: Option<u32>,
        previous_season_kenpom_rank: Option<u32>,
    ) -> Self {
        Team {
            name,
            ap_rank,
            previous_season_ap_rank,
            kenpom_rank,
            previous_season_kenpom_rank,
        }
    }

    /// Create a copy of this team
    pub fn copy(&self) -> Self {
        self.clone()
    }

    fn __str__(&self) -> String {
        format!("{}: AP {:?} | KenPom {:?}", self.name, self.ap_rank, self.kenpom_rank)
    }

    fn __repr__(&self) -> String {
        format!(
            "Team({:?}, ap_rank={:?}, kenpom_rank={:?}, previous_season_ap_rank={:?}, previous_season_kenpom_rank={:?})",
            self.name,
            self.ap_rank,
            self.kenpom_rank,
            self.previous_season_ap_rank,
            self.previous_season_kenpom_rank
        )
    }
}
