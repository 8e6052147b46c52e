use crate::personality::PersonalityProfile;
use crate::player::{RosterPlayer, Sport};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Rating distribution of a team in one sport.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TeamSportStrength {
    pub average: f32,
    pub median: f32,
    pub max: f32,
    pub count: usize,
}

impl TeamSportStrength {
    pub fn from_ratings(ratings: impl IntoIterator<Item = f32>) -> Self {
        let sorted: Vec<f32> = ratings.into_iter().sorted_by(|a, b| a.total_cmp(b)).collect();

        if sorted.is_empty() {
            return TeamSportStrength::default();
        }

        let count = sorted.len();
        let average = sorted.iter().sum::<f32>() / count as f32;
        let median = if count % 2 == 0 {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
        } else {
            sorted[count / 2]
        };

        TeamSportStrength {
            average,
            median,
            max: sorted[count - 1],
            count,
        }
    }
}

/// Per-sport strength of a roster. Computed once per team per week and
/// shared by every candidate evaluation in that pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SportStrengths {
    pub basketball: TeamSportStrength,
    pub baseball: TeamSportStrength,
    pub soccer: TeamSportStrength,
}

impl SportStrengths {
    pub fn from_roster(roster: &[RosterPlayer]) -> Self {
        let of = |sport: Sport| TeamSportStrength::from_ratings(roster.iter().map(|p| p.ratings.get(sport)));

        SportStrengths {
            basketball: of(Sport::Basketball),
            baseball: of(Sport::Baseball),
            soccer: of(Sport::Soccer),
        }
    }

    pub fn get(&self, sport: Sport) -> &TeamSportStrength {
        match sport {
            Sport::Basketball => &self.basketball,
            Sport::Baseball => &self.baseball,
            Sport::Soccer => &self.soccer,
        }
    }
}

/// Where a candidate would slot into the depth chart of their best sport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RotationFit {
    Starter,
    Rotation,
    Depth,
    NoFit,
}

impl RotationFit {
    /// Share of market value a buyer will pay for this role.
    pub fn value_multiplier(self) -> f64 {
        match self {
            RotationFit::Starter => 1.0,
            RotationFit::Rotation => 0.85,
            RotationFit::Depth => 0.7,
            RotationFit::NoFit => 0.0,
        }
    }
}

/// Rating points below the median a risk-taking team will still carry as
/// depth: 5 for the most cautious, 15 for the boldest.
pub fn depth_band(personality: &PersonalityProfile) -> f32 {
    5.0 + personality.risk() as f32 * 10.0
}

pub fn rotation_fit(
    player_rating: f32,
    strength: &TeamSportStrength,
    personality: &PersonalityProfile,
) -> RotationFit {
    if player_rating >= strength.average {
        RotationFit::Starter
    } else if player_rating >= strength.median {
        RotationFit::Rotation
    } else if player_rating >= strength.median - depth_band(personality) {
        RotationFit::Depth
    } else {
        RotationFit::NoFit
    }
}
