use crate::player::positions::Sport;
use crate::player::skills::PlayerSkills;
use serde::{Deserialize, Serialize};

/// Overall rating (0-100) in each sport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SportRatings {
    pub basketball: f32,
    pub baseball: f32,
    pub soccer: f32,
}

impl SportRatings {
    pub fn new(basketball: f32, baseball: f32, soccer: f32) -> Self {
        SportRatings {
            basketball,
            baseball,
            soccer,
        }
    }

    pub fn get(&self, sport: Sport) -> f32 {
        match sport {
            Sport::Basketball => self.basketball,
            Sport::Baseball => self.baseball,
            Sport::Soccer => self.soccer,
        }
    }

    /// Highest-rated sport. Ties resolve in `Sport::ALL` order.
    pub fn best(&self) -> (Sport, f32) {
        let mut best = (Sport::Basketball, self.basketball);
        for sport in [Sport::Baseball, Sport::Soccer] {
            let rating = self.get(sport);
            if rating > best.1 {
                best = (sport, rating);
            }
        }
        best
    }
}

/// Computes a player's overall in every sport. The match engines own the
/// real formulas; the decision engine only needs something with this shape.
pub trait SportRatingCalculator: Sync {
    fn calculate(&self, player_id: u32, skills: &PlayerSkills) -> SportRatings;
}

/// Rates each sport as the player's score at their best-fitting position.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedOveralls;

impl SportRatingCalculator for WeightedOveralls {
    fn calculate(&self, _player_id: u32, skills: &PlayerSkills) -> SportRatings {
        let rate = |sport: Sport| sport.classify(skills).score(skills).clamp(0.0, 100.0);

        SportRatings {
            basketball: rate(Sport::Basketball),
            baseball: rate(Sport::Baseball),
            soccer: rate(Sport::Soccer),
        }
    }
}
