use crate::player::positions::{Position, Sport};
use crate::player::ratings::{SportRatingCalculator, SportRatings};
use crate::player::skills::PlayerSkills;
use serde::{Deserialize, Serialize};

/// A player on the deciding team's own roster, as handed over by the
/// roster subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterPlayer {
    pub id: u32,
    pub name: String,
    pub age: u8,
    #[serde(default)]
    pub skills: PlayerSkills,
    #[serde(default)]
    pub ratings: SportRatings,
    /// Hidden ceiling on the player's average attribute.
    pub potential: u8,
    pub market_value: f64,
    pub salary: f64,
    pub contract_years: u8,
    /// Set while the player is on the transfer list.
    #[serde(default)]
    pub asking_price: Option<f64>,
}

impl RosterPlayer {
    pub fn is_listed(&self) -> bool {
        self.asking_price.is_some()
    }

    pub fn best_rating(&self) -> f32 {
        self.ratings.best().1
    }

    pub fn is_star(&self, star_rating: u8) -> bool {
        self.best_rating() >= star_rating as f32
    }

    pub fn position(&self, sport: Sport) -> Position {
        sport.classify(&self.skills)
    }

    pub fn refresh_ratings(&mut self, calculator: &dyn SportRatingCalculator) {
        self.ratings = calculator.calculate(self.id, &self.skills);
    }
}

#[cfg(test)]
pub(crate) mod test_players {
    use super::*;

    /// Mid-value player with blank skills and the given ratings.
    pub fn roster_player(id: u32, age: u8, ratings: SportRatings) -> RosterPlayer {
        RosterPlayer {
            id,
            name: format!("Player {}", id),
            age,
            skills: PlayerSkills::default(),
            ratings,
            potential: 60,
            market_value: 1_000_000.0,
            salary: 100_000.0,
            contract_years: 2,
            asking_price: None,
        }
    }
}
