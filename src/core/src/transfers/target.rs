use crate::player::{PlayerSkills, Position, Sport, SportRatingCalculator, SportRatings};
use serde::{Deserialize, Serialize};

/// A player the deciding team could acquire, as reported by the market
/// subsystem. Free agents have no `team_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferTargetInfo {
    pub player_id: u32,
    pub name: String,
    #[serde(default)]
    pub team_id: Option<u32>,
    pub age: u8,
    #[serde(default)]
    pub skills: PlayerSkills,
    #[serde(default)]
    pub ratings: SportRatings,
    pub potential: u8,
    pub market_value: f64,
    /// Present when the owning team has put the player up for sale.
    #[serde(default)]
    pub asking_price: Option<f64>,
    pub salary_expectation: f64,
    pub contract_years: u8,
    #[serde(default)]
    pub release_clause: Option<f64>,
    /// Bids are refused before this week.
    #[serde(default)]
    pub bid_blocked_until_week: Option<u32>,
}

impl TransferTargetInfo {
    pub fn is_listed(&self) -> bool {
        self.asking_price.is_some()
    }

    pub fn is_bid_blocked(&self, week: u32) -> bool {
        self.bid_blocked_until_week.is_some_and(|until| week < until)
    }

    pub fn position(&self, sport: Sport) -> Position {
        sport.classify(&self.skills)
    }

    pub fn attribute_average(&self) -> f32 {
        self.skills.average()
    }

    pub fn refresh_ratings(&mut self, calculator: &dyn SportRatingCalculator) {
        self.ratings = calculator.calculate(self.player_id, &self.skills);
    }
}

/// Read-only view of the market for one week.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    #[serde(default)]
    pub free_agents: Vec<TransferTargetInfo>,
    #[serde(default)]
    pub transfer_targets: Vec<TransferTargetInfo>,
}

impl MarketSnapshot {
    /// Transfer targets excluding the deciding team's own players.
    pub fn targets_for(&self, team_id: u32) -> impl Iterator<Item = &TransferTargetInfo> {
        self.transfer_targets.iter().filter(move |t| t.team_id != Some(team_id))
    }

    pub fn players_mut(&mut self) -> impl Iterator<Item = &mut TransferTargetInfo> {
        self.free_agents.iter_mut().chain(self.transfer_targets.iter_mut())
    }
}
