use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeasonPhase {
    Preseason,
    RegularSeason,
    Playoffs,
    Offseason,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub position: u16,
    pub total_teams: u16,
    pub wins: u16,
    pub losses: u16,
}

/// Snapshot handed to every decision. Built fresh by the caller; the engine
/// only reads it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionContext {
    pub week: u32,
    pub transfer_window_open: bool,
    pub division: u8,
    pub budget: f64,
    pub season_phase: SeasonPhase,
    #[serde(default)]
    pub standing: Option<Standing>,
}

impl DecisionContext {
    pub fn new(week: u32, budget: f64) -> Self {
        DecisionContext {
            week,
            transfer_window_open: true,
            division: 1,
            budget,
            season_phase: SeasonPhase::RegularSeason,
            standing: None,
        }
    }

    pub fn with_window(mut self, open: bool) -> Self {
        self.transfer_window_open = open;
        self
    }
}
