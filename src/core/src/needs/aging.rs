use crate::player::RosterPlayer;
use serde::{Deserialize, Serialize};

/// Players are watched once they are this close to their decline age.
pub const AGING_WATCH_YEARS: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgingUrgency {
    Immediate,
    Soon,
    Monitor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgingConcern {
    pub player_id: u32,
    pub age: u8,
    /// Zero or negative once the player has reached the threshold.
    pub years_until_decline: i32,
    pub urgency: AgingUrgency,
}

pub fn classify_aging(years_until_decline: i32) -> AgingUrgency {
    match years_until_decline {
        y if y <= 0 => AgingUrgency::Immediate,
        1..=2 => AgingUrgency::Soon,
        _ => AgingUrgency::Monitor,
    }
}

/// Players within the watch window of `aging_threshold`, soonest first.
pub fn aging_concerns(roster: &[RosterPlayer], aging_threshold: u8) -> Vec<AgingConcern> {
    let mut concerns: Vec<AgingConcern> = roster
        .iter()
        .filter_map(|player| {
            let years = aging_threshold as i32 - player.age as i32;
            if years > AGING_WATCH_YEARS {
                return None;
            }
            Some(AgingConcern {
                player_id: player.id,
                age: player.age,
                years_until_decline: years,
                urgency: classify_aging(years),
            })
        })
        .collect();

    concerns.sort_by_key(|c| (c.years_until_decline, c.player_id));
    concerns
}
