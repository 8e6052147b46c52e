use crate::player::SportRatings;
use crate::random::stable_hash;

/// Largest error, in rating points, a team makes when judging a player.
pub const PERCEPTION_NOISE: i32 = 8;

const PERCEPTION_SALT: u32 = 0x50455243;

/// Offset in `[-8, 8]` this team applies to this player. Fixed for the pair,
/// so a team never changes its mind about a player it has already judged.
pub fn perception_offset(player_id: u32, team_id: u32) -> i32 {
    let span = (PERCEPTION_NOISE * 2 + 1) as u32;
    (stable_hash(team_id, player_id, PERCEPTION_SALT) % span) as i32 - PERCEPTION_NOISE
}

pub fn perceived_rating(actual_rating: f32, player_id: u32, team_id: u32) -> f32 {
    (actual_rating + perception_offset(player_id, team_id) as f32).clamp(0.0, 100.0)
}

pub fn perceived_ratings(ratings: &SportRatings, player_id: u32, team_id: u32) -> SportRatings {
    SportRatings {
        basketball: perceived_rating(ratings.basketball, player_id, team_id),
        baseball: perceived_rating(ratings.baseball, player_id, team_id),
        soccer: perceived_rating(ratings.soccer, player_id, team_id),
    }
}
