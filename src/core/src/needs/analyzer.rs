use crate::config::RosterConfig;
use crate::needs::aging::{aging_concerns, AgingConcern};
use crate::personality::PersonalityProfile;
use crate::player::{Position, RoleProfile, RosterPlayer, Sport};
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Severity of a positional gap. Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UrgencyTier {
    Low,
    Moderate,
    Critical,
}

impl UrgencyTier {
    pub fn escalate(self) -> Self {
        match self {
            UrgencyTier::Low => UrgencyTier::Moderate,
            UrgencyTier::Moderate | UrgencyTier::Critical => UrgencyTier::Critical,
        }
    }
}

/// Base urgency of a position from its depth and quality alone.
pub fn classify_urgency(
    count: usize,
    ideal: u8,
    average_rating: f32,
    rating_floor: f32,
) -> UrgencyTier {
    if count == 0 || count * 2 < ideal as usize {
        UrgencyTier::Critical
    } else if count < ideal as usize || average_rating < rating_floor {
        UrgencyTier::Moderate
    } else {
        UrgencyTier::Low
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionNeed {
    pub position: Position,
    pub current_count: usize,
    pub ideal_count: u8,
    pub average_rating: f32,
    pub urgency: UrgencyTier,
    pub target_rating: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamNeeds {
    /// Most urgent first; equal urgency ordered by ascending average rating.
    pub positions: Vec<PositionNeed>,
    pub aging: Vec<AgingConcern>,
    pub weakest: Option<Position>,
    pub strongest: Option<Position>,
    pub roster_strength: f32,
    pub roster_size: usize,
    pub ideal_roster_size: usize,
}

impl TeamNeeds {
    pub fn need_for(&self, position: Position) -> Option<&PositionNeed> {
        self.positions.iter().find(|need| need.position == position)
    }

    pub fn has_critical_need(&self) -> bool {
        self.positions.iter().any(|need| need.urgency == UrgencyTier::Critical)
    }

    pub fn critical_needs(&self) -> impl Iterator<Item = &PositionNeed> {
        self.positions.iter().filter(|need| need.urgency == UrgencyTier::Critical)
    }
}

fn need_order(a: &PositionNeed, b: &PositionNeed) -> Ordering {
    b.urgency
        .cmp(&a.urgency)
        .then_with(|| a.average_rating.total_cmp(&b.average_rating))
}

/// Counts and rates every position of one sport. The sport supplies the
/// position set, ideal depth table and classifier.
pub fn analyze_positions(
    sport: Sport,
    roster: &[RosterPlayer],
    rating_floor: f32,
    starter_min_rating: f32,
) -> Vec<PositionNeed> {
    let by_position = roster
        .iter()
        .map(|player| (player.position(sport), player.ratings.get(sport)))
        .into_group_map();

    sport
        .positions()
        .iter()
        .map(|&position| {
            let ratings = by_position.get(&position).map(Vec::as_slice).unwrap_or(&[]);
            let count = ratings.len();
            let average_rating = if count == 0 {
                0.0
            } else {
                ratings.iter().sum::<f32>() / count as f32
            };
            let ideal = position.ideal_depth();

            PositionNeed {
                position,
                current_count: count,
                ideal_count: ideal,
                average_rating,
                urgency: classify_urgency(count, ideal, average_rating, rating_floor),
                target_rating: starter_min_rating.max(average_rating + 5.0).min(100.0),
            }
        })
        .collect()
}

/// Raises a position one tier when another sport is critically short of the
/// same kind of athlete.
fn apply_cross_sport_pressure(needs: &mut [PositionNeed]) {
    let critical: HashSet<(Sport, RoleProfile)> = needs
        .iter()
        .filter(|need| need.urgency == UrgencyTier::Critical)
        .map(|need| (need.position.sport(), need.position.role()))
        .collect();

    for need in needs.iter_mut() {
        let sport = need.position.sport();
        let role = need.position.role();
        let pressured = critical
            .iter()
            .any(|&(other_sport, other_role)| other_sport != sport && other_role == role);

        if pressured {
            need.urgency = need.urgency.escalate();
        }
    }
}

pub fn analyze_team_needs(
    roster: &[RosterPlayer],
    personality: &PersonalityProfile,
    config: &RosterConfig,
) -> TeamNeeds {
    let thresholds = personality.thresholds();
    let aging_threshold = personality.multipliers().aging_threshold;

    let mut positions: Vec<PositionNeed> = Sport::ALL
        .iter()
        .flat_map(|&sport| {
            analyze_positions(
                sport,
                roster,
                config.position_rating_floor,
                thresholds.starter_min_rating,
            )
        })
        .collect();

    apply_cross_sport_pressure(&mut positions);
    positions.sort_by(need_order);

    let roster_strength = if roster.is_empty() {
        0.0
    } else {
        roster.iter().map(|p| p.best_rating()).sum::<f32>() / roster.len() as f32
    };

    let needs = TeamNeeds {
        weakest: positions.first().map(|need| need.position),
        strongest: positions.last().map(|need| need.position),
        positions,
        aging: aging_concerns(roster, aging_threshold),
        roster_strength,
        roster_size: roster.len(),
        ideal_roster_size: config.ideal_size,
    };

    debug!(
        "needs: {} critical, {} aging, weakest {:?}, strength {:.1}",
        needs.critical_needs().count(),
        needs.aging.len(),
        needs.weakest,
        needs.roster_strength
    );

    needs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::test_players::roster_player;
    use crate::player::{
        BaseballPosition, BasketballPosition, PlayerSkills, SoccerPosition, SportRatings,
    };

    /// Skills that classify as a center in basketball, a first baseman in
    /// baseball and a defender in soccer.
    fn big_man() -> PlayerSkills {
        let mut skills = PlayerSkills::default();
        skills.physical.height = 90.0;
        skills.physical.strength = 90.0;
        skills.technical.hitting = 60.0;
        skills.technical.tackling = 60.0;
        skills
    }

    fn big(id: u32, rating: f32) -> RosterPlayer {
        let mut player = roster_player(id, 26, SportRatings::new(rating, rating, rating));
        player.skills = big_man();
        player
    }

    #[test]
    fn test_big_man_classification() {
        let skills = big_man();

        assert_eq!(Sport::Basketball.classify(&skills), Position::Basketball(BasketballPosition::Center));
        assert_eq!(Sport::Baseball.classify(&skills), Position::Baseball(BaseballPosition::FirstBase));
        assert_eq!(Sport::Soccer.classify(&skills), Position::Soccer(SoccerPosition::Defender));
    }

    #[test]
    fn test_classify_urgency_tiers() {
        assert_eq!(classify_urgency(0, 2, 0.0, 50.0), UrgencyTier::Critical);
        assert_eq!(classify_urgency(2, 5, 70.0, 50.0), UrgencyTier::Critical);
        assert_eq!(classify_urgency(3, 5, 70.0, 50.0), UrgencyTier::Moderate);
        assert_eq!(classify_urgency(5, 5, 45.0, 50.0), UrgencyTier::Moderate);
        assert_eq!(classify_urgency(5, 5, 70.0, 50.0), UrgencyTier::Low);
    }

    #[test]
    fn test_urgency_monotonic_in_count() {
        for ideal in 1..=6u8 {
            for rating in [30.0, 50.0, 75.0] {
                for count in 1..=10usize {
                    let more = classify_urgency(count, ideal, rating, 50.0);
                    let fewer = classify_urgency(count - 1, ideal, rating, 50.0);
                    assert!(fewer >= more, "ideal {} rating {} count {}", ideal, rating, count);
                }
            }
        }
    }

    #[test]
    fn test_urgency_monotonic_in_rating() {
        for count in 0..=6usize {
            let low = classify_urgency(count, 4, 40.0, 50.0);
            let high = classify_urgency(count, 4, 60.0, 50.0);
            assert!(low >= high);
        }
    }

    #[test]
    fn test_escalate_caps_at_critical() {
        assert_eq!(UrgencyTier::Low.escalate(), UrgencyTier::Moderate);
        assert_eq!(UrgencyTier::Moderate.escalate(), UrgencyTier::Critical);
        assert_eq!(UrgencyTier::Critical.escalate(), UrgencyTier::Critical);
    }

    #[test]
    fn test_analyze_positions_counts() {
        let roster = vec![big(1, 60.0), big(2, 70.0), big(3, 80.0)];

        let needs = analyze_positions(Sport::Basketball, &roster, 50.0, 60.0);
        let center = needs
            .iter()
            .find(|n| n.position == Position::Basketball(BasketballPosition::Center))
            .unwrap();
        let guard = needs
            .iter()
            .find(|n| n.position == Position::Basketball(BasketballPosition::PointGuard))
            .unwrap();

        assert_eq!(needs.len(), 5);
        assert_eq!(center.current_count, 3);
        assert_eq!(center.average_rating, 70.0);
        assert_eq!(center.urgency, UrgencyTier::Low);
        assert_eq!(center.target_rating, 75.0);
        assert_eq!(guard.current_count, 0);
        assert_eq!(guard.urgency, UrgencyTier::Critical);
        assert_eq!(guard.target_rating, 60.0);
    }

    #[test]
    fn test_cross_sport_pressure_escalates_shared_roles() {
        let mut needs = vec![
            PositionNeed {
                position: Position::Soccer(SoccerPosition::Midfielder),
                current_count: 0,
                ideal_count: 5,
                average_rating: 0.0,
                urgency: UrgencyTier::Critical,
                target_rating: 60.0,
            },
            PositionNeed {
                position: Position::Basketball(BasketballPosition::PointGuard),
                current_count: 2,
                ideal_count: 2,
                average_rating: 70.0,
                urgency: UrgencyTier::Low,
                target_rating: 75.0,
            },
            PositionNeed {
                position: Position::Basketball(BasketballPosition::Center),
                current_count: 2,
                ideal_count: 2,
                average_rating: 70.0,
                urgency: UrgencyTier::Low,
                target_rating: 75.0,
            },
        ];

        apply_cross_sport_pressure(&mut needs);

        assert_eq!(needs[0].urgency, UrgencyTier::Critical);
        assert_eq!(needs[1].urgency, UrgencyTier::Moderate);
        assert_eq!(needs[2].urgency, UrgencyTier::Low);
    }

    #[test]
    fn test_same_sport_gap_does_not_escalate() {
        let mut needs = vec![
            PositionNeed {
                position: Position::Basketball(BasketballPosition::ShootingGuard),
                current_count: 0,
                ideal_count: 2,
                average_rating: 0.0,
                urgency: UrgencyTier::Critical,
                target_rating: 60.0,
            },
            PositionNeed {
                position: Position::Basketball(BasketballPosition::SmallForward),
                current_count: 2,
                ideal_count: 2,
                average_rating: 70.0,
                urgency: UrgencyTier::Low,
                target_rating: 75.0,
            },
        ];

        apply_cross_sport_pressure(&mut needs);

        assert_eq!(needs[1].urgency, UrgencyTier::Low);
    }

    #[test]
    fn test_team_needs_ordering() {
        let roster: Vec<RosterPlayer> = (1..=6).map(|id| big(id, 50.0 + id as f32 * 5.0)).collect();

        let needs = analyze_team_needs(&roster, &PersonalityProfile::default(), &RosterConfig::default());

        assert_eq!(needs.roster_size, 6);
        assert_eq!(needs.ideal_roster_size, 25);
        assert_eq!(needs.positions.len(), 16);
        assert!(needs.has_critical_need());

        for pair in needs.positions.windows(2) {
            assert!(need_order(&pair[0], &pair[1]) != Ordering::Greater);
        }

        assert_eq!(needs.weakest, Some(needs.positions[0].position));
        assert_eq!(needs.strongest, Some(needs.positions[15].position));
        // Every filled position is pushed up a tier by the other sports' gaps;
        // ties keep sport order, so soccer's back line ends up last.
        assert_eq!(needs.strongest, Some(Position::Soccer(SoccerPosition::Defender)));
        assert_eq!(
            needs.need_for(Position::Basketball(BasketballPosition::Center)).unwrap().urgency,
            UrgencyTier::Moderate
        );
        assert_eq!(needs.roster_strength, 67.5);
    }

    #[test]
    fn test_empty_roster_is_all_critical() {
        let needs = analyze_team_needs(&[], &PersonalityProfile::default(), &RosterConfig::default());

        assert!(needs.positions.iter().all(|n| n.urgency == UrgencyTier::Critical));
        assert_eq!(needs.roster_strength, 0.0);
        assert!(needs.aging.is_empty());
    }
}
