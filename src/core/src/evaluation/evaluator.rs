use crate::context::DecisionContext;
use crate::evaluation::perceived::perceived_ratings;
use crate::needs::{TeamNeeds, UrgencyTier};
use crate::personality::{Archetype, PersonalityProfile};
use crate::player::{Position, Sport};
use crate::transfers::TransferTargetInfo;

/// Age curve on a 0-100 scale: flat at the 25-28 peak, losing 4 points a
/// year below it and 8 a year above it.
pub fn age_curve(age: u8) -> f64 {
    match age {
        25..=28 => 100.0,
        a if a < 25 => (100.0 - (25 - a) as f64 * 4.0).max(0.0),
        a => (100.0 - (a - 28) as f64 * 8.0).max(0.0),
    }
}

/// Room to grow between the player's average attribute and their ceiling,
/// on a 0-100 scale.
pub fn potential_gap_factor(attribute_average: f32, potential: u8) -> f64 {
    ((potential as f64 - attribute_average as f64) * 4.0).clamp(0.0, 100.0)
}

/// Share of the budget a player's market value eats: 100 when it is a tenth
/// or less, 0 at half the budget or more.
pub fn value_fit(market_value: f64, budget: f64) -> f64 {
    if budget <= 0.0 {
        return 0.0;
    }

    let ratio = market_value / budget;
    if ratio <= 0.1 {
        100.0
    } else if ratio >= 0.5 {
        0.0
    } else {
        (0.5 - ratio) / 0.4 * 100.0
    }
}

/// How much the team wants someone at this position right now.
pub fn position_fit(
    position: Position,
    needs: Option<&TeamNeeds>,
    personality: &PersonalityProfile,
) -> f64 {
    let base = match needs.and_then(|n| n.need_for(position)) {
        Some(need) => match need.urgency {
            UrgencyTier::Critical => 100.0,
            UrgencyTier::Moderate => 70.0,
            UrgencyTier::Low => 40.0,
        },
        None => 50.0,
    };

    let defensive_shift = if position.is_defensive() {
        (personality.defensive() - 0.5) * 20.0
    } else {
        0.0
    };

    (base + defensive_shift).clamp(0.0, 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationWeights {
    pub current: f64,
    pub age: f64,
    pub potential: f64,
    pub position: f64,
    pub value: f64,
}

impl EvaluationWeights {
    pub fn for_archetype(archetype: Archetype) -> Self {
        let (current, age, potential, position, value) = match archetype {
            Archetype::Conservative => (0.45, 0.25, 0.05, 0.15, 0.10),
            Archetype::Balanced => (0.35, 0.20, 0.15, 0.15, 0.15),
            Archetype::Aggressive => (0.25, 0.10, 0.35, 0.15, 0.15),
        };

        EvaluationWeights {
            current,
            age,
            potential,
            position,
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerEvaluation {
    pub sport: Sport,
    pub position: Position,
    pub perceived_rating: f32,
    pub composite: f64,
}

/// The candidate's best sport as this team sees it.
pub fn best_perceived(candidate: &TransferTargetInfo, team_id: u32) -> (Sport, f32) {
    perceived_ratings(&candidate.ratings, candidate.player_id, team_id).best()
}

pub fn evaluate_player(
    candidate: &TransferTargetInfo,
    needs: Option<&TeamNeeds>,
    context: &DecisionContext,
    personality: &PersonalityProfile,
    team_id: u32,
) -> PlayerEvaluation {
    let (sport, perceived) = best_perceived(candidate, team_id);
    let position = candidate.position(sport);
    let weights = EvaluationWeights::for_archetype(personality.archetype());

    let composite = perceived as f64 * weights.current
        + age_curve(candidate.age) * weights.age
        + potential_gap_factor(candidate.attribute_average(), candidate.potential) * weights.potential
        + position_fit(position, needs, personality) * weights.position
        + value_fit(candidate.market_value, context.budget) * weights.value;

    PlayerEvaluation {
        sport,
        position,
        perceived_rating: perceived,
        composite,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::needs::PositionNeed;
    use crate::player::{BasketballPosition, SoccerPosition, SportRatings};
    use crate::transfers::test_targets::target;

    #[test]
    fn test_age_curve() {
        assert_eq!(age_curve(25), 100.0);
        assert_eq!(age_curve(28), 100.0);
        assert_eq!(age_curve(20), 80.0);
        assert_eq!(age_curve(30), 84.0);
        assert_eq!(age_curve(40), 4.0);
        assert_eq!(age_curve(45), 0.0);
    }

    #[test]
    fn test_age_curve_steeper_above_peak() {
        assert!(100.0 - age_curve(31) > 100.0 - age_curve(22));
    }

    #[test]
    fn test_potential_gap_factor() {
        assert_eq!(potential_gap_factor(60.0, 70), 40.0);
        assert_eq!(potential_gap_factor(70.0, 60), 0.0);
        assert_eq!(potential_gap_factor(40.0, 90), 100.0);
    }

    #[test]
    fn test_value_fit() {
        assert_eq!(value_fit(500_000.0, 10_000_000.0), 100.0);
        assert_eq!(value_fit(3_000_000.0, 10_000_000.0), 50.0);
        assert_eq!(value_fit(6_000_000.0, 10_000_000.0), 0.0);
        assert_eq!(value_fit(1.0, 0.0), 0.0);
    }

    #[test]
    fn test_position_fit_follows_urgency() {
        let need = |position, urgency| PositionNeed {
            position,
            current_count: 0,
            ideal_count: 2,
            average_rating: 0.0,
            urgency,
            target_rating: 60.0,
        };
        let guard = Position::Basketball(BasketballPosition::PointGuard);
        let keeper = Position::Soccer(SoccerPosition::Goalkeeper);
        let needs = TeamNeeds {
            positions: vec![need(guard, UrgencyTier::Critical), need(keeper, UrgencyTier::Low)],
            aging: vec![],
            weakest: Some(guard),
            strongest: Some(keeper),
            roster_strength: 50.0,
            roster_size: 10,
            ideal_roster_size: 25,
        };
        let neutral = PersonalityProfile::default();
        let defensive = PersonalityProfile::new(50, 50, 100, 50);

        assert_eq!(position_fit(guard, Some(&needs), &neutral), 100.0);
        assert_eq!(position_fit(keeper, Some(&needs), &neutral), 40.0);
        assert_eq!(position_fit(keeper, Some(&needs), &defensive), 50.0);
        assert_eq!(position_fit(guard, None, &neutral), 50.0);
    }

    #[test]
    fn test_archetypes_value_different_players() {
        let context = DecisionContext::new(5, 10_000_000.0);
        let conservative = PersonalityProfile::new(30, 30, 50, 10);
        let aggressive = PersonalityProfile::new(70, 70, 50, 90);

        let mut prospect = target(10, 20, SportRatings::new(60.0, 40.0, 40.0), 1_000_000.0);
        prospect.potential = 90;
        let mut veteran = target(11, 27, SportRatings::new(80.0, 40.0, 40.0), 1_000_000.0);
        veteran.potential = 0;

        let score = |player: &TransferTargetInfo, personality: &PersonalityProfile| {
            evaluate_player(player, None, &context, personality, 1).composite
        };

        assert!(score(&veteran, &conservative) > score(&prospect, &conservative));
        assert!(score(&prospect, &aggressive) > score(&veteran, &aggressive));
    }

    #[test]
    fn test_evaluation_uses_perceived_rating() {
        let context = DecisionContext::new(5, 10_000_000.0);
        let candidate = target(100, 26, SportRatings::new(60.0, 30.0, 30.0), 1_000_000.0);

        let evaluation = evaluate_player(&candidate, None, &context, &PersonalityProfile::default(), 1);

        assert_eq!(evaluation.sport, Sport::Basketball);
        assert_eq!(evaluation.perceived_rating, 53.0);
    }
}
