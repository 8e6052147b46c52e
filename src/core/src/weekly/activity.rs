use crate::config::ActivityConfig;
use crate::observer::{DecisionEvent, DecisionObserver};
use crate::personality::PersonalityProfile;
use crate::random::{RollKey, RollPurpose, RollSource};
use crate::transfers::MarketSnapshot;

/// Listed players from other teams asking no more than their market value.
pub fn has_listed_bargains(market: &MarketSnapshot, team_id: u32, config: &ActivityConfig) -> bool {
    market.targets_for(team_id).any(|target| {
        target
            .asking_price
            .is_some_and(|asking| asking <= target.market_value * config.bargain_ask_ratio)
    })
}

pub fn activity_chance(
    has_critical_need: bool,
    has_bargains: bool,
    personality: &PersonalityProfile,
    config: &ActivityConfig,
) -> f64 {
    let mut chance = config.base_chance + config.spending_bonus * personality.spending();

    if has_critical_need {
        chance += config.critical_need_bonus;
    }
    if has_bargains {
        chance += config.bargain_bonus;
    }

    chance.min(config.max_chance)
}

/// Whether the team makes roster moves this week. Keyed on team and week so
/// replaying a week repeats the outcome.
pub fn will_team_act_this_week(
    team_id: u32,
    week: u32,
    chance: f64,
    rolls: &dyn RollSource,
    observer: &mut dyn DecisionObserver,
) -> bool {
    let roll = rolls.roll(RollKey::team(team_id, week, RollPurpose::Activity));
    let active = roll < chance;

    observer.observe(DecisionEvent::ActivityRolled { chance, roll, active });

    active
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{DecisionTrace, NullObserver};
    use crate::player::SportRatings;
    use crate::random::{FixedRolls, SeededRolls};
    use crate::transfers::test_targets::target;

    #[test]
    fn test_activity_chance() {
        let config = ActivityConfig::default();
        let frugal = PersonalityProfile::new(50, 0, 50, 50);
        let spender = PersonalityProfile::new(50, 100, 50, 50);

        assert!((activity_chance(false, false, &frugal, &config) - 0.5).abs() < 1e-9);
        assert!((activity_chance(true, false, &frugal, &config) - 0.8).abs() < 1e-9);
        assert!((activity_chance(false, true, &spender, &config) - 0.95).abs() < 1e-9);
        assert!((activity_chance(true, true, &spender, &config) - 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_bargains_ignore_own_and_overpriced_players() {
        let config = ActivityConfig::default();
        let mut own = target(1, 25, SportRatings::default(), 1_000_000.0);
        own.asking_price = Some(500_000.0);
        own.team_id = Some(3);
        let mut pricey = target(2, 25, SportRatings::default(), 1_000_000.0);
        pricey.asking_price = Some(1_200_000.0);
        let mut market = MarketSnapshot {
            free_agents: vec![],
            transfer_targets: vec![own, pricey],
        };

        assert!(!has_listed_bargains(&market, 3, &config));

        market.transfer_targets[1].asking_price = Some(1_000_000.0);
        assert!(has_listed_bargains(&market, 3, &config));
    }

    #[test]
    fn test_activity_roll_is_deterministic() {
        let rolls = SeededRolls::new(99);

        let first = will_team_act_this_week(8, 14, 0.5, &rolls, &mut NullObserver);
        let second = will_team_act_this_week(8, 14, 0.5, &rolls, &mut NullObserver);

        assert_eq!(first, second);
    }

    #[test]
    fn test_activity_roll_traced() {
        let mut trace = DecisionTrace::new();

        assert!(!will_team_act_this_week(8, 14, 0.95, &FixedRolls(0.99), &mut trace));
        assert_eq!(
            trace.events,
            vec![DecisionEvent::ActivityRolled {
                chance: 0.95,
                roll: 0.99,
                active: false
            }]
        );
    }
}
