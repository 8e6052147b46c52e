use crate::context::DecisionContext;
use crate::error::{check_amount, check_scale, InputError};
use crate::personality::PersonalityProfile;
use crate::player::{RosterPlayer, Sport, SportRatingCalculator, SportRatings};
use crate::transfers::{IncomingOffer, MarketSnapshot, TransferTargetInfo};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One team as the roster and finance subsystems see it this week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSnapshot {
    pub team_id: u32,
    #[serde(default)]
    pub personality: PersonalityProfile,
    pub roster: Vec<RosterPlayer>,
    /// Total salary the team is committed to this season.
    #[serde(default)]
    pub salary_commitments: f64,
}

fn check_ratings(ratings: &SportRatings, owner: impl Fn() -> String) -> Result<(), InputError> {
    for sport in Sport::ALL {
        check_scale("rating", &owner, ratings.get(sport) as f64)?;
    }
    Ok(())
}

fn check_target(target: &TransferTargetInfo) -> Result<(), InputError> {
    let owner = || format!("market player {}", target.player_id);

    check_ratings(&target.ratings, owner)?;
    check_scale("potential", owner, target.potential as f64)?;
    check_amount("market value", owner, target.market_value)?;
    check_amount("salary expectation", owner, target.salary_expectation)?;
    if let Some(asking) = target.asking_price {
        check_amount("asking price", owner, asking)?;
    }
    if let Some(clause) = target.release_clause {
        check_amount("release clause", owner, clause)?;
    }
    Ok(())
}

impl TeamSnapshot {
    pub fn validate(&self) -> Result<(), InputError> {
        let team = || format!("team {}", self.team_id);
        let personality = &self.personality;

        check_scale("youth focus", team, personality.youth_focus as f64)?;
        check_scale("spending aggression", team, personality.spending_aggression as f64)?;
        check_scale("defensive preference", team, personality.defensive_preference as f64)?;
        check_scale("risk tolerance", team, personality.risk_tolerance as f64)?;
        check_amount("salary commitments", team, self.salary_commitments)?;

        let mut seen = HashSet::with_capacity(self.roster.len());

        for player in &self.roster {
            if !seen.insert(player.id) {
                return Err(InputError::DuplicatePlayer {
                    team_id: self.team_id,
                    player_id: player.id,
                });
            }

            let owner = || format!("player {}", player.id);

            check_ratings(&player.ratings, owner)?;
            for skill in player.skills.all() {
                check_scale("skill", owner, skill as f64)?;
            }
            check_scale("potential", owner, player.potential as f64)?;
            check_amount("market value", owner, player.market_value)?;
            check_amount("salary", owner, player.salary)?;
            if let Some(asking) = player.asking_price {
                check_amount("asking price", owner, asking)?;
            }
        }

        Ok(())
    }

    pub fn player(&self, player_id: u32) -> Option<&RosterPlayer> {
        self.roster.iter().find(|player| player.id == player_id)
    }

    pub fn refresh_ratings(&mut self, calculator: &dyn SportRatingCalculator) {
        for player in &mut self.roster {
            player.refresh_ratings(calculator);
        }
    }
}

pub fn validate_market(market: &MarketSnapshot) -> Result<(), InputError> {
    market
        .free_agents
        .iter()
        .chain(&market.transfer_targets)
        .try_for_each(check_target)
}

pub fn validate_offers(offers: &[IncomingOffer]) -> Result<(), InputError> {
    offers.iter().try_for_each(|offer| {
        if offer.amount.is_finite() && offer.amount > 0.0 {
            Ok(())
        } else {
            Err(InputError::NonPositiveOffer {
                offer_id: offer.offer_id,
                amount: offer.amount,
            })
        }
    })
}

/// Everything one team needs to make its weekly decisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyInput {
    pub team: TeamSnapshot,
    pub context: DecisionContext,
    #[serde(default)]
    pub market: MarketSnapshot,
    #[serde(default)]
    pub incoming_offers: Vec<IncomingOffer>,
}

impl WeeklyInput {
    pub fn validate(&self) -> Result<(), InputError> {
        self.team.validate()?;
        check_amount("budget", || format!("team {}", self.team.team_id), self.context.budget)?;
        validate_market(&self.market)?;
        validate_offers(&self.incoming_offers)
    }

    /// Recomputes roster and market ratings through an external calculator.
    pub fn refresh_ratings(&mut self, calculator: &dyn SportRatingCalculator) {
        self.team.refresh_ratings(calculator);
        for target in self.market.players_mut() {
            target.refresh_ratings(calculator);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::test_players::roster_player;
    use crate::player::{PlayerSkills, WeightedOveralls};
    use crate::transfers::test_targets::target;

    fn snapshot() -> TeamSnapshot {
        TeamSnapshot {
            team_id: 4,
            personality: PersonalityProfile::default(),
            roster: (1..=3)
                .map(|id| roster_player(id, 25, SportRatings::new(60.0, 50.0, 40.0)))
                .collect(),
            salary_commitments: 300_000.0,
        }
    }

    fn input() -> WeeklyInput {
        WeeklyInput {
            team: snapshot(),
            context: DecisionContext::new(6, 2_000_000.0),
            market: MarketSnapshot {
                free_agents: vec![],
                transfer_targets: vec![target(50, 24, SportRatings::new(55.0, 55.0, 55.0), 800_000.0)],
            },
            incoming_offers: vec![IncomingOffer {
                offer_id: 1,
                player_id: 2,
                from_team_id: 9,
                amount: 900_000.0,
            }],
        }
    }

    #[test]
    fn test_valid_input() {
        assert_eq!(input().validate(), Ok(()));
    }

    #[test]
    fn test_duplicate_roster_ids_rejected() {
        let mut team = snapshot();
        team.roster.push(roster_player(2, 30, SportRatings::new(50.0, 50.0, 50.0)));

        assert_eq!(
            team.validate(),
            Err(InputError::DuplicatePlayer { team_id: 4, player_id: 2 })
        );
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let mut team = snapshot();
        team.personality.risk_tolerance = 120;
        assert!(matches!(team.validate(), Err(InputError::OutOfRange { field: "risk tolerance", .. })));

        let mut team = snapshot();
        team.roster[0].ratings.soccer = 104.0;
        assert!(matches!(team.validate(), Err(InputError::OutOfRange { field: "rating", .. })));
    }

    #[test]
    fn test_negative_money_rejected() {
        let mut bad_budget = input();
        bad_budget.context.budget = -1.0;
        assert!(matches!(bad_budget.validate(), Err(InputError::NegativeAmount { field: "budget", .. })));

        let mut bad_price = input();
        bad_price.market.transfer_targets[0].asking_price = Some(-10.0);
        assert!(matches!(bad_price.validate(), Err(InputError::NegativeAmount { field: "asking price", .. })));
    }

    #[test]
    fn test_zero_offer_rejected() {
        let mut zero = input();
        zero.incoming_offers[0].amount = 0.0;

        assert_eq!(
            zero.validate(),
            Err(InputError::NonPositiveOffer { offer_id: 1, amount: 0.0 })
        );
    }

    #[test]
    fn test_refresh_ratings_reaches_market() {
        let mut input = input();
        let mut keeper = PlayerSkills::default();
        keeper.technical.goalkeeping = 80.0;
        input.market.transfer_targets[0].skills = keeper;

        input.refresh_ratings(&WeightedOveralls);

        assert_eq!(input.team.roster[0].ratings, SportRatings::new(0.0, 0.0, 0.0));
        assert!(input.market.transfer_targets[0].ratings.soccer > 0.0);
    }
}
