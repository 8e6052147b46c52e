use crate::config::EngineConfig;
use crate::observer::{DecisionEvent, DecisionObserver};
use crate::personality::PersonalityProfile;
use crate::random::{RollKey, RollPurpose, RollSource};
use crate::transfers::offer::{BuyerCounterDecision, BuyerCounterResponse, CounterOfferState};
use log::debug;

/// The buyer's personality-adjusted ceiling for this negotiation. Big
/// spenders stretch past their opening max bid, frugal teams fall short of it.
pub fn effective_max_bid(max_bid: f64, personality: &PersonalityProfile) -> f64 {
    max_bid * (0.8 + personality.spending() * 0.4)
}

/// Share of the remaining gap conceded at this round.
pub fn patience(round: u8, config: &EngineConfig) -> f64 {
    let negotiation = &config.negotiation;
    let elapsed = round.saturating_sub(1) as f64;

    (1.0 - negotiation.patience_decay * elapsed).max(negotiation.patience_floor)
}

/// Probability of walking away from a listed player whose seller counters
/// above market value.
pub fn market_walk_away_chance(
    counter: f64,
    market_value: f64,
    personality: &PersonalityProfile,
    config: &EngineConfig,
) -> f64 {
    if market_value <= 0.0 {
        return 1.0;
    }

    let over_market = (counter - market_value) / market_value;
    let temperament = 1.2 - 0.6 * personality.risk();

    (over_market * config.negotiation.market_walk_away_scale * temperament).clamp(0.0, 1.0)
}

/// The buyer's side of one negotiation round.
pub struct Negotiator<'a> {
    pub team_id: u32,
    pub week: u32,
    pub personality: &'a PersonalityProfile,
    pub config: &'a EngineConfig,
    pub rolls: &'a dyn RollSource,
}

impl Negotiator<'_> {
    fn roll(&self, state: &CounterOfferState, purpose: RollPurpose) -> f64 {
        self.rolls
            .roll(RollKey::player(self.team_id, self.week, state.player_id, purpose))
    }

    /// Answers a seller's counter. Stateless: everything needed for the round
    /// is in `state`, and the caller stores the result for the next one.
    pub fn respond(
        &self,
        state: &CounterOfferState,
        observer: &mut dyn DecisionObserver,
    ) -> BuyerCounterResponse {
        let effective_max = effective_max_bid(state.max_bid, self.personality);
        let (decision, reason) = self.decide(state, effective_max);

        debug!(
            "team {} answers counter {:.0} for player {} (round {}): {:?}",
            self.team_id, state.seller_counter, state.player_id, state.round, decision
        );

        observer.observe(DecisionEvent::CounterAnswered {
            player_id: state.player_id,
            seller_counter: state.seller_counter,
            effective_max,
            decision,
        });

        BuyerCounterResponse {
            player_id: state.player_id,
            decision,
            reason,
        }
    }

    fn decide(
        &self,
        state: &CounterOfferState,
        effective_max: f64,
    ) -> (BuyerCounterDecision, String) {
        let negotiation = &self.config.negotiation;
        let counter = state.seller_counter;
        let prior = state.current_offer.max(state.original_bid);

        if counter > state.original_bid * negotiation.irrational_counter_bid_multiple
            || counter > state.market_value * negotiation.irrational_counter_market_multiple
        {
            return walk_away(format!("counter {:.0} is out of proportion", counter));
        }

        if counter <= effective_max {
            return (
                BuyerCounterDecision::Accept { amount: counter },
                format!("counter {:.0} within our limit {:.0}", counter, effective_max),
            );
        }

        if state.is_listed && counter > state.market_value {
            let chance = market_walk_away_chance(counter, state.market_value, self.personality, self.config);
            if self.roll(state, RollPurpose::MarketWalkAway) < chance {
                return walk_away(format!("counter {:.0} is above market value", counter));
            }

            let amount = prior.max(state.market_value).min(effective_max);
            if amount <= prior {
                return walk_away("no room left above our last offer".to_string());
            }

            return (
                BuyerCounterDecision::Counter {
                    amount,
                    final_offer: false,
                },
                format!("meeting the market at {:.0}", amount),
            );
        }

        if state.round < negotiation.max_rounds {
            let concession = (0.3 + 0.3 * self.personality.spending() + 0.2 * self.personality.risk())
                * patience(state.round, self.config);

            let amount = (prior + (counter - prior) * concession).min(effective_max).max(prior);

            if amount - prior < state.original_bid * negotiation.stall_ratio {
                return walk_away("negotiation stalled".to_string());
            }

            return (
                BuyerCounterDecision::Counter {
                    amount,
                    final_offer: false,
                },
                format!("raising to {:.0} in round {}", amount, state.round),
            );
        }

        let final_chance = self.personality.risk() * negotiation.final_offer_chance;
        if effective_max > prior && self.roll(state, RollPurpose::FinalOffer) < final_chance {
            return (
                BuyerCounterDecision::Counter {
                    amount: effective_max,
                    final_offer: true,
                },
                format!("final offer of {:.0}", effective_max),
            );
        }

        walk_away("out of patience".to_string())
    }
}

fn walk_away(reason: String) -> (BuyerCounterDecision, String) {
    (BuyerCounterDecision::WalkAway, reason)
}

pub fn evaluate_buyer_counter_response(
    state: &CounterOfferState,
    negotiator: &Negotiator<'_>,
    observer: &mut dyn DecisionObserver,
) -> BuyerCounterResponse {
    negotiator.respond(state, observer)
}
