use crate::config::EngineConfig;
use crate::context::DecisionContext;
use crate::evaluation::SportStrengths;
use crate::needs::analyze_team_needs;
use crate::observer::DecisionObserver;
use crate::random::RollSource;
use crate::transfers::{
    best_signing, consider_listing, consider_release, evaluate_incoming_offer, fills_critical_need,
    should_make_transfer_bid, BuyerView, IncomingOffer, ListingView, MarketSnapshot, OfferDecision,
    OfferResponse, PlayerRelease, SigningIntent, SigningView, TransferBid, TransferListing,
};
use crate::weekly::activity::{activity_chance, has_listed_bargains, will_team_act_this_week};
use crate::weekly::input::{TeamSnapshot, WeeklyInput};
use log::info;
use serde::{Deserialize, Serialize};

/// Everything one team decided this week, for the transaction layer to apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AIWeeklyActions {
    pub team_id: u32,
    pub week: u32,
    pub active: bool,
    pub offer_responses: Vec<OfferResponse>,
    pub signings: Vec<SigningIntent>,
    pub bids: Vec<TransferBid>,
    pub releases: Vec<PlayerRelease>,
    pub listings: Vec<TransferListing>,
}

impl AIWeeklyActions {
    pub fn inactive(team_id: u32, week: u32, offer_responses: Vec<OfferResponse>) -> Self {
        AIWeeklyActions {
            team_id,
            week,
            active: false,
            offer_responses,
            ..Default::default()
        }
    }

    /// True when nothing beyond offer responses was decided.
    pub fn has_no_moves(&self) -> bool {
        self.signings.is_empty() && self.bids.is_empty() && self.releases.is_empty() && self.listings.is_empty()
    }
}

pub struct WeeklyOrchestrator<'a> {
    config: &'a EngineConfig,
    rolls: &'a dyn RollSource,
}

impl<'a> WeeklyOrchestrator<'a> {
    pub fn new(config: &'a EngineConfig, rolls: &'a dyn RollSource) -> Self {
        WeeklyOrchestrator { config, rolls }
    }

    pub fn process(
        &self,
        input: &WeeklyInput,
        observer: &mut dyn DecisionObserver,
    ) -> AIWeeklyActions {
        self.process_team_week(
            &input.team,
            &input.context,
            &input.market,
            &input.incoming_offers,
            observer,
        )
    }

    pub fn process_team_week(
        &self,
        team: &TeamSnapshot,
        context: &DecisionContext,
        market: &MarketSnapshot,
        incoming_offers: &[IncomingOffer],
        observer: &mut dyn DecisionObserver,
    ) -> AIWeeklyActions {
        let config = self.config;
        let personality = &team.personality;
        let roster = team.roster.as_slice();

        // Answering offers is owed to the bidders whether or not we act.
        let offer_responses = self.respond_to_offers(team, incoming_offers, observer);

        let needs = analyze_team_needs(roster, personality, &config.roster);
        let chance = activity_chance(
            needs.has_critical_need(),
            has_listed_bargains(market, team.team_id, &config.activity),
            personality,
            &config.activity,
        );

        if !will_team_act_this_week(team.team_id, context.week, chance, self.rolls, observer) {
            return AIWeeklyActions::inactive(team.team_id, context.week, offer_responses);
        }

        let strengths = SportStrengths::from_roster(roster);

        let release = consider_release(roster, personality, &config.roster, observer);
        let retained = roster.len() - usize::from(release.is_some());

        let signing_view = SigningView {
            team_id: team.team_id,
            roster_size: retained,
            needs: &needs,
            personality,
            context,
            config,
        };
        let signing = best_signing(&market.free_agents, &signing_view, observer);

        let free_agent_covers_need = market
            .free_agents
            .iter()
            .any(|candidate| fills_critical_need(candidate, &signing_view));
        let shop_unlisted = signing.is_none() && !free_agent_covers_need;

        let buyer = BuyerView {
            team_id: team.team_id,
            roster_size: retained + usize::from(signing.is_some()),
            strengths: &strengths,
            personality,
            context,
            config,
            rolls: self.rolls,
        };

        let bid = market
            .targets_for(team.team_id)
            .filter(|target| target.is_listed() || shop_unlisted)
            .filter_map(|target| should_make_transfer_bid(target, &buyer, observer))
            .reduce(|best, bid| {
                if (bid.is_listed, bid.urgency) > (best.is_listed, best.urgency) {
                    bid
                } else {
                    best
                }
            });

        let listing = if context.transfer_window_open {
            let view = ListingView {
                roster,
                needs: &needs,
                personality,
                context,
                config,
                salary_commitments: team.salary_commitments,
            };
            consider_listing(&view, observer)
        } else {
            None
        };

        let actions = AIWeeklyActions {
            team_id: team.team_id,
            week: context.week,
            active: true,
            offer_responses,
            signings: signing.into_iter().collect(),
            bids: bid.into_iter().collect(),
            releases: release.into_iter().collect(),
            listings: listing.into_iter().collect(),
        };

        info!(
            "team {} week {}: {} offers answered, {} signings, {} bids, {} releases, {} listings",
            actions.team_id,
            actions.week,
            actions.offer_responses.len(),
            actions.signings.len(),
            actions.bids.len(),
            actions.releases.len(),
            actions.listings.len()
        );

        actions
    }

    fn respond_to_offers(
        &self,
        team: &TeamSnapshot,
        incoming_offers: &[IncomingOffer],
        observer: &mut dyn DecisionObserver,
    ) -> Vec<OfferResponse> {
        incoming_offers
            .iter()
            .map(|offer| match team.player(offer.player_id) {
                Some(player) => evaluate_incoming_offer(offer, player, &team.personality, self.config, observer),
                None => OfferResponse::new(offer, OfferDecision::Reject),
            })
            .collect()
    }
}
