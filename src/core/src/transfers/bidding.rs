use crate::config::EngineConfig;
use crate::context::DecisionContext;
use crate::evaluation::{best_perceived, rotation_fit, RotationFit, SportStrengths};
use crate::observer::{BidSkipReason, DecisionEvent, DecisionObserver};
use crate::personality::PersonalityProfile;
use crate::random::{RollKey, RollPurpose, RollSource};
use crate::transfers::offer::{BidUrgency, TransferBid};
use crate::transfers::target::TransferTargetInfo;
use log::debug;

/// The buying team's side of a bid decision. Strengths are computed once
/// per week and shared by every candidate.
pub struct BuyerView<'a> {
    pub team_id: u32,
    pub roster_size: usize,
    pub strengths: &'a SportStrengths,
    pub personality: &'a PersonalityProfile,
    pub context: &'a DecisionContext,
    pub config: &'a EngineConfig,
    pub rolls: &'a dyn RollSource,
}

fn skip(
    observer: &mut dyn DecisionObserver,
    player_id: u32,
    reason: BidSkipReason,
) -> Option<TransferBid> {
    observer.observe(DecisionEvent::BidSkipped { player_id, reason });
    None
}

fn age_multiplier(age: u8, aging_threshold: u8) -> f64 {
    if age < 25 {
        1.1
    } else if age >= aging_threshold {
        0.8
    } else {
        1.0
    }
}

fn contract_multiplier(years: u8) -> f64 {
    match years {
        0 => 0.75,
        1 => 0.85,
        2 => 0.95,
        _ => 1.0,
    }
}

/// What this buyer thinks the player is worth to them.
pub fn calculated_value(
    target: &TransferTargetInfo,
    fit: RotationFit,
    personality: &PersonalityProfile,
) -> f64 {
    let aging_threshold = personality.multipliers().aging_threshold;

    target.market_value
        * fit.value_multiplier()
        * age_multiplier(target.age, aging_threshold)
        * contract_multiplier(target.contract_years)
}

pub fn should_make_transfer_bid(
    target: &TransferTargetInfo,
    buyer: &BuyerView<'_>,
    observer: &mut dyn DecisionObserver,
) -> Option<TransferBid> {
    let config = buyer.config;
    let bidding = &config.bidding;
    let context = buyer.context;
    let player_id = target.player_id;
    let listed = target.is_listed();

    if target.is_bid_blocked(context.week) {
        return skip(observer, player_id, BidSkipReason::BidBlocked);
    }

    if buyer.roster_size >= config.roster.max_size {
        return skip(observer, player_id, BidSkipReason::RosterFull);
    }

    let (sport, perceived) = best_perceived(target, buyer.team_id);
    let strength = buyer.strengths.get(sport);

    let fit = match rotation_fit(perceived, strength, buyer.personality) {
        RotationFit::NoFit if listed && strength.median - perceived <= bidding.bargain_median_gap => {
            RotationFit::Depth
        }
        RotationFit::NoFit => return skip(observer, player_id, BidSkipReason::NoFit),
        fit => fit,
    };

    let (salary_factor, affordability) = if listed {
        (bidding.listed_salary_discount, bidding.listed_affordability_ratio)
    } else {
        (1.0, bidding.unlisted_affordability_ratio)
    };

    if target.salary_expectation * salary_factor > context.budget * affordability {
        return skip(observer, player_id, BidSkipReason::SalaryUnaffordable);
    }

    let calculated = calculated_value(target, fit, buyer.personality);
    if calculated <= 0.0 {
        return skip(observer, player_id, BidSkipReason::NoValue);
    }

    let (mut bid, mut max_bid) = match target.asking_price {
        Some(asking) => {
            if asking > target.market_value * bidding.irrational_ask_multiple {
                return skip(observer, player_id, BidSkipReason::IrrationalAsk);
            }

            let ratio = asking / calculated;
            if ratio <= 0.9 {
                let bid = asking.min(target.market_value * bidding.listed_bid_market_cap);
                (bid, bid)
            } else if ratio <= 1.2 {
                let bid = (calculated * 0.95).min(asking);
                (bid, asking.min(calculated * 1.2).max(bid))
            } else if ratio <= 1.5 {
                (calculated * bidding.lowball_ratio, calculated)
            } else if fit == RotationFit::Starter && buyer.roster_size < config.roster.ideal_size {
                (
                    calculated * bidding.desperate_lowball_ratio,
                    calculated * bidding.desperate_lowball_max_ratio,
                )
            } else {
                return skip(observer, player_id, BidSkipReason::OverpricedAsk);
            }
        }
        None => {
            let roll = buyer.rolls.roll(RollKey::player(
                buyer.team_id,
                context.week,
                player_id,
                RollPurpose::BidJitter,
            ));
            let jitter = 0.9 + 0.1 * roll;
            let spending = buyer
                .personality
                .multipliers_with_star_premium(config.selling.star_premium)
                .spending;
            let bid = calculated * spending * jitter;
            (bid, bid * bidding.unlisted_max_markup)
        }
    };

    // A release clause obliges the seller to accept, so never pay past it.
    let mut clause_bound = false;
    if let Some(clause) = target.release_clause {
        if target.asking_price.is_some_and(|asking| asking > clause) {
            bid = clause;
            max_bid = clause;
            clause_bound = true;
        } else {
            bid = bid.min(clause);
            max_bid = max_bid.min(clause);
        }
    }

    let budget_cap = context.budget * bidding.budget_clamp_ratio;
    if budget_cap <= 0.0 {
        return skip(observer, player_id, BidSkipReason::BudgetExhausted);
    }
    if bid > budget_cap {
        if clause_bound {
            return skip(observer, player_id, BidSkipReason::BudgetExhausted);
        }
        bid = budget_cap;
    }
    max_bid = max_bid.min(budget_cap);

    let meets_asking = target.asking_price.is_some_and(|asking| bid >= asking);
    if !meets_asking {
        let floor_ratio = if listed {
            bidding.listed_min_bid_ratio
        } else {
            bidding.unlisted_min_bid_ratio
        };
        let mut floor = target.market_value * floor_ratio;
        if let Some(clause) = target.release_clause {
            floor = floor.min(clause);
        }

        if bid < floor {
            if floor > budget_cap {
                return skip(observer, player_id, BidSkipReason::BudgetExhausted);
            }
            bid = floor;
        }
    }
    max_bid = max_bid.max(bid);

    let urgency = match fit {
        RotationFit::Starter if strength.count < config.roster.thin_roster_size => BidUrgency::Desperate,
        RotationFit::Starter | RotationFit::Rotation => BidUrgency::Neutral,
        _ => BidUrgency::Reluctant,
    };

    debug!(
        "team {} bids {:.0} (max {:.0}) for player {} as {:?} in {}",
        buyer.team_id, bid, max_bid, player_id, fit, sport
    );

    observer.observe(DecisionEvent::BidPrepared {
        player_id,
        amount: bid,
        max_amount: max_bid,
        fit,
        urgency,
    });

    let bid = TransferBid {
        player_id,
        selling_team_id: target.team_id,
        sport,
        amount: bid,
        max_amount: max_bid,
        urgency,
        fit,
        is_listed: listed,
        rationale: String::new(),
    };

    Some(bid.with_rationale(format!(
        "{:?} fit in {} (perceived {:.0}), valued at {:.0}",
        fit, sport, perceived, calculated
    )))
}
