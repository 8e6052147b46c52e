use crate::evaluation::RotationFit;
use crate::transfers::{BidUrgency, BuyerCounterDecision, ListingReason, OfferDecision};
use serde::{Deserialize, Serialize};

/// Why a candidate did not get a bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BidSkipReason {
    BidBlocked,
    RosterFull,
    NoFit,
    /// Nothing to pay for: the player has no market value to this team.
    NoValue,
    SalaryUnaffordable,
    IrrationalAsk,
    OverpricedAsk,
    BudgetExhausted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DecisionEvent {
    OfferAnswered {
        offer_id: u32,
        player_id: u32,
        amount: f64,
        minimum_acceptable: f64,
        decision: OfferDecision,
    },
    ActivityRolled {
        chance: f64,
        roll: f64,
        active: bool,
    },
    BidSkipped {
        player_id: u32,
        reason: BidSkipReason,
    },
    BidPrepared {
        player_id: u32,
        amount: f64,
        max_amount: f64,
        fit: RotationFit,
        urgency: BidUrgency,
    },
    CounterAnswered {
        player_id: u32,
        seller_counter: f64,
        effective_max: f64,
        decision: BuyerCounterDecision,
    },
    SigningChosen {
        player_id: u32,
        priority: f64,
    },
    ReleaseChosen {
        player_id: u32,
        rating: f32,
    },
    ListingChosen {
        player_id: u32,
        asking_price: f64,
        reason: ListingReason,
    },
}
