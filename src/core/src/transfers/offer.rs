use crate::evaluation::RotationFit;
use crate::player::Sport;
use serde::{Deserialize, Serialize};

// ============================================================
// Seller side
// ============================================================

/// A bid another team has made for one of our players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomingOffer {
    pub offer_id: u32,
    pub player_id: u32,
    pub from_team_id: u32,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OfferDecision {
    Accept { amount: f64 },
    Reject,
    Counter { amount: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferResponse {
    pub offer_id: u32,
    pub player_id: u32,
    pub decision: OfferDecision,
}

impl OfferResponse {
    pub fn new(offer: &IncomingOffer, decision: OfferDecision) -> Self {
        OfferResponse {
            offer_id: offer.offer_id,
            player_id: offer.player_id,
            decision,
        }
    }
}

// ============================================================
// Buyer side
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BidUrgency {
    Reluctant,
    Neutral,
    Desperate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferBid {
    pub player_id: u32,
    pub selling_team_id: Option<u32>,
    pub sport: Sport,
    pub amount: f64,
    /// Ceiling the buyer is prepared to reach in later rounds.
    pub max_amount: f64,
    pub urgency: BidUrgency,
    pub fit: RotationFit,
    pub is_listed: bool,
    pub rationale: String,
}

impl TransferBid {
    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = rationale.into();
        self
    }
}

/// Everything the buyer needs to answer a seller's counter. The caller keeps
/// this between rounds; the engine holds no negotiation state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CounterOfferState {
    pub player_id: u32,
    pub seller_counter: f64,
    pub original_bid: f64,
    /// Our most recent offer. Equal to `original_bid` in round 1.
    pub current_offer: f64,
    pub max_bid: f64,
    pub market_value: f64,
    pub is_listed: bool,
    /// 1-based round of the seller counter being answered.
    pub round: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BuyerCounterDecision {
    Accept { amount: f64 },
    Counter { amount: f64, final_offer: bool },
    WalkAway,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyerCounterResponse {
    pub player_id: u32,
    pub decision: BuyerCounterDecision,
    pub reason: String,
}

// ============================================================
// Roster moves
// ============================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SigningIntent {
    pub player_id: u32,
    pub sport: Sport,
    pub salary_offer: f64,
    pub contract_years: u8,
    pub priority: f64,
    pub rationale: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReleaseReason {
    BelowThreshold,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRelease {
    pub player_id: u32,
    pub rating: f32,
    pub reason: ReleaseReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingReason {
    ExcessDepth,
    AgingDecline,
    SalaryMismatch,
    BudgetPressure,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferListing {
    pub player_id: u32,
    pub asking_price: f64,
    pub reason: ListingReason,
}

/// Contract length offered to a player of this age.
pub fn contract_years_for_age(age: u8) -> u8 {
    if age < 24 {
        4
    } else if age < 28 {
        3
    } else if age < 32 {
        2
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_years_for_age() {
        assert_eq!(contract_years_for_age(19), 4);
        assert_eq!(contract_years_for_age(24), 3);
        assert_eq!(contract_years_for_age(27), 3);
        assert_eq!(contract_years_for_age(28), 2);
        assert_eq!(contract_years_for_age(33), 1);
    }

    #[test]
    fn test_urgency_order() {
        assert!(BidUrgency::Desperate > BidUrgency::Neutral);
        assert!(BidUrgency::Neutral > BidUrgency::Reluctant);
    }
}
