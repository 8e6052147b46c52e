use serde::{Deserialize, Serialize};

/// Tuning knobs for the decision engine. Every field has a default, so a
/// partial JSON override only needs to name what it changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub roster: RosterConfig,
    pub bidding: BiddingConfig,
    pub selling: SellingConfig,
    pub negotiation: NegotiationConfig,
    pub activity: ActivityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub ideal_size: usize,
    pub max_size: usize,
    /// Releases are only considered once the roster is this far above ideal.
    pub release_excess_margin: usize,
    /// Sport depth below which a starter-level bid is made with desperation.
    pub thin_roster_size: usize,
    pub star_rating: u8,
    pub position_rating_floor: f32,
    pub excess_depth_margin: usize,
    /// Youngest age at which a prospect is no longer protected from release.
    pub youth_protection_age: u8,
}

impl Default for RosterConfig {
    fn default() -> Self {
        RosterConfig {
            ideal_size: 25,
            max_size: 35,
            release_excess_margin: 5,
            thin_roster_size: 15,
            star_rating: 78,
            position_rating_floor: 50.0,
            excess_depth_margin: 2,
            youth_protection_age: 22,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BiddingConfig {
    /// Listed players this close to the team median stay interesting even without a fit.
    pub bargain_median_gap: f32,
    pub listed_salary_discount: f64,
    pub listed_affordability_ratio: f64,
    pub unlisted_affordability_ratio: f64,
    pub irrational_ask_multiple: f64,
    pub listed_bid_market_cap: f64,
    pub lowball_ratio: f64,
    pub desperate_lowball_ratio: f64,
    pub desperate_lowball_max_ratio: f64,
    pub unlisted_max_markup: f64,
    pub budget_clamp_ratio: f64,
    pub listed_min_bid_ratio: f64,
    pub unlisted_min_bid_ratio: f64,
    pub signing_affordability_ratio: f64,
}

impl Default for BiddingConfig {
    fn default() -> Self {
        BiddingConfig {
            bargain_median_gap: 35.0,
            listed_salary_discount: 0.7,
            listed_affordability_ratio: 0.5,
            unlisted_affordability_ratio: 0.25,
            irrational_ask_multiple: 3.0,
            listed_bid_market_cap: 2.0,
            lowball_ratio: 0.8,
            desperate_lowball_ratio: 0.7,
            desperate_lowball_max_ratio: 0.9,
            unlisted_max_markup: 1.3,
            budget_clamp_ratio: 0.5,
            listed_min_bid_ratio: 0.35,
            unlisted_min_bid_ratio: 0.5,
            signing_affordability_ratio: 0.25,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SellingConfig {
    pub listed_lowball_ratio: f64,
    pub unlisted_lowball_ratio: f64,
    pub listed_counter_band: f64,
    pub unlisted_counter_band: f64,
    pub unlisted_counter_markup: f64,
    pub star_premium: f64,
}

impl Default for SellingConfig {
    fn default() -> Self {
        SellingConfig {
            listed_lowball_ratio: 0.5,
            unlisted_lowball_ratio: 0.75,
            listed_counter_band: 0.6,
            unlisted_counter_band: 0.7,
            unlisted_counter_markup: 1.1,
            star_premium: 1.15,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NegotiationConfig {
    pub irrational_counter_bid_multiple: f64,
    pub irrational_counter_market_multiple: f64,
    pub max_rounds: u8,
    pub patience_decay: f64,
    pub patience_floor: f64,
    /// A concession smaller than this share of the original bid counts as stalled.
    pub stall_ratio: f64,
    pub final_offer_chance: f64,
    pub market_walk_away_scale: f64,
}

impl Default for NegotiationConfig {
    fn default() -> Self {
        NegotiationConfig {
            irrational_counter_bid_multiple: 2.0,
            irrational_counter_market_multiple: 3.0,
            max_rounds: 4,
            patience_decay: 0.2,
            patience_floor: 0.4,
            stall_ratio: 0.05,
            final_offer_chance: 0.25,
            market_walk_away_scale: 1.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityConfig {
    pub base_chance: f64,
    pub critical_need_bonus: f64,
    pub bargain_bonus: f64,
    pub spending_bonus: f64,
    pub max_chance: f64,
    /// Listed players asking at most this share of market value count as bargains.
    pub bargain_ask_ratio: f64,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        ActivityConfig {
            base_chance: 0.5,
            critical_need_bonus: 0.3,
            bargain_bonus: 0.25,
            spending_bonus: 0.2,
            max_chance: 0.95,
            bargain_ask_ratio: 1.0,
        }
    }
}
