use crate::config::EngineConfig;
use crate::context::DecisionContext;
use crate::needs::{AgingUrgency, PositionNeed, TeamNeeds};
use crate::observer::{DecisionEvent, DecisionObserver};
use crate::personality::{Archetype, PersonalityProfile};
use crate::player::RosterPlayer;
use crate::transfers::offer::{ListingReason, TransferListing};
use itertools::Itertools;
use log::debug;
use std::cmp::Reverse;

/// Salary more than this multiple of the roster average is a mismatch for a
/// player below the starter bar.
const SALARY_MISMATCH_RATIO: f64 = 1.5;
/// Budget below this share of salary commitments puts the team under pressure.
const BUDGET_PRESSURE_RATIO: f64 = 0.1;

pub struct ListingView<'a> {
    pub roster: &'a [RosterPlayer],
    pub needs: &'a TeamNeeds,
    pub personality: &'a PersonalityProfile,
    pub context: &'a DecisionContext,
    pub config: &'a EngineConfig,
    pub salary_commitments: f64,
}

impl ListingView<'_> {
    fn is_star(&self, player: &RosterPlayer) -> bool {
        player.is_star(self.config.roster.star_rating)
    }

    fn asking_price(&self, player: &RosterPlayer) -> f64 {
        let multipliers = self
            .personality
            .multipliers_with_star_premium(self.config.selling.star_premium);

        player.market_value * multipliers.selling_for(self.is_star(player))
    }

    fn unlisted(&self) -> impl Iterator<Item = &RosterPlayer> {
        self.roster.iter().filter(|player| !player.is_listed())
    }

    fn excess_depth(&self) -> Option<&RosterPlayer> {
        let margin = self.config.roster.excess_depth_margin;
        let excess = |need: &PositionNeed| need.current_count.saturating_sub(need.ideal_count as usize);

        self.needs
            .positions
            .iter()
            .filter(|need| need.current_count > need.ideal_count as usize + margin)
            .sorted_by_key(|need| Reverse(excess(*need)))
            .find_map(|need| {
                let sport = need.position.sport();

                self.unlisted()
                    .filter(|player| player.position(sport) == need.position && !self.is_star(player))
                    .min_by(|a, b| a.ratings.get(sport).total_cmp(&b.ratings.get(sport)))
            })
    }

    fn aging_decline(&self) -> Option<&RosterPlayer> {
        if self.personality.youth() < 0.5 && self.personality.archetype() != Archetype::Aggressive {
            return None;
        }

        self.needs
            .aging
            .iter()
            .filter(|concern| concern.urgency == AgingUrgency::Immediate)
            .find_map(|concern| self.unlisted().find(|player| player.id == concern.player_id))
    }

    fn salary_mismatch(&self) -> Option<&RosterPlayer> {
        if self.personality.spending_aggression >= 60 || self.roster.is_empty() {
            return None;
        }

        let average_salary = self.roster.iter().map(|p| p.salary).sum::<f64>() / self.roster.len() as f64;
        let starter_min = self.personality.thresholds().starter_min_rating;

        self.unlisted()
            .filter(|player| player.salary > average_salary * SALARY_MISMATCH_RATIO)
            .filter(|player| player.best_rating() < starter_min)
            .max_by(|a, b| a.salary.total_cmp(&b.salary))
    }

    fn budget_pressure(&self) -> Option<&RosterPlayer> {
        if self.personality.archetype() == Archetype::Aggressive
            || self.context.budget >= self.salary_commitments * BUDGET_PRESSURE_RATIO
        {
            return None;
        }

        self.unlisted()
            .filter(|player| !self.is_star(player))
            .max_by(|a, b| a.salary.total_cmp(&b.salary))
    }
}

/// Picks at most one player to put up for sale, trying each reason in
/// priority order.
pub fn consider_listing(
    view: &ListingView<'_>,
    observer: &mut dyn DecisionObserver,
) -> Option<TransferListing> {
    let (player, reason) = view
        .excess_depth()
        .map(|player| (player, ListingReason::ExcessDepth))
        .or_else(|| view.aging_decline().map(|player| (player, ListingReason::AgingDecline)))
        .or_else(|| view.salary_mismatch().map(|player| (player, ListingReason::SalaryMismatch)))
        .or_else(|| view.budget_pressure().map(|player| (player, ListingReason::BudgetPressure)))?;

    let asking_price = view.asking_price(player);
    debug!("listing player {} at {:.0} ({:?})", player.id, asking_price, reason);

    observer.observe(DecisionEvent::ListingChosen {
        player_id: player.id,
        asking_price,
        reason,
    });

    Some(TransferListing {
        player_id: player.id,
        asking_price,
        reason,
    })
}
