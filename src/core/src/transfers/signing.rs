use crate::config::EngineConfig;
use crate::context::DecisionContext;
use crate::evaluation::{evaluate_player, PlayerEvaluation};
use crate::needs::{TeamNeeds, UrgencyTier};
use crate::observer::{DecisionEvent, DecisionObserver};
use crate::personality::PersonalityProfile;
use crate::transfers::offer::{contract_years_for_age, SigningIntent};
use crate::transfers::target::TransferTargetInfo;
use log::debug;

/// The signing team's view of the free-agent pool for one week.
pub struct SigningView<'a> {
    pub team_id: u32,
    pub roster_size: usize,
    pub needs: &'a TeamNeeds,
    pub personality: &'a PersonalityProfile,
    pub context: &'a DecisionContext,
    pub config: &'a EngineConfig,
}

impl SigningView<'_> {
    fn evaluate(&self, candidate: &TransferTargetInfo) -> PlayerEvaluation {
        evaluate_player(
            candidate,
            Some(self.needs),
            self.context,
            self.personality,
            self.team_id,
        )
    }

    fn urgency_at(&self, evaluation: &PlayerEvaluation) -> Option<UrgencyTier> {
        self.needs.need_for(evaluation.position).map(|need| need.urgency)
    }
}

fn need_bonus(urgency: Option<UrgencyTier>) -> f64 {
    match urgency {
        Some(UrgencyTier::Critical) => 20.0,
        Some(UrgencyTier::Moderate) => 10.0,
        _ => 0.0,
    }
}

/// A free agent good enough to sign who would play a critically short
/// position. While one exists, the team does not go shopping for unlisted
/// players.
pub fn fills_critical_need(candidate: &TransferTargetInfo, view: &SigningView<'_>) -> bool {
    let evaluation = view.evaluate(candidate);

    evaluation.perceived_rating >= view.personality.thresholds().sign_rating
        && view.urgency_at(&evaluation) == Some(UrgencyTier::Critical)
}

pub fn evaluate_signing(
    candidate: &TransferTargetInfo,
    view: &SigningView<'_>,
) -> Option<SigningIntent> {
    if view.roster_size >= view.config.roster.max_size {
        return None;
    }

    let evaluation = view.evaluate(candidate);
    let urgency = view.urgency_at(&evaluation);

    if evaluation.perceived_rating < view.personality.thresholds().sign_rating
        && urgency != Some(UrgencyTier::Critical)
    {
        return None;
    }

    let salary_offer = candidate.salary_expectation * (0.9 + 0.2 * view.personality.spending());
    if salary_offer > view.context.budget * view.config.bidding.signing_affordability_ratio {
        return None;
    }

    let priority = evaluation.composite + need_bonus(urgency);

    Some(SigningIntent {
        player_id: candidate.player_id,
        sport: evaluation.sport,
        salary_offer,
        contract_years: contract_years_for_age(candidate.age),
        priority,
        rationale: format!(
            "{} {} rated {:.0}, priority {:.1}",
            evaluation.sport,
            evaluation.position.short_name(),
            evaluation.perceived_rating,
            priority
        ),
    })
}

/// Evaluates every free agent and keeps the single highest-priority signing.
pub fn best_signing(
    free_agents: &[TransferTargetInfo],
    view: &SigningView<'_>,
    observer: &mut dyn DecisionObserver,
) -> Option<SigningIntent> {
    let best = free_agents
        .iter()
        .filter_map(|candidate| evaluate_signing(candidate, view))
        .reduce(|best, intent| if intent.priority > best.priority { intent } else { best })?;

    debug!(
        "team {} signs free agent {} ({})",
        view.team_id, best.player_id, best.rationale
    );

    observer.observe(DecisionEvent::SigningChosen {
        player_id: best.player_id,
        priority: best.priority,
    });

    Some(best)
}
