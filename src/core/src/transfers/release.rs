use crate::config::RosterConfig;
use crate::observer::{DecisionEvent, DecisionObserver};
use crate::personality::PersonalityProfile;
use crate::player::RosterPlayer;
use crate::transfers::offer::{PlayerRelease, ReleaseReason};
use log::debug;

/// Young players with enough ceiling are kept regardless of current rating.
pub fn is_protected_prospect(
    player: &RosterPlayer,
    personality: &PersonalityProfile,
    config: &RosterConfig,
) -> bool {
    player.age < config.youth_protection_age
        && player.potential as f32 >= personality.thresholds().promote_youth_rating
}

/// Picks at most one player to cut from an oversized roster: the weakest
/// below the release threshold, older first on equal ratings.
pub fn consider_release(
    roster: &[RosterPlayer],
    personality: &PersonalityProfile,
    config: &RosterConfig,
    observer: &mut dyn DecisionObserver,
) -> Option<PlayerRelease> {
    if roster.len() <= config.ideal_size + config.release_excess_margin {
        return None;
    }

    let release_rating = personality.thresholds().release_rating;

    let weakest = roster
        .iter()
        .filter(|player| player.best_rating() < release_rating)
        .filter(|player| !is_protected_prospect(player, personality, config))
        .min_by(|a, b| {
            a.best_rating()
                .total_cmp(&b.best_rating())
                .then_with(|| b.age.cmp(&a.age))
        })?;

    let rating = weakest.best_rating();
    debug!("releasing player {} rated {:.0}", weakest.id, rating);

    observer.observe(DecisionEvent::ReleaseChosen {
        player_id: weakest.id,
        rating,
    });

    Some(PlayerRelease {
        player_id: weakest.id,
        rating,
        reason: ReleaseReason::BelowThreshold,
    })
}
