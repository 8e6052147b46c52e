use crate::config::EngineConfig;
use crate::observer::{DecisionEvent, DecisionObserver};
use crate::personality::PersonalityProfile;
use crate::player::RosterPlayer;
use crate::transfers::offer::{IncomingOffer, OfferDecision, OfferResponse};

/// Lowest fee we take for this player without haggling. A listed player's
/// asking price caps it.
pub fn minimum_acceptable_offer(
    player: &RosterPlayer,
    personality: &PersonalityProfile,
    config: &EngineConfig,
) -> f64 {
    let multipliers = personality.multipliers_with_star_premium(config.selling.star_premium);
    let is_star = player.is_star(config.roster.star_rating);
    let minimum = player.market_value * multipliers.selling_for(is_star);

    match player.asking_price {
        Some(asking) if asking < minimum => asking,
        _ => minimum,
    }
}

pub fn evaluate_incoming_offer(
    offer: &IncomingOffer,
    player: &RosterPlayer,
    personality: &PersonalityProfile,
    config: &EngineConfig,
    observer: &mut dyn DecisionObserver,
) -> OfferResponse {
    let minimum = minimum_acceptable_offer(player, personality, config);
    let decision = decide(offer.amount, player, minimum, config);

    observer.observe(DecisionEvent::OfferAnswered {
        offer_id: offer.offer_id,
        player_id: offer.player_id,
        amount: offer.amount,
        minimum_acceptable: minimum,
        decision,
    });

    OfferResponse::new(offer, decision)
}

fn decide(
    amount: f64,
    player: &RosterPlayer,
    minimum: f64,
    config: &EngineConfig,
) -> OfferDecision {
    let selling = &config.selling;

    // A listing is a standing commitment to sell at the asking price.
    if let Some(asking) = player.asking_price {
        if amount >= asking {
            return OfferDecision::Accept { amount };
        }
    }

    let listed = player.is_listed();
    let lowball_ratio = if listed {
        selling.listed_lowball_ratio
    } else {
        selling.unlisted_lowball_ratio
    };

    if amount < player.market_value * lowball_ratio {
        return OfferDecision::Reject;
    }

    if amount >= minimum {
        return OfferDecision::Accept { amount };
    }

    let band = if listed {
        selling.listed_counter_band
    } else {
        selling.unlisted_counter_band
    };

    if amount >= minimum * band {
        let counter = player
            .asking_price
            .unwrap_or(minimum * selling.unlisted_counter_markup);
        return OfferDecision::Counter { amount: counter };
    }

    OfferDecision::Reject
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{DecisionTrace, NullObserver};
    use crate::player::test_players::roster_player;
    use crate::player::SportRatings;

    fn offer(amount: f64) -> IncomingOffer {
        IncomingOffer {
            offer_id: 1,
            player_id: 5,
            from_team_id: 40,
            amount,
        }
    }

    fn player(rating: f32, market_value: f64, asking_price: Option<f64>) -> RosterPlayer {
        let mut player = roster_player(5, 27, SportRatings::new(rating, 40.0, 40.0));
        player.market_value = market_value;
        player.asking_price = asking_price;
        player
    }

    fn respond(
        offer_amount: f64,
        player: &RosterPlayer,
        personality: &PersonalityProfile,
    ) -> OfferDecision {
        evaluate_incoming_offer(
            &offer(offer_amount),
            player,
            personality,
            &EngineConfig::default(),
            &mut NullObserver,
        )
        .decision
    }

    #[test]
    fn test_asking_price_always_accepted() {
        let listed = player(70.0, 1_000_000.0, Some(1_400_000.0));

        for spending in [0, 25, 50, 75, 100] {
            for risk in [0, 50, 100] {
                let personality = PersonalityProfile::new(50, spending, 50, risk);
                assert_eq!(
                    respond(1_400_000.0, &listed, &personality),
                    OfferDecision::Accept { amount: 1_400_000.0 }
                );
            }
        }
    }

    #[test]
    fn test_conservative_veteran_listed_below_market() {
        let personality = PersonalityProfile::new(30, 30, 60, 20);
        let mut veteran = player(68.0, 4_000_000.0, Some(3_600_000.0));
        veteran.age = 30;
        let config = EngineConfig::default();

        let selling = personality.multipliers().selling_for(false);
        let minimum = minimum_acceptable_offer(&veteran, &personality, &config);

        assert!((0.85..=0.98).contains(&selling));
        assert!((3_400_000.0..=3_900_000.0).contains(&minimum));
        assert_eq!(
            respond(3_600_000.0, &veteran, &personality),
            OfferDecision::Accept { amount: 3_600_000.0 }
        );
    }

    #[test]
    fn test_unlisted_lowball_rejected_without_counter() {
        let personality = PersonalityProfile::default();
        let unlisted = player(60.0, 1_000_000.0, None);

        assert_eq!(respond(740_000.0, &unlisted, &personality), OfferDecision::Reject);
    }

    #[test]
    fn test_unlisted_counter_and_accept() {
        let personality = PersonalityProfile::default();
        let unlisted = player(60.0, 1_000_000.0, None);

        assert_eq!(
            respond(1_000_000.0, &unlisted, &personality),
            OfferDecision::Accept { amount: 1_000_000.0 }
        );

        match respond(800_000.0, &unlisted, &personality) {
            OfferDecision::Counter { amount } => assert!((amount - 1_100_000.0).abs() < 1e-6),
            other => panic!("expected counter, got {:?}", other),
        }
    }

    #[test]
    fn test_star_holdout_rejects_mid_offers() {
        let personality = PersonalityProfile::default();
        let star = player(85.0, 1_000_000.0, None);

        assert_eq!(respond(780_000.0, &star, &personality), OfferDecision::Reject);
        assert!(matches!(
            respond(1_000_000.0, &star, &personality),
            OfferDecision::Counter { .. }
        ));
    }

    #[test]
    fn test_listed_counter_quotes_asking_price() {
        let personality = PersonalityProfile::default();
        let listed = player(60.0, 1_000_000.0, Some(1_200_000.0));

        assert_eq!(
            respond(650_000.0, &listed, &personality),
            OfferDecision::Counter { amount: 1_200_000.0 }
        );
        assert_eq!(respond(550_000.0, &listed, &personality), OfferDecision::Reject);
        assert_eq!(respond(450_000.0, &listed, &personality), OfferDecision::Reject);
    }

    #[test]
    fn test_offer_is_traced() {
        let mut trace = DecisionTrace::new();
        let listed = player(60.0, 1_000_000.0, Some(1_200_000.0));

        evaluate_incoming_offer(
            &offer(650_000.0),
            &listed,
            &PersonalityProfile::default(),
            &EngineConfig::default(),
            &mut trace,
        );

        assert_eq!(trace.len(), 1);
        assert!(matches!(
            trace.events[0],
            DecisionEvent::OfferAnswered { offer_id: 1, player_id: 5, .. }
        ));
    }
}
