use serde::{Deserialize, Serialize};

/// Coarse label derived from risk tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    Conservative,
    Balanced,
    Aggressive,
}

/// A franchise's management personality. Traits are on a 0-100 scale and
/// stay fixed for a season.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    pub youth_focus: u8,
    pub spending_aggression: u8,
    pub defensive_preference: u8,
    pub risk_tolerance: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub release_rating: f32,
    pub sign_rating: f32,
    pub promote_youth_rating: f32,
    pub starter_min_rating: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Multipliers {
    pub spending: f64,
    pub selling: f64,
    pub selling_star: f64,
    pub aging_threshold: u8,
}

impl Multipliers {
    pub fn selling_for(&self, is_star: bool) -> f64 {
        if is_star { self.selling_star } else { self.selling }
    }
}

impl Default for PersonalityProfile {
    fn default() -> Self {
        PersonalityProfile {
            youth_focus: 50,
            spending_aggression: 50,
            defensive_preference: 50,
            risk_tolerance: 50,
        }
    }
}

impl PersonalityProfile {
    pub fn new(
        youth_focus: u8,
        spending_aggression: u8,
        defensive_preference: u8,
        risk_tolerance: u8,
    ) -> Self {
        PersonalityProfile {
            youth_focus,
            spending_aggression,
            defensive_preference,
            risk_tolerance,
        }
    }

    pub fn archetype(&self) -> Archetype {
        match self.risk_tolerance {
            0..=33 => Archetype::Conservative,
            67.. => Archetype::Aggressive,
            _ => Archetype::Balanced,
        }
    }

    pub fn youth(&self) -> f64 {
        self.youth_focus as f64 / 100.0
    }

    pub fn spending(&self) -> f64 {
        self.spending_aggression as f64 / 100.0
    }

    pub fn defensive(&self) -> f64 {
        self.defensive_preference as f64 / 100.0
    }

    pub fn risk(&self) -> f64 {
        self.risk_tolerance as f64 / 100.0
    }

    /// Rating bars for roster moves. Conservative teams keep more of their
    /// players and demand more from signings; aggressive teams churn.
    pub fn thresholds(&self) -> Thresholds {
        let (release, sign, promote, starter) = match self.archetype() {
            Archetype::Conservative => (35.0, 60.0, 55.0, 65.0),
            Archetype::Balanced => (40.0, 55.0, 50.0, 60.0),
            Archetype::Aggressive => (45.0, 50.0, 45.0, 55.0),
        };

        let youth_shift = (self.youth_focus as f32 - 50.0) / 10.0;

        Thresholds {
            release_rating: release,
            sign_rating: sign,
            promote_youth_rating: promote - youth_shift,
            starter_min_rating: starter,
        }
    }

    /// Money and age coefficients. Low spending aggression means a team is
    /// happy to cash in on players; high spending aggression means it holds
    /// out for a premium. Stars always carry an extra holdout premium.
    pub fn multipliers(&self) -> Multipliers {
        self.multipliers_with_star_premium(1.15)
    }

    pub fn multipliers_with_star_premium(&self, star_premium: f64) -> Multipliers {
        let spending = self.spending();
        let selling = 0.85 + spending * 0.3;

        Multipliers {
            spending: 0.8 + spending * 0.5,
            selling,
            selling_star: selling * star_premium,
            aging_threshold: (32.0 - self.youth_focus as f64 * 0.04).round() as u8,
        }
    }
}
