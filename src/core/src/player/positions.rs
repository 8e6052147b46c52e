use crate::player::skills::{PlayerSkills, Skill};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sport {
    Basketball,
    Baseball,
    Soccer,
}

impl Sport {
    pub const ALL: [Sport; 3] = [Sport::Basketball, Sport::Baseball, Sport::Soccer];

    pub fn positions(self) -> &'static [Position] {
        match self {
            Sport::Basketball => &BASKETBALL_POSITIONS,
            Sport::Baseball => &BASEBALL_POSITIONS,
            Sport::Soccer => &SOCCER_POSITIONS,
        }
    }

    /// Places a player in this sport's taxonomy: the position whose skill
    /// profile the player matches best. Ties go to the earlier position.
    pub fn classify(self, skills: &PlayerSkills) -> Position {
        let positions = self.positions();
        let mut best = positions[0];
        let mut best_score = best.score(skills);

        for &position in &positions[1..] {
            let score = position.score(skills);
            if score > best_score {
                best = position;
                best_score = score;
            }
        }

        best
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Sport::Basketball => "basketball",
            Sport::Baseball => "baseball",
            Sport::Soccer => "soccer",
        };
        f.write_str(name)
    }
}

/// Broad athletic role a position asks for. Positions sharing a role across
/// sports can cover for each other's shortages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleProfile {
    Playmaker,
    Athlete,
    Power,
    Specialist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BasketballPosition {
    PointGuard,
    ShootingGuard,
    SmallForward,
    PowerForward,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseballPosition {
    Pitcher,
    Catcher,
    FirstBase,
    SecondBase,
    Shortstop,
    ThirdBase,
    Outfield,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoccerPosition {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Basketball(BasketballPosition),
    Baseball(BaseballPosition),
    Soccer(SoccerPosition),
}

const BASKETBALL_POSITIONS: [Position; 5] = [
    Position::Basketball(BasketballPosition::PointGuard),
    Position::Basketball(BasketballPosition::ShootingGuard),
    Position::Basketball(BasketballPosition::SmallForward),
    Position::Basketball(BasketballPosition::PowerForward),
    Position::Basketball(BasketballPosition::Center),
];

const BASEBALL_POSITIONS: [Position; 7] = [
    Position::Baseball(BaseballPosition::Pitcher),
    Position::Baseball(BaseballPosition::Catcher),
    Position::Baseball(BaseballPosition::FirstBase),
    Position::Baseball(BaseballPosition::SecondBase),
    Position::Baseball(BaseballPosition::Shortstop),
    Position::Baseball(BaseballPosition::ThirdBase),
    Position::Baseball(BaseballPosition::Outfield),
];

const SOCCER_POSITIONS: [Position; 4] = [
    Position::Soccer(SoccerPosition::Goalkeeper),
    Position::Soccer(SoccerPosition::Defender),
    Position::Soccer(SoccerPosition::Midfielder),
    Position::Soccer(SoccerPosition::Forward),
];

impl Position {
    pub fn sport(&self) -> Sport {
        match self {
            Position::Basketball(_) => Sport::Basketball,
            Position::Baseball(_) => Sport::Baseball,
            Position::Soccer(_) => Sport::Soccer,
        }
    }

    pub fn ideal_depth(&self) -> u8 {
        match self {
            Position::Basketball(_) => 2,
            Position::Baseball(BaseballPosition::Pitcher) => 5,
            Position::Baseball(BaseballPosition::Catcher) => 2,
            Position::Baseball(BaseballPosition::Outfield) => 4,
            Position::Baseball(_) => 1,
            Position::Soccer(SoccerPosition::Goalkeeper) => 2,
            Position::Soccer(SoccerPosition::Defender) => 5,
            Position::Soccer(SoccerPosition::Midfielder) => 5,
            Position::Soccer(SoccerPosition::Forward) => 3,
        }
    }

    pub fn role(&self) -> RoleProfile {
        match self {
            Position::Basketball(BasketballPosition::PointGuard)
            | Position::Baseball(BaseballPosition::SecondBase)
            | Position::Soccer(SoccerPosition::Midfielder) => RoleProfile::Playmaker,

            Position::Basketball(BasketballPosition::ShootingGuard)
            | Position::Basketball(BasketballPosition::SmallForward)
            | Position::Baseball(BaseballPosition::Shortstop)
            | Position::Baseball(BaseballPosition::Outfield)
            | Position::Soccer(SoccerPosition::Forward) => RoleProfile::Athlete,

            Position::Basketball(BasketballPosition::PowerForward)
            | Position::Basketball(BasketballPosition::Center)
            | Position::Baseball(BaseballPosition::Catcher)
            | Position::Baseball(BaseballPosition::FirstBase)
            | Position::Baseball(BaseballPosition::ThirdBase)
            | Position::Soccer(SoccerPosition::Defender) => RoleProfile::Power,

            Position::Baseball(BaseballPosition::Pitcher)
            | Position::Soccer(SoccerPosition::Goalkeeper) => RoleProfile::Specialist,
        }
    }

    pub fn is_defensive(&self) -> bool {
        matches!(
            self,
            Position::Basketball(BasketballPosition::PowerForward)
                | Position::Basketball(BasketballPosition::Center)
                | Position::Baseball(BaseballPosition::Catcher)
                | Position::Baseball(BaseballPosition::Shortstop)
                | Position::Soccer(SoccerPosition::Goalkeeper)
                | Position::Soccer(SoccerPosition::Defender)
        )
    }

    /// Skill weights for this position. Each table sums to 1.0.
    pub fn weights(&self) -> &'static [(Skill, f32)] {
        match self {
            Position::Basketball(position) => match position {
                BasketballPosition::PointGuard => &[
                    (Skill::Passing, 0.3),
                    (Skill::BallHandling, 0.3),
                    (Skill::Speed, 0.2),
                    (Skill::Awareness, 0.2),
                ],
                BasketballPosition::ShootingGuard => &[
                    (Skill::Shooting, 0.4),
                    (Skill::Speed, 0.2),
                    (Skill::Agility, 0.2),
                    (Skill::BallHandling, 0.2),
                ],
                BasketballPosition::SmallForward => &[
                    (Skill::Shooting, 0.25),
                    (Skill::Agility, 0.25),
                    (Skill::Speed, 0.2),
                    (Skill::Jumping, 0.15),
                    (Skill::Strength, 0.15),
                ],
                BasketballPosition::PowerForward => &[
                    (Skill::Strength, 0.3),
                    (Skill::Jumping, 0.25),
                    (Skill::Height, 0.25),
                    (Skill::Shooting, 0.2),
                ],
                BasketballPosition::Center => &[
                    (Skill::Height, 0.4),
                    (Skill::Strength, 0.3),
                    (Skill::Jumping, 0.2),
                    (Skill::Awareness, 0.1),
                ],
            },
            Position::Baseball(position) => match position {
                BaseballPosition::Pitcher => &[
                    (Skill::Pitching, 0.6),
                    (Skill::Composure, 0.2),
                    (Skill::Stamina, 0.2),
                ],
                BaseballPosition::Catcher => &[
                    (Skill::Fielding, 0.35),
                    (Skill::Awareness, 0.35),
                    (Skill::Strength, 0.3),
                ],
                BaseballPosition::FirstBase => &[
                    (Skill::Hitting, 0.5),
                    (Skill::Strength, 0.3),
                    (Skill::Fielding, 0.2),
                ],
                BaseballPosition::SecondBase => &[
                    (Skill::Fielding, 0.4),
                    (Skill::Agility, 0.3),
                    (Skill::Hitting, 0.3),
                ],
                BaseballPosition::Shortstop => &[
                    (Skill::Fielding, 0.4),
                    (Skill::Speed, 0.3),
                    (Skill::Agility, 0.3),
                ],
                BaseballPosition::ThirdBase => &[
                    (Skill::Fielding, 0.35),
                    (Skill::Strength, 0.3),
                    (Skill::Hitting, 0.35),
                ],
                BaseballPosition::Outfield => &[
                    (Skill::Speed, 0.4),
                    (Skill::Hitting, 0.3),
                    (Skill::Fielding, 0.3),
                ],
            },
            Position::Soccer(position) => match position {
                SoccerPosition::Goalkeeper => &[
                    (Skill::Goalkeeping, 0.6),
                    (Skill::Agility, 0.2),
                    (Skill::Composure, 0.2),
                ],
                SoccerPosition::Defender => &[
                    (Skill::Tackling, 0.4),
                    (Skill::Strength, 0.3),
                    (Skill::Awareness, 0.3),
                ],
                SoccerPosition::Midfielder => &[
                    (Skill::Passing, 0.4),
                    (Skill::Stamina, 0.3),
                    (Skill::Teamwork, 0.3),
                ],
                SoccerPosition::Forward => &[
                    (Skill::Shooting, 0.45),
                    (Skill::Speed, 0.35),
                    (Skill::Composure, 0.2),
                ],
            },
        }
    }

    pub fn score(&self, skills: &PlayerSkills) -> f32 {
        self.weights()
            .iter()
            .map(|(skill, weight)| skills.get(*skill) * weight)
            .sum()
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Position::Basketball(position) => match position {
                BasketballPosition::PointGuard => "PG",
                BasketballPosition::ShootingGuard => "SG",
                BasketballPosition::SmallForward => "SF",
                BasketballPosition::PowerForward => "PF",
                BasketballPosition::Center => "C",
            },
            Position::Baseball(position) => match position {
                BaseballPosition::Pitcher => "P",
                BaseballPosition::Catcher => "C",
                BaseballPosition::FirstBase => "1B",
                BaseballPosition::SecondBase => "2B",
                BaseballPosition::Shortstop => "SS",
                BaseballPosition::ThirdBase => "3B",
                BaseballPosition::Outfield => "OF",
            },
            Position::Soccer(position) => match position {
                SoccerPosition::Goalkeeper => "GK",
                SoccerPosition::Defender => "DEF",
                SoccerPosition::Midfielder => "MID",
                SoccerPosition::Forward => "FWD",
            },
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.sport(), self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        for sport in Sport::ALL {
            for position in sport.positions() {
                let total: f32 = position.weights().iter().map(|(_, w)| w).sum();
                assert!((total - 1.0).abs() < 1e-5, "{} weights sum to {}", position, total);
            }
        }
    }

    #[test]
    fn test_positions_belong_to_their_sport() {
        for sport in Sport::ALL {
            assert!(sport.positions().iter().all(|p| p.sport() == sport));
        }
    }

    #[test]
    fn test_ideal_depth_totals() {
        let total = |sport: Sport| -> u32 { sport.positions().iter().map(|p| p.ideal_depth() as u32).sum() };

        assert_eq!(total(Sport::Basketball), 10);
        assert_eq!(total(Sport::Baseball), 15);
        assert_eq!(total(Sport::Soccer), 15);
    }

    #[test]
    fn test_classify_tall_strong_player_as_center() {
        let mut skills = PlayerSkills::default();
        skills.physical.height = 95.0;
        skills.physical.strength = 85.0;
        skills.physical.jumping = 60.0;

        assert_eq!(
            Sport::Basketball.classify(&skills),
            Position::Basketball(BasketballPosition::Center)
        );
    }

    #[test]
    fn test_classify_keeper() {
        let mut skills = PlayerSkills::default();
        skills.technical.goalkeeping = 80.0;
        skills.physical.agility = 50.0;

        assert_eq!(
            Sport::Soccer.classify(&skills),
            Position::Soccer(SoccerPosition::Goalkeeper)
        );
    }

    #[test]
    fn test_classify_blank_player_falls_to_first_position() {
        let skills = PlayerSkills::default();

        assert_eq!(
            Sport::Baseball.classify(&skills),
            Position::Baseball(BaseballPosition::Pitcher)
        );
    }
}
