use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSkills {
    pub technical: Technical,
    pub mental: Mental,
    pub physical: Physical,
}

impl PlayerSkills {
    pub fn get(&self, skill: Skill) -> f32 {
        match skill {
            Skill::Shooting => self.technical.shooting,
            Skill::Passing => self.technical.passing,
            Skill::BallHandling => self.technical.ball_handling,
            Skill::Hitting => self.technical.hitting,
            Skill::Pitching => self.technical.pitching,
            Skill::Fielding => self.technical.fielding,
            Skill::Tackling => self.technical.tackling,
            Skill::Goalkeeping => self.technical.goalkeeping,
            Skill::Awareness => self.mental.awareness,
            Skill::Composure => self.mental.composure,
            Skill::Teamwork => self.mental.teamwork,
            Skill::WorkRate => self.mental.work_rate,
            Skill::Speed => self.physical.speed,
            Skill::Strength => self.physical.strength,
            Skill::Agility => self.physical.agility,
            Skill::Stamina => self.physical.stamina,
            Skill::Height => self.physical.height,
            Skill::Jumping => self.physical.jumping,
        }
    }

    /// Mean of the three category averages.
    pub fn average(&self) -> f32 {
        (self.technical.average() + self.mental.average() + self.physical.average()) / 3.0
    }

    pub fn all(&self) -> impl Iterator<Item = f32> + '_ {
        Skill::ALL.iter().map(|skill| self.get(*skill))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Skill {
    Shooting,
    Passing,
    BallHandling,
    Hitting,
    Pitching,
    Fielding,
    Tackling,
    Goalkeeping,
    Awareness,
    Composure,
    Teamwork,
    WorkRate,
    Speed,
    Strength,
    Agility,
    Stamina,
    Height,
    Jumping,
}

impl Skill {
    pub const ALL: [Skill; 18] = [
        Skill::Shooting,
        Skill::Passing,
        Skill::BallHandling,
        Skill::Hitting,
        Skill::Pitching,
        Skill::Fielding,
        Skill::Tackling,
        Skill::Goalkeeping,
        Skill::Awareness,
        Skill::Composure,
        Skill::Teamwork,
        Skill::WorkRate,
        Skill::Speed,
        Skill::Strength,
        Skill::Agility,
        Skill::Stamina,
        Skill::Height,
        Skill::Jumping,
    ];
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Technical {
    pub shooting: f32,
    pub passing: f32,
    pub ball_handling: f32,
    pub hitting: f32,
    pub pitching: f32,
    pub fielding: f32,
    pub tackling: f32,
    pub goalkeeping: f32,
}

impl Technical {
    pub fn average(&self) -> f32 {
        (self.shooting
            + self.passing
            + self.ball_handling
            + self.hitting
            + self.pitching
            + self.fielding
            + self.tackling
            + self.goalkeeping)
            / 8.0
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mental {
    pub awareness: f32,
    pub composure: f32,
    pub teamwork: f32,
    pub work_rate: f32,
}

impl Mental {
    pub fn average(&self) -> f32 {
        (self.awareness + self.composure + self.teamwork + self.work_rate) / 4.0
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Physical {
    pub speed: f32,
    pub strength: f32,
    pub agility: f32,
    pub stamina: f32,
    pub height: f32,
    pub jumping: f32,
}

impl Physical {
    pub fn average(&self) -> f32 {
        (self.speed + self.strength + self.agility + self.stamina + self.height + self.jumping)
            / 6.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_averages() {
        let skills = PlayerSkills {
            technical: Technical {
                shooting: 80.0,
                passing: 40.0,
                ..Default::default()
            },
            mental: Mental {
                awareness: 60.0,
                composure: 60.0,
                teamwork: 60.0,
                work_rate: 60.0,
            },
            physical: Physical {
                speed: 30.0,
                strength: 30.0,
                agility: 30.0,
                stamina: 30.0,
                height: 30.0,
                jumping: 30.0,
            },
        };

        assert_eq!(skills.technical.average(), 15.0);
        assert_eq!(skills.mental.average(), 60.0);
        assert_eq!(skills.physical.average(), 30.0);
        assert_eq!(skills.average(), 35.0);
    }

    #[test]
    fn test_get_matches_fields() {
        let mut skills = PlayerSkills::default();
        skills.physical.jumping = 71.0;
        skills.technical.goalkeeping = 12.0;

        assert_eq!(skills.get(Skill::Jumping), 71.0);
        assert_eq!(skills.get(Skill::Goalkeeping), 12.0);
        assert_eq!(skills.all().count(), Skill::ALL.len());
    }
}
