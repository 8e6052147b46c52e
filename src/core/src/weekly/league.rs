use crate::config::EngineConfig;
use crate::context::{DecisionContext, SeasonCalendar};
use crate::error::{check_amount, InputError};
use crate::observer::LogObserver;
use crate::player::SportRatingCalculator;
use crate::random::RollSource;
use crate::transfers::{IncomingOffer, MarketSnapshot};
use crate::weekly::input::{validate_market, validate_offers, TeamSnapshot};
use crate::weekly::orchestrator::{AIWeeklyActions, WeeklyOrchestrator};
use chrono::NaiveDate;
use log::info;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueTeamWeek {
    pub team: TeamSnapshot,
    pub context: DecisionContext,
    #[serde(default)]
    pub incoming_offers: Vec<IncomingOffer>,
    /// Game date of this team's decision. When the league carries a
    /// calendar, it overrides `context.week`.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Every AI team of a league for one week, sharing one market snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueWeek {
    /// Mixed into every keyed roll; a new session gives new outcomes.
    #[serde(default)]
    pub session_seed: u64,
    #[serde(default)]
    pub market: MarketSnapshot,
    #[serde(default)]
    pub calendar: Option<SeasonCalendar>,
    pub teams: Vec<LeagueTeamWeek>,
}

impl LeagueWeek {
    pub fn validate(&self) -> Result<(), InputError> {
        let mut seen = HashSet::with_capacity(self.teams.len());

        for entry in &self.teams {
            let team_id = entry.team.team_id;
            if !seen.insert(team_id) {
                return Err(InputError::DuplicateTeam { team_id });
            }

            entry.team.validate()?;
            check_amount("budget", || format!("team {}", team_id), entry.context.budget)?;
            validate_offers(&entry.incoming_offers)?;
        }

        validate_market(&self.market)
    }

    /// Derives each dated team's decision week from the league calendar.
    pub fn resolve_weeks(&mut self) {
        let Some(calendar) = self.calendar else {
            return;
        };

        for entry in &mut self.teams {
            if let Some(date) = entry.date {
                entry.context.week = calendar.week_of(date);
            }
        }
    }

    pub fn refresh_ratings(&mut self, calculator: &dyn SportRatingCalculator) {
        for entry in &mut self.teams {
            entry.team.refresh_ratings(calculator);
        }
        for target in self.market.players_mut() {
            target.refresh_ratings(calculator);
        }
    }
}

/// Runs every team's week in parallel. Teams share nothing mutable, so the
/// result is the same as a sequential run, in input order.
pub fn process_league_week(
    league: &LeagueWeek,
    config: &EngineConfig,
    rolls: &dyn RollSource,
) -> Vec<AIWeeklyActions> {
    let orchestrator = WeeklyOrchestrator::new(config, rolls);

    let actions: Vec<AIWeeklyActions> = league
        .teams
        .par_iter()
        .map(|entry| {
            let mut observer = LogObserver::new(entry.team.team_id);

            orchestrator.process_team_week(
                &entry.team,
                &entry.context,
                &league.market,
                &entry.incoming_offers,
                &mut observer,
            )
        })
        .collect();

    let active = actions.iter().filter(|a| a.active).count();
    info!("league week processed: {} teams, {} active", actions.len(), active);

    actions
}
